//! Simulated Soroban contract submissions.
//!
//! Each function logs the call it would make against the factoring
//! contract and returns a fabricated success. Hashes are derived from the
//! call arguments, so the same operation always yields the same hash.

use serde::Serialize;

use crate::digest_hex;

/// Assumed ledger close interval on Stellar, seconds.
const LEDGER_CLOSE_SECS: u64 = 5;

/// Fabricated result of a contract submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulatedTx {
    pub tx_hash: String,
    /// Ledger sequence the transaction would have landed in
    pub ledger: u64,
}

fn submit(op: &'static str, args: &[&str], now: u64) -> SimulatedTx {
    let ledger = now / LEDGER_CLOSE_SECS;
    let mut parts = vec![op];
    parts.extend_from_slice(args);
    let timestamp = now.to_string();
    parts.push(timestamp.as_str());

    let tx_hash = digest_hex(&parts);
    tracing::info!(op, ?args, %tx_hash, ledger, "simulated soroban submission");

    SimulatedTx { tx_hash, ledger }
}

pub fn create_invoice(invoice_id: &str, sme_id: &str, amount: u64, now: u64) -> SimulatedTx {
    submit(
        "create_invoice",
        &[invoice_id, sme_id, &amount.to_string()],
        now,
    )
}

pub fn fund_invoice(invoice_id: &str, lender_id: &str, advance: u64, now: u64) -> SimulatedTx {
    submit(
        "fund_invoice",
        &[invoice_id, lender_id, &advance.to_string()],
        now,
    )
}

pub fn settle_invoice(invoice_id: &str, amount_received: u64, now: u64) -> SimulatedTx {
    submit(
        "settle_invoice",
        &[invoice_id, &amount_received.to_string()],
        now,
    )
}

pub fn cancel_invoice(invoice_id: &str, now: u64) -> SimulatedTx {
    submit("cancel_invoice", &[invoice_id], now)
}
