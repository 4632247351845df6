//! Wire-facing domain types.
//!
//! Amounts are whole USDC units. Timestamps are unix seconds. Serialized
//! field names are camelCase to match the dashboard clients.

use serde::{Deserialize, Serialize};

use crate::constants::{FULL_ON_TIME_RATE_BPS, INITIAL_RISK_SCORE};

/// Lifecycle status of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    /// Created, waiting for funding
    Created,
    /// Funded by a liquidity provider
    Funded,
    /// Payment received and distributed
    Settled,
    /// Cancelled before funding
    Cancelled,
}

/// Risk classification shown to investors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalletKind {
    Sme,
    Lender,
    Admin,
    Treasury,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    /// Identifier of the form `INV-001`
    pub id: String,
    pub sme_id: String,
    pub sme_name: String,
    pub sme_wallet: String,
    pub payer_id: String,
    pub payer_name: String,
    /// Face amount in USDC
    pub amount: u64,
    /// Amount advanced to the SME on funding (typically 90% of face)
    pub advance_amount: u64,
    /// Lender fee in basis points (200 = 2%)
    pub fee_bps: u32,
    pub status: InvoiceStatus,
    /// Country code (MX, CO, BR, ...)
    pub country: String,
    pub industry: String,
    pub risk_level: RiskLevel,
    /// Due date, unix seconds
    pub due_date: u64,
    pub created_at: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub funded_at: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settled_at: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lender_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lender_wallet: Option<String>,
    /// Simulated local collection account (CLABE/CBU/PIX, by country)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settlement_result: Option<SettlementResult>,
}

/// Outcome of distributing a received payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettlementResult {
    pub invoice_id: String,
    /// Principal plus fee paid to the lender
    pub lender_amount: u64,
    /// Remainder paid to the SME
    pub sme_amount: u64,
    pub protocol_fee: u64,
    pub total_received: u64,
    pub timestamp: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_hash: Option<String>,
}

/// Aggregate settlement history for one SME, keyed by `sme_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmeReputation {
    pub sme_id: String,
    pub total_invoices: u32,
    pub settled_invoices: u32,
    /// Total settled face volume in USDC
    pub total_volume: u64,
    pub avg_settlement_days: u32,
    /// On-time settlement rate in basis points (10000 = 100%)
    pub on_time_rate_bps: u32,
    /// Lower is better; clamped to a floor of 100
    pub risk_score: u32,
}

impl SmeReputation {
    /// Fresh reputation for an SME with no history.
    pub fn new(sme_id: impl Into<String>) -> Self {
        Self {
            sme_id: sme_id.into(),
            total_invoices: 0,
            settled_invoices: 0,
            total_volume: 0,
            avg_settlement_days: 0,
            on_time_rate_bps: FULL_ON_TIME_RATE_BPS,
            risk_score: INITIAL_RISK_SCORE,
        }
    }
}

/// Aggregate figures served to the dashboards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtocolStats {
    pub total_invoices: u64,
    /// Sum of advances across invoices that reached funding
    pub total_volume_funded: u64,
    /// Sum of face amounts across settled invoices
    pub total_volume_settled: u64,
    pub active_invoices: u64,
    pub pending_invoices: u64,
    pub total_funded: u64,
    #[serde(rename = "averageAPY")]
    pub average_apy: u32,
    #[serde(rename = "totalSMEs")]
    pub total_smes: u64,
}

/// Simulated wallet. Balances are never reconciled against any ledger and
/// a lender balance may go negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    pub public_key: String,
    pub balance: i64,
    #[serde(rename = "type")]
    pub kind: WalletKind,
}
