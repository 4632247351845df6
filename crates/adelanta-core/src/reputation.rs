//! SME reputation model: counters updated on invoice creation and
//! settlement, a derived risk score, and the risk classification attached
//! to new invoices.

use crate::constants::{
    BPS_PRECISION, INITIAL_RISK_SCORE, MIN_RISK_SCORE, NEW_SME_HIGH_RISK_AMOUNT,
    RISK_VOLUME_DIVISOR, SECONDS_PER_DAY, SETTLEMENT_RATE_WEIGHT,
};
use crate::types::{RiskLevel, SmeReputation};

/// Risk score for an SME's settlement history. Lower is better.
///
/// score = max(100, floor(500 - rate*300 - volume/10000))
/// with rate = settled/total. The floor applies to the whole expression:
/// both terms are brought over the common denominator `total * 10000`
/// before dividing, so per-term truncation cannot shift the result.
pub fn risk_score(settled_invoices: u32, total_invoices: u32, total_volume: u64) -> u32 {
    if total_invoices == 0 {
        return INITIAL_RISK_SCORE;
    }

    let settled = settled_invoices as i128;
    let total = total_invoices as i128;
    let volume = total_volume as i128;
    let divisor = RISK_VOLUME_DIVISOR as i128;

    let denom = total * divisor;
    let num = INITIAL_RISK_SCORE as i128 * denom
        - SETTLEMENT_RATE_WEIGHT as i128 * settled * divisor
        - volume * total;

    if num <= MIN_RISK_SCORE as i128 * denom {
        MIN_RISK_SCORE
    } else {
        (num / denom) as u32
    }
}

/// Bump counters when an SME creates an invoice.
pub fn record_created(rep: &mut SmeReputation) {
    rep.total_invoices += 1;
}

/// Fold a settlement into the SME's history and recompute the risk score.
///
/// # Arguments
/// * `amount` - Settled face amount
/// * `created_at` / `due_date` / `settled_at` - Invoice timestamps, unix seconds
pub fn record_settled(
    rep: &mut SmeReputation,
    amount: u64,
    created_at: u64,
    due_date: u64,
    settled_at: u64,
) {
    rep.settled_invoices += 1;
    rep.total_volume = rep.total_volume.saturating_add(amount);

    // Running on-time rate. The first settlement keeps the optimistic
    // initial rate; later ones fold in whether payment beat the due date.
    let is_on_time = settled_at <= due_date;
    if rep.settled_invoices > 1 {
        let settled = rep.settled_invoices as u64;
        let prev_on_time = rep.on_time_rate_bps as u64 * (settled - 1) / BPS_PRECISION;
        let on_time = if is_on_time { prev_on_time + 1 } else { prev_on_time };
        rep.on_time_rate_bps = (on_time * BPS_PRECISION / settled) as u32;
    }

    // Running mean of days from creation to settlement.
    let days = settled_at.saturating_sub(created_at) / SECONDS_PER_DAY;
    let n = rep.settled_invoices as u64;
    rep.avg_settlement_days = ((rep.avg_settlement_days as u64 * (n - 1) + days) / n) as u32;

    rep.risk_score = risk_score(rep.settled_invoices, rep.total_invoices, rep.total_volume);
}

/// Risk classification for a new invoice, from the SME's reputation (if any)
/// and the face amount.
pub fn risk_level(rep: Option<&SmeReputation>, amount: u64) -> RiskLevel {
    let Some(rep) = rep else {
        return if amount > NEW_SME_HIGH_RISK_AMOUNT {
            RiskLevel::High
        } else {
            RiskLevel::Medium
        };
    };

    if rep.risk_score < 300 && rep.settled_invoices >= 3 {
        RiskLevel::Low
    } else if rep.risk_score < 500 || rep.settled_invoices >= 1 {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    }
}
