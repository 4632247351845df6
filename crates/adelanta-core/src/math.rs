//! Pure settlement arithmetic.
//! All functions are deterministic, use fixed-point basis-point math, and
//! widen through u128 so intermediate products cannot overflow.

use crate::constants::BPS_PRECISION;
use crate::error::AdelantaError;

/// Multiply two u64 values and divide by a third, rounding down.
/// Returns None on overflow or when `c` is zero.
pub fn mul_div_down(a: u64, b: u64, c: u64) -> Option<u64> {
    if c == 0 {
        return None;
    }

    let result = (a as u128).checked_mul(b as u128)?.checked_div(c as u128)?;

    u64::try_from(result).ok()
}

/// Amount advanced to the SME up front.
///
/// # Arguments
/// * `amount` - Invoice face amount in USDC
/// * `advance_bps` - Advance rate in basis points (9000 = 90%)
///
/// # Returns
/// The floored advance, or None on overflow.
pub fn advance_amount(amount: u64, advance_bps: u32) -> Option<u64> {
    mul_div_down(amount, advance_bps as u64, BPS_PRECISION)
}

/// How a received payment is distributed at settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettlementSplit {
    /// Fee earned by the lender on the advance
    pub lender_fee: u64,
    /// Principal plus fee owed to the lender
    pub lender_amount: u64,
    /// Protocol fee on the face amount
    pub protocol_fee: u64,
    /// Remainder owed to the SME
    pub sme_amount: u64,
}

/// Split a received payment between lender, SME, and protocol.
///
/// Rejects when `amount_received` does not cover the face amount, or when
/// it cannot cover the lender payout plus protocol fee (possible only with
/// an advance rate near 100%). On success the three shares sum exactly to
/// `amount_received`.
///
/// # Arguments
/// * `amount` - Invoice face amount
/// * `advance` - Amount that was advanced to the SME
/// * `fee_bps` - Lender fee in basis points
/// * `protocol_fee_bps` - Protocol fee in basis points
/// * `amount_received` - Payment actually collected from the payer
pub fn settlement_split(
    amount: u64,
    advance: u64,
    fee_bps: u32,
    protocol_fee_bps: u32,
    amount_received: u64,
) -> Result<SettlementSplit, AdelantaError> {
    if amount_received < amount {
        return Err(AdelantaError::InsufficientSettlement);
    }

    let lender_fee = mul_div_down(advance, fee_bps as u64, BPS_PRECISION)
        .ok_or(AdelantaError::Overflow)?;
    let lender_amount = advance
        .checked_add(lender_fee)
        .ok_or(AdelantaError::Overflow)?;
    let protocol_fee = mul_div_down(amount, protocol_fee_bps as u64, BPS_PRECISION)
        .ok_or(AdelantaError::Overflow)?;

    let sme_amount = amount_received
        .checked_sub(lender_amount)
        .and_then(|rest| rest.checked_sub(protocol_fee))
        .ok_or(AdelantaError::InsufficientSettlement)?;

    Ok(SettlementSplit {
        lender_fee,
        lender_amount,
        protocol_fee,
        sme_amount,
    })
}
