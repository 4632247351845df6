//! Protocol-wide constants
//! Centralized location for all configuration defaults and bounds

// PRECISION
pub const BPS_PRECISION: u64 = 10_000; // 100% = 10000 bps

// ADVANCE / FEES
pub const DEFAULT_ADVANCE_BPS: u32 = 9_000; // 90% advance
pub const MAX_ADVANCE_BPS: u32 = 10_000;
pub const DEFAULT_FEE_BPS: u32 = 200; // 2% lender fee
pub const MAX_FEE_BPS: u32 = 1_000; // 10%
pub const DEFAULT_PROTOCOL_FEE_BPS: u32 = 50; // 0.5%
pub const MAX_PROTOCOL_FEE_BPS: u32 = 1_000;

// WALLET SIMULATION
pub const LENDER_STARTING_BALANCE: i64 = 50_000; // lenders start with 50k USDC

// REPUTATION
pub const INITIAL_RISK_SCORE: u32 = 500; // medium risk for a fresh SME
pub const MIN_RISK_SCORE: u32 = 100;
pub const SETTLEMENT_RATE_WEIGHT: u32 = 300;
pub const RISK_VOLUME_DIVISOR: u64 = 10_000;
pub const FULL_ON_TIME_RATE_BPS: u32 = 10_000;
// Above this face amount an unknown SME is classified High risk.
pub const NEW_SME_HIGH_RISK_AMOUNT: u64 = 10_000;

pub const SECONDS_PER_DAY: u64 = 86_400;

// Fixed figure shown on the stats endpoint; the demo has no yield curve.
pub const AVERAGE_APY_PERCENT: u32 = 10;

