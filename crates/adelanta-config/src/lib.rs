//! Environment-driven configuration.
//!
//! Values come from process environment variables, with `.env` files picked
//! up via dotenvy. Every knob has a default so the demo runs with no
//! configuration at all.

use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use adelanta_core::constants::{
    DEFAULT_ADVANCE_BPS, DEFAULT_PROTOCOL_FEE_BPS, MAX_ADVANCE_BPS, MAX_PROTOCOL_FEE_BPS,
};

pub const DEFAULT_PORT: u16 = 3001;

#[derive(Debug, Clone, Serialize)]
pub struct AppConfig {
    /// TCP port the API listens on
    pub port: u16,
    /// Advance rate applied to new invoices, in basis points
    pub advance_bps: u32,
    /// Protocol fee taken at settlement, in basis points
    pub protocol_fee_bps: u32,
    /// Seed the demo SME, lender, and invoice at startup
    pub seed_demo: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            advance_bps: DEFAULT_ADVANCE_BPS,
            protocol_fee_bps: DEFAULT_PROTOCOL_FEE_BPS,
            seed_demo: true,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value `{value}` for {name}")]
    Invalid { name: &'static str, value: String },

    #[error("{name} must be at most {max} basis points")]
    OutOfRange { name: &'static str, max: u32 },
}

impl AppConfig {
    /// Load from the process environment (after applying any `.env` file).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load from an arbitrary variable source. Split out from [`from_env`]
    /// so tests do not have to mutate process-global state.
    ///
    /// [`from_env`]: AppConfig::from_env
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let config = Self {
            port: parse_or("PORT", DEFAULT_PORT, &lookup)?,
            advance_bps: parse_or("ADVANCE_BPS", DEFAULT_ADVANCE_BPS, &lookup)?,
            protocol_fee_bps: parse_or("PROTOCOL_FEE_BPS", DEFAULT_PROTOCOL_FEE_BPS, &lookup)?,
            seed_demo: parse_or("SEED_DEMO", true, &lookup)?,
        };

        if config.advance_bps > MAX_ADVANCE_BPS {
            return Err(ConfigError::OutOfRange {
                name: "ADVANCE_BPS",
                max: MAX_ADVANCE_BPS,
            });
        }
        if config.protocol_fee_bps > MAX_PROTOCOL_FEE_BPS {
            return Err(ConfigError::OutOfRange {
                name: "PROTOCOL_FEE_BPS",
                max: MAX_PROTOCOL_FEE_BPS,
            });
        }

        Ok(config)
    }
}

fn parse_or<T>(
    name: &'static str,
    default: T,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<T, ConfigError>
where
    T: FromStr,
{
    match lookup(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value: raw }),
        None => Ok(default),
    }
}
