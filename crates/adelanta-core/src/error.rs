use thiserror::Error;

/// Errors surfaced by the factoring flow.
///
/// Messages are the wire-visible `error` strings of the JSON envelope, so
/// they read as sentences rather than identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AdelantaError {
    #[error("Invoice not found")]
    InvoiceNotFound,

    #[error("SME not found")]
    SmeNotFound,

    #[error("Wallet not found")]
    WalletNotFound,

    #[error("Invoice already funded or settled")]
    InvoiceNotFundable,

    #[error("Invoice must be funded to settle")]
    InvoiceNotFunded,

    #[error("Invoice already settled")]
    InvoiceAlreadySettled,

    #[error("Invoice past its due date")]
    InvoiceExpired,

    #[error("Only unfunded invoices can be cancelled")]
    InvoiceNotCancellable,

    #[error("Insufficient settlement amount")]
    InsufficientSettlement,

    #[error("Amount must be greater than zero")]
    InvalidAmount,

    #[error("Fee exceeds maximum basis points")]
    InvalidFeeBps,

    #[error("Math overflow occurred")]
    Overflow,
}
