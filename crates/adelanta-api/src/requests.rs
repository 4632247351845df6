//! Request payloads. Every field is optional at the deserialization layer;
//! handlers decide what is required so a missing field produces the
//! envelope's 400 rather than a framework rejection.

use serde::Deserialize;

use adelanta_core::types::InvoiceStatus;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvoiceRequest {
    pub sme_id: Option<String>,
    pub payer_name: Option<String>,
    pub amount: Option<u64>,
    /// Due date, unix seconds
    pub due_date: Option<u64>,
    pub country: Option<String>,
    pub industry: Option<String>,
    pub fee_bps: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundRequest {
    pub lender_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettleRequest {
    /// Payment collected from the payer; defaults to the face amount
    pub amount_received: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListInvoicesQuery {
    pub status: Option<InvoiceStatus>,
    pub sme_id: Option<String>,
}
