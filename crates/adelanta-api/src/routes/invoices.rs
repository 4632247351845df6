//! Invoice lifecycle endpoints: list/get, create, fund, settle, cancel,
//! and the settlement preview.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use adelanta_core::constants::DEFAULT_FEE_BPS;
use adelanta_core::math::settlement_split;
use adelanta_core::types::Invoice;
use adelanta_core::AdelantaError;
use adelanta_store::NewInvoice;

use crate::envelope::ApiResponse;
use crate::error::ApiError;
use crate::requests::{CreateInvoiceRequest, FundRequest, ListInvoicesQuery, SettleRequest};
use crate::{unix_now, AppState};

const MISSING_FIELDS: &str = "Missing required fields";

pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListInvoicesQuery>,
) -> Json<ApiResponse<Vec<Invoice>>> {
    let store = state.store();
    let invoices = if let Some(status) = query.status {
        store.invoices_by_status(status)
    } else if let Some(sme_id) = query.sme_id {
        store.invoices_by_sme(&sme_id)
    } else {
        store.all_invoices()
    };
    Json(ApiResponse::ok(invoices))
}

pub async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Invoice>>, ApiError> {
    let store = state.store();
    let invoice = store.invoice(&id).ok_or(AdelantaError::InvoiceNotFound)?;
    Ok(Json(ApiResponse::ok(invoice.clone())))
}

pub async fn create(
    State(state): State<AppState>,
    body: Option<Json<CreateInvoiceRequest>>,
) -> Result<(StatusCode, Json<ApiResponse<Invoice>>), ApiError> {
    let Some(Json(body)) = body else {
        return Err(ApiError::BadRequest(MISSING_FIELDS));
    };
    let (Some(sme_id), Some(payer_name), Some(amount), Some(due_date)) =
        (body.sme_id, body.payer_name, body.amount, body.due_date)
    else {
        return Err(ApiError::BadRequest(MISSING_FIELDS));
    };

    let new = NewInvoice {
        sme_id,
        payer_name,
        amount,
        due_date,
        country: body.country.unwrap_or_else(|| "MX".to_string()),
        industry: body.industry.unwrap_or_else(|| "GENERAL".to_string()),
        fee_bps: body.fee_bps.unwrap_or(DEFAULT_FEE_BPS),
    };

    let invoice = state.store().create_invoice(new, unix_now())?;
    tracing::info!(id = %invoice.id, amount = invoice.amount, "invoice created");

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(invoice))))
}

pub async fn fund(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Option<Json<FundRequest>>,
) -> Result<Json<ApiResponse<Invoice>>, ApiError> {
    let lender_id = body
        .and_then(|Json(body)| body.lender_id)
        .ok_or(ApiError::BadRequest("Lender ID required"))?;

    let invoice = state.store().fund_invoice(&id, &lender_id, unix_now())?;
    tracing::info!(
        id = %invoice.id,
        lender = %lender_id,
        advance = invoice.advance_amount,
        "invoice funded"
    );

    Ok(Json(ApiResponse::ok(invoice)))
}

pub async fn settle(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Option<Json<SettleRequest>>,
) -> Result<Json<ApiResponse<Invoice>>, ApiError> {
    let amount_received = body.and_then(|Json(body)| body.amount_received);

    let invoice = state
        .store()
        .settle_invoice(&id, amount_received, unix_now())?;

    if let Some(result) = &invoice.settlement_result {
        tracing::info!(
            id = %invoice.id,
            lender = result.lender_amount,
            sme = result.sme_amount,
            protocol = result.protocol_fee,
            "invoice settled"
        );
    }

    Ok(Json(ApiResponse::ok(invoice)))
}

pub async fn cancel(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Invoice>>, ApiError> {
    let invoice = state.store().cancel_invoice(&id, unix_now())?;
    tracing::info!(id = %invoice.id, "invoice cancelled");
    Ok(Json(ApiResponse::ok(invoice)))
}

// ----------------------------------------------------------------- preview

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettlementPreview {
    pub invoice_id: String,
    pub invoice_amount: u64,
    pub advance_amount: u64,
    pub distribution: Distribution,
}

#[derive(Debug, Serialize)]
pub struct Distribution {
    pub lender: LenderShare,
    pub sme: SmeShare,
    pub protocol: ProtocolShare,
}

#[derive(Debug, Serialize)]
pub struct LenderShare {
    pub principal: u64,
    pub fee: u64,
    pub total: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SmeShare {
    pub remainder: u64,
    /// Advance already received plus the settlement remainder
    pub total_received: u64,
}

#[derive(Debug, Serialize)]
pub struct ProtocolShare {
    pub fee: u64,
}

/// Distribution the invoice would settle with if the payer paid the face
/// amount today.
pub async fn preview_settlement(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<SettlementPreview>>, ApiError> {
    let store = state.store();
    let invoice = store.invoice(&id).ok_or(AdelantaError::InvoiceNotFound)?;
    let (_, protocol_fee_bps) = store.rates();

    let split = settlement_split(
        invoice.amount,
        invoice.advance_amount,
        invoice.fee_bps,
        protocol_fee_bps,
        invoice.amount,
    )?;

    Ok(Json(ApiResponse::ok(SettlementPreview {
        invoice_id: invoice.id.clone(),
        invoice_amount: invoice.amount,
        advance_amount: invoice.advance_amount,
        distribution: Distribution {
            lender: LenderShare {
                principal: invoice.advance_amount,
                fee: split.lender_fee,
                total: split.lender_amount,
            },
            sme: SmeShare {
                remainder: split.sme_amount,
                total_received: invoice
                    .advance_amount
                    .checked_add(split.sme_amount)
                    .ok_or(AdelantaError::Overflow)?,
            },
            protocol: ProtocolShare {
                fee: split.protocol_fee,
            },
        },
    })))
}
