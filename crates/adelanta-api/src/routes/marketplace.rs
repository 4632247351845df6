use axum::extract::State;
use axum::Json;

use adelanta_core::types::{Invoice, InvoiceStatus};

use crate::envelope::ApiResponse;
use crate::AppState;

/// Invoices still open for funding.
pub async fn list(State(state): State<AppState>) -> Json<ApiResponse<Vec<Invoice>>> {
    let available = state.store().invoices_by_status(InvoiceStatus::Created);
    Json(ApiResponse::ok(available))
}
