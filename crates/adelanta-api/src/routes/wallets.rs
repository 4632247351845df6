use axum::extract::{Path, State};
use axum::Json;

use adelanta_core::types::Wallet;
use adelanta_core::AdelantaError;

use crate::envelope::ApiResponse;
use crate::error::ApiError;
use crate::AppState;

pub async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Wallet>>, ApiError> {
    let store = state.store();
    let wallet = store.wallet(&id).ok_or(AdelantaError::WalletNotFound)?;
    Ok(Json(ApiResponse::ok(wallet.clone())))
}
