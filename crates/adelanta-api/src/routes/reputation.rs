use axum::extract::{Path, State};
use axum::Json;

use adelanta_core::types::SmeReputation;
use adelanta_core::AdelantaError;

use crate::envelope::ApiResponse;
use crate::error::ApiError;
use crate::AppState;

pub async fn get_one(
    State(state): State<AppState>,
    Path(sme_id): Path<String>,
) -> Result<Json<ApiResponse<SmeReputation>>, ApiError> {
    let store = state.store();
    let reputation = store.reputation(&sme_id).ok_or(AdelantaError::SmeNotFound)?;
    Ok(Json(ApiResponse::ok(reputation.clone())))
}
