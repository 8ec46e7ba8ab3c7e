//! Update Route
//!
//! - POST /_update - Recompute the charts bound to the changed controls

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{UpdateRequest, UpdateResponse};
use crate::api::error::ApiResult;
use crate::api::state::AppState;

/// POST /_update
///
/// Runs every binding triggered by `changed` against the submitted control
/// values. Selections that match no launches still return valid (empty)
/// charts.
pub async fn update(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<UpdateRequest>, JsonRejection>,
) -> ApiResult<Json<UpdateResponse>> {
    let Json(req) = payload?;

    tracing::debug!(
        changed = ?req.changed,
        site = %req.inputs.site,
        payload = %req.inputs.payload,
        "Dispatching control change"
    );

    let outputs = state
        .callbacks
        .dispatch(&state.dataset, &req.inputs, &req.changed);

    Ok(Json(UpdateResponse { outputs }))
}
