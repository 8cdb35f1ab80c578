// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Health probe handler.

use axum::{extract::State, response::IntoResponse, Json};
use serde::Serialize;
use tracing::instrument;

use argus_server_status::StatusRepository;

use crate::api::AppState;
use crate::routes::internal_error;

/// Health probe response.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
	pub ok: bool,
}

/// GET /health - Datastore connectivity probe
#[utoipa::path(
	get,
	path = "/health",
	responses(
		(status = 200, description = "Datastore reachable", body = HealthResponse),
		(status = 500, description = "Datastore unreachable", body = crate::routes::ErrorBody),
	),
	tag = "health"
)]
#[instrument(skip(state))]
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
	match state.status_repo.ping().await {
		Ok(()) => Json(HealthResponse { ok: true }).into_response(),
		Err(e) => {
			tracing::error!(error = %e, "Health probe failed");
			internal_error()
		}
	}
}
