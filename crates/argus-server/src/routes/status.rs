// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Fleet status handler.

use axum::{extract::State, response::IntoResponse, Json};
use chrono::Utc;
use tracing::instrument;

use argus_server_status::FleetStatus;

use crate::api::AppState;
use crate::routes::internal_error;

/// GET /status - Current fleet status with recent heartbeats
#[utoipa::path(
	get,
	path = "/status",
	responses(
		(status = 200, description = "Fleet status document", body = FleetStatus),
		(status = 500, description = "Internal error", body = crate::routes::ErrorBody),
	),
	tag = "status"
)]
#[instrument(skip(state))]
pub async fn fleet_status(State(state): State<AppState>) -> impl IntoResponse {
	let now = Utc::now().timestamp();

	match argus_server_status::fleet_status(state.status_repo.as_ref(), now).await {
		Ok(document) => Json(document).into_response(),
		Err(e) => {
			tracing::error!(error = %e, "Failed to build fleet status");
			internal_error()
		}
	}
}
