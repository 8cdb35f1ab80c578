// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Application state and router assembly.

use std::sync::Arc;

use axum::{routing::get, Json, Router};
use sqlx::SqlitePool;
use utoipa::OpenApi;

use argus_server_status::SqliteStatusRepository;

use crate::api_docs::ApiDoc;
use crate::routes;

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
	pub status_repo: Arc<SqliteStatusRepository>,
}

/// Build application state over a datastore pool.
pub fn create_app_state(pool: SqlitePool) -> AppState {
	AppState {
		status_repo: Arc::new(SqliteStatusRepository::new(pool)),
	}
}

/// Assemble the public router. Every route is read-only and unauthenticated.
pub fn create_router(state: AppState) -> Router {
	Router::new()
		.route("/status", get(routes::status::fleet_status))
		.route("/monitors/{id}/latency", get(routes::monitors::monitor_latency))
		.route("/monitors/{id}/uptime", get(routes::monitors::monitor_uptime))
		.route("/health", get(routes::health::health_check))
		.route("/api/openapi.json", get(openapi_json))
		.with_state(state)
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
	Json(ApiDoc::openapi())
}
