// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! HTTP handlers for the public status surface.

pub mod health;
pub mod monitors;
pub mod status;

use axum::{
	http::StatusCode,
	response::{IntoResponse, Response},
	Json,
};
use serde::Serialize;

/// Structured error body for the public surface.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
	pub code: String,
	pub message: String,
}

pub(crate) fn bad_request(message: &str) -> Response {
	(
		StatusCode::BAD_REQUEST,
		Json(ErrorBody {
			code: "BAD_REQUEST".to_string(),
			message: message.to_string(),
		}),
	)
		.into_response()
}

pub(crate) fn monitor_not_found() -> Response {
	(
		StatusCode::NOT_FOUND,
		Json(ErrorBody {
			code: "NOT_FOUND".to_string(),
			message: "Monitor not found".to_string(),
		}),
	)
		.into_response()
}

pub(crate) fn internal_error() -> Response {
	(
		StatusCode::INTERNAL_SERVER_ERROR,
		Json(ErrorBody {
			code: "INTERNAL_ERROR".to_string(),
			message: "Internal server error".to_string(),
		}),
	)
		.into_response()
}
