// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Per-monitor latency and uptime handlers.

use axum::{
	extract::{Path, Query, State},
	response::{IntoResponse, Response},
	Json,
};
use chrono::Utc;
use serde::Deserialize;
use tracing::instrument;

use argus_server_status::{latency_report, uptime_report, LatencyReport, UptimeReport};
use argus_status_core::{MonitorId, ReportRange};

use crate::api::AppState;
use crate::routes::{bad_request, internal_error, monitor_not_found};

/// Query parameters for report endpoints.
#[derive(Debug, Deserialize)]
pub struct RangeParams {
	pub range: Option<String>,
}

fn parse_monitor_id(raw: &str) -> Result<MonitorId, Response> {
	raw.parse().map_err(|_| bad_request("Invalid monitor id"))
}

/// Resolve the `range` parameter against the endpoint's allowed set,
/// defaulting to 24h when absent.
fn parse_range(params: &RangeParams, allowed: &[ReportRange]) -> Result<ReportRange, Response> {
	let Some(raw) = params.range.as_deref() else {
		return Ok(ReportRange::Day);
	};
	raw.parse::<ReportRange>()
		.ok()
		.filter(|range| allowed.contains(range))
		.ok_or_else(|| bad_request("Invalid range"))
}

/// GET /monitors/{id}/latency - Latency profile over a time range
#[utoipa::path(
	get,
	path = "/monitors/{id}/latency",
	params(
		("id" = i64, Path, description = "Monitor id"),
		("range" = Option<String>, Query, description = "Report range; only \"24h\""),
	),
	responses(
		(status = 200, description = "Latency report", body = LatencyReport),
		(status = 400, description = "Invalid id or range", body = crate::routes::ErrorBody),
		(status = 404, description = "Monitor not found", body = crate::routes::ErrorBody),
		(status = 500, description = "Internal error", body = crate::routes::ErrorBody),
	),
	tag = "status"
)]
#[instrument(skip(state), fields(monitor_id = %id))]
pub async fn monitor_latency(
	State(state): State<AppState>,
	Path(id): Path<String>,
	Query(params): Query<RangeParams>,
) -> impl IntoResponse {
	let id = match parse_monitor_id(&id) {
		Ok(id) => id,
		Err(response) => return response,
	};
	let range = match parse_range(&params, &[ReportRange::Day]) {
		Ok(range) => range,
		Err(response) => return response,
	};

	let now = Utc::now().timestamp();
	match latency_report(state.status_repo.as_ref(), id, range, now).await {
		Ok(Some(report)) => Json(report).into_response(),
		Ok(None) => monitor_not_found(),
		Err(e) => {
			tracing::error!(error = %e, "Failed to build latency report");
			internal_error()
		}
	}
}

/// GET /monitors/{id}/uptime - Availability over a time range
#[utoipa::path(
	get,
	path = "/monitors/{id}/uptime",
	params(
		("id" = i64, Path, description = "Monitor id"),
		("range" = Option<String>, Query, description = "Report range: 24h, 7d, or 30d"),
	),
	responses(
		(status = 200, description = "Uptime report", body = UptimeReport),
		(status = 400, description = "Invalid id or range", body = crate::routes::ErrorBody),
		(status = 404, description = "Monitor not found", body = crate::routes::ErrorBody),
		(status = 500, description = "Internal error", body = crate::routes::ErrorBody),
	),
	tag = "status"
)]
#[instrument(skip(state), fields(monitor_id = %id))]
pub async fn monitor_uptime(
	State(state): State<AppState>,
	Path(id): Path<String>,
	Query(params): Query<RangeParams>,
) -> impl IntoResponse {
	let id = match parse_monitor_id(&id) {
		Ok(id) => id,
		Err(response) => return response,
	};
	let range = match parse_range(
		&params,
		&[ReportRange::Day, ReportRange::Week, ReportRange::Month],
	) {
		Ok(range) => range,
		Err(response) => return response,
	};

	let now = Utc::now().timestamp();
	match uptime_report(state.status_repo.as_ref(), id, range, now).await {
		Ok(Some(report)) => Json(report).into_response(),
		Ok(None) => monitor_not_found(),
		Err(e) => {
			tracing::error!(error = %e, "Failed to build uptime report");
			internal_error()
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn monitor_id_must_be_a_positive_integer() {
		assert!(parse_monitor_id("1").is_ok());
		assert!(parse_monitor_id("42").is_ok());
		assert!(parse_monitor_id("0").is_err());
		assert!(parse_monitor_id("-3").is_err());
		assert!(parse_monitor_id("abc").is_err());
		assert!(parse_monitor_id("1.5").is_err());
	}

	#[test]
	fn range_defaults_to_day() {
		let params = RangeParams { range: None };
		assert_eq!(
			parse_range(&params, &[ReportRange::Day]).unwrap(),
			ReportRange::Day
		);
	}

	#[test]
	fn range_outside_allowed_set_is_rejected() {
		let params = RangeParams {
			range: Some("7d".to_string()),
		};
		// Valid keyword, but the latency endpoint only accepts 24h.
		assert!(parse_range(&params, &[ReportRange::Day]).is_err());
		assert!(parse_range(&params, &[ReportRange::Day, ReportRange::Week]).is_ok());
	}

	#[test]
	fn unknown_range_keyword_is_rejected() {
		let params = RangeParams {
			range: Some("90d".to_string()),
		};
		assert!(parse_range(
			&params,
			&[ReportRange::Day, ReportRange::Week, ReportRange::Month]
		)
		.is_err());
	}
}
