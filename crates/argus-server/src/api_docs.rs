// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! OpenAPI document aggregation.

use utoipa::OpenApi;

use argus_server_status::{
	FleetStatus, Heartbeat, LatencyPoint, LatencyReport, MonitorOverview, MonitorRef, UptimeReport,
};
use argus_status_core::{CheckStatus, MonitorId, MonitorStatus, ReportRange, StatusSummary};

use crate::routes::health::HealthResponse;
use crate::routes::ErrorBody;

#[derive(OpenApi)]
#[openapi(
	info(
		title = "Argus public status API",
		description = "Read-only status, latency, and uptime queries over a monitored fleet"
	),
	paths(
		crate::routes::status::fleet_status,
		crate::routes::monitors::monitor_latency,
		crate::routes::monitors::monitor_uptime,
		crate::routes::health::health_check,
	),
	components(schemas(
		FleetStatus,
		MonitorOverview,
		Heartbeat,
		LatencyReport,
		LatencyPoint,
		UptimeReport,
		MonitorRef,
		MonitorId,
		MonitorStatus,
		CheckStatus,
		StatusSummary,
		ReportRange,
		HealthResponse,
		ErrorBody,
	)),
	tags(
		(name = "status", description = "Public status and uptime queries"),
		(name = "health", description = "Service health"),
	)
)]
pub struct ApiDoc;
