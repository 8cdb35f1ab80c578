// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Per-monitor latency aggregation.

use serde::{Deserialize, Serialize};

use argus_status_core::{floor_to_minute, p95, CheckResult, CheckStatus, MonitorId, ReportRange};

use crate::error::Result;
use crate::repository::StatusRepository;
use crate::types::MonitorRef;

/// The latency report document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct LatencyReport {
	pub monitor: MonitorRef,
	pub range: ReportRange,
	pub range_start_at: i64,
	pub range_end_at: i64,
	pub avg_latency_ms: Option<i64>,
	pub p95_latency_ms: Option<i64>,
	/// Every check in range, all statuses, ascending by time.
	pub points: Vec<LatencyPoint>,
}

/// One check as plotted by clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct LatencyPoint {
	pub checked_at: i64,
	pub status: CheckStatus,
	pub latency_ms: Option<i64>,
}

impl From<CheckResult> for LatencyPoint {
	fn from(check: CheckResult) -> Self {
		Self {
			checked_at: check.checked_at,
			status: check.status,
			latency_ms: check.latency_ms,
		}
	}
}

/// Build the latency report for one monitor, or `None` when no active monitor
/// has that id.
///
/// The average and p95 are computed over successful checks with a recorded
/// latency only; `points` carries every check in range so clients can plot
/// failures too.
pub async fn latency_report(
	repo: &dyn StatusRepository,
	id: MonitorId,
	range: ReportRange,
	now: i64,
) -> Result<Option<LatencyReport>> {
	let Some(monitor) = repo.get_active_monitor(id).await? else {
		return Ok(None);
	};

	let range_end = floor_to_minute(now);
	let range_start = range_end - range.as_secs();

	let checks = repo.checks_in_range(id, range_start, range_end).await?;

	let mut samples: Vec<i64> = checks
		.iter()
		.filter(|check| check.status == CheckStatus::Up)
		.filter_map(|check| check.latency_ms)
		.collect();
	samples.sort_unstable();

	let avg_latency_ms = if samples.is_empty() {
		None
	} else {
		let total: i64 = samples.iter().sum();
		Some((total as f64 / samples.len() as f64).round() as i64)
	};
	let p95_latency_ms = p95(&samples);

	Ok(Some(LatencyReport {
		monitor: MonitorRef::from(&monitor),
		range,
		range_start_at: range_start,
		range_end_at: range_end,
		avg_latency_ms,
		p95_latency_ms,
		points: checks.into_iter().map(LatencyPoint::from).collect(),
	}))
}
