// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Per-monitor uptime aggregation.
//!
//! Every second of the range is classified as up, down, or unknown. Downtime
//! comes from outage records clamped to the range; unknown comes from the
//! observation gap classifier. Where the two disagree on the same seconds,
//! downtime wins: the overlap is subtracted from unknown before summing.

use serde::{Deserialize, Serialize};

use argus_status_core::{
	floor_to_minute, merge, overlap, sum, unknown_intervals, Interval, MonitorId, Outage,
	ReportRange,
};

use crate::error::Result;
use crate::repository::StatusRepository;
use crate::types::MonitorRef;

/// The uptime report document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UptimeReport {
	pub monitor: MonitorRef,
	pub range: ReportRange,
	pub range_start_at: i64,
	pub range_end_at: i64,
	pub total_sec: i64,
	pub downtime_sec: i64,
	pub unknown_sec: i64,
	pub uptime_sec: i64,
	pub uptime_pct: f64,
}

/// Clamp an outage to `[range_start, range_end)`; open-ended outages run to
/// the range end. Spans that fall out of the range entirely are dropped.
fn clamp_outage(outage: &Outage, range_start: i64, range_end: i64) -> Option<Interval> {
	let start = outage.started_at.max(range_start);
	let end = outage.ended_at.unwrap_or(range_end).min(range_end);
	(end > start).then(|| Interval::new(start, end))
}

/// Build the uptime report for one monitor, or `None` when no active monitor
/// has that id.
///
/// The range never extends before the monitor existed: its start is clamped
/// to `created_at`.
pub async fn uptime_report(
	repo: &dyn StatusRepository,
	id: MonitorId,
	range: ReportRange,
	now: i64,
) -> Result<Option<UptimeReport>> {
	let Some(monitor) = repo.get_active_monitor(id).await? else {
		return Ok(None);
	};

	let range_end = floor_to_minute(now);
	let requested_start = range_end - range.as_secs();
	let range_start = requested_start.max(monitor.created_at);
	let total_sec = (range_end - range_start).max(0);

	let outages = repo.outages_overlapping(id, range_start, range_end).await?;
	let downtime_intervals = merge(
		outages
			.iter()
			.filter_map(|outage| clamp_outage(outage, range_start, range_end))
			.collect(),
	);
	let downtime_sec = sum(&downtime_intervals);

	// The extra interval of lookback supplies the carry-over check for a
	// verdict straddling the range start.
	let checks = repo
		.checks_covering(id, range_start - monitor.interval_sec, range_end)
		.await?;
	let unknown = unknown_intervals(range_start, range_end, monitor.interval_sec, &checks);
	let unknown_sec = (sum(&unknown) - overlap(&unknown, &downtime_intervals)).max(0);

	let unavailable_sec = total_sec.min(downtime_sec + unknown_sec);
	let uptime_sec = (total_sec - unavailable_sec).max(0);
	let uptime_pct = if total_sec == 0 {
		0.0
	} else {
		uptime_sec as f64 / total_sec as f64 * 100.0
	};

	Ok(Some(UptimeReport {
		monitor: MonitorRef::from(&monitor),
		range,
		range_start_at: range_start,
		range_end_at: range_end,
		total_sec,
		downtime_sec,
		unknown_sec,
		uptime_sec,
		uptime_pct,
	}))
}
