// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Fleet status aggregation.
//!
//! Joins active monitors with their state, applies the freshness rules,
//! tallies the per-status summary, and attaches a bounded heartbeat history
//! per monitor fetched in a single batched query.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use argus_status_core::{
	floor_to_minute, resolve_status, CheckResult, CheckStatus, MonitorId, MonitorStatus,
	StatusSummary,
};

use crate::error::Result;
use crate::repository::StatusRepository;

/// Most recent checks shown per monitor.
pub const HEARTBEAT_LIMIT: u32 = 60;

/// How far back heartbeats are considered.
pub const HEARTBEAT_LOOKBACK_SECS: i64 = 7 * 24 * 60 * 60;

/// The fleet status document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FleetStatus {
	pub generated_at: i64,
	pub overall_status: MonitorStatus,
	pub summary: StatusSummary,
	pub monitors: Vec<MonitorOverview>,
}

/// One monitor's row in the fleet status document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct MonitorOverview {
	pub id: MonitorId,
	pub name: String,
	#[serde(rename = "type")]
	pub monitor_type: String,
	pub status: MonitorStatus,
	pub is_stale: bool,
	pub last_checked_at: Option<i64>,
	pub last_latency_ms: Option<i64>,
	/// Chronological, oldest first.
	pub heartbeats: Vec<Heartbeat>,
}

/// A recent check as presented to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Heartbeat {
	pub checked_at: i64,
	pub status: CheckStatus,
	pub latency_ms: Option<i64>,
}

impl From<CheckResult> for Heartbeat {
	fn from(check: CheckResult) -> Self {
		Self {
			checked_at: check.checked_at,
			status: check.status,
			latency_ms: check.latency_ms,
		}
	}
}

/// Build the fleet status document at `now`.
pub async fn fleet_status(repo: &dyn StatusRepository, now: i64) -> Result<FleetStatus> {
	let range_end = floor_to_minute(now);
	let lookback_start = range_end - HEARTBEAT_LOOKBACK_SECS;

	let monitors = repo.list_active_monitors_with_state().await?;

	let ids: Vec<MonitorId> = monitors.iter().map(|(monitor, _)| monitor.id).collect();
	let mut heartbeats = if ids.is_empty() {
		HashMap::new()
	} else {
		repo.recent_heartbeats(&ids, lookback_start, HEARTBEAT_LIMIT)
			.await?
	};

	let mut summary = StatusSummary::default();
	let mut overviews = Vec::with_capacity(monitors.len());

	for (monitor, state) in monitors {
		let (recorded, last_checked_at, last_latency_ms) = match &state {
			Some(state) => (state.status, state.last_checked_at, state.last_latency_ms),
			None => (MonitorStatus::Unknown, None, None),
		};

		let resolved = resolve_status(now, recorded, last_checked_at, monitor.interval_sec);
		summary.record(resolved.status);

		let beats = heartbeats.remove(&monitor.id).unwrap_or_default();
		overviews.push(MonitorOverview {
			id: monitor.id,
			name: monitor.name,
			monitor_type: monitor.monitor_type,
			status: resolved.status,
			is_stale: resolved.is_stale,
			// Preserved for client diagnostics even when stale.
			last_checked_at,
			last_latency_ms: if resolved.is_stale { None } else { last_latency_ms },
			heartbeats: beats.into_iter().map(Heartbeat::from).collect(),
		});
	}

	Ok(FleetStatus {
		generated_at: now,
		overall_status: summary.overall(),
		summary,
		monitors: overviews,
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::repository::SqliteStatusRepository;
	use crate::testing::{create_status_test_pool, insert_check, insert_monitor, insert_state};

	#[tokio::test]
	async fn empty_fleet_is_unknown() {
		let pool = create_status_test_pool().await;
		let repo = SqliteStatusRepository::new(pool);

		let status = fleet_status(&repo, 10_000).await.unwrap();
		assert_eq!(status.generated_at, 10_000);
		assert_eq!(status.overall_status, MonitorStatus::Unknown);
		assert_eq!(status.summary, StatusSummary::default());
		assert!(status.monitors.is_empty());
	}

	#[tokio::test]
	async fn stale_monitor_degrades_to_unknown_and_nulls_latency() {
		let pool = create_status_test_pool().await;
		insert_monitor(&pool, 1, "api", 60, true, 0).await;
		// 1000 seconds since the last check, interval 60: stale.
		insert_state(&pool, 1, "down", Some(9_000), Some(120)).await;

		let repo = SqliteStatusRepository::new(pool);
		let status = fleet_status(&repo, 10_000).await.unwrap();

		let monitor = &status.monitors[0];
		assert_eq!(monitor.status, MonitorStatus::Unknown);
		assert!(monitor.is_stale);
		assert_eq!(monitor.last_checked_at, Some(9_000));
		assert_eq!(monitor.last_latency_ms, None);
		assert_eq!(status.summary.unknown, 1);
		assert_eq!(status.overall_status, MonitorStatus::Unknown);
	}

	#[tokio::test]
	async fn paused_monitor_is_never_stale() {
		let pool = create_status_test_pool().await;
		insert_monitor(&pool, 1, "api", 60, true, 0).await;
		insert_state(&pool, 1, "paused", None, None).await;

		let repo = SqliteStatusRepository::new(pool);
		let status = fleet_status(&repo, 10_000).await.unwrap();

		let monitor = &status.monitors[0];
		assert_eq!(monitor.status, MonitorStatus::Paused);
		assert!(!monitor.is_stale);
		assert_eq!(status.summary.paused, 1);
		assert_eq!(status.overall_status, MonitorStatus::Paused);
	}

	#[tokio::test]
	async fn monitor_without_state_is_unknown_and_stale() {
		let pool = create_status_test_pool().await;
		insert_monitor(&pool, 1, "api", 60, true, 0).await;

		let repo = SqliteStatusRepository::new(pool);
		let status = fleet_status(&repo, 10_000).await.unwrap();

		let monitor = &status.monitors[0];
		assert_eq!(monitor.status, MonitorStatus::Unknown);
		assert!(monitor.is_stale);
		assert_eq!(monitor.last_checked_at, None);
	}

	#[tokio::test]
	async fn one_down_monitor_wins_the_rollup() {
		let now = 10_000i64;
		let pool = create_status_test_pool().await;
		insert_monitor(&pool, 1, "api", 60, true, 0).await;
		insert_monitor(&pool, 2, "web", 60, true, 0).await;
		insert_monitor(&pool, 3, "db", 60, true, 0).await;
		insert_state(&pool, 1, "up", Some(now - 30), Some(12)).await;
		insert_state(&pool, 2, "down", Some(now - 30), None).await;
		insert_state(&pool, 3, "maintenance", None, None).await;

		let repo = SqliteStatusRepository::new(pool);
		let status = fleet_status(&repo, now).await.unwrap();

		assert_eq!(status.overall_status, MonitorStatus::Down);
		assert_eq!(status.summary.up, 1);
		assert_eq!(status.summary.down, 1);
		assert_eq!(status.summary.maintenance, 1);
	}

	#[tokio::test]
	async fn heartbeats_are_attached_chronologically() {
		let now = 1_000_000i64;
		let pool = create_status_test_pool().await;
		insert_monitor(&pool, 1, "api", 60, true, 0).await;
		insert_state(&pool, 1, "up", Some(now - 10), Some(9)).await;
		for i in 0..3 {
			insert_check(&pool, 1, now - 300 + i * 60, "up", Some(10 + i)).await;
		}

		let repo = SqliteStatusRepository::new(pool);
		let status = fleet_status(&repo, now).await.unwrap();

		let beats = &status.monitors[0].heartbeats;
		assert_eq!(beats.len(), 3);
		assert!(beats.windows(2).all(|w| w[0].checked_at < w[1].checked_at));
		assert_eq!(beats[0].status, CheckStatus::Up);
	}

	#[tokio::test]
	async fn document_serializes_expected_field_names() {
		let now = 10_000i64;
		let pool = create_status_test_pool().await;
		insert_monitor(&pool, 1, "api", 60, true, 0).await;
		insert_state(&pool, 1, "up", Some(now - 30), Some(12)).await;

		let repo = SqliteStatusRepository::new(pool);
		let status = fleet_status(&repo, now).await.unwrap();

		let value = serde_json::to_value(&status).unwrap();
		assert_eq!(value["generated_at"], 10_000);
		assert_eq!(value["overall_status"], "up");
		assert_eq!(value["summary"]["up"], 1);
		let monitor = &value["monitors"][0];
		assert_eq!(monitor["id"], 1);
		assert_eq!(monitor["type"], "http");
		assert_eq!(monitor["is_stale"], false);
		assert!(monitor["heartbeats"].is_array());
	}
}
