// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Repository layer for status database reads.
//!
//! Every query here is read-only; the relations are maintained by the check
//! scheduler and the outage-detection pipeline. Only active monitors are
//! visible through this surface.

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::collections::HashMap;
use tracing::instrument;

use argus_status_core::{
	CheckResult, CheckStatus, Monitor, MonitorId, MonitorState, MonitorStatus, Outage,
};

use crate::error::Result;

/// Repository trait for status queries.
#[async_trait]
pub trait StatusRepository: Send + Sync {
	/// All active monitors joined with their state, ascending by id.
	async fn list_active_monitors_with_state(&self)
		-> Result<Vec<(Monitor, Option<MonitorState>)>>;

	async fn get_active_monitor(&self, id: MonitorId) -> Result<Option<Monitor>>;

	/// The most recent checks per monitor since `since`, at most
	/// `per_monitor_limit` each, chronological within a monitor. One query
	/// for the whole id set.
	async fn recent_heartbeats(
		&self,
		ids: &[MonitorId],
		since: i64,
		per_monitor_limit: u32,
	) -> Result<HashMap<MonitorId, Vec<CheckResult>>>;

	/// Checks with `from <= checked_at <= to`, ascending.
	async fn checks_in_range(&self, id: MonitorId, from: i64, to: i64) -> Result<Vec<CheckResult>>;

	/// Checks with `from <= checked_at < to`, ascending. Callers extend
	/// `from` below their range start to pick up the carry-over check.
	async fn checks_covering(&self, id: MonitorId, from: i64, to: i64) -> Result<Vec<CheckResult>>;

	/// Outages intersecting `[from, to)`, including still-open ones.
	async fn outages_overlapping(&self, id: MonitorId, from: i64, to: i64) -> Result<Vec<Outage>>;

	/// One trivial read to confirm datastore connectivity.
	async fn ping(&self) -> Result<()>;
}

/// SQLite implementation of the status repository.
#[derive(Clone)]
pub struct SqliteStatusRepository {
	pool: SqlitePool,
}

impl SqliteStatusRepository {
	pub fn new(pool: SqlitePool) -> Self {
		Self { pool }
	}
}

#[async_trait]
impl StatusRepository for SqliteStatusRepository {
	#[instrument(skip(self))]
	async fn list_active_monitors_with_state(
		&self,
	) -> Result<Vec<(Monitor, Option<MonitorState>)>> {
		let rows = sqlx::query_as::<_, MonitorWithStateRow>(
			r#"
			SELECT m.id, m.name, m.type AS monitor_type, m.interval_sec, m.is_active, m.created_at,
				   s.status, s.last_checked_at, s.last_latency_ms
			FROM monitors m
			LEFT JOIN monitor_state s ON s.monitor_id = m.id
			WHERE m.is_active = 1
			ORDER BY m.id ASC
			"#,
		)
		.fetch_all(&self.pool)
		.await?;

		Ok(rows.into_iter().map(Into::into).collect())
	}

	#[instrument(skip(self), fields(monitor_id = %id))]
	async fn get_active_monitor(&self, id: MonitorId) -> Result<Option<Monitor>> {
		let row = sqlx::query_as::<_, MonitorRow>(
			r#"
			SELECT id, name, type AS monitor_type, interval_sec, is_active, created_at
			FROM monitors
			WHERE id = ? AND is_active = 1
			"#,
		)
		.bind(id.0)
		.fetch_optional(&self.pool)
		.await?;

		Ok(row.map(Into::into))
	}

	#[instrument(skip(self, ids), fields(monitor_count = ids.len()))]
	async fn recent_heartbeats(
		&self,
		ids: &[MonitorId],
		since: i64,
		per_monitor_limit: u32,
	) -> Result<HashMap<MonitorId, Vec<CheckResult>>> {
		if ids.is_empty() {
			return Ok(HashMap::new());
		}

		let placeholders = vec!["?"; ids.len()].join(", ");
		let sql = format!(
			r#"
			SELECT monitor_id, checked_at, status, latency_ms
			FROM (
				SELECT monitor_id, checked_at, status, latency_ms,
					   ROW_NUMBER() OVER (
						   PARTITION BY monitor_id
						   ORDER BY checked_at DESC
					   ) AS row_num
				FROM check_results
				WHERE checked_at >= ? AND monitor_id IN ({placeholders})
			)
			WHERE row_num <= ?
			ORDER BY monitor_id ASC, checked_at ASC
			"#
		);

		let mut query = sqlx::query_as::<_, CheckRow>(&sql).bind(since);
		for id in ids {
			query = query.bind(id.0);
		}
		let rows = query
			.bind(per_monitor_limit as i64)
			.fetch_all(&self.pool)
			.await?;

		let mut heartbeats: HashMap<MonitorId, Vec<CheckResult>> = HashMap::new();
		for row in rows {
			let check: CheckResult = row.into();
			heartbeats.entry(check.monitor_id).or_default().push(check);
		}
		Ok(heartbeats)
	}

	#[instrument(skip(self), fields(monitor_id = %id))]
	async fn checks_in_range(&self, id: MonitorId, from: i64, to: i64) -> Result<Vec<CheckResult>> {
		let rows = sqlx::query_as::<_, CheckRow>(
			r#"
			SELECT monitor_id, checked_at, status, latency_ms
			FROM check_results
			WHERE monitor_id = ? AND checked_at >= ? AND checked_at <= ?
			ORDER BY checked_at ASC
			"#,
		)
		.bind(id.0)
		.bind(from)
		.bind(to)
		.fetch_all(&self.pool)
		.await?;

		Ok(rows.into_iter().map(Into::into).collect())
	}

	#[instrument(skip(self), fields(monitor_id = %id))]
	async fn checks_covering(&self, id: MonitorId, from: i64, to: i64) -> Result<Vec<CheckResult>> {
		let rows = sqlx::query_as::<_, CheckRow>(
			r#"
			SELECT monitor_id, checked_at, status, latency_ms
			FROM check_results
			WHERE monitor_id = ? AND checked_at >= ? AND checked_at < ?
			ORDER BY checked_at ASC
			"#,
		)
		.bind(id.0)
		.bind(from)
		.bind(to)
		.fetch_all(&self.pool)
		.await?;

		Ok(rows.into_iter().map(Into::into).collect())
	}

	#[instrument(skip(self), fields(monitor_id = %id))]
	async fn outages_overlapping(&self, id: MonitorId, from: i64, to: i64) -> Result<Vec<Outage>> {
		let rows = sqlx::query_as::<_, OutageRow>(
			r#"
			SELECT monitor_id, started_at, ended_at
			FROM outages
			WHERE monitor_id = ?
			  AND started_at < ?
			  AND (ended_at IS NULL OR ended_at > ?)
			ORDER BY started_at ASC
			"#,
		)
		.bind(id.0)
		.bind(to)
		.bind(from)
		.fetch_all(&self.pool)
		.await?;

		Ok(rows.into_iter().map(Into::into).collect())
	}

	#[instrument(skip(self))]
	async fn ping(&self) -> Result<()> {
		sqlx::query_scalar::<_, i64>("SELECT 1")
			.fetch_one(&self.pool)
			.await?;
		Ok(())
	}
}

// Database row types for sqlx

#[derive(sqlx::FromRow)]
struct MonitorRow {
	id: i64,
	name: String,
	monitor_type: String,
	interval_sec: i64,
	is_active: bool,
	created_at: i64,
}

impl From<MonitorRow> for Monitor {
	fn from(row: MonitorRow) -> Self {
		Monitor {
			id: MonitorId(row.id),
			name: row.name,
			monitor_type: row.monitor_type,
			interval_sec: row.interval_sec,
			is_active: row.is_active,
			created_at: row.created_at,
		}
	}
}

#[derive(sqlx::FromRow)]
struct MonitorWithStateRow {
	id: i64,
	name: String,
	monitor_type: String,
	interval_sec: i64,
	is_active: bool,
	created_at: i64,
	// State columns are null when no monitor_state row exists.
	status: Option<String>,
	last_checked_at: Option<i64>,
	last_latency_ms: Option<i64>,
}

impl From<MonitorWithStateRow> for (Monitor, Option<MonitorState>) {
	fn from(row: MonitorWithStateRow) -> Self {
		let monitor = Monitor {
			id: MonitorId(row.id),
			name: row.name,
			monitor_type: row.monitor_type,
			interval_sec: row.interval_sec,
			is_active: row.is_active,
			created_at: row.created_at,
		};
		let state = row.status.map(|status| MonitorState {
			monitor_id: monitor.id,
			status: MonitorStatus::from_str_or_unknown(&status),
			last_checked_at: row.last_checked_at,
			last_latency_ms: row.last_latency_ms,
		});
		(monitor, state)
	}
}

#[derive(sqlx::FromRow)]
struct CheckRow {
	monitor_id: i64,
	checked_at: i64,
	status: String,
	latency_ms: Option<i64>,
}

impl From<CheckRow> for CheckResult {
	fn from(row: CheckRow) -> Self {
		CheckResult {
			monitor_id: MonitorId(row.monitor_id),
			checked_at: row.checked_at,
			status: CheckStatus::from_str_or_unknown(&row.status),
			latency_ms: row.latency_ms,
		}
	}
}

#[derive(sqlx::FromRow)]
struct OutageRow {
	monitor_id: i64,
	started_at: i64,
	ended_at: Option<i64>,
}

impl From<OutageRow> for Outage {
	fn from(row: OutageRow) -> Self {
		Outage {
			monitor_id: MonitorId(row.monitor_id),
			started_at: row.started_at,
			ended_at: row.ended_at,
		}
	}
}
