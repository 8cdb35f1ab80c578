// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Test fixtures: in-memory pools and schema for the four status relations.
//!
//! Production DDL is owned by the monitoring pipeline; these helpers exist so
//! repository and aggregator tests can run against an in-memory snapshot.

use sqlx::sqlite::SqlitePool;

pub async fn create_test_pool() -> SqlitePool {
	SqlitePool::connect(":memory:").await.unwrap()
}

pub async fn create_monitors_table(pool: &SqlitePool) {
	sqlx::query(
		r#"
		CREATE TABLE IF NOT EXISTS monitors (
			id INTEGER PRIMARY KEY,
			name TEXT NOT NULL,
			type TEXT NOT NULL DEFAULT 'http',
			interval_sec INTEGER NOT NULL,
			is_active INTEGER NOT NULL DEFAULT 1,
			created_at INTEGER NOT NULL
		)
		"#,
	)
	.execute(pool)
	.await
	.unwrap();
}

pub async fn create_monitor_state_table(pool: &SqlitePool) {
	sqlx::query(
		r#"
		CREATE TABLE IF NOT EXISTS monitor_state (
			monitor_id INTEGER PRIMARY KEY REFERENCES monitors(id) ON DELETE CASCADE,
			status TEXT NOT NULL,
			last_checked_at INTEGER,
			last_latency_ms INTEGER
		)
		"#,
	)
	.execute(pool)
	.await
	.unwrap();
}

pub async fn create_check_results_table(pool: &SqlitePool) {
	sqlx::query(
		r#"
		CREATE TABLE IF NOT EXISTS check_results (
			id INTEGER PRIMARY KEY AUTOINCREMENT,
			monitor_id INTEGER NOT NULL REFERENCES monitors(id) ON DELETE CASCADE,
			checked_at INTEGER NOT NULL,
			status TEXT NOT NULL,
			latency_ms INTEGER
		)
		"#,
	)
	.execute(pool)
	.await
	.unwrap();

	sqlx::query(
		"CREATE INDEX IF NOT EXISTS idx_check_results_monitor_time
		 ON check_results(monitor_id, checked_at)",
	)
	.execute(pool)
	.await
	.unwrap();
}

pub async fn create_outages_table(pool: &SqlitePool) {
	sqlx::query(
		r#"
		CREATE TABLE IF NOT EXISTS outages (
			id INTEGER PRIMARY KEY AUTOINCREMENT,
			monitor_id INTEGER NOT NULL REFERENCES monitors(id) ON DELETE CASCADE,
			started_at INTEGER NOT NULL,
			ended_at INTEGER
		)
		"#,
	)
	.execute(pool)
	.await
	.unwrap();
}

/// Pool with all four status relations created.
pub async fn create_status_test_pool() -> SqlitePool {
	let pool = create_test_pool().await;
	create_monitors_table(&pool).await;
	create_monitor_state_table(&pool).await;
	create_check_results_table(&pool).await;
	create_outages_table(&pool).await;
	pool
}

pub async fn insert_monitor(
	pool: &SqlitePool,
	id: i64,
	name: &str,
	interval_sec: i64,
	is_active: bool,
	created_at: i64,
) {
	sqlx::query(
		"INSERT INTO monitors (id, name, type, interval_sec, is_active, created_at)
		 VALUES (?, ?, 'http', ?, ?, ?)",
	)
	.bind(id)
	.bind(name)
	.bind(interval_sec)
	.bind(is_active)
	.bind(created_at)
	.execute(pool)
	.await
	.unwrap();
}

pub async fn insert_state(
	pool: &SqlitePool,
	monitor_id: i64,
	status: &str,
	last_checked_at: Option<i64>,
	last_latency_ms: Option<i64>,
) {
	sqlx::query(
		"INSERT INTO monitor_state (monitor_id, status, last_checked_at, last_latency_ms)
		 VALUES (?, ?, ?, ?)",
	)
	.bind(monitor_id)
	.bind(status)
	.bind(last_checked_at)
	.bind(last_latency_ms)
	.execute(pool)
	.await
	.unwrap();
}

pub async fn insert_check(
	pool: &SqlitePool,
	monitor_id: i64,
	checked_at: i64,
	status: &str,
	latency_ms: Option<i64>,
) {
	sqlx::query(
		"INSERT INTO check_results (monitor_id, checked_at, status, latency_ms)
		 VALUES (?, ?, ?, ?)",
	)
	.bind(monitor_id)
	.bind(checked_at)
	.bind(status)
	.bind(latency_ms)
	.execute(pool)
	.await
	.unwrap();
}

pub async fn insert_outage(
	pool: &SqlitePool,
	monitor_id: i64,
	started_at: i64,
	ended_at: Option<i64>,
) {
	sqlx::query("INSERT INTO outages (monitor_id, started_at, ended_at) VALUES (?, ?, ?)")
		.bind(monitor_id)
		.bind(started_at)
		.bind(ended_at)
		.execute(pool)
		.await
		.unwrap();
}
