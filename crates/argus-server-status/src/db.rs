// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Read-only datastore access.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool};
use std::str::FromStr;

use crate::error::StatusServerError;

/// Open a read-only SqlitePool over the monitoring datastore.
///
/// The schema, journal configuration, and all writes are owned by the
/// monitoring pipeline; this surface only queries. The connection is opened
/// read-only so a misconfigured database URL fails here instead of silently
/// creating an empty database that answers every query with nothing.
///
/// # Arguments
/// * `database_url` - SQLite connection string (e.g., "sqlite:./argus.db")
///
/// # Errors
/// Returns `StatusServerError::Internal` if the URL is invalid;
/// `StatusServerError::Database` if the database cannot be opened.
#[tracing::instrument(skip(database_url))]
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, StatusServerError> {
	let options = SqliteConnectOptions::from_str(database_url)
		.map_err(|e| StatusServerError::Internal(format!("Invalid database URL: {e}")))?
		.read_only(true);

	let pool = SqlitePool::connect_with(options).await?;

	tracing::debug!("read-only database pool created");
	Ok(pool)
}
