// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for status server operations.

use thiserror::Error;

/// Result type for status server operations.
pub type Result<T> = std::result::Result<T, StatusServerError>;

/// Errors that can occur in status server operations.
#[derive(Debug, Error)]
pub enum StatusServerError {
	#[error("monitor not found")]
	MonitorNotFound,

	#[error("database error: {0}")]
	Database(#[from] sqlx::Error),

	#[error("serialization error: {0}")]
	Serialization(#[from] serde_json::Error),

	#[error("internal error: {0}")]
	Internal(String),
}
