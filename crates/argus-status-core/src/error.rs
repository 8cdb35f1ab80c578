// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for the status engine core.

use thiserror::Error;

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors that can occur in core operations.
#[derive(Debug, Error)]
pub enum CoreError {
	#[error("invalid monitor id: {0}")]
	InvalidMonitorId(String),

	#[error("invalid range: {0}")]
	InvalidRange(String),

	#[error("internal error: {0}")]
	Internal(String),
}
