// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Monitor, check, and outage types for the public status surface.
//!
//! All timestamps are integer seconds since the Unix epoch. Status values are
//! closed enums; datastore strings that don't match any variant decode to
//! `Unknown` at the row boundary rather than failing the whole response.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Unique identifier for a monitor.
///
/// The public surface addresses monitors by positive integer id; zero and
/// negative values never identify a monitor and fail to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct MonitorId(pub i64);

impl fmt::Display for MonitorId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl FromStr for MonitorId {
	type Err = CoreError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.parse::<i64>() {
			Ok(id) if id > 0 => Ok(Self(id)),
			_ => Err(CoreError::InvalidMonitorId(s.to_string())),
		}
	}
}

/// A configured endpoint under observation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Monitor {
	pub id: MonitorId,
	/// Human-readable name: "Marketing site"
	pub name: String,
	/// Check type tag: "http", "tcp", ...
	#[serde(rename = "type")]
	pub monitor_type: String,
	/// Declared sampling interval in seconds; a check's verdict expires
	/// `interval_sec` after it was taken.
	pub interval_sec: i64,
	pub is_active: bool,
	/// No query reports on time before the monitor existed.
	pub created_at: i64,
}

/// Denormalized current state of a monitor, maintained by the check scheduler.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct MonitorState {
	pub monitor_id: MonitorId,
	pub status: MonitorStatus,
	pub last_checked_at: Option<i64>,
	pub last_latency_ms: Option<i64>,
}

/// One observation taken by the check scheduler.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CheckResult {
	pub monitor_id: MonitorId,
	pub checked_at: i64,
	pub status: CheckStatus,
	pub latency_ms: Option<i64>,
}

/// A downtime span asserted by the outage-detection pipeline.
///
/// `ended_at == None` means the outage is still open; aggregation clamps it
/// to the queried range end.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Outage {
	pub monitor_id: MonitorId,
	pub started_at: i64,
	pub ended_at: Option<i64>,
}

/// Status of a monitor as exposed on the public surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum MonitorStatus {
	/// Last check succeeded
	Up,
	/// Last check failed
	Down,
	/// Operator-declared maintenance window
	Maintenance,
	/// Operator-paused; the scheduler is not producing checks
	Paused,
	/// No trustworthy observation
	Unknown,
}

impl MonitorStatus {
	/// Decode a datastore string, falling back to `Unknown` for anything
	/// outside the closed set.
	pub fn from_str_or_unknown(s: &str) -> Self {
		s.parse().unwrap_or(Self::Unknown)
	}
}

impl fmt::Display for MonitorStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Up => write!(f, "up"),
			Self::Down => write!(f, "down"),
			Self::Maintenance => write!(f, "maintenance"),
			Self::Paused => write!(f, "paused"),
			Self::Unknown => write!(f, "unknown"),
		}
	}
}

impl FromStr for MonitorStatus {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"up" => Ok(Self::Up),
			"down" => Ok(Self::Down),
			"maintenance" => Ok(Self::Maintenance),
			"paused" => Ok(Self::Paused),
			"unknown" => Ok(Self::Unknown),
			_ => Err(format!("unknown monitor status: {}", s)),
		}
	}
}

/// Status of a single check.
///
/// Paused monitors do not produce checks, so `paused` has no counterpart here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
	Up,
	Down,
	Maintenance,
	Unknown,
}

impl CheckStatus {
	/// Decode a datastore string, falling back to `Unknown` for anything
	/// outside the closed set.
	pub fn from_str_or_unknown(s: &str) -> Self {
		s.parse().unwrap_or(Self::Unknown)
	}
}

impl fmt::Display for CheckStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Up => write!(f, "up"),
			Self::Down => write!(f, "down"),
			Self::Maintenance => write!(f, "maintenance"),
			Self::Unknown => write!(f, "unknown"),
		}
	}
}

impl FromStr for CheckStatus {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"up" => Ok(Self::Up),
			"down" => Ok(Self::Down),
			"maintenance" => Ok(Self::Maintenance),
			"unknown" => Ok(Self::Unknown),
			_ => Err(format!("unknown check status: {}", s)),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	proptest! {
		#[test]
		fn monitor_id_roundtrip(id in 1i64..i64::MAX) {
			let parsed: MonitorId = id.to_string().parse().unwrap();
			prop_assert_eq!(parsed, MonitorId(id));
		}

		#[test]
		fn monitor_id_rejects_non_positive(id in i64::MIN..=0i64) {
			prop_assert!(id.to_string().parse::<MonitorId>().is_err());
		}

		#[test]
		fn monitor_status_roundtrip(status in prop_oneof![
			Just(MonitorStatus::Up),
			Just(MonitorStatus::Down),
			Just(MonitorStatus::Maintenance),
			Just(MonitorStatus::Paused),
			Just(MonitorStatus::Unknown),
		]) {
			let s = status.to_string();
			let parsed: MonitorStatus = s.parse().unwrap();
			prop_assert_eq!(status, parsed);
		}

		#[test]
		fn check_status_roundtrip(status in prop_oneof![
			Just(CheckStatus::Up),
			Just(CheckStatus::Down),
			Just(CheckStatus::Maintenance),
			Just(CheckStatus::Unknown),
		]) {
			let s = status.to_string();
			let parsed: CheckStatus = s.parse().unwrap();
			prop_assert_eq!(status, parsed);
		}
	}

	#[test]
	fn monitor_id_rejects_junk() {
		assert!("".parse::<MonitorId>().is_err());
		assert!("abc".parse::<MonitorId>().is_err());
		assert!("1.5".parse::<MonitorId>().is_err());
		assert!(" 1".parse::<MonitorId>().is_err());
	}

	#[test]
	fn unrecognized_status_decodes_to_unknown() {
		assert_eq!(
			MonitorStatus::from_str_or_unknown("degraded"),
			MonitorStatus::Unknown
		);
		assert_eq!(CheckStatus::from_str_or_unknown(""), CheckStatus::Unknown);
		// `paused` is not a valid check status
		assert_eq!(
			CheckStatus::from_str_or_unknown("paused"),
			CheckStatus::Unknown
		);
	}

	#[test]
	fn status_serializes_snake_case() {
		assert_eq!(
			serde_json::to_string(&MonitorStatus::Maintenance).unwrap(),
			"\"maintenance\""
		);
		assert_eq!(serde_json::to_string(&CheckStatus::Up).unwrap(), "\"up\"");
	}
}
