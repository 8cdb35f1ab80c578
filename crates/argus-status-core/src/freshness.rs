// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Freshness rules and fleet-level status rollup.

use serde::{Deserialize, Serialize};

use crate::monitor::MonitorStatus;

/// Decide whether a monitor's recorded state is too old to trust.
///
/// `paused` and `maintenance` are operator-declared and never go stale, no
/// matter how long the scheduler has been idle. Everything else is stale when
/// there is no observation at all, or the last one is older than twice the
/// sampling interval.
pub fn is_stale(
	now: i64,
	status: MonitorStatus,
	last_checked_at: Option<i64>,
	interval_sec: i64,
) -> bool {
	if matches!(status, MonitorStatus::Paused | MonitorStatus::Maintenance) {
		return false;
	}
	match last_checked_at {
		None => true,
		Some(checked_at) => now - checked_at > 2 * interval_sec,
	}
}

/// A monitor's state as exposed on the public surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedStatus {
	pub status: MonitorStatus,
	pub is_stale: bool,
}

/// Apply the freshness rules to a recorded state.
///
/// Stale monitors are exposed as `unknown`; the recorded status passes
/// through otherwise.
pub fn resolve_status(
	now: i64,
	status: MonitorStatus,
	last_checked_at: Option<i64>,
	interval_sec: i64,
) -> ResolvedStatus {
	let stale = is_stale(now, status, last_checked_at, interval_sec);
	ResolvedStatus {
		status: if stale { MonitorStatus::Unknown } else { status },
		is_stale: stale,
	}
}

/// Per-status monitor counts for a fleet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct StatusSummary {
	pub up: u32,
	pub down: u32,
	pub maintenance: u32,
	pub paused: u32,
	pub unknown: u32,
}

impl StatusSummary {
	pub fn record(&mut self, status: MonitorStatus) {
		match status {
			MonitorStatus::Up => self.up += 1,
			MonitorStatus::Down => self.down += 1,
			MonitorStatus::Maintenance => self.maintenance += 1,
			MonitorStatus::Paused => self.paused += 1,
			MonitorStatus::Unknown => self.unknown += 1,
		}
	}

	/// Roll the counts up into one fleet-wide status.
	///
	/// Strict priority: down, unknown, maintenance, up, paused. An empty
	/// fleet is unknown.
	pub fn overall(&self) -> MonitorStatus {
		if self.down > 0 {
			MonitorStatus::Down
		} else if self.unknown > 0 {
			MonitorStatus::Unknown
		} else if self.maintenance > 0 {
			MonitorStatus::Maintenance
		} else if self.up > 0 {
			MonitorStatus::Up
		} else if self.paused > 0 {
			MonitorStatus::Paused
		} else {
			MonitorStatus::Unknown
		}
	}
}
