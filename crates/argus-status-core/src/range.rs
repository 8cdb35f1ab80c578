// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Report ranges, minute alignment, and percentile extraction.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

const DAY_SECS: i64 = 24 * 60 * 60;

/// Time range for latency and uptime reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum ReportRange {
	#[serde(rename = "24h")]
	Day,
	#[serde(rename = "7d")]
	Week,
	#[serde(rename = "30d")]
	Month,
}

impl ReportRange {
	pub fn as_secs(&self) -> i64 {
		match self {
			Self::Day => DAY_SECS,
			Self::Week => 7 * DAY_SECS,
			Self::Month => 30 * DAY_SECS,
		}
	}
}

impl fmt::Display for ReportRange {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Day => write!(f, "24h"),
			Self::Week => write!(f, "7d"),
			Self::Month => write!(f, "30d"),
		}
	}
}

impl FromStr for ReportRange {
	type Err = CoreError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"24h" => Ok(Self::Day),
			"7d" => Ok(Self::Week),
			"30d" => Ok(Self::Month),
			_ => Err(CoreError::InvalidRange(s.to_string())),
		}
	}
}

/// Align a timestamp down to its minute boundary.
pub fn floor_to_minute(ts: i64) -> i64 {
	ts.div_euclid(60) * 60
}

/// 95th percentile of an ascending-sorted sample.
///
/// Index `ceil(0.95 * n) - 1`, clamped to `[0, n - 1]`; a single-element
/// sample returns that element. Empty input has no percentile.
pub fn p95(sorted: &[i64]) -> Option<i64> {
	if sorted.is_empty() {
		return None;
	}
	let n = sorted.len();
	let index = ((n as f64 * 0.95).ceil() as usize)
		.saturating_sub(1)
		.min(n - 1);
	Some(sorted[index])
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	proptest! {
		#[test]
		fn range_roundtrip(range in prop_oneof![
			Just(ReportRange::Day),
			Just(ReportRange::Week),
			Just(ReportRange::Month),
		]) {
			let s = range.to_string();
			let parsed: ReportRange = s.parse().unwrap();
			prop_assert_eq!(range, parsed);
		}

		#[test]
		fn floor_to_minute_is_aligned(ts in 0i64..4_000_000_000) {
			let floored = floor_to_minute(ts);
			prop_assert_eq!(floored % 60, 0);
			prop_assert!(floored <= ts && ts - floored < 60);
		}

		#[test]
		fn p95_is_a_sample_element(mut xs in prop::collection::vec(0i64..100_000, 1..200)) {
			xs.sort_unstable();
			let value = p95(&xs).unwrap();
			prop_assert!(xs.contains(&value));
			// At least 95% of the sample is at or below the percentile.
			let at_or_below = xs.iter().filter(|&&x| x <= value).count();
			prop_assert!(at_or_below * 100 >= xs.len() * 95);
		}
	}

	#[test]
	fn range_rejects_junk() {
		assert!("1h".parse::<ReportRange>().is_err());
		assert!("24H".parse::<ReportRange>().is_err());
		assert!("".parse::<ReportRange>().is_err());
	}

	#[test]
	fn range_seconds() {
		assert_eq!(ReportRange::Day.as_secs(), 86_400);
		assert_eq!(ReportRange::Week.as_secs(), 604_800);
		assert_eq!(ReportRange::Month.as_secs(), 2_592_000);
	}

	#[test]
	fn range_serializes_as_keyword() {
		assert_eq!(serde_json::to_string(&ReportRange::Day).unwrap(), "\"24h\"");
		assert_eq!(
			serde_json::from_str::<ReportRange>("\"30d\"").unwrap(),
			ReportRange::Month
		);
	}

	#[test]
	fn p95_empty_is_none() {
		assert_eq!(p95(&[]), None);
	}

	#[test]
	fn p95_single_element() {
		assert_eq!(p95(&[42]), Some(42));
	}

	#[test]
	fn p95_small_samples() {
		assert_eq!(p95(&[1, 2]), Some(2));
		assert_eq!(p95(&[1, 2, 3]), Some(3));
	}

	#[test]
	fn p95_twenty_elements_takes_nineteenth() {
		let xs: Vec<i64> = (1..=20).collect();
		// ceil(0.95 * 20) - 1 = 18 (zero-based), the value 19.
		assert_eq!(p95(&xs), Some(19));
	}
}
