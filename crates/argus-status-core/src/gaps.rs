// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Observation gap classification.
//!
//! A check's verdict covers `[checked_at, checked_at + interval_sec)`; outside
//! that window the monitor is unknown until the next check. This module turns
//! a sparse check timeline into the merged set of unknown sub-intervals of a
//! query range.

use crate::interval::{push_merged, Interval};
use crate::monitor::{CheckResult, CheckStatus};

/// Compute the merged set of sub-intervals of `[range_start, range_end)`
/// during which the monitor's status is unknown.
///
/// `checks` must be sorted ascending by `checked_at` and should include the
/// last check before `range_start` (if any) so a verdict straddling the range
/// boundary carries over instead of opening the range as unknown.
///
/// A non-positive `interval_sec` is a degenerate schedule: no verdict can be
/// trusted, and the whole range is unknown.
pub fn unknown_intervals(
	range_start: i64,
	range_end: i64,
	interval_sec: i64,
	checks: &[CheckResult],
) -> Vec<Interval> {
	if range_end <= range_start {
		return Vec::new();
	}
	if interval_sec <= 0 {
		return vec![Interval::new(range_start, range_end)];
	}

	let mut unknown = Vec::new();
	let mut cursor = range_start;
	let mut last_check: Option<&CheckResult> = None;

	for check in checks {
		if check.checked_at < range_start {
			// Carry-over: the freshest verdict taken before the range.
			last_check = Some(check);
			continue;
		}
		if check.checked_at >= range_end {
			break;
		}
		classify_segment(&mut unknown, cursor, check.checked_at, interval_sec, last_check);
		last_check = Some(check);
		cursor = check.checked_at;
	}

	classify_segment(&mut unknown, cursor, range_end, interval_sec, last_check);
	unknown
}

/// Classify `[seg_start, seg_end)` against the verdict in force at its start.
fn classify_segment(
	unknown: &mut Vec<Interval>,
	seg_start: i64,
	seg_end: i64,
	interval_sec: i64,
	last_check: Option<&CheckResult>,
) {
	if seg_end <= seg_start {
		return;
	}

	let Some(last) = last_check else {
		push_merged(unknown, Interval::new(seg_start, seg_end));
		return;
	};

	let valid_until = last.checked_at + interval_sec;
	if seg_start >= valid_until {
		// The prior verdict expired before this segment began.
		push_merged(unknown, Interval::new(seg_start, seg_end));
		return;
	}

	let covered_end = seg_end.min(valid_until);
	if last.status == CheckStatus::Unknown {
		push_merged(unknown, Interval::new(seg_start, covered_end));
	}
	if covered_end < seg_end {
		// Verdict expired inside the segment.
		push_merged(unknown, Interval::new(covered_end, seg_end));
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::interval::sum;
	use crate::monitor::MonitorId;

	fn check(checked_at: i64, status: CheckStatus) -> CheckResult {
		CheckResult {
			monitor_id: MonitorId(1),
			checked_at,
			status,
			latency_ms: None,
		}
	}

	#[test]
	fn empty_range_is_empty() {
		assert!(unknown_intervals(1000, 1000, 60, &[]).is_empty());
		assert!(unknown_intervals(1000, 900, 60, &[]).is_empty());
	}

	#[test]
	fn degenerate_schedule_is_all_unknown() {
		assert_eq!(
			unknown_intervals(1000, 1600, 0, &[check(1000, CheckStatus::Up)]),
			vec![Interval::new(1000, 1600)]
		);
		assert_eq!(
			unknown_intervals(1000, 1600, -60, &[]),
			vec![Interval::new(1000, 1600)]
		);
	}

	#[test]
	fn no_checks_is_all_unknown() {
		assert_eq!(
			unknown_intervals(1000, 1600, 60, &[]),
			vec![Interval::new(1000, 1600)]
		);
	}

	#[test]
	fn continuous_up_coverage_has_no_gaps() {
		let checks: Vec<CheckResult> = (0..11)
			.map(|i| check(940 + i * 60, CheckStatus::Up))
			.collect();
		assert!(unknown_intervals(1000, 1600, 60, &checks).is_empty());
	}

	#[test]
	fn expired_verdict_before_range_leaves_whole_range_unknown() {
		let checks = vec![check(900, CheckStatus::Up)];
		assert_eq!(
			unknown_intervals(1000, 1600, 60, &checks),
			vec![Interval::new(1000, 1600)]
		);
	}

	#[test]
	fn straddling_verdict_covers_range_start() {
		let checks = vec![check(970, CheckStatus::Up)];
		assert_eq!(
			unknown_intervals(1000, 1600, 60, &checks),
			vec![Interval::new(1030, 1600)]
		);
	}

	#[test]
	fn unknown_verdict_counts_as_unknown_while_valid() {
		let checks = vec![check(1000, CheckStatus::Unknown)];
		// Both the covered window and the expired tail are unknown,
		// coalesced into one interval.
		assert_eq!(
			unknown_intervals(1000, 1600, 60, &checks),
			vec![Interval::new(1000, 1600)]
		);
	}

	#[test]
	fn down_verdict_is_not_unknown() {
		let checks = vec![check(1000, CheckStatus::Down), check(1060, CheckStatus::Down)];
		assert_eq!(
			unknown_intervals(1000, 1120, 60, &checks),
			Vec::<Interval>::new()
		);
	}

	#[test]
	fn gap_between_checks_is_unknown() {
		let checks = vec![check(1000, CheckStatus::Up), check(1300, CheckStatus::Up)];
		// [1060, 1300) has no valid verdict; the second check covers the rest.
		assert_eq!(
			unknown_intervals(1000, 1360, 60, &checks),
			vec![Interval::new(1060, 1300)]
		);
	}

	#[test]
	fn checks_past_range_end_are_ignored() {
		let checks = vec![check(1000, CheckStatus::Up), check(2000, CheckStatus::Up)];
		assert_eq!(
			unknown_intervals(1000, 1600, 60, &checks),
			vec![Interval::new(1060, 1600)]
		);
	}

	#[test]
	fn carry_over_prefers_latest_pre_range_check() {
		let checks = vec![check(800, CheckStatus::Unknown), check(970, CheckStatus::Up)];
		assert_eq!(
			unknown_intervals(1000, 1600, 60, &checks),
			vec![Interval::new(1030, 1600)]
		);
	}

	#[test]
	fn result_is_merged_and_bounded() {
		let checks = vec![
			check(1000, CheckStatus::Unknown),
			check(1100, CheckStatus::Up),
			check(1400, CheckStatus::Down),
		];
		let unknown = unknown_intervals(1000, 1600, 60, &checks);
		for pair in unknown.windows(2) {
			assert!(pair[0].end < pair[1].start);
		}
		assert!(sum(&unknown) <= 600);
		for interval in &unknown {
			assert!(interval.start >= 1000 && interval.end <= 1600);
		}
	}
}
