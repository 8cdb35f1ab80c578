// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Half-open interval algebra over integer seconds.
//!
//! A merged interval set is non-overlapping, non-touching, and ascending by
//! start. `sum` and `overlap` require merged input; `merge` and `push_merged`
//! produce it. Intervals with `end <= start` are dropped before they
//! participate in any operation.

use serde::{Deserialize, Serialize};

/// A half-open time interval `[start, end)` with `end > start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
	pub start: i64,
	pub end: i64,
}

impl Interval {
	pub fn new(start: i64, end: i64) -> Self {
		Self { start, end }
	}

	/// Length in seconds; degenerate intervals measure zero.
	pub fn len(&self) -> i64 {
		(self.end - self.start).max(0)
	}

	pub fn is_empty(&self) -> bool {
		self.end <= self.start
	}
}

/// Merge overlapping and touching intervals into a merged set.
///
/// Empty input returns empty. Intervals sharing a start collapse into the one
/// with the larger end.
pub fn merge(intervals: Vec<Interval>) -> Vec<Interval> {
	let mut intervals: Vec<Interval> = intervals.into_iter().filter(|iv| !iv.is_empty()).collect();
	intervals.sort_by_key(|iv| (iv.start, iv.end));

	let mut merged = Vec::with_capacity(intervals.len());
	for interval in intervals {
		push_merged(&mut merged, interval);
	}
	merged
}

/// Append `candidate` to an in-construction merged set, coalescing with the
/// last element when the two overlap or touch.
///
/// Callers must append in ascending start order; degenerate candidates are
/// dropped.
pub fn push_merged(set: &mut Vec<Interval>, candidate: Interval) {
	if candidate.is_empty() {
		return;
	}
	match set.last_mut() {
		Some(last) if candidate.start <= last.end => {
			last.end = last.end.max(candidate.end);
		}
		_ => set.push(candidate),
	}
}

/// Total length in seconds of a merged set.
pub fn sum(set: &[Interval]) -> i64 {
	set.iter().map(Interval::len).sum()
}

/// Seconds of intersection between two merged sets.
///
/// Two-pointer sweep; the pointer whose interval ends first advances, `a` on
/// ties.
pub fn overlap(a: &[Interval], b: &[Interval]) -> i64 {
	let mut total = 0;
	let (mut i, mut j) = (0, 0);

	while i < a.len() && j < b.len() {
		let start = a[i].start.max(b[j].start);
		let end = a[i].end.min(b[j].end);
		if end > start {
			total += end - start;
		}
		if a[i].end <= b[j].end {
			i += 1;
		} else {
			j += 1;
		}
	}
	total
}
