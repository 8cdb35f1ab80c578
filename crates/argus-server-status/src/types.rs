// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Shared response fragments.

use serde::{Deserialize, Serialize};

use argus_status_core::{Monitor, MonitorId};

/// Monitor identity as embedded in per-monitor report documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct MonitorRef {
	pub id: MonitorId,
	pub name: String,
}

impl From<&Monitor> for MonitorRef {
	fn from(monitor: &Monitor) -> Self {
		Self {
			id: monitor.id,
			name: monitor.name.clone(),
		}
	}
}
