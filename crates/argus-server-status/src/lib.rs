// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Datastore queries and aggregation for the Argus public status surface.
//!
//! The repository reads four relations (`monitors`, `monitor_state`,
//! `check_results`, `outages`) as a snapshot; the aggregators combine those
//! reads with the pure machinery in `argus-status-core` to build the fleet
//! status, latency, and uptime documents. Nothing here writes.

pub mod db;
pub mod error;
pub mod fleet;
pub mod latency;
pub mod repository;
pub mod testing;
pub mod types;
pub mod uptime;

pub use db::create_pool;
pub use error::{Result, StatusServerError};
pub use fleet::{fleet_status, FleetStatus, Heartbeat, MonitorOverview};
pub use latency::{latency_report, LatencyPoint, LatencyReport};
pub use repository::{SqliteStatusRepository, StatusRepository};
pub use types::MonitorRef;
pub use uptime::{uptime_report, UptimeReport};
