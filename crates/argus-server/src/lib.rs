// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Argus public status server.
//!
//! This crate provides the HTTP surface for the public status and uptime
//! query engine: fleet status, per-monitor latency and uptime reports, and a
//! health probe, all read-only over a SQLite snapshot.

pub mod api;
pub mod api_docs;
pub mod config;
pub mod routes;

pub use api::{create_app_state, create_router, AppState};
pub use api_docs::ApiDoc;
pub use config::{ConfigError, ServerConfig};
