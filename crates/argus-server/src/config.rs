// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Server configuration.
//!
//! Built-in defaults overridden by `ARGUS_SERVER_*` environment variables.
//! The engine's only external dependency is the datastore handle; everything
//! else here is listener plumbing.

use thiserror::Error;

/// Errors raised while resolving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("invalid value for {key}: {value}")]
	InvalidValue { key: String, value: String },
}

/// Fully resolved server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
	pub http: HttpConfig,
	pub database: DatabaseConfig,
	pub logging: LoggingConfig,
}

#[derive(Debug, Clone)]
pub struct HttpConfig {
	pub host: String,
	pub port: u16,
}

impl Default for HttpConfig {
	fn default() -> Self {
		Self {
			host: "127.0.0.1".to_string(),
			port: 3000,
		}
	}
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
	pub url: String,
}

impl Default for DatabaseConfig {
	fn default() -> Self {
		Self {
			url: "sqlite:./argus.db".to_string(),
		}
	}
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
	pub level: String,
}

impl Default for LoggingConfig {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
		}
	}
}

impl Default for ServerConfig {
	fn default() -> Self {
		Self {
			http: HttpConfig::default(),
			database: DatabaseConfig::default(),
			logging: LoggingConfig::default(),
		}
	}
}

impl ServerConfig {
	/// Resolve configuration from process environment variables.
	pub fn from_env() -> Result<Self, ConfigError> {
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	/// Resolve configuration from an arbitrary variable source.
	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
		let mut config = Self::default();

		if let Some(host) = lookup("ARGUS_SERVER_HOST") {
			config.http.host = host;
		}
		if let Some(port) = lookup("ARGUS_SERVER_PORT") {
			config.http.port = port.parse().map_err(|_| ConfigError::InvalidValue {
				key: "ARGUS_SERVER_PORT".to_string(),
				value: port,
			})?;
		}
		if let Some(url) = lookup("ARGUS_SERVER_DATABASE_URL") {
			config.database.url = url;
		}
		if let Some(level) = lookup("ARGUS_SERVER_LOG_LEVEL") {
			config.logging.level = level;
		}

		Ok(config)
	}

	/// Get the socket address string for binding.
	pub fn socket_addr(&self) -> String {
		format!("{}:{}", self.http.host, self.http.port)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashMap;

	fn lookup_from<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
		let map: HashMap<String, String> = vars
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect();
		move |key| map.get(key).cloned()
	}

	#[test]
	fn defaults_apply_without_overrides() {
		let config = ServerConfig::from_lookup(|_| None).unwrap();
		assert_eq!(config.socket_addr(), "127.0.0.1:3000");
		assert_eq!(config.database.url, "sqlite:./argus.db");
		assert_eq!(config.logging.level, "info");
	}

	#[test]
	fn environment_overrides_defaults() {
		let lookup = lookup_from(&[
			("ARGUS_SERVER_HOST", "0.0.0.0"),
			("ARGUS_SERVER_PORT", "8080"),
			("ARGUS_SERVER_DATABASE_URL", "sqlite:/var/lib/argus/argus.db"),
			("ARGUS_SERVER_LOG_LEVEL", "debug"),
		]);
		let config = ServerConfig::from_lookup(lookup).unwrap();
		assert_eq!(config.socket_addr(), "0.0.0.0:8080");
		assert_eq!(config.database.url, "sqlite:/var/lib/argus/argus.db");
		assert_eq!(config.logging.level, "debug");
	}

	#[test]
	fn invalid_port_is_rejected() {
		let lookup = lookup_from(&[("ARGUS_SERVER_PORT", "not-a-port")]);
		assert!(ServerConfig::from_lookup(lookup).is_err());
	}
}
