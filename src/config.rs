use crate::{error::Result, platform::Platform, token::DEFAULT_COLLECTION};
use rusoto_core::Region;
use std::str::FromStr;

pub const ENV_TABLE: &str = "TOKENSYNC_TABLE";
pub const ENV_PLATFORM: &str = "TOKENSYNC_PLATFORM";
pub const ENV_REGION: &str = "TOKENSYNC_REGION";
pub const ENV_DDB_LOCAL: &str = "DDB_LOCAL";
pub const ENV_DDB_URL: &str = "DDB_URL";

const DEFAULT_DDB_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
	pub table: String,
	pub platform: Platform,
	pub region: Region,
	/// `Some(endpoint)` talks to a local dynamodb with static credentials
	pub local_endpoint: Option<String>,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			table: DEFAULT_COLLECTION.to_string(),
			platform: Platform::default(),
			region: Region::EuWest1,
			local_endpoint: None,
		}
	}
}

impl Config {
	/// # Errors
	/// fails on an unknown platform name
	pub fn from_env() -> Result<Self> {
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	fn from_lookup<F>(lookup: F) -> Result<Self>
	where
		F: Fn(&str) -> Option<String>,
	{
		let defaults = Self::default();

		let platform = match lookup(ENV_PLATFORM) {
			Some(value) => Platform::parse(&value)?,
			None => defaults.platform,
		};

		let region = lookup(ENV_REGION)
			.and_then(|value| {
				Region::from_str(&value)
					.map_err(|e| {
						tracing::warn!("ignoring region {}: {}", value, e);
					})
					.ok()
			})
			.unwrap_or(defaults.region);

		let local_endpoint = lookup(ENV_DDB_LOCAL).map(|_| {
			lookup(ENV_DDB_URL)
				.unwrap_or_else(|| DEFAULT_DDB_URL.to_string())
		});

		Ok(Self {
			table: lookup(ENV_TABLE).unwrap_or(defaults.table),
			platform,
			region,
			local_endpoint,
		})
	}

	#[must_use]
	pub const fn is_local_setup(&self) -> bool {
		self.local_endpoint.is_some()
	}
}

#[cfg(test)]
mod tests {
	#![allow(clippy::unwrap_used)]
	use super::*;
	use pretty_assertions::assert_eq;
	use std::collections::HashMap;

	fn lookup(
		vars: &[(&str, &str)],
	) -> impl Fn(&str) -> Option<String> {
		let vars: HashMap<String, String> = vars
			.iter()
			.map(|(k, v)| ((*k).to_string(), (*v).to_string()))
			.collect();
		move |key: &str| vars.get(key).cloned()
	}

	#[test]
	fn test_defaults() {
		let config = Config::from_lookup(lookup(&[])).unwrap();

		assert_eq!(config, Config::default());
		assert_eq!(config.table, "userFCMTokens");
		assert!(!config.is_local_setup());
	}

	#[test]
	fn test_local() {
		let config = Config::from_lookup(lookup(&[
			(ENV_DDB_LOCAL, "1"),
			(ENV_PLATFORM, "ios"),
			(ENV_TABLE, "tokens"),
		]))
		.unwrap();

		assert_eq!(
			config.local_endpoint.as_deref(),
			Some("http://localhost:8000")
		);
		assert_eq!(config.platform, Platform::Ios);
		assert_eq!(config.table, "tokens");
	}

	#[test]
	fn test_region_and_url() {
		let config = Config::from_lookup(lookup(&[
			(ENV_DDB_LOCAL, "1"),
			(ENV_DDB_URL, "http://dynamo:4566"),
			(ENV_REGION, "us-east-1"),
		]))
		.unwrap();

		assert_eq!(
			config.local_endpoint.as_deref(),
			Some("http://dynamo:4566")
		);
		assert_eq!(config.region, Region::UsEast1);
	}

	#[test]
	fn test_bad_platform() {
		assert!(Config::from_lookup(lookup(&[(ENV_PLATFORM, "beos")]))
			.is_err());
	}
}
