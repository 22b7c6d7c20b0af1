use crate::{error::Result, platform::Platform};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// collection the records live in unless configured otherwise
pub const DEFAULT_COLLECTION: &str = "userFCMTokens";

/// what a device hands to the store, `updated_at` is assigned on write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceToken {
	pub user_id: String,
	pub token: String,
	pub platform: Platform,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRecord {
	pub user_id: String,
	pub token: String,
	pub platform: Platform,
	pub updated_at: DateTime<Utc>,
}

impl TokenRecord {
	#[must_use]
	pub fn stamped(token: DeviceToken, now: DateTime<Utc>) -> Self {
		Self {
			user_id: token.user_id,
			token: token.token,
			platform: token.platform,
			updated_at: now,
		}
	}
}

/// listing projection of a [`TokenRecord`], leaves out the platform
///
/// `updated_at` is `None` for documents written without a readable timestamp
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenEntry {
	pub user_id: String,
	pub token: String,
	pub updated_at: Option<DateTime<Utc>>,
}

impl From<TokenRecord> for TokenEntry {
	fn from(record: TokenRecord) -> Self {
		Self {
			user_id: record.user_id,
			token: record.token,
			updated_at: Some(record.updated_at),
		}
	}
}

/// one record per user id, a `set` overwrites whatever was stored before
#[async_trait]
pub trait TokenDB: Send + Sync {
	async fn set(&self, token: DeviceToken) -> Result<()>;
	async fn delete(&self, user_id: &str) -> Result<()>;
	async fn get_all(&self) -> Result<Vec<TokenEntry>>;
}
