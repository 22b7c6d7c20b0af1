use crate::{
	error::Result,
	token::{DeviceToken, TokenDB, TokenEntry, TokenRecord},
};
use async_trait::async_trait;
use chrono::Utc;
use std::{collections::HashMap, sync::Arc};
use tokio::sync::Mutex;

#[derive(Default)]
pub struct InMemoryTokenDB {
	pub db: Arc<Mutex<HashMap<String, TokenRecord>>>,
}

#[async_trait]
impl TokenDB for InMemoryTokenDB {
	async fn set(&self, token: DeviceToken) -> Result<()> {
		let mut db = self.db.lock().await;

		db.insert(
			token.user_id.clone(),
			TokenRecord::stamped(token, Utc::now()),
		);

		Ok(())
	}

	async fn delete(&self, user_id: &str) -> Result<()> {
		self.db.lock().await.remove(user_id);
		Ok(())
	}

	async fn get_all(&self) -> Result<Vec<TokenEntry>> {
		let db = self.db.lock().await;
		Ok(db.values().cloned().map(TokenEntry::from).collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::platform::Platform;
	use pretty_assertions::assert_eq;

	fn device(user_id: &str, token: &str) -> DeviceToken {
		DeviceToken {
			user_id: user_id.to_string(),
			token: token.to_string(),
			platform: Platform::Android,
		}
	}

	#[tokio::test]
	async fn test_set_overwrites() {
		let tokens = InMemoryTokenDB::default();

		tokens.set(device("uid", "first")).await.unwrap();
		tokens.set(device("uid", "second")).await.unwrap();

		let all = tokens.get_all().await.unwrap();
		assert_eq!(all.len(), 1);
		assert_eq!(all[0].token, "second");
	}

	#[tokio::test]
	async fn test_delete_missing_is_ok() {
		let tokens = InMemoryTokenDB::default();

		tokens.set(device("uid", "howdy")).await.unwrap();
		tokens.delete("other").await.unwrap();
		tokens.delete("uid").await.unwrap();

		assert!(tokens.get_all().await.unwrap().is_empty());
	}
}
