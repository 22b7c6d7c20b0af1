use crate::{
	config::Config,
	dynamo_util::{db_init, db_key, string_attr, table_init, DynamoHashMap},
	error::{self, Error, Result},
	token::{DeviceToken, TokenDB, TokenEntry, TokenRecord},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rusoto_dynamodb::{
	DeleteItemInput, DynamoDb, DynamoDbClient, PutItemInput, ScanInput,
};
use std::convert::TryFrom;
use tracing::instrument;

#[derive(Clone)]
pub struct DynamoTokenDB {
	db: DynamoDbClient,
	table: String,
}

impl DynamoTokenDB {
	/// # Errors
	/// Returns an error if the table does not exist
	pub async fn new(
		table_name: &str,
		db: DynamoDbClient,
	) -> Result<Self> {
		table_init(&db, table_name, false).await?;
		Ok(Self {
			db,
			table: table_name.to_string(),
		})
	}

	/// connects using `config`, a local setup creates the table if needed
	///
	/// # Errors
	/// client creation or the table check can fail
	pub async fn from_config(config: &Config) -> Result<Self> {
		let db = db_init(config)?;
		table_init(&db, &config.table, config.is_local_setup()).await?;
		Ok(Self {
			db,
			table: config.table.clone(),
		})
	}

	#[instrument(skip(self), err)]
	async fn save(&self, record: TokenRecord) -> Result<()> {
		let input = PutItemInput {
			table_name: self.table.clone(),
			item: record.into(),
			..PutItemInput::default()
		};

		self.db.put_item(input).await?;

		tracing::debug!("saved");

		Ok(())
	}

	#[instrument(skip(self), err)]
	async fn remove(&self, user_id: &str) -> Result<()> {
		let input = DeleteItemInput {
			table_name: self.table.clone(),
			key: db_key("id", user_id),
			..DeleteItemInput::default()
		};

		self.db.delete_item(input).await?;

		tracing::debug!("deleted");

		Ok(())
	}

	#[instrument(skip(self), err)]
	async fn scan_all(&self) -> Result<Vec<TokenEntry>> {
		let mut entries = Vec::new();
		let mut start_key = None;

		loop {
			let output = self
				.db
				.scan(ScanInput {
					table_name: self.table.clone(),
					exclusive_start_key: start_key.take(),
					..ScanInput::default()
				})
				.await?;

			for item in output.items.unwrap_or_default() {
				match TokenEntry::try_from(item) {
					Ok(entry) => entries.push(entry),
					Err(e) => tracing::warn!("skipping record: {}", e),
				}
			}

			match output.last_evaluated_key {
				Some(key) if !key.is_empty() => start_key = Some(key),
				_ => break,
			}
		}

		tracing::debug!("scanned: {}", entries.len());

		Ok(entries)
	}
}

impl From<TokenRecord> for DynamoHashMap {
	fn from(v: TokenRecord) -> Self {
		let mut map = Self::with_capacity(5);
		map.insert("id".to_string(), string_attr(v.user_id.clone()));
		map.insert("user_id".to_string(), string_attr(v.user_id));
		map.insert("token".to_string(), string_attr(v.token));
		map.insert(
			"platform".to_string(),
			string_attr(v.platform.to_string()),
		);
		map.insert(
			"updated_at".to_string(),
			string_attr(v.updated_at.to_rfc3339()),
		);
		map
	}
}

/// reads only what a listing needs, older or foreign documents may lack
/// `platform` or carry a timestamp we can't parse
impl TryFrom<DynamoHashMap> for TokenEntry {
	type Error = error::Error;

	fn try_from(map: DynamoHashMap) -> Result<Self> {
		Ok(Self {
			user_id: map
				.get("user_id")
				.or_else(|| map.get("id"))
				.and_then(|attr| attr.s.clone())
				.ok_or(Error::DynamoDeserialize("user_id"))?,
			token: map
				.get("token")
				.and_then(|attr| attr.s.clone())
				.ok_or(Error::DynamoDeserialize("token"))?,
			updated_at: map
				.get("updated_at")
				.and_then(|attr| attr.s.as_deref())
				.and_then(|s| DateTime::parse_from_rfc3339(s).ok())
				.map(|date| date.with_timezone(&Utc)),
		})
	}
}

#[async_trait]
impl TokenDB for DynamoTokenDB {
	async fn set(&self, token: DeviceToken) -> Result<()> {
		self.save(TokenRecord::stamped(token, Utc::now())).await
	}

	async fn delete(&self, user_id: &str) -> Result<()> {
		self.remove(user_id).await
	}

	async fn get_all(&self) -> Result<Vec<TokenEntry>> {
		self.scan_all().await
	}
}
