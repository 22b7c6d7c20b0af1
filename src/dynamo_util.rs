use crate::{
	config::Config,
	error::{Error, Result},
};
use rusoto_core::{
	credential::{DefaultCredentialsProvider, StaticProvider},
	HttpClient, Region,
};
use rusoto_dynamodb::{
	AttributeDefinition, AttributeValue, CreateTableInput, DynamoDb,
	DynamoDbClient, KeySchemaElement, ListTablesInput,
	ProvisionedThroughput,
};
use std::collections::HashMap;

pub type DynamoHashMap = HashMap<String, AttributeValue>;

#[must_use]
pub fn db_key(key: &str, value: &str) -> DynamoHashMap {
	let mut attrs = HashMap::new();
	attrs.insert(key.to_string(), string_attr(value.to_string()));
	attrs
}

#[must_use]
pub fn string_attr(value: String) -> AttributeValue {
	AttributeValue {
		s: Some(value),
		..AttributeValue::default()
	}
}

/// checks that `table` exists, in a local setup it gets created with `id`(string hash) as the primary key
/// # Errors
/// fails with network errors or if the table is missing remotely
pub async fn table_init<DB>(
	db: &DB,
	table: &str,
	create_missing: bool,
) -> Result<()>
where
	DB: DynamoDb + Clone + Send + Sync,
{
	let tables = db
		.list_tables(ListTablesInput {
			limit: None,
			exclusive_start_table_name: None,
		})
		.await?;

	let table_exists = tables
		.table_names
		.unwrap_or_default()
		.iter()
		.any(|n| *n == table);

	tracing::trace!("db table exists: {}", table_exists);

	if !table_exists {
		if !create_missing {
			return Err(Error::TableNotFound(table.to_string()));
		}

		tracing::info!("create table: {}", table);

		let _res = db
			.create_table(CreateTableInput {
				table_name: table.into(),
				key_schema: vec![KeySchemaElement {
					attribute_name: "id".into(),
					key_type: "HASH".into(),
				}],
				attribute_definitions: vec![AttributeDefinition {
					attribute_name: "id".into(),
					attribute_type: "S".into(),
				}],
				provisioned_throughput: Some(ProvisionedThroughput {
					read_capacity_units: 1,
					write_capacity_units: 1,
				}),
				..CreateTableInput::default()
			})
			.await?;

		tracing::info!("table created: {:?}", table);
	}

	Ok(())
}

/// create new dynamodb connection
///
/// # Errors
///
/// http connections can fail
pub fn db_init(config: &Config) -> Result<DynamoDbClient> {
	let dispatcher = HttpClient::new()?;

	if let Some(url) = &config.local_endpoint {
		tracing::info!("ddb url: {}", url);

		Ok(DynamoDbClient::new_with(
			dispatcher,
			StaticProvider::new_minimal(
				"foo".to_string(),
				"bar".to_string(),
			),
			Region::Custom {
				name: "local".into(),
				endpoint: url.clone(),
			},
		))
	} else {
		Ok(DynamoDbClient::new_with(
			dispatcher,
			DefaultCredentialsProvider::new()?,
			config.region.clone(),
		))
	}
}
