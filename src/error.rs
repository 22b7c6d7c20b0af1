use rusoto_core::{
	credential::CredentialsError, request::TlsError, RusotoError,
};
use rusoto_dynamodb::{
	CreateTableError, DeleteItemError, ListTablesError, PutItemError,
	ScanError,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
	#[error("permission request failed: {0}")]
	Permission(String),

	#[error("device registration failed: {0}")]
	Registration(String),

	#[error("token fetch failed: {0}")]
	TokenFetch(String),

	#[error("rusoto put error: {0}")]
	RusotoPutItem(#[from] RusotoError<PutItemError>),

	#[error("rusoto delete item error: {0}")]
	RusotoDeleteItem(#[from] RusotoError<DeleteItemError>),

	#[error("rusoto scan error: {0}")]
	RusotoScan(#[from] RusotoError<ScanError>),

	#[error("rusoto list tables error: {0}")]
	RusotoListTables(#[from] RusotoError<ListTablesError>),

	#[error("rusoto create table error: {0}")]
	RusotoCreateTable(#[from] RusotoError<CreateTableError>),

	#[error("aws error: {0}")]
	RusotoCredentials(#[from] CredentialsError),

	#[error("aws error: {0}")]
	RusotoTls(#[from] TlsError),

	#[error("table {0} not found error")]
	TableNotFound(String),

	#[error("DynamoDeserializeError for field: {0}")]
	DynamoDeserialize(&'static str),

	#[error("unknown platform: {0}")]
	UnknownPlatform(String),

	#[error("custom error: {0}")]
	Custom(String),
}

pub type Result<T> = std::result::Result<T, Error>;
