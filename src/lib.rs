#![forbid(unsafe_code)]
#![deny(
	dead_code,
	unused_imports,
	unused_must_use,
	unused_variables,
	unused_mut
)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![deny(
	clippy::as_conversions,
	clippy::dbg_macro,
	clippy::float_cmp_const,
	clippy::lossy_float_literal,
	clippy::string_to_string,
	clippy::unneeded_field_pattern,
	clippy::verbose_file_reads,
	clippy::unwrap_used,
	clippy::panic,
	clippy::needless_update,
	clippy::match_like_matches_macro,
	clippy::from_over_into,
	clippy::useless_conversion
)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod dynamo;
pub mod dynamo_util;
pub mod error;
pub mod in_memory;
pub mod platform;
pub mod push;
mod sync;
mod token;

pub use sync::TokenSync;
pub use token::{
	DeviceToken, TokenDB, TokenEntry, TokenRecord, DEFAULT_COLLECTION,
};
