use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumString};

/// operating system class a device token was issued on
#[derive(
	Debug,
	Copy,
	Clone,
	PartialEq,
	Eq,
	Hash,
	EnumString,
	Display,
	Serialize,
	Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Platform {
	Ios,
	Android,
	Macos,
	Windows,
	Web,
}

impl Platform {
	/// # Errors
	/// fails if `value` names no known platform
	pub fn parse(value: &str) -> Result<Self> {
		Self::from_str(value)
			.map_err(|_| Error::UnknownPlatform(value.to_string()))
	}

	/// only ios asks the user before notifications can be shown
	#[must_use]
	pub const fn requires_consent(self) -> bool {
		matches!(self, Self::Ios)
	}
}

impl Default for Platform {
	fn default() -> Self {
		Self::Android
	}
}
