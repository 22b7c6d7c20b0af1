mod in_memory;

pub use in_memory::{InMemoryPushProvider, PushCalls};

use crate::error::Result;
use async_trait::async_trait;
use strum::Display;

/// notification authorization as reported by the push provider
#[derive(Debug, Copy, Clone, PartialEq, Eq, Display)]
pub enum AuthorizationStatus {
	NotDetermined,
	Denied,
	Authorized,
	Provisional,
	Ephemeral,
}

impl AuthorizationStatus {
	/// provisional authorization delivers quietly but still counts as granted
	#[must_use]
	pub const fn is_enabled(self) -> bool {
		matches!(self, Self::Authorized | Self::Provisional)
	}
}

#[async_trait]
pub trait PushProvider: Send + Sync {
	async fn request_permission(&self) -> Result<AuthorizationStatus>;
	async fn register_device_for_remote_messages(&self) -> Result<()>;
	/// `None` or an empty string if the provider has no token yet
	async fn get_token(&self) -> Result<Option<String>>;
}
