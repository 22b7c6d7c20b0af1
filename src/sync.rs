use crate::{
	config::Config,
	dynamo::DynamoTokenDB,
	error::Result,
	platform::Platform,
	push::PushProvider,
	token::{DeviceToken, TokenDB, TokenEntry},
};
use std::sync::Arc;
use tracing::instrument;

/// Bridges the device's push identity to the per-user token record.
///
/// Every public operation is best effort: failures are logged and turned
/// into a default value, nothing is returned to the caller as an error.
pub struct TokenSync {
	push: Arc<dyn PushProvider>,
	tokens: Arc<dyn TokenDB>,
	platform: Platform,
}

impl TokenSync {
	#[must_use]
	pub fn new(
		push: Arc<dyn PushProvider>,
		tokens: Arc<dyn TokenDB>,
		platform: Platform,
	) -> Self {
		Self {
			push,
			tokens,
			platform,
		}
	}

	/// uses dynamodb as configured in `config`
	///
	/// # Errors
	/// fails if the store is not reachable or the table is missing
	pub async fn connect(
		config: &Config,
		push: Arc<dyn PushProvider>,
	) -> Result<Self> {
		let tokens = DynamoTokenDB::from_config(config).await?;
		Ok(Self::new(push, Arc::new(tokens), config.platform))
	}

	#[must_use]
	pub const fn platform(&self) -> Platform {
		self.platform
	}

	/// `true` if notifications may be shown, only ios actually asks
	#[instrument(skip(self), fields(platform = %self.platform))]
	pub async fn request_permission(&self) -> bool {
		if !self.platform.requires_consent() {
			return true;
		}

		match self.push.request_permission().await {
			Ok(status) => {
				tracing::info!("authorization status: {}", status);
				status.is_enabled()
			}
			Err(e) => {
				tracing::error!("error requesting permission: {}", e);
				false
			}
		}
	}

	/// registers the device and stores its token under `user_id`
	#[instrument(skip(self))]
	pub async fn save_token(&self, user_id: Option<&str>) {
		let user_id = match user_id {
			Some(id) if !id.is_empty() => id,
			_ => return,
		};

		if let Err(e) = self.try_save_token(user_id).await {
			tracing::error!("error saving token: {}", e);
		}
	}

	async fn try_save_token(&self, user_id: &str) -> Result<()> {
		if self.platform.requires_consent() {
			let enabled = self.request_permission().await;
			tracing::debug!("permission enabled: {}", enabled);

			if !enabled {
				tracing::warn!("permission not granted");
				return Ok(());
			}
		}

		self.push.register_device_for_remote_messages().await?;
		let token = self.push.get_token().await?;

		tracing::debug!("token: {:?}", token);

		if let Some(token) = token.filter(|token| !token.is_empty()) {
			self.tokens
				.set(DeviceToken {
					user_id: user_id.to_string(),
					token,
					platform: self.platform,
				})
				.await?;
		}

		// logged even when the provider had no token to store
		tracing::info!("token-saved: {}", user_id);

		Ok(())
	}

	#[instrument(skip(self))]
	pub async fn remove_token(&self, user_id: &str) {
		match self.tokens.delete(user_id).await {
			Ok(()) => tracing::info!("token-removed"),
			Err(e) => tracing::error!("error removing token: {}", e),
		}
	}

	/// every stored token in store order, empty if the store failed
	#[instrument(skip(self))]
	pub async fn list_tokens(&self) -> Vec<TokenEntry> {
		match self.tokens.get_all().await {
			Ok(entries) => {
				tracing::info!("tokens-retrieved: {}", entries.len());
				entries
			}
			Err(e) => {
				tracing::error!("error getting tokens: {}", e);
				Vec::new()
			}
		}
	}
}
