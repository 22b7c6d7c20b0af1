use super::{AuthorizationStatus, PushProvider};
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PushCalls {
	pub permission: usize,
	pub registration: usize,
	pub token: usize,
}

/// answers with a fixed status and token, counting every call
pub struct InMemoryPushProvider {
	pub status: AuthorizationStatus,
	pub token: Option<String>,
	pub calls: Arc<Mutex<PushCalls>>,
}

impl InMemoryPushProvider {
	#[must_use]
	pub fn new(status: AuthorizationStatus, token: Option<&str>) -> Self {
		Self {
			status,
			token: token.map(ToString::to_string),
			calls: Arc::default(),
		}
	}

	pub async fn calls(&self) -> PushCalls {
		*self.calls.lock().await
	}
}

impl Default for InMemoryPushProvider {
	fn default() -> Self {
		Self::new(AuthorizationStatus::Authorized, None)
	}
}

#[async_trait]
impl PushProvider for InMemoryPushProvider {
	async fn request_permission(&self) -> Result<AuthorizationStatus> {
		self.calls.lock().await.permission += 1;
		Ok(self.status)
	}

	async fn register_device_for_remote_messages(&self) -> Result<()> {
		self.calls.lock().await.registration += 1;
		Ok(())
	}

	async fn get_token(&self) -> Result<Option<String>> {
		self.calls.lock().await.token += 1;
		Ok(self.token.clone())
	}
}
