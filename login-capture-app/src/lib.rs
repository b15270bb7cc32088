//! Platform-agnostic application bootstrap for the login capture flow.
//!
//! Provides `AppConfig` (environment configuration), `AppState` (service
//! container), `AppStateBuilder` (adapter injection) and the fallback store
//! adapters.

pub mod adapters;
pub mod config;

use std::sync::Arc;
use std::time::Duration;

use login_capture_core::error::{CoreError, CoreResult};
use login_capture_core::services::{
    LoginSession, NotificationFunction, ServiceContext, SubmissionService,
    DEFAULT_TRANSITION_DELAY,
};
use login_capture_core::traits::FallbackStore;
use login_capture_core::{GatewayConfig, RemoteBinding};

use adapters::JsonFileFallbackStore;
pub use config::AppConfig;

/// Platform-agnostic application state.
///
/// Holds the `ServiceContext` and the shared submission service. Every
/// frontend constructs this once at startup via `AppStateBuilder` (or
/// [`AppState::from_config`]) and opens one [`LoginSession`] per form.
pub struct AppState {
    /// Service context (remote binding + fallback store)
    pub ctx: Arc<ServiceContext>,
    /// Submission orchestrator shared by all sessions
    pub submission_service: Arc<SubmissionService>,
    /// Server-side notification handler, present only with a remote store
    pub notification_function: Option<NotificationFunction>,
    /// Delay applied to new sessions
    pub transition_delay: Duration,
}

impl AppState {
    /// Build the state from environment configuration, using a JSON file
    /// fallback store under `config.data_dir`.
    pub fn from_config(config: &AppConfig) -> CoreResult<Self> {
        let store = JsonFileFallbackStore::in_dir(&config.data_dir);
        AppStateBuilder::new()
            .fallback_store(Arc::new(store))
            .gateway_config(config.gateway_config())
            .transition_delay(config.transition_delay)
            .build()
    }

    /// Open a new login session.
    #[must_use]
    pub fn new_session(&self) -> LoginSession {
        LoginSession::with_delay(Arc::clone(&self.submission_service), self.transition_delay)
    }

    /// Whether submissions go to the remote store first.
    #[must_use]
    pub fn remote_configured(&self) -> bool {
        self.ctx.remote.is_configured()
    }
}

/// Builder for constructing `AppState` with platform-specific adapters.
///
/// # Required adapters
/// - `fallback_store` — where attempts go when the remote store is unavailable
///
/// # Optional
/// - `gateway_config` — defaults to `GatewayConfig::Unconfigured`
/// - `remote_binding` — an already bound backend, overrides `gateway_config`
/// - `transition_delay` — defaults to `DEFAULT_TRANSITION_DELAY`
pub struct AppStateBuilder {
    fallback_store: Option<Arc<dyn FallbackStore>>,
    gateway_config: GatewayConfig,
    remote_binding: Option<RemoteBinding>,
    transition_delay: Duration,
}

impl AppStateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            fallback_store: None,
            gateway_config: GatewayConfig::Unconfigured,
            remote_binding: None,
            transition_delay: DEFAULT_TRANSITION_DELAY,
        }
    }

    #[must_use]
    pub fn fallback_store(mut self, store: Arc<dyn FallbackStore>) -> Self {
        self.fallback_store = Some(store);
        self
    }

    #[must_use]
    pub fn gateway_config(mut self, config: GatewayConfig) -> Self {
        self.gateway_config = config;
        self
    }

    #[must_use]
    pub fn remote_binding(mut self, binding: RemoteBinding) -> Self {
        self.remote_binding = Some(binding);
        self
    }

    #[must_use]
    pub fn transition_delay(mut self, delay: Duration) -> Self {
        self.transition_delay = delay;
        self
    }

    /// Build the `AppState`.
    ///
    /// # Errors
    /// Returns `CoreError::ConfigurationError` if the fallback store is missing,
    /// or the remote error if the gateway settings cannot be bound.
    pub fn build(self) -> CoreResult<AppState> {
        let fallback_store = self.fallback_store.ok_or_else(|| {
            CoreError::ConfigurationError("fallback_store is required".to_string())
        })?;

        let remote = match self.remote_binding {
            Some(binding) => binding,
            None => RemoteBinding::from_config(&self.gateway_config)?,
        };

        let notification_function = match &remote {
            RemoteBinding::Configured(backend) => {
                log::info!("Remote store configured ({})", backend.id());
                Some(NotificationFunction::new(Arc::clone(backend)))
            }
            RemoteBinding::Unconfigured => {
                log::warn!(
                    "Remote store not configured: attempts go to the local fallback store and notifications are mocked"
                );
                None
            }
        };

        let ctx = Arc::new(ServiceContext::new(remote, fallback_store));
        let submission_service = Arc::new(SubmissionService::new(Arc::clone(&ctx)));

        Ok(AppState {
            ctx,
            submission_service,
            notification_function,
            transition_delay: self.transition_delay,
        })
    }
}

impl Default for AppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
