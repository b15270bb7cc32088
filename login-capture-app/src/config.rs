//! Startup configuration read from the environment.

use std::path::PathBuf;
use std::time::Duration;

use login_capture_core::error::{CoreError, CoreResult};
use login_capture_core::services::DEFAULT_TRANSITION_DELAY;
use login_capture_core::GatewayConfig;

/// Remote endpoint URL
pub const ENV_REMOTE_URL: &str = "LOGIN_CAPTURE_REMOTE_URL";
/// Remote access key
pub const ENV_REMOTE_KEY: &str = "LOGIN_CAPTURE_REMOTE_KEY";
/// Directory of the fallback store file
pub const ENV_DATA_DIR: &str = "LOGIN_CAPTURE_DATA_DIR";
/// `LoggedIn` transition delay in milliseconds
pub const ENV_TRANSITION_DELAY_MS: &str = "LOGIN_CAPTURE_TRANSITION_DELAY_MS";

const FALLBACK_REMOTE_URL: &str = "SUPABASE_URL";
const FALLBACK_REMOTE_KEY: &str = "SUPABASE_ANON_KEY";

const APP_DIR_NAME: &str = "login-capture";

/// Application configuration, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Remote store settings
    pub gateway: GatewayConfig,
    /// Directory holding the fallback store file
    pub data_dir: PathBuf,
    /// Delay before a session enters `LoggedIn`
    pub transition_delay: Duration,
}

impl AppConfig {
    /// Read configuration from process environment variables.
    ///
    /// # Errors
    /// `CoreError::ConfigurationError` if a value is malformed or no data
    /// directory can be determined.
    pub fn from_env() -> CoreResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> CoreResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let endpoint = non_blank(ENV_REMOTE_URL).or_else(|| non_blank(FALLBACK_REMOTE_URL));
        let access_key = non_blank(ENV_REMOTE_KEY).or_else(|| non_blank(FALLBACK_REMOTE_KEY));
        let gateway = GatewayConfig::from_settings(endpoint.as_deref(), access_key.as_deref());

        let data_dir = match non_blank(ENV_DATA_DIR) {
            Some(dir) => PathBuf::from(dir.trim()),
            None => Self::default_data_dir()?,
        };

        let transition_delay = match non_blank(ENV_TRANSITION_DELAY_MS) {
            Some(raw) => {
                let millis = raw.trim().parse::<u64>().map_err(|e| {
                    CoreError::ConfigurationError(format!(
                        "{ENV_TRANSITION_DELAY_MS} must be a number of milliseconds: {e}"
                    ))
                })?;
                Duration::from_millis(millis)
            }
            None => DEFAULT_TRANSITION_DELAY,
        };

        Ok(Self {
            gateway,
            data_dir,
            transition_delay,
        })
    }

    /// Gateway settings for the core layer.
    #[must_use]
    pub fn gateway_config(&self) -> GatewayConfig {
        self.gateway.clone()
    }

    /// Platform data directory, e.g. `~/.local/share/login-capture` on Linux.
    fn default_data_dir() -> CoreResult<PathBuf> {
        dirs::data_local_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or_else(|| {
                CoreError::ConfigurationError(format!(
                    "Failed to determine data directory, set {ENV_DATA_DIR}"
                ))
            })
    }
}
