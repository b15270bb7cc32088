//! Gateway configuration
//!
//! Remote access settings are resolved once at startup into an explicit
//! [`GatewayConfig`] value and then bound to a backend ([`RemoteBinding`]).
//! Gateways switch on the binding tag; nothing reads settings ad hoc.

use std::sync::Arc;

use login_capture_remote::{create_backend, RemoteBackend, RemoteCredentials};

use crate::error::CoreResult;

/// Remote endpoint settings.
#[derive(Clone, PartialEq, Eq)]
pub enum GatewayConfig {
    /// Both the endpoint URL and the access key are present.
    Configured {
        endpoint: String,
        access_key: String,
    },
    /// Either setting is missing or blank: gateways run fully local/mocked.
    Unconfigured,
}

impl GatewayConfig {
    /// Build from the two raw settings.
    ///
    /// Values are trimmed; an empty value counts as absent.
    pub fn from_settings(endpoint: Option<&str>, access_key: Option<&str>) -> Self {
        fn present(v: Option<&str>) -> Option<&str> {
            v.map(str::trim).filter(|v| !v.is_empty())
        }

        match (present(endpoint), present(access_key)) {
            (Some(endpoint), Some(access_key)) => Self::Configured {
                endpoint: endpoint.to_string(),
                access_key: access_key.to_string(),
            },
            _ => Self::Unconfigured,
        }
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        matches!(self, Self::Configured { .. })
    }
}

impl std::fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configured { endpoint, .. } => f
                .debug_struct("Configured")
                .field("endpoint", endpoint)
                .field("access_key", &"***")
                .finish(),
            Self::Unconfigured => f.write_str("Unconfigured"),
        }
    }
}

/// Gateway-side view of the remote store.
#[derive(Clone)]
pub enum RemoteBinding {
    /// A live backend built from [`GatewayConfig::Configured`].
    Configured(Arc<dyn RemoteBackend>),
    /// No remote store: persistence falls back, notification is mocked.
    Unconfigured,
}

impl RemoteBinding {
    /// Bind a configuration to a concrete backend.
    pub fn from_config(config: &GatewayConfig) -> CoreResult<Self> {
        match config {
            GatewayConfig::Configured {
                endpoint,
                access_key,
            } => {
                let backend = create_backend(RemoteCredentials::new(
                    endpoint.clone(),
                    access_key.clone(),
                ))?;
                Ok(Self::Configured(backend))
            }
            GatewayConfig::Unconfigured => Ok(Self::Unconfigured),
        }
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        matches!(self, Self::Configured(_))
    }
}

impl std::fmt::Debug for RemoteBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configured(backend) => write!(f, "Configured({})", backend.id()),
            Self::Unconfigured => f.write_str("Unconfigured"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn both_settings_required() {
        assert_eq!(
            GatewayConfig::from_settings(None, None),
            GatewayConfig::Unconfigured
        );
        assert_eq!(
            GatewayConfig::from_settings(Some("https://x.supabase.co"), None),
            GatewayConfig::Unconfigured
        );
        assert_eq!(
            GatewayConfig::from_settings(None, Some("key")),
            GatewayConfig::Unconfigured
        );
        assert_eq!(
            GatewayConfig::from_settings(Some("  "), Some("key")),
            GatewayConfig::Unconfigured
        );
    }

    #[test]
    fn configured_values_are_trimmed() {
        let config = GatewayConfig::from_settings(Some(" https://x.supabase.co "), Some(" key "));
        assert_eq!(
            config,
            GatewayConfig::Configured {
                endpoint: "https://x.supabase.co".to_string(),
                access_key: "key".to_string(),
            }
        );
        assert!(config.is_configured());
    }

    #[test]
    fn debug_hides_access_key() {
        let config = GatewayConfig::from_settings(Some("https://x.supabase.co"), Some("topsecret"));
        assert!(!format!("{config:?}").contains("topsecret"));
    }

    #[test]
    fn binding_follows_config() {
        let binding = RemoteBinding::from_config(&GatewayConfig::Unconfigured).unwrap();
        assert!(!binding.is_configured());

        let config = GatewayConfig::from_settings(Some("https://x.supabase.co"), Some("key"));
        let binding = RemoteBinding::from_config(&config).unwrap();
        assert!(binding.is_configured());
        assert_eq!(format!("{binding:?}"), "Configured(supabase)");
    }

    #[test]
    fn unusable_endpoint_is_an_error() {
        let config = GatewayConfig::from_settings(Some("not a url"), Some("key"));
        let result = RemoteBinding::from_config(&config);
        assert!(matches!(result, Err(CoreError::Remote(_))));
    }
}
