//! Server configuration loaded from environment variables.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Which checkout provider backs the initiator
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProviderKind {
    Stripe,
    /// In-memory provider for local demos
    Mock,
}

/// Identity of the app when wrapped as an installed/native shell
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShellConfig {
    /// Reverse-DNS application identifier
    pub app_id: String,
    /// Display name
    pub app_name: String,
    /// Directory holding the built web assets
    pub web_dir: PathBuf,
}

#[derive(Clone, Debug)]
pub struct Config {
    /// Socket address to listen on
    pub bind_addr: String,
    /// Origin used for redirect URLs when a request carries no `Origin`
    pub public_origin: String,
    /// Upper bound on the payment provider call
    pub provider_timeout: Duration,
    pub provider: ProviderKind,
    /// Payment provider API credential
    pub stripe_secret_key: Option<String>,
    pub shell: ShellConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".into(),
            public_origin: "http://localhost:3000".into(),
            provider_timeout: Duration::from_secs(20),
            provider: ProviderKind::Stripe,
            stripe_secret_key: None,
            shell: ShellConfig {
                app_id: "app.donatenow.web".into(),
                app_name: "DonateNow".into(),
                web_dir: PathBuf::from("dist"),
            },
        }
    }
}

const MAX_PROVIDER_TIMEOUT_SECS: u64 = 120;

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or blank keys take their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let provider_timeout = match var("PROVIDER_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.parse().map_err(|_| ConfigError::Invalid {
                    key: "PROVIDER_TIMEOUT_SECS",
                    reason: format!("{raw:?} is not a number of seconds"),
                })?;
                if !(1..=MAX_PROVIDER_TIMEOUT_SECS).contains(&secs) {
                    return Err(ConfigError::Invalid {
                        key: "PROVIDER_TIMEOUT_SECS",
                        reason: format!("must be between 1 and {MAX_PROVIDER_TIMEOUT_SECS}"),
                    });
                }
                Duration::from_secs(secs)
            }
            None => defaults.provider_timeout,
        };

        let provider = match var("PAYMENT_PROVIDER").as_deref() {
            None | Some("stripe") => ProviderKind::Stripe,
            Some("mock") => ProviderKind::Mock,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    key: "PAYMENT_PROVIDER",
                    reason: format!("unknown provider {other:?} (expected stripe or mock)"),
                });
            }
        };

        let public_origin = var("PUBLIC_ORIGIN").unwrap_or(defaults.public_origin);
        if !(public_origin.starts_with("http://") || public_origin.starts_with("https://")) {
            return Err(ConfigError::Invalid {
                key: "PUBLIC_ORIGIN",
                reason: format!("{public_origin:?} is not an http(s) origin"),
            });
        }

        Ok(Self {
            bind_addr: var("BIND_ADDR").unwrap_or(defaults.bind_addr),
            public_origin: public_origin.trim_end_matches('/').to_string(),
            provider_timeout,
            provider,
            stripe_secret_key: var("STRIPE_SECRET_KEY"),
            shell: ShellConfig {
                app_id: var("APP_ID").unwrap_or(defaults.shell.app_id),
                app_name: var("APP_NAME").unwrap_or(defaults.shell.app_name),
                web_dir: var("STATIC_DIR").map_or(defaults.shell.web_dir, PathBuf::from),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<Config> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:3000");
        assert_eq!(config.provider_timeout, Duration::from_secs(20));
        assert_eq!(config.provider, ProviderKind::Stripe);
        assert!(config.stripe_secret_key.is_none());
        assert_eq!(config.shell.web_dir, PathBuf::from("dist"));
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("PUBLIC_ORIGIN", "https://don.example/"),
            ("PROVIDER_TIMEOUT_SECS", "15"),
            ("PAYMENT_PROVIDER", "mock"),
            ("STRIPE_SECRET_KEY", "sk_test_123"),
            ("APP_NAME", "Dons"),
        ])
        .unwrap();
        assert_eq!(config.public_origin, "https://don.example");
        assert_eq!(config.provider_timeout, Duration::from_secs(15));
        assert_eq!(config.provider, ProviderKind::Mock);
        assert_eq!(config.stripe_secret_key.as_deref(), Some("sk_test_123"));
        assert_eq!(config.shell.app_name, "Dons");
    }

    #[test]
    fn test_blank_secret_is_unset() {
        let config = load(&[("STRIPE_SECRET_KEY", "  ")]).unwrap();
        assert!(config.stripe_secret_key.is_none());
    }

    #[test]
    fn test_invalid_values() {
        assert!(load(&[("PROVIDER_TIMEOUT_SECS", "abc")]).is_err());
        assert!(load(&[("PROVIDER_TIMEOUT_SECS", "0")]).is_err());
        assert!(load(&[("PROVIDER_TIMEOUT_SECS", "600")]).is_err());
        assert!(load(&[("PAYMENT_PROVIDER", "paypal")]).is_err());
        assert!(load(&[("PUBLIC_ORIGIN", "don.example")]).is_err());
    }
}
