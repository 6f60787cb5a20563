//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment toggle enabling the remote shutdown endpoint.
pub const ALLOW_REMOTE_SHUTDOWN_ENV: &str = "ALLOW_REMOTE_SHUTDOWN";

/// Environment variable carrying the shared shutdown token.
pub const SHUTDOWN_TOKEN_ENV: &str = "SHUTDOWN_TOKEN";

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load and validate configuration from a TOML file, then apply
/// environment overrides.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let mut config: AppConfig = toml::from_str(&content).map_err(ConfigError::Parse)?;

    apply_env_overrides(&mut config);
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Build configuration from defaults plus environment overrides, for
/// deployments that ship no config file at all.
pub fn config_from_env() -> Result<AppConfig, ConfigError> {
    let mut config = AppConfig::default();
    apply_env_overrides(&mut config);
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Apply environment overrides for the shutdown policy.
///
/// `ALLOW_REMOTE_SHUTDOWN=true` (case-insensitive) enables the endpoint;
/// `SHUTDOWN_TOKEN` sets the shared token. Either variable, when present,
/// wins over the config file.
fn apply_env_overrides(config: &mut AppConfig) {
    if let Ok(val) = std::env::var(ALLOW_REMOTE_SHUTDOWN_ENV) {
        config.shutdown.allow_remote = val.to_lowercase() == "true";
    }
    if let Ok(token) = std::env::var(SHUTDOWN_TOKEN_ENV) {
        if !token.is_empty() {
            config.shutdown.token = Some(token);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Env vars are process-global; tests touching them serialize on this
    // lock and restore the previous state on drop.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct EnvGuard(&'static str, Option<String>);

    impl EnvGuard {
        fn set(key: &'static str, value: &str) -> Self {
            let prev = std::env::var(key).ok();
            std::env::set_var(key, value);
            Self(key, prev)
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            match &self.1 {
                Some(prev) => std::env::set_var(self.0, prev),
                None => std::env::remove_var(self.0),
            }
        }
    }

    #[test]
    fn test_env_toggle_enables_shutdown() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _guard = EnvGuard::set(ALLOW_REMOTE_SHUTDOWN_ENV, "TRUE");
        let mut config = AppConfig::default();
        apply_env_overrides(&mut config);
        assert!(config.shutdown.allow_remote);
    }

    #[test]
    fn test_env_toggle_rejects_other_values() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _guard = EnvGuard::set(ALLOW_REMOTE_SHUTDOWN_ENV, "1");
        let mut config = AppConfig::default();
        config.shutdown.allow_remote = true;
        apply_env_overrides(&mut config);
        // Only the literal "true" enables; anything else disables.
        assert!(!config.shutdown.allow_remote);
    }

    #[test]
    fn test_env_token_override() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _guard = EnvGuard::set(SHUTDOWN_TOKEN_ENV, "from-env");
        let mut config = AppConfig::default();
        config.shutdown.token = Some("from-file".into());
        apply_env_overrides(&mut config);
        assert_eq!(config.shutdown.token.as_deref(), Some("from-env"));
    }
}
