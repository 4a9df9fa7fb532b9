//! Application-level configuration loading.

use std::{env, fs, io::ErrorKind, path::PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

/// Default location on disk where the server looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/app.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "MATCHDAY_BACK_CONFIG_PATH";
/// Environment variable that overrides the configured admin token.
const ADMIN_TOKEN_ENV: &str = "MATCHDAY_ADMIN_TOKEN";

const DEFAULT_SEARCH_LIMIT: usize = 10;
const MAX_SEARCH_LIMIT: usize = 100;
const DEFAULT_RECENT_GAMES_LIMIT: usize = 5;

#[derive(Debug, Clone)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    admin_token: Option<String>,
    search_limit: usize,
    recent_games_limit: usize,
}

impl AppConfig {
    /// Load the configuration from disk, falling back to built-in defaults, then apply env overrides.
    pub fn load() -> Self {
        let path = resolve_config_path();
        let config = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<RawConfig>(&contents) {
                Ok(raw) => {
                    info!(path = %path.display(), "loaded configuration file");
                    raw.into()
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                Self::default()
            }
        };

        config.with_admin_token(env::var(ADMIN_TOKEN_ENV).ok())
    }

    /// Override the admin token when `token` is a non-empty value.
    pub fn with_admin_token(mut self, token: Option<String>) -> Self {
        if let Some(token) = non_empty(token) {
            self.admin_token = Some(token);
        }
        self
    }

    /// Token expected in the `X-Admin-Token` header; the admin area is closed when unset.
    pub fn admin_token(&self) -> Option<&str> {
        self.admin_token.as_deref()
    }

    /// Maximum number of hits returned per category by the search endpoint.
    pub fn search_limit(&self) -> usize {
        self.search_limit
    }

    /// Number of games shown on a team page.
    pub fn recent_games_limit(&self) -> usize {
        self.recent_games_limit
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            admin_token: None,
            search_limit: DEFAULT_SEARCH_LIMIT,
            recent_games_limit: DEFAULT_RECENT_GAMES_LIMIT,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
/// JSON representation of the configuration file located at [`DEFAULT_CONFIG_PATH`].
struct RawConfig {
    #[serde(default)]
    admin_token: Option<String>,
    #[serde(default)]
    search_limit: Option<usize>,
    #[serde(default)]
    recent_games_limit: Option<usize>,
}

impl From<RawConfig> for AppConfig {
    fn from(value: RawConfig) -> Self {
        Self {
            admin_token: non_empty(value.admin_token),
            search_limit: value
                .search_limit
                .unwrap_or(DEFAULT_SEARCH_LIMIT)
                .clamp(1, MAX_SEARCH_LIMIT),
            recent_games_limit: value
                .recent_games_limit
                .unwrap_or(DEFAULT_RECENT_GAMES_LIMIT),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|token| token.trim().to_owned())
        .filter(|token| !token.is_empty())
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_config_clamps_search_limit() {
        let raw: RawConfig =
            serde_json::from_str(r#"{"search_limit": 5000, "admin_token": "  "}"#).unwrap();
        let config = AppConfig::from(raw);

        assert_eq!(config.search_limit(), MAX_SEARCH_LIMIT);
        assert_eq!(config.admin_token(), None);
        assert_eq!(config.recent_games_limit(), DEFAULT_RECENT_GAMES_LIMIT);
    }

    #[test]
    fn zero_search_limit_is_raised_to_one() {
        let raw: RawConfig = serde_json::from_str(r#"{"search_limit": 0}"#).unwrap();
        assert_eq!(AppConfig::from(raw).search_limit(), 1);
    }

    #[test]
    fn admin_token_override_ignores_blank_values() {
        let config = AppConfig::default().with_admin_token(Some("secret".into()));
        assert_eq!(config.admin_token(), Some("secret"));

        let config = config.with_admin_token(Some(String::new()));
        assert_eq!(config.admin_token(), Some("secret"));
    }
}
