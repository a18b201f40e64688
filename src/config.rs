//! Runtime configuration
//!
//! Values come from built-in defaults, then environment variables, then
//! command-line flags. Later layers win.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::debounce::DEFAULT_DELAY;
use crate::error::ConfigError;

pub const DEFAULT_ENDPOINT: &str = "https://dummyjson.com/users";

// Environment variable names
const ENV_ENDPOINT: &str = "USERDIR_ENDPOINT";
const ENV_DEBOUNCE_MS: &str = "USERDIR_DEBOUNCE_MS";
const ENV_LOG_FILE: &str = "USERDIR_LOG";

/// Where the directory is read from
#[derive(Debug, Clone, PartialEq)]
pub enum SourceConfig {
    Http(Url),
    File(PathBuf),
}

/// Values supplied on the command line, all optional
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub endpoint: Option<String>,
    pub file: Option<PathBuf>,
    pub debounce_ms: Option<u64>,
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub source: SourceConfig,
    pub debounce: Duration,
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Resolve configuration from the process environment and CLI overrides.
    pub fn load(overrides: &Overrides) -> Result<Self, ConfigError> {
        Self::resolve(overrides, |key| env::var(key).ok())
    }

    fn resolve(
        overrides: &Overrides,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let source = match overrides.file {
            Some(ref path) => SourceConfig::File(path.clone()),
            None => {
                let raw = overrides
                    .endpoint
                    .clone()
                    .or_else(|| env(ENV_ENDPOINT))
                    .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
                SourceConfig::Http(parse_endpoint(&raw)?)
            }
        };

        let debounce = match overrides.debounce_ms {
            Some(ms) => Duration::from_millis(ms),
            None => match env(ENV_DEBOUNCE_MS) {
                Some(raw) => parse_debounce(&raw)?,
                None => DEFAULT_DELAY,
            },
        };

        let log_file = overrides
            .log_file
            .clone()
            .or_else(|| env(ENV_LOG_FILE).map(PathBuf::from));

        Ok(Self {
            source,
            debounce,
            log_file,
        })
    }

    /// Log file path, defaulting to `<config_dir>/userdir/userdir.log`
    pub fn effective_log_file(&self) -> Result<PathBuf, ConfigError> {
        match self.log_file {
            Some(ref path) => Ok(path.clone()),
            None => {
                let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
                Ok(config_dir.join("userdir").join("userdir.log"))
            }
        }
    }
}

fn parse_endpoint(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim()).map_err(|source| ConfigError::Endpoint {
        value: raw.to_string(),
        source,
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::Scheme(other.to_string())),
    }
}

fn parse_debounce(raw: &str) -> Result<Duration, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| ConfigError::Debounce(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn resolve_with(overrides: &Overrides, vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::resolve(overrides, |key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = resolve_with(&Overrides::default(), &[]).unwrap();
        assert_eq!(
            config.source,
            SourceConfig::Http(Url::parse(DEFAULT_ENDPOINT).unwrap())
        );
        assert_eq!(config.debounce, Duration::from_millis(1000));
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_env_overrides_defaults() {
        let config = resolve_with(
            &Overrides::default(),
            &[
                (ENV_ENDPOINT, "http://localhost:8080/users"),
                (ENV_DEBOUNCE_MS, "250"),
                (ENV_LOG_FILE, "/tmp/userdir.log"),
            ],
        )
        .unwrap();
        assert_eq!(
            config.source,
            SourceConfig::Http(Url::parse("http://localhost:8080/users").unwrap())
        );
        assert_eq!(config.debounce, Duration::from_millis(250));
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/userdir.log")));
    }

    #[test]
    fn test_flags_override_env() {
        let overrides = Overrides {
            endpoint: Some("https://example.com/people".to_string()),
            debounce_ms: Some(0),
            ..Default::default()
        };
        let config = resolve_with(
            &overrides,
            &[(ENV_ENDPOINT, "http://localhost/users"), (ENV_DEBOUNCE_MS, "250")],
        )
        .unwrap();
        assert_eq!(
            config.source,
            SourceConfig::Http(Url::parse("https://example.com/people").unwrap())
        );
        assert_eq!(config.debounce, Duration::ZERO);
    }

    #[test]
    fn test_file_wins_over_endpoint() {
        let overrides = Overrides {
            endpoint: Some("https://example.com/people".to_string()),
            file: Some(PathBuf::from("users.json")),
            ..Default::default()
        };
        let config = resolve_with(&overrides, &[]).unwrap();
        assert_eq!(config.source, SourceConfig::File(PathBuf::from("users.json")));
    }

    #[test]
    fn test_invalid_endpoint() {
        let err = resolve_with(&Overrides::default(), &[(ENV_ENDPOINT, "not a url")]).unwrap_err();
        assert!(matches!(err, ConfigError::Endpoint { .. }));
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let err = resolve_with(&Overrides::default(), &[(ENV_ENDPOINT, "ftp://example.com/users")])
            .unwrap_err();
        assert!(matches!(err, ConfigError::Scheme(s) if s == "ftp"));
    }

    #[test]
    fn test_invalid_debounce() {
        let err = resolve_with(&Overrides::default(), &[(ENV_DEBOUNCE_MS, "soon")]).unwrap_err();
        assert!(matches!(err, ConfigError::Debounce(_)));
    }

    #[test]
    fn test_explicit_log_file() {
        let overrides = Overrides {
            log_file: Some(PathBuf::from("/var/tmp/u.log")),
            ..Default::default()
        };
        let config = resolve_with(&overrides, &[]).unwrap();
        assert_eq!(
            config.effective_log_file().unwrap(),
            PathBuf::from("/var/tmp/u.log")
        );
    }
}
