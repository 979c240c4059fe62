use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use url::Url;

use crate::appraisal::Locale;

const DEFAULT_APPRAISAL_API_URL: &str = "https://api.godaddy.com";
const DEFAULT_APPRAISAL_TIMEOUT_SECS: u64 = 10;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub appraisal: AppraisalConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            appraisal: AppraisalConfig::from_env()?,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing and metrics controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Upstream appraisal API settings.
///
/// Missing credentials are not a load failure: the handler reports them to the
/// user on each submission instead.
#[derive(Debug, Clone)]
pub struct AppraisalConfig {
    pub base_url: Url,
    pub timeout: Duration,
    pub credentials: Option<Credentials>,
    /// Page language, from `APP_LOCALE` (`en` or `ar`).
    pub locale: Locale,
}

impl AppraisalConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let raw_url =
            env::var("APPRAISAL_API_URL").unwrap_or_else(|_| DEFAULT_APPRAISAL_API_URL.to_string());
        let base_url = Url::parse(raw_url.trim()).map_err(|source| ConfigError::InvalidApiUrl {
            value: raw_url.clone(),
            source,
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::InvalidApiUrl {
                value: raw_url,
                source: url::ParseError::RelativeUrlWithCannotBeABaseBase,
            });
        }

        let timeout_secs = match env::var("APPRAISAL_TIMEOUT_SECS") {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::InvalidTimeout)?,
            Err(_) => DEFAULT_APPRAISAL_TIMEOUT_SECS,
        };

        let credentials = Credentials::from_parts(
            env::var("GODADDY_API_KEY").ok(),
            env::var("GODADDY_API_SECRET").ok(),
        );

        let locale = env::var("APP_LOCALE")
            .map(|tag| Locale::from_tag(&tag))
            .unwrap_or_default();

        Ok(Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
            credentials,
            locale,
        })
    }
}

/// API key/secret pair used for the `sso-key` authorization scheme.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    key: String,
    secret: String,
}

impl Credentials {
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            secret: secret.into(),
        }
    }

    /// Returns `None` unless both halves are present and non-blank.
    pub fn from_parts(key: Option<String>, secret: Option<String>) -> Option<Self> {
        let key = key.filter(|value| !value.trim().is_empty())?;
        let secret = secret.filter(|value| !value.trim().is_empty())?;
        Some(Self::new(key.trim(), secret.trim()))
    }

    pub fn authorization_header(&self) -> String {
        format!("sso-key {}:{}", self.key, self.secret)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("key", &"<redacted>")
            .field("secret", &"<redacted>")
            .finish()
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidApiUrl { value: String, source: url::ParseError },
    InvalidTimeout,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidApiUrl { value, .. } => {
                write!(f, "APPRAISAL_API_URL '{value}' is not an absolute URL")
            }
            ConfigError::InvalidTimeout => {
                write!(f, "APPRAISAL_TIMEOUT_SECS must be a positive integer")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::InvalidTimeout => None,
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidApiUrl { source, .. } => Some(source),
        }
    }
}
