use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

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
    pub engine: EngineConfig,
    pub tailor: TailorConfig,
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
            engine: EngineConfig::load()?,
            tailor: TailorConfig::load(),
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

/// Knobs for the browser-driven scrape/submit engine.
///
/// The session cap bounds concurrent browser sessions across all scrape and
/// submit calls; it is deployment-tunable rather than hardcoded.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub navigation_timeout: Duration,
    pub element_wait_timeout: Duration,
    pub max_sessions: usize,
    pub user_agent: String,
}

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

impl EngineConfig {
    fn load() -> Result<Self, ConfigError> {
        let navigation_timeout =
            parse_secs("APP_NAVIGATION_TIMEOUT_SECS", 60).map(Duration::from_secs)?;
        let element_wait_timeout =
            parse_secs("APP_ELEMENT_WAIT_TIMEOUT_SECS", 10).map(Duration::from_secs)?;

        let max_sessions = match env::var("APP_MAX_BROWSER_SESSIONS") {
            Ok(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|cap| *cap > 0)
                .ok_or(ConfigError::InvalidSessionCap)?,
            Err(_) => 4,
        };

        let user_agent =
            env::var("APP_BROWSER_USER_AGENT").unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string());

        Ok(Self {
            navigation_timeout,
            element_wait_timeout,
            max_sessions,
            user_agent,
        })
    }
}

/// Settings for the resume-tailoring backend (an OpenAI-compatible API).
///
/// A missing key is not a startup error: the resume workflow degrades to its
/// documented fallback when the backend rejects the call.
#[derive(Debug, Clone)]
pub struct TailorConfig {
    pub base_url: String,
    pub model: String,
    pub api_key: Option<String>,
}

impl TailorConfig {
    fn load() -> Self {
        Self {
            base_url: env::var("APP_TAILOR_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            model: env::var("APP_TAILOR_MODEL").unwrap_or_else(|_| "gpt-3.5-turbo".to_string()),
            api_key: env::var("OPENAI_API_KEY").ok().filter(|key| !key.is_empty()),
        }
    }
}

fn parse_secs(var: &'static str, default: u64) -> Result<u64, ConfigError> {
    match env::var(var) {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .ok()
            .filter(|secs| *secs > 0)
            .ok_or(ConfigError::InvalidTimeout { var }),
        Err(_) => Ok(default),
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidTimeout { var: &'static str },
    InvalidSessionCap,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidTimeout { var } => {
                write!(f, "{} must be a positive number of seconds", var)
            }
            ConfigError::InvalidSessionCap => {
                write!(f, "APP_MAX_BROWSER_SESSIONS must be a positive integer")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            _ => None,
        }
    }
}
