use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

use crate::quiz::DEFAULT_QUIZ_LENGTH;
use crate::submissions::DEFAULT_TRIM_RATIO;

const MAX_QUIZ_LENGTH: usize = 25;

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

/// Top-level configuration for the diagnosis service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub diagnosis: DiagnosisConfig,
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

        let quiz_length = match env::var("QUIZ_LENGTH") {
            Ok(raw) => parse_quiz_length(&raw)?,
            Err(_) => DEFAULT_QUIZ_LENGTH,
        };
        let salary_trim_ratio = match env::var("SALARY_TRIM_RATIO") {
            Ok(raw) => parse_trim_ratio(&raw)?,
            Err(_) => DEFAULT_TRIM_RATIO,
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            diagnosis: DiagnosisConfig {
                quiz_length,
                salary_trim_ratio,
            },
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

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Quiz and salary comparison tuning.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosisConfig {
    pub quiz_length: usize,
    pub salary_trim_ratio: f64,
}

impl Default for DiagnosisConfig {
    fn default() -> Self {
        Self {
            quiz_length: DEFAULT_QUIZ_LENGTH,
            salary_trim_ratio: DEFAULT_TRIM_RATIO,
        }
    }
}

fn parse_quiz_length(raw: &str) -> Result<usize, ConfigError> {
    raw.trim()
        .parse::<usize>()
        .ok()
        .filter(|length| (1..=MAX_QUIZ_LENGTH).contains(length))
        .ok_or_else(|| ConfigError::InvalidQuizLength {
            value: raw.to_string(),
        })
}

fn parse_trim_ratio(raw: &str) -> Result<f64, ConfigError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|ratio| (0.0..0.5).contains(ratio))
        .ok_or_else(|| ConfigError::InvalidTrimRatio {
            value: raw.to_string(),
        })
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidQuizLength { value: String },
    InvalidTrimRatio { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidQuizLength { value } => write!(
                f,
                "QUIZ_LENGTH must be between 1 and {}, got '{}'",
                MAX_QUIZ_LENGTH, value
            ),
            ConfigError::InvalidTrimRatio { value } => {
                write!(f, "SALARY_TRIM_RATIO must be within [0, 0.5), got '{}'", value)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidQuizLength { .. }
            | ConfigError::InvalidTrimRatio { .. } => None,
        }
    }
}
