//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use clap::{Parser, ValueEnum};
use thiserror::Error;

use crate::config::constants::{DEFAULT_ENDPOINT, DEFAULT_USER_AGENT};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// How the binary prints the check result on stdout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `key: value` line per field
    Plain,
    /// A single JSON object
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```
/// use isitdown::Config;
///
/// let config = Config {
///     endpoint: "http://127.0.0.1:8080/check.php".to_string(),
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Check endpoint of the availability service
    pub endpoint: String,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Result output format
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            output: OutputFormat::Plain,
        }
    }
}

/// A configuration value that failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid value for `{field}`: {message}")]
pub struct ConfigValidationError {
    /// Name of the offending field
    pub field: &'static str,
    /// What is wrong and what is expected instead
    pub message: String,
}

impl Config {
    /// Checks that the configuration can be used to build a fetcher.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigValidationError`] naming the first invalid field:
    /// - `endpoint` must be an absolute `http` or `https` URL with a host
    /// - `user_agent` must not be empty
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let endpoint = url::Url::parse(&self.endpoint).map_err(|e| ConfigValidationError {
            field: "endpoint",
            message: format!(
                "'{}' is not an absolute URL ({e}). Expected e.g. {DEFAULT_ENDPOINT}",
                self.endpoint
            ),
        })?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(ConfigValidationError {
                field: "endpoint",
                message: format!(
                    "scheme '{}' is not supported, use http or https",
                    endpoint.scheme()
                ),
            });
        }
        if endpoint.host_str().map_or(true, str::is_empty) {
            return Err(ConfigValidationError {
                field: "endpoint",
                message: format!("'{}' has no host", self.endpoint),
            });
        }
        if self.user_agent.trim().is_empty() {
            return Err(ConfigValidationError {
                field: "user_agent",
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Bare domain
/// isitdown google.com
///
/// # Full URL, JSON output
/// isitdown https://speedtest.net/results --output json
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "isitdown",
    version,
    about = "Asks isitdownrightnow.com whether a website is up."
)]
pub struct Opt {
    /// Domain or URL to check (e.g. google.com or https://google.com/search)
    pub query: String,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Result format: plain|json
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub output: OutputFormat,

    /// Check endpoint of the availability service
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            endpoint: opt.endpoint,
            user_agent: opt.user_agent,
            log_level: opt.log_level,
            log_format: opt.log_format,
            output: opt.output,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(config.output, OutputFormat::Plain);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_relative_endpoint() {
        let config = Config {
            endpoint: "check.php".to_string(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.field, "endpoint");
        assert!(err.message.contains("check.php"));
    }

    #[test]
    fn test_validate_rejects_unsupported_scheme() {
        let config = Config {
            endpoint: "ftp://www.isitdownrightnow.com/check.php".to_string(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.field, "endpoint");
        assert!(err.message.contains("ftp"));
    }

    #[test]
    fn test_validate_rejects_empty_user_agent() {
        let config = Config {
            user_agent: "   ".to_string(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.field, "user_agent");
    }

    #[test]
    fn test_opt_parses_defaults() {
        let opt = Opt::try_parse_from(["isitdown", "google.com"]).unwrap();
        assert_eq!(opt.query, "google.com");
        assert_eq!(opt.output, OutputFormat::Plain);

        let config = Config::from(opt);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_opt_parses_overrides() {
        let opt = Opt::try_parse_from([
            "isitdown",
            "https://speedtest.net/",
            "--output",
            "json",
            "--log-format",
            "json",
            "--endpoint",
            "http://127.0.0.1:9000/check.php",
        ])
        .unwrap();
        assert_eq!(opt.output, OutputFormat::Json);
        assert!(matches!(opt.log_format, LogFormat::Json));
        assert_eq!(opt.endpoint, "http://127.0.0.1:9000/check.php");
    }

    #[test]
    fn test_opt_requires_query() {
        assert!(Opt::try_parse_from(["isitdown"]).is_err());
    }
}
