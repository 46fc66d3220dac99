use crate::input::MAX_INPUT_BYTES;
use std::env;
use std::fmt;

/// Controls whether error messages carry ANSI colour codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "auto" => Ok(Self::Auto),
            "always" | "on" => Ok(Self::Always),
            "never" | "off" => Ok(Self::Never),
            _ => Err(ConfigError::InvalidColor {
                value: value.to_string(),
            }),
        }
    }
}

/// Top-level configuration for a permuter run.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub color: ColorChoice,
    pub max_input_bytes: u64,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let color = match env::var("PERMUTER_COLOR") {
            Ok(value) => ColorChoice::parse(&value)?,
            Err(_) => ColorChoice::Auto,
        };

        let max_input_bytes = match env::var("PERMUTER_MAX_INPUT_BYTES") {
            Ok(value) => parse_input_limit(&value)?,
            Err(_) => MAX_INPUT_BYTES,
        };

        let log_level = env::var("PERMUTER_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Self {
            color,
            max_input_bytes,
            telemetry: TelemetryConfig { log_level },
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            color: ColorChoice::Auto,
            max_input_bytes: MAX_INPUT_BYTES,
            telemetry: TelemetryConfig::default(),
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
        }
    }
}

fn parse_input_limit(value: &str) -> Result<u64, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(limit) if limit > 0 => Ok(limit),
        _ => Err(ConfigError::InvalidInputLimit {
            value: value.to_string(),
        }),
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidColor { value: String },
    InvalidInputLimit { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidColor { value } => write!(
                f,
                "PERMUTER_COLOR must be auto, always or never (got '{value}')"
            ),
            ConfigError::InvalidInputLimit { value } => write!(
                f,
                "PERMUTER_MAX_INPUT_BYTES must be a positive integer (got '{value}')"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("PERMUTER_COLOR");
        env::remove_var("PERMUTER_MAX_INPUT_BYTES");
        env::remove_var("PERMUTER_LOG_LEVEL");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.color, ColorChoice::Auto);
        assert_eq!(config.max_input_bytes, 1_000_000);
        assert_eq!(config.telemetry.log_level, "warn");
    }

    #[test]
    fn load_reads_overrides() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("PERMUTER_COLOR", "Never");
        env::set_var("PERMUTER_MAX_INPUT_BYTES", "2048");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.color, ColorChoice::Never);
        assert_eq!(config.max_input_bytes, 2048);
        reset_env();
    }

    #[test]
    fn rejects_zero_input_limit() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("PERMUTER_MAX_INPUT_BYTES", "0");
        let err = AppConfig::load().expect_err("zero limit rejected");
        assert!(matches!(err, ConfigError::InvalidInputLimit { .. }));
        reset_env();
    }

    #[test]
    fn rejects_unknown_color_choice() {
        assert!(matches!(
            ColorChoice::parse("rainbow"),
            Err(ConfigError::InvalidColor { .. })
        ));
    }
}
