/// Configuration loading from TOML file
use std::path::Path;

use crate::error::{ClockError, Result};
use crate::types::Config;

pub const DEFAULT_CONFIG_PATH: &str = "market_clock.toml";

const MIN_REFRESH_INTERVAL_MS: u64 = 100;
const MAX_REFRESH_INTERVAL_MS: u64 = 60_000;

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ClockError::FileNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ClockError::ConfigError(format!("Failed to read config file: {}", e)))?;

    parse_config(&content)
}

/// Parse and validate configuration text
pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content)
        .map_err(|e| ClockError::ConfigError(format!("Failed to parse config: {}", e)))?;

    validate_config(&config)?;

    Ok(config)
}

fn validate_config(config: &Config) -> Result<()> {
    if config.refresh_interval_ms < MIN_REFRESH_INTERVAL_MS
        || config.refresh_interval_ms > MAX_REFRESH_INTERVAL_MS
    {
        return Err(ClockError::ConfigError(format!(
            "refresh_interval_ms must be within {}..={}, got {}",
            MIN_REFRESH_INTERVAL_MS, MAX_REFRESH_INTERVAL_MS, config.refresh_interval_ms
        )));
    }

    if config.secondary_label.trim().is_empty() {
        return Err(ClockError::ConfigError("secondary_label is empty".to_string()));
    }

    if config.log_level.trim().is_empty() {
        return Err(ClockError::ConfigError("log_level is empty".to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::Zone;
    use crate::types::OutputMode;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.display_timezone, Zone::Local);
        assert_eq!(config.secondary_timezone, Zone::Named(chrono_tz::Asia::Kolkata));
        assert_eq!(config.secondary_label, "India");
        assert_eq!(config.refresh_interval_ms, 1000);
        assert_eq!(config.output, OutputMode::Terminal);
        assert!(!config.compact);
    }

    #[test]
    fn test_full_config() {
        let config = parse_config(
            r#"
            display_timezone = "Europe/London"
            secondary_timezone = "Asia/Tokyo"
            secondary_label = "Tokyo"
            refresh_interval_ms = 500
            compact = true
            output = "json"
            log_level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.display_timezone, Zone::Named(chrono_tz::Europe::London));
        assert_eq!(config.secondary_timezone, Zone::Named(chrono_tz::Asia::Tokyo));
        assert_eq!(config.secondary_label, "Tokyo");
        assert_eq!(config.refresh_interval_ms, 500);
        assert!(config.compact);
        assert_eq!(config.output, OutputMode::Json);
    }

    #[test]
    fn test_unknown_timezone_rejected() {
        let err = parse_config(r#"secondary_timezone = "Nowhere/Special""#).unwrap_err();
        assert_eq!(err.error_code(), "CFG_001");
        assert!(err.to_string().contains("Nowhere/Special"));
    }

    #[test]
    fn test_refresh_interval_bounds() {
        assert!(parse_config("refresh_interval_ms = 0").is_err());
        assert!(parse_config("refresh_interval_ms = 120000").is_err());
        assert!(parse_config("refresh_interval_ms = 100").is_ok());
    }

    #[test]
    fn test_load_config_file() {
        let path = std::env::temp_dir().join("market_clock_test_config.toml");
        std::fs::write(&path, "secondary_label = \"Mumbai\"\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.secondary_label, "Mumbai");

        // Cleanup
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_missing_file() {
        let err = load_config("does/not/exist.toml").unwrap_err();
        assert!(matches!(err, ClockError::FileNotFound(_)));
    }
}
