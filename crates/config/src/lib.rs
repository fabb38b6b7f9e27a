pub mod schema;

pub use schema::{
    DisplayConfig, HwmonConfig, OutputFormat, PlotConfig, PlotsConfig, SamplingConfig,
};

use hwmon_core::{HwmonError, Result};
use std::path::{Path, PathBuf};

/// Load configuration from a TOML file.  Returns `HwmonConfig::default()` if
/// the file doesn't exist so the panel always has sensible defaults.
///
/// The result is validated before it is returned.
pub fn load(path: impl AsRef<Path>) -> Result<HwmonConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(HwmonConfig::default());
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| HwmonError::Config(format!("cannot read '{}': {e}", path.display())))?;

    parse(&raw)
}

/// Parse and validate a TOML document.
pub fn parse(raw: &str) -> Result<HwmonConfig> {
    let config: HwmonConfig =
        toml::from_str(raw).map_err(|e| HwmonError::Config(format!("TOML parse error: {e}")))?;
    config.validate()?;
    Ok(config)
}

/// Return the default config path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("hwmon").join("hwmon.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let config = load("/nonexistent/hwmon/hwmon.toml").unwrap();
        assert_eq!(config.sampling.capacity, SamplingConfig::default().capacity);
        assert!(config.sampling.interval >= 0.2);
    }

    #[test]
    fn parse_partial_document() {
        let config = parse(
            r#"
            [sampling]
            interval = 0.5

            [display]
            format = "json"

            [plots.gpu]
            label = "GPU"
            "#,
        )
        .unwrap();

        assert_eq!(config.sampling.interval, 0.5);
        assert_eq!(config.sampling.capacity, 100);
        assert_eq!(config.display.format, OutputFormat::Json);
        assert_eq!(config.plots.gpu.label, "GPU");
        assert_eq!(config.plots.gpu.max, 100.0);
        assert_eq!(config.plots.cpu.label, "CPU Usage (%)");
    }

    #[test]
    fn parse_rejects_invalid_values() {
        assert!(parse("[sampling]\ninterval = 0.0").is_err());
        assert!(parse("[sampling]\ncapacity = 0").is_err());
        assert!(parse("[display]\nframe_rate = 0").is_err());
        assert!(parse("[plots.ram]\nmin = 50.0\nmax = 10.0").is_err());
    }

    #[test]
    fn parse_rejects_malformed_toml() {
        assert!(matches!(parse("[sampling"), Err(HwmonError::Config(_))));
    }
}
