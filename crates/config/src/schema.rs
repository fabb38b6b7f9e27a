use hwmon_core::{HwmonError, Metric, Result};
use serde::{Deserialize, Serialize};

/// Root configuration structure parsed from `hwmon.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HwmonConfig {
    pub sampling: SamplingConfig,
    pub display:  DisplayConfig,
    pub plots:    PlotsConfig,
}

impl HwmonConfig {
    /// Reject values the panel cannot be constructed with.
    pub fn validate(&self) -> Result<()> {
        let interval = self.sampling.interval;
        if !interval.is_finite() || interval <= 0.0 {
            return Err(HwmonError::Config(format!(
                "sampling.interval must be a positive number of seconds, got {interval}"
            )));
        }
        if self.sampling.capacity == 0 {
            return Err(HwmonError::Config("sampling.capacity must be at least 1".into()));
        }
        if self.display.frame_rate == 0 {
            return Err(HwmonError::Config("display.frame_rate must be at least 1".into()));
        }
        if self.display.plot_width == 0 {
            return Err(HwmonError::Config("display.plot_width must be at least 1".into()));
        }
        for metric in Metric::ALL {
            let plot = self.plots.get(metric);
            if !(plot.min.is_finite() && plot.max.is_finite() && plot.min < plot.max) {
                return Err(HwmonError::Config(format!(
                    "plots.{metric}: min ({}) must be below max ({})",
                    plot.min, plot.max
                )));
            }
        }
        Ok(())
    }
}

/// Sampling cadence and history length.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    /// Seconds between hardware samples, independent of frame rate.
    pub interval: f64,
    /// Samples retained per metric.
    pub capacity: usize,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            interval: 0.5,
            capacity: 100,
        }
    }
}

/// How the host binary presents the plots.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub format: OutputFormat,
    /// Host frames per second.
    pub frame_rate: u32,
    /// Clear the terminal before each text frame.
    pub clear_screen: bool,
    /// Columns used by each text sparkline.
    pub plot_width: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            format:       OutputFormat::Text,
            frame_rate:   60,
            clear_screen: true,
            plot_width:   60,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Per-metric plot settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotsConfig {
    pub cpu: PlotConfig,
    pub gpu: PlotConfig,
    pub ram: PlotConfig,
}

impl PlotsConfig {
    pub fn get(&self, metric: Metric) -> &PlotConfig {
        match metric {
            Metric::Cpu => &self.cpu,
            Metric::Gpu => &self.gpu,
            Metric::Ram => &self.ram,
        }
    }
}

impl Default for PlotsConfig {
    fn default() -> Self {
        Self {
            cpu: PlotConfig::percent("CPU Usage (%)"),
            gpu: PlotConfig::percent("GPU Usage (%)"),
            ram: PlotConfig::percent("RAM Usage (%)"),
        }
    }
}

/// Scale, size and overlay text of one plot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    pub label:  String,
    pub min:    f32,
    pub max:    f32,
    pub height: f32,
}

impl PlotConfig {
    /// A 0–100 plot with the given overlay label.
    pub fn percent(label: impl Into<String>) -> Self {
        Self {
            label:  label.into(),
            min:    0.0,
            max:    100.0,
            height: 75.0,
        }
    }
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self::percent("")
    }
}
