use crate::state::Metric;
use thiserror::Error;

/// Top-level error type shared by every `hwmon` crate.
#[derive(Debug, Error)]
pub enum HwmonError {
    #[error("config error: {0}")]
    Config(String),

    #[error("sampling interval must be finite and positive, got {0}")]
    InvalidInterval(f64),

    #[error("window capacity must be at least 1")]
    InvalidCapacity,

    #[error("frame delta must be finite and non-negative, got {0}")]
    InvalidDelta(f64),

    #[error("no window registered for metric {0}")]
    UnknownMetric(Metric),

    #[error("non-finite {metric} sample: {value}")]
    NonFiniteSample { metric: Metric, value: f32 },

    #[error("hardware probe error: {0}")]
    Probe(String),

    #[error("display error: {0}")]
    Display(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl HwmonError {
    /// `true` for failures confined to one sampling cycle, after which the
    /// panel is still consistent and the next frame may proceed.
    pub fn is_cycle_failure(&self) -> bool {
        matches!(self, Self::Probe(_) | Self::NonFiniteSample { .. })
    }
}

pub type Result<T, E = HwmonError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_sampling_errors_are_cycle_failures() {
        assert!(HwmonError::Probe("driver busy".into()).is_cycle_failure());
        assert!(HwmonError::NonFiniteSample { metric: Metric::Gpu, value: f32::NAN }
            .is_cycle_failure());
        assert!(!HwmonError::Display("closed".into()).is_cycle_failure());
        assert!(!HwmonError::InvalidDelta(-1.0).is_cycle_failure());
    }
}
