use crate::error::{HwmonError, Result};
use crate::state::Metric;
use crate::window::RollingWindow;

/// One rolling window per registered metric.
#[derive(Debug, Clone, Default)]
pub struct WindowStore {
    windows: Vec<(Metric, RollingWindow<f32>)>,
}

impl WindowStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `metric` with a window pre-filled with `capacity` zeros.
    ///
    /// Re-registering a metric replaces its window.
    pub fn register(&mut self, metric: Metric, capacity: usize) -> Result<()> {
        let window = RollingWindow::filled(capacity, 0.0)?;
        match self.windows.iter_mut().find(|(m, _)| *m == metric) {
            Some((_, existing)) => *existing = window,
            None => self.windows.push((metric, window)),
        }
        Ok(())
    }

    /// Append `value` to `metric`'s window, evicting its oldest value if full.
    pub fn append(&mut self, metric: Metric, value: f32) -> Result<()> {
        if !value.is_finite() {
            return Err(HwmonError::NonFiniteSample { metric, value });
        }
        let window = self
            .windows
            .iter_mut()
            .find(|(m, _)| *m == metric)
            .map(|(_, w)| w)
            .ok_or(HwmonError::UnknownMetric(metric))?;
        window.push(value);
        Ok(())
    }

    pub fn window(&self, metric: Metric) -> Option<&RollingWindow<f32>> {
        self.windows
            .iter()
            .find(|(m, _)| *m == metric)
            .map(|(_, w)| w)
    }
}
