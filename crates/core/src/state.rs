use std::fmt;

/// A tracked metric; each one owns a rolling window and a plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Metric {
    Cpu,
    Gpu,
    Ram,
}

impl Metric {
    /// Every metric, in display order.
    pub const ALL: [Metric; 3] = [Metric::Cpu, Metric::Gpu, Metric::Ram];

    pub fn as_str(self) -> &'static str {
        match self {
            Metric::Cpu => "cpu",
            Metric::Gpu => "gpu",
            Metric::Ram => "ram",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A point-in-time hardware snapshot returned by a [`crate::HardwareProbe`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HardwareReport {
    /// CPU load (0.0 – 100.0).
    pub cpu_load: f32,
    /// GPU load (0.0 – 100.0).
    pub gpu_load: f32,
    /// RAM used in bytes.
    pub ram_used: u64,
    /// Total RAM in bytes.
    pub ram_max: u64,
}

impl HardwareReport {
    /// RAM usage as a percentage in `[0, 100]`.
    ///
    /// A zero `ram_max` yields `0.0` rather than NaN/inf, and a report claiming
    /// more RAM used than available is clamped to `100.0`.
    #[must_use]
    pub fn ram_percent(&self) -> f32 {
        if self.ram_max == 0 {
            return 0.0;
        }
        if self.ram_used > self.ram_max {
            tracing::warn!(
                used = self.ram_used,
                max = self.ram_max,
                "RAM used exceeds RAM max; clamping to 100%"
            );
            return 100.0;
        }
        (self.ram_used as f64 / self.ram_max as f64 * 100.0) as f32
    }

    /// The value this report contributes to `metric`'s window.
    #[must_use]
    pub fn value(&self, metric: Metric) -> f32 {
        match metric {
            Metric::Cpu => self.cpu_load,
            Metric::Gpu => self.gpu_load,
            Metric::Ram => self.ram_percent(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ram_percent_of_half() {
        let report = HardwareReport { ram_used: 4, ram_max: 8, ..Default::default() };
        assert_eq!(report.ram_percent(), 50.0);
    }

    #[test]
    fn zero_ram_max_yields_zero() {
        let report = HardwareReport { ram_used: 4, ram_max: 0, ..Default::default() };
        let pct = report.ram_percent();
        assert_eq!(pct, 0.0);
        assert!(pct.is_finite());
    }

    #[test]
    fn overcommitted_ram_is_clamped() {
        let report = HardwareReport { ram_used: 12, ram_max: 8, ..Default::default() };
        assert_eq!(report.ram_percent(), 100.0);
    }

    #[test]
    fn value_maps_metrics() {
        let report = HardwareReport {
            cpu_load: 12.5,
            gpu_load: 40.0,
            ram_used: 1,
            ram_max:  4,
        };
        assert_eq!(report.value(Metric::Cpu), 12.5);
        assert_eq!(report.value(Metric::Gpu), 40.0);
        assert_eq!(report.value(Metric::Ram), 25.0);
    }
}
