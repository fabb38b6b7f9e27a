//! The hardware info panel: a sampling clock feeding one rolling window per
//! metric, with the probe and display supplied by the host.

use hwmon_config::{HwmonConfig, PlotsConfig};
use hwmon_core::{
    HardwareProbe, HardwareReport, HwmonError, Metric, PlotId, PlotSink, PlotSpec, Result,
    SamplingClock, WindowStore,
};
use tracing::{debug, trace, warn};

/// Construction-time parameters of a [`HardwareInfoPanel`].
#[derive(Debug, Clone)]
pub struct PanelSettings {
    /// Seconds between samples.
    pub interval: f64,
    /// Samples kept per metric.
    pub capacity: usize,
    pub plots:    PlotsConfig,
}

impl PanelSettings {
    pub fn new(interval: f64, capacity: usize) -> Self {
        Self {
            interval,
            capacity,
            plots: PlotsConfig::default(),
        }
    }
}

impl From<&HwmonConfig> for PanelSettings {
    fn from(config: &HwmonConfig) -> Self {
        Self {
            interval: config.sampling.interval,
            capacity: config.sampling.capacity,
            plots:    config.plots.clone(),
        }
    }
}

/// Samples hardware at a fixed rate regardless of how often `update` runs.
///
/// The probe and sink are owned for the panel's lifetime.
pub struct HardwareInfoPanel<P, S> {
    clock: SamplingClock,
    store: WindowStore,
    plots: Vec<(Metric, PlotId)>,
    probe: P,
    sink:  S,
}

impl<P: HardwareProbe, S: PlotSink> HardwareInfoPanel<P, S> {
    /// Register the static info lines and one zero-filled plot per metric.
    pub fn new(settings: &PanelSettings, probe: P, mut sink: S) -> Result<Self> {
        let clock = SamplingClock::new(settings.interval)?;

        for line in probe.describe() {
            sink.add_text(&line);
        }

        let mut store = WindowStore::new();
        let mut plots = Vec::with_capacity(Metric::ALL.len());
        for metric in Metric::ALL {
            store.register(metric, settings.capacity)?;

            let cfg = settings.plots.get(metric);
            let id = sink.register_plot(PlotSpec {
                label:    cfg.label.clone(),
                min:      cfg.min,
                max:      cfg.max,
                height:   cfg.height,
                capacity: settings.capacity,
            });
            plots.push((metric, id));
        }

        let mut panel = Self {
            clock,
            store,
            plots,
            probe,
            sink,
        };
        panel.publish();
        Ok(panel)
    }

    /// Advance by one host frame of `delta` seconds.
    ///
    /// Runs one query-and-append cycle per sample event that fell due and
    /// returns how many ran. A probe failure aborts the frame: cycles that
    /// already completed stay recorded, the rest are dropped without retry.
    pub fn update(&mut self, delta: f64) -> Result<usize> {
        let events = self.clock.advance(delta)?;
        self.probe.tick();
        trace!(delta, events, "panel update");

        if events == 0 {
            return Ok(0);
        }

        let mut completed = 0;
        let outcome = (0..events).try_for_each(|_| -> Result<()> {
            let report = self.probe.generate_report()?;
            self.record(&report)?;
            completed += 1;
            Ok(())
        });

        if completed == 0 {
            outcome?;
        } else {
            self.publish();
            match (outcome, self.sink.present()) {
                (Err(e), Err(display_err)) => {
                    warn!("display failed after a sampling error: {display_err}");
                    return Err(e);
                }
                (outcome, presented) => {
                    outcome?;
                    presented?;
                }
            }
        }

        debug!(events, "sampled hardware");
        Ok(events)
    }

    /// Append one report to every window.
    ///
    /// All values are checked first so the windows never fall out of step.
    fn record(&mut self, report: &HardwareReport) -> Result<()> {
        let values = Metric::ALL.map(|metric| (metric, report.value(metric)));
        if let Some(&(metric, value)) = values.iter().find(|(_, v)| !v.is_finite()) {
            return Err(HwmonError::NonFiniteSample { metric, value });
        }
        for (metric, value) in values {
            self.store.append(metric, value)?;
        }
        Ok(())
    }

    fn publish(&mut self) {
        for &(metric, id) in &self.plots {
            if let Some(window) = self.store.window(metric) {
                self.sink.publish(id, window);
            }
        }
    }

    pub fn clock(&self) -> &SamplingClock {
        &self.clock
    }

    pub fn store(&self) -> &WindowStore {
        &self.store
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn probe(&self) -> &P {
        &self.probe
    }
}
