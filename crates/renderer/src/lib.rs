//! Display sinks for the hardware panel.
//!
//! - [`TerminalSink`] draws each plot as a unicode sparkline.
//! - [`JsonSink`] emits one JSON object per presented frame.

pub mod json;
pub mod sparkline;
pub mod terminal;

pub use json::JsonSink;
pub use terminal::TerminalSink;

use hwmon_core::{PlotSpec, RollingWindow};

/// A registered plot and the data last published to it.
#[derive(Debug, Clone)]
pub(crate) struct Plot {
    pub spec:    PlotSpec,
    pub data:    Vec<f32>,
    pub latest:  f32,
    pub average: f32,
}

impl Plot {
    pub fn new(spec: PlotSpec) -> Self {
        let data = vec![0.0; spec.capacity];
        Self {
            spec,
            data,
            latest: 0.0,
            average: 0.0,
        }
    }

    pub fn load(&mut self, values: &RollingWindow<f32>) {
        self.data.clear();
        self.data.extend(values.iter().copied());
        self.latest = values.latest().copied().unwrap_or(0.0);
        self.average = values.average();
    }
}
