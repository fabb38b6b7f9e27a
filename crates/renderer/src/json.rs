use crate::Plot;
use chrono::Local;
use hwmon_core::{HwmonError, PlotId, PlotSink, PlotSpec, Result, RollingWindow};
use serde::Serialize;
use std::io::Write;

/// Machine-readable display: one JSON line per presented frame.
pub struct JsonSink<W: Write> {
    out:   W,
    info:  Vec<String>,
    plots: Vec<Plot>,
}

#[derive(Debug, Serialize)]
struct Frame<'a> {
    time:  String,
    info:  &'a [String],
    plots: Vec<PlotFrame<'a>>,
}

#[derive(Debug, Serialize)]
struct PlotFrame<'a> {
    label:  &'a str,
    min:    f32,
    max:    f32,
    height: f32,
    latest: f32,
    values: &'a [f32],
}

impl<W: Write> JsonSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            info: Vec::new(),
            plots: Vec::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> PlotSink for JsonSink<W> {
    fn add_text(&mut self, line: &str) {
        self.info.push(line.to_string());
    }

    fn register_plot(&mut self, spec: PlotSpec) -> PlotId {
        self.plots.push(Plot::new(spec));
        PlotId(self.plots.len() - 1)
    }

    fn publish(&mut self, plot: PlotId, values: &RollingWindow<f32>) {
        if let Some(p) = self.plots.get_mut(plot.0) {
            p.load(values);
        }
    }

    fn present(&mut self) -> Result<()> {
        let frame = Frame {
            time:  Local::now().to_rfc3339(),
            info:  &self.info,
            plots: self
                .plots
                .iter()
                .map(|p| PlotFrame {
                    label:  &p.spec.label,
                    min:    p.spec.min,
                    max:    p.spec.max,
                    height: p.spec.height,
                    latest: p.latest,
                    values: &p.data,
                })
                .collect(),
        };

        serde_json::to_writer(&mut self.out, &frame)
            .map_err(|e| HwmonError::Display(format!("JSON encode failed: {e}")))?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}
