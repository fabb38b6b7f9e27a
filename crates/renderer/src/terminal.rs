use crate::{sparkline, Plot};
use chrono::Local;
use hwmon_core::{HwmonError, PlotId, PlotSink, PlotSpec, Result, RollingWindow};
use std::io::Write;

const CLEAR: &str = "\x1b[H\x1b[2J";

/// Text display: static lines followed by one sparkline per plot.
pub struct TerminalSink<W: Write> {
    out:          W,
    width:        usize,
    clear_screen: bool,
    texts:        Vec<String>,
    plots:        Vec<Plot>,
}

impl<W: Write> TerminalSink<W> {
    /// `width` is the number of columns each sparkline occupies.
    pub fn new(out: W, width: usize, clear_screen: bool) -> Self {
        Self {
            out,
            width,
            clear_screen,
            texts: Vec::new(),
            plots: Vec::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_frame(&mut self) -> std::io::Result<()> {
        if self.clear_screen {
            write!(self.out, "{CLEAR}")?;
        }
        writeln!(self.out, "Hardware Info  {}", Local::now().format("%H:%M:%S"))?;
        for line in &self.texts {
            writeln!(self.out, "{line}")?;
        }
        for plot in &self.plots {
            let spec = &plot.spec;
            writeln!(
                self.out,
                "{}  now {:5.1}  avg {:5.1}",
                spec.label,
                plot.latest,
                plot.average
            )?;
            writeln!(
                self.out,
                "{:>5.0} |{}|",
                spec.max,
                sparkline::render(&plot.data, self.width, spec.min, spec.max)
            )?;
            writeln!(self.out, "{:>5.0}", spec.min)?;
        }
        self.out.flush()
    }
}

impl<W: Write> PlotSink for TerminalSink<W> {
    fn add_text(&mut self, line: &str) {
        self.texts.push(line.to_string());
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
        self.write_frame()
            .map_err(|e| HwmonError::Display(format!("terminal write failed: {e}")))
    }
}
