use crate::{error::Result, window::RollingWindow};

/// Handle returned by [`PlotSink::register_plot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlotId(pub usize);

/// Static description of a line plot.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSpec {
    /// Overlay text, e.g. `"CPU Usage (%)"`.
    pub label:    String,
    pub min:      f32,
    pub max:      f32,
    /// Height hint in display units.
    pub height:   f32,
    /// Number of points the plot displays.
    pub capacity: usize,
}

/// Display-side collaborator that owns the drawable elements.
///
/// Data only flows into the sink; nothing is read back.
pub trait PlotSink {
    /// Add a static text line.
    fn add_text(&mut self, line: &str);

    fn register_plot(&mut self, spec: PlotSpec) -> PlotId;

    /// Replace the plot's data with the window's current contents.
    fn publish(&mut self, plot: PlotId, values: &RollingWindow<f32>);

    /// Render everything published since the last call.
    fn present(&mut self) -> Result<()> {
        Ok(())
    }
}
