pub mod clock;
pub mod error;
pub mod sink;
pub mod probe;
pub mod state;
pub mod store;
pub mod window;

pub use clock::SamplingClock;
pub use error::{HwmonError, Result};
pub use probe::HardwareProbe;
pub use sink::{PlotId, PlotSink, PlotSpec};
pub use state::{HardwareReport, Metric};
pub use store::WindowStore;
pub use window::RollingWindow;
