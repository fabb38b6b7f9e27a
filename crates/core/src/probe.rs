use crate::{error::Result, state::HardwareReport};

/// Source of hardware readings.
///
/// `tick` runs once per host frame; `generate_report` only once per sample
/// event, so it should be cheap but need not be free.
pub trait HardwareProbe {
    /// Advance internal counters. Called every frame regardless of cadence.
    fn tick(&mut self) {}

    /// Take a fresh, complete snapshot.
    fn generate_report(&mut self) -> Result<HardwareReport>;

    /// Static descriptive lines (CPU model, OS, ...) shown above the plots.
    fn describe(&self) -> Vec<String> {
        Vec::new()
    }
}
