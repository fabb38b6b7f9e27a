use std::time::{Duration, Instant};

/// Running mean of load readings taken between two reports.
#[derive(Debug, Clone, Default)]
pub struct LoadAccumulator {
    sum:   f64,
    count: u32,
}

impl LoadAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one reading; non-finite readings are ignored.
    pub fn record(&mut self, value: f32) {
        if value.is_finite() {
            self.sum += f64::from(value);
            self.count += 1;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Mean of everything recorded since the last call, then reset.
    pub fn take_mean(&mut self) -> Option<f32> {
        if self.count == 0 {
            return None;
        }
        let mean = (self.sum / f64::from(self.count)) as f32;
        *self = Self::default();
        Some(mean)
    }
}

/// Load readings for one device between reports.
///
/// A report averages every reading taken since the previous report. When no
/// new reading exists (reports closer together than the counters can be
/// refreshed) the newest reading is reported again without being recorded a
/// second time, so it never weighs into a later average twice.
#[derive(Debug, Clone, Default)]
pub struct LoadTracker {
    pending: LoadAccumulator,
    latest:  Option<f32>,
}

impl LoadTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, value: f32) {
        if value.is_finite() {
            self.pending.record(value);
            self.latest = Some(value);
        }
    }

    /// `true` when a reading arrived since the last report.
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn report(&mut self) -> Option<f32> {
        self.pending.take_mean().or(self.latest)
    }
}

/// Limits counter refreshes to a minimum spacing.
#[derive(Debug, Clone)]
pub struct RefreshGate {
    min_gap: Duration,
    last:    Option<Instant>,
}

impl RefreshGate {
    pub fn new(min_gap: Duration) -> Self {
        Self { min_gap, last: None }
    }

    pub fn is_open(&self, now: Instant) -> bool {
        self.last
            .map_or(true, |at| now.saturating_duration_since(at) >= self.min_gap)
    }

    pub fn mark(&mut self, now: Instant) {
        self.last = Some(now);
    }

    pub fn last(&self) -> Option<Instant> {
        self.last
    }
}

/// Average of per-core usages, `0.0` when there are no cores.
pub fn average_usage(per_core: &[f32]) -> f32 {
    if per_core.is_empty() {
        return 0.0;
    }
    per_core.iter().sum::<f32>() / per_core.len() as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_resets_after_take() {
        let mut acc = LoadAccumulator::new();
        assert_eq!(acc.take_mean(), None);
        acc.record(10.0);
        acc.record(30.0);
        acc.record(f32::NAN);
        assert_eq!(acc.take_mean(), Some(20.0));
        assert!(acc.is_empty());
        assert_eq!(acc.take_mean(), None);
    }

    #[test]
    fn back_to_back_reports_do_not_recount_a_reading() {
        let mut tracker = LoadTracker::new();
        assert_eq!(tracker.report(), None);

        tracker.record(40.0);
        assert_eq!(tracker.report(), Some(40.0));
        assert!(!tracker.has_pending());
        assert_eq!(tracker.report(), Some(40.0));

        tracker.record(80.0);
        assert_eq!(tracker.report(), Some(80.0));
    }

    #[test]
    fn gate_enforces_minimum_gap() {
        let gap = Duration::from_millis(200);
        let mut gate = RefreshGate::new(gap);
        let t0 = Instant::now();
        assert!(gate.is_open(t0));

        gate.mark(t0);
        assert!(!gate.is_open(t0 + Duration::from_millis(4)));
        assert!(gate.is_open(t0 + gap));
        assert_eq!(gate.last(), Some(t0));
    }

    #[test]
    fn average_of_cores() {
        assert_eq!(average_usage(&[]), 0.0);
        assert_eq!(average_usage(&[25.0, 75.0]), 50.0);
    }
}
