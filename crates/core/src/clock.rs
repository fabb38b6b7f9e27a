use crate::error::{HwmonError, Result};
use std::time::Duration;

/// Turns irregular frame deltas into discrete sample events at a fixed rate.
///
/// Time is accumulated across calls and whole intervals are drained from the
/// accumulator, so a single long frame (e.g. after a stall) yields every event
/// it spans instead of just one. Accumulation is in integer nanoseconds, so
/// the event count does not depend on how elapsed time is split into frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SamplingClock {
    interval:    Duration,
    accumulated: Duration,
}

impl SamplingClock {
    /// Create a clock firing once every `interval` seconds.
    pub fn new(interval: f64) -> Result<Self> {
        match Duration::try_from_secs_f64(interval) {
            Ok(d) if !d.is_zero() => Ok(Self {
                interval:    d,
                accumulated: Duration::ZERO,
            }),
            _ => Err(HwmonError::InvalidInterval(interval)),
        }
    }

    /// Time carried over towards the next event. Always below the interval.
    pub fn accumulated(&self) -> Duration {
        self.accumulated
    }

    /// Add `delta` seconds and return how many sample events are now due.
    ///
    /// Negative or non-finite deltas are host timing bugs and are rejected
    /// without touching the accumulator.
    pub fn advance(&mut self, delta: f64) -> Result<usize> {
        let delta =
            Duration::try_from_secs_f64(delta).map_err(|_| HwmonError::InvalidDelta(delta))?;
        Ok(self.advance_by(delta))
    }

    /// Add an already validated `delta` and return how many events are due.
    pub fn advance_by(&mut self, delta: Duration) -> usize {
        self.accumulated = self.accumulated.saturating_add(delta);

        let mut events = 0;
        while self.accumulated >= self.interval {
            self.accumulated -= self.interval;
            events += 1;
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn small_deltas_accumulate_into_one_event() {
        let mut clock = SamplingClock::new(1.0).unwrap();
        let events: Vec<usize> = [0.4, 0.4, 0.4]
            .iter()
            .map(|&d| clock.advance(d).unwrap())
            .collect();
        assert_eq!(events, vec![0, 0, 1]);
        assert_eq!(clock.accumulated(), ms(200));
    }

    #[test]
    fn stall_emits_every_spanned_event() {
        let mut clock = SamplingClock::new(1.0).unwrap();
        assert_eq!(clock.advance(3.5).unwrap(), 3);
        assert_eq!(clock.accumulated(), ms(500));
    }

    #[test]
    fn ten_interval_stall_fires_ten_times() {
        let mut clock = SamplingClock::new(0.1).unwrap();
        assert_eq!(clock.advance(1.0).unwrap(), 10);
        assert_eq!(clock.accumulated(), Duration::ZERO);
    }

    #[test]
    fn zero_delta_is_a_no_op() {
        let mut clock = SamplingClock::new(1.0).unwrap();
        clock.advance(0.5).unwrap();
        assert_eq!(clock.advance(0.0).unwrap(), 0);
        assert_eq!(clock.accumulated(), ms(500));
    }

    #[test]
    fn exact_interval_fires_once_and_resets() {
        let mut clock = SamplingClock::new(0.5).unwrap();
        assert_eq!(clock.advance(0.5).unwrap(), 1);
        assert_eq!(clock.accumulated(), Duration::ZERO);
    }

    #[test]
    fn tenths_add_up_to_a_full_interval() {
        let mut split = SamplingClock::new(1.0).unwrap();
        let fired: usize = (0..10).map(|_| split.advance(0.1).unwrap()).sum();

        let mut whole = SamplingClock::new(1.0).unwrap();
        assert_eq!(fired, 1);
        assert_eq!(fired, whole.advance(1.0).unwrap());
        assert_eq!(split.accumulated(), Duration::ZERO);
    }

    #[test]
    fn event_count_independent_of_split() {
        let frame = Duration::try_from_secs_f64(1.0 / 60.0).unwrap();
        let deltas: Vec<Duration> = (0..600)
            .map(|i| if i % 7 == 0 { ms(100) } else { frame })
            .collect();
        let total: Duration = deltas.iter().sum();

        let mut split = SamplingClock::new(0.4).unwrap();
        let fired: usize = deltas.iter().map(|&d| split.advance_by(d)).sum();

        let mut whole = SamplingClock::new(0.4).unwrap();
        assert_eq!(fired, whole.advance_by(total));
        assert_eq!(fired as u128, total.as_nanos() / ms(400).as_nanos());
        assert_eq!(split.accumulated(), whole.accumulated());
    }

    #[test]
    fn rejects_bad_deltas() {
        let mut clock = SamplingClock::new(1.0).unwrap();
        clock.advance(0.25).unwrap();
        assert!(matches!(clock.advance(-0.1), Err(HwmonError::InvalidDelta(_))));
        assert!(matches!(clock.advance(f64::NAN), Err(HwmonError::InvalidDelta(_))));
        assert!(matches!(
            clock.advance(f64::INFINITY),
            Err(HwmonError::InvalidDelta(_))
        ));
        assert_eq!(clock.accumulated(), ms(250));
    }

    #[test]
    fn rejects_bad_intervals() {
        for interval in [0.0, -1.0, f64::NAN, f64::INFINITY, 1e-12] {
            assert!(matches!(
                SamplingClock::new(interval),
                Err(HwmonError::InvalidInterval(_))
            ));
        }
    }
}
