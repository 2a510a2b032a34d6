use crate::sequencer::{Cycle, Trigger};

/// Fires once the simulated clock passes a deadline.
///
/// The deadline is armed on the first poll, `ticks` from the current
/// simulated time. It measures ticks, not the wall clock, so replays
/// with identical deltas fire identically. A timer gating a command
/// that polls conditionally, as `align` does while converged, starts
/// counting at that first poll.
pub struct TimerTrigger {
    ticks: f64,
    deadline: Option<f64>,
}

impl TimerTrigger {
    pub fn new(ticks: f64) -> Self {
        Self {
            ticks,
            deadline: None,
        }
    }
}

impl Trigger for TimerTrigger {
    fn poll(&mut self, cycle: &Cycle) -> bool {
        match self.deadline {
            None => {
                self.deadline = Some(cycle.tick + self.ticks);
                false
            }
            Some(deadline) => cycle.tick >= deadline,
        }
    }
}

#[cfg(test)]
mod tests {
    use wayline_core::Luminance;

    use super::*;

    fn poll_at(trigger: &mut TimerTrigger, tick: f64) -> bool {
        let luminance = Luminance::default();
        let cycle = Cycle {
            luminance: &luminance,
            tick,
            bar: 1,
        };
        trigger.poll(&cycle)
    }

    #[test]
    fn arms_on_first_poll_and_fires_at_the_deadline() {
        let mut trigger = TimerTrigger::new(20.0);

        assert!(!poll_at(&mut trigger, 0.0));
        assert!(!poll_at(&mut trigger, 19.0));
        assert!(poll_at(&mut trigger, 20.0));
        assert!(poll_at(&mut trigger, 21.0));
    }

    #[test]
    fn deadline_is_relative_to_the_first_poll() {
        let mut trigger = TimerTrigger::new(5.0);

        assert!(!poll_at(&mut trigger, 100.0));
        assert!(!poll_at(&mut trigger, 104.0));
        assert!(poll_at(&mut trigger, 105.0));
    }

    #[test]
    fn zero_ticks_fires_on_the_second_poll() {
        let mut trigger = TimerTrigger::new(0.0);

        assert!(!poll_at(&mut trigger, 3.0));
        assert!(poll_at(&mut trigger, 3.0));
    }
}
