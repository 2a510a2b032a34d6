use wayline_core::Actuation;

use crate::sequencer::{Command, Cycle, Gate};

/// Drive straight ahead.
///
/// Both wheels at full power until the gate opens, then halt.
pub struct GoCommand;

impl Command for GoCommand {
    fn step(&mut self, gate: &mut Gate, cycle: &Cycle, out: &mut Actuation) {
        if gate.poll(cycle) {
            out.drive(0.0, 0.0);
        } else {
            out.drive(1.0, 1.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use wayline_core::{Luminance, Side};

    use super::super::{done::DoneTrigger, timer::TimerTrigger};
    use super::*;

    #[test]
    fn full_power_until_gated() {
        let luminance = Luminance::default();
        let mut out = Actuation::default();
        let mut gate = Gate::new(Box::new(TimerTrigger::new(2.0)), 0);
        let mut command = GoCommand;

        for tick in 0..2 {
            let cycle = Cycle {
                luminance: &luminance,
                tick: tick as f64,
                bar: 1,
            };
            command.step(&mut gate, &cycle, &mut out);
            assert_eq!(out.power(Side::Left), 1.0);
            assert_eq!(out.power(Side::Right), 1.0);
        }

        let cycle = Cycle {
            luminance: &luminance,
            tick: 2.0,
            bar: 1,
        };
        command.step(&mut gate, &cycle, &mut out);
        assert_eq!(out.power(Side::Left), 0.0);
        assert_eq!(out.power(Side::Right), 0.0);
    }

    #[test]
    fn halts_immediately_on_done() {
        let luminance = Luminance::default();
        let cycle = Cycle {
            luminance: &luminance,
            tick: 0.0,
            bar: 1,
        };
        let mut out = Actuation::default();
        let mut gate = Gate::new(Box::new(DoneTrigger), 0);

        GoCommand.step(&mut gate, &cycle, &mut out);
        assert_eq!(out.power(Side::Left), 0.0);
    }
}
