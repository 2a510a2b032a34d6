use wayline_core::Actuation;

use crate::sequencer::{Command, Cycle, Gate};

/// Convergence threshold on the side probe spread.
const CONVERGENCE: f32 = 0.42;
/// Power floor; keeps the rotation from stalling near equilibrium.
const TURN_FLOOR: f32 = 0.1;

/// Rotate in place until the side probes reach equilibrium.
///
/// The wheels counter-rotate by the spread between the side probes,
/// dimmer side backwards. The gate is only polled while the spread is
/// below the convergence threshold, so a companion timer starts
/// counting at first convergence and acts as a settling window.
pub struct AlignCommand;

impl Command for AlignCommand {
    fn step(&mut self, gate: &mut Gate, cycle: &Cycle, out: &mut Actuation) {
        let (lft, rgt) = (cycle.luminance.lft, cycle.luminance.rgt);
        let turn = lft.max(rgt) - lft.min(rgt);

        let mut left = turn.max(TURN_FLOOR);
        let mut right = left;
        if lft > rgt {
            right = -turn;
        } else if rgt > lft {
            left = -turn;
        }

        if turn < CONVERGENCE {
            gate.poll(cycle);
        }

        out.drive(left, right);
    }
}

#[cfg(test)]
mod tests {
    use wayline_core::{Luminance, Side};

    use super::super::done::DoneTrigger;
    use super::*;

    fn step_once(gate: &mut Gate, luminance: Luminance) -> (f32, f32) {
        let cycle = Cycle {
            luminance: &luminance,
            tick: 0.0,
            bar: 1,
        };
        let mut out = Actuation::default();

        AlignCommand.step(gate, &cycle, &mut out);
        (out.power(Side::Left), out.power(Side::Right))
    }

    #[test]
    fn counter_rotates_towards_the_dimmer_side() {
        let mut gate = Gate::new(Box::new(DoneTrigger), 0);

        let (left, right) = step_once(&mut gate, Luminance::new(0.1, 0.75, 0.1, 0.25));
        assert_eq!(left, 0.5);
        assert_eq!(right, -0.5);

        let (left, right) = step_once(&mut gate, Luminance::new(0.1, 0.25, 0.1, 0.75));
        assert_eq!(left, -0.5);
        assert_eq!(right, 0.5);
    }

    #[test]
    fn keeps_turning_at_the_power_floor_near_equilibrium() {
        let mut gate = Gate::new(Box::new(DoneTrigger), 0);

        let (left, right) = step_once(&mut gate, Luminance::new(0.1, 0.55, 0.1, 0.5));
        assert_eq!(left, 0.1);
        assert!(right < 0.0);
    }

    #[test]
    fn fires_only_under_the_convergence_threshold() {
        // Spread 0.7: no poll, the immediate trigger stays unfired.
        let mut gate = Gate::new(Box::new(DoneTrigger), 0);
        step_once(&mut gate, Luminance::new(0.1, 0.9, 0.1, 0.2));
        assert!(!gate.fired());

        // Spread 0.3: converged, the gate is polled and fires.
        step_once(&mut gate, Luminance::new(0.1, 0.8, 0.1, 0.5));
        assert!(gate.fired());
    }
}
