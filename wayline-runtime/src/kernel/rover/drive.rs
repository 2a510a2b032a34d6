use wayline_core::Actuation;

use crate::sequencer::{Command, Cycle, Gate};

/// Constant-turn driving.
///
/// `turn` selects the arc: 0 drives straight. The inner wheel tapers
/// linearly by `1 - 2|turn|`, standing still at `|turn| = 0.5` and
/// counter-rotating at full power at `|turn| = 1`, which pivots the
/// vehicle in place. Negative `turn` steers left, positive steers
/// right. `power` scales both wheels; a negative power drives the same
/// arc backwards.
pub struct DriveCommand {
    turn: f32,
    power: f32,
}

impl DriveCommand {
    pub fn new(turn: f32, power: f32) -> Self {
        Self { turn, power }
    }
}

impl Command for DriveCommand {
    fn step(&mut self, gate: &mut Gate, cycle: &Cycle, out: &mut Actuation) {
        if gate.poll(cycle) {
            out.drive(0.0, 0.0);
            return;
        }

        let mut left = 1.0;
        let mut right = 1.0;
        if self.turn < 0.0 {
            right = 1.0 - self.turn.abs() * 2.0;
        } else if self.turn > 0.0 {
            left = 1.0 - self.turn.abs() * 2.0;
        }

        out.drive(left * self.power, right * self.power);
    }
}

#[cfg(test)]
mod tests {
    use wayline_core::{Luminance, Side};

    use super::super::timer::TimerTrigger;
    use super::*;

    fn step_once(turn: f32, power: f32) -> (f32, f32) {
        let luminance = Luminance::default();
        let cycle = Cycle {
            luminance: &luminance,
            tick: 0.0,
            bar: 1,
        };
        let mut out = Actuation::default();
        let mut gate = Gate::new(Box::new(TimerTrigger::new(100.0)), 0);

        DriveCommand::new(turn, power).step(&mut gate, &cycle, &mut out);
        (out.power(Side::Left), out.power(Side::Right))
    }

    #[test]
    fn zero_turn_drives_straight() {
        assert_eq!(step_once(0.0, 1.0), (1.0, 1.0));
        assert_eq!(step_once(0.0, 0.5), (0.5, 0.5));
    }

    #[test]
    fn half_turn_stops_the_inner_wheel() {
        assert_eq!(step_once(0.5, 1.0), (0.0, 1.0));
        assert_eq!(step_once(-0.5, 1.0), (1.0, 0.0));
    }

    #[test]
    fn full_turn_pivots_in_place() {
        assert_eq!(step_once(1.0, 1.0), (-1.0, 1.0));
        assert_eq!(step_once(-1.0, 1.0), (1.0, -1.0));
    }

    #[test]
    fn negative_power_reverses_the_arc() {
        assert_eq!(step_once(0.0, -0.75), (-0.75, -0.75));
        assert_eq!(step_once(-0.5, -0.75), (-0.75, 0.0));
    }
}
