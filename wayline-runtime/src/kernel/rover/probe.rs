use wayline_core::Actuation;

use crate::sequencer::{Command, Cycle, Gate};

/// Run the probe lift.
///
/// Accumulates `speed` onto the lift axis every tick until the gate
/// opens. The drive wheels are left alone, so a probe unit layers
/// cleanly over a driving command in the same bar.
pub struct ProbeCommand {
    speed: f32,
}

impl ProbeCommand {
    pub fn new(speed: f32) -> Self {
        Self { speed }
    }
}

impl Command for ProbeCommand {
    fn step(&mut self, gate: &mut Gate, cycle: &Cycle, out: &mut Actuation) {
        if gate.poll(cycle) {
            return;
        }
        out.add_probe(self.speed, 0.0);
    }
}

#[cfg(test)]
mod tests {
    use wayline_core::{Luminance, Side};

    use super::super::timer::TimerTrigger;
    use super::*;

    #[test]
    fn accumulates_until_gated() {
        let luminance = Luminance::default();
        let mut out = Actuation::default();
        out.drive(0.3, 0.3);
        let mut gate = Gate::new(Box::new(TimerTrigger::new(3.0)), 0);
        let mut command = ProbeCommand::new(1.0);

        for tick in 0..5 {
            let cycle = Cycle {
                luminance: &luminance,
                tick: tick as f64,
                bar: 1,
            };
            command.step(&mut gate, &cycle, &mut out);
        }

        // Ticks 0, 1 and 2 accumulated; 3 and 4 were gated off.
        assert_eq!(out.probe_y(), 3.0);
        // The drive channels belong to someone else.
        assert_eq!(out.power(Side::Left), 0.3);
        assert_eq!(out.power(Side::Right), 0.3);
    }
}
