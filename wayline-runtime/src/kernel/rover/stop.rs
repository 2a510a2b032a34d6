use wayline_core::Actuation;

use crate::sequencer::{Command, Cycle, Gate};

/// Zero output.
///
/// Polls its gate every tick, so paired with `done` it degenerates into
/// a bar-advance pulse.
pub struct StopCommand;

impl Command for StopCommand {
    fn step(&mut self, gate: &mut Gate, cycle: &Cycle, out: &mut Actuation) {
        gate.poll(cycle);
        out.drive(0.0, 0.0);
    }
}
