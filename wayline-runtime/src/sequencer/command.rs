use wayline_core::Actuation;

use super::{Cycle, Gate};

/// Command trait.
///
/// A command is one concurrent voice of the active bar. It is stepped
/// once per tick: it reads the sensor snapshot through the cycle, polls
/// its gate to learn whether it should still act, and writes the
/// channels it owns into the output accumulator. A command lives for
/// exactly one bar.
pub trait Command {
    /// Advance the command by one tick.
    fn step(&mut self, gate: &mut Gate, cycle: &Cycle, out: &mut Actuation);
}

/// The no-op command.
///
/// Writes nothing, so the accumulator holds whatever was last
/// commanded. The sequencer swaps it in for every command of a
/// completed unit while sibling units are still converging.
pub struct Blank;

impl Command for Blank {
    fn step(&mut self, _: &mut Gate, _: &Cycle, _: &mut Actuation) {}
}
