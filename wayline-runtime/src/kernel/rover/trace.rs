use wayline_core::math::map_linear;
use wayline_core::Actuation;

use crate::sequencer::{Command, Cycle, Gate};

/// Line-centering controller.
///
/// The track is a black trace line with a white guide line on either
/// side, all of equal thickness. Every tick the controller takes the
/// ratio of the darker side probe against the lighter one (1 means
/// balanced), remaps it onto `[-1, 1]` and tapers the brighter side's
/// wheel by it, keeping the vehicle centered over the trace. With both
/// probes equal, including the all-dark degenerate case, neither wheel
/// is tapered.
pub struct TraceCommand {
    speed: f32,
}

impl TraceCommand {
    pub fn new(speed: f32) -> Self {
        Self { speed }
    }
}

impl Command for TraceCommand {
    fn step(&mut self, gate: &mut Gate, cycle: &Cycle, out: &mut Actuation) {
        if gate.poll(cycle) {
            out.drive(0.0, 0.0);
            return;
        }

        let mut left = 1.0;
        let mut right = 1.0;

        let (lft, rgt) = (cycle.luminance.lft, cycle.luminance.rgt);
        let turn_raw = lft.min(rgt) / lft.max(rgt);
        let turn = map_linear(turn_raw, 0.0, 1.0, -1.0, 1.0);
        if lft > rgt {
            right = turn;
        } else if rgt > lft {
            left = turn;
        }

        out.drive(left * self.speed, right * self.speed);
    }
}
