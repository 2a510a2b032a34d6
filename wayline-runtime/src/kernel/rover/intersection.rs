use crate::program::Edge;
use crate::sequencer::{Cycle, Trigger};

use super::{DARK_LEVEL, LIGHT_LEVEL};

/// Classifies the four-probe snapshot against an intersection
/// signature.
///
/// Fires the first tick the pattern holds; there is no debounce beyond
/// what the upstream controllers impose on the vehicle's path.
pub struct IntersectionTrigger {
    edge: Edge,
}

impl IntersectionTrigger {
    pub fn new(edge: Edge) -> Self {
        Self { edge }
    }
}

impl Trigger for IntersectionTrigger {
    fn poll(&mut self, cycle: &Cycle) -> bool {
        let dark = |value: f32| value < DARK_LEVEL;
        let light = |value: f32| value > LIGHT_LEVEL;

        let &crate::Luminance { top, lft, bot, rgt } = cycle.luminance;
        match self.edge {
            Edge::Right => dark(rgt) && dark(top) && dark(bot),
            Edge::Left => dark(lft) && dark(top) && dark(bot),
            Edge::Top => dark(bot) && dark(rgt) && dark(lft),
            Edge::Crossing => dark(top) && dark(bot) && light(lft) && light(rgt),
            Edge::Open => light(top) && light(lft) && light(bot) && light(rgt),
        }
    }
}

#[cfg(test)]
mod tests {
    use wayline_core::Luminance;

    use super::*;

    fn fires(edge: Edge, luminance: Luminance) -> bool {
        let cycle = Cycle {
            luminance: &luminance,
            tick: 0.0,
            bar: 1,
        };
        IntersectionTrigger::new(edge).poll(&cycle)
    }

    #[test]
    fn crossing_needs_dark_axis_and_light_sides() {
        assert!(fires(Edge::Crossing, Luminance::new(0.1, 0.9, 0.1, 0.9)));

        // Forward probe not dark enough.
        assert!(!fires(Edge::Crossing, Luminance::new(0.5, 0.9, 0.1, 0.9)));
        // Side probes not on the guides.
        assert!(!fires(Edge::Crossing, Luminance::new(0.1, 0.7, 0.1, 0.9)));
    }

    #[test]
    fn side_branches_need_three_dark_probes() {
        assert!(fires(Edge::Right, Luminance::new(0.1, 0.9, 0.2, 0.3)));
        assert!(!fires(Edge::Right, Luminance::new(0.1, 0.9, 0.2, 0.5)));

        assert!(fires(Edge::Left, Luminance::new(0.1, 0.3, 0.2, 0.9)));
        assert!(!fires(Edge::Left, Luminance::new(0.5, 0.3, 0.2, 0.9)));

        assert!(fires(Edge::Top, Luminance::new(0.9, 0.1, 0.2, 0.3)));
        assert!(!fires(Edge::Top, Luminance::new(0.9, 0.1, 0.5, 0.3)));
    }

    #[test]
    fn open_needs_a_fully_white_surface() {
        assert!(fires(Edge::Open, Luminance::new(0.9, 0.95, 0.85, 0.9)));
        assert!(!fires(Edge::Open, Luminance::new(0.9, 0.95, 0.8, 0.9)));
    }

    #[test]
    fn boundary_levels_do_not_fire() {
        // Exactly at the dark threshold is not dark.
        assert!(!fires(Edge::Right, Luminance::new(0.4, 0.9, 0.1, 0.1)));
    }
}
