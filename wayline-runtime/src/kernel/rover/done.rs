use crate::sequencer::{Cycle, Trigger};

/// Fires on the first poll.
///
/// Used as a bar terminator with no waiting.
pub struct DoneTrigger;

impl Trigger for DoneTrigger {
    fn poll(&mut self, _: &Cycle) -> bool {
        true
    }
}
