use serde::{Deserialize, Serialize};

/// Four-point luminance snapshot.
///
/// One normalized brightness reading for each of the four body-relative
/// probes: forward, left, rear and right facing. The external sampler
/// replaces the readings in place once per tick; control logic only
/// ever reads them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Luminance {
    /// Forward probe.
    pub top: f32,
    /// Left probe.
    pub lft: f32,
    /// Rear probe.
    pub bot: f32,
    /// Right probe.
    pub rgt: f32,
}

/// Probe channel, in sampler order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    Top = 0,
    Lft = 1,
    Bot = 2,
    Rgt = 3,
}

impl TryFrom<u32> for Channel {
    type Error = ();

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            v if Channel::Top as u32 == v => Ok(Channel::Top),
            v if Channel::Lft as u32 == v => Ok(Channel::Lft),
            v if Channel::Bot as u32 == v => Ok(Channel::Bot),
            v if Channel::Rgt as u32 == v => Ok(Channel::Rgt),
            _ => Err(()),
        }
    }
}

impl Luminance {
    /// Construct a snapshot from the four probe readings at once.
    ///
    /// Every reading passes through the same boundary quantizer as
    /// [`Luminance::set`].
    pub fn new(top: f32, lft: f32, bot: f32, rgt: f32) -> Self {
        let mut this = Self::default();
        this.set(Channel::Top, top);
        this.set(Channel::Lft, lft);
        this.set(Channel::Bot, bot);
        this.set(Channel::Rgt, rgt);
        this
    }

    /// Store a reading on the given channel.
    ///
    /// The value is truncated to two decimals and clamped onto the unit
    /// interval at this boundary. A non-finite reading collapses to 0
    /// so that degenerate samples never reach the control laws.
    pub fn set(&mut self, channel: Channel, value: f32) {
        let value = quantize(value);
        match channel {
            Channel::Top => self.top = value,
            Channel::Lft => self.lft = value,
            Channel::Bot => self.bot = value,
            Channel::Rgt => self.rgt = value,
        }
    }

    /// Reading on the given channel.
    pub fn get(&self, channel: Channel) -> f32 {
        match channel {
            Channel::Top => self.top,
            Channel::Lft => self.lft,
            Channel::Bot => self.bot,
            Channel::Rgt => self.rgt,
        }
    }

    /// Apply a function to every reading, in channel order.
    pub fn map<T>(&self, func: impl Fn(f32) -> T) -> [T; 4] {
        [
            func(self.top),
            func(self.lft),
            func(self.bot),
            func(self.rgt),
        ]
    }
}

fn quantize(value: f32) -> f32 {
    if !value.is_finite() {
        return 0.0;
    }

    ((value * 100.0).trunc() / 100.0).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantize_truncates_to_two_decimals() {
        let mut luminance = Luminance::default();

        luminance.set(Channel::Lft, 0.8397);
        assert_eq!(luminance.lft, 0.83);

        luminance.set(Channel::Rgt, 0.999);
        assert_eq!(luminance.rgt, 0.99);
    }

    #[test]
    fn out_of_range_readings_are_clamped() {
        let luminance = Luminance::new(1.7, -0.3, f32::NAN, f32::INFINITY);

        assert_eq!(luminance.top, 1.0);
        assert_eq!(luminance.lft, 0.0);
        assert_eq!(luminance.bot, 0.0);
        assert_eq!(luminance.rgt, 0.0);
    }

    #[test]
    fn channel_roundtrip() {
        for (index, channel) in [Channel::Top, Channel::Lft, Channel::Bot, Channel::Rgt]
            .into_iter()
            .enumerate()
        {
            assert_eq!(Channel::try_from(index as u32), Ok(channel));
        }
        assert_eq!(Channel::try_from(4), Err(()));
    }

    #[test]
    fn map_preserves_channel_order() {
        let luminance = Luminance::new(0.1, 0.2, 0.3, 0.4);

        assert_eq!(luminance.map(|x| x > 0.25), [false, false, true, true]);
    }
}
