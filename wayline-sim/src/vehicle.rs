use nalgebra::{Point2, Rotation2, Vector2};
use rand::rngs::StdRng;
use rand::Rng;

use wayline::{Actuation, Channel, Luminance, Side};

use crate::map::LineMap;

/// Maximum empirical driving speed in meters per second.
const DRIVE_SPEED_MAX: f32 = 26.1 / 30.0;
/// Wheel track width in meters.
const TRACK_WIDTH: f32 = 0.9;
/// Prismatic scale from accumulated probe output to lift position.
const PROBE_SCALE: f32 = 1.0 / 30.0;
/// Body-relative probe offsets: forward, left, rear, right.
const SENSOR_OFFSETS: [(f32, f32); 4] = [(2.0, 0.0), (1.0, 1.0), (-2.6, 0.0), (1.0, -1.0)];
/// Jitter amplitude on a sampled reading.
const JITTER: f32 = 0.02;

/// Simulated vehicle body.
///
/// Differential-drive pose integration plus the prismatic probe lift.
/// This is the host-side stand-in for the physics engine the
/// controller normally drives.
pub struct Vehicle {
    position: Point2<f32>,
    heading: f32,
    probe: f32,
}

impl Vehicle {
    pub fn new(position: Point2<f32>, heading: f32) -> Self {
        Self {
            position,
            heading,
            probe: 0.0,
        }
    }

    /// Sample the map under the four probe offsets.
    pub fn sample(&self, map: &LineMap, mut jitter: Option<&mut StdRng>) -> Luminance {
        let rotation = Rotation2::new(self.heading);
        let channels = [Channel::Top, Channel::Lft, Channel::Bot, Channel::Rgt];

        let mut luminance = Luminance::default();
        for (channel, (dx, dy)) in channels.into_iter().zip(SENSOR_OFFSETS) {
            let probe = self.position + rotation * Vector2::new(dx, dy);
            let mut value = map.reflectance(probe.x, probe.y);
            if let Some(rng) = jitter.as_deref_mut() {
                value += rng.gen_range(-JITTER..=JITTER);
            }
            luminance.set(channel, value);
        }
        luminance
    }

    /// Advance the pose by one frame of actuation.
    pub fn integrate(&mut self, output: &Actuation, delta: f32) {
        let left = output.power(Side::Left) * DRIVE_SPEED_MAX;
        let right = output.power(Side::Right) * DRIVE_SPEED_MAX;

        let forward = (left + right) / 2.0;
        let yaw = (right - left) / TRACK_WIDTH;

        self.heading += yaw * delta;
        let rotation = Rotation2::new(self.heading);
        self.position += rotation * Vector2::new(forward * delta, 0.0);

        // The lift joint tracks the accumulated probe output as a
        // position target.
        self.probe = output.probe_y() * PROBE_SCALE;
    }

    #[inline]
    pub fn position(&self) -> Point2<f32> {
        self.position
    }

    #[inline]
    pub fn heading(&self) -> f32 {
        self.heading
    }

    #[inline]
    pub fn probe(&self) -> f32 {
        self.probe
    }
}
