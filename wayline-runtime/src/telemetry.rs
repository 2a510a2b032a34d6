use serde::Serialize;

use wayline_core::algorithm::SimpleExpSmoothing;

/// Smoothing factor for the recorded drive trace.
const ALPHA: f32 = 0.25;

/// Per-tick drive telemetry frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ControlFrame {
    /// Drive output as commanded.
    pub raw: (f32, f32),
    /// Drive output through the lowpass filter.
    pub smoothed: (f32, f32),
}

/// Capped telemetry ring.
///
/// Holds the most recent control frames up to a fixed capacity,
/// overwritten cyclically. The ring lives in memory only; inspection
/// tooling reads it in arrival order.
pub struct Recorder {
    capacity: usize,
    frames: Vec<ControlFrame>,
    head: usize,
    filter: (SimpleExpSmoothing, SimpleExpSmoothing),
}

impl Recorder {
    /// Construct a recorder with the given frame capacity.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "telemetry ring requires capacity");

        Self {
            capacity,
            frames: Vec::with_capacity(capacity),
            head: 0,
            filter: (
                SimpleExpSmoothing::new(ALPHA),
                SimpleExpSmoothing::new(ALPHA),
            ),
        }
    }

    /// Record one tick of drive output.
    pub fn record(&mut self, left: f32, right: f32) {
        let frame = ControlFrame {
            raw: (left, right),
            smoothed: (self.filter.0.fit(left), self.filter.1.fit(right)),
        };

        if self.frames.len() < self.capacity {
            self.frames.push(frame);
        } else {
            self.frames[self.head] = frame;
            self.head = (self.head + 1) % self.capacity;
        }
    }

    /// Number of recorded frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Frames in arrival order, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &ControlFrame> {
        let (newer, older) = self.frames.split_at(self.head);
        older.iter().chain(newer.iter())
    }

    /// Drop all frames and re-arm the smoothing filters.
    pub fn clear(&mut self) {
        self.frames.clear();
        self.head = 0;
        self.filter.0.reset();
        self.filter.1.reset();
    }
}
