// Copyright (C) 2024 Wayline Maintainers
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

//! The `wayline` library provides the command-bar sequencer for the
//! Wayline autonomous vehicle.
//!
//! A program is an ordered list of bars. Each bar layers one or more
//! commands which run in unison, every tick, against a shared output
//! accumulator, until every gated unit of the bar has reported
//! completion. Commands read the four-point luminance snapshot and
//! write wheel and probe actuation; triggers decide when a unit is
//! done. The host frame loop drives the whole arrangement through
//! [`Sequencer::run`] once per simulated frame.

pub mod kernel;
pub mod program;
pub mod sequencer;
pub mod telemetry;

#[macro_use]
extern crate log;

mod config;
mod error;

pub use self::config::*;
pub use self::error::Error;
pub use self::sequencer::Sequencer;

pub use wayline_core::{Actuation, Channel, Identity, Luminance, Side};

pub type Result<T = ()> = std::result::Result<T, Error>;

/// Wayline runtime module containing various constants.
pub mod consts {
    /// Wayline runtime version.
    ///
    /// # Example
    ///
    /// ```
    /// use wayline::consts::VERSION;
    ///
    /// println!("Wayline runtime version: {}", VERSION);
    /// ```
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// Simulated ticks per second of frame time.
    ///
    /// The sequencer clock advances by `delta * TICK_HZ` per frame so
    /// that timers measure simulated time, not the wall clock.
    pub const TICK_HZ: f64 = 60.0;

    /// Telemetry ring capacity in control frames.
    pub const TELEMETRY_CAPACITY: usize = 2_000;
}
