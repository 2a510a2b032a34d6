use wayline_core::Identity;

use crate::program::{CommandDef, TriggerDef};
use crate::sequencer::{Blank, Command, Operand, Trigger};

mod align;
mod done;
mod drive;
mod go;
mod intersection;
mod probe;
mod programs;
mod stop;
mod timer;
mod trace;

pub use self::programs::{fuel_station_dock, trace_circuit};

/// Sensor level below which a reading counts as dark.
pub(crate) const DARK_LEVEL: f32 = 0.4;
/// Sensor level above which a reading counts as light.
pub(crate) const LIGHT_LEVEL: f32 = 0.8;

/// The rover kernel.
///
/// A differential-drive line-trace vehicle with a prismatic probe
/// lift. The operand maps every program descriptor onto the command
/// and trigger library in this module.
#[derive(Clone, Copy, Default)]
pub struct Rover;

impl Identity for Rover {
    /// The introduction message makes it easier to spot the current
    /// running configuration.
    fn intro() -> String {
        "Hello, I'm a line-trace rover 🛞. Show me some tape!".to_owned()
    }
}

impl Operand for Rover {
    fn fetch_command(&self, def: &CommandDef) -> Box<dyn Command> {
        match def {
            CommandDef::Go => Box::new(go::GoCommand),
            CommandDef::Trace { speed } => Box::new(trace::TraceCommand::new(*speed)),
            CommandDef::Align => Box::new(align::AlignCommand),
            CommandDef::Stop => Box::new(stop::StopCommand),
            CommandDef::Drive { turn, power } => Box::new(drive::DriveCommand::new(*turn, *power)),
            CommandDef::Probe { speed } => Box::new(probe::ProbeCommand::new(*speed)),
            CommandDef::Blank => Box::new(Blank),
        }
    }

    fn fetch_trigger(&self, def: &TriggerDef) -> Box<dyn Trigger> {
        match def {
            TriggerDef::Timer { ticks } => Box::new(timer::TimerTrigger::new(*ticks)),
            TriggerDef::Intersection { edge } => {
                Box::new(intersection::IntersectionTrigger::new(*edge))
            }
            TriggerDef::Done => Box::new(done::DoneTrigger),
        }
    }
}
