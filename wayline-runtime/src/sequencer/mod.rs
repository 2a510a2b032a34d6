pub use self::command::{Blank, Command};
pub use self::operand::Operand;
pub use self::trigger::{CompletionSet, Gate, Trigger};

mod command;
mod operand;
mod trigger;

use wayline_core::{Actuation, Luminance, Side};

use crate::consts;
use crate::program::Program;
use crate::telemetry::Recorder;

/// One tick of shared scheduler state.
///
/// A fresh cycle is handed to every live command and trigger on every
/// call to [`Sequencer::run`].
pub struct Cycle<'a> {
    /// Sensor snapshot for this tick.
    pub luminance: &'a Luminance,
    /// Simulated time in ticks. Advanced by the frame delta, never by
    /// the wall clock, so identical input sequences replay identically.
    pub tick: f64,
    /// Program cursor: the number of bars materialized so far.
    pub bar: usize,
}

/// Live command-bar unit: commands layered against one gate.
struct LiveUnit {
    commands: Vec<Box<dyn Command>>,
    gate: Gate,
    silenced: bool,
}

/// Command-bar sequencer.
///
/// Owns the ordered program and advances through it one bar at a time.
/// All commands of the active bar execute synchronously within one
/// [`Sequencer::run`] call; concurrency here is layering within a
/// tick, like instruments in a song, not parallel execution. A bar is
/// discarded once every gated unit has reported completion.
pub struct Sequencer<O> {
    operand: O,
    program: Program,
    /// Number of bars materialized; the active bar is `index - 1`.
    index: usize,
    started: bool,
    finished: bool,
    /// Deferred bar transition. Set when the completion set fills,
    /// consumed at the end of the same tick; the live bar is never
    /// swapped from inside a trigger.
    advance: bool,
    live: Vec<LiveUnit>,
    completion: CompletionSet,
    tick: f64,
    sample: bool,
    luminance: Option<Luminance>,
    output: Actuation,
    recorder: Recorder,
}

impl<O: Operand> Sequencer<O> {
    /// Construct a sequencer with an empty program.
    pub fn new(operand: O) -> Self {
        Self {
            operand,
            program: Program::default(),
            index: 0,
            started: false,
            finished: false,
            advance: false,
            live: Vec::new(),
            completion: CompletionSet::default(),
            tick: 0.0,
            sample: false,
            luminance: None,
            output: Actuation::default(),
            recorder: Recorder::new(consts::TELEMETRY_CAPACITY),
        }
    }

    /// Construct a sequencer and load a program.
    pub fn with_program(operand: O, program: Program) -> crate::Result<Self> {
        let mut this = Self::new(operand);
        this.set_program(program)?;
        Ok(this)
    }

    /// Replace the program wholesale.
    ///
    /// The program is validated before it is accepted; a malformed
    /// program can only originate from a bug in the authoring tool and
    /// is rejected outright, leaving the current program in place.
    /// Accepting a program resets the sequencer.
    pub fn set_program(&mut self, program: Program) -> crate::Result {
        program.validate()?;
        self.program = program;
        self.reset();
        Ok(())
    }

    /// Store the sensor snapshot for the coming tick.
    ///
    /// The readings pass through the boundary quantizer once more;
    /// out-of-range samples are clamped here rather than propagated
    /// into the control laws.
    pub fn feed(&mut self, luminance: Luminance) {
        self.luminance = Some(Luminance::new(
            luminance.top,
            luminance.lft,
            luminance.bot,
            luminance.rgt,
        ));
    }

    /// Run one tick of the active bar.
    ///
    /// Returns true while the program is running. Once the final bar
    /// completes the next call resets the sequencer and returns false,
    /// after which the host may load a new program or start over.
    pub fn run(&mut self, delta: f64) -> bool {
        if self.finished {
            self.reset();
            return false;
        }
        if !self.started {
            if self.program.is_empty() {
                return false;
            }
            self.started = true;
            self.assign_next_bar();
        }

        // Sensor provider not ready: hold the last commanded output and
        // defer every control decision until a snapshot arrives.
        let Some(luminance) = self.luminance else {
            return true;
        };

        if self.sample {
            trace!("Sample: {:?}", luminance);
        }

        let cycle = Cycle {
            luminance: &luminance,
            tick: self.tick,
            bar: self.index,
        };

        for unit in self.live.iter_mut() {
            for command in unit.commands.iter_mut() {
                command.step(&mut unit.gate, &cycle, &mut self.output);
            }
        }

        // Units whose gate opened this tick are silenced so they cannot
        // keep emitting output while sibling units converge; their
        // completion slot is marked exactly once.
        for unit in self.live.iter_mut() {
            if unit.gate.fired() && !unit.silenced {
                unit.silenced = true;
                for command in unit.commands.iter_mut() {
                    *command = Box::new(Blank);
                }
                if let Some(slot) = unit.gate.slot() {
                    if self.completion.mark(slot) {
                        self.advance = true;
                    }
                }
            }
        }

        if self.advance {
            self.advance = false;
            if self.index < self.program.len() {
                self.assign_next_bar();
            } else {
                debug!("Program finished after {} bars", self.index);
                self.finished = true;
            }
        }

        self.recorder.record(
            self.output.power(Side::Left),
            self.output.power(Side::Right),
        );

        self.tick += delta * consts::TICK_HZ;
        true
    }

    /// Return to idle.
    ///
    /// Clears the run state: program cursor, live bar, simulated clock,
    /// output accumulator and telemetry. The latest sensor snapshot is
    /// kept; it belongs to the sampler, not to the run. Safe to call
    /// in any state.
    pub fn reset(&mut self) {
        self.index = 0;
        self.started = false;
        self.finished = false;
        self.advance = false;
        self.live.clear();
        self.completion.clear();
        self.tick = 0.0;
        self.output = Actuation::default();
        self.recorder.clear();
    }

    /// Materialize the next program entry into live units.
    fn assign_next_bar(&mut self) {
        let entry = self
            .program
            .get(self.index)
            .expect("program cursor out of range");
        // Move the cursor before building the bar so triggers observing
        // it through the cycle see the new position.
        self.index += 1;
        self.completion.clear();

        let mut live = Vec::new();
        for unit in entry.units() {
            let gate = match &unit.trigger {
                Some(def) => Gate::new(self.operand.fetch_trigger(def), self.completion.alloc()),
                None => Gate::never(),
            };
            let commands = unit
                .commands
                .iter()
                .map(|def| self.operand.fetch_command(def))
                .collect();
            live.push(LiveUnit {
                commands,
                gate,
                silenced: false,
            });
        }
        self.live = live;

        debug!("Start command bar {}/{}", self.index, self.program.len());
    }

    /// Actuator output accumulated over the last tick.
    #[inline]
    pub fn output(&self) -> &Actuation {
        &self.output
    }

    /// Manual arcade-style drive, for host input passthrough.
    pub fn drive_xy(&mut self, x: f32, y: f32) {
        self.output.drive_xy(x, y);
    }

    /// Simulated clock, in ticks.
    #[inline]
    pub fn tick(&self) -> f64 {
        self.tick
    }

    /// Program cursor: bars materialized so far.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether a run is in progress.
    pub fn is_running(&self) -> bool {
        self.started && !self.finished
    }

    /// Toggle per-tick snapshot logging.
    pub fn set_sample(&mut self, sample: bool) {
        self.sample = sample;
    }

    /// Telemetry ring for inspection.
    pub fn telemetry(&self) -> &Recorder {
        &self.recorder
    }

    /// The loaded program.
    pub fn program(&self) -> &Program {
        &self.program
    }
}
