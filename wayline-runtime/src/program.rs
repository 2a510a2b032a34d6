use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Intersection signature on the trace line.
///
/// Serialized under the single-letter names the authoring tool uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Edge {
    /// Branch to the right: right, forward and rear probes dark.
    #[serde(rename = "R")]
    Right,
    /// Branch to the left: left, forward and rear probes dark.
    #[serde(rename = "L")]
    Left,
    /// T-junction ahead: rear, left and right probes dark.
    #[serde(rename = "T")]
    Top,
    /// Perpendicular crossing: forward and rear probes dark while both
    /// side probes sit on the white guides.
    #[serde(rename = "I")]
    Crossing,
    /// Dead line: all four probes on white surface.
    #[serde(rename = "W")]
    Open,
}

impl TryFrom<u32> for Edge {
    type Error = ();

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Edge::Right),
            1 => Ok(Edge::Left),
            2 => Ok(Edge::Top),
            3 => Ok(Edge::Crossing),
            4 => Ok(Edge::Open),
            _ => Err(()),
        }
    }
}

/// Command descriptor, one variant per named behavior constructor.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandDef {
    /// Full power on both wheels.
    Go,
    /// Line-centering controller.
    Trace {
        #[serde(default = "default_rate")]
        speed: f32,
    },
    /// Opposed-wheel rotation until the side probes equalize.
    Align,
    /// Zero output.
    Stop,
    /// Constant-turn driving.
    Drive {
        turn: f32,
        #[serde(default = "default_rate")]
        power: f32,
    },
    /// Accumulate onto the probe lift axis.
    Probe { speed: f32 },
    /// No output at all.
    Blank,
}

/// Trigger descriptor, one variant per named predicate constructor.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerDef {
    /// Fires once the simulated clock has advanced `ticks` past the
    /// first poll.
    Timer { ticks: f64 },
    /// Fires on a four-probe intersection signature.
    Intersection { edge: Edge },
    /// Fires on the first poll.
    Done,
}

fn default_rate() -> f32 {
    1.0
}

/// One or more commands layered against an optional trigger.
///
/// A unit without a trigger never completes on its own; it runs until a
/// sibling unit ends the bar.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BarUnit {
    pub commands: Vec<CommandDef>,
    #[serde(default)]
    pub trigger: Option<TriggerDef>,
}

impl BarUnit {
    /// Single command gated by a trigger.
    pub fn new(command: CommandDef, trigger: TriggerDef) -> Self {
        Self {
            commands: vec![command],
            trigger: Some(trigger),
        }
    }

    /// Command without a completion condition.
    pub fn open(command: CommandDef) -> Self {
        Self {
            commands: vec![command],
            trigger: None,
        }
    }

    /// Several commands layered against the same trigger.
    pub fn layered(commands: Vec<CommandDef>, trigger: TriggerDef) -> Self {
        Self {
            commands,
            trigger: Some(trigger),
        }
    }
}

/// One program step: a single unit or several units in parallel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BarEntry {
    Single(BarUnit),
    Parallel(Vec<BarUnit>),
}

impl BarEntry {
    /// Uniform view over the entry's units.
    pub fn units(&self) -> &[BarUnit] {
        match self {
            BarEntry::Single(unit) => std::slice::from_ref(unit),
            BarEntry::Parallel(units) => units,
        }
    }
}

/// Ordered command-bar program.
///
/// Authored externally, by the block editor at edit time or as a
/// hard-coded table, and owned by one sequencer for the lifetime of a
/// run. Immutable while running; replaced wholesale between runs.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Program(Vec<BarEntry>);

impl Program {
    /// Number of bars.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&BarEntry> {
        self.0.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BarEntry> {
        self.0.iter()
    }

    /// Check the program for authoring errors.
    ///
    /// Fails on the first malformed entry. A malformed entry means the
    /// authoring tool emitted an invalid program; silently skipping it
    /// would hide that bug.
    pub fn validate(&self) -> crate::Result {
        for (bar, entry) in self.0.iter().enumerate() {
            let units = entry.units();
            if units.is_empty() {
                return Err(Error::EmptyGroup { bar });
            }
            for unit in units {
                if unit.commands.is_empty() {
                    return Err(Error::EmptyUnit { bar });
                }
                for command in &unit.commands {
                    command.validate()?;
                }
                if let Some(trigger) = &unit.trigger {
                    trigger.validate()?;
                }
            }
        }
        Ok(())
    }

    /// Parse a program from its JSON document form.
    ///
    /// This is the compiled output format of the block editor: one
    /// descriptor per block, in authoring order.
    pub fn from_json(document: &str) -> crate::Result<Self> {
        let program: Program = serde_json::from_str(document)?;
        program.validate()?;
        Ok(program)
    }

    /// Read and parse a program document from disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> crate::Result<Self> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }
}

impl From<Vec<BarEntry>> for Program {
    fn from(entries: Vec<BarEntry>) -> Self {
        Self(entries)
    }
}

impl CommandDef {
    fn validate(&self) -> crate::Result {
        match self {
            CommandDef::Trace { speed } if !(speed.is_finite() && *speed > 0.0) => {
                Err(Error::Parameter {
                    ident: "trace",
                    reason: "speed must be positive and finite",
                })
            }
            CommandDef::Drive { turn, .. } if !(turn.is_finite() && turn.abs() <= 1.0) => {
                Err(Error::Parameter {
                    ident: "drive",
                    reason: "turn must be within [-1, 1]",
                })
            }
            CommandDef::Drive { power, .. } if !power.is_finite() => Err(Error::Parameter {
                ident: "drive",
                reason: "power must be finite",
            }),
            CommandDef::Probe { speed } if !speed.is_finite() => Err(Error::Parameter {
                ident: "probe",
                reason: "speed must be finite",
            }),
            _ => Ok(()),
        }
    }

    /// Parse a compiled block call into a command descriptor.
    pub fn parse(ident: &str, parameters: &[f32]) -> crate::Result<Self> {
        let def = match (ident, parameters) {
            ("go", []) => CommandDef::Go,
            ("trace", []) => CommandDef::Trace { speed: 1.0 },
            ("trace", [speed]) => CommandDef::Trace { speed: *speed },
            ("align", []) => CommandDef::Align,
            ("stop", []) => CommandDef::Stop,
            ("drive", [turn]) => CommandDef::Drive {
                turn: *turn,
                power: 1.0,
            },
            ("drive", [turn, power]) => CommandDef::Drive {
                turn: *turn,
                power: *power,
            },
            ("probe", [speed]) => CommandDef::Probe { speed: *speed },
            ("blank", []) => CommandDef::Blank,
            ("go" | "align" | "stop" | "blank", _) => {
                return Err(Error::Arity {
                    ident: ident.into(),
                    expected: "0",
                    actual: parameters.len(),
                })
            }
            ("trace", _) => {
                return Err(Error::Arity {
                    ident: ident.into(),
                    expected: "0 or 1",
                    actual: parameters.len(),
                })
            }
            ("drive", _) => {
                return Err(Error::Arity {
                    ident: ident.into(),
                    expected: "1 or 2",
                    actual: parameters.len(),
                })
            }
            ("probe", _) => {
                return Err(Error::Arity {
                    ident: ident.into(),
                    expected: "1",
                    actual: parameters.len(),
                })
            }
            _ => return Err(Error::UnknownFunction(ident.into())),
        };

        def.validate()?;
        Ok(def)
    }
}

impl TriggerDef {
    fn validate(&self) -> crate::Result {
        match self {
            TriggerDef::Timer { ticks } if !(ticks.is_finite() && *ticks >= 0.0) => {
                Err(Error::Parameter {
                    ident: "timer",
                    reason: "ticks must be non-negative and finite",
                })
            }
            _ => Ok(()),
        }
    }

    /// Parse a compiled block call into a trigger descriptor.
    ///
    /// The intersection edge is passed as a numeric code in block
    /// order: 0 right, 1 left, 2 top, 3 crossing, 4 dead line.
    pub fn parse(ident: &str, parameters: &[f32]) -> crate::Result<Self> {
        let def = match (ident, parameters) {
            ("timer", [ticks]) => TriggerDef::Timer {
                ticks: *ticks as f64,
            },
            ("intersection", [code]) => {
                if code.fract() != 0.0 || !(0.0..=4.0).contains(code) {
                    return Err(Error::Parameter {
                        ident: "intersection",
                        reason: "edge code must be an integer within 0..=4",
                    });
                }
                TriggerDef::Intersection {
                    edge: Edge::try_from(*code as u32).expect("edge code within range"),
                }
            }
            ("done", []) => TriggerDef::Done,
            ("timer" | "intersection", _) => {
                return Err(Error::Arity {
                    ident: ident.into(),
                    expected: "1",
                    actual: parameters.len(),
                })
            }
            ("done", _) => {
                return Err(Error::Arity {
                    ident: ident.into(),
                    expected: "0",
                    actual: parameters.len(),
                })
            }
            _ => return Err(Error::UnknownFunction(ident.into())),
        };

        def.validate()?;
        Ok(def)
    }
}
