use crate::program::{BarEntry, BarUnit, CommandDef, Edge, Program, TriggerDef};

/// Ticks one pump stroke of the probe lift takes.
const STROKE_TICKS: f64 = 40.0;

fn bar(command: CommandDef, trigger: TriggerDef) -> BarEntry {
    BarEntry::Single(BarUnit::new(command, trigger))
}

/// Fuel-station docking sequence.
///
/// Trace the feeder line to the right-hand branch, square up on the
/// crossing, reverse into the bay on a fixed arc, then work the pump
/// lever seven strokes.
pub fn fuel_station_dock() -> Program {
    let mut entries = vec![
        bar(CommandDef::Go, TriggerDef::Timer { ticks: 20.0 }),
        bar(
            CommandDef::Trace { speed: 0.8 },
            TriggerDef::Intersection { edge: Edge::Right },
        ),
        bar(CommandDef::Stop, TriggerDef::Timer { ticks: 5.0 }),
        bar(CommandDef::Align, TriggerDef::Timer { ticks: 10.0 }),
        bar(
            CommandDef::Drive {
                turn: 0.0,
                power: 1.0,
            },
            TriggerDef::Timer { ticks: 40.0 },
        ),
        bar(
            CommandDef::Drive {
                turn: -0.5,
                power: -0.75,
            },
            TriggerDef::Timer { ticks: 157.0 },
        ),
        bar(
            CommandDef::Drive {
                turn: 0.0,
                power: 0.5,
            },
            TriggerDef::Timer { ticks: 56.0 },
        ),
    ];

    for stroke in 0..7 {
        entries.push(bar(
            CommandDef::Probe { speed: 1.0 },
            TriggerDef::Timer {
                ticks: STROKE_TICKS,
            },
        ));
        entries.push(bar(
            CommandDef::Probe { speed: -1.0 },
            TriggerDef::Timer {
                ticks: STROKE_TICKS,
            },
        ));
        entries.push(if stroke == 6 {
            bar(CommandDef::Stop, TriggerDef::Done)
        } else {
            bar(CommandDef::Stop, TriggerDef::Timer { ticks: 10.0 })
        });
    }

    Program::from(entries)
}

/// Line-trace circuit.
///
/// A full lap over the test map: both crossings, the left and right
/// branches, the open-surface stretch and the blind dead-reckoning
/// arcs between them.
pub fn trace_circuit() -> Program {
    let drive = |turn: f32, power: f32| CommandDef::Drive { turn, power };
    let trace = |speed: f32| CommandDef::Trace { speed };
    let timer = |ticks: f64| TriggerDef::Timer { ticks };
    let intersection = |edge: Edge| TriggerDef::Intersection { edge };

    Program::from(vec![
        bar(CommandDef::Go, timer(20.0)),
        bar(trace(0.8), intersection(Edge::Right)),
        bar(CommandDef::Stop, timer(5.0)),
        bar(CommandDef::Align, timer(10.0)),
        bar(drive(0.0, 1.0), timer(8.0)),
        bar(drive(-1.0, 1.0), timer(20.0)),
        bar(drive(-1.0, 0.6), intersection(Edge::Crossing)),
        bar(trace(1.0), intersection(Edge::Right)),
        bar(CommandDef::Stop, timer(3.0)),
        bar(trace(1.0), intersection(Edge::Top)),
        bar(drive(-1.0, 0.6), timer(40.0)),
        bar(drive(0.0, 0.6), timer(30.0)),
        bar(drive(1.0, 0.6), timer(40.0)),
        bar(drive(0.0, -0.6), timer(40.0)),
        bar(drive(1.0, 1.0), timer(60.0)),
        bar(drive(1.0, 0.6), intersection(Edge::Crossing)),
        bar(CommandDef::Align, timer(15.0)),
        bar(drive(0.0, 0.8), timer(10.0)),
        bar(trace(1.0), intersection(Edge::Left)),
        bar(CommandDef::Stop, timer(3.0)),
        bar(trace(1.0), intersection(Edge::Top)),
        bar(drive(0.0, -1.0), timer(10.0)),
        bar(drive(-1.0, -1.0), timer(18.0)),
        bar(drive(0.5, 1.0), timer(23.0)),
        bar(drive(1.0, 0.6), intersection(Edge::Crossing)),
        bar(CommandDef::Align, timer(10.0)),
        bar(trace(1.0), intersection(Edge::Open)),
        bar(drive(0.0, 1.0), timer(38.0)),
        bar(drive(1.0, 0.7), timer(120.0)),
        bar(CommandDef::Stop, TriggerDef::Done),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_programs_are_well_formed() {
        assert!(fuel_station_dock().validate().is_ok());
        assert!(trace_circuit().validate().is_ok());
    }

    #[test]
    fn docking_sequence_shape() {
        let program = fuel_station_dock();

        // Seven approach bars plus seven three-bar pump strokes.
        assert_eq!(program.len(), 28);
    }

    #[test]
    fn programs_survive_the_document_form() {
        let program = fuel_station_dock();
        let document = serde_json::to_string(&program).unwrap();

        assert_eq!(Program::from_json(&document).unwrap(), program);
    }
}
