// Copyright (C) 2024 Wayline Maintainers
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

use clap::Parser;

use wayline::kernel::rover::{self, Rover};
use wayline::program::Program;
use wayline::{Identity, Sequencer};

mod config;
mod map;
mod vehicle;

#[derive(Parser)]
#[command(author = "Copyright (C) 2024 Wayline Maintainers")]
#[command(version, propagate_version = true)]
#[command(about = "Wayline machine simulator", long_about = None)]
struct Args {
    /// Command program document; defaults to the built-in docking sequence.
    #[arg(short, long)]
    program: Option<std::path::PathBuf>,
    /// Run the built-in line-trace circuit instead.
    #[arg(long)]
    circuit: bool,
    /// Introduce jitter in the sensor data.
    #[arg(long)]
    jitter: bool,
    /// Seed for the jitter source.
    #[arg(long, default_value_t = 0x5EED)]
    seed: u64,
    /// Run unpaced instead of at frame rate.
    #[arg(long)]
    headless: bool,
    /// Stop after this many frames.
    #[arg(long)]
    frames: Option<u64>,
    /// Daemonize the service.
    #[arg(long)]
    daemon: bool,
    /// Level of verbosity.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let bin_name = env!("CARGO_BIN_NAME");

    let mut config = config::SimConfig {
        program: args.program,
        circuit: args.circuit,
        jitter: args.jitter,
        seed: args.seed,
        headless: args.headless,
        frames: args.frames,
        global: wayline::GlobalConfig::default(),
    };

    config.global.bin_name = bin_name.to_string();
    config.global.daemon = args.daemon;

    let mut log_config = simplelog::ConfigBuilder::new();
    if args.daemon {
        log_config.set_time_level(log::LevelFilter::Off);
        log_config.set_thread_level(log::LevelFilter::Off);
    } else {
        log_config.set_time_offset_to_local().ok();
        log_config.set_time_format_rfc2822();
    }

    log_config.set_target_level(log::LevelFilter::Off);
    log_config.set_location_level(log::LevelFilter::Off);
    log_config.add_filter_ignore_str("mio");

    let log_level = if args.daemon {
        log::LevelFilter::Info
    } else {
        match args.verbose {
            0 => log::LevelFilter::Error,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    };

    let color_choice = if args.daemon {
        simplelog::ColorChoice::Never
    } else {
        simplelog::ColorChoice::Auto
    };

    simplelog::TermLogger::init(
        log_level,
        log_config.build(),
        simplelog::TerminalMode::Mixed,
        color_choice,
    )?;

    if args.daemon {
        log::debug!("Running service as daemon");
    }

    log::trace!("{:#?}", config);

    daemonize(&config).await
}

async fn daemonize(config: &config::SimConfig) -> anyhow::Result<()> {
    use rand::SeedableRng;

    let program = match &config.program {
        Some(path) => Program::from_json_file(path)?,
        None if config.circuit => rover::trace_circuit(),
        None => rover::fuel_station_dock(),
    };

    log::info!("{}", Rover::intro());
    log::info!("Program loaded with {} bars", program.len());

    let mut sequencer = Sequencer::with_program(Rover, program)?;

    let map = map::LineMap::default();
    // Spawn on the left edge of the circuit, heading along the line.
    let mut vehicle = vehicle::Vehicle::new(
        nalgebra::Point2::new(-40.0, -10.0),
        std::f32::consts::FRAC_PI_2,
    );

    let mut jitter = config
        .jitter
        .then(|| rand::rngs::StdRng::seed_from_u64(config.seed));

    const FRAME_DELTA: f64 = 1.0 / 60.0;
    let mut interval = tokio::time::interval(std::time::Duration::from_micros(16_667));

    let mut frame: u64 = 0;
    loop {
        let snapshot = vehicle.sample(&map, jitter.as_mut());
        sequencer.feed(snapshot);

        if !sequencer.run(FRAME_DELTA) {
            break;
        }

        if config.global.enable_motion {
            vehicle.integrate(sequencer.output(), FRAME_DELTA as f32);
        }

        frame += 1;
        if frame % 60 == 0 {
            let position = vehicle.position();
            log::debug!(
                "Frame {}; Bar {}; Position ({:.1}, {:.1}); Heading {:.2}; Lift {:.2}",
                frame,
                sequencer.index(),
                position.x,
                position.y,
                vehicle.heading(),
                vehicle.probe()
            );
        }

        if config.frames.map_or(false, |limit| frame >= limit) {
            log::warn!("Frame limit reached before the program finished");
            break;
        }

        if !config.headless {
            interval.tick().await;
        }
    }

    let position = vehicle.position();
    log::info!(
        "Simulation done after {} frames; final position ({:.1}, {:.1}); {} telemetry frames",
        frame,
        position.x,
        position.y,
        sequencer.telemetry().len()
    );

    Ok(())
}
