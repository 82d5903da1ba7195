//! # Gripper Control Node
//!
//! Runs the field-bus gripper control unit against simulated drivers
//! on a fixed-period loop: loads the node TOML, builds one adapter per
//! configured gripper, applies zero offsets, and exercises the
//! arbitration layer with a scripted bring-up sequence (calibrate,
//! track, open). In a deployment the bus-receive path replaces the
//! script and an external scheduler invokes the ticks.

use std::path::PathBuf;
use std::process;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use clap::Parser;
use gripper_common::bus::{CommandInfo, CommandSignal};
use gripper_cu::adapter::GripperAdapter;
use gripper_cu::config::load_config;
use gripper_cu::cycle::CycleRunner;
use gripper_cu::observer::TraceObserver;
use gripper_cu::sim::SimGripper;
use gripper_cu::units::BusScale;
use tracing::{error, info, Level};
use tracing_subscriber::EnvFilter;

/// Gripper Control Node — per-cycle bus/actuator arbitration
#[derive(Parser, Debug)]
#[command(name = "gripper_cu")]
#[command(version)]
#[command(about = "Field-bus gripper control unit (simulated bring-up)")]
struct Args {
    /// Path to the node configuration TOML.
    #[arg(default_value = "config/gripper.toml")]
    config: PathBuf,

    /// Stop after this many cycles (default: run until Ctrl-C).
    #[arg(long)]
    cycles: Option<u64>,

    /// Enable verbose logging (DEBUG level).
    #[arg(short, long)]
    verbose: bool,

    /// Output logs in JSON format.
    #[arg(long)]
    json: bool,
}

fn main() {
    let args = Args::parse();
    setup_tracing(&args);

    info!("Gripper CU v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&args) {
        error!("FATAL: {e}");
        process::exit(1);
    }

    info!("Gripper CU shutdown complete");
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(&args.config)?;
    info!(
        "Config OK: resolution={}, cycle_time={}µs, grippers={}",
        config.bus.resolution,
        config.control.cycle_time_us,
        config.grippers.len(),
    );

    let scale = BusScale::new(config.bus.resolution);
    let mut adapters = Vec::with_capacity(config.grippers.len());
    for gripper in &config.grippers {
        let driver = SimGripper::new(gripper.id, config.sim.clone());
        let mut adapter =
            GripperAdapter::new(gripper.id, driver, scale, config.control.gate_on_busy)
                .with_observer(Box::new(TraceObserver));
        adapter.set_zero(gripper.zero_offset);
        info!(
            gripper = gripper.id,
            name = %gripper.name,
            zero_offset = gripper.zero_offset,
            "adapter ready"
        );
        adapters.push(adapter);
    }

    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();
    ctrlc::set_handler(move || {
        info!("Received shutdown signal");
        r.store(false, Ordering::SeqCst);
    })?;

    let mut runner = CycleRunner::new(adapters, &config.control);
    info!("Entering control loop");

    let resolution = config.bus.resolution;
    let max_cycles = args.cycles;
    let stop = running.clone();
    runner.run(&running, move |cycle, adapters| {
        if let Some(limit) = max_cycles {
            if cycle >= limit {
                stop.store(false, Ordering::SeqCst);
                return;
            }
        }
        let command = bringup_command(cycle, resolution);
        for adapter in adapters.iter_mut() {
            adapter.send_command(command);
        }
    });

    let stats = runner.stats();
    info!(
        "Loop done: cycles={}, avg={}ns, max={}ns, overruns={}",
        stats.cycle_count,
        stats.avg_cycle_ns(),
        stats.max_cycle_ns,
        stats.overruns,
    );

    Ok(())
}

/// Scripted bus intent for the bring-up exercise.
///
/// Calibrate once at startup, settle, then alternate between tracking
/// a mid-stroke setpoint and a one-shot open. The same command goes to
/// every gripper; repeats of the one-shots exercise the edge-trigger
/// path exactly as a re-transmitting bus would.
fn bringup_command(cycle: u64, resolution: u16) -> CommandInfo {
    const SETTLE_CYCLES: u64 = 100;
    const PHASE_CYCLES: u64 = 300;

    if cycle == 0 {
        return CommandInfo::new(CommandSignal::Calibrate, 0, 0);
    }
    if cycle < SETTLE_CYCLES {
        return CommandInfo::new(CommandSignal::Waiting, 0, 0);
    }

    let half = resolution / 2;
    let quarter = resolution / 4;
    match (cycle - SETTLE_CYCLES) % PHASE_CYCLES {
        0..=149 => CommandInfo::new(CommandSignal::Goto, half, quarter),
        150..=155 => CommandInfo::new(CommandSignal::Open, 0, 0),
        _ => CommandInfo::new(CommandSignal::Waiting, 0, 0),
    }
}

/// Setup tracing subscriber based on CLI arguments.
fn setup_tracing(args: &Args) {
    let level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    if args.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .compact()
            .init();
    }
}
