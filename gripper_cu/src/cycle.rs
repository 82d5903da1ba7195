//! Fixed-period control cycle runner.
//!
//! Drives every gripper adapter once per tick at a configured period.
//! The scheduler here is the plain cooperative kind: one thread, one
//! `std::thread::sleep` pacing loop, no suspension inside a tick. A
//! deployment with a hard real-time scheduler invokes
//! `GripperAdapter::do_control()` from its own loop instead and skips
//! this module entirely.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use gripper_common::config::ControlConfig;
use gripper_common::driver::GripperDriver;
use tracing::info;

use crate::adapter::GripperAdapter;

// ─── Cycle Statistics ───────────────────────────────────────────────

/// O(1) per-cycle timing statistics.
///
/// Updated every cycle with no allocation.
#[derive(Debug, Clone)]
pub struct CycleStats {
    /// Total cycles executed.
    pub cycle_count: u64,
    /// Last cycle duration [ns].
    pub last_cycle_ns: i64,
    /// Minimum cycle duration [ns].
    pub min_cycle_ns: i64,
    /// Maximum cycle duration [ns].
    pub max_cycle_ns: i64,
    /// Running sum for average computation.
    pub sum_cycle_ns: i64,
    /// Number of cycles that exceeded the period budget.
    pub overruns: u64,
}

impl CycleStats {
    /// Create a new zeroed stats instance.
    pub const fn new() -> Self {
        Self {
            cycle_count: 0,
            last_cycle_ns: 0,
            min_cycle_ns: i64::MAX,
            max_cycle_ns: 0,
            sum_cycle_ns: 0,
            overruns: 0,
        }
    }

    /// Record a cycle duration. O(1), no allocation.
    #[inline]
    pub fn record(&mut self, duration_ns: i64) {
        self.cycle_count += 1;
        self.last_cycle_ns = duration_ns;
        if duration_ns < self.min_cycle_ns {
            self.min_cycle_ns = duration_ns;
        }
        if duration_ns > self.max_cycle_ns {
            self.max_cycle_ns = duration_ns;
        }
        self.sum_cycle_ns += duration_ns;
    }

    /// Average cycle time [ns] (returns 0 if no cycles).
    #[inline]
    pub fn avg_cycle_ns(&self) -> i64 {
        if self.cycle_count == 0 {
            0
        } else {
            self.sum_cycle_ns / self.cycle_count as i64
        }
    }
}

impl Default for CycleStats {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Cycle Runner ───────────────────────────────────────────────────

/// Fixed-period runner over a set of gripper adapters.
pub struct CycleRunner<D: GripperDriver> {
    adapters: Vec<GripperAdapter<D>>,
    cycle_time: Duration,
    telemetry_interval: u64,
    stats: CycleStats,
}

impl<D: GripperDriver> CycleRunner<D> {
    /// Create a runner from adapters and control config.
    pub fn new(adapters: Vec<GripperAdapter<D>>, control: &ControlConfig) -> Self {
        Self {
            adapters,
            cycle_time: Duration::from_micros(u64::from(control.cycle_time_us)),
            telemetry_interval: u64::from(control.telemetry_interval),
            stats: CycleStats::new(),
        }
    }

    /// Timing statistics so far.
    pub fn stats(&self) -> &CycleStats {
        &self.stats
    }

    /// The managed adapters.
    pub fn adapters_mut(&mut self) -> &mut [GripperAdapter<D>] {
        &mut self.adapters
    }

    /// Advance every adapter by exactly one tick.
    pub fn tick(&mut self) {
        for adapter in &mut self.adapters {
            adapter.do_control();
        }
    }

    /// Enter the fixed-period loop until `running` is cleared.
    ///
    /// `bus_input` is invoked before each tick with the cycle number
    /// and the adapters; it stands in for the bus-receive path that
    /// overwrites each adapter's latest command. Telemetry for every
    /// gripper is logged every `telemetry_interval` cycles.
    pub fn run<F>(&mut self, running: &AtomicBool, mut bus_input: F)
    where
        F: FnMut(u64, &mut [GripperAdapter<D>]),
    {
        while running.load(Ordering::SeqCst) {
            let cycle_start = Instant::now();

            bus_input(self.stats.cycle_count, &mut self.adapters);
            self.tick();

            if self.stats.cycle_count % self.telemetry_interval == 0 {
                self.log_telemetry();
            }

            let elapsed = cycle_start.elapsed();
            self.stats.record(elapsed.as_nanos() as i64);
            if elapsed > self.cycle_time {
                // Cooperative mode: count the overrun, keep going.
                self.stats.overruns += 1;
            } else {
                std::thread::sleep(self.cycle_time - elapsed);
            }
        }
    }

    fn log_telemetry(&self) {
        for adapter in &self.adapters {
            let reply = adapter.reply();
            info!(
                gripper = adapter.id(),
                busy = reply.busy,
                position = reply.position,
                torque = reply.torque,
                temperature = reply.temperature,
                error = reply.error,
                "telemetry"
            );
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────
