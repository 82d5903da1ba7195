//! Configuration structures for the gripper control node.
//!
//! All config types use `serde::Deserialize` for TOML loading.
//! Optional fields use `#[serde(default)]` so older config files keep
//! deserializing when new fields are added.

use serde::{Deserialize, Serialize};

// ─── Defaults ───────────────────────────────────────────────────────

/// Default bus integer resolution (one unsigned byte on the wire).
pub const BUS_RESOLUTION_DEFAULT: u16 = 255;

/// Default tick period [µs].
pub const CYCLE_TIME_US_DEFAULT: u32 = 10_000;

/// Tick period bounds [µs].
pub const CYCLE_TIME_US_MIN: u32 = 500;
pub const CYCLE_TIME_US_MAX: u32 = 1_000_000;

/// Default telemetry log interval [cycles].
pub const TELEMETRY_INTERVAL_DEFAULT: u32 = 100;

// ─── Top-Level Config ───────────────────────────────────────────────

/// Top-level node configuration, loaded from TOML at startup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NodeConfig {
    /// Bus-facing parameters.
    #[serde(default)]
    pub bus: BusConfig,
    /// Control loop parameters.
    #[serde(default)]
    pub control: ControlConfig,
    /// One entry per managed gripper.
    #[serde(default)]
    pub grippers: Vec<GripperConfig>,
    /// Simulated driver parameters (ignored by hardware backends).
    #[serde(default)]
    pub sim: SimConfig,
}

impl NodeConfig {
    /// Validate parameter bounds and gripper id uniqueness.
    pub fn validate(&self) -> Result<(), String> {
        if self.bus.resolution == 0 {
            return Err("bus.resolution must be nonzero".into());
        }
        let cycle = self.control.cycle_time_us;
        if !(CYCLE_TIME_US_MIN..=CYCLE_TIME_US_MAX).contains(&cycle) {
            return Err(format!(
                "control.cycle_time_us {} out of range [{}, {}]",
                cycle, CYCLE_TIME_US_MIN, CYCLE_TIME_US_MAX
            ));
        }
        if self.control.telemetry_interval == 0 {
            return Err("control.telemetry_interval must be nonzero".into());
        }
        if self.grippers.is_empty() {
            return Err("at least one [[grippers]] entry is required".into());
        }
        for (i, a) in self.grippers.iter().enumerate() {
            for b in &self.grippers[i + 1..] {
                if a.id == b.id {
                    return Err(format!("duplicate gripper id {}", a.id));
                }
            }
        }
        Ok(())
    }
}

// ─── Bus Config ─────────────────────────────────────────────────────

/// Bus-facing parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusConfig {
    /// Integer resolution of bus position/torque fields. Values on the
    /// wire are in `[0, resolution]`; ratio conversion divides by this.
    #[serde(default = "default_resolution")]
    pub resolution: u16,
}

fn default_resolution() -> u16 {
    BUS_RESOLUTION_DEFAULT
}

impl Default for BusConfig {
    fn default() -> Self {
        Self {
            resolution: BUS_RESOLUTION_DEFAULT,
        }
    }
}

// ─── Control Config ─────────────────────────────────────────────────

/// Control loop parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlConfig {
    /// Tick period [µs].
    #[serde(default = "default_cycle_time_us")]
    pub cycle_time_us: u32,

    /// Suppress command dispatch while the driver reports busy.
    ///
    /// The original firmware carried this gate disabled; `false`
    /// (dispatch regardless of busy state) is the shipped behavior.
    /// Enabling it drops commands that arrive mid-motion, including
    /// `Goto` refreshes. Either way the previous-signal latch updates
    /// every tick, so a gated one-shot edge is consumed, not queued.
    #[serde(default)]
    pub gate_on_busy: bool,

    /// Telemetry log interval [cycles].
    #[serde(default = "default_telemetry_interval")]
    pub telemetry_interval: u32,
}

fn default_cycle_time_us() -> u32 {
    CYCLE_TIME_US_DEFAULT
}
fn default_telemetry_interval() -> u32 {
    TELEMETRY_INTERVAL_DEFAULT
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            cycle_time_us: CYCLE_TIME_US_DEFAULT,
            gate_on_busy: false,
            telemetry_interval: TELEMETRY_INTERVAL_DEFAULT,
        }
    }
}

// ─── Per-Gripper Config ─────────────────────────────────────────────

/// One managed gripper actuator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GripperConfig {
    /// Servo id on the actuator bus.
    pub id: u8,
    /// Human-readable name for logs.
    pub name: String,
    /// Raw zero offset forwarded to the driver at startup.
    #[serde(default)]
    pub zero_offset: i32,
}

// ─── Sim Driver Config ──────────────────────────────────────────────

/// Parameters for the simulated gripper driver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Travel per tick as a ratio of full stroke.
    #[serde(default = "default_travel_per_tick")]
    pub travel_per_tick: f64,
    /// Torque ratio above which sustained load faults the driver.
    #[serde(default = "default_safe_torque_ratio")]
    pub safe_torque_ratio: f64,
    /// Ticks of sustained over-safe torque before an overload fault.
    #[serde(default = "default_overload_ticks")]
    pub overload_ticks: u32,
    /// Ticks a calibration sequence takes.
    #[serde(default = "default_calibration_ticks")]
    pub calibration_ticks: u32,
}

fn default_travel_per_tick() -> f64 {
    0.02
}
fn default_safe_torque_ratio() -> f64 {
    // RAW_SAFE_TORQUE 104 of 0..1023 on the original servo.
    0.1
}
fn default_overload_ticks() -> u32 {
    600
}
fn default_calibration_ticks() -> u32 {
    50
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            travel_per_tick: default_travel_per_tick(),
            safe_torque_ratio: default_safe_torque_ratio(),
            overload_ticks: default_overload_ticks(),
            calibration_ticks: default_calibration_ticks(),
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────
