//! Simulated gripper driver.
//!
//! Models the actuator behaviors the control unit observes through
//! the [`GripperDriver`] seam: motion toward a target with busy
//! indication, a timed calibration sequence, torque set/removal,
//! temperature tracking applied torque, and a latched overload fault
//! after sustained over-safe torque. Used by the node binary for
//! bring-up and by integration tests.
//!
//! Fault detection lives here on purpose: the adapter layer only
//! forwards the error byte, it never computes or clears faults.

use gripper_common::config::SimConfig;
use gripper_common::driver::{FaultFlags, GripperDriver};
use tracing::debug;

const AMBIENT_C: f32 = 25.0;
/// Temperature gain [°C per unit torque ratio] at steady state.
const HEATING_GAIN_C: f32 = 40.0;
/// First-order thermal response per tick.
const THERMAL_RATE: f32 = 0.01;

/// Physics-lite simulation of one gripper servo.
pub struct SimGripper {
    config: SimConfig,
    /// Servo id (for log context).
    id: u8,
    /// Raw zero offset, as a real driver would apply to its encoder
    /// mapping. Recorded only; the simulated stroke is already
    /// normalized.
    zero_offset: i32,
    /// Current position [ratio of full stroke].
    position: f64,
    /// Motion target [ratio].
    target: f64,
    moving: bool,
    /// Commanded torque limit [ratio].
    torque_limit: f64,
    /// Measured torque magnitude [ratio].
    torque: f64,
    temperature: f32,
    /// Calibration ticks remaining (0 = not calibrating).
    calibration_left: u32,
    /// Consecutive ticks above the safe torque threshold.
    over_torque_ticks: u32,
    faults: FaultFlags,
}

impl SimGripper {
    /// Create a simulated gripper at the closed, unloaded rest state.
    pub fn new(id: u8, config: SimConfig) -> Self {
        Self {
            config,
            id,
            zero_offset: 0,
            position: 0.0,
            target: 0.0,
            moving: false,
            torque_limit: 0.0,
            torque: 0.0,
            temperature: AMBIENT_C,
            calibration_left: 0,
            over_torque_ticks: 0,
            faults: FaultFlags::empty(),
        }
    }

    /// Recorded zero offset (see `set_zero`).
    pub fn zero_offset(&self) -> i32 {
        self.zero_offset
    }

    fn step_motion(&mut self) {
        let delta = self.target - self.position;
        let step = self.config.travel_per_tick;
        if delta.abs() <= step {
            self.position = self.target;
            self.moving = false;
        } else {
            self.position += step * delta.signum();
        }
    }

    fn step_thermal_and_faults(&mut self) {
        // Measured torque follows the commanded limit while it is held.
        self.torque = self.torque_limit;

        let steady = AMBIENT_C + HEATING_GAIN_C * self.torque as f32;
        self.temperature += THERMAL_RATE * (steady - self.temperature);

        if self.torque > self.config.safe_torque_ratio {
            self.over_torque_ticks += 1;
            if self.over_torque_ticks >= self.config.overload_ticks
                && !self.faults.contains(FaultFlags::OVERLOAD)
            {
                self.faults.insert(FaultFlags::OVERLOAD);
                debug!(
                    gripper = self.id,
                    torque = self.torque,
                    "overload fault latched"
                );
            }
        } else {
            self.over_torque_ticks = 0;
        }
    }
}

impl GripperDriver for SimGripper {
    fn operate(&mut self) {
        if self.calibration_left > 0 {
            self.calibration_left -= 1;
            if self.calibration_left == 0 {
                // Calibration homes the stroke to the closed position.
                self.position = 0.0;
                self.target = 0.0;
                self.moving = false;
            }
        } else if self.moving {
            self.step_motion();
        }
        self.step_thermal_and_faults();
    }

    fn is_busy(&self) -> bool {
        self.calibration_left > 0 || self.moving
    }

    fn position_ratio(&self) -> f64 {
        self.position
    }

    fn torque_ratio_magnitude(&self) -> f64 {
        self.torque
    }

    fn temperature(&self) -> f32 {
        self.temperature
    }

    fn error_code(&self) -> u8 {
        self.faults.bits()
    }

    fn calibrate(&mut self) {
        self.calibration_left = self.config.calibration_ticks;
        self.torque_limit = 0.0;
        // Calibration resets the fault latch; this is a driver-owned
        // decision, invisible to the adapter layer.
        self.faults = FaultFlags::empty();
        self.over_torque_ticks = 0;
    }

    fn open(&mut self) {
        self.target = 1.0;
        self.moving = true;
    }

    fn remove_torque(&mut self) {
        self.torque_limit = 0.0;
        self.target = self.position;
        self.moving = false;
    }

    fn set_torque(&mut self, torque_ratio: f64) {
        self.torque_limit = torque_ratio;
    }

    fn goto_position_with_torque(&mut self, position_ratio: f64, torque_ratio: f64) {
        self.target = position_ratio;
        self.torque_limit = torque_ratio;
        self.moving = self.position != self.target;
    }

    fn set_zero(&mut self, offset: i32) {
        self.zero_offset = offset;
    }
}

// ─── Tests ──────────────────────────────────────────────────────────
