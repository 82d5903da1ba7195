//! Actuator driver trait and fault flags.
//!
//! The control unit talks to the physical gripper exclusively through
//! the [`GripperDriver`] trait, enabling pluggable backends (serial
//! servo hardware, simulation, test mocks). The driver owns closed-loop
//! control, calibration correctness, and all torque/timeout fault
//! detection; the control unit only forwards measured state and fault
//! codes.

use bitflags::bitflags;

bitflags! {
    /// Driver fault byte, reported on the bus verbatim.
    ///
    /// The control unit never interprets, clears, or retries on these
    /// bits; they are defined here so driver implementations and bus
    /// consumers agree on the encoding.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct FaultFlags: u8 {
        /// Torque held above the safe threshold for too long.
        const OVERLOAD = 0b0000_0001;
        /// Actuator temperature limit exceeded.
        const OVERHEAT = 0b0000_0010;
        /// Calibration sequence failed.
        const CALIBRATION = 0b0000_0100;
        /// Communication with the servo lost.
        const COMM_LOSS = 0b0000_1000;
    }
}

/// Interface to one motorized gripper actuator.
///
/// # Lifecycle
///
/// 1. `set_zero()` - Applied once at startup from configuration
/// 2. `operate()` - Called exactly once per tick, unconditionally,
///    before any command dispatch, so the driver's internal state
///    machine advances regardless of command activity
/// 3. One-shot actions - Invoked by the control unit when arbitration
///    decides to dispatch
///
/// # Units
///
/// All setpoints and measurements cross this trait as normalized
/// ratios in `[0.0, 1.0]`. Callers must clamp before invoking;
/// implementations may assume in-range values.
pub trait GripperDriver {
    /// Advance the driver's internal state machine by one tick.
    fn operate(&mut self);

    /// True while a motion or calibration sequence is in progress.
    fn is_busy(&self) -> bool;

    /// Measured position as a ratio of full travel.
    fn position_ratio(&self) -> f64;

    /// Measured torque magnitude as a ratio of maximum torque.
    fn torque_ratio_magnitude(&self) -> f64;

    /// Actuator temperature [°C].
    fn temperature(&self) -> f32;

    /// Current fault code (see [`FaultFlags`]). Zero means no fault.
    fn error_code(&self) -> u8;

    /// Start the calibration sequence.
    fn calibrate(&mut self);

    /// Move to the maximum open position.
    fn open(&mut self);

    /// Remove torque from the actuator.
    fn remove_torque(&mut self);

    /// Set the torque limit without commanding motion.
    fn set_torque(&mut self, torque_ratio: f64);

    /// Track a position setpoint under a torque limit.
    fn goto_position_with_torque(&mut self, position_ratio: f64, torque_ratio: f64);

    /// Set the raw zero offset used by the driver's position mapping.
    fn set_zero(&mut self, offset: i32);
}
