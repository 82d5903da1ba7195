//! Per-cycle command arbitration.
//!
//! The bus re-transmits its last intent every cycle, so the control
//! unit must decide when a received command is actually re-issued to
//! the driver. One-shot signals (`Calibrate`, `Release`, `Open`,
//! `SetTorque`) are edge-triggered: they fire exactly once per
//! distinct non-`Waiting` value. `Goto` is level-triggered: it is a
//! continuously tracked setpoint and re-dispatches every tick to keep
//! the driver's closed-loop target fresh. `Waiting` never dispatches.

use gripper_common::bus::{CommandInfo, CommandSignal};

use crate::units::BusScale;

// ─── Action ─────────────────────────────────────────────────────────

/// A decoded actuator action, ready to invoke on the driver.
///
/// Position and torque are already converted to clamped ratios; no
/// unclamped value reaches the driver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GripperAction {
    /// Run the calibration sequence.
    Calibrate,
    /// Track a position setpoint under a torque limit.
    Goto { position: f64, torque: f64 },
    /// Remove torque.
    Release,
    /// Open to maximum position.
    Open,
    /// Set the torque limit.
    SetTorque { torque: f64 },
}

// ─── Dispatch Decision ──────────────────────────────────────────────

/// Decide whether this cycle's command is dispatched to the driver.
///
/// Dispatch iff the signal changed from the previous cycle and is not
/// `Waiting`, or the signal is `Goto`. The caller must update its
/// previous-signal latch to `current` after every evaluation, whether
/// or not a dispatch happened, so the next cycle's edge detection is
/// correct.
#[inline]
pub const fn should_dispatch(current: CommandSignal, previous: CommandSignal) -> bool {
    let is_new = (current as u8) != (previous as u8)
        && !matches!(current, CommandSignal::Waiting);
    is_new || matches!(current, CommandSignal::Goto)
}

/// Decode a bus command into a driver action.
///
/// Returns `None` for `Waiting`: the idle sentinel is an intentional
/// no-op, not a missing case. Position and torque are converted to
/// ratios here so every dispatch path clamps.
pub fn decode_action(command: &CommandInfo, scale: BusScale) -> Option<GripperAction> {
    match command.command {
        CommandSignal::Waiting => None,
        CommandSignal::Calibrate => Some(GripperAction::Calibrate),
        CommandSignal::Goto => Some(GripperAction::Goto {
            position: scale.to_ratio(command.position as i32),
            torque: scale.to_ratio(command.torque as i32),
        }),
        CommandSignal::Release => Some(GripperAction::Release),
        CommandSignal::Open => Some(GripperAction::Open),
        CommandSignal::SetTorque => Some(GripperAction::SetTorque {
            torque: scale.to_ratio(command.torque as i32),
        }),
    }
}

// ─── Tests ──────────────────────────────────────────────────────────
