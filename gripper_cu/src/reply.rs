//! Telemetry reply assembly.
//!
//! Every tick, independent of whether any command was dispatched, the
//! adapter reads live driver state and builds a fresh [`ReplyInfo`].
//! The driver's error code passes through verbatim: this layer never
//! suppresses, remaps, or clears a fault.

use gripper_common::bus::ReplyInfo;
use gripper_common::driver::GripperDriver;

use crate::units::BusScale;

/// Build a telemetry snapshot from live driver state.
///
/// Position and torque ratios are converted back to bus units through
/// the clamping converter, so the reply never carries an out-of-range
/// value even if a driver misreports a ratio outside `[0, 1]`.
pub fn assemble_reply<D: GripperDriver + ?Sized>(driver: &D, scale: BusScale) -> ReplyInfo {
    ReplyInfo {
        busy: driver.is_busy(),
        error: driver.error_code(),
        position: scale.to_bus_units(driver.position_ratio()),
        torque: scale.to_bus_units(driver.torque_ratio_magnitude()),
        _pad: [0; 2],
        temperature: driver.temperature(),
    }
}

// ─── Tests ──────────────────────────────────────────────────────────
