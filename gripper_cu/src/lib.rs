//! # Gripper Control Unit Library
//!
//! Per-cycle arbitration and unit-translation layer between a field-bus
//! command channel and motorized gripper actuators. Sits between the
//! bus protocol layer (integer-encoded intents, overwritten every
//! cycle) and the actuator driver (ratio-based setpoints, asynchronous
//! state), deciding each tick whether the current command is re-issued
//! and converting values across the integer/ratio boundary with
//! unconditional clamping.
//!
//! ## Tick Shape
//!
//! One control cycle is one call to `GripperAdapter::do_control()`:
//!
//! 1. Step the driver's internal state machine (always).
//! 2. Snapshot the latest bus command as a whole struct.
//! 3. Arbitrate: one-shot signals dispatch on edges, `Goto` every tick.
//! 4. Update the previous-signal latch unconditionally.
//!
//! Telemetry (`GripperAdapter::reply()`) is rebuilt fresh every tick,
//! independent of dispatch decisions.

pub mod adapter;
pub mod arbitration;
pub mod config;
pub mod cycle;
pub mod observer;
pub mod reply;
pub mod sim;
pub mod units;
