//! Gripper Node Common Library
//!
//! Shared types for the field-bus gripper control node. The bus side
//! delivers integer-encoded command intents with overwrite semantics;
//! the actuator side works in normalized `[0, 1]` ratios. This crate
//! defines the types that cross those seams:
//!
//! - [`bus`] - Bus command/reply wire types
//! - [`driver`] - The `GripperDriver` actuator trait and fault flags
//! - [`config`] - TOML configuration structs and validation

pub mod bus;
pub mod config;
pub mod driver;
