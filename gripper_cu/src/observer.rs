//! Injectable tick observer.
//!
//! The adapter never logs directly; dispatch events go through this
//! trait so the output sink is a construction-time choice (structured
//! logging in the node binary, recording in tests, nothing on a bare
//! target).

use tracing::debug;

use crate::arbitration::GripperAction;

/// Receives adapter dispatch events.
///
/// All methods default to no-ops so observers implement only what
/// they need.
pub trait TickObserver {
    /// A command was dispatched to the driver this tick.
    fn dispatched(&mut self, gripper_id: u8, action: &GripperAction) {
        let _ = (gripper_id, action);
    }
}

/// Silent default observer.
#[derive(Debug, Default)]
pub struct NullObserver;

impl TickObserver for NullObserver {}

/// Observer that forwards dispatch events to `tracing`.
#[derive(Debug, Default)]
pub struct TraceObserver;

impl TickObserver for TraceObserver {
    fn dispatched(&mut self, gripper_id: u8, action: &GripperAction) {
        debug!(gripper = gripper_id, ?action, "command dispatched");
    }
}
