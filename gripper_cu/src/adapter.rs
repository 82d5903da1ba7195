//! Gripper adapter: one bus channel, one actuator, one tick.
//!
//! Holds the latest received bus command (overwrite, no queue) and the
//! previous cycle's signal (for edge detection), and orchestrates one
//! control tick: step the driver, arbitrate dispatch, update the
//! latch. Telemetry assembly is dispatch-independent.
//!
//! The adapter performs no torque/timeout safety computation and no
//! fault interpretation; those belong to the driver behind the
//! [`GripperDriver`] seam.

use gripper_common::bus::{CommandInfo, CommandSignal, ReplyInfo};
use gripper_common::driver::GripperDriver;

use crate::arbitration::{decode_action, should_dispatch, GripperAction};
use crate::observer::{NullObserver, TickObserver};
use crate::reply::assemble_reply;
use crate::units::BusScale;

/// Arbitration/translation layer for one gripper actuator.
pub struct GripperAdapter<D: GripperDriver> {
    /// Servo id, used for observer events and logs.
    id: u8,
    driver: D,
    scale: BusScale,
    /// Suppress dispatch while the driver is busy (config choice,
    /// default off — see `ControlConfig::gate_on_busy`).
    gate_on_busy: bool,
    /// Latest bus intent, overwritten by `send_command`.
    command: CommandInfo,
    /// Previous cycle's signal, updated unconditionally every tick.
    last_signal: CommandSignal,
    observer: Box<dyn TickObserver>,
}

impl<D: GripperDriver> GripperAdapter<D> {
    /// Create an adapter over a driver.
    ///
    /// The command starts as `Waiting`, so the first tick of the
    /// adapter's lifetime never dispatches.
    pub fn new(id: u8, driver: D, scale: BusScale, gate_on_busy: bool) -> Self {
        Self {
            id,
            driver,
            scale,
            gate_on_busy,
            command: CommandInfo::default(),
            last_signal: CommandSignal::Waiting,
            observer: Box::new(NullObserver),
        }
    }

    /// Replace the tick observer.
    pub fn with_observer(mut self, observer: Box<dyn TickObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Servo id of the managed gripper.
    pub fn id(&self) -> u8 {
        self.id
    }

    /// Overwrite the latest bus intent (last-write-wins, no queue).
    pub fn send_command(&mut self, command: CommandInfo) {
        self.command = command;
    }

    /// Current telemetry snapshot, rebuilt from live driver state.
    pub fn reply(&self) -> ReplyInfo {
        assemble_reply(&self.driver, self.scale)
    }

    /// Advance exactly one control tick.
    ///
    /// The driver's `operate()` runs first, unconditionally, so its
    /// internal state machine advances regardless of command activity.
    /// The bus command is then read as one whole-struct snapshot —
    /// never as independently torn field reads — and arbitrated. The
    /// previous-signal latch updates even when nothing dispatched.
    pub fn do_control(&mut self) {
        self.driver.operate();

        let command = self.command;

        let gated = self.gate_on_busy && self.driver.is_busy();
        if should_dispatch(command.command, self.last_signal) && !gated {
            if let Some(action) = decode_action(&command, self.scale) {
                self.execute(&action);
                self.observer.dispatched(self.id, &action);
            }
        }

        self.last_signal = command.command;
    }

    /// Forward a zero offset to the driver. No validation here; the
    /// driver owns correctness of the offset procedure.
    pub fn set_zero(&mut self, offset: i32) {
        self.driver.set_zero(offset);
    }

    /// Forward a calibration request to the driver.
    pub fn calibrate(&mut self) {
        self.driver.calibrate();
    }

    /// Access the underlying driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Mutable driver access, for bring-up tooling and tests.
    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    fn execute(&mut self, action: &GripperAction) {
        match *action {
            GripperAction::Calibrate => self.driver.calibrate(),
            GripperAction::Goto { position, torque } => {
                self.driver.goto_position_with_torque(position, torque)
            }
            GripperAction::Release => self.driver.remove_torque(),
            GripperAction::Open => self.driver.open(),
            GripperAction::SetTorque { torque } => self.driver.set_torque(torque),
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────
