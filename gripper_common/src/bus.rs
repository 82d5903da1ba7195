//! Bus command and reply wire types.
//!
//! The field bus writes one command intent per cycle with overwrite
//! (last-write-wins) semantics and reads back one telemetry reply per
//! cycle. Position and torque travel as integers in `[0, resolution]`;
//! the conversion to actuator ratios happens in the control unit.
//!
//! All structs are `#[repr(C)]` with explicit padding and `Copy`, so a
//! tick can snapshot the whole command in one assignment rather than
//! reading fields that may come from different bus frames.

use serde::{Deserialize, Serialize};
use static_assertions::const_assert_eq;

// ─── Command Signal ─────────────────────────────────────────────────

/// Bus command intent for one gripper.
///
/// `Waiting` is the idle sentinel: the bus keeps re-transmitting the
/// last intent, and `Waiting` means "nothing requested". All signals
/// except `Goto` are one-shot, edge-triggered actions; `Goto` is a
/// level-triggered setpoint that is re-issued every cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum CommandSignal {
    /// No action requested.
    Waiting = 0,
    /// Run the driver's calibration sequence.
    Calibrate = 1,
    /// Track a position setpoint with a torque limit.
    Goto = 2,
    /// Remove torque from the actuator.
    Release = 3,
    /// Open to the maximum position.
    Open = 4,
    /// Set the torque limit without moving.
    SetTorque = 5,
}

impl CommandSignal {
    /// Convert from raw `u8`. Returns `None` for unrecognized codes.
    #[inline]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Waiting),
            1 => Some(Self::Calibrate),
            2 => Some(Self::Goto),
            3 => Some(Self::Release),
            4 => Some(Self::Open),
            5 => Some(Self::SetTorque),
            _ => None,
        }
    }
}

impl Default for CommandSignal {
    fn default() -> Self {
        Self::Waiting
    }
}

// ─── Command Info ───────────────────────────────────────────────────

/// The latest bus intent for one gripper.
///
/// Overwritten by the bus-receive path, read once per tick by the
/// adapter as a whole-struct snapshot. No history is kept beyond the
/// previous cycle's `command` (held separately for edge detection).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct CommandInfo {
    /// Requested action.
    pub command: CommandSignal,
    /// Padding for alignment.
    pub _pad: u8,
    /// Position setpoint [bus units, 0..=resolution].
    pub position: u16,
    /// Torque setpoint [bus units, 0..=resolution].
    pub torque: u16,
}

const_assert_eq!(core::mem::size_of::<CommandInfo>(), 6);

impl CommandInfo {
    /// Build a command from typed fields.
    pub const fn new(command: CommandSignal, position: u16, torque: u16) -> Self {
        Self {
            command,
            _pad: 0,
            position,
            torque,
        }
    }

    /// Decode a raw bus frame payload.
    ///
    /// Unrecognized command codes degrade to `Waiting` (a silent
    /// no-op): on a noisy bus a corrupt code must not disturb the
    /// actuator or the edge detection of later valid commands.
    pub const fn from_raw(code: u8, position: u16, torque: u16) -> Self {
        let command = match CommandSignal::from_u8(code) {
            Some(signal) => signal,
            None => CommandSignal::Waiting,
        };
        Self::new(command, position, torque)
    }
}

// ─── Reply Info ─────────────────────────────────────────────────────

/// Telemetry snapshot for one gripper, rebuilt fresh every tick.
///
/// Never cached across ticks; the bus-send path consumes it and the
/// next tick produces a new one, so the bus always sees live actuator
/// state even while the commanded signal is `Waiting`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct ReplyInfo {
    /// Actuator busy with a motion or calibration sequence.
    pub busy: bool,
    /// Driver fault code, forwarded verbatim (see `driver::FaultFlags`).
    pub error: u8,
    /// Measured position [bus units, 0..=resolution].
    pub position: u16,
    /// Measured torque magnitude [bus units, 0..=resolution].
    pub torque: u16,
    /// Padding for alignment.
    pub _pad: [u8; 2],
    /// Actuator temperature [°C].
    pub temperature: f32,
}

const_assert_eq!(core::mem::size_of::<ReplyInfo>(), 12);

// ─── Tests ──────────────────────────────────────────────────────────
