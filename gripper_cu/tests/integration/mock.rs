//! Scripted driver mock shared by the integration tests.

use gripper_common::driver::GripperDriver;

/// Action invocations the adapter made on the driver, in order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Call {
    Calibrate,
    Goto { position: f64, torque: f64 },
    Release,
    Open,
    SetTorque { torque: f64 },
    SetZero { offset: i32 },
}

/// Driver mock with scriptable telemetry and a call log.
#[derive(Debug, Default)]
pub struct ScriptedDriver {
    pub calls: Vec<Call>,
    pub operate_calls: u32,
    pub busy: bool,
    pub position: f64,
    pub torque: f64,
    pub temperature: f32,
    pub error: u8,
}

impl GripperDriver for ScriptedDriver {
    fn operate(&mut self) {
        self.operate_calls += 1;
    }
    fn is_busy(&self) -> bool {
        self.busy
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
        self.error
    }
    fn calibrate(&mut self) {
        self.calls.push(Call::Calibrate);
    }
    fn open(&mut self) {
        self.calls.push(Call::Open);
    }
    fn remove_torque(&mut self) {
        self.calls.push(Call::Release);
    }
    fn set_torque(&mut self, torque_ratio: f64) {
        self.calls.push(Call::SetTorque {
            torque: torque_ratio,
        });
    }
    fn goto_position_with_torque(&mut self, position_ratio: f64, torque_ratio: f64) {
        self.calls.push(Call::Goto {
            position: position_ratio,
            torque: torque_ratio,
        });
    }
    fn set_zero(&mut self, offset: i32) {
        self.calls.push(Call::SetZero { offset });
    }
}
