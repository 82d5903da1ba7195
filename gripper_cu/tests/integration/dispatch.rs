//! Integration: arbitration through the adapter.
//!
//! Validates the edge/level dispatch semantics over multi-tick runs,
//! including the configurable busy gate, against a scripted driver.

use gripper_common::bus::{CommandInfo, CommandSignal};
use gripper_cu::adapter::GripperAdapter;
use gripper_cu::units::BusScale;

use super::mock::{Call, ScriptedDriver};

fn adapter(gate_on_busy: bool) -> GripperAdapter<ScriptedDriver> {
    GripperAdapter::new(
        1,
        ScriptedDriver::default(),
        BusScale::new(255),
        gate_on_busy,
    )
}

#[test]
fn identical_one_shots_fire_once_across_many_ticks() {
    for signal in [
        CommandSignal::Calibrate,
        CommandSignal::Release,
        CommandSignal::Open,
        CommandSignal::SetTorque,
    ] {
        let mut adapter = adapter(false);
        adapter.send_command(CommandInfo::new(signal, 0, 0));
        for _ in 0..20 {
            adapter.do_control();
        }
        assert_eq!(
            adapter.driver().calls.len(),
            1,
            "{signal:?} should dispatch exactly once"
        );
    }
}

#[test]
fn identical_goto_fires_every_tick() {
    let mut adapter = adapter(false);
    adapter.send_command(CommandInfo::new(CommandSignal::Goto, 128, 64));
    for _ in 0..20 {
        adapter.do_control();
    }
    assert_eq!(adapter.driver().calls.len(), 20);
}

#[test]
fn five_tick_scenario_pattern() {
    let mut adapter = adapter(false);
    let script = [
        CommandInfo::new(CommandSignal::Waiting, 0, 0),
        CommandInfo::new(CommandSignal::Goto, 128, 64),
        CommandInfo::new(CommandSignal::Goto, 128, 64),
        CommandInfo::new(CommandSignal::Release, 0, 0),
        CommandInfo::new(CommandSignal::Release, 0, 0),
    ];
    let mut dispatched_per_tick = Vec::new();
    for command in script {
        let before = adapter.driver().calls.len();
        adapter.send_command(command);
        adapter.do_control();
        let calls = &adapter.driver().calls;
        dispatched_per_tick.push(calls[before..].last().copied());
    }

    assert_eq!(dispatched_per_tick[0], None);
    assert!(matches!(dispatched_per_tick[1], Some(Call::Goto { .. })));
    assert!(matches!(dispatched_per_tick[2], Some(Call::Goto { .. })));
    assert_eq!(dispatched_per_tick[3], Some(Call::Release));
    assert_eq!(dispatched_per_tick[4], None);
}

#[test]
fn goto_payload_arrives_as_clamped_ratios() {
    let mut adapter = adapter(false);
    // Torque beyond the bus resolution must degrade to full scale.
    adapter.send_command(CommandInfo::new(CommandSignal::Goto, 255, 9999));
    adapter.do_control();
    assert_eq!(
        adapter.driver().calls,
        vec![Call::Goto {
            position: 1.0,
            torque: 1.0
        }]
    );
}

#[test]
fn unknown_bus_code_is_silently_ignored() {
    let mut adapter = adapter(false);
    adapter.send_command(CommandInfo::from_raw(200, 50, 50));
    for _ in 0..3 {
        adapter.do_control();
    }
    assert!(adapter.driver().calls.is_empty());
}

#[test]
fn busy_gate_holds_goto_refresh() {
    let mut adapter = adapter(true);
    adapter.send_command(CommandInfo::new(CommandSignal::Goto, 128, 64));
    adapter.do_control();
    assert_eq!(adapter.driver().calls.len(), 1);

    // Driver reports busy: the gate suppresses the per-tick refresh.
    adapter.driver_mut().busy = true;
    adapter.do_control();
    adapter.do_control();
    assert_eq!(adapter.driver().calls.len(), 1);

    // Gate lifts with the busy flag; Goto resumes refreshing.
    adapter.driver_mut().busy = false;
    adapter.do_control();
    assert_eq!(adapter.driver().calls.len(), 2);
}

#[test]
fn zero_offset_passes_through_unvalidated() {
    let mut adapter = adapter(false);
    adapter.set_zero(i32::MIN);
    assert_eq!(
        adapter.driver().calls,
        vec![Call::SetZero { offset: i32::MIN }]
    );
}
