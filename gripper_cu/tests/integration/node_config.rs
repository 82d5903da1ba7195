//! Integration: node configuration → running adapters.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

use gripper_common::bus::{CommandInfo, CommandSignal};
use gripper_cu::adapter::GripperAdapter;
use gripper_cu::config::{load_config, load_config_from_str};
use gripper_cu::cycle::CycleRunner;
use gripper_cu::sim::SimGripper;
use gripper_cu::units::BusScale;

const NODE_TOML: &str = r#"
[bus]
resolution = 255

[control]
cycle_time_us = 1000
gate_on_busy = false
telemetry_interval = 50

[[grippers]]
id = 1
name = "left"
zero_offset = 10

[[grippers]]
id = 2
name = "right"
zero_offset = -10
"#;

#[test]
fn config_builds_one_adapter_per_gripper() {
    let config = load_config_from_str(NODE_TOML).unwrap();
    let scale = BusScale::new(config.bus.resolution);

    let adapters: Vec<_> = config
        .grippers
        .iter()
        .map(|g| {
            let mut adapter = GripperAdapter::new(
                g.id,
                SimGripper::new(g.id, config.sim.clone()),
                scale,
                config.control.gate_on_busy,
            );
            adapter.set_zero(g.zero_offset);
            adapter
        })
        .collect();

    assert_eq!(adapters.len(), 2);
    assert_eq!(adapters[0].driver().zero_offset(), 10);
    assert_eq!(adapters[1].driver().zero_offset(), -10);
}

#[test]
fn runner_drives_all_grippers_from_the_bus_script() {
    let config = load_config_from_str(NODE_TOML).unwrap();
    let scale = BusScale::new(config.bus.resolution);
    let adapters = config
        .grippers
        .iter()
        .map(|g| {
            GripperAdapter::new(
                g.id,
                SimGripper::new(g.id, config.sim.clone()),
                scale,
                config.control.gate_on_busy,
            )
        })
        .collect();

    let mut runner = CycleRunner::new(adapters, &config.control);
    let running = AtomicBool::new(true);
    runner.run(&running, |cycle, adapters| {
        if cycle >= 120 {
            running.store(false, Ordering::SeqCst);
            return;
        }
        let command = CommandInfo::new(CommandSignal::Goto, 128, 20);
        for adapter in adapters.iter_mut() {
            adapter.send_command(command);
        }
    });

    assert!(runner.stats().cycle_count >= 120);
    for adapter in runner.adapters_mut() {
        let reply = adapter.reply();
        assert_eq!(reply.position, 128);
        assert!(!reply.busy);
    }
}

#[test]
fn config_file_round_trip() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(NODE_TOML.as_bytes()).unwrap();
    let config = load_config(file.path()).unwrap();
    assert_eq!(config.control.telemetry_interval, 50);
    assert_eq!(config.grippers[1].name, "right");
}
