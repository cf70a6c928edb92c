use std::time::Duration;

use rainbow_bricks::core::ScriptedRng;
use rainbow_bricks::engine::SimulationEngine;
use rainbow_bricks::runtime::{headless, HeadlessOptions, RuntimeConfig, SnapshotRecord};
use rainbow_bricks::types::{BrickColor, GRID_WIDTH};

fn records(out: &[u8]) -> Vec<SnapshotRecord> {
    String::from_utf8(out.to_vec())
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[test]
fn headless_writes_every_tick_exactly_once() {
    // Round-robin columns fill the grid row by row, so nothing tops out early.
    let spawns = (0..81u8).map(|i| (i % GRID_WIDTH, BrickColor::Green));
    let mut engine = SimulationEngine::new(ScriptedRng::new(spawns));
    let options = HeadlessOptions {
        ticks: 300,
        period: Duration::from_millis(1),
        selections: Vec::new(),
    };

    let mut out = Vec::new();
    assert_eq!(headless::run(&mut engine, &options, &mut out).unwrap(), 300);

    let ticks: Vec<u64> = records(&out).iter().map(|r| r.tick).collect();
    assert_eq!(ticks, (1..=300).collect::<Vec<_>>());
    assert_eq!(engine.tick_count(), 300);
}

#[test]
fn headless_records_are_parseable() {
    let mut engine = SimulationEngine::new(ScriptedRng::new([(1, BrickColor::Blue)]));
    let options = HeadlessOptions {
        ticks: 3,
        period: Duration::from_millis(2),
        selections: vec![6],
    };
    let mut out = Vec::new();
    headless::run(&mut engine, &options, &mut out).unwrap();

    let last = records(&out).pop().unwrap();
    assert_eq!(last.tick, 3);
    assert_eq!(last.status, "running");
    assert_eq!(last.rows.len(), 9);
    assert_eq!(last.active.col, 6);
    assert_eq!(last.rows[3], "......b..");
}

#[test]
fn runtime_config_reads_overrides() {
    let config = RuntimeConfig::from_lookup(|key| match key {
        "RAINBOW_TICK_MS" => Some("40".to_string()),
        "RAINBOW_SEED" => Some("9".to_string()),
        _ => None,
    });
    assert_eq!(config.tick_ms, 40);
    assert_eq!(config.seed, 9);
    assert_eq!(config.tick_period(), Duration::from_millis(40));
    assert_eq!(config.log_filter, "info");
}
