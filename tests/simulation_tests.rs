//! Integration tests over the simulation library
//!
//! The unit tests in each module cover the fast paths with zero pauses;
//! these run the wired-default timings end to end.

use std::time::Duration;

use depot::{
    Depot, EventLog, SimulationConfig, SimulationRunner, CONSUMPTION_TARGET, PRODUCTION_RUNS,
};

#[test]
fn depot_scenario_walkthrough() {
    let depot = Depot::new(EventLog::new());
    assert_eq!(depot.stock(), 0);

    depot.deposit(1);
    assert_eq!(depot.stock(), 1);

    assert!(depot.try_withdraw(1));
    assert_eq!(depot.stock(), 0);

    assert!(!depot.try_withdraw(1));
    assert_eq!(depot.stock(), 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn default_run_is_deterministic_and_bounded() {
    let runner = SimulationRunner::new(SimulationConfig::default());

    // Producer alone needs ~2s (100 x 20ms); anything beyond 30s means
    // a task is stuck.
    let report = tokio::time::timeout(Duration::from_secs(30), runner.run())
        .await
        .expect("simulation did not terminate in bounded time")
        .unwrap();

    assert_eq!(report.produced, PRODUCTION_RUNS);
    assert_eq!(report.consumed, CONSUMPTION_TARGET);
    assert_eq!(report.final_stock, PRODUCTION_RUNS - CONSUMPTION_TARGET);
    assert!(report.duration >= Duration::from_millis(1500));
}

#[tokio::test(flavor = "multi_thread")]
async fn default_run_accounting_matches_events() {
    let runner = SimulationRunner::new(SimulationConfig::default());
    let report = runner.run().await.unwrap();
    let log = &report.event_log;

    assert_eq!(log.deposit_count(), PRODUCTION_RUNS as usize);
    assert_eq!(log.withdrawal_count(), CONSUMPTION_TARGET as usize);

    // Every recorded stock snapshot respects the non-negative invariant
    // (structurally guaranteed by u64, asserted here on the audit trail).
    for event in log.events() {
        let json = serde_json::to_value(&event.kind).unwrap();
        if let Some(stock) = json.get("stock") {
            assert!(stock.as_u64().is_some());
        }
    }
}
