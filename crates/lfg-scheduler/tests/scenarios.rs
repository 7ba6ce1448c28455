//! End-to-end admission scenarios on a paused tokio clock.
//!
//! `start_paused` makes every drawn clear time elapse virtually, so the
//! suite is fast and the fixed scenarios are deterministic.

use std::sync::Arc;
use std::time::Duration;

use lfg_core::{ClearTimeRange, RoleCounts};
use lfg_runtime::InstancePool;
use lfg_scheduler::{AdmissionScheduler, RoleRoster};

fn setup(
    instances: u32,
    tanks: u32,
    healers: u32,
    dps: u32,
    min: u64,
    max: u64,
) -> (Arc<RoleRoster>, Arc<InstancePool>, AdmissionScheduler) {
    let roster = Arc::new(RoleRoster::new(RoleCounts::new(tanks, healers, dps)));
    let pool = Arc::new(InstancePool::new(instances));
    let scheduler = AdmissionScheduler::new(
        roster.clone(),
        pool.clone(),
        ClearTimeRange::from_secs(min, max),
    );
    (roster, pool, scheduler)
}

fn total_served(snapshot: &[lfg_core::InstanceSnapshot]) -> u32 {
    snapshot.iter().map(|s| s.parties_served).sum()
}

#[tokio::test(start_paused = true)]
async fn two_parties_fill_both_instances_and_drain_the_queue() {
    let (roster, pool, scheduler) = setup(2, 2, 2, 6, 1, 1);
    scheduler.run().await;

    let counts = roster.counts().await;
    assert_eq!(counts, RoleCounts::new(0, 0, 0));

    let snapshot = pool.snapshot().await;
    assert!(snapshot.iter().all(|s| !s.occupied));
    // Both parties were admitted before either finished, so each instance
    // served exactly one.
    assert!(snapshot.iter().all(|s| s.parties_served == 1));
    // min == max == 1: every run took exactly one second.
    assert!(snapshot.iter().all(|s| s.total_time == Duration::from_secs(1)));
}

#[tokio::test(start_paused = true)]
async fn single_party_terminates_right_after_its_run() {
    let (roster, pool, scheduler) = setup(1, 1, 1, 3, 1, 2);
    scheduler.run().await;

    assert_eq!(roster.counts().await, RoleCounts::new(0, 0, 0));

    let snapshot = pool.snapshot().await;
    assert!(!snapshot[0].occupied);
    assert_eq!(snapshot[0].parties_served, 1);
    assert!((1..=2).contains(&snapshot[0].total_time.as_secs()));
}

#[tokio::test(start_paused = true)]
async fn tank_bottleneck_leaves_an_imbalanced_queue() {
    let (roster, pool, scheduler) = setup(3, 1, 5, 5, 1, 3);
    scheduler.run().await;

    let counts = roster.counts().await;
    assert_eq!(counts, RoleCounts::new(0, 4, 2));
    assert_eq!(roster.max_formable().await, 0);
    assert_eq!(total_served(&pool.snapshot().await), 1);
}

#[tokio::test(start_paused = true)]
async fn insufficient_queue_terminates_without_admitting() {
    let (roster, pool, scheduler) = setup(2, 1, 1, 2, 1, 1);
    scheduler.run().await;

    assert_eq!(total_served(&pool.snapshot().await), 0);
    assert_eq!(roster.counts().await, RoleCounts::new(1, 1, 2));
}

#[tokio::test(start_paused = true)]
async fn conservation_holds_and_occupancy_stays_bounded() {
    // Five parties through two instances: the third reservation finds no
    // free instance, gets refunded, and waits for a release.
    let (roster, pool, scheduler) = setup(2, 5, 5, 15, 1, 4);

    let occupied_at_admission = Arc::new(tokio::sync::Mutex::new(Vec::new()));
    let scheduler = scheduler.with_admission_callback({
        let pool = pool.clone();
        let seen = occupied_at_admission.clone();
        Arc::new(move |_id| {
            let pool = pool.clone();
            let seen = seen.clone();
            Box::pin(async move {
                seen.lock().await.push(pool.occupied_count().await);
            })
        })
    });

    scheduler.run().await;

    assert_eq!(roster.counts().await, RoleCounts::new(0, 0, 0));
    assert_eq!(total_served(&pool.snapshot().await), 5);

    let seen = occupied_at_admission.lock().await;
    assert_eq!(seen.len(), 5);
    assert!(seen.iter().all(|&occupied| (1..=2).contains(&occupied)));
}

#[tokio::test(start_paused = true)]
async fn sequential_runs_record_durations_in_range() {
    // One instance, four parties: runs are strictly sequential.
    let (_roster, pool, scheduler) = setup(1, 4, 4, 12, 2, 5);
    scheduler.run().await;

    let snapshot = pool.snapshot().await;
    assert_eq!(snapshot[0].parties_served, 4);
    let total_secs = snapshot[0].total_time.as_secs();
    assert!((8..=20).contains(&total_secs));
}

#[tokio::test(start_paused = true)]
async fn snapshots_are_idempotent_after_termination() {
    let (roster, pool, scheduler) = setup(2, 2, 2, 6, 1, 1);
    scheduler.run().await;

    assert_eq!(pool.snapshot().await, pool.snapshot().await);
    assert_eq!(roster.counts().await, roster.counts().await);
    assert_eq!(roster.max_formable().await, 0);
}

#[tokio::test(start_paused = true)]
async fn external_shutdown_stops_admission_and_drains_in_flight_runs() {
    let (roster, pool, scheduler) = setup(1, 10, 10, 30, 1, 1);
    let scheduler = Arc::new(scheduler);

    let run = tokio::spawn({
        let scheduler = scheduler.clone();
        async move { scheduler.run().await }
    });

    // Let a few one-second runs go through, then pull the plug.
    tokio::time::sleep(Duration::from_secs(3)).await;
    scheduler.request_shutdown();
    run.await.unwrap();

    assert!(!pool.any_occupied().await);
    let served = total_served(&pool.snapshot().await);
    assert!(served >= 1);
    // Whatever was admitted completed; the rest of the queue is intact.
    let counts = roster.counts().await;
    assert_eq!(counts.tanks, 10 - served);
    assert_eq!(counts.healers, 10 - served);
    assert_eq!(counts.dps, 30 - 3 * served);
}
