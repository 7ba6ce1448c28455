//! Status and summary reporting.
//!
//! Pure readers over pool and roster snapshots; no scheduling logic.
//! Output goes to stdout — it is the program's product, not diagnostics.

use std::fmt::Write;

use lfg_core::{InstanceSnapshot, RoleCounts, SimConfig};
use lfg_runtime::InstancePool;
use lfg_scheduler::RoleRoster;

pub fn print_input_values(config: &SimConfig) {
    println!("{}", format_input_values(config));
}

pub async fn print_status(pool: &InstancePool, roster: &RoleRoster) {
    println!(
        "{}",
        format_status(&pool.snapshot().await, &roster.counts().await)
    );
}

pub async fn print_summary(pool: &InstancePool, roster: &RoleRoster) {
    println!(
        "{}",
        format_summary(&pool.snapshot().await, &roster.counts().await)
    );
}

fn format_input_values(config: &SimConfig) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Input Values:");
    let _ = writeln!(out, "  Maximum concurrent instances: {}", config.max_instances);
    let _ = writeln!(out, "  Tank players in queue: {}", config.tanks);
    let _ = writeln!(out, "  Healer players in queue: {}", config.healers);
    let _ = writeln!(out, "  DPS players in queue: {}", config.dps);
    let _ = writeln!(out, "  Minimum clear time: {}s", config.min_time);
    let _ = write!(out, "  Maximum clear time: {}s", config.max_time);
    out
}

fn format_status(instances: &[InstanceSnapshot], queue: &RoleCounts) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "===== Current Instance Status =====");
    for instance in instances {
        let _ = writeln!(
            out,
            "Instance {}: {}",
            instance.id,
            if instance.occupied { "active" } else { "empty" }
        );
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Queue Status:");
    let _ = writeln!(out, "  Tanks: {}", queue.tanks);
    let _ = writeln!(out, "  Healers: {}", queue.healers);
    let _ = writeln!(out, "  DPS: {}", queue.dps);
    let _ = write!(out, "===================================");
    out
}

fn format_summary(instances: &[InstanceSnapshot], queue: &RoleCounts) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "===== Instance Summary =====");
    for instance in instances {
        let _ = writeln!(out, "Instance {}:", instance.id);
        let _ = writeln!(out, "  Parties served: {}", instance.parties_served);
        let _ = writeln!(
            out,
            "  Total time served: {} seconds",
            instance.total_time.as_secs()
        );
    }

    let total_parties: u32 = instances.iter().map(|i| i.parties_served).sum();
    let total_secs: u64 = instances.iter().map(|i| i.total_time.as_secs()).sum();
    let _ = writeln!(out);
    let _ = writeln!(out, "Overall:");
    let _ = writeln!(out, "  Total parties served: {total_parties}");
    let _ = writeln!(out, "  Total time served across all instances: {total_secs} seconds");

    let _ = writeln!(out);
    let _ = writeln!(out, "Leftover Players:");
    let _ = writeln!(out, "  Tanks: {}", queue.tanks);
    let _ = writeln!(out, "  Healers: {}", queue.healers);
    let _ = writeln!(out, "  DPS: {}", queue.dps);

    let formable = queue.max_parties();
    if formable > 0 {
        let _ = writeln!(
            out,
            "  Note: {formable} more parties could have been formed,"
        );
        let _ = writeln!(out, "        but there weren't enough instances available.");
    } else if queue.total() > 0 {
        let _ = writeln!(
            out,
            "  These players couldn't form complete parties due to role imbalance."
        );
    } else {
        let _ = writeln!(out, "  No leftover players - everyone was assigned to a party.");
    }
    let _ = write!(out, "============================");
    out
}
