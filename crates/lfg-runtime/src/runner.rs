//! Party runner — one simulated dungeon clear.
//!
//! Fire-and-forget: the scheduler spawns [`run_party`] for an instance it
//! has already claimed; the runner draws a clear time, sleeps it out on
//! the tokio clock, and releases the instance. No retries, no cancellation
//! mid-run.

use std::sync::Arc;
use std::time::Duration;

use rand::Rng;
use tracing::info;

use lfg_core::{ClearTimeRange, InstanceId};

use crate::pool::InstancePool;

/// Draw a uniform clear time from `range`, whole seconds inclusive.
///
/// Uses a run-local generator so concurrent runs never share RNG state.
pub fn draw_clear_time(range: ClearTimeRange) -> Duration {
    let mut rng = rand::thread_rng();
    Duration::from_secs(rng.gen_range(range.min_secs()..=range.max_secs()))
}

/// Run one party through instance `id`, then release it.
pub async fn run_party(pool: Arc<InstancePool>, id: InstanceId, range: ClearTimeRange) {
    let clear_time = draw_clear_time(range);
    info!(instance = id, secs = clear_time.as_secs(), "party entered instance");

    tokio::time::sleep(clear_time).await;

    pool.release(id, clear_time).await;
    info!(instance = id, secs = clear_time.as_secs(), "party cleared instance");
}
