//! Instance pool — the fixed set of reusable dungeon slots.
//!
//! Claims are lowest-id-first so admission order is deterministic under
//! test. Releases wake the scheduler through a [`Notify`]; `notify_one`
//! stores a permit when nobody is parked yet, so a release landing between
//! a failed claim and the subsequent wait is never lost.

use std::time::Duration;

use tokio::sync::{Mutex, Notify};
use tracing::debug;

use lfg_core::{InstanceId, InstanceSnapshot};

use crate::instance::Instance;

/// Fixed-size pool of dungeon instances.
///
/// Instances are created once with ids 1..=N and never destroyed; only
/// their occupancy flags and statistics change.
pub struct InstancePool {
    capacity: u32,
    instances: Mutex<Vec<Instance>>,
    released: Notify,
}

impl InstancePool {
    /// Create a pool of `count` free instances with ids 1..=count.
    pub fn new(count: u32) -> Self {
        let instances = (1..=count).map(Instance::new).collect();
        Self {
            capacity: count,
            instances: Mutex::new(instances),
            released: Notify::new(),
        }
    }

    /// Number of slots in the pool.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Claim the lowest-id free instance, marking it occupied.
    ///
    /// Returns `None` when every instance hosts a party.
    pub async fn occupy_free(&self) -> Option<InstanceId> {
        let mut instances = self.instances.lock().await;
        let slot = instances.iter_mut().find(|i| !i.is_occupied())?;
        slot.occupy();
        debug!(instance = slot.id(), "instance occupied");
        Some(slot.id())
    }

    /// Free an instance and record one completed run of `elapsed`.
    pub async fn release(&self, id: InstanceId, elapsed: Duration) {
        {
            let mut instances = self.instances.lock().await;
            if let Some(slot) = instances.iter_mut().find(|i| i.id() == id) {
                slot.complete(elapsed);
                debug!(instance = id, secs = elapsed.as_secs(), "instance released");
            }
        }
        self.released.notify_one();
    }

    /// Whether any instance currently hosts a party.
    pub async fn any_occupied(&self) -> bool {
        self.instances.lock().await.iter().any(Instance::is_occupied)
    }

    /// Number of currently occupied instances.
    pub async fn occupied_count(&self) -> usize {
        self.instances
            .lock()
            .await
            .iter()
            .filter(|i| i.is_occupied())
            .count()
    }

    /// Per-instance snapshot, ordered by id.
    pub async fn snapshot(&self) -> Vec<InstanceSnapshot> {
        self.instances
            .lock()
            .await
            .iter()
            .map(Instance::snapshot)
            .collect()
    }

    /// Park until some instance is released.
    ///
    /// Completes immediately if a release already happened while nobody
    /// was waiting.
    pub async fn wait_for_release(&self) {
        self.released.notified().await;
    }
}
