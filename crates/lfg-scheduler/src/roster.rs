//! Role roster — the shared ledger of unassigned players per role.
//!
//! The roster is the only authority on whether a party's worth of players
//! exists. Reservation is a single check-and-debit under the mutex, so no
//! caller can observe a partially debited ledger.

use tokio::sync::Mutex;
use tracing::debug;

use lfg_core::{DPS_PER_PARTY, HEALERS_PER_PARTY, RoleCounts, TANKS_PER_PARTY};

pub struct RoleRoster {
    counts: Mutex<RoleCounts>,
}

impl RoleRoster {
    pub fn new(counts: RoleCounts) -> Self {
        Self {
            counts: Mutex::new(counts),
        }
    }

    /// Reserve one party's worth of players (1 tank, 1 healer, 3 DPS).
    ///
    /// Check and debit happen as one atomic unit; on `false` nothing
    /// changed.
    pub async fn try_reserve(&self) -> bool {
        let mut counts = self.counts.lock().await;
        if !counts.can_form() {
            return false;
        }
        counts.tanks -= TANKS_PER_PARTY;
        counts.healers -= HEALERS_PER_PARTY;
        counts.dps -= DPS_PER_PARTY;
        debug!(
            tanks = counts.tanks,
            healers = counts.healers,
            dps = counts.dps,
            "party reserved"
        );
        true
    }

    /// Return one party's worth of players to the queue.
    ///
    /// Compensates a reservation that found no free instance.
    pub async fn refund(&self) {
        let mut counts = self.counts.lock().await;
        counts.tanks += TANKS_PER_PARTY;
        counts.healers += HEALERS_PER_PARTY;
        counts.dps += DPS_PER_PARTY;
        debug!(
            tanks = counts.tanks,
            healers = counts.healers,
            dps = counts.dps,
            "party reservation refunded"
        );
    }

    /// How many parties the remaining queue could still form.
    ///
    /// Reporting only — control decisions go through [`Self::try_reserve`]
    /// so the check and the debit cannot be separated.
    pub async fn max_formable(&self) -> u32 {
        self.counts.lock().await.max_parties()
    }

    /// Snapshot of the remaining queue.
    pub async fn counts(&self) -> RoleCounts {
        *self.counts.lock().await
    }
}
