//! Termination detection.
//!
//! The simulation's designed end state, not an error: the queue can never
//! form another party and no instance hosts one.

use std::sync::Arc;

use lfg_runtime::InstancePool;

use crate::roster::RoleRoster;

/// Decides whether the system has reached its stable end state.
///
/// Consulted by the scheduler only when admission is currently impossible.
pub struct TerminationDetector {
    roster: Arc<RoleRoster>,
    pool: Arc<InstancePool>,
}

impl TerminationDetector {
    pub fn new(roster: Arc<RoleRoster>, pool: Arc<InstancePool>) -> Self {
        Self { roster, pool }
    }

    /// True once no further progress is possible.
    ///
    /// The queue only shrinks (refunds only compensate a reservation made
    /// moments earlier), so insufficiency is permanent; a `true` result
    /// taken with nothing occupied is final.
    pub async fn check(&self) -> bool {
        !self.roster.counts().await.can_form() && !self.pool.any_occupied().await
    }
}
