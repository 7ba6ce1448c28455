//! lfg-scheduler — party admission and termination.
//!
//! The control plane of the simulator:
//! - [`RoleRoster`] — the shared ledger of unassigned players per role
//! - [`AdmissionScheduler`] — the loop that reserves a party, binds it to
//!   a free instance, and spawns its runner
//! - [`TerminationDetector`] — decides when no further progress is
//!   possible
//!
//! One scheduler task drives admission; at most pool-capacity runner tasks
//! are in flight at any time.

pub mod roster;
pub mod scheduler;
pub mod termination;

pub use roster::RoleRoster;
pub use scheduler::{AdmissionCallback, AdmissionScheduler, DEFAULT_POLL_INTERVAL};
pub use termination::TerminationDetector;
