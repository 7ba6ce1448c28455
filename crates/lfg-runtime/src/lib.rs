//! lfg-runtime — dungeon instances and the party runner.
//!
//! Provides the fixed-size pool of reusable dungeon slots and the task
//! that simulates one party's run through a slot:
//!
//! ```text
//! InstancePool
//!   ├── Vec<Instance> (occupancy + per-instance statistics)
//!   └── Notify (release signal the scheduler parks on)
//! run_party
//!   └── draw clear time → sleep → release
//! ```
//!
//! The pool is the only shared mutable view of instance state; every
//! occupancy transition goes through its interior mutex.

pub mod instance;
pub mod pool;
pub mod runner;

pub use instance::Instance;
pub use pool::InstancePool;
pub use runner::{draw_clear_time, run_party};
