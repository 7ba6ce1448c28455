//! lfg-core — shared domain types, party policy, and configuration.
//!
//! Everything here is a plain value: the live mutable state (the instance
//! pool and the role roster) lives in `lfg-runtime` and `lfg-scheduler`.
//! This crate defines the vocabulary those layers share — role counts, the
//! fixed party shape, instance snapshots, clear-time ranges — plus the
//! `lfg.toml` configuration parser and its validation rules.

pub mod config;
pub mod types;

pub use config::{ConfigError, MAX_CLEAR_SECS, RawConfig, SimConfig};
pub use types::{
    ClearTimeRange, DPS_PER_PARTY, HEALERS_PER_PARTY, InstanceId, InstanceSnapshot, RoleCounts,
    TANKS_PER_PARTY,
};
