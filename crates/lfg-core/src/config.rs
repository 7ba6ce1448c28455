//! lfg.toml configuration parsing and validation.
//!
//! The operator workflow has two layers: a config file supplies any subset
//! of the six simulation values, and the daemon prompts for whatever is
//! missing. [`RawConfig`] is the file layer — every field optional, invalid
//! entries warned about and dropped rather than rejecting the whole file.
//! [`SimConfig`] is the fully resolved result the simulation core consumes.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::warn;

use crate::types::{ClearTimeRange, RoleCounts};

/// Ceiling on `max-time`, in seconds.
pub const MAX_CLEAR_SECS: u64 = 15;

/// Errors from reading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("{field} must be greater than 0")]
    NonPositive { field: &'static str },

    #[error("min-time ({min}) must be less than max-time ({max})")]
    TimeOrder { min: u64, max: u64 },
}

/// A possibly-incomplete configuration as read from disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct RawConfig {
    pub max_instances: Option<u32>,
    pub tanks: Option<u32>,
    pub healers: Option<u32>,
    pub dps: Option<u32>,
    /// Minimum clear time in whole seconds.
    pub min_time: Option<u64>,
    /// Maximum clear time in whole seconds.
    pub max_time: Option<u64>,
}

impl RawConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let raw: RawConfig = toml::from_str(&content)?;
        Ok(raw)
    }

    /// Drop values that fail validation, warning about each.
    ///
    /// Zero counts and zero times are cleared. `min-time >= max-time`
    /// clears `max-time` only: the operator keeps the minimum they asked
    /// for and is re-asked for the maximum.
    pub fn salvage(mut self) -> Self {
        self.max_instances = keep_positive_u32("max-instances", self.max_instances);
        self.tanks = keep_positive_u32("tanks", self.tanks);
        self.healers = keep_positive_u32("healers", self.healers);
        self.dps = keep_positive_u32("dps", self.dps);
        self.min_time = keep_positive_u64("min-time", self.min_time);
        self.max_time = keep_positive_u64("max-time", self.max_time);

        if let (Some(min), Some(max)) = (self.min_time, self.max_time)
            && min >= max
        {
            warn!(min, max, "min-time must be less than max-time; ignoring max-time");
            self.max_time = None;
        }
        self
    }
}

fn keep_positive_u32(field: &'static str, value: Option<u32>) -> Option<u32> {
    match value {
        Some(0) => {
            warn!(field, "must be greater than 0; ignoring value from file");
            None
        }
        other => other,
    }
}

fn keep_positive_u64(field: &'static str, value: Option<u64>) -> Option<u64> {
    match value {
        Some(0) => {
            warn!(field, "must be greater than 0; ignoring value from file");
            None
        }
        other => other,
    }
}

/// Fully resolved simulation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SimConfig {
    pub max_instances: u32,
    pub tanks: u32,
    pub healers: u32,
    pub dps: u32,
    /// Minimum clear time in whole seconds.
    pub min_time: u64,
    /// Maximum clear time in whole seconds.
    pub max_time: u64,
}

impl SimConfig {
    /// Validate the resolved values: every count positive, times positive
    /// and strictly ordered.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("max-instances", self.max_instances),
            ("tanks", self.tanks),
            ("healers", self.healers),
            ("dps", self.dps),
        ] {
            if value == 0 {
                return Err(ConfigError::NonPositive { field });
            }
        }
        if self.min_time == 0 {
            return Err(ConfigError::NonPositive { field: "min-time" });
        }
        if self.min_time >= self.max_time {
            return Err(ConfigError::TimeOrder {
                min: self.min_time,
                max: self.max_time,
            });
        }
        Ok(())
    }

    /// Clamp `max-time` to [`MAX_CLEAR_SECS`].
    ///
    /// Applied after `validate()`; `min-time` is not re-checked against
    /// the clamped value.
    pub fn clamp_max_time(mut self) -> Self {
        if self.max_time > MAX_CLEAR_SECS {
            warn!(
                max_time = self.max_time,
                ceiling = MAX_CLEAR_SECS,
                "max-time exceeds ceiling, clamping"
            );
            self.max_time = MAX_CLEAR_SECS;
        }
        self
    }

    /// The initial role-typed player queue.
    pub fn initial_queue(&self) -> RoleCounts {
        RoleCounts::new(self.tanks, self.healers, self.dps)
    }

    /// The clear-time range party runners draw from.
    pub fn clear_range(&self) -> ClearTimeRange {
        ClearTimeRange::from_secs(self.min_time, self.max_time)
    }
}
