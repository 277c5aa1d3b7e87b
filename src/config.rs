// SPDX-FileCopyrightText: 2026 The Liana Authors
// SPDX-License-Identifier: MIT

//! Router tuning constants.
//!
//! The defaults were tuned by visual inspection; they carry no deeper
//! meaning and are kept configurable rather than derived.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Added to a candidate's score for each obstacle its straight anchor
    /// line crosses.
    pub obstacle_penalty: f64,
    /// Subtracted when the exit direction flows into the entry direction
    /// (right into left, bottom into top).
    pub continuation_bonus: f64,
    /// Anchor deltas below this collapse to a single straight segment.
    pub straight_threshold: f64,
    /// Radius of the quarter-round corner at each turn.
    pub corner_radius: f64,
    /// Obstacles are grown by this margin before crossing tests.
    pub obstacle_margin: f64,
    /// Horizontal offset of the detour leg of a forced loop path.
    pub loop_clearance: f64,
    /// Resize events settle for this long before one recomputation runs.
    pub resize_debounce_ms: u64,
    /// Extra recomputation this long after mount, for late layout shifts.
    pub settle_delay_ms: u64,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            obstacle_penalty: 500.0,
            continuation_bonus: 100.0,
            straight_threshold: 30.0,
            corner_radius: 12.0,
            obstacle_margin: 8.0,
            loop_clearance: 40.0,
            resize_debounce_ms: 100,
            settle_delay_ms: 500,
        }
    }
}

impl RouterConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|source| ConfigError::Json { source })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|source| ConfigError::Json { source })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("obstacle_penalty", self.obstacle_penalty),
            ("continuation_bonus", self.continuation_bonus),
            ("straight_threshold", self.straight_threshold),
            ("corner_radius", self.corner_radius),
            ("obstacle_margin", self.obstacle_margin),
            ("loop_clearance", self.loop_clearance),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field });
            }
        }
        if self.corner_radius < 0.0 {
            return Err(ConfigError::Negative { field: "corner_radius" });
        }
        if self.straight_threshold < 0.0 {
            return Err(ConfigError::Negative { field: "straight_threshold" });
        }
        Ok(())
    }

    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Json { source: serde_json::Error },
    NotFinite { field: &'static str },
    Negative { field: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json { source } => write!(f, "config json error: {source}"),
            Self::NotFinite { field } => write!(f, "config field {field} must be finite"),
            Self::Negative { field } => write!(f, "config field {field} must not be negative"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json { source } => Some(source),
            _ => None,
        }
    }
}
