//! Grid configuration.
//!
//! Only `max_row_width` is required. The two width caps are independent:
//! `elasticity_cap` bounds growth during width inflation, `validation_cap`
//! is what `validate` enforces afterwards.

use serde::{Deserialize, Serialize};

use crate::coords::RowHeight;
use crate::error::LayoutError;

/// Default growth cap for elastic-width rectangles.
pub const DEFAULT_ELASTICITY_CAP: u32 = 10;

/// Default width limit enforced by validation.
pub const DEFAULT_VALIDATION_CAP: u32 = 10;

fn default_elasticity_cap() -> u32 {
    DEFAULT_ELASTICITY_CAP
}

fn default_validation_cap() -> u32 {
    DEFAULT_VALIDATION_CAP
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Rows never pack wider than this; width inflation fills up to it.
    pub max_row_width: u32,
    #[serde(default = "default_elasticity_cap")]
    pub elasticity_cap: u32,
    #[serde(default = "default_validation_cap")]
    pub validation_cap: u32,
    #[serde(default)]
    pub row_height: RowHeight,
}

impl GridConfig {
    pub fn new(max_row_width: u32) -> Self {
        Self {
            max_row_width,
            elasticity_cap: DEFAULT_ELASTICITY_CAP,
            validation_cap: DEFAULT_VALIDATION_CAP,
            row_height: RowHeight::default(),
        }
    }

    pub fn with_elasticity_cap(mut self, cap: u32) -> Self {
        self.elasticity_cap = cap;
        self
    }

    pub fn with_validation_cap(mut self, cap: u32) -> Self {
        self.validation_cap = cap;
        self
    }

    pub fn with_row_height(mut self, rule: RowHeight) -> Self {
        self.row_height = rule;
        self
    }

    /// Parse a JSON config and check it.
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        let config: Self = serde_json::from_str(json)?;
        config.check()?;
        Ok(config)
    }

    /// Reject zero-sized limits.
    pub fn check(&self) -> Result<(), LayoutError> {
        if self.max_row_width == 0 {
            return Err(LayoutError::InvalidConfig(
                "max_row_width must be positive".to_string(),
            ));
        }
        if self.elasticity_cap == 0 {
            return Err(LayoutError::InvalidConfig(
                "elasticity_cap must be positive".to_string(),
            ));
        }
        if self.validation_cap == 0 {
            return Err(LayoutError::InvalidConfig(
                "validation_cap must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
