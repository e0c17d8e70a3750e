//! Layout error types.

use thiserror::Error;
use tilegrid_api::Rectangle;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("{rect} exceeds horizontal elasticity limit of {limit}")]
    ElasticityLimitExceeded { rect: Box<Rectangle>, limit: u32 },

    #[error("{first} overlaps with {second}")]
    OverlapDetected {
        first: Box<Rectangle>,
        second: Box<Rectangle>,
    },

    #[error("duplicate identifier: {0}")]
    DuplicateIdentifier(String),

    #[error(
        "row {row} needs {required} more units of width but its elastic members can absorb only {headroom}"
    )]
    InsufficientElasticHeadroom {
        row: usize,
        required: u64,
        headroom: u64,
    },

    #[error("{rect} has no coordinates")]
    Unplaced { rect: Box<Rectangle> },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
