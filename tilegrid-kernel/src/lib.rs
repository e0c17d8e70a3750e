//! Tilegrid Kernel - The row-packing layout pipeline.
//!
//! This crate contains the layout stages, in the order they run:
//! - Packing (blueprints into width-limited, group-contiguous rows)
//! - Width and height inflation of elastic rectangles
//! - Coordinate assignment
//! - Validation (size cap, pairwise overlap)
//! - Identifier indexing
//!
//! `Grid` chains the stages over a single owned layout. The stage functions
//! are public too, for callers that want to compose them directly.

pub mod coords;
pub mod index;
pub mod inflate;
pub mod pack;
pub mod sink;
pub mod validate;

mod config;
mod error;
mod grid;

pub use config::{DEFAULT_ELASTICITY_CAP, DEFAULT_VALIDATION_CAP, GridConfig};
pub use coords::RowHeight;
pub use error::LayoutError;
pub use grid::Grid;
pub use index::{Index, Slot};
pub use sink::{JsonLinesSink, MemorySink, RowSink, TracingSink};

pub use tilegrid_api::{Blueprint, Bounds, GroupId, Rectangle, Row, RowSnapshot};
