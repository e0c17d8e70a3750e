//! Tilegrid API - Shared types for the tile layout pipeline.
//!
//! Blueprints go in, rows of placed rectangles come out. The layout stages
//! themselves live in `tilegrid-kernel`.

mod blueprint;
mod rectangle;
mod row;

pub use blueprint::*;
pub use rectangle::*;
pub use row::*;
