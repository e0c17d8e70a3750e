//! Grid - the layout pipeline runner.
//!
//! A `Grid` owns its configuration, rows and index. Each stage method
//! delegates to the matching free function and hands the grid back so
//! stages chain:
//!
//! ```ignore
//! let mut grid = Grid::create(15, 10)?;
//! grid.init(blueprints)
//!     .inflate_row_widths()?
//!     .inflate_row_heights()
//!     .assign_coordinates()
//!     .validate()?
//!     .build_index()?;
//! ```
//!
//! A failing stage leaves the effects of earlier stages in place. Build a
//! fresh grid to retry from scratch.

use tilegrid_api::{Blueprint, Rectangle, Row};

use crate::config::GridConfig;
use crate::coords;
use crate::error::LayoutError;
use crate::index::{self, Index};
use crate::inflate;
use crate::pack;
use crate::sink::RowSink;
use crate::validate;

#[derive(Debug, Clone)]
pub struct Grid {
    config: GridConfig,
    rows: Vec<Row>,
    index: Index,
}

impl Grid {
    /// Create an empty grid from a checked config.
    pub fn new(config: GridConfig) -> Result<Self, LayoutError> {
        config.check()?;
        Ok(Self {
            config,
            rows: Vec::new(),
            index: Index::default(),
        })
    }

    /// Create an empty grid with the given row width and inflation cap.
    pub fn create(max_row_width: u32, elasticity_cap: u32) -> Result<Self, LayoutError> {
        Self::new(GridConfig::new(max_row_width).with_elasticity_cap(elasticity_cap))
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Pack blueprints into rows, replacing any previous layout.
    pub fn init<I>(&mut self, blueprints: I) -> &mut Self
    where
        I: IntoIterator<Item = Blueprint>,
    {
        self.rows = pack::pack_rows(blueprints, self.config.max_row_width);
        self.index = Index::default();
        self
    }

    /// Grow elastic widths so each row fills the configured width.
    pub fn inflate_row_widths(&mut self) -> Result<&mut Self, LayoutError> {
        inflate::inflate_widths(
            &mut self.rows,
            self.config.max_row_width,
            self.config.elasticity_cap,
        )?;
        Ok(self)
    }

    /// Grow elastic heights to each row's tallest member.
    pub fn inflate_row_heights(&mut self) -> &mut Self {
        inflate::inflate_heights(&mut self.rows);
        self
    }

    pub fn assign_coordinates(&mut self) -> &mut Self {
        coords::assign_coordinates(&mut self.rows, self.config.row_height);
        self
    }

    /// Check the validation cap and pairwise overlap. Leaves the grid as is.
    pub fn validate(&mut self) -> Result<&mut Self, LayoutError> {
        validate::validate_rows(&self.rows, self.config.validation_cap)?;
        Ok(self)
    }

    pub fn build_index(&mut self) -> Result<&mut Self, LayoutError> {
        self.index = index::build_index(&self.rows)?;
        Ok(self)
    }

    /// Feed a snapshot of every row to `sink`.
    pub fn emit(&mut self, sink: &mut dyn RowSink) -> Result<&mut Self, LayoutError> {
        for (i, row) in self.rows.iter().enumerate() {
            sink.accept(&row.snapshot(i))?;
        }
        Ok(self)
    }

    /// Run pack, both inflations, coordinate assignment and validation.
    pub fn layout<I>(&mut self, blueprints: I) -> Result<&mut Self, LayoutError>
    where
        I: IntoIterator<Item = Blueprint>,
    {
        self.init(blueprints)
            .inflate_row_widths()?
            .inflate_row_heights()
            .assign_coordinates()
            .validate()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Identifier index; empty until `build_index` runs.
    pub fn index(&self) -> &Index {
        &self.index
    }

    /// Look up a rectangle by identifier through the index.
    pub fn lookup(&self, id: &str) -> Option<&Rectangle> {
        self.index.resolve(&self.rows, id)
    }

    /// All rectangles in row order.
    pub fn rectangles(&self) -> impl Iterator<Item = &Rectangle> {
        self.rows.iter().flat_map(Row::iter)
    }

    /// Consume the grid, keeping the rows.
    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{MemorySink, TracingSink};

    #[test]
    fn test_create_rejects_zero_width() {
        assert!(matches!(Grid::create(0, 10), Err(LayoutError::InvalidConfig(_))));
    }

    #[test]
    fn test_index_empty_before_build() {
        let mut grid = Grid::create(3, 10).unwrap();
        grid.init(vec![Blueprint::new(1, 1).uuid("a")]);
        assert!(grid.index().is_empty());
        assert!(grid.lookup("a").is_none());
    }

    #[test]
    fn test_init_replaces_layout() {
        let mut grid = Grid::create(10, 10).unwrap();
        grid.init(vec![Blueprint::new(6, 1).uuid("a"); 1])
            .build_index()
            .unwrap();
        assert_eq!(grid.index().len(), 1);

        grid.init(vec![Blueprint::new(2, 1); 3]);
        assert_eq!(grid.rows().len(), 1);
        assert_eq!(grid.rows()[0].len(), 3);
        assert!(grid.index().is_empty());
    }

    #[test]
    fn test_layout_chain() {
        let mut grid = Grid::create(10, 10).unwrap();
        grid.layout(vec![
            Blueprint::new(3, 1).elastic_width().elastic_height(),
            Blueprint::new(3, 2).elastic_width().elastic_height(),
        ])
        .unwrap();
        let row = &grid.rows()[0];
        assert_eq!(row.total_width(), 10);
        assert!(row.iter().all(|r| r.h() == 2));
        assert!(grid.rectangles().all(Rectangle::is_placed));
    }

    #[test]
    fn test_into_rows() {
        let mut grid = Grid::create(5, 10).unwrap();
        grid.init(vec![Blueprint::new(3, 1); 3]).assign_coordinates();
        let rows = grid.into_rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2].first().unwrap().y(), Some(2));
    }

    #[test]
    fn test_emit_to_tracing_sink() {
        let mut grid = Grid::create(4, 10).unwrap();
        grid.init(vec![Blueprint::new(2, 1); 3]).assign_coordinates();
        assert!(grid.emit(&mut TracingSink).is_ok());
    }

    #[test]
    fn test_emit() {
        let mut grid = Grid::create(4, 10).unwrap();
        let mut sink = MemorySink::default();
        grid.init(vec![Blueprint::new(3, 1); 2])
            .assign_coordinates()
            .emit(&mut sink)
            .unwrap();
        assert_eq!(sink.rows.len(), 2);
        assert_eq!(sink.rows[1]["rectangles"][0]["y"], 1);
    }
}
