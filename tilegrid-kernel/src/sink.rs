//! Diagnostic sinks - consumers of row snapshots.
//!
//! Sinks sit outside the layout algorithm. A caller feeds them whenever it
//! wants a look at the rows, typically after coordinates are assigned.

use std::io::Write;

use tilegrid_api::RowSnapshot;

use crate::error::LayoutError;

/// Receives one snapshot per row, in row order.
pub trait RowSink {
    fn accept(&mut self, row: &RowSnapshot<'_>) -> Result<(), LayoutError>;
}

/// Writes each row as one line of JSON.
pub struct JsonLinesSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> RowSink for JsonLinesSink<W> {
    fn accept(&mut self, row: &RowSnapshot<'_>) -> Result<(), LayoutError> {
        serde_json::to_writer(&mut self.writer, row)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}

/// Logs each row at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl RowSink for TracingSink {
    fn accept(&mut self, row: &RowSnapshot<'_>) -> Result<(), LayoutError> {
        tracing::debug!(
            row = row.row,
            width = row.width,
            height = row.height,
            "{}",
            serde_json::to_string(row)?
        );
        Ok(())
    }
}

/// Collects snapshots as JSON values. Useful in tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub rows: Vec<serde_json::Value>,
}

impl RowSink for MemorySink {
    fn accept(&mut self, row: &RowSnapshot<'_>) -> Result<(), LayoutError> {
        self.rows.push(serde_json::to_value(row)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilegrid_api::{Blueprint, Rectangle, Row};

    #[test]
    fn test_json_lines() {
        let row: Row = [
            Rectangle::from_blueprint(0, Blueprint::new(2, 1)),
            Rectangle::from_blueprint(1, Blueprint::new(3, 1).uuid("b")),
        ]
        .into_iter()
        .collect();

        let mut sink = JsonLinesSink::new(Vec::new());
        sink.accept(&row.snapshot(0)).unwrap();
        sink.accept(&row.snapshot(1)).unwrap();

        let out = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["row"], 0);
        assert_eq!(first["width"], 5);
        assert_eq!(first["rectangles"][1]["uuid"], "b");
    }

    #[test]
    fn test_tracing_sink_without_subscriber() {
        let row: Row = [Rectangle::from_blueprint(0, Blueprint::new(2, 2).uuid("a"))]
            .into_iter()
            .collect();
        let mut sink = TracingSink;
        assert!(sink.accept(&row.snapshot(0)).is_ok());
    }

    #[test]
    fn test_memory_sink() {
        let row: Row = [Rectangle::from_blueprint(0, Blueprint::new(1, 1))]
            .into_iter()
            .collect();
        let mut sink = MemorySink::default();
        sink.accept(&row.snapshot(7)).unwrap();
        assert_eq!(sink.rows.len(), 1);
        assert_eq!(sink.rows[0]["row"], 7);
    }
}
