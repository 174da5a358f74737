//! Canvas construction: grid, shapes, then text.

use crate::error::Result;
use crate::finder::find_paths;
use crate::grid::{Grid, Visited};
use crate::object::Object;
use crate::text::{find_text, DEFAULT_MERGE_GAP};

/// Columns per tab stop when the caller has no preference.
pub const DEFAULT_TAB_WIDTH: usize = 8;

/// Options for recognizing a diagram.
///
/// # Example
///
/// ```rust
/// use aashape::{Canvas, CanvasOptions};
///
/// let options = CanvasOptions::new().with_tab_width(4);
/// let canvas = Canvas::with_options(b"\t+-+\n\t+-+", &options).unwrap();
/// assert_eq!(canvas.objects()[0].points()[0].x, 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanvasOptions {
    /// Tabs advance to the next multiple of this many columns. Must be at
    /// least 1.
    pub tab_width: usize,
    /// Blank cells a text run may bridge. Default is 2; the third
    /// consecutive blank ends the run. Set to 0 to split on every blank.
    pub merge_gap: usize,
}

impl Default for CanvasOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl CanvasOptions {
    pub fn new() -> Self {
        Self {
            tab_width: DEFAULT_TAB_WIDTH,
            merge_gap: DEFAULT_MERGE_GAP,
        }
    }

    pub fn with_tab_width(mut self, tab_width: usize) -> Self {
        self.tab_width = tab_width;
        self
    }

    pub fn with_merge_gap(mut self, merge_gap: usize) -> Self {
        self.merge_gap = merge_gap;
        self
    }
}

/// A recognized diagram.
///
/// All objects are found when the canvas is built and never change
/// afterwards. Shapes come first, in the order their seeds were met
/// scanning row by row, then text runs in the same scan order.
#[derive(Debug, Clone)]
pub struct Canvas {
    grid: Grid,
    objects: Vec<Object>,
}

impl Canvas {
    /// Recognize a diagram from raw UTF-8 bytes.
    pub fn new(input: &[u8], tab_width: usize) -> Result<Self> {
        Self::with_options(input, &CanvasOptions::new().with_tab_width(tab_width))
    }

    /// Recognize a diagram the caller already holds as text.
    pub fn from_text(input: &str, tab_width: usize) -> Result<Self> {
        let options = CanvasOptions::new().with_tab_width(tab_width);
        let grid = Grid::new(input, options.tab_width)?;
        Ok(Self::scan(grid, &options))
    }

    pub fn with_options(input: &[u8], options: &CanvasOptions) -> Result<Self> {
        let grid = Grid::from_bytes(input, options.tab_width)?;
        Ok(Self::scan(grid, options))
    }

    fn scan(grid: Grid, options: &CanvasOptions) -> Self {
        let mut visited = Visited::new(&grid);

        // Shapes claim their cells before text gets a look.
        let mut paths = Vec::new();
        find_paths(&grid, &mut visited, &mut paths);

        let mut runs = Vec::new();
        find_text(&grid, &mut visited, options.merge_gap, &mut runs);

        log::debug!(
            "scanned {}x{} grid: {} shapes, {} text runs",
            grid.width,
            grid.height,
            paths.len(),
            runs.len()
        );

        let objects = paths
            .into_iter()
            .map(Object::Shape)
            .chain(runs.into_iter().map(Object::Text))
            .collect();

        Self { grid, objects }
    }

    /// Every recognized object, shapes first.
    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    pub fn into_objects(self) -> Vec<Object> {
        self.objects
    }

    /// Width and height of the grid after tab expansion.
    pub fn size(&self) -> (usize, usize) {
        (self.grid.width, self.grid.height)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::path::Point;

    fn strings(canvas: &Canvas) -> Vec<String> {
        canvas.objects().iter().map(|o| o.to_string()).collect()
    }

    #[test]
    fn test_small_box() {
        let canvas = Canvas::new(b"+-+\n| |\n+-+", 8).unwrap();
        assert_eq!(canvas.objects().len(), 1);
        let obj = &canvas.objects()[0];
        assert!(obj.is_closed());
        assert_eq!(
            obj.corners(),
            &[
                Point::new(0, 0),
                Point::new(2, 0),
                Point::new(2, 2),
                Point::new(0, 2)
            ]
        );
    }

    #[test]
    fn test_shapes_before_text() {
        let canvas = Canvas::new(b"hello\n+--+\n|Hi|\n+--+", 8).unwrap();
        assert_eq!(
            strings(&canvas),
            vec![
                "Path{[(0,1) (1,1) (2,1) (3,1) (3,2) (3,3) (2,3) (1,3) (0,3) (0,2)]}",
                "Text{(0,0) \"hello\"}",
                "Text{(1,2) \"Hi\"}",
            ]
        );
    }

    #[test]
    fn test_two_independent_boxes() {
        let canvas = Canvas::new(b"+-+  +--+\n| |  |  |\n+-+  +--+", 8).unwrap();
        assert_eq!(canvas.objects().len(), 2);
        for obj in canvas.objects() {
            assert!(obj.is_closed());
            assert_eq!(obj.corners().len(), 4);
        }
    }

    #[test]
    fn test_size() {
        let canvas = Canvas::from_text("\tab\nc", 4).unwrap();
        assert_eq!(canvas.size(), (6, 2));
    }

    #[test]
    fn test_merge_gap_option() {
        let options = CanvasOptions::new().with_merge_gap(3);
        let canvas = Canvas::with_options(b"baz   bee", &options).unwrap();
        assert_eq!(strings(&canvas), vec!["Text{(0,0) \"baz   bee\"}"]);
    }

    #[test]
    fn test_errors() {
        assert_eq!(Canvas::new(b"+-+", 0).unwrap_err(), Error::TabWidth(0));
        assert_eq!(
            Canvas::new(b"+-+\n\xc3\x28", 8).unwrap_err(),
            Error::Decode { line: 2 }
        );
    }

    #[test]
    fn test_empty_input() {
        let canvas = Canvas::new(b"", 8).unwrap();
        assert!(canvas.objects().is_empty());
        assert_eq!(canvas.size(), (0, 1));
    }
}
