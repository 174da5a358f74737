//! Text extraction from the cells no shape claimed.

use std::fmt;

use crate::grid::{Grid, Visited};
use crate::path::Point;

/// Blank cells a text run may bridge before it ends.
pub const DEFAULT_MERGE_GAP: usize = 2;

/// One run of text on a single row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    /// First and last non-blank cell of the run.
    span: [Point; 2],
    text: String,
}

impl TextRun {
    pub fn new(start: Point, text: String) -> Self {
        let len = text.chars().count().max(1) as i32;
        let end = Point::new(start.x + len - 1, start.y);
        Self {
            span: [start, end],
            text,
        }
    }

    pub fn start(&self) -> Point {
        self.span[0]
    }

    pub fn end(&self) -> Point {
        self.span[1]
    }

    /// `[start, end]`.
    pub fn span(&self) -> &[Point] {
        &self.span
    }

    /// Raw characters from start to end, interior blanks included.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Every cell the run covers, left to right.
    pub fn cells(&self) -> impl Iterator<Item = Point> + '_ {
        let y = self.span[0].y;
        (self.span[0].x..=self.span[1].x).map(move |x| Point::new(x, y))
    }
}

impl fmt::Display for TextRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Text{{{} {:?}}}", self.start(), self.text)
    }
}

/// Find all text runs among the unused cells of the grid.
///
/// A run starts at any unused, non-blank cell and grows to the right. Up to
/// `merge_gap` consecutive blanks are absorbed into it; one more ends it, as
/// does a used cell or the edge of the grid. Trailing blanks are dropped.
pub fn find_text(grid: &Grid, visited: &mut Visited, merge_gap: usize, runs: &mut Vec<TextRun>) {
    for y in 0..grid.height as i32 {
        let mut x = 0;
        while x < grid.width as i32 {
            let start = Point::new(x, y);
            if visited.is_used(start) || grid.kind_at(start).is_blank() {
                x += 1;
                continue;
            }

            let end = run_end(grid, visited, start, merge_gap);
            let run = TextRun::new(start, grid.slice(y, start.x, end));
            for cell in run.cells() {
                visited.set_used(cell);
            }
            log::trace!("found {run}");
            runs.push(run);
            x = end + 1;
        }
    }
}

/// Column of the last non-blank cell of the run starting at `start`.
fn run_end(grid: &Grid, visited: &Visited, start: Point, merge_gap: usize) -> i32 {
    let mut last = start.x;
    let mut blanks = 0;
    for x in start.x + 1..grid.width as i32 {
        let p = Point::new(x, start.y);
        if visited.is_used(p) {
            break;
        }
        if grid.kind_at(p).is_blank() {
            blanks += 1;
            if blanks > merge_gap {
                break;
            }
        } else {
            blanks = 0;
            last = x;
        }
    }
    last
}
