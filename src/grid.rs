//! The character grid and its side index of used cells.

use crate::chars::{classify, CellKind};
use crate::error::{Error, Result};
use crate::path::Point;

/// An immutable, rectangular view of the diagram after tab expansion.
///
/// Lines shorter than the widest one are padded with spaces. Lookups
/// outside the grid return a space and classify as [`CellKind::Blank`], so
/// callers can probe neighbours without bounds checks.
#[derive(Debug, Clone)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
    cells: Vec<char>,
    kinds: Vec<CellKind>,
}

impl Grid {
    /// Build a grid from raw bytes, which must be UTF-8.
    pub fn from_bytes(input: &[u8], tab_width: usize) -> Result<Self> {
        if tab_width == 0 {
            return Err(Error::TabWidth(tab_width));
        }
        let lines = input
            .split(|&b| b == b'\n')
            .enumerate()
            .map(|(i, line)| std::str::from_utf8(line).map_err(|_| Error::Decode { line: i + 1 }))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_lines(&lines, tab_width))
    }

    /// Build a grid from text.
    pub fn new(input: &str, tab_width: usize) -> Result<Self> {
        if tab_width == 0 {
            return Err(Error::TabWidth(tab_width));
        }
        let lines: Vec<&str> = input.split('\n').collect();
        Ok(Self::from_lines(&lines, tab_width))
    }

    fn from_lines(lines: &[&str], tab_width: usize) -> Self {
        let rows: Vec<Vec<char>> = lines
            .iter()
            .map(|&line| expand_tabs(line.strip_suffix('\r').unwrap_or(line), tab_width))
            .collect();

        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let height = rows.len();

        let mut cells = Vec::with_capacity(width * height);
        for row in rows {
            let pad = width - row.len();
            cells.extend(row);
            cells.extend(std::iter::repeat(' ').take(pad));
        }
        let kinds = cells.iter().map(|&c| classify(c)).collect();

        Self {
            width,
            height,
            cells,
            kinds,
        }
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    /// Character at (x, y); a space when out of bounds.
    pub fn get(&self, x: i32, y: i32) -> char {
        self.index(x, y).map_or(' ', |i| self.cells[i])
    }

    /// Classification of the cell at (x, y); blank when out of bounds.
    pub fn kind(&self, x: i32, y: i32) -> CellKind {
        self.index(x, y).map_or(CellKind::Blank, |i| self.kinds[i])
    }

    pub fn kind_at(&self, p: Point) -> CellKind {
        self.kind(p.x, p.y)
    }

    pub fn contains(&self, p: Point) -> bool {
        self.index(p.x, p.y).is_some()
    }

    /// The characters of row `y` from column `x0` to `x1`, inclusive.
    pub fn slice(&self, y: i32, x0: i32, x1: i32) -> String {
        (x0..=x1).map(|x| self.get(x, y)).collect()
    }
}

/// Replace each tab with spaces up to the next multiple of `tab_width`.
fn expand_tabs(line: &str, tab_width: usize) -> Vec<char> {
    let mut out = Vec::with_capacity(line.len());
    for c in line.chars() {
        if c == '\t' {
            let spaces = tab_width - out.len() % tab_width;
            out.extend(std::iter::repeat(' ').take(spaces));
        } else {
            out.push(c);
        }
    }
    out
}

/// Which cells have been claimed by an object.
///
/// Kept apart from [`Grid`] so classification stays immutable while a scan
/// is running. Out-of-range points are never used.
#[derive(Debug, Clone)]
pub struct Visited {
    width: usize,
    height: usize,
    used: Vec<bool>,
}

impl Visited {
    pub fn new(grid: &Grid) -> Self {
        Self {
            width: grid.width,
            height: grid.height,
            used: vec![false; grid.width * grid.height],
        }
    }

    fn index(&self, p: Point) -> Option<usize> {
        if p.x < 0 || p.y < 0 {
            return None;
        }
        let (x, y) = (p.x as usize, p.y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    pub fn is_used(&self, p: Point) -> bool {
        self.index(p).is_some_and(|i| self.used[i])
    }

    pub fn set_used(&mut self, p: Point) {
        if let Some(i) = self.index(p) {
            self.used[i] = true;
        }
    }

    pub fn clear(&mut self, p: Point) {
        if let Some(i) = self.index(p) {
            self.used[i] = false;
        }
    }
}
