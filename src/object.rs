//! The recognized objects a canvas exposes.

use std::fmt;

use crate::path::{Path, Point};
use crate::text::TextRun;

/// A shape or a piece of text, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Object {
    /// A traced polyline or polygon.
    Shape(Path),
    /// A run of text on one row.
    Text(TextRun),
}

impl Object {
    /// The full traced path of a shape, or the `[start, end]` span of text.
    pub fn points(&self) -> &[Point] {
        match self {
            Object::Shape(path) => path.points(),
            Object::Text(run) => run.span(),
        }
    }

    /// Corners of a shape; the same as [`points`](Self::points) for text.
    pub fn corners(&self) -> &[Point] {
        match self {
            Object::Shape(path) => path.corners(),
            Object::Text(run) => run.span(),
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Object::Text(_))
    }

    /// Text content; empty for shapes.
    pub fn text(&self) -> &str {
        match self {
            Object::Shape(_) => "",
            Object::Text(run) => run.text(),
        }
    }

    /// Whether a shape closes on itself. Always false for text.
    pub fn is_closed(&self) -> bool {
        match self {
            Object::Shape(path) => path.is_closed(),
            Object::Text(_) => false,
        }
    }

    pub fn as_path(&self) -> Option<&Path> {
        match self {
            Object::Shape(path) => Some(path),
            Object::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&TextRun> {
        match self {
            Object::Shape(_) => None,
            Object::Text(run) => Some(run),
        }
    }
}

impl From<Path> for Object {
    fn from(path: Path) -> Self {
        Object::Shape(path)
    }
}

impl From<TextRun> for Object {
    fn from(run: TextRun) -> Self {
        Object::Text(run)
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Object::Shape(path) => fmt::Display::fmt(path, f),
            Object::Text(run) => fmt::Display::fmt(run, f),
        }
    }
}
