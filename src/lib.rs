//! Recognize boxes, connectors, and text in ASCII line-art diagrams.
//!
//! A [`Canvas`] reads a diagram like
//!
//! ```text
//! +------+      +------+
//! |Editor|----->|Window|
//! +------+      +------+
//! ```
//!
//! and produces an ordered list of [`Object`]s: traced [`Path`]s for the
//! boxes and connectors, and [`TextRun`]s for the labels. Rendering those
//! objects is left to the caller.
//!
//! # Example
//!
//! ```rust
//! use aashape::Canvas;
//!
//! let canvas = Canvas::new(b"+--+\n|Hi|\n+--+", 8).unwrap();
//! let objects = canvas.objects();
//! assert_eq!(objects.len(), 2);
//! assert!(objects[0].is_closed());
//! assert_eq!(objects[1].text(), "Hi");
//! ```
//!
//! # Glyphs
//!
//! | Glyph | Meaning |
//! |---|---|
//! | `+` `.` `'` | corner |
//! | `-` `\|` | horizontal and vertical line |
//! | `/` `\` | diagonal line |
//! | `<` `>` `^` `v` | arrow head; ends a line |
//!
//! Everything else that is not blank is text.
//!
//! # Known limitations
//!
//! Tracing is a depth-first walk with a fixed direction order, not a
//! polygon solver. Boxes sharing a wall (`+-+-+`) or touching side by side
//! (`+-++-+`) come out as one outer polygon plus open paths that repeat
//! part of it. Dense grids of crossing lines produce many overlapping
//! paths. The output is always deterministic.

mod canvas;
mod chars;
mod corners;
mod error;
mod finder;
mod grid;
mod object;
mod path;
mod text;

pub use canvas::{Canvas, CanvasOptions, DEFAULT_TAB_WIDTH};
pub use chars::{classify, CellKind, Direction, Slant};
pub use corners::reduce;
pub use error::{Error, Result};
pub use grid::Grid;
pub use object::Object;
pub use path::{Path, Point};
pub use text::{TextRun, DEFAULT_MERGE_GAP};
