//! Shape tracing.
//!
//! This module scans the grid for line-drawing glyphs and walks every
//! connected boundary it finds, producing one [`Path`] per walk.
//!
//! Seeds are taken row by row, left to right. From each seed the walk is
//! depth-first: at a cell with several ways on, each unused continuation
//! (in [`Direction::ALL`] order) extends its own copy of the path so far.
//! Every cell stepped on is marked used, so no cell seeds or extends a
//! second walk. Boxes that share a wall therefore come out as overlapping
//! paths with a common prefix; see the crate docs for the known cases.

use crate::chars::{enters, exits, Direction};
use crate::grid::{Grid, Visited};
use crate::path::{Path, Point};

/// Find all paths in the grid, marking every traced cell as used.
pub fn find_paths(grid: &Grid, visited: &mut Visited, paths: &mut Vec<Path>) {
    for y in 0..grid.height as i32 {
        for x in 0..grid.width as i32 {
            let seed = Point::new(x, y);
            if visited.is_used(seed) || !grid.kind_at(seed).is_path_start() {
                continue;
            }

            visited.set_used(seed);
            let before = paths.len();
            trace_from(grid, visited, seed, paths);

            if paths.len() == before {
                // Isolated glyph: leave it for text extraction.
                visited.clear(seed);
            } else {
                for path in &paths[before..] {
                    log::trace!("traced {path} from seed {seed}");
                }
            }
        }
    }
}

/// Pending continuations at one cell of a walk.
struct Branch {
    points: Vec<Point>,
    /// Stored in reverse so `pop` yields exploration order.
    pending: Vec<Point>,
}

impl Branch {
    fn new(points: Vec<Point>, mut steps: Vec<Point>) -> Self {
        steps.reverse();
        Self {
            points,
            pending: steps,
        }
    }
}

/// Walk every branch reachable from `seed`.
///
/// Uses an explicit stack so long boundaries cannot exhaust the call stack.
fn trace_from(grid: &Grid, visited: &mut Visited, seed: Point, paths: &mut Vec<Path>) {
    let mut stack = Vec::new();
    advance(grid, visited, vec![seed], &mut stack, paths);

    while let Some(mut branch) = stack.pop() {
        let Some(step) = branch.pending.pop() else {
            continue;
        };
        if visited.is_used(step) {
            // Claimed by an earlier sibling.
            stack.push(branch);
            continue;
        }
        visited.set_used(step);

        let mut points = if branch.pending.is_empty() {
            branch.points
        } else {
            let points = branch.points.clone();
            stack.push(branch);
            points
        };
        points.push(step);
        advance(grid, visited, points, &mut stack, paths);
    }
}

/// Decide what happens at the last point of `points`: seal the path, or
/// queue its continuations.
fn advance(
    grid: &Grid,
    visited: &Visited,
    points: Vec<Point>,
    stack: &mut Vec<Branch>,
    paths: &mut Vec<Path>,
) {
    let Some(&cur) = points.last() else {
        return;
    };
    let steps = next_steps(grid, visited, cur, points.len() == 1);

    if steps.is_empty() {
        if points.len() > 1 {
            paths.push(Path::new(points));
        }
        return;
    }

    if closes_below_origin(&points, steps.len()) {
        paths.push(Path::new(points));
        stack.push(Branch::new(vec![cur], steps));
        return;
    }

    stack.push(Branch::new(points, steps));
}

/// A walk standing directly below its seed has come back around to the
/// start, once it has wrapped (three or more points) or reached a junction.
/// Whatever continues from here is traced as fresh walks from this cell.
fn closes_below_origin(points: &[Point], candidates: usize) -> bool {
    let (origin, cur) = (points[0], points[points.len() - 1]);
    cur.x == origin.x && cur.y == origin.y + 1 && (points.len() >= 3 || candidates > 1)
}

/// Unused neighbours of `cur` the walk can step onto, in exploration order.
fn next_steps(grid: &Grid, visited: &Visited, cur: Point, seed: bool) -> Vec<Point> {
    let from = grid.kind_at(cur);
    exits(from, seed)
        .iter()
        .filter_map(|&dir: &Direction| {
            let next = cur.offset(dir.delta());
            (!visited.is_used(next) && enters(from, dir, grid.kind_at(next))).then_some(next)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trace(input: &str) -> Vec<Path> {
        let grid = Grid::new(input, 8).unwrap();
        let mut visited = Visited::new(&grid);
        let mut paths = Vec::new();
        find_paths(&grid, &mut visited, &mut paths);
        paths
    }

    fn corners(path: &Path) -> Vec<(i32, i32)> {
        path.corners().iter().map(|p| (p.x, p.y)).collect()
    }

    #[test]
    fn test_find_horizontal_line() {
        let paths = trace("---");
        assert_eq!(paths.len(), 1);
        assert_eq!(corners(&paths[0]), vec![(0, 0), (2, 0)]);
        assert!(!paths[0].is_closed());
    }

    #[test]
    fn test_find_vertical_line() {
        let paths = trace("|\n|\n|");
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].to_string(), "Path{[(0,0) (0,1) (0,2)]}");
    }

    #[test]
    fn test_find_box() {
        let paths = trace("+--+\n|  |\n+--+");
        assert_eq!(paths.len(), 1);
        assert!(paths[0].is_closed());
        assert_eq!(corners(&paths[0]), vec![(0, 0), (3, 0), (3, 2), (0, 2)]);
    }

    #[test]
    fn test_rounded_box() {
        let paths = trace(".--.\n|  |\n'--'");
        assert_eq!(paths.len(), 1);
        assert!(paths[0].is_closed());
    }

    #[test]
    fn test_find_arrow() {
        let paths = trace("-->");
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].to_string(), "Path{[(0,0) (1,0) (2,0)]}");
    }

    #[test]
    fn test_arrow_head_ends_walk() {
        // the `v` must not carry the walk into the box below
        let paths = trace("  |\n  v\n+---+\n|   |\n+---+");
        assert_eq!(paths.len(), 2);
        assert_eq!(paths[0].to_string(), "Path{[(2,0) (2,1)]}");
        assert!(paths[1].is_closed());
    }

    #[test]
    fn test_arrow_seed_leaves_through_tail() {
        let paths = trace("<--");
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].to_string(), "Path{[(0,0) (1,0) (2,0)]}");

        let paths = trace("^\n|\n|");
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].to_string(), "Path{[(0,0) (0,1) (0,2)]}");
    }

    #[test]
    fn test_find_diagonal() {
        let paths = trace("\\\n \\");
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].to_string(), "Path{[(0,0) (1,1)]}");
    }

    #[test]
    fn test_diagonal_into_corner() {
        let paths = trace(" /\n+");
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].to_string(), "Path{[(1,0) (0,1)]}");
    }

    #[test]
    fn test_isolated_glyph_is_released() {
        let grid = Grid::new("a - b", 8).unwrap();
        let mut visited = Visited::new(&grid);
        let mut paths = Vec::new();
        find_paths(&grid, &mut visited, &mut paths);
        assert!(paths.is_empty());
        assert!(!visited.is_used(Point::new(2, 0)));
    }

    #[test]
    fn test_traced_cells_are_used() {
        let grid = Grid::new("+-+\n| |\n+-+", 8).unwrap();
        let mut visited = Visited::new(&grid);
        let mut paths = Vec::new();
        find_paths(&grid, &mut visited, &mut paths);
        for p in paths[0].points() {
            assert!(visited.is_used(*p));
        }
        assert!(!visited.is_used(Point::new(1, 1)));
    }

    #[test]
    fn test_stub_into_junction_splits() {
        let paths = trace("|\n+-+\n| |");
        let strings: Vec<String> = paths.iter().map(|p| p.to_string()).collect();
        assert_eq!(
            strings,
            vec![
                "Path{[(0,0) (0,1)]}",
                "Path{[(0,1) (1,1) (2,1) (2,2)]}",
                "Path{[(0,1) (0,2)]}",
            ]
        );
    }

    #[test]
    fn test_branches_share_prefix() {
        let paths = trace("-+-\n |");
        let strings: Vec<String> = paths.iter().map(|p| p.to_string()).collect();
        assert_eq!(
            strings,
            vec!["Path{[(0,0) (1,0) (2,0)]}", "Path{[(0,0) (1,0) (1,1)]}"]
        );
    }

    #[test]
    fn test_long_boundary_does_not_recurse() {
        let width = 5000;
        let line = "-".repeat(width);
        let paths = trace(&line);
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].len(), width);
    }
}
