//! Reduction of a unit-step trace to its corners.

use crate::path::Point;

/// Reduce a traced point sequence to the points where its direction
/// changes, and report whether it closes on itself.
///
/// The first point is always kept. A point is a corner when the step into
/// it differs from the step out of it. The trace is closed when the step
/// from the last point back to the first is a unit step continuing the
/// final direction; in that case the last point is not a corner. Otherwise
/// the last point ends the list and the trace is open.
///
/// Sequences of fewer than three points come back unchanged and open.
///
/// A 2x2 box (`++` over `++`) is reported open: its closing step turns, so
/// every one of its four points is a corner.
pub fn reduce(points: &[Point]) -> (Vec<Point>, bool) {
    if points.len() < 3 {
        return (points.to_vec(), false);
    }

    let mut corners = vec![points[0]];
    let mut dir = points[0].delta_to(points[1]);
    for pair in points[1..].windows(2) {
        let step = pair[0].delta_to(pair[1]);
        if step != dir {
            corners.push(pair[0]);
            dir = step;
        }
    }

    let last = points[points.len() - 1];
    let closing = last.delta_to(points[0]);
    if closing == dir && is_unit(closing) {
        return (corners, true);
    }
    corners.push(last);
    (corners, false)
}

fn is_unit((dx, dy): (i32, i32)) -> bool {
    dx.abs() <= 1 && dy.abs() <= 1 && (dx, dy) != (0, 0)
}
