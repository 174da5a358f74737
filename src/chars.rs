//! Character classification and the walking transition table.
//!
//! Every grid cell falls into exactly one [`CellKind`]. The tracer never
//! looks at raw characters; it only asks this module which directions a
//! cell can be left in ([`exits`]) and whether a neighbour can be entered
//! ([`enters`]).

/// A unit step on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    /// Exploration order used when a cell offers several continuations.
    pub const ALL: [Direction; 8] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    /// Column and row offset of one step in this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::UpLeft => (-1, -1),
            Direction::UpRight => (1, -1),
            Direction::DownLeft => (-1, 1),
            Direction::DownRight => (1, 1),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::UpLeft => Direction::DownRight,
            Direction::UpRight => Direction::DownLeft,
            Direction::DownLeft => Direction::UpRight,
            Direction::DownRight => Direction::UpLeft,
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// The diagonal glyph a step in this direction runs along, if any.
    pub fn slant(self) -> Option<Slant> {
        match self {
            Direction::UpRight | Direction::DownLeft => Some(Slant::Forward),
            Direction::UpLeft | Direction::DownRight => Some(Slant::Back),
            _ => None,
        }
    }
}

/// Orientation of a diagonal glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slant {
    /// `/`
    Forward,
    /// `\`
    Back,
}

/// Classification of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// `+`, `.` or `'`
    Corner,
    /// `-`
    Horizontal,
    /// `|`
    Vertical,
    /// `/` or `\`
    Diagonal(Slant),
    /// `<`, `>`, `^` or `v`, carrying the direction the head points in
    Arrow(Direction),
    /// Any other printable character
    Text,
    /// Whitespace, control characters, and everything off the grid
    Blank,
}

/// Classify a character.
pub fn classify(c: char) -> CellKind {
    match c {
        '+' | '.' | '\'' => CellKind::Corner,
        '-' => CellKind::Horizontal,
        '|' => CellKind::Vertical,
        '/' => CellKind::Diagonal(Slant::Forward),
        '\\' => CellKind::Diagonal(Slant::Back),
        '<' => CellKind::Arrow(Direction::Left),
        '>' => CellKind::Arrow(Direction::Right),
        '^' => CellKind::Arrow(Direction::Up),
        'v' => CellKind::Arrow(Direction::Down),
        c if c.is_whitespace() || c.is_control() => CellKind::Blank,
        _ => CellKind::Text,
    }
}

impl CellKind {
    pub fn is_blank(self) -> bool {
        self == CellKind::Blank
    }

    /// True for every kind a trace may start from.
    pub fn is_path_start(self) -> bool {
        !matches!(self, CellKind::Text | CellKind::Blank)
    }
}

const NONE: &[Direction] = &[];
const ORTHO_AND_DIAGONAL: &[Direction] = &Direction::ALL;
const HORIZONTAL: &[Direction] = &[Direction::Left, Direction::Right];
const VERTICAL: &[Direction] = &[Direction::Up, Direction::Down];
const FORWARD: &[Direction] = &[Direction::UpRight, Direction::DownLeft];
const BACK: &[Direction] = &[Direction::UpLeft, Direction::DownRight];
const TAIL_LEFT: &[Direction] = &[Direction::Left];
const TAIL_RIGHT: &[Direction] = &[Direction::Right];
const TAIL_UP: &[Direction] = &[Direction::Up];
const TAIL_DOWN: &[Direction] = &[Direction::Down];

/// Directions a walk standing on `kind` may leave in, in exploration order.
///
/// Arrow heads end a walk. A walk that starts on one leaves through the
/// tail, opposite to where the head points.
pub fn exits(kind: CellKind, seed: bool) -> &'static [Direction] {
    match kind {
        CellKind::Corner => ORTHO_AND_DIAGONAL,
        CellKind::Horizontal => HORIZONTAL,
        CellKind::Vertical => VERTICAL,
        CellKind::Diagonal(Slant::Forward) => FORWARD,
        CellKind::Diagonal(Slant::Back) => BACK,
        CellKind::Arrow(head) if seed => match head.opposite() {
            Direction::Left => TAIL_LEFT,
            Direction::Right => TAIL_RIGHT,
            Direction::Up => TAIL_UP,
            Direction::Down => TAIL_DOWN,
            _ => NONE,
        },
        CellKind::Arrow(_) | CellKind::Text | CellKind::Blank => NONE,
    }
}

/// Whether a step in `dir` from a `from` cell may land on a `to` cell.
pub fn enters(from: CellKind, dir: Direction, to: CellKind) -> bool {
    if dir.is_horizontal() {
        return match to {
            CellKind::Horizontal | CellKind::Corner => true,
            CellKind::Arrow(head) => head.is_horizontal(),
            _ => false,
        };
    }
    if dir.is_vertical() {
        return match to {
            CellKind::Vertical | CellKind::Corner => true,
            CellKind::Arrow(head) => head.is_vertical(),
            _ => false,
        };
    }
    let Some(slant) = dir.slant() else {
        return false;
    };
    match to {
        CellKind::Diagonal(s) => s == slant,
        CellKind::Corner => from == CellKind::Diagonal(slant),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(classify('+'), CellKind::Corner);
        assert_eq!(classify('.'), CellKind::Corner);
        assert_eq!(classify('\''), CellKind::Corner);
        assert_eq!(classify('-'), CellKind::Horizontal);
        assert_eq!(classify('|'), CellKind::Vertical);
        assert_eq!(classify('/'), CellKind::Diagonal(Slant::Forward));
        assert_eq!(classify('\\'), CellKind::Diagonal(Slant::Back));
        assert_eq!(classify('v'), CellKind::Arrow(Direction::Down));
        assert_eq!(classify('V'), CellKind::Text);
        assert_eq!(classify('a'), CellKind::Text);
        assert_eq!(classify(' '), CellKind::Blank);
        assert_eq!(classify('\u{7}'), CellKind::Blank);
    }

    #[test]
    fn test_line_exits() {
        assert_eq!(exits(CellKind::Horizontal, false), HORIZONTAL);
        assert_eq!(exits(CellKind::Vertical, true), VERTICAL);
        assert_eq!(exits(CellKind::Corner, false).len(), 8);
        assert!(exits(CellKind::Text, true).is_empty());
    }

    #[test]
    fn test_arrow_exits_only_through_tail_when_seeding() {
        let left = CellKind::Arrow(Direction::Left);
        assert_eq!(exits(left, true), &[Direction::Right]);
        assert!(exits(left, false).is_empty());

        let up = CellKind::Arrow(Direction::Up);
        assert_eq!(exits(up, true), &[Direction::Down]);

        let down = CellKind::Arrow(Direction::Down);
        assert_eq!(exits(down, true), &[Direction::Up]);
    }

    #[test]
    fn test_enters() {
        use CellKind::*;
        assert!(enters(Horizontal, Direction::Right, Corner));
        assert!(enters(Corner, Direction::Down, Vertical));
        assert!(!enters(Corner, Direction::Down, Horizontal));
        assert!(!enters(Horizontal, Direction::Right, Vertical));
        assert!(enters(Vertical, Direction::Down, Arrow(Direction::Down)));
        assert!(!enters(Vertical, Direction::Down, Arrow(Direction::Right)));
        assert!(enters(Horizontal, Direction::Left, Arrow(Direction::Left)));
    }

    #[test]
    fn test_diagonal_enters() {
        use CellKind::*;
        let fwd = Diagonal(Slant::Forward);
        let back = Diagonal(Slant::Back);
        assert!(enters(fwd, Direction::UpRight, fwd));
        assert!(!enters(fwd, Direction::UpRight, back));
        assert!(enters(fwd, Direction::DownLeft, Corner));
        // corners only meet diagonally through a diagonal glyph
        assert!(!enters(Corner, Direction::DownRight, Corner));
        assert!(enters(Corner, Direction::DownRight, back));
    }
}
