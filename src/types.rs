use serde::Serialize;

/// One of the two players. Black moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Side {
    #[default]
    Black,
    White,
}

impl Side {
    /// Numeric code used in serialized snapshots: 1=black, 2=white.
    pub fn code(self) -> u8 {
        match self {
            Side::Black => 1,
            Side::White => 2,
        }
    }
}

impl std::ops::Not for Side {
    type Output = Self;

    fn not(self) -> Self {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Black => f.write_str("Black"),
            Side::White => f.write_str("White"),
        }
    }
}

/// Contents of a single board square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    pub fn owner(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Side::Black),
            Cell::White => Some(Side::White),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Glyph used by the console renderer.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '-',
            Cell::Black => 'B',
            Cell::White => 'W',
        }
    }
}

impl From<Side> for Cell {
    fn from(side: Side) -> Self {
        match side {
            Side::Black => Cell::Black,
            Side::White => Cell::White,
        }
    }
}

/// A board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

/// Public game state returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// Row-major cells: 0=empty, 1=black, 2=white.
    pub board: Vec<u8>,
    pub current_player: u8,
    /// Row-major indices flipped by the last applied move.
    /// Empty before the first move.
    pub flipped: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_of_each_side_is_the_other() {
        assert_eq!(!Side::Black, Side::White);
        assert_eq!(!Side::White, Side::Black);
        assert_eq!(Side::default(), Side::Black);
    }

    #[test]
    fn empty_cell_has_no_owner() {
        assert_eq!(Cell::Empty.owner(), None);
        assert_eq!(Cell::from(Side::White).owner(), Some(Side::White));
        assert_eq!(Cell::from(Side::Black).symbol(), 'B');
        assert_eq!(Cell::default().symbol(), '-');
    }

    #[test]
    fn game_state_serializes_with_expected_fields() {
        let state = GameState {
            board: vec![0, 1, 2],
            current_player: Side::White.code(),
            flipped: vec![1],
        };

        let json = serde_json::to_value(&state).unwrap();

        assert_eq!(json["board"], serde_json::json!([0, 1, 2]));
        assert_eq!(json["current_player"], 2);
        assert_eq!(json["flipped"], serde_json::json!([1]));
    }
}
