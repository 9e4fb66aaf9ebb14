use std::fmt;

/// Why a move was rejected. The board is never touched when one of these
/// is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    OutOfBounds,
    Occupied,
    NoCapture,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OutOfBounds => write!(f, "row/col out of range"),
            MoveError::Occupied => write!(f, "square is already occupied"),
            MoveError::NoCapture => write!(f, "move does not capture any disc"),
        }
    }
}

impl std::error::Error for MoveError {}

/// Malformed console input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    InvalidRow(String),
    MissingColumn,
    InvalidColumn(char),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::InvalidRow(text) => write!(f, "invalid row: {text:?}"),
            InputError::MissingColumn => write!(f, "missing column letter"),
            InputError::InvalidColumn(c) => write!(f, "invalid column: {c:?}"),
        }
    }
}

impl std::error::Error for InputError {}
