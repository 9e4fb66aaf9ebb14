use crate::board::{Board, index_of};
use crate::error::MoveError;
use crate::rules;
use crate::types::{GameState, Position, Side};

/// One game: the board plus whose turn it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    board: Board,
    pub current_player: Side,
    pub flipped: Vec<Position>,
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Side::Black,
            flipped: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn is_legal(&self, row: i32, col: i32, side: Side) -> bool {
        rules::is_legal(&self.board, row, col, side)
    }

    /// Places a disc for `side` and flips every captured run.
    ///
    /// Legality is re-checked here. An illegal move leaves the board and
    /// `current_player` untouched so the caller can retry.
    pub fn apply_move(
        &mut self,
        row: i32,
        col: i32,
        side: Side,
    ) -> Result<Vec<Position>, MoveError> {
        let flips = match rules::check_move(&self.board, row, col, side) {
            Ok(flips) => flips,
            Err(err) => {
                tracing::debug!(row, col, %side, %err, "rejected move");
                return Err(err);
            }
        };

        self.board.set(Position::new(row as u8, col as u8), side.into());
        for &pos in &flips {
            self.board.set(pos, side.into());
        }

        tracing::debug!(row, col, %side, flipped = flips.len(), "applied move");

        self.flipped = flips.clone();
        self.current_player = !self.current_player;
        Ok(flips)
    }

    /// Plays for the side to move.
    pub fn play(&mut self, row: i32, col: i32) -> Result<Vec<Position>, MoveError> {
        self.apply_move(row, col, self.current_player)
    }

    pub fn has_legal_moves_for_current(&self) -> bool {
        !self.get_legal_moves().is_empty()
    }

    pub fn get_legal_moves(&self) -> Vec<Position> {
        rules::legal_moves(&self.board, self.current_player)
    }

    pub fn to_game_state(&self) -> GameState {
        GameState {
            board: self.board.to_array().to_vec(),
            current_player: self.current_player.code(),
            flipped: self.flipped.iter().map(|&pos| index_of(pos)).collect(),
        }
    }

    #[cfg(test)]
    fn set_board_for_test(&mut self, board: Board, current_player: Side) {
        self.board = board;
        self.current_player = current_player;
        self.flipped.clear();
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
