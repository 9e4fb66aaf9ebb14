//! Line-oriented console front end.

use std::io::{BufRead, Write};

use anyhow::Context;

use crate::error::InputError;
use crate::game::GameSession;

/// Parses a 1-based row number into a zero-based row.
///
/// Only the number format is checked here; range checks belong to the rule
/// engine.
pub fn parse_row(text: &str) -> Result<i32, InputError> {
    let trimmed = text.trim();
    let row: i32 = trimmed
        .parse()
        .map_err(|_| InputError::InvalidRow(trimmed.to_string()))?;
    Ok(row.saturating_sub(1))
}

/// Maps the first character of `text` to a zero-based column, `A` (or `a`)
/// being 0.
pub fn parse_column(text: &str) -> Result<i32, InputError> {
    let letter = text
        .trim()
        .chars()
        .next()
        .ok_or(InputError::MissingColumn)?
        .to_ascii_uppercase();
    if letter < 'A' {
        return Err(InputError::InvalidColumn(letter));
    }
    Ok(letter as i32 - 'A' as i32)
}

/// Runs the interactive loop until `input` is exhausted.
pub fn run<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    session: &mut GameSession,
) -> anyhow::Result<()> {
    write!(output, "{}", session.board())?;

    loop {
        let side = session.current_player;
        if !session.has_legal_moves_for_current() {
            tracing::warn!(%side, "side to move has no legal moves");
            writeln!(output, "{side} has no legal moves.")?;
        }

        writeln!(output, "Current Player: {side}")?;
        prompt(output, "Enter row (1-10): ")?;
        let Some(line) = read_line(input)? else {
            break;
        };
        let row = match parse_row(&line) {
            Ok(row) => row,
            Err(err) => {
                tracing::debug!(%err, "bad row input");
                writeln!(output, "Write a number!")?;
                continue;
            }
        };

        prompt(output, "Enter column (A-J): ")?;
        let Some(line) = read_line(input)? else {
            break;
        };
        let col = match parse_column(&line) {
            Ok(col) => col,
            Err(err) => {
                tracing::debug!(%err, "bad column input");
                writeln!(output, "Invalid move! Try again.")?;
                continue;
            }
        };

        match session.play(row, col) {
            Ok(_) => write!(output, "{}", session.board())?,
            Err(_) => writeln!(output, "Invalid move! Try again.")?,
        }
    }

    output.flush().context("failed to flush console output")?;
    Ok(())
}

fn prompt<W: Write>(output: &mut W, text: &str) -> anyhow::Result<()> {
    write!(output, "{text}")?;
    output.flush().context("failed to flush console output")?;
    Ok(())
}

/// Reads one line. `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> anyhow::Result<Option<String>> {
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read from console")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Cell, Position, Side};
    use std::io::Cursor;

    fn play_script(script: &str) -> (GameSession, String) {
        let mut session = GameSession::new();
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();

        run(&mut input, &mut output, &mut session).unwrap();

        (session, String::from_utf8(output).unwrap())
    }

    #[test]
    fn parse_row_converts_to_zero_based() {
        assert_eq!(parse_row("4\n"), Ok(3));
        assert_eq!(parse_row(" 10 "), Ok(9));
        assert_eq!(parse_row("0"), Ok(-1));
        assert_eq!(parse_row("abc"), Err(InputError::InvalidRow("abc".to_string())));
        assert_eq!(parse_row(""), Err(InputError::InvalidRow(String::new())));
    }

    #[test]
    fn parse_column_is_case_insensitive_and_uses_first_char() {
        assert_eq!(parse_column("A"), Ok(0));
        assert_eq!(parse_column("f\n"), Ok(5));
        assert_eq!(parse_column("Jabber"), Ok(9));
        assert_eq!(parse_column("K"), Ok(10));
        assert_eq!(parse_column("\n"), Err(InputError::MissingColumn));
        assert_eq!(parse_column("3"), Err(InputError::InvalidColumn('3')));
    }

    #[test]
    fn legal_move_is_applied_and_turn_passes() {
        let (session, output) = play_script("4\nF\n");

        assert_eq!(session.current_player, Side::White);
        assert_eq!(session.board().get(Position::new(4, 5)), Cell::Black);
        assert!(output.contains("Current Player: Black"));
        assert!(output.contains("Current Player: White"));
        assert!(output.contains(" 4 | - - - - - B - - - - |"));
    }

    #[test]
    fn occupied_square_is_rejected_and_same_side_reprompted() {
        let (session, output) = play_script("5\ne\n");

        assert_eq!(session.current_player, Side::Black);
        assert_eq!(session.board(), GameSession::new().board());
        assert!(output.contains("Invalid move! Try again."));
        assert!(!output.contains("Current Player: White"));
    }

    #[test]
    fn malformed_row_reprompts_without_reading_column() {
        let (session, output) = play_script("four\n4\nf\n");

        assert!(output.contains("Write a number!"));
        assert_eq!(session.current_player, Side::White);
    }

    #[test]
    fn out_of_range_coordinates_are_invalid_moves() {
        let (session, output) = play_script("11\nA\n1\nZ\n");

        assert_eq!(output.matches("Invalid move! Try again.").count(), 2);
        assert_eq!(session.current_player, Side::Black);
    }

    #[test]
    fn empty_input_ends_loop_cleanly() {
        let (session, output) = play_script("");

        assert_eq!(session, GameSession::new());
        assert!(output.starts_with("    A B C D E F G H I J"));
        assert!(output.ends_with("Enter row (1-10): "));
    }
}
