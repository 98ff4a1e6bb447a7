//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Square, WIN_LINES, WinLine};
use tracing::instrument;

/// Checks if there is a winner on the board.
///
/// Lines are scanned rows first, then columns, then diagonals; the first
/// complete line determines the result.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<(Player, WinLine)> {
    WIN_LINES.iter().find_map(|line| {
        let [a, b, c] = line.positions();
        let sq = board.get(a);
        match sq {
            Square::Occupied(player) if sq == board.get(b) && sq == board.get(c) => {
                Some((player, *line))
            }
            _ => None,
        }
    })
}

/// Returns the first line held entirely by `player`.
pub fn winning_line(board: &Board, player: Player) -> Option<WinLine> {
    let mark = Square::Occupied(player);
    WIN_LINES
        .iter()
        .copied()
        .find(|line| line.positions().iter().all(|pos| board.get(*pos) == mark))
}

/// Returns whether `player` holds all three squares of any line.
pub fn is_winner(board: &Board, player: Player) -> bool {
    winning_line(board, player).is_some()
}
