//! Checkmate and stalemate classification.
//!
//! A side with no legal move has either been checkmated (its king is in
//! check) or stalemated (it is not). Legal-move existence is decided by
//! probing every piece of that side against every board square with the
//! full legality filter.

use gridchess_board::{Board, Side, Square};

use crate::check;
use crate::pieces;

/// Terminal game classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// Black is checkmated.
    WhiteWins,
    /// White is checkmated.
    BlackWins,
    /// The side to move has no legal move but is not in check.
    Stalemate,
}

/// Returns true if `side` has at least one fully legal move.
pub fn has_any_legal_move(board: &mut Board, en_passant: Option<Square>, side: Side) -> bool {
    let origins: Vec<Square> = board
        .pieces()
        .filter(|(_, piece)| piece.side == side)
        .map(|(sq, _)| sq)
        .collect();

    let size = board.size();
    for from in origins {
        for row in 0..size {
            for col in 0..size {
                if pieces::can_move(board, en_passant, from, Square::new(row, col)) {
                    return true;
                }
            }
        }
    }
    false
}

/// Classifies the position for the side about to move, or `None` while the
/// game goes on.
pub fn evaluate_end(
    board: &mut Board,
    en_passant: Option<Square>,
    to_move: Side,
) -> Option<GameOutcome> {
    if has_any_legal_move(board, en_passant, to_move) {
        return None;
    }
    if check::calculate_check(board).includes(to_move) {
        Some(match to_move {
            Side::White => GameOutcome::BlackWins,
            Side::Black => GameOutcome::WhiteWins,
        })
    } else {
        Some(GameOutcome::Stalemate)
    }
}
