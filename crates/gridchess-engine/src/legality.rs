//! Move-legality simulation.
//!
//! A candidate move is legal only if executing it leaves the mover's own
//! king out of check. That is decided by speculatively applying the move as
//! an explicit reversible record, re-running the check scan, and inverting
//! the record. The board compares equal to its pre-call state afterwards
//! regardless of the verdict.

use gridchess_board::{Board, Piece, Side, Square};

use crate::check;

/// The reversible record of one simulated move: everything needed to put
/// the board back exactly as it was.
struct SimMove {
    from: Square,
    to: Square,
    moved: Piece,
    /// Occupant of the destination square, if any.
    captured: Option<Piece>,
    /// En-passant victim removed from a third square, if any.
    victim: Option<(Square, Piece)>,
}

fn apply(
    board: &mut Board,
    from: Square,
    to: Square,
    victim_square: Option<Square>,
) -> Option<SimMove> {
    let moved = board.take(from)?;
    let captured = board.set(to, moved);
    let victim = victim_square.and_then(|sq| board.take(sq).map(|piece| (sq, piece)));
    Some(SimMove {
        from,
        to,
        moved,
        captured,
        victim,
    })
}

fn undo(board: &mut Board, record: SimMove) {
    if let Some((sq, piece)) = record.victim {
        board.set(sq, piece);
    }
    match record.captured {
        Some(piece) => {
            board.set(record.to, piece);
        }
        None => {
            board.take(record.to);
        }
    }
    board.set(record.from, record.moved);
}

fn simulate(
    board: &mut Board,
    from: Square,
    to: Square,
    victim_square: Option<Square>,
    side: Side,
) -> bool {
    let Some(record) = apply(board, from, to, victim_square) else {
        return false;
    };
    let check = check::calculate_check(board);
    undo(board, record);
    !check.includes(side)
}

/// Returns true if moving the piece on `from` to `to` would not leave
/// `side`'s king in check. The destination occupant, if any, is treated as
/// captured for the duration of the simulation.
///
/// Returns false when `from` is empty.
pub fn move_is_safe(board: &mut Board, from: Square, to: Square, side: Side) -> bool {
    simulate(board, from, to, None, side)
}

/// En-passant variant of [`move_is_safe`]: the captured pawn sits on
/// `victim`, beside the destination square rather than on it.
pub fn passant_is_safe(
    board: &mut Board,
    from: Square,
    to: Square,
    victim: Square,
    side: Side,
) -> bool {
    simulate(board, from, to, Some(victim), side)
}
