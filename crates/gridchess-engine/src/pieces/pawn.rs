//! Pawn movement: forward advances, diagonal captures, en passant.
//!
//! Movement and capture geometry differ for pawns, so `can_move` re-derives
//! each candidate independently instead of reusing a generic
//! "path contains square" test.

use gridchess_board::{Board, Piece, PieceKind, Square};

use crate::check;
use crate::legality;
use crate::path::{MarkerKind, PathReport, PathSink};

pub(super) fn create_path(
    board: &Board,
    en_passant: Option<Square>,
    origin: Square,
    piece: Piece,
    sink: &mut dyn PathSink,
) {
    let forward = piece.side.forward();
    let size = board.size();

    // Forward advances never capture; the double step additionally needs
    // the intervening square free and the starting row.
    if let Some(one) = origin.offset(forward, 0, size) {
        if board.piece_at(one).is_none() {
            sink.report(PathReport {
                origin,
                dest: one,
                kind: MarkerKind::Reach,
            });

            if origin.row() == piece.side.pawn_start_row(size) {
                if let Some(two) = one.offset(forward, 0, size) {
                    if board.piece_at(two).is_none() {
                        sink.report(PathReport {
                            origin,
                            dest: two,
                            kind: MarkerKind::Reach,
                        });
                    }
                }
            }
        }
    }

    for d_col in [-1, 1] {
        attack_space(board, origin, piece, forward, d_col, sink);
        passant_space(board, en_passant, origin, piece, forward, d_col, sink);
    }
}

/// Diagonal-forward square, reachable only when an enemy piece stands on it.
fn attack_space(
    board: &Board,
    origin: Square,
    piece: Piece,
    forward: i8,
    d_col: i8,
    sink: &mut dyn PathSink,
) {
    let Some(dest) = origin.offset(forward, d_col, board.size()) else {
        return;
    };
    if let Some(target) = board.piece_at(dest) {
        if target.side != piece.side {
            sink.report(PathReport {
                origin,
                dest,
                kind: MarkerKind::Capture,
            });
        }
    }
}

/// Diagonal-forward square reachable because the pawn *beside* this one is
/// the registered en-passant target; the destination itself is empty.
fn passant_space(
    board: &Board,
    en_passant: Option<Square>,
    origin: Square,
    piece: Piece,
    forward: i8,
    d_col: i8,
    sink: &mut dyn PathSink,
) {
    let Some(target) = en_passant else {
        return;
    };
    let Some(beside) = origin.offset(0, d_col, board.size()) else {
        return;
    };
    if beside != target {
        return;
    }
    let Some(victim) = board.piece_at(beside) else {
        return;
    };
    if victim.side == piece.side || victim.kind != PieceKind::Pawn {
        return;
    }
    if let Some(dest) = origin.offset(forward, d_col, board.size()) {
        if board.piece_at(dest).is_none() {
            sink.report(PathReport {
                origin,
                dest,
                kind: MarkerKind::EnPassant,
            });
        }
    }
}

/// Pawns give check only through their two forward diagonals.
pub(super) fn is_attacking_king(board: &Board, origin: Square, piece: Piece) -> bool {
    let forward = piece.side.forward();
    check::enemy_king_at_offset(board, origin, forward, 1, piece.side)
        || check::enemy_king_at_offset(board, origin, forward, -1, piece.side)
}

pub(super) fn can_move(
    board: &mut Board,
    en_passant: Option<Square>,
    from: Square,
    to: Square,
    piece: Piece,
) -> bool {
    let forward = piece.side.forward();
    let size = board.size();
    let side = piece.side;

    // Diagonal candidates: plain capture or en passant.
    for d_col in [-1, 1] {
        if from.offset(forward, d_col, size) != Some(to) {
            continue;
        }
        return match board.piece_at(to) {
            Some(target) => {
                target.side != side && legality::move_is_safe(board, from, to, side)
            }
            None => match (en_passant, from.offset(0, d_col, size)) {
                (Some(target), Some(beside)) if beside == target => {
                    let is_enemy_pawn = board
                        .piece_at(beside)
                        .is_some_and(|p| p.side != side && p.kind == PieceKind::Pawn);
                    is_enemy_pawn && legality::passant_is_safe(board, from, to, beside, side)
                }
                _ => false,
            },
        };
    }

    // Straight advance: one square always, two from the starting row, both
    // requiring empty squares the whole way.
    let Some(one) = from.offset(forward, 0, size) else {
        return false;
    };
    if board.piece_at(one).is_some() {
        return false;
    }
    if to == one {
        return legality::move_is_safe(board, from, to, side);
    }
    if from.row() == side.pawn_start_row(size)
        && one.offset(forward, 0, size) == Some(to)
        && board.piece_at(to).is_none()
    {
        return legality::move_is_safe(board, from, to, side);
    }

    false
}
