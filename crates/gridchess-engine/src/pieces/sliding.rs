//! Shared ray movement for bishop, rook, and queen.

use gridchess_board::{Board, Piece, Square};

use crate::legality;
use crate::path::{MarkerKind, PathReport, PathSink};

/// Walks each direction from `origin`, reporting empty squares until the
/// ray is blocked; the blocking square is reported as a capture when it
/// holds an enemy piece.
pub(super) fn create_path(
    board: &Board,
    origin: Square,
    piece: Piece,
    dirs: &[(i8, i8)],
    sink: &mut dyn PathSink,
) {
    for &(d_row, d_col) in dirs {
        let mut current = origin;
        while let Some(next) = current.offset(d_row, d_col, board.size()) {
            match board.piece_at(next) {
                None => {
                    sink.report(PathReport {
                        origin,
                        dest: next,
                        kind: MarkerKind::Reach,
                    });
                    current = next;
                }
                Some(occupant) => {
                    if occupant.side != piece.side {
                        sink.report(PathReport {
                            origin,
                            dest: next,
                            kind: MarkerKind::Capture,
                        });
                    }
                    break;
                }
            }
        }
    }
}

/// Returns true if `to` is reachable from `from` along an allowed axis:
/// the displacement must be exactly diagonal or exactly orthogonal, every
/// square strictly between must be empty, and the destination must be
/// empty or hold an enemy piece.
///
/// Exactly one axis predicate applies to any sliding move; the move's own
/// geometry selects which one is consulted.
pub(super) fn reaches(
    board: &Board,
    from: Square,
    to: Square,
    piece: Piece,
    allow_diagonal: bool,
    allow_orthogonal: bool,
) -> bool {
    let permitted = if from.is_diagonal_to(to) {
        allow_diagonal
    } else if from.is_orthogonal_to(to) {
        allow_orthogonal
    } else {
        false
    };
    if !permitted {
        return false;
    }

    let d_row = (to.row() as i16 - from.row() as i16).signum() as i8;
    let d_col = (to.col() as i16 - from.col() as i16).signum() as i8;

    let mut current = from;
    loop {
        let Some(next) = current.offset(d_row, d_col, board.size()) else {
            return false;
        };
        if next == to {
            break;
        }
        if board.piece_at(next).is_some() {
            return false;
        }
        current = next;
    }

    match board.piece_at(to) {
        Some(occupant) => occupant.side != piece.side,
        None => true,
    }
}

pub(super) fn can_move(
    board: &mut Board,
    from: Square,
    to: Square,
    piece: Piece,
    allow_diagonal: bool,
    allow_orthogonal: bool,
) -> bool {
    reaches(board, from, to, piece, allow_diagonal, allow_orthogonal)
        && legality::move_is_safe(board, from, to, piece.side)
}
