//! Knight movement: the fixed eight-offset jump pattern.

use gridchess_board::{Board, Piece, Square};

use crate::legality;
use crate::path::{MarkerKind, PathReport, PathSink};
use crate::pieces::KNIGHT_OFFSETS;

pub(super) fn create_path(board: &Board, origin: Square, piece: Piece, sink: &mut dyn PathSink) {
    for &(d_row, d_col) in &KNIGHT_OFFSETS {
        let Some(dest) = origin.offset(d_row, d_col, board.size()) else {
            continue;
        };
        match board.piece_at(dest) {
            None => sink.report(PathReport {
                origin,
                dest,
                kind: MarkerKind::Reach,
            }),
            Some(occupant) if occupant.side != piece.side => sink.report(PathReport {
                origin,
                dest,
                kind: MarkerKind::Capture,
            }),
            Some(_) => {}
        }
    }
}

pub(super) fn can_move(board: &mut Board, from: Square, to: Square, piece: Piece) -> bool {
    let matches_pattern = KNIGHT_OFFSETS
        .iter()
        .any(|&(d_row, d_col)| from.offset(d_row, d_col, board.size()) == Some(to));
    if !matches_pattern {
        return false;
    }
    if let Some(occupant) = board.piece_at(to) {
        if occupant.side == piece.side {
            return false;
        }
    }
    legality::move_is_safe(board, from, to, piece.side)
}
