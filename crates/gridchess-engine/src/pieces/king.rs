//! King movement: one step in any direction, plus castling.

use gridchess_board::{Board, Piece, PieceKind, Square};

use crate::check;
use crate::legality;
use crate::path::{MarkerKind, PathReport, PathSink};
use crate::pieces::KING_OFFSETS;

pub(super) fn create_path(board: &Board, origin: Square, piece: Piece, sink: &mut dyn PathSink) {
    for &(d_row, d_col) in &KING_OFFSETS {
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

    // Castling destinations are raw geometry here (unmoved pieces, clear
    // row); the attack conditions are applied by `can_move`.
    for d_col in [-1, 1] {
        if castle_rook_square(board, origin, piece, d_col).is_some() {
            if let Some(dest) = origin.offset(0, 2 * d_col, board.size()) {
                sink.report(PathReport {
                    origin,
                    dest,
                    kind: MarkerKind::Castle,
                });
            }
        }
    }
}

/// Finds the rook this king would castle with toward `d_col`, if the
/// static conditions hold: the king is unmoved on its home row, the first
/// piece toward the board edge is an unmoved friendly rook, and the rook
/// is far enough out that the king's two-square step stays clear of it.
pub(crate) fn castle_rook_square(
    board: &Board,
    king_sq: Square,
    king: Piece,
    d_col: i8,
) -> Option<Square> {
    if king.kind != PieceKind::King || king.has_moved {
        return None;
    }
    if king_sq.row() != king.side.home_row(board.size()) {
        return None;
    }

    let mut current = king_sq;
    while let Some(next) = current.offset(0, d_col, board.size()) {
        if let Some(occupant) = board.piece_at(next) {
            let is_castling_rook = occupant.kind == PieceKind::Rook
                && occupant.side == king.side
                && !occupant.has_moved;
            let far_enough =
                (next.col() as i16 - king_sq.col() as i16).unsigned_abs() > 2;
            return (is_castling_rook && far_enough).then_some(next);
        }
        current = next;
    }
    None
}

pub(super) fn can_move(board: &mut Board, from: Square, to: Square, piece: Piece) -> bool {
    let d_row = to.row() as i16 - from.row() as i16;
    let d_col = to.col() as i16 - from.col() as i16;

    // Castling: two squares along the home row.
    if d_row == 0 && d_col.abs() == 2 {
        return can_castle(board, from, to, piece, d_col.signum() as i8);
    }

    if d_row.abs() > 1 || d_col.abs() > 1 {
        return false;
    }
    if let Some(occupant) = board.piece_at(to) {
        if occupant.side == piece.side {
            return false;
        }
    }
    legality::move_is_safe(board, from, to, piece.side)
}

/// The full castling conditions: the static rook geometry, the king not
/// currently in check, and neither the crossed square nor the destination
/// attacked. The attacked-square tests reuse the legality simulation by
/// stepping the king onto each square in turn.
fn can_castle(board: &mut Board, from: Square, to: Square, piece: Piece, d_col: i8) -> bool {
    if castle_rook_square(board, from, piece, d_col).is_none() {
        return false;
    }
    if check::calculate_check(board).includes(piece.side) {
        return false;
    }
    let Some(crossed) = from.offset(0, d_col, board.size()) else {
        return false;
    };
    legality::move_is_safe(board, from, crossed, piece.side)
        && legality::move_is_safe(board, from, to, piece.side)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::SquareCollector;
    use crate::pieces;
    use gridchess_board::Side;

    fn board_from(layout: &str) -> Board {
        Board::from_layout(layout).unwrap()
    }

    #[test]
    fn king_steps_one_square() {
        let mut board = board_from("4k3/8/8/8/8/8/8/4K3");
        let from = Square::new(7, 4);
        assert!(pieces::can_move(&mut board, None, from, Square::new(6, 4)));
        assert!(pieces::can_move(&mut board, None, from, Square::new(6, 5)));
        assert!(pieces::can_move(&mut board, None, from, Square::new(7, 3)));
        assert!(!pieces::can_move(&mut board, None, from, Square::new(5, 4)));
    }

    #[test]
    fn king_cannot_step_into_attack() {
        // Black rook sweeps row 6; stepping up walks into it.
        let mut board = board_from("4k3/8/8/8/8/8/r7/4K3");
        let from = Square::new(7, 4);
        assert!(!pieces::can_move(&mut board, None, from, Square::new(6, 4)));
        assert!(pieces::can_move(&mut board, None, from, Square::new(7, 3)));
    }

    #[test]
    fn kings_keep_their_distance() {
        let mut board = board_from("8/8/8/8/2k5/8/2K5/8");
        // Moving to (5, 2) would put the kings adjacent.
        assert!(!pieces::can_move(
            &mut board,
            None,
            Square::new(6, 2),
            Square::new(5, 2)
        ));
        assert!(pieces::can_move(
            &mut board,
            None,
            Square::new(6, 2),
            Square::new(7, 2)
        ));
    }

    #[test]
    fn kingside_castle_on_clear_row() {
        let mut board = board_from("4k3/8/8/8/8/8/8/4K2R");
        let from = Square::new(7, 4);
        assert!(pieces::can_move(&mut board, None, from, Square::new(7, 6)));
    }

    #[test]
    fn queenside_castle_on_clear_row() {
        let mut board = board_from("4k3/8/8/8/8/8/8/R3K3");
        let from = Square::new(7, 4);
        assert!(pieces::can_move(&mut board, None, from, Square::new(7, 2)));
    }

    #[test]
    fn castle_blocked_by_intervening_piece() {
        let mut board = board_from("4k3/8/8/8/8/8/8/4KB1R");
        assert!(!pieces::can_move(
            &mut board,
            None,
            Square::new(7, 4),
            Square::new(7, 6)
        ));
    }

    #[test]
    fn castle_refused_after_either_piece_moved() {
        let mut board = board_from("4k3/8/8/8/8/8/8/4K2R");
        let from = Square::new(7, 4);

        let mut moved_king = Piece::new(PieceKind::King, Side::White);
        moved_king.has_moved = true;
        board.set(from, moved_king);
        assert!(!pieces::can_move(&mut board, None, from, Square::new(7, 6)));

        let mut board = board_from("4k3/8/8/8/8/8/8/4K2R");
        let mut moved_rook = Piece::new(PieceKind::Rook, Side::White);
        moved_rook.has_moved = true;
        board.set(Square::new(7, 7), moved_rook);
        assert!(!pieces::can_move(&mut board, None, from, Square::new(7, 6)));
    }

    #[test]
    fn castle_refused_while_in_check() {
        // Black rook checks the king on the e-file.
        let mut board = board_from("4r3/8/8/8/8/8/8/4K2R");
        assert!(!pieces::can_move(
            &mut board,
            None,
            Square::new(7, 4),
            Square::new(7, 6)
        ));
    }

    #[test]
    fn castle_refused_through_an_attacked_square() {
        // Black rook controls the f-file the king would cross.
        let mut board = board_from("5r2/8/8/8/8/8/8/4K2R");
        assert!(!pieces::can_move(
            &mut board,
            None,
            Square::new(7, 4),
            Square::new(7, 6)
        ));
    }

    #[test]
    fn castle_refused_into_an_attacked_square() {
        // Black rook controls the destination g-file.
        let mut board = board_from("6r1/8/8/8/8/8/8/4K2R");
        assert!(!pieces::can_move(
            &mut board,
            None,
            Square::new(7, 4),
            Square::new(7, 6)
        ));
    }

    #[test]
    fn path_reports_castle_destinations() {
        let board = board_from("4k3/8/8/8/8/8/8/R3K2R");
        let mut sink = SquareCollector::new();
        pieces::create_path(&board, None, Square::new(7, 4), &mut sink);

        assert_eq!(sink.kind_of(Square::new(7, 6)), Some(MarkerKind::Castle));
        assert_eq!(sink.kind_of(Square::new(7, 2)), Some(MarkerKind::Castle));
    }
}
