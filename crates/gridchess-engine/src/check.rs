//! Global check detection and the shared attack primitives.
//!
//! Sliding pieces test for checks by casting rays along fixed direction
//! tables; single-offset attackers (pawns, knights, the king) use point
//! probes. Both kinds of primitive live here so the piece variants stay
//! down to one or two calls each instead of six copies of the traversal.

use gridchess_board::{Board, CheckSide, PieceKind, Side, Square};

use crate::pieces;

/// The four diagonal direction vectors.
pub const DIAGONAL_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// The four axis-aligned direction vectors.
pub const ORTHOGONAL_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Scans the whole board and classifies which king(s) are in check.
///
/// Every occupied cell is asked whether the piece on it attacks the enemy
/// king from its current square; an attacking Black piece puts the White
/// king in check and vice versa. The scan is O(N²) and never cached: any
/// move can change the answer.
pub fn calculate_check(board: &Board) -> CheckSide {
    let mut white_in_check = false;
    let mut black_in_check = false;

    for (sq, piece) in board.pieces() {
        if pieces::is_attacking_king(board, sq, piece) {
            match piece.side {
                Side::Black => white_in_check = true,
                Side::White => black_in_check = true,
            }
        }
    }

    CheckSide::from_flags(white_in_check, black_in_check)
}

/// Returns true if a piece of `attacker` standing on `origin` would attack
/// the enemy king along a diagonal ray.
pub fn attacks_king_diagonal(board: &Board, origin: Square, attacker: Side) -> bool {
    attacks_king_along(board, origin, &DIAGONAL_DIRS, attacker)
}

/// Returns true if a piece of `attacker` standing on `origin` would attack
/// the enemy king along a rank or file.
pub fn attacks_king_orthogonal(board: &Board, origin: Square, attacker: Side) -> bool {
    attacks_king_along(board, origin, &ORTHOGONAL_DIRS, attacker)
}

/// Ray-casts outward from `origin` along each direction. A ray ends at the
/// board edge or at the first occupied square; only an enemy king on that
/// square counts as an attack: every other piece blocks the ray.
fn attacks_king_along(board: &Board, origin: Square, dirs: &[(i8, i8)], attacker: Side) -> bool {
    for &(d_row, d_col) in dirs {
        let mut current = origin;
        while let Some(next) = current.offset(d_row, d_col, board.size()) {
            match board.piece_at(next) {
                Some(piece) => {
                    if piece.kind == PieceKind::King && piece.side != attacker {
                        return true;
                    }
                    break;
                }
                None => current = next,
            }
        }
    }
    false
}

/// Single-step point probe: returns true only if the square one
/// (`d_row`, `d_col`) step from `origin` holds the enemy king. Off-board
/// and empty targets probe false.
pub fn enemy_king_at_offset(
    board: &Board,
    origin: Square,
    d_row: i8,
    d_col: i8,
    attacker: Side,
) -> bool {
    match origin
        .offset(d_row, d_col, board.size())
        .and_then(|sq| board.piece_at(sq))
    {
        Some(piece) => piece.kind == PieceKind::King && piece.side != attacker,
        None => false,
    }
}
