//! The game session: board, turn owner, en-passant target, promotion.
//!
//! `GameSession` is the explicit context object every rules operation hangs
//! off: there is no ambient global state. It validates and executes moves,
//! keeps the single en-passant pointer alive for exactly one turn, and
//! gates play while a promotion is unresolved.

use thiserror::Error;

use gridchess_board::{Board, CheckSide, Piece, PieceKind, Side, Square};

use crate::check::calculate_check;
use crate::end::{self, GameOutcome};
use crate::path::PathSink;
use crate::pieces;

/// Errors for rejected session operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoveError {
    #[error("no piece on {0}")]
    NoPiece(Square),

    #[error("it is not {0}'s turn")]
    NotYourTurn(Side),

    #[error("illegal move from {from} to {to}")]
    IllegalMove { from: Square, to: Square },

    #[error("the promotion on {0} must be resolved first")]
    PromotionPending(Square),

    #[error("no promotion is pending")]
    NoPromotionPending,

    #[error("cannot promote to {0}")]
    InvalidPromotion(PieceKind),
}

/// What a successfully executed move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The piece removed from play, whether on the destination square or,
    /// for en passant, beside it.
    pub captured: Option<Piece>,
    /// Check classification of the position after the move.
    pub check: CheckSide,
    /// Square awaiting a promotion choice, if the move triggered one.
    pub promotion: Option<Square>,
    /// True if the move was a castle (the rook moved too).
    pub castled: bool,
}

/// One game's worth of state: the board plus everything the rules read and
/// write as a side effect of moving.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    turn: Side,
    en_passant: Option<Square>,
    pending_promotion: Option<Square>,
    captured: Vec<Piece>,
}

impl GameSession {
    /// Starts a session on the standard 8×8 opening position, White to move.
    pub fn new() -> Self {
        Self::with_board(Board::standard(), Side::White)
    }

    /// Starts a session on an arbitrary position.
    pub fn with_board(board: Board, turn: Side) -> Self {
        GameSession {
            board,
            turn,
            en_passant: None,
            pending_promotion: None,
            captured: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side whose turn it is.
    pub fn turn(&self) -> Side {
        self.turn
    }

    /// The square of the pawn currently capturable en passant, if any.
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant
    }

    /// The square awaiting a promotion choice, if any.
    pub fn pending_promotion(&self) -> Option<Square> {
        self.pending_promotion
    }

    /// Pieces captured so far, in capture order.
    pub fn captured_pieces(&self) -> &[Piece] {
        &self.captured
    }

    /// Classifies which king(s) are currently in check. Recomputed from the
    /// full board on every call.
    pub fn check_state(&self) -> CheckSide {
        calculate_check(&self.board)
    }

    /// Reports every square the piece on `origin` can reach. Raw geometric
    /// reach, for display; the king-safety filter applies only in
    /// [`can_move`](Self::can_move) and [`play`](Self::play).
    pub fn create_path(&self, origin: Square, sink: &mut dyn PathSink) {
        pieces::create_path(&self.board, self.en_passant, origin, sink);
    }

    /// Returns true if moving `from` → `to` would be fully legal for the
    /// piece's owner, ignoring whose turn it is.
    pub fn can_move(&mut self, from: Square, to: Square) -> bool {
        pieces::can_move(&mut self.board, self.en_passant, from, to)
    }

    /// Validates and executes one move for the side to move.
    pub fn play(&mut self, from: Square, to: Square) -> Result<MoveOutcome, MoveError> {
        if let Some(sq) = self.pending_promotion {
            return Err(MoveError::PromotionPending(sq));
        }
        let piece = self.board.piece_at(from).ok_or(MoveError::NoPiece(from))?;
        if piece.side != self.turn {
            return Err(MoveError::NotYourTurn(piece.side));
        }
        if !pieces::can_move(&mut self.board, self.en_passant, from, to) {
            return Err(MoveError::IllegalMove { from, to });
        }
        Ok(self.execute(from, to, piece, None))
    }

    /// Resolves a pending promotion by replacing the pawn.
    pub fn promote(&mut self, kind: PieceKind) -> Result<(), MoveError> {
        let sq = self.pending_promotion.ok_or(MoveError::NoPromotionPending)?;
        if matches!(kind, PieceKind::King | PieceKind::Pawn) {
            return Err(MoveError::InvalidPromotion(kind));
        }
        if let Some(pawn) = self.board.take(sq) {
            let mut promoted = Piece::new(kind, pawn.side);
            promoted.has_moved = true;
            self.board.set(sq, promoted);
        }
        self.pending_promotion = None;
        Ok(())
    }

    /// Classifies the position for the side to move: checkmate, stalemate,
    /// or `None` while the game goes on.
    pub fn evaluate_end(&mut self) -> Option<GameOutcome> {
        end::evaluate_end(&mut self.board, self.en_passant, self.turn)
    }

    /// Applies a move with no validation at all, for replay consumers.
    /// Special moves are reconstructed from shape: a pawn stepping
    /// diagonally onto an empty square removes the bypassed pawn, a king
    /// moving two files shifts its rook, and a pawn reaching the far row
    /// promotes to `promotion` (a queen when unspecified).
    ///
    /// Returns false if `from` holds no piece.
    pub fn apply_unchecked(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> bool {
        let Some(piece) = self.board.piece_at(from) else {
            return false;
        };
        self.execute(from, to, piece, Some(promotion.unwrap_or(PieceKind::Queen)));
        // The session's own turn tracking follows the mover.
        self.turn = piece.side.opposite();
        true
    }

    /// The shared mutation path. `auto_promote` resolves any triggered
    /// promotion inline (replay); `None` leaves it pending (interactive).
    fn execute(
        &mut self,
        from: Square,
        to: Square,
        piece: Piece,
        auto_promote: Option<PieceKind>,
    ) -> MoveOutcome {
        let size = self.board.size();
        let mut captured = None;

        // En-passant capture: the victim stands beside the destination.
        if piece.kind == PieceKind::Pawn
            && from.col() != to.col()
            && self.board.piece_at(to).is_none()
        {
            captured = self.board.take(Square::new(from.row(), to.col()));
        }

        // Castling: shift the rook before the king vacates its square.
        let d_col = to.col() as i16 - from.col() as i16;
        let mut castled = false;
        if piece.kind == PieceKind::King && d_col.abs() == 2 {
            let dir = d_col.signum() as i8;
            if let Some(rook_sq) = pieces::castle_rook_square(&self.board, from, piece, dir) {
                if let (Some(mut rook), Some(crossed)) =
                    (self.board.take(rook_sq), from.offset(0, dir, size))
                {
                    rook.has_moved = true;
                    self.board.set(crossed, rook);
                    castled = true;
                }
            }
        }

        let mut moved = piece;
        moved.has_moved = true;
        self.board.take(from);
        if let Some(direct) = self.board.set(to, moved) {
            captured = Some(direct);
        }
        if let Some(fallen) = captured {
            self.captured.push(fallen);
        }

        // Only the double step just played leaves a pawn capturable en
        // passant; every other move clears the target.
        let double_step = (to.row() as i16 - from.row() as i16).abs() == 2;
        self.en_passant = (piece.kind == PieceKind::Pawn && double_step).then_some(to);

        let mut promotion = (piece.kind == PieceKind::Pawn
            && to.row() == piece.side.promotion_row(size))
        .then_some(to);
        if let (Some(sq), Some(kind)) = (promotion, auto_promote) {
            let mut promoted = Piece::new(kind, piece.side);
            promoted.has_moved = true;
            self.board.set(sq, promoted);
            promotion = None;
        }
        self.pending_promotion = promotion;

        self.turn = self.turn.opposite();

        MoveOutcome {
            captured,
            check: calculate_check(&self.board),
            promotion,
            castled,
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
