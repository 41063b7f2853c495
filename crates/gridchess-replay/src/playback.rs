//! Step-wise playback of a recorded game.
//!
//! Playback applies raw board mutations: the rules engine validated these
//! moves when the game was recorded, so none of that runs again here. The
//! session's mutation path still reconstructs the special-move side
//! effects (en-passant removal, castling rook shift, promotion) from the
//! shape of each move.

use gridchess_board::{Board, CheckSide, Side};
use gridchess_engine::GameSession;

use crate::record::{RecordedGame, ReplayError};

/// A cursor over a recorded game, advancing one move per step.
#[derive(Debug, Clone)]
pub struct Playback {
    initial: Board,
    session: GameSession,
    game: RecordedGame,
    cursor: usize,
}

impl Playback {
    /// Creates a playback of the record over the standard starting board.
    pub fn new(game: RecordedGame) -> Result<Self, ReplayError> {
        Self::with_board(Board::standard(), game)
    }

    /// Creates a playback over an arbitrary starting board. White is
    /// assumed to move first, as in a recorded game.
    pub fn with_board(board: Board, game: RecordedGame) -> Result<Self, ReplayError> {
        game.validate(board.size())?;
        Ok(Playback {
            session: GameSession::with_board(board.clone(), Side::White),
            initial: board,
            game,
            cursor: 0,
        })
    }

    /// The number of moves already applied.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The total number of recorded moves.
    pub fn len(&self) -> usize {
        self.game.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.game.moves.is_empty()
    }

    /// True once every recorded move has been applied.
    pub fn is_finished(&self) -> bool {
        self.cursor >= self.game.moves.len()
    }

    /// The board as of the current cursor position.
    pub fn board(&self) -> &Board {
        self.session.board()
    }

    /// Check classification of the current position.
    pub fn check_state(&self) -> CheckSide {
        self.session.check_state()
    }

    /// Applies the next recorded move. Returns false when the record is
    /// exhausted or the move's source square is empty (a record that does
    /// not match the board); the cursor advances either way.
    pub fn next_turn(&mut self) -> bool {
        let Some(mov) = self.game.moves.get(self.cursor).copied() else {
            return false;
        };
        self.cursor += 1;
        self.session
            .apply_unchecked(mov.from(), mov.to(), mov.promotion.map(|p| p.kind()))
    }

    /// Steps one move backward by rebuilding from the initial board.
    /// Returns false at the start of the record.
    pub fn prev_turn(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let target = self.cursor - 1;
        self.seek(target);
        true
    }

    /// Positions the cursor at `turn` (clamped to the record length),
    /// replaying from the start.
    pub fn seek(&mut self, turn: usize) {
        let target = turn.min(self.game.moves.len());
        self.session = GameSession::with_board(self.initial.clone(), Side::White);
        self.cursor = 0;
        while self.cursor < target {
            self.next_turn();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{PromotionChoice, RecordedMove};
    use gridchess_board::{Piece, PieceKind, Square};

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col)
    }

    fn opening_record() -> RecordedGame {
        RecordedGame::new(vec![
            RecordedMove::new(sq(6, 4), sq(4, 4)), // e4
            RecordedMove::new(sq(1, 4), sq(3, 4)), // e5
            RecordedMove::new(sq(7, 6), sq(5, 5)), // Nf3
        ])
    }

    #[test]
    fn steps_apply_in_order() {
        let mut playback = Playback::new(opening_record()).unwrap();
        assert_eq!(playback.cursor(), 0);
        assert_eq!(playback.len(), 3);

        assert!(playback.next_turn());
        assert!(playback.board().piece_at(sq(6, 4)).is_none());
        assert_eq!(
            playback.board().piece_at(sq(4, 4)).map(|p| p.kind),
            Some(PieceKind::Pawn)
        );

        assert!(playback.next_turn());
        assert!(playback.next_turn());
        assert!(playback.is_finished());
        assert!(!playback.next_turn());
    }

    #[test]
    fn prev_turn_restores_the_earlier_board() {
        let mut playback = Playback::new(opening_record()).unwrap();
        playback.next_turn();
        let after_first = playback.board().clone();
        playback.next_turn();

        assert!(playback.prev_turn());
        assert_eq!(playback.cursor(), 1);
        assert_eq!(playback.board(), &after_first);

        assert!(playback.prev_turn());
        assert_eq!(playback.board(), &Board::standard());
        assert!(!playback.prev_turn());
    }

    #[test]
    fn seek_jumps_and_clamps() {
        let mut playback = Playback::new(opening_record()).unwrap();
        playback.seek(2);
        assert_eq!(playback.cursor(), 2);
        assert_eq!(
            playback.board().piece_at(sq(3, 4)).map(|p| p.kind),
            Some(PieceKind::Pawn)
        );

        playback.seek(99);
        assert_eq!(playback.cursor(), 3);
        assert!(playback.is_finished());
    }

    #[test]
    fn replayed_en_passant_removes_the_bypassed_pawn() {
        let board = Board::from_layout("4k3/3p4/8/4P3/8/8/8/4K3").unwrap();
        let game = RecordedGame::new(vec![
            RecordedMove::new(sq(7, 4), sq(7, 3)), // White king sidestep
            RecordedMove::new(sq(1, 3), sq(3, 3)), // Black double step
            RecordedMove::new(sq(3, 4), sq(2, 3)), // en passant capture
        ]);
        let mut playback = Playback::with_board(board, game).unwrap();
        playback.seek(3);

        assert!(playback.board().piece_at(sq(3, 3)).is_none());
        assert_eq!(
            playback.board().piece_at(sq(2, 3)),
            Some(Piece {
                kind: PieceKind::Pawn,
                side: Side::White,
                has_moved: true
            })
        );
    }

    #[test]
    fn replayed_promotion_uses_the_recorded_choice() {
        let board = Board::from_layout("8/6P1/8/8/8/k7/8/4K3").unwrap();
        let game = RecordedGame::new(vec![RecordedMove::with_promotion(
            sq(1, 6),
            sq(0, 6),
            PromotionChoice::Knight,
        )]);
        let mut playback = Playback::with_board(board, game).unwrap();
        playback.next_turn();

        assert_eq!(
            playback.board().piece_at(sq(0, 6)).map(|p| p.kind),
            Some(PieceKind::Knight)
        );
    }

    #[test]
    fn replayed_castle_moves_the_rook() {
        let board = Board::from_layout("4k3/8/8/8/8/8/8/R3K3").unwrap();
        let game = RecordedGame::new(vec![RecordedMove::new(sq(7, 4), sq(7, 2))]);
        let mut playback = Playback::with_board(board, game).unwrap();
        playback.next_turn();

        assert_eq!(
            playback.board().piece_at(sq(7, 2)).map(|p| p.kind),
            Some(PieceKind::King)
        );
        assert_eq!(
            playback.board().piece_at(sq(7, 3)).map(|p| p.kind),
            Some(PieceKind::Rook)
        );
        assert!(playback.board().piece_at(sq(7, 0)).is_none());
    }

    #[test]
    fn mismatched_record_reports_a_dead_step() {
        let game = RecordedGame::new(vec![RecordedMove::new(sq(4, 4), sq(3, 4))]);
        let mut playback = Playback::new(game).unwrap();
        // (4, 4) is empty on the standard board.
        assert!(!playback.next_turn());
        assert_eq!(playback.cursor(), 1);
        assert!(playback.is_finished());
    }

    #[test]
    fn out_of_bounds_record_is_rejected_up_front() {
        let game = RecordedGame::new(vec![RecordedMove::new(sq(8, 0), sq(7, 0))]);
        assert!(matches!(
            Playback::new(game),
            Err(ReplayError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn check_state_tracks_the_replay() {
        let board = Board::from_layout("4k3/8/8/8/8/8/R7/4K3").unwrap();
        let game = RecordedGame::new(vec![RecordedMove::new(sq(6, 0), sq(6, 4))]);
        let mut playback = Playback::with_board(board, game).unwrap();
        assert_eq!(playback.check_state(), CheckSide::None);
        playback.next_turn();
        assert_eq!(playback.check_state(), CheckSide::Black);
    }
}
