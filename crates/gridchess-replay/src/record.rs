//! The recorded move list and its JSON persistence.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use gridchess_board::{PieceKind, Square};

/// Errors that can occur when loading, saving, or replaying a record.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("failed to read replay file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse replay data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("move {index} references square ({row}, {col}) outside the {size}x{size} board")]
    OutOfBounds {
        index: usize,
        row: u8,
        col: u8,
        size: u8,
    },
}

/// The piece a recorded promotion resolves to. Kings and pawns are not
/// representable by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromotionChoice {
    Knight,
    Bishop,
    Rook,
    Queen,
}

impl PromotionChoice {
    /// The piece kind this choice resolves to.
    pub const fn kind(self) -> PieceKind {
        match self {
            PromotionChoice::Knight => PieceKind::Knight,
            PromotionChoice::Bishop => PieceKind::Bishop,
            PromotionChoice::Rook => PieceKind::Rook,
            PromotionChoice::Queen => PieceKind::Queen,
        }
    }
}

/// One recorded board mutation: source and destination cell, plus the
/// promotion choice when the move promoted a pawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedMove {
    pub from_row: u8,
    pub from_col: u8,
    pub to_row: u8,
    pub to_col: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotion: Option<PromotionChoice>,
}

impl RecordedMove {
    pub fn new(from: Square, to: Square) -> Self {
        RecordedMove {
            from_row: from.row(),
            from_col: from.col(),
            to_row: to.row(),
            to_col: to.col(),
            promotion: None,
        }
    }

    pub fn with_promotion(from: Square, to: Square, choice: PromotionChoice) -> Self {
        RecordedMove {
            promotion: Some(choice),
            ..Self::new(from, to)
        }
    }

    pub fn from(&self) -> Square {
        Square::new(self.from_row, self.from_col)
    }

    pub fn to(&self) -> Square {
        Square::new(self.to_row, self.to_col)
    }
}

/// A complete recorded game: the moves in play order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RecordedGame {
    pub moves: Vec<RecordedMove>,
}

impl RecordedGame {
    pub fn new(moves: Vec<RecordedMove>) -> Self {
        RecordedGame { moves }
    }

    /// Parses a record from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, ReplayError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the record to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ReplayError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Loads a record from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ReplayError> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }

    /// Writes the record to a JSON file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ReplayError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Checks every move against an N×N board, reporting the first square
    /// that falls outside it.
    pub fn validate(&self, board_size: u8) -> Result<(), ReplayError> {
        for (index, mov) in self.moves.iter().enumerate() {
            for (row, col) in [
                (mov.from_row, mov.from_col),
                (mov.to_row, mov.to_col),
            ] {
                if row >= board_size || col >= board_size {
                    return Err(ReplayError::OutOfBounds {
                        index,
                        row,
                        col,
                        size: board_size,
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col)
    }

    #[test]
    fn json_roundtrip() {
        let game = RecordedGame::new(vec![
            RecordedMove::new(sq(6, 4), sq(4, 4)),
            RecordedMove::new(sq(1, 4), sq(3, 4)),
            RecordedMove::with_promotion(sq(1, 0), sq(0, 0), PromotionChoice::Queen),
        ]);

        let json = game.to_json().unwrap();
        let parsed = RecordedGame::from_json(&json).unwrap();
        assert_eq!(parsed, game);
    }

    #[test]
    fn promotion_field_is_optional_in_json() {
        let json = r#"{"moves":[{"from_row":6,"from_col":4,"to_row":4,"to_col":4}]}"#;
        let game = RecordedGame::from_json(json).unwrap();
        assert_eq!(game.moves.len(), 1);
        assert_eq!(game.moves[0].promotion, None);

        // Plain moves serialize without the promotion key.
        let out = game.to_json().unwrap();
        assert!(!out.contains("promotion"));
    }

    #[test]
    fn promotion_choice_names_are_lowercase() {
        let json = r#"{"moves":[{"from_row":1,"from_col":0,"to_row":0,"to_col":0,"promotion":"rook"}]}"#;
        let game = RecordedGame::from_json(json).unwrap();
        assert_eq!(game.moves[0].promotion, Some(PromotionChoice::Rook));
        assert_eq!(
            game.moves[0].promotion.unwrap().kind(),
            PieceKind::Rook
        );
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            RecordedGame::from_json("{not json"),
            Err(ReplayError::Parse(_))
        ));
    }

    #[test]
    fn validate_catches_out_of_bounds_moves() {
        let game = RecordedGame::new(vec![
            RecordedMove::new(sq(6, 4), sq(4, 4)),
            RecordedMove::new(sq(3, 9), sq(2, 9)),
        ]);
        assert!(game.validate(8).is_err());
        assert!(game.validate(10).is_ok());

        let err = game.validate(8).unwrap_err();
        assert!(matches!(err, ReplayError::OutOfBounds { index: 1, .. }));
    }
}
