//! Recorded-game playback for gridchess.
//!
//! A [`RecordedGame`] is a JSON-persisted move list. [`Playback`] replays
//! it against a board one step at a time (raw mutations, no rule
//! validation), and [`autoplay`] drives the playback on a fixed interval.

pub mod autoplay;
mod playback;
mod record;

pub use autoplay::StepControl;
pub use playback::Playback;
pub use record::{PromotionChoice, RecordedGame, RecordedMove, ReplayError};
