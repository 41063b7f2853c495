//! Interval-driven automatic playback.
//!
//! An explicit timer loop: advance one turn, hand the state to the
//! observer, sleep, repeat. Cancellation is the observer returning
//! [`StepControl::Stop`]; no further ticks are issued.

use std::time::Duration;

use crate::playback::Playback;

/// Observer verdict after each applied turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepControl {
    Continue,
    Stop,
}

/// Advances the playback one turn per `interval` until the record is
/// exhausted or the observer stops it. The observer runs after every
/// applied turn; the sleep is skipped once no turns remain.
pub fn run<F>(playback: &mut Playback, interval: Duration, mut observer: F)
where
    F: FnMut(&Playback) -> StepControl,
{
    while !playback.is_finished() {
        playback.next_turn();
        if observer(playback) == StepControl::Stop {
            break;
        }
        if playback.is_finished() {
            break;
        }
        std::thread::sleep(interval);
    }
}
