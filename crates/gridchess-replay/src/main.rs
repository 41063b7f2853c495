//! Replay CLI: steps through a recorded game, printing the board after
//! every applied move.

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use gridchess_board::CheckSide;
use gridchess_replay::{autoplay, Playback, RecordedGame, StepControl};

#[derive(Parser)]
#[command(name = "gridchess-replay")]
#[command(about = "Steps through a recorded gridchess game")]
struct Args {
    /// Path to the recorded game (JSON)
    file: PathBuf,

    /// Milliseconds between automatic turns
    #[arg(long, default_value = "1000")]
    interval: u64,

    /// Skip ahead this many turns before autoplay starts
    #[arg(long, default_value = "0")]
    from: usize,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    tracing::info!("Loading replay from {:?}", args.file);
    let game = RecordedGame::load(&args.file)?;
    tracing::info!("{} recorded moves", game.moves.len());

    let mut playback = Playback::new(game)?;
    playback.seek(args.from);
    println!("{}", playback.board());

    autoplay::run(
        &mut playback,
        Duration::from_millis(args.interval),
        |playback| {
            println!("turn {}/{}", playback.cursor(), playback.len());
            println!("{}", playback.board());
            match playback.check_state() {
                CheckSide::None => {}
                check => tracing::info!("check: {:?}", check),
            }
            StepControl::Continue
        },
    );

    tracing::info!("Replay finished at turn {}", playback.cursor());
    Ok(())
}
