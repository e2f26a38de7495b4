//! Terminal runner (default binary).
//!
//! Thin host around the game core: it polls crossterm for key presses,
//! feeds them to the game as actions, ticks gravity with the wall clock and
//! paints the result through the framebuffer renderer.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::{Game, GameConfig};
use blockfall::input::{handle_key_event, should_quit};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::{
    DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, DEFAULT_GRAVITY_MS, FRAME_MS,
};

#[derive(Debug, Parser)]
#[command(version, about = "Falling-block puzzle in the terminal")]
struct Args {
    /// Board width in cells
    #[arg(long, default_value_t = DEFAULT_BOARD_WIDTH)]
    width: usize,

    /// Board height in cells
    #[arg(long, default_value_t = DEFAULT_BOARD_HEIGHT)]
    height: usize,

    /// Milliseconds between forced drops
    #[arg(long = "gravity-ms", default_value_t = DEFAULT_GRAVITY_MS)]
    gravity_ms: u64,

    /// RNG seed (defaults to one derived from the clock)
    #[arg(long)]
    seed: Option<u32>,
}

impl Args {
    fn to_config(&self) -> GameConfig {
        GameConfig {
            width: self.width,
            height: self.height,
            gravity_interval: Duration::from_millis(self.gravity_ms),
            seed: self.seed.unwrap_or_else(clock_seed),
        }
    }
}

fn clock_seed() -> u32 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = args.to_config();
    let mut game = Game::new(config).context("invalid game configuration")?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game);

    // Always try to restore terminal state.
    let _ = term.exit();

    eprintln!(
        "[blockfall] seed {} score {} lines {} pieces {}",
        config.seed,
        game.score(),
        game.lines(),
        game.pieces_locked()
    );
    result
}

fn run(term: &mut TerminalRenderer, game: &mut Game) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let frame = Duration::from_millis(FRAME_MS);
    let mut last_frame = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(game, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next frame.
        let timeout = frame.saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        game.apply_action(action);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        if last_frame.elapsed() >= frame {
            last_frame = Instant::now();
            game.tick(last_frame);
        }
    }
}
