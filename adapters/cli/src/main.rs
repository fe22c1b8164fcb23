#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that boots the sliding tile puzzle.
//!
//! Parses the invocation options, builds a scrambled game session, and hands
//! it to the Macroquad backend: each frame the session turns the captured
//! input into board commands and repaints the scene from the board state.

mod session;

use anyhow::Result;
use clap::Parser;
use tile_slide_core::GridSize;
use tile_slide_rendering::{palette, BoardMetrics, Presentation, RenderingBackend, Scene};
use tile_slide_rendering_macroquad::MacroquadBackend;

use crate::session::GameSession;

/// Invocation options for the sliding tile puzzle.
#[derive(Debug, Parser)]
#[command(about = "Slide the numbered tiles back into order")]
struct Options {
    /// Cells along each board edge.
    #[arg(long, default_value_t = 4)]
    size: u32,

    /// Random moves applied when scrambling a new game.
    #[arg(long, default_value_t = tile_slide_system_shuffle::DEFAULT_STEPS)]
    shuffle_steps: u32,

    /// Seed for the scramble sequence; omit for a fresh puzzle each run.
    #[arg(long)]
    seed: Option<u64>,

    /// Disable vertical sync on the game window.
    #[arg(long)]
    no_vsync: bool,

    /// Print the measured frame rate once per second.
    #[arg(long)]
    show_fps: bool,
}

/// Entry point for the sliding tile puzzle.
fn main() -> Result<()> {
    let options = Options::parse();

    let size = GridSize::new(options.size);
    let metrics = BoardMetrics::new(
        size,
        BoardMetrics::DEFAULT_TILE_LENGTH,
        BoardMetrics::DEFAULT_MARGIN,
    )?;
    let mut game = GameSession::new(size, metrics.stride(), options.shuffle_steps, options.seed);

    let presentation = Presentation::new("Sliding Puzzle", palette::BACKGROUND, Scene::empty(metrics));
    let backend = MacroquadBackend::new()
        .with_vsync(!options.no_vsync)
        .with_show_fps(options.show_fps);

    backend.run(presentation, move |dt, input, scene| {
        let _ = game.handle_frame(&input, scene, dt);
        game.populate_scene(scene);
    })
}
