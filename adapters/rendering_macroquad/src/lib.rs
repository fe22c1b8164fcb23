#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Macroquad-backed rendering adapter for the tile-slide puzzle.
//!
//! Macroquad's optional audio stack depends on native ALSA development
//! libraries, which are unavailable in containerised CI environments. To
//! keep `cargo test` usable everywhere we depend on macroquad without its
//! default `audio` feature; the puzzle plays no sound anyway.
//!
//! The adapter uses Macroquad's immediate-mode UI module for the new-game
//! button. All UI-specific calls live inside the local `ui` module to avoid
//! leaking Macroquad UI types throughout the renderer.

mod ui;

use self::ui::{draw_new_game_button, NewGameButtonContext};
use anyhow::Result;
use glam::Vec2;
use macroquad::input::{is_key_pressed, is_mouse_button_pressed, mouse_position, KeyCode, MouseButton};
use macroquad::math::Vec2 as MacroquadVec2;
use macroquad::text::measure_text;
use std::time::Duration;
use tile_slide_core::Direction;
use tile_slide_rendering::{
    format_elapsed, palette, Color, FrameInput, Presentation, RenderingBackend, Scene,
};

/// World-unit height reserved above the board for the title and HUD.
const HEADER_WORLD_HEIGHT: f32 = 120.0;

/// World-unit height reserved below the board for the new-game button.
const FOOTER_WORLD_HEIGHT: f32 = 90.0;

/// Tracks a UI-sourced new-game request so it can be merged with physical
/// input on the next frame.
#[derive(Clone, Copy, Debug, Default)]
struct NewGameInputState {
    latched: bool,
}

impl NewGameInputState {
    /// Returns whether the button requested a new game and clears the latch
    /// so the action fires only once.
    fn take(&mut self) -> bool {
        let latched = self.latched;
        self.latched = false;
        latched
    }

    /// Records that the button was pressed this frame.
    fn register(&mut self) {
        self.latched = true;
    }
}

/// Snapshot of edge-triggered keyboard shortcuts observed during one frame.
#[derive(Clone, Copy, Debug, Default)]
struct KeyboardShortcuts {
    /// `Q` or `Escape` to quit the game loop.
    quit_requested: bool,
    /// `N` starts a new game.
    new_game: bool,
    /// Arrow key pressed this frame, if any.
    direction: Option<Direction>,
}

impl KeyboardShortcuts {
    fn poll() -> Self {
        let quit_requested = is_key_pressed(KeyCode::Escape) || is_key_pressed(KeyCode::Q);
        let new_game = is_key_pressed(KeyCode::N);
        let direction = if is_key_pressed(KeyCode::Up) {
            Some(Direction::Up)
        } else if is_key_pressed(KeyCode::Down) {
            Some(Direction::Down)
        } else if is_key_pressed(KeyCode::Left) {
            Some(Direction::Left)
        } else if is_key_pressed(KeyCode::Right) {
            Some(Direction::Right)
        } else {
            None
        };

        Self {
            quit_requested,
            new_game,
            direction,
        }
    }
}

/// Rendering backend implemented on top of macroquad.
#[derive(Clone, Copy, Debug, Default)]
pub struct MacroquadBackend {
    swap_interval: Option<i32>,
    show_fps: bool,
}

impl MacroquadBackend {
    /// Returns a backend that requests the platform's default swap interval.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the backend to request a specific swap interval.
    #[must_use]
    pub fn with_swap_interval(mut self, swap_interval: Option<i32>) -> Self {
        self.swap_interval = swap_interval;
        self
    }

    /// Configures the backend to either synchronise presentation with the
    /// display refresh rate or render as fast as possible.
    #[must_use]
    pub fn with_vsync(self, enabled: bool) -> Self {
        let swap_interval = if enabled { Some(1) } else { Some(0) };
        self.with_swap_interval(swap_interval)
    }

    /// Configures whether the backend prints a frame rate once per second.
    #[must_use]
    pub fn with_show_fps(mut self, show: bool) -> Self {
        self.show_fps = show;
        self
    }
}

/// Tracks the average frames-per-second produced by the render loop.
#[derive(Clone, Copy, Debug, Default)]
struct FpsCounter {
    elapsed: Duration,
    frames: u32,
}

impl FpsCounter {
    /// Records a rendered frame and returns the per-second average once one
    /// second has elapsed.
    fn record_frame(&mut self, dt: Duration) -> Option<f32> {
        self.elapsed += dt;
        self.frames = self.frames.saturating_add(1);

        if self.elapsed < Duration::from_secs(1) {
            return None;
        }

        let seconds = self.elapsed.as_secs_f32();
        let fps = if seconds <= f32::EPSILON {
            0.0
        } else {
            self.frames as f32 / seconds
        };
        self.elapsed = Duration::ZERO;
        self.frames = 0;
        Some(fps)
    }
}

impl RenderingBackend for MacroquadBackend {
    fn run<F>(self, presentation: Presentation, mut update_scene: F) -> Result<()>
    where
        F: FnMut(Duration, FrameInput, &mut Scene) + 'static,
    {
        let Self {
            swap_interval,
            show_fps,
        } = self;

        let Presentation {
            window_title,
            clear_color,
            scene,
        } = presentation;

        let mut config = macroquad::window::Conf {
            window_title,
            window_width: 800,
            window_height: 700,
            ..macroquad::window::Conf::default()
        };
        if let Some(swap_interval) = swap_interval {
            config.platform.swap_interval = Some(swap_interval);
        }

        macroquad::Window::from_config(config, async move {
            let mut scene = scene;
            let background = to_macroquad_color(clear_color);
            let mut fps_counter = FpsCounter::default();
            let mut button_input = NewGameInputState::default();

            loop {
                let keyboard = KeyboardShortcuts::poll();
                if keyboard.quit_requested {
                    break;
                }

                macroquad::window::clear_background(background);

                let screen_width = macroquad::window::screen_width();
                let screen_height = macroquad::window::screen_height();
                let dt_seconds = macroquad::time::get_frame_time();
                let frame_dt = Duration::from_secs_f32(dt_seconds.max(0.0));

                let metrics_before = SceneMetrics::from_scene(&scene, screen_width, screen_height);
                let frame_input = gather_frame_input(&metrics_before, &mut button_input, keyboard);

                update_scene(frame_dt, frame_input, &mut scene);

                let metrics = SceneMetrics::from_scene(&scene, screen_width, screen_height);
                draw_chrome(&scene, &metrics, screen_width);
                draw_board(&scene, &metrics);
                if let Some(overlay) = scene.solved {
                    draw_solved_overlay(overlay.moves, screen_width, screen_height, metrics.scale);
                }

                let button_context = new_game_button_context(&scene, &metrics, screen_width);
                let mut root = macroquad::ui::root_ui();
                if draw_new_game_button(&mut root, button_context, &scene.button.caption) {
                    button_input.register();
                }

                if show_fps {
                    if let Some(fps) = fps_counter.record_frame(frame_dt) {
                        println!("FPS: {fps:.2}");
                    }
                }

                macroquad::window::next_frame().await;
            }
        });

        Ok(())
    }
}

/// Screen-space layout derived from the scene and the current window size.
///
/// The scene speaks world units; the whole presentation (header, board,
/// footer) is scaled uniformly to fit the window and centered.
#[derive(Clone, Copy, Debug)]
struct SceneMetrics {
    scale: f32,
    offset_x: f32,
    offset_y: f32,
    board_origin_x: f32,
    board_origin_y: f32,
}

impl SceneMetrics {
    fn from_scene(scene: &Scene, screen_width: f32, screen_height: f32) -> Self {
        let metrics = scene.metrics;
        let world_width = metrics.backdrop_side();
        let world_height = HEADER_WORLD_HEIGHT + metrics.backdrop_side() + FOOTER_WORLD_HEIGHT;
        if world_width <= f32::EPSILON || world_height <= f32::EPSILON {
            return Self {
                scale: 0.0,
                offset_x: 0.0,
                offset_y: 0.0,
                board_origin_x: 0.0,
                board_origin_y: 0.0,
            };
        }

        let scale = (screen_width / world_width)
            .min(screen_height / world_height)
            .max(0.0);
        let offset_x = (screen_width - world_width * scale) / 2.0;
        let offset_y = (screen_height - world_height * scale) / 2.0;
        let board_origin_x = offset_x + metrics.margin() * scale;
        let board_origin_y = offset_y + (HEADER_WORLD_HEIGHT + metrics.margin()) * scale;

        Self {
            scale,
            offset_x,
            offset_y,
            board_origin_x,
            board_origin_y,
        }
    }

    /// Converts a screen-space cursor position into board world units, where
    /// the origin is the top-left corner of the first tile cell.
    fn cursor_to_board(&self, cursor: Vec2) -> Option<Vec2> {
        if self.scale <= f32::EPSILON {
            return None;
        }
        Some(Vec2::new(
            (cursor.x - self.board_origin_x) / self.scale,
            (cursor.y - self.board_origin_y) / self.scale,
        ))
    }
}

fn gather_frame_input(
    metrics: &SceneMetrics,
    button_input: &mut NewGameInputState,
    keyboard: KeyboardShortcuts,
) -> FrameInput {
    let new_game = button_input.take() || keyboard.new_game;
    let pointer_click = if is_mouse_button_pressed(MouseButton::Left) {
        let (cursor_x, cursor_y) = mouse_position();
        metrics.cursor_to_board(Vec2::new(cursor_x, cursor_y))
    } else {
        None
    };

    FrameInput {
        pointer_click,
        direction: keyboard.direction,
        new_game,
    }
}

fn to_macroquad_color(color: Color) -> macroquad::color::Color {
    macroquad::color::Color::new(color.red, color.green, color.blue, color.alpha)
}

fn draw_centered_text(text: &str, center_x: f32, baseline_y: f32, font_size: f32, color: Color) {
    let dimensions = measure_text(text, None, font_size as u16, 1.0);
    macroquad::text::draw_text(
        text,
        center_x - dimensions.width / 2.0,
        baseline_y,
        font_size,
        to_macroquad_color(color),
    );
}

fn draw_chrome(scene: &Scene, metrics: &SceneMetrics, screen_width: f32) {
    let center_x = screen_width / 2.0;
    draw_centered_text(
        "Sliding Puzzle",
        center_x,
        metrics.offset_y + 48.0 * metrics.scale,
        48.0 * metrics.scale,
        palette::TEXT,
    );

    let hud = format!(
        "Moves: {}  |  Time: {}",
        scene.hud.moves,
        format_elapsed(scene.hud.elapsed)
    );
    draw_centered_text(
        &hud,
        center_x,
        metrics.offset_y + 96.0 * metrics.scale,
        32.0 * metrics.scale,
        palette::TEXT,
    );
}

fn draw_board(scene: &Scene, metrics: &SceneMetrics) {
    let board = scene.metrics;
    let backdrop_side = board.backdrop_side() * metrics.scale;
    macroquad::shapes::draw_rectangle(
        metrics.offset_x,
        metrics.offset_y + HEADER_WORLD_HEIGHT * metrics.scale,
        backdrop_side,
        backdrop_side,
        to_macroquad_color(palette::BOARD_BACKDROP),
    );

    let tile_side = board.tile_length() * metrics.scale;
    for tile in &scene.tiles {
        if tile.label.is_empty() {
            continue;
        }
        let x = metrics.board_origin_x + tile.position.x * metrics.scale;
        let y = metrics.board_origin_y + tile.position.y * metrics.scale;
        macroquad::shapes::draw_rectangle(x, y, tile_side, tile_side, to_macroquad_color(tile.fill));
        macroquad::shapes::draw_rectangle_lines(
            x,
            y,
            tile_side,
            tile_side,
            3.0 * metrics.scale,
            to_macroquad_color(palette::TILE_BORDER),
        );

        let caption = tile.label.get().to_string();
        let font_size = 44.0 * metrics.scale;
        let dimensions = measure_text(&caption, None, font_size as u16, 1.0);
        macroquad::text::draw_text(
            &caption,
            x + (tile_side - dimensions.width) / 2.0,
            y + (tile_side + dimensions.height) / 2.0,
            font_size,
            to_macroquad_color(palette::TILE_BORDER),
        );
    }
}

fn draw_solved_overlay(moves: u32, screen_width: f32, screen_height: f32, scale: f32) {
    macroquad::shapes::draw_rectangle(
        0.0,
        0.0,
        screen_width,
        screen_height,
        to_macroquad_color(palette::WIN_SCRIM),
    );

    let center_x = screen_width / 2.0;
    let center_y = screen_height / 2.0;
    draw_centered_text(
        "Solved!",
        center_x,
        center_y - 50.0 * scale,
        64.0 * scale,
        palette::WIN_HEADLINE,
    );
    draw_centered_text(
        &format!("Completed in {moves} moves!"),
        center_x,
        center_y + 20.0 * scale,
        32.0 * scale,
        Color::from_rgb_u8(255, 255, 255),
    );
    draw_centered_text(
        "Click 'New Game' to play again",
        center_x,
        center_y + 70.0 * scale,
        32.0 * scale,
        Color::from_rgb_u8(200, 200, 200),
    );
}

fn new_game_button_context(
    scene: &Scene,
    metrics: &SceneMetrics,
    screen_width: f32,
) -> NewGameButtonContext {
    let width = 200.0 * metrics.scale;
    let height = 60.0 * metrics.scale;
    let footer_top =
        HEADER_WORLD_HEIGHT + scene.metrics.backdrop_side() + 15.0;
    NewGameButtonContext {
        origin: MacroquadVec2::new(
            screen_width / 2.0 - width / 2.0,
            metrics.offset_y + footer_top * metrics.scale,
        ),
        size: MacroquadVec2::new(width, height),
    }
}
