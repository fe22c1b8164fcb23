#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared rendering contracts for tile-slide adapters.
//!
//! Backends consume a [`Presentation`] describing the window plus an initial
//! [`Scene`], then repeatedly hand a per-frame [`FrameInput`] to the caller's
//! update closure and draw whatever the closure left in the scene. The scene
//! speaks world units: one cell spans the board's stride, matching the
//! visual positions the board interpolates.

pub mod gradient;

use anyhow::Result as AnyResult;
use glam::Vec2;
use std::time::Duration;
use thiserror::Error;
use tile_slide_core::{Direction, GridCoord, GridSize, TileLabel};

/// RGBA color used when presenting frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red channel intensity in the range 0.0..=1.0.
    pub red: f32,
    /// Green channel intensity in the range 0.0..=1.0.
    pub green: f32,
    /// Blue channel intensity in the range 0.0..=1.0.
    pub blue: f32,
    /// Alpha channel intensity in the range 0.0..=1.0.
    pub alpha: f32,
}

impl Color {
    /// Creates a new color from floating point channels.
    #[must_use]
    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Creates an opaque color from byte RGB values.
    #[must_use]
    pub const fn from_rgb_u8(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: red as f32 / 255.0,
            green: green as f32 / 255.0,
            blue: blue as f32 / 255.0,
            alpha: 1.0,
        }
    }

    /// Returns the same color with a replacement alpha channel.
    #[must_use]
    pub const fn with_alpha(self, alpha: f32) -> Self {
        Self { alpha, ..self }
    }

    /// Returns a new color lightened towards white by the provided amount.
    #[must_use]
    pub fn lighten(self, amount: f32) -> Self {
        let amount = amount.clamp(0.0, 1.0);

        Self {
            red: lighten_channel(self.red, amount),
            green: lighten_channel(self.green, amount),
            blue: lighten_channel(self.blue, amount),
            alpha: self.alpha,
        }
    }
}

fn lighten_channel(channel: f32, amount: f32) -> f32 {
    channel + (1.0 - channel) * amount
}

/// Fixed colors shared by every backend.
pub mod palette {
    use super::Color;

    /// Window clear color (alice blue).
    pub const BACKGROUND: Color = Color::from_rgb_u8(240, 248, 255);
    /// Board backdrop behind the tiles (steel blue).
    pub const BOARD_BACKDROP: Color = Color::from_rgb_u8(70, 130, 180);
    /// Tile and button outline color.
    pub const TILE_BORDER: Color = Color::from_rgb_u8(255, 255, 255);
    /// Title and HUD text (midnight blue).
    pub const TEXT: Color = Color::from_rgb_u8(25, 25, 112);
    /// New-game button fill (cornflower blue).
    pub const BUTTON: Color = Color::from_rgb_u8(100, 149, 237);
    /// New-game button fill while hovered (royal blue).
    pub const BUTTON_HOVER: Color = Color::from_rgb_u8(65, 105, 225);
    /// Solved-overlay scrim.
    pub const WIN_SCRIM: Color = Color::new(0.0, 0.0, 0.0, 0.7);
    /// "Solved!" headline (gold).
    pub const WIN_HEADLINE: Color = Color::from_rgb_u8(255, 215, 0);
}

/// Geometry of the board in world units.
///
/// Cells advance by [`BoardMetrics::stride`] (tile edge plus margin), which
/// must equal the stride the board uses for its visual positions so drawn
/// tiles land where the animation says they are.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardMetrics {
    size: GridSize,
    tile_length: f32,
    margin: f32,
}

impl BoardMetrics {
    /// Default tile edge length in world units.
    pub const DEFAULT_TILE_LENGTH: f32 = 120.0;

    /// Default gap between neighbouring tiles in world units.
    pub const DEFAULT_MARGIN: f32 = 10.0;

    /// Creates board metrics, validating the dimensions.
    ///
    /// Returns an error when the board would be smaller than two cells per
    /// edge or the tile length is not positive.
    pub fn new(
        size: GridSize,
        tile_length: f32,
        margin: f32,
    ) -> std::result::Result<Self, RenderingError> {
        if size < GridSize::MIN {
            return Err(RenderingError::GridTooSmall { size: size.get() });
        }
        if tile_length <= 0.0 {
            return Err(RenderingError::NonPositiveTileLength { tile_length });
        }

        Ok(Self {
            size,
            tile_length,
            margin: margin.max(0.0),
        })
    }

    /// Number of cells along each board edge.
    #[must_use]
    pub const fn size(&self) -> GridSize {
        self.size
    }

    /// Edge length of a single tile.
    #[must_use]
    pub const fn tile_length(&self) -> f32 {
        self.tile_length
    }

    /// Gap between neighbouring tiles.
    #[must_use]
    pub const fn margin(&self) -> f32 {
        self.margin
    }

    /// World units a tile advances when moving one cell.
    #[must_use]
    pub const fn stride(&self) -> f32 {
        self.tile_length + self.margin
    }

    /// Span of the tiles themselves, excluding the outer margin.
    #[must_use]
    pub fn width(&self) -> f32 {
        let n = self.size.get() as f32;
        n * self.tile_length + (n - 1.0) * self.margin
    }

    /// Span of the board backdrop, including a margin on every side.
    #[must_use]
    pub fn backdrop_side(&self) -> f32 {
        self.width() + 2.0 * self.margin
    }

    /// World-unit origin of a cell's tile.
    #[must_use]
    pub fn cell_origin(&self, cell: GridCoord) -> Vec2 {
        Vec2::new(
            cell.column() as f32 * self.stride(),
            cell.row() as f32 * self.stride(),
        )
    }

    /// Maps a world-space position to the cell it falls on.
    ///
    /// Positions in the margin between tiles resolve to the cell whose
    /// stride band contains them, matching how clicks feel on a dense board.
    /// Returns `None` outside the board.
    #[must_use]
    pub fn world_to_cell(&self, position: Vec2) -> Option<GridCoord> {
        if position.x < 0.0 || position.y < 0.0 {
            return None;
        }
        let column = (position.x / self.stride()).floor();
        let row = (position.y / self.stride()).floor();
        if column >= self.size.get() as f32 || row >= self.size.get() as f32 {
            return None;
        }
        Some(GridCoord::new(column as u32, row as u32))
    }
}

/// A single tile ready to draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileSprite {
    /// Numeric label painted on the tile.
    pub label: TileLabel,
    /// Interpolated world-unit position of the tile's top-left corner.
    pub position: Vec2,
    /// Fill sampled from the procedural puzzle image.
    pub fill: Color,
}

/// Move counter and elapsed time shown above the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HudModel {
    /// Accepted moves in the current game.
    pub moves: u32,
    /// Wall-clock time since the current game started. Display only.
    pub elapsed: Duration,
}

/// The new-game button below the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonModel {
    /// Caption drawn on the button.
    pub caption: String,
}

impl Default for ButtonModel {
    fn default() -> Self {
        Self {
            caption: "New Game".to_owned(),
        }
    }
}

/// Celebration overlay shown once the puzzle is solved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolvedOverlay {
    /// Moves it took to solve the puzzle.
    pub moves: u32,
}

/// Scene content that should be displayed.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// Geometry of the board.
    pub metrics: BoardMetrics,
    /// Tiles to draw, empty slot excluded.
    pub tiles: Vec<TileSprite>,
    /// Move counter and clock.
    pub hud: HudModel,
    /// The new-game button.
    pub button: ButtonModel,
    /// Present while the win celebration is showing.
    pub solved: Option<SolvedOverlay>,
}

impl Scene {
    /// Creates a scene with no tiles and default chrome.
    #[must_use]
    pub fn empty(metrics: BoardMetrics) -> Self {
        Self {
            metrics,
            tiles: Vec::new(),
            hud: HudModel::default(),
            button: ButtonModel::default(),
            solved: None,
        }
    }
}

/// Input snapshot gathered by adapters before updating the scene.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct FrameInput {
    /// Left-click position in board world space, when one landed this frame.
    pub pointer_click: Option<Vec2>,
    /// Directional key pressed this frame, if any.
    pub direction: Option<Direction>,
    /// Whether the player asked for a new game (button or shortcut).
    pub new_game: bool,
}

/// Presentation descriptor consumed by rendering backends.
#[derive(Clone, Debug, PartialEq)]
pub struct Presentation {
    /// Title used by the created window.
    pub window_title: String,
    /// Solid color used to clear each frame.
    pub clear_color: Color,
    /// Scene content that should be displayed.
    pub scene: Scene,
}

impl Presentation {
    /// Constructs a new presentation descriptor.
    #[must_use]
    pub fn new<T>(window_title: T, clear_color: Color, scene: Scene) -> Self
    where
        T: Into<String>,
    {
        Self {
            window_title: window_title.into(),
            clear_color,
            scene,
        }
    }
}

/// Rendering backend capable of presenting tile-slide scenes.
pub trait RenderingBackend {
    /// Runs the rendering backend until it is requested to exit.
    ///
    /// The provided `update_scene` closure receives the frame delta and the
    /// input captured by the adapter, and may mutate the scene before it is
    /// rendered.
    fn run<F>(self, presentation: Presentation, update_scene: F) -> AnyResult<()>
    where
        F: FnMut(Duration, FrameInput, &mut Scene) + 'static;
}

/// Errors that can occur when constructing rendering descriptors.
#[derive(Debug, Error, PartialEq)]
pub enum RenderingError {
    /// Boards need at least two cells per edge to have an empty slot and a
    /// tile to slide into it.
    #[error("board size must be at least 2 (received {size})")]
    GridTooSmall {
        /// Provided dimension that failed validation.
        size: u32,
    },
    /// A tile without area cannot be drawn or clicked.
    #[error("tile length must be positive (received {tile_length})")]
    NonPositiveTileLength {
        /// Provided tile length that failed validation.
        tile_length: f32,
    },
}

/// Formats a game clock as `MM:SS`, the way the HUD displays it.
#[must_use]
pub fn format_elapsed(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    format!("{:02}:{:02}", total / 60, total % 60)
}
