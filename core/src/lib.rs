#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the tile-slide engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative board, and pure systems. Adapters submit [`Command`] values
//! describing desired mutations, the board executes those commands via its
//! `apply` entry point, and then broadcasts [`Event`] values describing what
//! actually happened. Systems stay pure: they compute over core value types
//! and never touch board internals directly.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Commands that express all permissible board mutations.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Rebuilds the board with the provided dimensions and visual stride.
    ConfigureBoard {
        /// Number of cells along each board edge.
        size: GridSize,
        /// World units a tile travels when moving one cell.
        cell_stride: f32,
    },
    /// Adjusts the per-frame animation interpolation factor.
    ConfigureAnimation {
        /// Divisor applied to the remaining distance each frame; clamped to
        /// at least one by the board.
        speed_divisor: f32,
    },
    /// Discards the current game and restores the solved configuration.
    NewGame,
    /// Applies a pre-planned scramble walk silently, without counting moves
    /// or triggering animation.
    Scramble {
        /// Cells to slide into the empty slot, in order. Each entry must be
        /// legal at the point it is applied.
        walk: Vec<GridCoord>,
    },
    /// Attempts to slide the tile at the provided cell into the empty slot.
    Move {
        /// Cell occupied by the tile the player selected.
        cell: GridCoord,
    },
    /// Attempts the move selected by a directional key press.
    Slide {
        /// Direction the player wants a tile to travel.
        direction: Direction,
    },
    /// Advances animation by one frame and evaluates the win condition.
    Tick {
        /// Wall-clock duration of the elapsed frame. Display-only; the
        /// interpolation itself is frame-stepped.
        dt: Duration,
    },
}

/// Events broadcast by the board after processing commands.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Confirms that the board was rebuilt with new dimensions.
    BoardConfigured {
        /// Number of cells along each board edge.
        size: GridSize,
        /// World units a tile travels when moving one cell.
        cell_stride: f32,
    },
    /// Confirms that the board returned to the solved configuration.
    BoardReset {
        /// Dimensions of the rebuilt board.
        size: GridSize,
    },
    /// Confirms that a scramble walk was applied.
    BoardScrambled {
        /// Number of walk entries that were legal and applied.
        steps: u32,
    },
    /// Confirms that a player move was executed.
    MoveAccepted {
        /// Label of the tile that slid into the empty slot.
        label: TileLabel,
        /// Cell the tile occupied before the move.
        from: GridCoord,
        /// Cell the tile now occupies (the previous empty slot).
        to: GridCoord,
        /// Total accepted moves including this one.
        move_count: u32,
    },
    /// Reports that a move request was rejected.
    MoveRejected {
        /// Cell the request resolved to, when it resolved at all.
        cell: Option<GridCoord>,
        /// Specific reason the move failed.
        reason: RejectReason,
    },
    /// Reports that a tile finished animating and came to rest.
    TileSettled {
        /// Label of the settled tile.
        label: TileLabel,
        /// Cell the tile settled on.
        cell: GridCoord,
    },
    /// Indicates that the frame clock advanced.
    TimeAdvanced {
        /// Duration of the elapsed frame.
        dt: Duration,
    },
    /// Announces that every tile reached its home cell.
    PuzzleSolved {
        /// Number of accepted moves it took.
        moves: u32,
    },
}

/// Outcome of a single move attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was legal and executed.
    Accepted,
    /// The move was refused and the board is unchanged.
    Rejected(RejectReason),
}

/// Reasons a move request may be rejected by the board.
///
/// Rejections are expected, frequent, and user-facing no-ops; they are plain
/// data rather than errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectReason {
    /// The requested cell lies outside the board.
    OutOfBounds,
    /// The requested cell is not 4-adjacent to the empty slot.
    NotAdjacent,
    /// A tile is still animating; input is gated until it settles.
    AnimationInFlight,
    /// The puzzle is already solved; only a new game unblocks moves.
    AlreadySolved,
}

/// Board dimension measured in cells per edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridSize(u32);

impl GridSize {
    /// Smallest playable board dimension.
    pub const MIN: GridSize = GridSize(2);

    /// Creates a new grid size wrapper.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the number of cells along one edge.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Total number of cells on the board.
    #[must_use]
    pub const fn cell_count(&self) -> u32 {
        self.0 * self.0
    }

    /// Reports whether the provided cell lies within the board.
    #[must_use]
    pub const fn contains(&self, cell: GridCoord) -> bool {
        cell.column() < self.0 && cell.row() < self.0
    }
}

/// Location of a single board cell expressed as column and row coordinates.
///
/// Columns grow rightward and rows grow downward, matching screen space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridCoord {
    column: u32,
    row: u32,
}

impl GridCoord {
    /// Creates a new board cell coordinate.
    #[must_use]
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    /// Zero-based column index of the cell.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Zero-based row index of the cell.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }

    /// Computes the Manhattan distance between two cell coordinates.
    #[must_use]
    pub fn manhattan_distance(self, other: GridCoord) -> u32 {
        self.column.abs_diff(other.column) + self.row.abs_diff(other.row)
    }

    /// Reports whether two cells share an edge.
    #[must_use]
    pub fn is_adjacent(self, other: GridCoord) -> bool {
        self.manhattan_distance(other) == 1
    }

    /// Row-major index of the cell within a board of the provided size.
    ///
    /// Returns `None` when the cell lies outside the board.
    #[must_use]
    pub fn index(self, size: GridSize) -> Option<usize> {
        if !size.contains(self) {
            return None;
        }
        let row = usize::try_from(self.row).ok()?;
        let column = usize::try_from(self.column).ok()?;
        let width = usize::try_from(size.get()).ok()?;
        Some(row * width + column)
    }
}

/// Numeric identity of a puzzle tile.
///
/// Label zero denotes the empty slot; labels `1..n²-1` are the numbered
/// tiles shown to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileLabel(u32);

impl TileLabel {
    /// Label reserved for the empty slot.
    pub const EMPTY: TileLabel = TileLabel(0);

    /// Creates a new tile label with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the label.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Reports whether this label denotes the empty slot.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Cell this label occupies in the solved configuration.
    ///
    /// Label `L > 0` lives at `((L-1) mod n, (L-1) div n)`; the empty slot
    /// lives in the bottom-right corner.
    #[must_use]
    pub const fn home_cell(&self, size: GridSize) -> GridCoord {
        let n = size.get();
        if self.0 == 0 {
            GridCoord::new(n - 1, n - 1)
        } else {
            GridCoord::new((self.0 - 1) % n, (self.0 - 1) / n)
        }
    }
}

/// Travel direction selected by a directional key press.
///
/// The direction names the way the *tile* moves on screen, not the way the
/// empty slot moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// A tile slides toward decreasing row indices.
    Up,
    /// A tile slides toward increasing row indices.
    Down,
    /// A tile slides toward decreasing column indices.
    Left,
    /// A tile slides toward increasing column indices.
    Right,
}

/// Continuous position used only for rendering interpolation.
///
/// Expressed in world units where one cell spans the board's configured
/// stride. Never consulted by game logic.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualPosition {
    x: f32,
    y: f32,
}

impl VisualPosition {
    /// Creates a visual position from raw world-unit coordinates.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Horizontal world-unit coordinate.
    #[must_use]
    pub const fn x(&self) -> f32 {
        self.x
    }

    /// Vertical world-unit coordinate.
    #[must_use]
    pub const fn y(&self) -> f32 {
        self.y
    }

    /// World-unit position of a cell given the board's stride.
    #[must_use]
    pub fn from_cell(cell: GridCoord, stride: f32) -> Self {
        Self {
            x: cell.column() as f32 * stride,
            y: cell.row() as f32 * stride,
        }
    }
}

/// Immutable representation of a single tile's state used for queries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileSnapshot {
    /// Numeric identity of the tile.
    pub label: TileLabel,
    /// Authoritative cell the tile occupies.
    pub cell: GridCoord,
    /// Cell the tile is animating toward.
    pub target: GridCoord,
    /// Interpolated world-unit position used for drawing.
    pub visual: VisualPosition,
    /// Whether the tile's visual position has reached its target exactly.
    pub settled: bool,
}

/// Read-only snapshot describing every tile on the board.
#[derive(Clone, Debug, Default)]
pub struct BoardView {
    snapshots: Vec<TileSnapshot>,
}

impl BoardView {
    /// Creates a new board view from the provided snapshots.
    #[must_use]
    pub fn from_snapshots(mut snapshots: Vec<TileSnapshot>) -> Self {
        snapshots.sort_by_key(|snapshot| snapshot.label);
        Self { snapshots }
    }

    /// Iterator over the captured tile snapshots in label order.
    pub fn iter(&self) -> impl Iterator<Item = &TileSnapshot> {
        self.snapshots.iter()
    }

    /// Looks up the snapshot for a specific label.
    #[must_use]
    pub fn tile(&self, label: TileLabel) -> Option<&TileSnapshot> {
        self.snapshots
            .iter()
            .find(|snapshot| snapshot.label == label)
    }

    /// Consumes the view, yielding the underlying snapshots.
    #[must_use]
    pub fn into_vec(self) -> Vec<TileSnapshot> {
        self.snapshots
    }
}
