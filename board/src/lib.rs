#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative puzzle state for the tile-slide engine.
//!
//! The [`Board`] owns every tile, the cached empty-slot position, the move
//! counter, and the win flag. It is mutated exclusively through [`apply`];
//! adapters and systems read it through the [`query`] module. Within one
//! frame the expected command order is: player moves first, then a single
//! `Tick` that advances animation and evaluates the win condition.

use tile_slide_core::{
    Command, Event, GridCoord, GridSize, MoveOutcome, RejectReason, TileLabel, VisualPosition,
};
use tile_slide_system_animation as animation;
use tile_slide_system_moves as moves;

const DEFAULT_GRID_SIZE: GridSize = GridSize::new(4);
const DEFAULT_CELL_STRIDE: f32 = 130.0;
const DEFAULT_SPEED_DIVISOR: f32 = 15.0;

/// Bidirectional mapping between tile labels and board cells.
///
/// Both directions are dense vectors, so `label_at` and `position_of` are
/// O(1) and every mutation fixes both sides at once. The permutation
/// invariant (every label on exactly one cell) is pinned by test rather than
/// checked per call.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    size: GridSize,
    cells: Vec<TileLabel>,
    positions: Vec<GridCoord>,
}

impl Grid {
    /// Builds a grid in the solved configuration for the provided size.
    #[must_use]
    pub fn solved(size: GridSize) -> Self {
        let count = size.cell_count() as usize;
        let mut cells = Vec::with_capacity(count);
        let mut positions = vec![GridCoord::new(0, 0); count];
        for row in 0..size.get() {
            for column in 0..size.get() {
                let cell = GridCoord::new(column, row);
                let ordinal = row * size.get() + column + 1;
                let label = if ordinal == size.cell_count() {
                    TileLabel::EMPTY
                } else {
                    TileLabel::new(ordinal)
                };
                cells.push(label);
                positions[label.get() as usize] = cell;
            }
        }
        Self {
            size,
            cells,
            positions,
        }
    }

    /// Dimensions of the grid.
    #[must_use]
    pub const fn size(&self) -> GridSize {
        self.size
    }

    /// Label occupying the provided cell.
    ///
    /// Panics when the cell lies outside the grid; callers are expected to
    /// validate through the move system first.
    #[must_use]
    pub fn label_at(&self, cell: GridCoord) -> TileLabel {
        let index = self.checked_index(cell);
        self.cells[index]
    }

    /// Cell occupied by the provided label.
    ///
    /// Panics when the label does not exist on this grid.
    #[must_use]
    pub fn position_of(&self, label: TileLabel) -> GridCoord {
        let index = label.get() as usize;
        assert!(
            index < self.positions.len(),
            "label {} does not exist on a {}x{} grid",
            label.get(),
            self.size.get(),
            self.size.get(),
        );
        self.positions[index]
    }

    /// Exchanges the labels occupying two cells, keeping both mapping
    /// directions consistent.
    ///
    /// An out-of-bounds cell is a programmer error: the move validator is
    /// always consulted first, so the grid fails loudly instead of
    /// corrupting the permutation.
    pub fn swap(&mut self, a: GridCoord, b: GridCoord) {
        let index_a = self.checked_index(a);
        let index_b = self.checked_index(b);
        self.cells.swap(index_a, index_b);
        self.positions[self.cells[index_a].get() as usize] = a;
        self.positions[self.cells[index_b].get() as usize] = b;
    }

    /// Reports whether every label rests on its home cell.
    #[must_use]
    pub fn is_solved_configuration(&self) -> bool {
        self.positions
            .iter()
            .enumerate()
            .all(|(label, cell)| TileLabel::new(label as u32).home_cell(self.size) == *cell)
    }

    fn checked_index(&self, cell: GridCoord) -> usize {
        match cell.index(self.size) {
            Some(index) => index,
            None => panic!(
                "swap out of bounds: cell ({}, {}) on a {}x{} grid",
                cell.column(),
                cell.row(),
                self.size.get(),
                self.size.get(),
            ),
        }
    }
}

/// Animation bookkeeping for a single tile, indexed by label.
#[derive(Clone, Copy, Debug, PartialEq)]
struct TileMotion {
    target: GridCoord,
    visual: VisualPosition,
}

impl TileMotion {
    fn at_rest(cell: GridCoord, stride: f32) -> Self {
        Self {
            target: cell,
            visual: VisualPosition::from_cell(cell, stride),
        }
    }

    fn target_visual(&self, stride: f32) -> VisualPosition {
        VisualPosition::from_cell(self.target, stride)
    }

    fn settled(&self, stride: f32) -> bool {
        animation::is_settled(self.visual, self.target_visual(stride))
    }
}

/// Authoritative puzzle state.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    grid: Grid,
    motions: Vec<TileMotion>,
    empty: GridCoord,
    move_count: u32,
    solved: bool,
    cell_stride: f32,
    speed_divisor: f32,
}

impl Board {
    /// Creates a board in the solved four-by-four configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_size(DEFAULT_GRID_SIZE)
    }

    /// Creates a solved board with the provided dimensions.
    ///
    /// Sizes below [`GridSize::MIN`] are clamped up to it.
    #[must_use]
    pub fn with_size(size: GridSize) -> Self {
        let size = size.max(GridSize::MIN);
        let grid = Grid::solved(size);
        let motions = resting_motions(&grid, DEFAULT_CELL_STRIDE);
        let empty = grid.position_of(TileLabel::EMPTY);
        Self {
            grid,
            motions,
            empty,
            move_count: 0,
            solved: false,
            cell_stride: DEFAULT_CELL_STRIDE,
            speed_divisor: DEFAULT_SPEED_DIVISOR,
        }
    }

    fn rebuild(&mut self, size: GridSize) {
        self.grid = Grid::solved(size);
        self.motions = resting_motions(&self.grid, self.cell_stride);
        self.empty = self.grid.position_of(TileLabel::EMPTY);
        self.move_count = 0;
        self.solved = false;
    }

    fn animating(&self) -> bool {
        self.motions
            .iter()
            .any(|motion| !motion.settled(self.cell_stride))
    }

    fn attempt_move(&mut self, cell: GridCoord, out_events: &mut Vec<Event>) -> MoveOutcome {
        let reason = if self.solved {
            Some(RejectReason::AlreadySolved)
        } else if self.animating() {
            Some(RejectReason::AnimationInFlight)
        } else if !self.grid.size().contains(cell) {
            Some(RejectReason::OutOfBounds)
        } else if !moves::is_legal(cell, self.empty, self.grid.size()) {
            Some(RejectReason::NotAdjacent)
        } else {
            None
        };

        if let Some(reason) = reason {
            out_events.push(Event::MoveRejected {
                cell: Some(cell),
                reason,
            });
            return MoveOutcome::Rejected(reason);
        }

        let label = self.grid.label_at(cell);
        let destination = self.empty;
        self.grid.swap(cell, destination);
        self.motions[label.get() as usize].target = destination;
        // Only the numbered tile glides; the empty slot's bookkeeping snaps.
        self.motions[TileLabel::EMPTY.get() as usize] =
            TileMotion::at_rest(cell, self.cell_stride);
        self.empty = cell;
        self.move_count += 1;
        out_events.push(Event::MoveAccepted {
            label,
            from: cell,
            to: destination,
            move_count: self.move_count,
        });
        MoveOutcome::Accepted
    }

    fn apply_scramble(&mut self, walk: &[GridCoord], out_events: &mut Vec<Event>) {
        let mut applied = 0;
        for &cell in walk {
            // A planner bug degrades to a shorter scramble, never corruption.
            if !moves::is_legal(cell, self.empty, self.grid.size()) {
                continue;
            }
            let label = self.grid.label_at(cell);
            let destination = self.empty;
            self.grid.swap(cell, destination);
            self.motions[label.get() as usize] =
                TileMotion::at_rest(destination, self.cell_stride);
            self.motions[TileLabel::EMPTY.get() as usize] =
                TileMotion::at_rest(cell, self.cell_stride);
            self.empty = cell;
            applied += 1;
        }
        self.solved = false;
        out_events.push(Event::BoardScrambled { steps: applied });
    }

    fn advance_animation(&mut self, out_events: &mut Vec<Event>) {
        for (index, motion) in self.motions.iter_mut().enumerate() {
            if motion.settled(self.cell_stride) {
                continue;
            }
            let target = VisualPosition::from_cell(motion.target, self.cell_stride);
            let (next, settled) = animation::advance(motion.visual, target, self.speed_divisor);
            motion.visual = next;
            if settled {
                out_events.push(Event::TileSettled {
                    label: TileLabel::new(index as u32),
                    cell: motion.target,
                });
            }
        }
    }

    fn evaluate_win(&mut self, out_events: &mut Vec<Event>) {
        // Never mid-slide, never at an untouched start state.
        if self.solved || self.move_count == 0 || self.animating() {
            return;
        }
        if self.grid.is_solved_configuration() {
            self.solved = true;
            out_events.push(Event::PuzzleSolved {
                moves: self.move_count,
            });
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

fn resting_motions(grid: &Grid, stride: f32) -> Vec<TileMotion> {
    (0..grid.size().cell_count())
        .map(|label| TileMotion::at_rest(grid.position_of(TileLabel::new(label)), stride))
        .collect()
}

/// Applies the provided command to the board, mutating state deterministically.
pub fn apply(board: &mut Board, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::ConfigureBoard { size, cell_stride } => {
            let size = size.max(GridSize::MIN);
            board.cell_stride = cell_stride.max(1.0);
            board.rebuild(size);
            out_events.push(Event::BoardConfigured {
                size,
                cell_stride: board.cell_stride,
            });
        }
        Command::ConfigureAnimation { speed_divisor } => {
            board.speed_divisor = speed_divisor.max(animation::MIN_SPEED_DIVISOR);
        }
        Command::NewGame => {
            board.rebuild(board.grid.size());
            out_events.push(Event::BoardReset {
                size: board.grid.size(),
            });
        }
        Command::Scramble { walk } => {
            board.apply_scramble(&walk, out_events);
        }
        Command::Move { cell } => {
            let _ = board.attempt_move(cell, out_events);
        }
        Command::Slide { direction } => {
            match moves::slide_source(board.empty, direction, board.grid.size()) {
                Some(cell) => {
                    let _ = board.attempt_move(cell, out_events);
                }
                None => {
                    out_events.push(Event::MoveRejected {
                        cell: None,
                        reason: RejectReason::OutOfBounds,
                    });
                }
            }
        }
        Command::Tick { dt } => {
            out_events.push(Event::TimeAdvanced { dt });
            board.advance_animation(out_events);
            board.evaluate_win(out_events);
        }
    }
}

/// Query functions that provide read-only access to the board state.
pub mod query {
    use super::{moves, Board};
    use tile_slide_core::{BoardView, GridCoord, GridSize, TileLabel, TileSnapshot};

    /// Dimensions of the board.
    #[must_use]
    pub fn grid_size(board: &Board) -> GridSize {
        board.grid.size()
    }

    /// World units a tile travels when moving one cell.
    #[must_use]
    pub fn cell_stride(board: &Board) -> f32 {
        board.cell_stride
    }

    /// Cell currently holding the empty slot.
    #[must_use]
    pub fn empty_position(board: &Board) -> GridCoord {
        board.empty
    }

    /// Number of accepted player moves since the last reset.
    #[must_use]
    pub fn move_count(board: &Board) -> u32 {
        board.move_count
    }

    /// Whether any tile is still gliding toward its target.
    #[must_use]
    pub fn is_animating(board: &Board) -> bool {
        board.animating()
    }

    /// Whether every label currently rests on its home cell.
    ///
    /// This is the raw configuration check; see [`is_won`] for the terminal
    /// game state that gates further moves.
    #[must_use]
    pub fn is_solved(board: &Board) -> bool {
        board.grid.is_solved_configuration()
    }

    /// Whether the win condition has fired for the current game.
    #[must_use]
    pub fn is_won(board: &Board) -> bool {
        board.solved
    }

    /// Cells whose tiles may legally slide into the empty slot right now.
    #[must_use]
    pub fn legal_targets(board: &Board) -> Vec<GridCoord> {
        moves::legal_moves(board.empty, board.grid.size())
    }

    /// Captures a read-only view of every tile, the empty slot included.
    #[must_use]
    pub fn board_view(board: &Board) -> BoardView {
        let snapshots: Vec<TileSnapshot> = board
            .motions
            .iter()
            .enumerate()
            .map(|(index, motion)| {
                let label = TileLabel::new(index as u32);
                TileSnapshot {
                    label,
                    cell: board.grid.position_of(label),
                    target: motion.target,
                    visual: motion.visual,
                    settled: motion.settled(board.cell_stride),
                }
            })
            .collect();
        BoardView::from_snapshots(snapshots)
    }
}
