//! Owns the running game: the board, the scramble RNG, and the wall clock.
//!
//! The session is the only place where adapter input becomes commands. Per
//! frame it applies at most one move (pointer clicks take precedence over
//! arrow keys), then a single `Tick`; a new-game request replaces the state
//! wholesale before anything else. The wall clock is display-only and is
//! recomputed at scene population time, never consulted by game logic.

use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tile_slide_board::{apply, query, Board};
use tile_slide_core::{Command, Event, GridSize};
use tile_slide_rendering::{gradient, FrameInput, Scene, SolvedOverlay, TileSprite};

/// Live game state owned by the command-line adapter.
#[derive(Debug)]
pub(crate) struct GameSession {
    board: Board,
    rng: ChaCha8Rng,
    shuffle_steps: u32,
    started: Instant,
}

impl GameSession {
    /// Creates a session with a configured, freshly scrambled board.
    ///
    /// A provided seed makes the scramble sequence reproducible; otherwise
    /// the RNG draws from entropy.
    pub(crate) fn new(
        size: GridSize,
        cell_stride: f32,
        shuffle_steps: u32,
        seed: Option<u64>,
    ) -> Self {
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let mut session = Self {
            board: Board::new(),
            rng,
            shuffle_steps,
            started: Instant::now(),
        };
        let mut events = Vec::new();
        apply(
            &mut session.board,
            Command::ConfigureBoard { size, cell_stride },
            &mut events,
        );
        session.start_new_game(&mut events);
        session
    }

    /// Discards the current game and scrambles a fresh board.
    fn start_new_game(&mut self, out_events: &mut Vec<Event>) {
        apply(&mut self.board, Command::NewGame, out_events);
        let walk = tile_slide_system_shuffle::plan_walk(
            query::empty_position(&self.board),
            query::grid_size(&self.board),
            self.shuffle_steps,
            &mut self.rng,
        );
        apply(&mut self.board, Command::Scramble { walk }, out_events);
        self.started = Instant::now();
    }

    /// Processes one frame of input and advances the board one tick.
    pub(crate) fn handle_frame(
        &mut self,
        input: &FrameInput,
        scene: &Scene,
        dt: Duration,
    ) -> Vec<Event> {
        let mut events = Vec::new();

        if input.new_game {
            self.start_new_game(&mut events);
        } else if let Some(position) = input.pointer_click {
            // Clicks outside the board are a no-op, not a rejection.
            if let Some(cell) = scene.metrics.world_to_cell(position) {
                apply(&mut self.board, Command::Move { cell }, &mut events);
            }
        } else if let Some(direction) = input.direction {
            apply(&mut self.board, Command::Slide { direction }, &mut events);
        }

        apply(&mut self.board, Command::Tick { dt }, &mut events);
        events
    }

    /// Rewrites the scene to match the board's current state.
    pub(crate) fn populate_scene(&self, scene: &mut Scene) {
        let size = query::grid_size(&self.board);
        scene.tiles = query::board_view(&self.board)
            .iter()
            .filter(|snapshot| !snapshot.label.is_empty())
            .map(|snapshot| TileSprite {
                label: snapshot.label,
                position: glam::Vec2::new(snapshot.visual.x(), snapshot.visual.y()),
                fill: gradient::tile_fill(snapshot.label.home_cell(size), size),
            })
            .collect();
        scene.hud.moves = query::move_count(&self.board);
        scene.hud.elapsed = self.started.elapsed();
        scene.solved = query::is_won(&self.board).then_some(SolvedOverlay {
            moves: query::move_count(&self.board),
        });
    }

    #[cfg(test)]
    fn board(&self) -> &Board {
        &self.board
    }
}

#[cfg(test)]
mod tests {
    use super::GameSession;
    use std::time::Duration;
    use tile_slide_board::query;
    use tile_slide_core::{Direction, Event, GridSize};
    use tile_slide_rendering::{BoardMetrics, FrameInput, Scene};

    const FRAME: Duration = Duration::from_millis(16);

    fn test_scene(size: u32) -> Scene {
        let metrics = BoardMetrics::new(
            GridSize::new(size),
            BoardMetrics::DEFAULT_TILE_LENGTH,
            BoardMetrics::DEFAULT_MARGIN,
        )
        .expect("valid metrics");
        Scene::empty(metrics)
    }

    fn test_session(size: u32) -> GameSession {
        let metrics = test_scene(size).metrics;
        GameSession::new(GridSize::new(size), metrics.stride(), 100, Some(42))
    }

    #[test]
    fn sessions_start_scrambled_and_unsolved() {
        let session = test_session(4);
        assert!(!query::is_solved(session.board()));
        assert_eq!(query::move_count(session.board()), 0);
        assert!(!query::is_animating(session.board()));
    }

    #[test]
    fn pointer_clicks_on_a_legal_cell_accept_a_move() {
        let mut session = test_session(4);
        let scene = test_scene(4);
        let target = query::legal_targets(session.board())[0];
        let click = scene.metrics.cell_origin(target)
            + glam::Vec2::splat(scene.metrics.tile_length() / 2.0);

        let events = session.handle_frame(
            &FrameInput {
                pointer_click: Some(click),
                ..FrameInput::default()
            },
            &scene,
            FRAME,
        );
        assert!(events
            .iter()
            .any(|event| matches!(event, Event::MoveAccepted { .. })));
        assert_eq!(query::move_count(session.board()), 1);
    }

    #[test]
    fn clicks_outside_the_board_are_ignored() {
        let mut session = test_session(4);
        let scene = test_scene(4);
        let events = session.handle_frame(
            &FrameInput {
                pointer_click: Some(glam::Vec2::new(-40.0, 10.0)),
                ..FrameInput::default()
            },
            &scene,
            FRAME,
        );
        assert!(!events
            .iter()
            .any(|event| matches!(event, Event::MoveRejected { .. })));
        assert_eq!(query::move_count(session.board()), 0);
    }

    #[test]
    fn arrow_keys_translate_into_slides() {
        let mut session = test_session(4);
        let scene = test_scene(4);
        let mut accepted = 0;
        for direction in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            let events = session.handle_frame(
                &FrameInput {
                    direction: Some(direction),
                    ..FrameInput::default()
                },
                &scene,
                FRAME,
            );
            if events
                .iter()
                .any(|event| matches!(event, Event::MoveAccepted { .. }))
            {
                accepted += 1;
            }
            // Let the tile settle so the next slide is not gated.
            while query::is_animating(session.board()) {
                let _ = session.handle_frame(&FrameInput::default(), &scene, FRAME);
            }
        }
        assert!(accepted >= 2, "an empty slot always has two neighbours");
    }

    #[test]
    fn new_game_takes_precedence_over_simultaneous_clicks() {
        let mut session = test_session(4);
        let scene = test_scene(4);
        let target = query::legal_targets(session.board())[0];
        let click = scene.metrics.cell_origin(target);

        let events = session.handle_frame(
            &FrameInput {
                pointer_click: Some(click),
                new_game: true,
                ..FrameInput::default()
            },
            &scene,
            FRAME,
        );
        assert!(events
            .iter()
            .any(|event| matches!(event, Event::BoardReset { .. })));
        assert_eq!(query::move_count(session.board()), 0);
    }

    #[test]
    fn populate_scene_mirrors_the_board() {
        let mut session = test_session(4);
        let mut scene = test_scene(4);
        session.populate_scene(&mut scene);

        // The empty slot is drawn as backdrop, not as a tile.
        assert_eq!(scene.tiles.len(), 15);
        assert!(scene.solved.is_none());
        assert_eq!(scene.hud.moves, 0);

        let events = session.handle_frame(
            &FrameInput {
                direction: Some(Direction::Up),
                ..FrameInput::default()
            },
            &scene,
            FRAME,
        );
        session.populate_scene(&mut scene);
        if events
            .iter()
            .any(|event| matches!(event, Event::MoveAccepted { .. }))
        {
            assert_eq!(scene.hud.moves, 1);
        }
    }

    #[test]
    fn seeded_sessions_scramble_identically() {
        let first = test_session(3);
        let second = test_session(3);
        assert_eq!(
            query::board_view(first.board()).into_vec(),
            query::board_view(second.board()).into_vec()
        );
    }
}
