//! Game module - the session state machine
//!
//! Ties the board, the active piece, the RNG and the score together and runs
//! the per-tick cycle: spawn → fall → lock → clear → spawn, ending in
//! [`Phase::GameOver`] when a fresh piece has no room at its spawn point.
//!
//! Every entry point returns whether it changed the session. A rejected move
//! is a normal outcome, not an error. While the phase is `GameOver` every
//! entry point except [`Game::restart`] is a no-op.

use std::time::Instant;

use crate::config::{ConfigError, GameConfig};
use crate::rng::SimpleRng;
use crate::shape::Shape;
use crate::types::{GameAction, Phase, LINE_CLEAR_POINTS};
use crate::{Board, Piece};

/// What happened when the last piece locked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub lines_cleared: u32,
    pub score_gained: u32,
    /// The follow-up spawn ended the session
    pub game_over: bool,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    board: Board,
    active: Piece,
    rng: SimpleRng,
    score: u32,
    lines: u32,
    pieces_locked: u32,
    phase: Phase,
    /// Time of the last forced drop; None until the first tick arms it
    last_gravity: Option<Instant>,
    last_event: Option<LockEvent>,
}

impl Game {
    /// Create a session and spawn its first piece
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    /// Session on a default 10x15 board
    pub fn with_defaults() -> Self {
        Self::from_valid(GameConfig::default())
    }

    fn from_valid(config: GameConfig) -> Self {
        let mut rng = SimpleRng::new(config.seed);
        let active = rng.next_piece(config.width);
        let mut game = Self {
            config,
            board: Board::new(config.width, config.height),
            active,
            rng,
            score: 0,
            lines: 0,
            pieces_locked: 0,
            phase: Phase::Playing,
            last_gravity: None,
            last_event: None,
        };
        game.check_spawn();
        game
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for hosts that preload a layout (and for tests)
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    /// Replace the active piece without any legality check.
    ///
    /// Meant for hosts that script a position (and for tests).
    pub fn set_active(&mut self, piece: Piece) {
        self.active = piece;
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Total lines cleared this session
    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Take and clear the last lock event
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Would `shape` at `(x, y)` be illegal for an active piece?
    ///
    /// Combines the three directional checks with an exact-footprint overlap
    /// test, so a shape sitting on locked cells is always caught.
    pub fn piece_collides(&self, x: i32, y: i32, shape: &Shape) -> bool {
        self.board.collides_below(x, y, shape)
            || self.board.collides_left(x, y, shape)
            || self.board.collides_right(x, y, shape)
            || self.board.overlaps(x, y, shape)
    }

    pub fn move_left(&mut self) -> bool {
        if self.is_game_over() {
            return false;
        }
        let Piece { x, y, .. } = self.active;
        if self.board.collides_left(x - 1, y, &self.active.shape) {
            return false;
        }
        self.active.translate(-1, 0);
        true
    }

    pub fn move_right(&mut self) -> bool {
        if self.is_game_over() {
            return false;
        }
        let Piece { x, y, .. } = self.active;
        if self.board.collides_right(x + 1, y, &self.active.shape) {
            return false;
        }
        self.active.translate(1, 0);
        true
    }

    /// Rotate clockwise in place; no wall kicks, an illegal rotation is dropped
    pub fn rotate(&mut self) -> bool {
        if self.is_game_over() {
            return false;
        }
        let candidate = self.active.rotated_shape();
        if self.piece_collides(self.active.x, self.active.y, &candidate) {
            return false;
        }
        self.active.set_shape(candidate);
        true
    }

    /// Drop one row now, locking the piece if it cannot fall.
    ///
    /// Independent of the gravity clock.
    pub fn soft_drop(&mut self) -> bool {
        if self.is_game_over() {
            return false;
        }
        self.step_down();
        true
    }

    /// Advance the gravity clock to `now`.
    ///
    /// The first tick of a session only arms the clock. After that a forced
    /// drop happens once `now` is strictly more than one gravity interval
    /// past the previous drop. Returns true if a drop (or lock) happened.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.is_game_over() {
            return false;
        }
        let Some(last) = self.last_gravity else {
            self.last_gravity = Some(now);
            return false;
        };
        match now.checked_duration_since(last) {
            Some(elapsed) if elapsed > self.config.gravity_interval => {
                self.last_gravity = Some(now);
                self.step_down();
                true
            }
            _ => false,
        }
    }

    /// Start over after game over: empty board, zero score, fresh piece.
    ///
    /// The RNG stream continues, so the new session differs from the last.
    pub fn restart(&mut self) -> bool {
        if !self.is_game_over() {
            return false;
        }
        self.board.clear();
        self.score = 0;
        self.lines = 0;
        self.pieces_locked = 0;
        self.last_gravity = None;
        self.last_event = None;
        self.phase = Phase::Playing;
        self.spawn_next();
        true
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::Rotate => self.rotate(),
            GameAction::Restart => self.restart(),
        }
    }

    fn step_down(&mut self) {
        let Piece { x, y, .. } = self.active;
        if self.board.collides_below(x, y, &self.active.shape) {
            self.lock_active();
        } else {
            self.active.translate(0, 1);
        }
    }

    fn lock_active(&mut self) {
        self.board.lock_piece(&self.active);
        let span = self.active.row_span();
        let cleared = self.board.clear_completed_rows(span.start, span.end) as u32;

        let gained = LINE_CLEAR_POINTS.saturating_mul(cleared);
        self.score = self.score.saturating_add(gained);
        self.lines = self.lines.saturating_add(cleared);
        self.pieces_locked = self.pieces_locked.wrapping_add(1);

        self.spawn_next();
        self.last_event = Some(LockEvent {
            lines_cleared: cleared,
            score_gained: gained,
            game_over: self.is_game_over(),
        });
    }

    fn spawn_next(&mut self) {
        self.active = self.rng.next_piece(self.config.width);
        self.check_spawn();
    }

    fn check_spawn(&mut self) {
        let Piece { x, y, .. } = self.active;
        if self.piece_collides(x, y, &self.active.shape) {
            self.phase = Phase::GameOver;
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::board::BoardCell;
    use crate::types::{ColorTag, PieceKind};

    fn game(seed: u32) -> Game {
        Game::new(GameConfig::default().with_seed(seed)).unwrap()
    }

    fn dot() -> Shape {
        Shape::from_rows(&[&[1]]).unwrap()
    }

    #[test]
    fn test_new_game_state() {
        let state = game(12345);
        assert_eq!(state.phase(), Phase::Playing);
        assert_eq!(state.score(), 0);
        assert_eq!(state.lines(), 0);
        assert_eq!(state.pieces_locked(), 0);
        assert_eq!(state.active().y, 0);
        assert_eq!(state.board().occupied_count(), 0);
    }

    #[test]
    fn test_new_rejects_bad_config() {
        let cfg = GameConfig {
            width: 1,
            ..GameConfig::default()
        };
        assert_eq!(Game::new(cfg).unwrap_err(), ConfigError::TooNarrow(1));
    }

    #[test]
    fn test_with_defaults_matches_new() {
        let a = Game::with_defaults();
        let b = game(1);
        assert_eq!(a.active(), b.active());
        assert_eq!(a.phase(), b.phase());
    }

    #[test]
    fn test_same_seed_same_spawns() {
        let mut a = game(99);
        let mut b = game(99);
        for _ in 0..40 {
            a.soft_drop();
            b.soft_drop();
            assert_eq!(a.active(), b.active());
        }
    }

    #[test]
    fn test_move_left_and_right() {
        let mut state = game(5);
        state.set_active(Piece::spawn(PieceKind::O, 4, 0));
        assert!(state.move_left());
        assert_eq!(state.active().x, 3);
        assert!(state.move_right());
        assert!(state.move_right());
        assert_eq!(state.active().x, 5);
    }

    #[test]
    fn test_move_stops_at_walls() {
        let mut state = game(5);
        state.set_active(Piece::spawn(PieceKind::O, 0, 0));
        assert!(!state.move_left());
        state.set_active(Piece::spawn(PieceKind::O, 8, 0));
        assert!(!state.move_right());
        assert_eq!(state.active().x, 8);
    }

    #[test]
    fn test_rotate_commits_when_free() {
        let mut state = game(5);
        state.set_active(Piece::spawn(PieceKind::T, 3, 2));
        assert!(state.rotate());
        assert_eq!(state.active().shape, Piece::spawn(PieceKind::T, 0, 0).rotated_shape());
        assert_eq!((state.active().x, state.active().y), (3, 2));
    }

    #[test]
    fn test_rotate_rejected_into_locked_cells() {
        let mut state = game(5);
        state.set_active(Piece::spawn(PieceKind::I, 2, 0));
        // Rotated bar would cover row 0, columns 2 to 5.
        state
            .board_mut()
            .set(0, 4, BoardCell::occupied(ColorTag::BACKGROUND));
        let before = state.active().clone();
        assert!(!state.rotate());
        assert_eq!(state.active(), &before);
    }

    #[test]
    fn test_soft_drop_moves_then_locks() {
        let mut state = game(5);
        state.set_active(Piece::spawn(PieceKind::O, 0, 12));
        assert!(state.soft_drop());
        assert_eq!(state.active().y, 13);
        assert!(state.soft_drop());
        assert_eq!(state.pieces_locked(), 1);
        assert!(state.board().is_occupied(14, 0));
        assert!(state.board().is_occupied(13, 1));
        let ev = state.take_last_event().unwrap();
        assert_eq!(ev.lines_cleared, 0);
        assert_eq!(ev.score_gained, 0);
        assert!(state.take_last_event().is_none());
    }

    #[test]
    fn test_locked_cells_use_shaded_color() {
        let mut state = game(5);
        let piece = Piece::spawn(PieceKind::Z, 0, 13);
        let color = piece.color;
        state.set_active(piece);
        state.soft_drop();
        assert_eq!(state.board().color(13, 0), Some(color.locked()));
        assert_eq!(state.board().color(0, 9), Some(ColorTag::BACKGROUND));
    }

    #[test]
    fn test_tick_gravity_is_time_gated() {
        let mut state = game(5);
        state.set_active(Piece::spawn(PieceKind::O, 4, 0));
        let t0 = Instant::now();
        let interval = state.config().gravity_interval;

        assert!(!state.tick(t0));
        assert!(!state.tick(t0 + interval));
        assert_eq!(state.active().y, 0);

        let t1 = t0 + interval + Duration::from_millis(1);
        assert!(state.tick(t1));
        assert_eq!(state.active().y, 1);

        // Clock was reset at t1.
        assert!(!state.tick(t1 + interval / 2));
        assert!(state.tick(t1 + interval * 2));
        assert_eq!(state.active().y, 2);
    }

    #[test]
    fn test_tick_ignores_time_going_backwards() {
        let t0 = Instant::now() + Duration::from_secs(10);
        let mut state = game(5);
        state.tick(t0);
        assert!(!state.tick(t0 - Duration::from_secs(5)));
    }

    #[test]
    fn test_soft_drop_does_not_reset_gravity_clock() {
        let mut state = game(5);
        state.set_active(Piece::spawn(PieceKind::O, 4, 0));
        let t0 = Instant::now();
        let interval = state.config().gravity_interval;
        state.tick(t0);
        state.soft_drop();
        assert!(state.tick(t0 + interval + Duration::from_millis(1)));
        assert_eq!(state.active().y, 2);
    }

    #[test]
    fn test_line_clear_scores_100_per_line() {
        let mut state = game(5);
        for row in 13..15 {
            for col in 1..10 {
                state
                    .board_mut()
                    .set(row, col, BoardCell::occupied(ColorTag::BACKGROUND));
            }
        }
        let bar = Shape::from_rows(&[&[1], &[1]]).unwrap();
        state.set_active(Piece::new(bar, 0, 13, ColorTag::new(9, 9, 9)));
        state.soft_drop();

        assert_eq!(state.score(), 200);
        assert_eq!(state.lines(), 2);
        assert_eq!(state.board().occupied_count(), 0);
        let ev = state.take_last_event().unwrap();
        assert_eq!(ev.lines_cleared, 2);
        assert_eq!(ev.score_gained, 200);
    }

    #[test]
    fn test_game_over_freezes_until_restart() {
        let mut state = game(5);
        let full = ColorTag::new(1, 1, 1);
        for row in 1..15 {
            for col in 0..10 {
                if col != row as i32 % 10 {
                    state.board_mut().set(row, col, BoardCell::occupied(full));
                }
            }
        }
        state.set_active(Piece::new(dot(), 5, 0, full));
        assert!(state.soft_drop());
        assert!(state.is_game_over());
        assert!(state.take_last_event().unwrap().game_over);

        let snapshot = (state.active().clone(), state.board().clone(), state.score());
        assert!(!state.move_left());
        assert!(!state.move_right());
        assert!(!state.rotate());
        assert!(!state.soft_drop());
        assert!(!state.tick(Instant::now()));
        assert!(!state.tick(Instant::now() + Duration::from_secs(60)));
        assert_eq!(
            (state.active().clone(), state.board().clone(), state.score()),
            snapshot
        );

        assert!(state.apply_action(GameAction::Restart));
        assert_eq!(state.phase(), Phase::Playing);
        assert_eq!(state.score(), 0);
        assert_eq!(state.board().occupied_count(), 0);
    }

    #[test]
    fn test_restart_ignored_while_playing() {
        let mut state = game(5);
        state.soft_drop();
        assert!(!state.restart());
        assert_eq!(state.phase(), Phase::Playing);
    }

    #[test]
    fn test_apply_action_dispatch() {
        let mut state = game(5);
        state.set_active(Piece::spawn(PieceKind::T, 4, 3));
        assert!(state.apply_action(GameAction::MoveLeft));
        assert!(state.apply_action(GameAction::MoveRight));
        assert!(state.apply_action(GameAction::Rotate));
        assert!(state.apply_action(GameAction::SoftDrop));
        assert_eq!((state.active().x, state.active().y), (4, 4));
    }
}
