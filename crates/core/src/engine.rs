//! Board engine - the complete simulation state
//!
//! Ties together the grid, the active and queued pieces, the piece factory and
//! scoring. Every state transition of a game goes through [`BoardEngine`]:
//! movement, rotation, soft and hard drop, gravity ticks, locking, line clears
//! and reset.
//!
//! Rejected moves are not errors. Mutators report whether anything changed and
//! leave the state untouched otherwise. Game over is a state flag; once set,
//! movement, drops and ticks do nothing until [`BoardEngine::reset`].

use tracing::{debug, info};

use crate::factory::{Piece, PieceFactory};
use crate::grid::Grid;
use crate::scoring::{drop_score, fall_speed_ms, level_for_lines, line_clear_score};
use crate::shapes::{get_shape, ShapeCells, ShapeMatrix};
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Complete game state
#[derive(Debug, Clone)]
pub struct BoardEngine {
    grid: Grid,
    current: Piece,
    next: Piece,
    factory: PieceFactory,
    score: u32,
    level: u32,
    lines: u32,
    /// Milliseconds accumulated since the last gravity step.
    fall_timer_ms: u32,
    /// Milliseconds per gravity step at the current level.
    fall_speed_ms: u32,
    game_over: bool,
    /// Last lock event (consumed by the driver).
    last_event: Option<LockEvent>,
}

impl BoardEngine {
    /// Create a new game whose pieces are drawn from a factory seeded with `seed`
    pub fn new(seed: u64) -> Self {
        Self::with_factory(PieceFactory::new(seed))
    }

    /// Create a new game drawing pieces from `factory`
    pub fn with_factory(mut factory: PieceFactory) -> Self {
        let current = factory.spawn();
        let next = factory.spawn();
        Self {
            grid: Grid::new(),
            current,
            next,
            factory,
            score: 0,
            level: 1,
            lines: 0,
            fall_timer_ms: 0,
            fall_speed_ms: BASE_FALL_MS,
            game_over: false,
            last_event: None,
        }
    }

    /// Start over: empty grid, zeroed progress, two freshly spawned pieces.
    ///
    /// The factory keeps its sequence, so a reset game gets new pieces rather
    /// than a replay of the previous one.
    pub fn reset(&mut self) {
        self.grid.clear();
        self.current = self.factory.spawn();
        self.next = self.factory.spawn();
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.fall_timer_ms = 0;
        self.fall_speed_ms = BASE_FALL_MS;
        self.game_over = false;
        self.last_event = None;
        debug!(seed = self.factory.seed(), "game reset");
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The falling piece
    pub fn current(&self) -> &Piece {
        &self.current
    }

    /// The queued piece shown in the preview
    pub fn next(&self) -> &Piece {
        &self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Total lines cleared this game
    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn fall_timer_ms(&self) -> u32 {
        self.fall_timer_ms
    }

    pub fn fall_speed_ms(&self) -> u32 {
        self.fall_speed_ms
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn seed(&self) -> u64 {
        self.factory.seed()
    }

    #[cfg(test)]
    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    #[cfg(test)]
    pub(crate) fn set_current(&mut self, piece: Piece) {
        self.current = piece;
    }

    /// Shape of `piece` after `extra_rotation` further clockwise quarter turns.
    ///
    /// Negative values wrap mod 4, so `-1` is three clockwise turns. The piece
    /// itself is not touched.
    pub fn rotated_shape(piece: &Piece, extra_rotation: i32) -> ShapeMatrix {
        get_shape(piece.kind, piece.rotation.offset(extra_rotation))
    }

    /// Whether `piece`, shifted by `(dx, dy)` and turned `d_rotation` quarter
    /// turns clockwise, fits on the grid.
    ///
    /// Every occupied cell must be inside the side walls and above the floor.
    /// Cells above the top row are never checked against the grid, so pieces
    /// may spawn and rotate partly above the visible area.
    pub fn is_valid_placement(&self, piece: &Piece, dx: i8, dy: i8, d_rotation: i32) -> bool {
        Self::rotated_shape(piece, d_rotation)
            .cells()
            .iter()
            .all(|&(cx, cy)| {
                // Widened so large offsets land off the board instead of wrapping.
                let x = i16::from(piece.x) + i16::from(cx) + i16::from(dx);
                let y = i16::from(piece.y) + i16::from(cy) + i16::from(dy);
                if x < 0 || x >= i16::from(GRID_WIDTH) || y >= i16::from(GRID_HEIGHT) {
                    return false;
                }
                y < 0 || !self.grid.is_occupied(x as i8, y as i8)
            })
    }

    /// Try to shift the active piece
    fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if self.game_over || !self.is_valid_placement(&self.current, dx, dy, 0) {
            return false;
        }
        self.current.x += dx;
        self.current.y += dy;
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.try_move(-1, 0)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_move(1, 0)
    }

    /// Move down one row for 1 point.
    ///
    /// A blocked soft drop does not lock the piece; only gravity and hard drop
    /// lock.
    pub fn soft_drop(&mut self) -> bool {
        if !self.try_move(0, 1) {
            return false;
        }
        self.score += drop_score(1, false);
        true
    }

    pub fn rotate_clockwise(&mut self) -> bool {
        if self.game_over || !self.is_valid_placement(&self.current, 0, 0, 1) {
            return false;
        }
        self.current.rotation = self.current.rotation.rotate_cw();
        true
    }

    /// Drop the active piece as far as it goes, then lock it.
    ///
    /// Earns 2 points per row descended. Returns the number of rows.
    pub fn hard_drop(&mut self) -> u32 {
        if self.game_over {
            return 0;
        }

        let mut rows: u32 = 0;
        while self.is_valid_placement(&self.current, 0, 1, 0) {
            self.current.y += 1;
            rows += 1;
        }

        let points = drop_score(rows, true);
        self.score += points;
        self.lock_with_drop_score(points);
        rows
    }

    /// Advance the fall timer by `elapsed_ms`.
    ///
    /// When the timer reaches the fall speed it restarts from zero and the
    /// piece moves down one row, or locks if it cannot. Returns true when a
    /// gravity step happened.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.game_over {
            return false;
        }

        self.fall_timer_ms = self.fall_timer_ms.saturating_add(elapsed_ms);
        if self.fall_timer_ms < self.fall_speed_ms {
            return false;
        }

        self.fall_timer_ms = 0;
        if !self.try_move(0, 1) {
            self.lock_piece();
        }
        true
    }

    /// Write the active piece into the grid, clear lines and promote the next
    /// piece.
    ///
    /// Cells above the grid are discarded. If the promoted piece does not fit
    /// at its spawn position the game is over.
    pub fn lock_piece(&mut self) {
        self.lock_with_drop_score(0);
    }

    fn lock_with_drop_score(&mut self, drop_score: u32) {
        if self.game_over {
            return;
        }

        let kind = self.current.kind;
        for (cx, cy) in Self::rotated_shape(&self.current, 0).cells() {
            let x = self.current.x + cx;
            let y = self.current.y + cy;
            if y >= 0 && y < GRID_HEIGHT as i8 {
                self.grid.set(x, y, Some(kind));
            }
        }

        let score_before = self.score;
        let lines_cleared = self.clear_lines();
        let line_clear_score = self.score - score_before;

        self.current = self.next;
        self.next = self.factory.spawn();

        if !self.is_valid_placement(&self.current, 0, 0, 0) {
            self.game_over = true;
            info!(
                score = self.score,
                level = self.level,
                lines = self.lines,
                "game over"
            );
        }

        debug!(
            kind = kind.as_str(),
            lines_cleared, line_clear_score, drop_score, "piece locked"
        );

        self.last_event = Some(LockEvent {
            lines_cleared,
            line_clear_score,
            drop_score,
            game_over: self.game_over,
        });
    }

    /// Remove every full row and award points for them.
    ///
    /// `n` rows score `n * 100 * level`, and exactly four rows add a further
    /// `400 * level`. Level and fall speed are then recomputed from the new
    /// line total. Returns the number of rows removed.
    pub fn clear_lines(&mut self) -> u32 {
        let cleared = self.grid.clear_full_rows().len() as u32;
        if cleared == 0 {
            return 0;
        }

        self.lines += cleared;
        self.score += line_clear_score(cleared, self.level);

        let level = level_for_lines(self.lines);
        if level != self.level {
            debug!(from = self.level, to = level, "level up");
        }
        self.level = level;
        self.fall_speed_ms = fall_speed_ms(level);

        cleared
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Apply an intent from the input source.
    ///
    /// `TogglePause` and `Quit` belong to the driver and are ignored here.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::RotateCw => self.rotate_clockwise(),
            GameAction::HardDrop => {
                if self.game_over {
                    return false;
                }
                self.hard_drop();
                true
            }
            GameAction::Reset => {
                self.reset();
                true
            }
            GameAction::TogglePause | GameAction::Quit => false,
        }
    }

    /// Grid cells covered by the active piece (rows may be negative)
    pub fn active_cells(&self) -> ShapeCells {
        Self::rotated_shape(&self.current, 0)
            .cells()
            .into_iter()
            .map(|(cx, cy)| {
                (
                    self.current.x.saturating_add(cx),
                    self.current.y.saturating_add(cy),
                )
            })
            .collect()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.grid.write_color_grid(&mut out.grid);
        out.active = if self.game_over {
            None
        } else {
            Some(self.current.into())
        };
        out.next = self.next.kind;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.fall_speed_ms = self.fall_speed_ms;
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for BoardEngine {
    fn default() -> Self {
        Self::new(1)
    }
}
