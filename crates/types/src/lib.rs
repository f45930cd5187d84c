//! Shared types and constants for the falling-block game.
//!
//! Everything in this crate is plain data with no dependencies, so it can be
//! used by the simulation core, the terminal front end and the input mapping
//! without pulling any of them into each other.
//!
//! # Grid
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//!
//! Rows above the visible grid (negative `y`) are legal piece positions and are
//! never checked against locked cells.
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 16 | Driver frame interval (~60 FPS) |
//! | `BASE_FALL_MS` | 1000 | Gravity interval at level 1 |
//! | `FALL_STEP_MS` | 100 | Gravity speed-up per level |
//! | `MIN_FALL_MS` | 100 | Fastest gravity interval |
//!
//! # Scoring
//!
//! A clear of `n` rows at level `L` scores `n * 100 * L`. Four rows at once add
//! a further `400 * L` on top of that, so a four-row clear is worth `800 * L`.
//! Soft drop earns 1 point per row and hard drop 2 points per row.
//!
//! # Examples
//!
//! ```
//! use falling_blocks_types::{GameAction, PieceKind, Rotation, GRID_HEIGHT, GRID_WIDTH};
//!
//! assert_eq!(PieceKind::T.color_id(), 3);
//! assert_eq!(PieceKind::from_color_id(3), Some(PieceKind::T));
//!
//! assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
//! assert_eq!(Rotation::from_quarter_turns(-1), Rotation::West);
//!
//! assert_eq!(GameAction::HardDrop.as_str(), "hardDrop");
//!
//! assert_eq!(GRID_WIDTH, 10);
//! assert_eq!(GRID_HEIGHT, 20);
//! ```

/// Grid width in cells (10 columns)
pub const GRID_WIDTH: u8 = 10;

/// Grid height in cells (20 rows)
pub const GRID_HEIGHT: u8 = 20;

/// Driver frame interval in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Gravity interval at level 1 (1000ms = 1 second per row)
pub const BASE_FALL_MS: u32 = 1000;

/// Gravity interval reduction per level
pub const FALL_STEP_MS: u32 = 100;

/// Fastest gravity interval
pub const MIN_FALL_MS: u32 = 100;

/// Lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Points per cleared line, multiplied by level
pub const LINE_SCORE_BASE: u32 = 100;

/// Extra points for clearing four lines at once, multiplied by level.
///
/// Added on top of the per-line score.
pub const FOUR_LINE_BONUS: u32 = 400;

/// Points per row moved by a soft drop
pub const SOFT_DROP_POINTS: u32 = 1;

/// Points per row moved by a hard drop
pub const HARD_DROP_POINTS_PER_ROW: u32 = 2;

/// Number of occupied cells in every piece
pub const CELLS_PER_PIECE: usize = 4;

/// Largest bounding box side of any piece
pub const MAX_SHAPE_SIDE: usize = 4;


/// The seven piece kinds, in the order of the canonical shape table.
///
/// The table order fixes each kind's color identity:
/// - **I** (1): cyan, horizontal bar
/// - **O** (2): yellow, 2x2 square
/// - **T** (3): purple
/// - **S** (4): green
/// - **Z** (5): red
/// - **J** (6): blue
/// - **L** (7): orange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// Every kind, in table order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Number of piece kinds.
    pub const COUNT: usize = 7;

    /// Position in the canonical shape table (0..7).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Kind at a table position.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Color identity written into the grid when this kind locks (1..=7).
    pub fn color_id(self) -> u8 {
        self as u8 + 1
    }

    /// Inverse of [`PieceKind::color_id`]; `0` and anything above 7 are not pieces.
    pub fn from_color_id(id: u8) -> Option<Self> {
        match id {
            0 => None,
            n => Self::from_index(n as usize - 1),
        }
    }

    /// Uppercase letter, as written to the log
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }
}

/// Rotation state of a piece, as a count of clockwise quarter turns mod 4.
///
/// The cycle goes: North → East → South → West → North.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    #[default]
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise (90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use falling_blocks_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Clockwise quarter turns from the spawn orientation (0..4).
    pub fn quarter_turns(self) -> u8 {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    /// Rotation after `turns` clockwise quarter turns from North.
    ///
    /// Negative counts wrap the same way, so `-1` is West.
    pub fn from_quarter_turns(turns: i32) -> Self {
        match turns.rem_euclid(4) {
            0 => Rotation::North,
            1 => Rotation::East,
            2 => Rotation::South,
            _ => Rotation::West,
        }
    }

    /// This rotation advanced by `turns` further clockwise quarter turns.
    ///
    /// `turns` is reduced mod 4 first, so any `i32` is accepted.
    pub fn offset(self, turns: i32) -> Self {
        Self::from_quarter_turns(self.quarter_turns() as i32 + turns.rem_euclid(4))
    }
}

/// Player intents coming from the input source.
///
/// Movement intents map 1:1 onto engine operations. `TogglePause` and `Quit`
/// belong to the driver loop; `Reset` is exposed by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down (1 point)
    SoftDrop,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Drop piece as far as it goes and lock it (2 points per row)
    HardDrop,
    /// Freeze or resume the simulation
    TogglePause,
    /// Start a fresh game
    Reset,
    /// Leave the game
    Quit,
}

impl GameAction {
    /// camelCase name, as written to the log
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::RotateCw => "rotateCw",
            GameAction::HardDrop => "hardDrop",
            GameAction::TogglePause => "togglePause",
            GameAction::Reset => "reset",
            GameAction::Quit => "quit",
        }
    }
}

/// A cell on the grid
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Locked block of the given kind
pub type Cell = Option<PieceKind>;

/// Emitted by the engine each time a piece locks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LockEvent {
    pub lines_cleared: u32,
    /// Points awarded for the cleared lines (zero when none cleared).
    pub line_clear_score: u32,
    /// Drop points earned by the locking move (hard drop only).
    pub drop_score: u32,
    /// The promoted piece could not be placed at spawn.
    pub game_over: bool,
}
