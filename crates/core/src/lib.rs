//! Core simulation for the falling-block game - pure and deterministic
//!
//! This crate holds every game rule and no UI, input or I/O:
//!
//! - **Deterministic**: pieces come from a seeded factory, and time only moves
//!   when the caller passes elapsed milliseconds to [`BoardEngine::tick`]
//! - **Testable**: every rule is a plain method on owned state
//! - **Allocation-free**: the grid is a flat array and shapes are fixed 4x4 matrices
//!
//! # Module Structure
//!
//! - [`shapes`]: the seven canonical layouts and clockwise rotation
//! - [`factory`]: [`Piece`] and the seeded, uniform [`PieceFactory`]
//! - [`grid`]: 10x20 playfield with row clearing
//! - [`scoring`]: line-clear and drop points, level and gravity speed
//! - [`engine`]: [`BoardEngine`], the full state-transition API
//! - [`snapshot`]: read-only model handed to renderers
//!
//! # Example
//!
//! ```
//! use falling_blocks_core::BoardEngine;
//! use falling_blocks_types::GameAction;
//!
//! let mut game = BoardEngine::new(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::RotateCw);
//! game.apply_action(GameAction::HardDrop);
//!
//! // Hard drop from the top row always descends, at 2 points per row.
//! assert!(game.score() > 0);
//! ```
//!
//! # Timing
//!
//! Gravity starts at one row per 1000ms and speeds up by 100ms per level down
//! to 100ms. Call [`BoardEngine::tick`] every frame with the elapsed time.

pub mod engine;
pub mod factory;
pub mod grid;
pub mod scoring;
pub mod shapes;
pub mod snapshot;

pub use falling_blocks_types as types;

pub use engine::BoardEngine;
pub use factory::{spawn_position, Piece, PieceFactory};
pub use grid::Grid;
pub use scoring::{drop_score, fall_speed_ms, level_for_lines, line_clear_score};
pub use shapes::{canonical_shape, get_shape, ShapeCells, ShapeMatrix};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
