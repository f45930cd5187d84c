//! Terminal front end.
//!
//! Renders the engine's [`core::GameSnapshot`] into a framebuffer of styled
//! cells and flushes it to the terminal, redrawing only what changed.
//!
//! - [`fb`]: framebuffer, cells and colors
//! - [`game_view`]: snapshot -> framebuffer (pure, no I/O)
//! - [`renderer`]: framebuffer -> terminal

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use falling_blocks_core as core;
pub use falling_blocks_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{piece_color, GameView, SessionStatus, Viewport};
pub use renderer::{encode_frame_into, TerminalRenderer};
