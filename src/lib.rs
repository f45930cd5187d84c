//! Falling blocks (workspace facade crate).
//!
//! Re-exports the member crates under `falling_blocks::{core,input,term,types}`
//! and hosts the command-line configuration shared by the default binary.

pub mod cli;

pub use falling_blocks_core as core;
pub use falling_blocks_input as input;
pub use falling_blocks_term as term;
pub use falling_blocks_types as types;
