#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use grid::*;
pub use render::*;
pub use stage::*;
pub use types::*;

mod cell;
mod clear;
mod engine;
mod error;
mod grid;
mod moves;
mod render;
mod stage;
mod types;

/// Outcome of resolving one directional command
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The move was blocked, or had no displacement
    NoChange,
    /// The player stepped into an empty cell
    Walked,
    /// The player pushed a block one cell ahead
    Pushed,
}

impl MoveOutcome {
    /// Whether this outcome changed the grid
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Walked => true,
            Self::Pushed => true,
        }
    }
}
