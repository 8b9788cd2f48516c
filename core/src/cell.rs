use serde::{Deserialize, Serialize};

/// What currently stands on a grid location.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Occupant {
    Empty,
    Wall,
    Block,
    Player,
}

impl Occupant {
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    pub const fn is_block(self) -> bool {
        matches!(self, Self::Block)
    }

    pub const fn is_player(self) -> bool {
        matches!(self, Self::Player)
    }
}

impl Default for Occupant {
    fn default() -> Self {
        Self::Wall
    }
}

/// A grid location: its current occupant and whether the location is a goal.
///
/// The goal flag belongs to the location, so it stays put while players and blocks move across it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub occupant: Occupant,
    pub on_goal: bool,
}

impl Cell {
    /// Fill value for locations the stage never describes.
    pub const WALL: Self = Self::new(Occupant::Wall, false);

    pub const fn new(occupant: Occupant, on_goal: bool) -> Self {
        Self { occupant, on_goal }
    }

    /// Maps a stage symbol to a cell, `None` for row breaks and unknown bytes.
    pub const fn from_glyph(glyph: u8) -> Option<Self> {
        use Occupant::*;
        Some(match glyph {
            b'#' => Self::new(Wall, false),
            b' ' => Self::new(Empty, false),
            b'.' => Self::new(Empty, true),
            b'o' => Self::new(Block, false),
            b'O' => Self::new(Block, true),
            b'p' => Self::new(Player, false),
            b'P' => Self::new(Player, true),
            _ => return None,
        })
    }

    /// Stage symbol for this cell, the inverse of [`Cell::from_glyph`].
    pub const fn glyph(self) -> char {
        use Occupant::*;
        match (self.occupant, self.on_goal) {
            (Wall, _) => '#',
            (Empty, false) => ' ',
            (Empty, true) => '.',
            (Block, false) => 'o',
            (Block, true) => 'O',
            (Player, false) => 'p',
            (Player, true) => 'P',
        }
    }

    pub const fn with_occupant(self, occupant: Occupant) -> Self {
        Self::new(occupant, self.on_goal)
    }

    /// A block that still has to be pushed onto a goal.
    pub const fn is_misplaced_block(self) -> bool {
        self.occupant.is_block() && !self.on_goal
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::WALL
    }
}
