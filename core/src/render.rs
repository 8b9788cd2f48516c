use core::fmt::{Display, Formatter, Write};
use serde::{Deserialize, Serialize};

use crate::*;

/// 24-bit `0xRRGGBB` color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u32);

impl Rgb {
    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn b(self) -> u8 {
        self.0 as u8
    }
}

impl Cell {
    /// Display color, distinct for every occupant on and off a goal (walls excepted).
    pub const fn color(self) -> Rgb {
        use Occupant::*;
        Rgb(match (self.occupant, self.on_goal) {
            (Empty, false) => 0x000000,
            (Empty, true) => 0x0000ff,
            (Wall, _) => 0xffffff,
            (Block, false) => 0xff0000,
            (Block, true) => 0xff00ff,
            (Player, false) => 0x00ff00,
            (Player, true) => 0x00ffff,
        })
    }
}

/// Renders one stage symbol per cell, every row terminated by a newline.
impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        for row in self.rows() {
            for cell in row {
                f.write_char(cell.glyph())?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}
