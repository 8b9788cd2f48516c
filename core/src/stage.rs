use core::str::FromStr;

use crate::*;

/// What the sizing pass learned about a stage buffer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct StageShape {
    /// Longest run of stage symbols on a single row.
    pub width: usize,
    /// Newline-terminated rows, plus a final unterminated row holding stage symbols.
    pub height: usize,
    pub players: CellCount,
    /// Bytes that are neither stage symbols nor row breaks, `\r` included.
    pub skipped: usize,
}

impl StageShape {
    pub fn measure(data: &[u8]) -> Self {
        let mut shape = Self::default();
        let mut run = 0usize;

        for &byte in data {
            if byte == b'\n' {
                shape.width = shape.width.max(run);
                shape.height += 1;
                run = 0;
                continue;
            }
            match Cell::from_glyph(byte) {
                Some(cell) => {
                    run += 1;
                    if cell.occupant.is_player() {
                        shape.players = shape.players.saturating_add(1);
                    }
                }
                None => shape.skipped += 1,
            }
        }

        if run > 0 {
            shape.width = shape.width.max(run);
            shape.height += 1;
        }

        shape
    }

    /// A buffer without any stage symbol describes no cells at all.
    pub const fn is_empty(&self) -> bool {
        self.width == 0
    }
}

impl Grid {
    /// Builds the initial grid from a raw stage buffer.
    ///
    /// Locations a row never reaches stay off-goal walls. A buffer without stage symbols gives the
    /// empty 0x0 grid, any other stage must hold exactly one player.
    pub fn from_stage(data: &[u8]) -> Result<Self> {
        let shape = StageShape::measure(data);

        if shape.is_empty() {
            log::debug!("Stage buffer of {} bytes has no cells", data.len());
            return Ok(Self::empty());
        }

        if shape.players != 1 {
            return Err(GameError::MalformedStage {
                players: shape.players,
            });
        }

        let width: Coord = shape
            .width
            .try_into()
            .map_err(|_| GameError::StageTooLarge)?;
        let height: Coord = shape
            .height
            .try_into()
            .map_err(|_| GameError::StageTooLarge)?;

        if shape.skipped > 0 {
            log::warn!("Skipped {} unknown bytes in stage buffer", shape.skipped);
        }

        let mut grid = Self::new((width, height));
        let (mut x, mut y) = (0usize, 0usize);
        for &byte in data {
            if byte == b'\n' {
                x = 0;
                y += 1;
                continue;
            }
            if let Some(cell) = Cell::from_glyph(byte) {
                // x < width and y < height by construction of the shape
                grid.set((x as Coord, y as Coord), cell)?;
                x += 1;
            }
        }

        log::debug!("Parsed {}x{} stage", width, height);
        Ok(grid)
    }
}

impl FromStr for Grid {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_stage(s.as_bytes())
    }
}
