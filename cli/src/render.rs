use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use pushbox_core::{Cell, Grid};
use std::io::{self, Write};

/// Draws the grid between turns. Renderers only ever read the grid.
pub trait Renderer {
    fn draw(&mut self, grid: &Grid) -> io::Result<()>;

    fn message(&mut self, text: &str) -> io::Result<()>;
}

/// Prints the stage symbols, one line per row.
#[derive(Debug)]
pub struct TextRenderer<W> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn draw(&mut self, grid: &Grid) -> io::Result<()> {
        write!(self.out, "{}", grid)?;
        self.out.flush()
    }

    fn message(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)?;
        self.out.flush()
    }
}

/// Clears the terminal and paints every cell with its occupant color.
#[derive(Debug)]
pub struct ColorRenderer<W> {
    out: W,
}

impl<W: Write> ColorRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn paint(&mut self, cell: Cell) -> io::Result<()> {
        let rgb = cell.color();
        let background = Color::Rgb {
            r: rgb.r(),
            g: rgb.g(),
            b: rgb.b(),
        };
        // keep the glyph readable on light cells
        let luma = u16::from(rgb.r()) + u16::from(rgb.g()) + u16::from(rgb.b());
        let foreground = if luma > 382 { Color::Black } else { Color::White };
        let glyph = cell.glyph();

        queue!(
            self.out,
            SetBackgroundColor(background),
            SetForegroundColor(foreground),
            Print(glyph),
            Print(' ')
        )
    }
}

impl<W: Write> Renderer for ColorRenderer<W> {
    fn draw(&mut self, grid: &Grid) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        for row in grid.rows() {
            for cell in row {
                self.paint(cell)?;
            }
            queue!(self.out, ResetColor, Print('\n'))?;
        }
        self.out.flush()
    }

    fn message(&mut self, text: &str) -> io::Result<()> {
        queue!(self.out, ResetColor, Print(text), Print('\n'))?;
        self.out.flush()
    }
}
