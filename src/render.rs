use std::io;
use std::io::Write;

use crossterm::cursor;
use crossterm::queue;
use crossterm::style;
use crossterm::terminal;

use crate::grid::Grid;

/// Characters drawn for live and dead cells
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Glyphs {
    pub alive: char,
    pub dead: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            alive: '█',
            dead: ' ',
        }
    }
}

/// Draws `grid` as text, one line per row. Every line, the last included, ends in `\n`.
pub fn render(grid: &Grid, glyphs: Glyphs) -> String {
    // Each row takes `width` glyphs of up to 4 bytes, plus the newline
    let mut fb = String::with_capacity(grid.height() * (4 * grid.width() + 1));

    for row in grid.rows() {
        for &alive in row {
            fb.push(if alive { glyphs.alive } else { glyphs.dead });
        }
        fb.push('\n');
    }

    fb
}

/// Receives the frames of a running simulation
pub trait Renderer {
    /// Show generation `index`
    fn generation(&mut self, index: usize, grid: &Grid) -> io::Result<()>;

    /// The simulation stopped early at generation `index` because it repeated itself
    fn stabilized(&mut self, index: usize) -> io::Result<()>;
}

/// Prints every generation to a terminal, or anything else that is `Write`.
pub struct TerminalRenderer<W: Write> {
    out: W,
    glyphs: Glyphs,

    /// Clear the screen before each generation instead of scrolling
    clear: bool,
}

impl TerminalRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            glyphs: Glyphs::default(),
            clear: false,
        }
    }

    pub fn with_glyphs(mut self, glyphs: Glyphs) -> Self {
        self.glyphs = glyphs;
        self
    }

    pub fn with_clear(mut self, clear: bool) -> Self {
        self.clear = clear;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn generation(&mut self, index: usize, grid: &Grid) -> io::Result<()> {
        if self.clear {
            queue!(
                self.out,
                terminal::Clear(terminal::ClearType::All),
                cursor::MoveTo(0, 0)
            )?;
        }

        queue!(
            self.out,
            style::Print(format!("Generation {index}:\n")),
            style::Print(render(grid, self.glyphs)),
            style::Print("\n")
        )?;

        self.out.flush()
    }

    fn stabilized(&mut self, _index: usize) -> io::Result<()> {
        queue!(self.out, style::Print("Board stabilized - exiting early\n"))?;

        self.out.flush()
    }
}
