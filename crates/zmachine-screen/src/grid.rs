//! A character-cell grid that remembers the colours it was painted with.
//!
//! Enough of a screen to answer "what is under the cursor". Real front-ends
//! implement [`CellInspector`] over their own surfaces.

use zmachine_colour::{Channel, Colour};
use zmachine_core::{Observable, Value};

use crate::{CellInspector, ScreenColours};

/// One painted character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub foreground: Colour,
    pub background: Colour,
}

/// Fixed-size text grid. Cells start unpainted.
pub struct TextGrid {
    width: u16,
    height: u16,
    cells: Vec<Option<Cell>>,
    cursor_x: u16,
    cursor_y: u16,
}

impl TextGrid {
    /// A grid of at least 1x1 cells.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            cells: vec![None; usize::from(width) * usize::from(height)],
            cursor_x: 0,
            cursor_y: 0,
        }
    }

    #[must_use]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u16 {
        self.height
    }

    #[must_use]
    pub fn cursor(&self) -> (u16, u16) {
        (self.cursor_x, self.cursor_y)
    }

    /// Move the cursor, clamped to the grid.
    pub fn move_cursor(&mut self, x: u16, y: u16) {
        self.cursor_x = x.min(self.width - 1);
        self.cursor_y = y.min(self.height - 1);
    }

    fn index(&self, x: u16, y: u16) -> usize {
        usize::from(y) * usize::from(self.width) + usize::from(x)
    }

    #[must_use]
    pub fn cell(&self, x: u16, y: u16) -> Option<Cell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells[self.index(x, y)]
    }

    /// Paint `ch` at the cursor in the active colours and advance.
    ///
    /// Wraps to the next line at the right edge, and back to the top
    /// after the last cell.
    pub fn put_char(&mut self, ch: char, colours: &ScreenColours) {
        let idx = self.index(self.cursor_x, self.cursor_y);
        self.cells[idx] = Some(Cell {
            ch,
            foreground: colours.foreground(),
            background: colours.background(),
        });

        self.cursor_x += 1;
        if self.cursor_x == self.width {
            self.cursor_x = 0;
            self.cursor_y = (self.cursor_y + 1) % self.height;
        }
    }

    /// Forget everything painted and home the cursor.
    pub fn clear(&mut self) {
        self.cells.fill(None);
        self.cursor_x = 0;
        self.cursor_y = 0;
    }
}

impl CellInspector for TextGrid {
    fn colour_at_cursor(&self, channel: Channel) -> Option<Colour> {
        self.cell(self.cursor_x, self.cursor_y).map(|cell| match channel {
            Channel::Foreground => cell.foreground,
            Channel::Background => cell.background,
        })
    }
}

impl Observable for TextGrid {
    fn query(&self, path: &str) -> Option<Value> {
        match path {
            "width" => Some(self.width.into()),
            "height" => Some(self.height.into()),
            "cursor.x" => Some(self.cursor_x.into()),
            "cursor.y" => Some(self.cursor_y.into()),
            _ => None,
        }
    }

    fn query_paths(&self) -> &'static [&'static str] {
        &["width", "height", "cursor.x", "cursor.y"]
    }
}
