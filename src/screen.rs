// Copyright (c) 2026 rezky_nightky

use std::io::Result;

use crate::cell::Cell;
use crate::terminal::Surface;

/// Double-buffered cell grid. `cells` is the frame being built this tick;
/// `last` is exactly what the terminal currently shows. `flush` emits only
/// the cells where the two differ, then promotes current to last.
pub struct ScreenBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
    last: Option<Vec<Cell>>,
}

impl ScreenBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![Cell::BLANK; len],
            last: None,
        }
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    #[allow(dead_code)]
    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.index(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Replaces column `x` top to bottom. Entries beyond the grid height are
    /// ignored; a short slice leaves the remaining rows untouched.
    pub fn set_column(&mut self, x: u16, column: &[Cell]) {
        for (y, &cell) in column.iter().enumerate() {
            if y >= self.height as usize {
                break;
            }
            self.set(x, y as u16, cell);
        }
    }

    /// Emits every cell that differs from the last flushed frame, each as a
    /// cursor move followed by the glyph. The very first flush paints the
    /// whole grid. `last` is snapshotted only after every emit succeeded, so
    /// a failed flush leaves the previous-frame invariant intact and the
    /// next flush re-emits the missed cells.
    pub fn flush(&mut self, out: &mut dyn Surface) -> Result<()> {
        for y in 0..self.height {
            for x in 0..self.width {
                let i = y as usize * self.width as usize + x as usize;
                let cell = self.cells[i];
                if let Some(last) = &self.last {
                    if last[i] == cell {
                        continue;
                    }
                }
                out.move_to(x, y)?;
                out.write_glyph(cell.ch, cell.fg)?;
            }
        }
        out.present()?;

        match &mut self.last {
            Some(last) => last.copy_from_slice(&self.cells),
            None => self.last = Some(self.cells.clone()),
        }
        Ok(())
    }
}
