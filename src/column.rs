// Copyright (c) 2026 rezky_nightky

use crate::cell::Cell;
use crate::charset::GlyphSource;
use crate::gradient::{gradient, Rgb, HEAD_COLOR};
use crate::rng::RandomSource;
use crate::screen::ScreenBuffer;

/// One falling trail, bound to a single grid column for its whole life.
pub struct Column {
    index: u16,
    progress: u16,
    trail_len: u16,
    bright_head: bool,
}

impl Column {
    pub fn new(index: u16, trail_len: u16, bright_head: bool) -> Self {
        Self {
            index,
            progress: 0,
            trail_len,
            bright_head,
        }
    }

    #[allow(dead_code)]
    pub fn index(&self) -> u16 {
        self.index
    }

    #[allow(dead_code)]
    pub fn progress(&self) -> u16 {
        self.progress
    }

    /// Trail length including the extra lead row when the bright head is on.
    pub fn length(&self) -> u16 {
        if self.bright_head {
            self.trail_len + 1
        } else {
            self.trail_len
        }
    }

    pub fn advance(&mut self) {
        self.progress += 1;
    }

    /// True once the whole trail, faded tail included, has scrolled past the
    /// bottom edge. The last on-screen frame of a finishing column is fully
    /// blank, so retiring here never leaves stale cells behind.
    pub fn finished(&self, height: u16) -> bool {
        self.progress as u32 >= height as u32 + self.length() as u32
    }

    /// Rebuilds this column for the current progress and replaces its slice
    /// of the screen buffer. The lead cell (if enabled) is drawn at row
    /// `progress` in the fixed head color; the tail fades upward from it.
    /// Every visible cell re-rolls its glyph, so trails flicker.
    pub fn render(
        &self,
        glyphs: &GlyphSource,
        rng: &mut dyn RandomSource,
        base: Rgb,
        buf: &mut ScreenBuffer,
    ) {
        let height = buf.height();
        let at = self.progress as i32;
        let start = if self.bright_head { at - 1 } else { at };

        let mut column = vec![Cell::BLANK; height as usize];

        if self.bright_head && at < height as i32 {
            column[at as usize] = Cell::glyph(glyphs.next(rng), HEAD_COLOR);
        }

        let mut row = start;
        while row > -1 && row > start - self.trail_len as i32 {
            if row < height as i32 {
                let pos = (at - row - i32::from(self.bright_head)) as u16;
                column[row as usize] =
                    Cell::glyph(glyphs.next(rng), gradient(base, self.trail_len, pos));
            }
            row -= 1;
        }

        buf.set_column(self.index, &column);
    }
}
