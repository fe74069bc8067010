// Copyright (c) 2026 rezky_nightky

use std::io::Result;

use crate::charset::GlyphSource;
use crate::column::Column;
use crate::config::Config;
use crate::gradient::Rgb;
use crate::rng::RandomSource;
use crate::screen::ScreenBuffer;
use crate::terminal::Surface;

/// The per-tick state machine: one slot per grid column, at most one live
/// trail per slot. Each tick retires finished trails, rolls spawn attempts
/// into empty slots, renders and advances every live trail, then flushes
/// the diff once.
pub struct Rain {
    width: u16,
    height: u16,
    base_color: Rgb,
    bright_head: bool,
    spawn_tries: u16,
    trail_len: u16,
    pub(crate) slots: Vec<Option<Column>>,
    pub(crate) buffer: ScreenBuffer,
    glyphs: GlyphSource,
}

impl Rain {
    pub fn new(cfg: &Config, width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            base_color: cfg.base_color,
            bright_head: cfg.bright_head,
            spawn_tries: cfg.spawn_tries,
            trail_len: cfg.trail_len,
            slots: (0..width).map(|_| None).collect(),
            buffer: ScreenBuffer::new(width, height),
            glyphs: GlyphSource::new(cfg.chars.clone()),
        }
    }

    /// One animation step: retire, spawn, render+advance, flush.
    pub fn tick(&mut self, rng: &mut dyn RandomSource, out: &mut dyn Surface) -> Result<()> {
        self.retire();
        self.spawn(rng);

        for slot in self.slots.iter_mut().flatten() {
            slot.render(&self.glyphs, rng, self.base_color, &mut self.buffer);
            slot.advance();
        }

        self.buffer.flush(out)
    }

    fn retire(&mut self) {
        let height = self.height;
        for slot in &mut self.slots {
            if slot.as_ref().is_some_and(|c| c.finished(height)) {
                *slot = None;
            }
        }
    }

    pub(crate) fn spawn(&mut self, rng: &mut dyn RandomSource) {
        if self.width == 0 {
            return;
        }
        for _ in 0..self.spawn_tries {
            let index = rng.uniform(0, self.width - 1);
            let slot = &mut self.slots[index as usize];
            if slot.is_none() {
                *slot = Some(Column::new(index, self.trail_len, self.bright_head));
            }
        }
    }

    /// Rebuilds slots and buffer for new terminal dimensions. Live trails
    /// are dropped; the next flush repaints the whole grid.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.slots = (0..width).map(|_| None).collect();
        self.buffer = ScreenBuffer::new(width, height);
    }
}
