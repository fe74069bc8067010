// Copyright (c) 2026 rezky_nightky

use std::collections::VecDeque;
use std::io::{Error, ErrorKind, Result};

use crate::gradient::{to_hex, Rgb};
use crate::rng::RandomSource;
use crate::terminal::Surface;

/// One emitted cell: the move target plus the glyph that followed it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Op {
    pub x: u16,
    pub y: u16,
    pub ch: char,
    pub fg: Option<String>,
}

#[derive(Default)]
pub struct RecordingSurface {
    pub ops: Vec<Op>,
    pub presented: u32,
    pending: Option<(u16, u16)>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Surface for RecordingSurface {
    fn move_to(&mut self, x: u16, y: u16) -> Result<()> {
        self.pending = Some((x, y));
        Ok(())
    }

    fn write_glyph(&mut self, ch: char, fg: Option<Rgb>) -> Result<()> {
        let (x, y) = self.pending.take().expect("glyph without a cursor move");
        self.ops.push(Op {
            x,
            y,
            ch,
            fg: fg.map(to_hex),
        });
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        self.presented += 1;
        Ok(())
    }
}

/// Fails every call after the first `ok` glyph writes have gone through.
pub struct FailAfter {
    ok: u32,
}

impl FailAfter {
    pub fn new(ok: u32) -> Self {
        Self { ok }
    }
}

impl Surface for FailAfter {
    fn move_to(&mut self, _x: u16, _y: u16) -> Result<()> {
        Ok(())
    }

    fn write_glyph(&mut self, _ch: char, _fg: Option<Rgb>) -> Result<()> {
        if self.ok == 0 {
            return Err(Error::new(ErrorKind::BrokenPipe, "surface gone"));
        }
        self.ok -= 1;
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        if self.ok == 0 {
            return Err(Error::new(ErrorKind::BrokenPipe, "surface gone"));
        }
        Ok(())
    }
}

/// Replays a fixed sequence of values; once exhausted it returns `min`,
/// which keeps follow-on draws deterministic without scripting every roll.
#[derive(Default)]
pub struct ScriptedRandom {
    values: VecDeque<u16>,
}

impl ScriptedRandom {
    pub fn new(values: impl IntoIterator<Item = u16>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn uniform(&mut self, min: u16, max: u16) -> u16 {
        match self.values.pop_front() {
            Some(v) => v.clamp(min, max),
            None => min,
        }
    }
}
