// Copyright (c) 2026 rezky_nightky

use std::io::{stdout, Result, Stdout, Write};

use crossterm::{
    cursor, event,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal, ExecutableCommand, QueueableCommand,
};

use crate::gradient::Rgb;

/// The raw draw capability the screen buffer flushes into. Coordinates are
/// 0-indexed; the crossterm backend translates to terminal addressing.
pub trait Surface {
    fn move_to(&mut self, x: u16, y: u16) -> Result<()>;
    fn write_glyph(&mut self, ch: char, fg: Option<Rgb>) -> Result<()>;
    fn present(&mut self) -> Result<()>;
}

pub struct Terminal {
    stdout: Stdout,
    cur_fg: Option<Rgb>,
    fg_known: bool,
}

impl Terminal {
    pub fn new() -> Result<Self> {
        let mut out = stdout();
        terminal::enable_raw_mode()?;
        let init_res: Result<()> = (|| {
            out.execute(terminal::EnterAlternateScreen)?;
            out.execute(cursor::Hide)?;
            let _ = out.execute(terminal::DisableLineWrap);
            out.execute(ResetColor)?;
            out.execute(terminal::Clear(terminal::ClearType::All))?;
            out.flush()?;
            Ok(())
        })();
        if let Err(e) = init_res {
            restore_terminal_best_effort();
            return Err(e);
        }
        Ok(Self {
            stdout: out,
            cur_fg: None,
            fg_known: false,
        })
    }

    pub fn size(&self) -> Result<(u16, u16)> {
        terminal::size()
    }

    pub fn poll_event(timeout: std::time::Duration) -> Result<bool> {
        event::poll(timeout)
    }

    pub fn read_event() -> Result<event::Event> {
        event::read()
    }
}

impl Surface for Terminal {
    fn move_to(&mut self, x: u16, y: u16) -> Result<()> {
        self.stdout.queue(cursor::MoveTo(x, y))?;
        Ok(())
    }

    fn write_glyph(&mut self, ch: char, fg: Option<Rgb>) -> Result<()> {
        if !self.fg_known || fg != self.cur_fg {
            match fg {
                Some([r, g, b]) => {
                    self.stdout.queue(SetForegroundColor(Color::Rgb { r, g, b }))?;
                }
                None => {
                    self.stdout.queue(SetForegroundColor(Color::Reset))?;
                }
            }
            self.cur_fg = fg;
            self.fg_known = true;
        }
        self.stdout.queue(Print(ch))?;
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.fg_known = false;
        self.stdout.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        restore_terminal_best_effort();
    }
}

pub fn restore_terminal_best_effort() {
    let mut out = stdout();
    let _ = out.execute(ResetColor);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::EnableLineWrap);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
    let _ = out.flush();
}
