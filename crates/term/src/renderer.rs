//! TerminalRenderer: flushes rendered frame text to a real terminal.
//!
//! Frames arrive as text with one line per screen row. After the first full
//! redraw only rows that differ from the previous frame are re-printed.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Print, ResetColor, SetAttribute},
    terminal, QueueableCommand,
};

use crate::panel::WIDE_PAD;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<String>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw.
    ///
    /// Useful on terminal resize events.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a frame, diffing against the previously drawn one.
    pub fn draw(&mut self, frame: &str) -> Result<()> {
        if self.last.as_deref() == Some(frame) {
            return Ok(());
        }

        self.buf.clear();
        match self.last.as_deref() {
            Some(prev) if prev.lines().count() == frame.lines().count() => {
                encode_diff_into(prev, frame, &mut self.buf)?;
            }
            _ => encode_full_into(frame, &mut self.buf)?,
        }
        self.flush_buf()?;

        let last = self.last.get_or_insert_with(String::new);
        last.clear();
        last.push_str(frame);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(frame: &str, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    let rows = frame.lines().count();
    for (y, line) in frame.lines().enumerate() {
        print_row(out, line)?;
        if y + 1 < rows {
            out.queue(Print("\r\n"))?;
        }
    }

    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode a diff redraw (changed rows) into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_diff_into(prev: &str, next: &str, out: &mut Vec<u8>) -> Result<()> {
    for_each_changed_row(prev, next, |y, line| {
        out.queue(cursor::MoveTo(0, y))?;
        out.queue(terminal::Clear(terminal::ClearType::CurrentLine))?;
        print_row(out, line)?;
        Ok(())
    })?;

    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

// Pad cells stand in for the second column of a wide glyph the terminal
// already advanced past.
fn print_row(out: &mut Vec<u8>, line: &str) -> Result<()> {
    for ch in line.chars().filter(|&ch| ch != WIDE_PAD) {
        out.queue(Print(ch))?;
    }
    Ok(())
}

fn for_each_changed_row(
    prev: &str,
    next: &str,
    mut f: impl FnMut(u16, &str) -> Result<()>,
) -> Result<()> {
    let mut prev_lines = prev.lines();
    for (y, line) in next.lines().enumerate() {
        if prev_lines.next() == Some(line) {
            continue;
        }
        let y = u16::try_from(y).unwrap_or(u16::MAX);
        f(y, line)?;
    }
    Ok(())
}
