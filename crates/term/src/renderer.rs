//! TerminalRenderer: flushes framebuffers to a real terminal.
//!
//! The renderer keeps the last frame it sent and only emits the runs of
//! glyphs that changed since then. Encoding is split from writing so the
//! byte stream can be inspected without a terminal.

use std::io::{self, Write};

use anyhow::{Context, Result};

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{FrameBuffer, Rgb, Style};

/// A horizontal run of changed glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub x: u16,
    pub y: u16,
    pub len: u16,
}

pub struct TerminalRenderer {
    stdout: io::Stdout,
    front: Option<FrameBuffer>,
    bytes: Vec<u8>,
    active: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            front: None,
            bytes: Vec::with_capacity(32 * 1024),
            active: false,
        }
    }

    /// Switch to raw mode on the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("enable raw mode")?;
        self.active = true;
        self.bytes.clear();
        self.bytes.queue(terminal::EnterAlternateScreen)?;
        self.bytes.queue(cursor::Hide)?;
        self.bytes.queue(terminal::DisableLineWrap)?;
        self.flush()
    }

    /// Give the terminal back. Safe to call more than once.
    pub fn leave(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        self.bytes.clear();
        self.bytes.queue(ResetColor)?;
        self.bytes.queue(SetAttribute(Attribute::Reset))?;
        self.bytes.queue(terminal::EnableLineWrap)?;
        self.bytes.queue(cursor::Show)?;
        self.bytes.queue(terminal::LeaveAlternateScreen)?;
        self.flush()?;
        terminal::disable_raw_mode().context("disable raw mode")?;
        Ok(())
    }

    /// Force the next frame to be sent in full, e.g. after a resize.
    pub fn invalidate(&mut self) {
        self.front = None;
    }

    /// Send `frame` to the terminal.
    ///
    /// The caller's buffer is swapped with the previously presented one, so
    /// callers should keep a single framebuffer and redraw it every frame.
    pub fn present(&mut self, frame: &mut FrameBuffer) -> Result<()> {
        self.bytes.clear();
        let mut back = match self.front.take() {
            Some(prev) if prev.width() == frame.width() && prev.height() == frame.height() => {
                encode_changes(&prev, frame, &mut self.bytes)?;
                prev
            }
            Some(mut prev) => {
                encode_full(frame, &mut self.bytes)?;
                prev.resize(frame.width(), frame.height());
                prev
            }
            None => {
                encode_full(frame, &mut self.bytes)?;
                FrameBuffer::new(frame.width(), frame.height())
            }
        };
        self.flush()?;

        std::mem::swap(&mut back, frame);
        self.front = Some(back);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout
            .write_all(&self.bytes)
            .and_then(|_| self.stdout.flush())
            .context("write to terminal")
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        // Best effort: a panic or early return must not leave the terminal raw.
        let _ = self.leave();
    }
}

/// Encode a whole frame into `out`.
pub fn encode_full(frame: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut pen = Pen::default();
    for y in 0..frame.height() {
        out.queue(cursor::MoveTo(0, y))?;
        for glyph in frame.row(y) {
            pen.draw(out, glyph.ch, glyph.style)?;
        }
    }
    reset_into(out)
}

/// Encode only the glyphs that differ between `prev` and `next`.
pub fn encode_changes(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let spans = changed_spans(prev, next);
    if spans.is_empty() {
        return Ok(());
    }

    let mut pen = Pen::default();
    for span in spans {
        out.queue(cursor::MoveTo(span.x, span.y))?;
        let row = next.row(span.y);
        for glyph in &row[span.x as usize..(span.x + span.len) as usize] {
            pen.draw(out, glyph.ch, glyph.style)?;
        }
    }
    reset_into(out)
}

/// Runs of changed glyphs, row by row. Frames of different sizes differ
/// everywhere.
pub fn changed_spans(prev: &FrameBuffer, next: &FrameBuffer) -> Vec<Span> {
    let width = next.width();
    if prev.width() != width || prev.height() != next.height() {
        return (0..next.height())
            .map(|y| Span { x: 0, y, len: width })
            .collect();
    }

    let mut spans = Vec::new();
    for y in 0..next.height() {
        let (old, new) = (prev.row(y), next.row(y));
        let mut x = 0;
        while x < new.len() {
            if old[x] == new[x] {
                x += 1;
                continue;
            }
            let start = x;
            while x < new.len() && old[x] != new[x] {
                x += 1;
            }
            spans.push(Span {
                x: start as u16,
                y,
                len: (x - start) as u16,
            });
        }
    }
    spans
}

/// Tracks the active terminal style so unchanged styles are not re-sent.
#[derive(Default)]
struct Pen {
    style: Option<Style>,
}

impl Pen {
    fn draw(&mut self, out: &mut Vec<u8>, ch: char, style: Style) -> Result<()> {
        if self.style != Some(style) {
            out.queue(SetAttribute(Attribute::Reset))?;
            out.queue(SetForegroundColor(rgb(style.fg)))?;
            out.queue(SetBackgroundColor(rgb(style.bg)))?;
            if style.bold {
                out.queue(SetAttribute(Attribute::Bold))?;
            }
            self.style = Some(style);
        }
        out.queue(Print(ch))?;
        Ok(())
    }
}

fn reset_into(out: &mut Vec<u8>) -> Result<()> {
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn rgb(c: Rgb) -> Color {
    Color::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    }
}
