//! Output seam for the animation loop.
//!
//! The loop only ever clears the screen and draws whole frames of text
//! lines, so [`Renderer`] is two methods. [`TerminalRenderer`] implements it
//! with crossterm commands batched via `queue!` and flushed once per call;
//! [`RecordingRenderer`] captures the calls for tests.

use std::io::{self, Write};

use crossterm::{
    cursor::{self, MoveTo},
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};

/// Receives whole frames from the animation loop.
pub trait Renderer {
    /// Blank the screen and home the cursor.
    fn clear(&mut self) -> io::Result<()>;

    /// Write `lines` top to bottom, preserving order.
    fn draw(&mut self, lines: &[String]) -> io::Result<()>;
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn clear(&mut self) -> io::Result<()> {
        (**self).clear()
    }

    fn draw(&mut self, lines: &[String]) -> io::Result<()> {
        (**self).draw(lines)
    }
}

/// Renders to a terminal (or any writer) with ANSI commands.
///
/// The cursor is hidden by [`hide_cursor`](Self::hide_cursor) and restored
/// when the renderer is dropped.
#[derive(Debug)]
pub struct TerminalRenderer<W: Write> {
    out: W,
    cursor_hidden: bool,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            cursor_hidden: false,
        }
    }

    pub fn hide_cursor(&mut self) -> io::Result<()> {
        queue!(self.out, cursor::Hide)?;
        self.out.flush()?;
        self.cursor_hidden = true;
        Ok(())
    }

    pub fn show_cursor(&mut self) -> io::Result<()> {
        queue!(self.out, cursor::Show)?;
        self.out.flush()?;
        self.cursor_hidden = false;
        Ok(())
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Raw access for prompts that must not end in a newline.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.out
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn clear(&mut self) -> io::Result<()> {
        queue!(self.out, MoveTo(0, 0), Clear(ClearType::All))?;
        self.out.flush()
    }

    fn draw(&mut self, lines: &[String]) -> io::Result<()> {
        for line in lines {
            queue!(self.out, Print(line), Print("\r\n"))?;
        }
        self.out.flush()
    }
}

impl<W: Write> Drop for TerminalRenderer<W> {
    fn drop(&mut self) {
        if self.cursor_hidden {
            let _ = self.show_cursor();
        }
    }
}

/// One captured renderer call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOp {
    Clear,
    Draw(Vec<String>),
}

/// A renderer that records every call, for tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    ops: Vec<RenderOp>,
}

impl RecordingRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn ops(&self) -> &[RenderOp] {
        &self.ops
    }

    /// Number of `clear` calls recorded.
    #[must_use]
    pub fn clears(&self) -> usize {
        self.ops.iter().filter(|op| **op == RenderOp::Clear).count()
    }

    /// The most recently drawn frame, if any.
    #[must_use]
    pub fn last_frame(&self) -> Option<&[String]> {
        self.ops.iter().rev().find_map(|op| match op {
            RenderOp::Draw(lines) => Some(lines.as_slice()),
            RenderOp::Clear => None,
        })
    }
}

impl Renderer for RecordingRenderer {
    fn clear(&mut self) -> io::Result<()> {
        self.ops.push(RenderOp::Clear);
        Ok(())
    }

    fn draw(&mut self, lines: &[String]) -> io::Result<()> {
        self.ops.push(RenderOp::Draw(lines.to_vec()));
        Ok(())
    }
}
