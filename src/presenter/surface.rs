/// Display surfaces the presenter writes into
use serde::Serialize;
use std::io::{self, Stdout, Write};

use super::format::Snapshot;
use crate::error::{ClockError, Result};

/// Layout state owned by the presenter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Layout {
    pub compact: bool,
}

pub trait DisplaySurface: Send {
    fn render(&mut self, snapshot: &Snapshot, layout: &Layout) -> Result<()>;
}

impl<S: DisplaySurface + ?Sized> DisplaySurface for Box<S> {
    fn render(&mut self, snapshot: &Snapshot, layout: &Layout) -> Result<()> {
        (**self).render(snapshot, layout)
    }
}

/// Plain-text surface, one block (or one line in compact mode) per refresh
pub struct TerminalSurface<W = Stdout> {
    out: W,
}

impl TerminalSurface<Stdout> {
    pub fn stdout() -> Self {
        TerminalSurface { out: io::stdout() }
    }
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        TerminalSurface { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_frame(&mut self, s: &Snapshot, layout: &Layout) -> io::Result<()> {
        if layout.compact {
            writeln!(
                self.out,
                "{} {} | {} | {} {}",
                s.time, s.ampm, s.market_text, s.secondary_label, s.secondary_time
            )?;
        } else {
            writeln!(self.out, "{} {}", s.time, s.ampm)?;
            writeln!(self.out, "{}, {}", s.day, s.date)?;
            writeln!(self.out, "● {} [{}]", s.market_text, s.status_class)?;
            writeln!(self.out, "{}", s.hours)?;
            writeln!(self.out, "{}: {}", s.secondary_label, s.secondary_time)?;
            writeln!(self.out)?;
        }
        self.out.flush()
    }
}

impl<W: Write + Send> DisplaySurface for TerminalSurface<W> {
    fn render(&mut self, snapshot: &Snapshot, layout: &Layout) -> Result<()> {
        self.write_frame(snapshot, layout)
            .map_err(|e| ClockError::SurfaceError(format!("terminal write failed: {}", e)))
    }
}

#[derive(Serialize)]
struct JsonFrame<'a> {
    #[serde(flatten)]
    snapshot: &'a Snapshot,
    compact: bool,
}

/// JSON Lines surface for embedding hosts
pub struct JsonSurface<W = Stdout> {
    out: W,
}

impl JsonSurface<Stdout> {
    pub fn stdout() -> Self {
        JsonSurface { out: io::stdout() }
    }
}

impl<W: Write> JsonSurface<W> {
    pub fn new(out: W) -> Self {
        JsonSurface { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> DisplaySurface for JsonSurface<W> {
    fn render(&mut self, snapshot: &Snapshot, layout: &Layout) -> Result<()> {
        let frame = JsonFrame {
            snapshot,
            compact: layout.compact,
        };
        serde_json::to_writer(&mut self.out, &frame)?;
        writeln!(self.out)
            .and_then(|_| self.out.flush())
            .map_err(|e| ClockError::SurfaceError(format!("json write failed: {}", e)))
    }
}
