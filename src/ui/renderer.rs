//! Terminal rendering surface.
//!
//! [`TerminalSurface`] implements [`DisplaySurface`] on top of any
//! [`std::io::Write`]. The binary points it at stdout; tests point it at a
//! byte buffer.
//!
//! # Layout
//!
//! ```text
//! Alice  Lv.250 Hero @ Scania
//!   image  https://open.api.nexon.com/static/maplestory/character/look/...
//!   equipment
//!     - Weapon: Genesis
//! ```

use crate::app::DisplaySurface;
use crate::ui::style;
use crate::ui::viewmodel::CharacterView;
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

const LOADING_TEXT: &str = "searching...";

/// A [`DisplaySurface`] that writes styled text to a writer.
///
/// Write failures are logged and otherwise ignored: a broken terminal must not
/// abort the lookup loop.
#[derive(Debug)]
pub struct TerminalSurface<W> {
    out: Mutex<W>,
    styled: bool,
}

impl TerminalSurface<io::Stdout> {
    /// A styled surface on the process's stdout.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout(), true)
    }
}

impl<W: Write> TerminalSurface<W> {
    /// Wraps `out`; `styled` controls whether ANSI escapes are emitted.
    #[must_use]
    pub fn new(out: W, styled: bool) -> Self {
        Self {
            out: Mutex::new(out),
            styled,
        }
    }

    /// Consumes the surface and returns the writer.
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    const fn esc(&self, sequence: &'static str) -> &'static str {
        if self.styled {
            sequence
        } else {
            ""
        }
    }

    fn write_with<F>(&self, what: &str, render: F)
    where
        F: FnOnce(&mut W) -> io::Result<()>,
    {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = render(&mut out).and_then(|()| out.flush()) {
            tracing::warn!(error = %e, surface_call = what, "failed to write to terminal");
        }
    }

    fn write_view(&self, out: &mut W, view: &CharacterView) -> io::Result<()> {
        writeln!(
            out,
            "{}{}{}  Lv.{} {} @ {}",
            self.esc(style::bold()),
            view.name,
            self.esc(style::reset()),
            view.level,
            view.class_name,
            view.world_name,
        )?;
        writeln!(
            out,
            "  {}image{}  {}",
            self.esc(style::dim()),
            self.esc(style::reset()),
            view.image_url
        )?;
        writeln!(out, "  {}equipment{}", self.esc(style::dim()), self.esc(style::reset()))?;
        if view.equipment.is_empty() {
            writeln!(out, "    (none)")?;
        }
        for line in &view.equipment {
            writeln!(out, "    - {line}")?;
        }
        Ok(())
    }
}

impl<W: Write + Send> DisplaySurface for TerminalSurface<W> {
    fn show_loading(&self) {
        self.write_with("show_loading", |out| {
            if self.styled {
                write!(out, "{}{LOADING_TEXT}{}", style::dim(), style::reset())
            } else {
                writeln!(out, "{LOADING_TEXT}")
            }
        });
    }

    fn hide_loading(&self) {
        if !self.styled {
            return;
        }
        self.write_with("hide_loading", |out| write!(out, "{}", style::clear_line()));
    }

    fn show_error(&self, message: &str) {
        self.write_with("show_error", |out| {
            writeln!(
                out,
                "{}{}error:{} {message}",
                self.esc(style::clear_line()),
                self.esc(style::error()),
                self.esc(style::reset()),
            )
        });
    }

    fn show_result(&self, view: &CharacterView) {
        self.write_with("show_result", |out| {
            write!(out, "{}", self.esc(style::clear_line()))?;
            self.write_view(out, view)
        });
    }
}
