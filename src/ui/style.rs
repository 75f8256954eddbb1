//! ANSI escape sequences used by the terminal surface.

/// Starts bold text.
#[must_use]
pub const fn bold() -> &'static str {
    "\x1b[1m"
}

/// Starts dimmed text.
#[must_use]
pub const fn dim() -> &'static str {
    "\x1b[2m"
}

/// Starts red text.
#[must_use]
pub const fn error() -> &'static str {
    "\x1b[31m"
}

/// Resets all attributes.
#[must_use]
pub const fn reset() -> &'static str {
    "\x1b[0m"
}

/// Returns the cursor to column 1 and erases the current line.
#[must_use]
pub const fn clear_line() -> &'static str {
    "\r\x1b[2K"
}
