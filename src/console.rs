//! Console color control through ANSI escape sequences
//!
//! Unix terminals are driven with SGR escape sequences written to standard
//! output. Foreground shades come in dim (`0;`) and bright (`1;`) pairs;
//! background colors reuse the same codes behind a reverse-video (`7;`)
//! prefix. [`ConsoleColor::Default`] emits the reset sequence `ESC[0m`.
//!
//! Escapes are always written, even when stdout is not a terminal. A terminal
//! without ANSI support shows the raw bytes; that is accepted degradation.
//!
//! # Examples
//!
//! ```rust,no_run
//! use nixplat::console::{ConsoleColor, set_console_colors};
//!
//! set_console_colors(true, ConsoleColor::Red);
//! println!("something went wrong");
//! set_console_colors(true, ConsoleColor::Default);
//! ```

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use crate::core::NixplatError;

/// The fixed console palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConsoleColor {
    DarkBlue,
    Blue,
    DarkGreen,
    Green,
    DarkRed,
    Red,
    Black,
    Brown,
    Yellow,
    Teal,
    Cyan,
    Purple,
    Magenta,
    White,
    DarkGray,
    Gray,
    /// Restore the terminal's default attributes
    #[default]
    Default,
}

impl ConsoleColor {
    /// Every palette entry, `Default` last.
    pub const ALL: [Self; 17] = [
        Self::DarkBlue,
        Self::Blue,
        Self::DarkGreen,
        Self::Green,
        Self::DarkRed,
        Self::Red,
        Self::Black,
        Self::Brown,
        Self::Yellow,
        Self::Teal,
        Self::Cyan,
        Self::Purple,
        Self::Magenta,
        Self::White,
        Self::DarkGray,
        Self::Gray,
        Self::Default,
    ];

    /// Kebab-case name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::DarkBlue => "dark-blue",
            Self::Blue => "blue",
            Self::DarkGreen => "dark-green",
            Self::Green => "green",
            Self::DarkRed => "dark-red",
            Self::Red => "red",
            Self::Black => "black",
            Self::Brown => "brown",
            Self::Yellow => "yellow",
            Self::Teal => "teal",
            Self::Cyan => "cyan",
            Self::Purple => "purple",
            Self::Magenta => "magenta",
            Self::White => "white",
            Self::DarkGray => "dark-gray",
            Self::Gray => "gray",
            Self::Default => "default",
        }
    }
}

impl fmt::Display for ConsoleColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ConsoleColor {
    type Err = NixplatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL.into_iter().find(|color| color.name() == normalized).ok_or_else(|| {
            NixplatError::InvalidColor {
                name: s.to_string(),
            }
        })
    }
}

const RESET: &str = "\x1b[0m";

/// Returns the escape sequence selecting `color`.
///
/// `foreground == false` selects the background variant.
#[must_use]
pub const fn escape_sequence(foreground: bool, color: ConsoleColor) -> &'static str {
    use ConsoleColor::*;

    if foreground {
        match color {
            DarkBlue => "\x1b[0;34m",
            Blue => "\x1b[1;34m",
            DarkGreen => "\x1b[0;32m",
            Green => "\x1b[1;32m",
            DarkRed => "\x1b[0;31m",
            Red => "\x1b[1;31m",
            Black => "\x1b[0;30m",
            Brown => "\x1b[0;33m",
            Yellow => "\x1b[1;33m",
            Teal => "\x1b[0;36m",
            Cyan => "\x1b[1;36m",
            Purple => "\x1b[0;35m",
            Magenta => "\x1b[1;35m",
            White => "\x1b[1;37m",
            DarkGray => "\x1b[1;30m",
            Gray => "\x1b[0;37m",
            Default => RESET,
        }
    } else {
        match color {
            DarkBlue => "\x1b[7;34m",
            Blue => "\x1b[7;1;34m",
            DarkGreen => "\x1b[7;32m",
            Green => "\x1b[7;1;32m",
            DarkRed => "\x1b[7;31m",
            Red => "\x1b[7;1;31m",
            Black => "\x1b[7;30m",
            Brown => "\x1b[7;33m",
            Yellow => "\x1b[7;1;33m",
            Teal => "\x1b[7;36m",
            Cyan => "\x1b[7;1;36m",
            Purple => "\x1b[7;35m",
            Magenta => "\x1b[7;1;35m",
            White => "\x1b[7;1;37m",
            DarkGray => "\x1b[7;1;30m",
            Gray => "\x1b[7;37m",
            Default => RESET,
        }
    }
}

/// Writes the escape sequence for `color` to `writer`.
///
/// # Errors
///
/// Propagates write errors from `writer`.
pub fn write_console_colors<W: Write>(
    writer: &mut W,
    foreground: bool,
    color: ConsoleColor,
) -> io::Result<()> {
    writer.write_all(escape_sequence(foreground, color).as_bytes())
}

/// Switches the console foreground or background color on stdout.
///
/// Write failures (a closed pipe, for instance) are ignored.
pub fn set_console_colors(foreground: bool, color: ConsoleColor) {
    let mut stdout = io::stdout().lock();
    let _ = write_console_colors(&mut stdout, foreground, color);
    let _ = stdout.flush();
}

/// The terminal's default color.
///
/// Unix terminals offer no portable way to read the current colors back, so
/// this always returns `0`; [`ConsoleColor::Default`] is how callers restore
/// the terminal instead.
#[must_use]
pub const fn console_default_color() -> u16 {
    0
}
