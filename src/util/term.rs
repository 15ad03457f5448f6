// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Terminal environment and styling utilities.
//!
//! This module provides functions to manipulate the terminal emulator's
//! properties, such as background colors, using OSC (Operating System Command)
//! escape sequences.
//!
//! # Compatibility
//!
//! These functions rely on the terminal emulator supporting the specific OSC
//! codes. Most modern terminals (XTerm, iTerm2, Alacritty, Kitty) support these
//! sequences.

use std::io::{self, Write};

use ratatui::style::Color;

/// Sets the terminal background color using an OSC 11 escape sequence.
///
/// # Arguments
///
/// * `colour` - The theme color to apply. Must be an `Rgb` variant.
///
/// # Panics
///
/// Panics if the provided color is not a [`Color::Rgb`] variant.
pub(crate) fn set_terminal_bg(colour: Color) {
    print!("\x1b]11;{}\x07", to_hex(colour));
    io::stdout().flush().ok();
}

/// Resets the terminal background to its default color.
///
/// This sends the OSC 111 escape sequence, which instructs the terminal to
/// revert the background color to the user's original configuration.
///
/// # Note
///
/// This is called during application cleanup to ensure the user's terminal
/// state is restored.
pub(crate) fn reset_terminal_bg() {
    print!("\x1b]111\x07");
    io::stdout().flush().ok();
}

// Converts a color into the CSS-style hexadecimal form OSC 11 expects.
fn to_hex(colour: Color) -> String {
    match colour {
        Color::Rgb(r, g, b) => format!("#{:02x}{:02x}{:02x}", r, g, b),
        _ => panic!("Unexpected non-RGB colour"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_rgb_colours_as_hex() {
        assert_eq!(to_hex(Color::Rgb(40, 20, 50)), "#281432");
        assert_eq!(to_hex(Color::Rgb(255, 255, 255)), "#ffffff");
    }
}
