//! Styling helpers for terminal output.
//!
//! The [`SiteStyle`] trait provides a set of convenience methods for applying
//! ANSI styling via the `colored` crate. Implementations for `&str` and
//! `String` are provided so string literals can be styled directly.

use colored::{ColoredString, Colorize};
use textwrap::Options;

/// Convenience trait for applying color and style to page output.
pub trait SiteStyle {
    fn title_style(&self) -> ColoredString;
    fn heading_style(&self) -> ColoredString;
    fn label_style(&self) -> ColoredString;
    fn body_style(&self) -> ColoredString;
    fn link_style(&self) -> ColoredString;
    fn path_style(&self) -> ColoredString;
    fn banner_style(&self) -> ColoredString;
    fn not_found_style(&self) -> ColoredString;
    fn notice_style(&self) -> ColoredString;
    fn prompt_style(&self) -> ColoredString;
    fn section_style(&self) -> ColoredString;
}

impl SiteStyle for &str {
    fn title_style(&self) -> ColoredString {
        self.bold().truecolor(0, 26, 102).underline()
    }
    fn heading_style(&self) -> ColoredString {
        self.bold().truecolor(0, 157, 250)
    }
    fn label_style(&self) -> ColoredString {
        self.bold()
    }
    fn body_style(&self) -> ColoredString {
        self.normal()
    }
    fn link_style(&self) -> ColoredString {
        self.truecolor(0, 157, 250).underline()
    }
    fn path_style(&self) -> ColoredString {
        self.dimmed()
    }
    fn banner_style(&self) -> ColoredString {
        self.bold().white().on_truecolor(0, 26, 102)
    }
    fn not_found_style(&self) -> ColoredString {
        self.bold().truecolor(200, 50, 50)
    }
    fn notice_style(&self) -> ColoredString {
        self.italic().truecolor(220, 180, 40)
    }
    fn prompt_style(&self) -> ColoredString {
        self.truecolor(0, 157, 250)
    }
    fn section_style(&self) -> ColoredString {
        let bracketed = format!("[{self}]");
        bracketed.truecolor(75, 80, 75)
    }
}

impl SiteStyle for String {
    fn title_style(&self) -> ColoredString {
        self.as_str().title_style()
    }
    fn heading_style(&self) -> ColoredString {
        self.as_str().heading_style()
    }
    fn label_style(&self) -> ColoredString {
        self.as_str().label_style()
    }
    fn body_style(&self) -> ColoredString {
        self.as_str().body_style()
    }
    fn link_style(&self) -> ColoredString {
        self.as_str().link_style()
    }
    fn path_style(&self) -> ColoredString {
        self.as_str().path_style()
    }
    fn banner_style(&self) -> ColoredString {
        self.as_str().banner_style()
    }
    fn not_found_style(&self) -> ColoredString {
        self.as_str().not_found_style()
    }
    fn notice_style(&self) -> ColoredString {
        self.as_str().notice_style()
    }
    fn prompt_style(&self) -> ColoredString {
        self.as_str().prompt_style()
    }
    fn section_style(&self) -> ColoredString {
        self.as_str().section_style()
    }
}

/// Wrapping options for body paragraphs.
pub fn normal_block(width: usize) -> Options<'static> {
    Options::new(width)
}

/// Wrapping options for list items and nested content.
pub fn indented_block(width: usize) -> Options<'static> {
    Options::new(width).initial_indent("  • ").subsequent_indent("    ")
}
