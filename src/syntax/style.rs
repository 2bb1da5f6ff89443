//! Style types for highlighted text
//!
//! This module provides the foundation for styled text output:
//! RGB colors parsed from hex strings, rendering attributes, and
//! the styled spans emitted by the highlighter.

/// A 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a color from RGB components
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` or `#RGB` hex color string
    ///
    /// Returns None for anything else, so callers can fall back to a
    /// default color.
    pub fn parse_hex(s: &str) -> Option<Self> {
        let hex = s.trim().strip_prefix('#')?;

        match hex.len() {
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self { r, g, b })
            }
            3 => {
                // #abc is shorthand for #aabbcc
                let r = u8::from_str_radix(&hex[0..1], 16).ok()?;
                let g = u8::from_str_radix(&hex[1..2], 16).ok()?;
                let b = u8::from_str_radix(&hex[2..3], 16).ok()?;
                Some(Self {
                    r: r * 17,
                    g: g * 17,
                    b: b * 17,
                })
            }
            _ => None,
        }
    }
}

/// Rendering attributes for a highlighted range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    /// Foreground color
    pub fg: Color,
    /// Optional background color
    pub bg: Option<Color>,
    /// Bold text
    pub bold: bool,
    /// Italic text
    pub italic: bool,
    /// Underlined text
    pub underline: bool,
}

impl Style {
    /// Create a style with just a foreground color
    pub fn fg(color: Color) -> Self {
        Self {
            fg: color,
            bg: None,
            bold: false,
            italic: false,
            underline: false,
        }
    }

    /// Builder: set background color
    pub fn with_bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    /// Builder: set bold
    pub fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Builder: set italic
    pub fn with_italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Builder: set underline
    pub fn with_underline(mut self) -> Self {
        self.underline = true;
        self
    }
}

/// A styled span of text within one block
///
/// Offsets are byte offsets into the block text. Emission order is
/// significant: when spans overlap, the span emitted later wins for the
/// overlapped characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Byte offset where this span starts
    pub start: usize,
    /// Length of the span in bytes
    pub len: usize,
    /// Style to apply
    pub style: Style,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, len: usize, style: Style) -> Self {
        Self { start, len, style }
    }

    /// Byte offset one past the end of the span
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// Check if this span covers a byte position
    pub fn contains(&self, pos: usize) -> bool {
        pos >= self.start && pos < self.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_full() {
        assert_eq!(Color::parse_hex("#C586C0"), Some(Color::rgb(0xC5, 0x86, 0xC0)));
        assert_eq!(Color::parse_hex("#000000"), Some(Color::rgb(0, 0, 0)));
        assert_eq!(Color::parse_hex(" #ffffff "), Some(Color::rgb(255, 255, 255)));
    }

    #[test]
    fn test_parse_hex_short() {
        assert_eq!(Color::parse_hex("#fff"), Some(Color::rgb(255, 255, 255)));
        assert_eq!(Color::parse_hex("#a0c"), Some(Color::rgb(0xAA, 0x00, 0xCC)));
    }

    #[test]
    fn test_parse_hex_invalid() {
        assert_eq!(Color::parse_hex(""), None);
        assert_eq!(Color::parse_hex("C586C0"), None);
        assert_eq!(Color::parse_hex("#12345"), None);
        assert_eq!(Color::parse_hex("#gggggg"), None);
    }

    #[test]
    fn test_style_builders() {
        let style = Style::fg(Color::rgb(1, 2, 3)).with_bold().with_italic();
        assert!(style.bold);
        assert!(style.italic);
        assert!(!style.underline);
        assert_eq!(style.bg, None);
    }

    #[test]
    fn test_span_contains() {
        let span = Span::new(5, 5, Style::fg(Color::rgb(0, 0, 0)));
        assert!(!span.contains(4));
        assert!(span.contains(5));
        assert!(span.contains(9));
        assert!(!span.contains(10));
        assert_eq!(span.end(), 10);
    }
}
