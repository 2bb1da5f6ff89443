//! Terminal rendering for highlighted code
//!
//! Spans are painted in emission order into per-character styles, then
//! written as queued crossterm commands. Tabs expand to the configured
//! tab stop and lines truncate to the terminal width.

use std::io::Write;

use crossterm::{
    queue,
    style::{
        Attribute, Color as TermColor, Print, ResetColor, SetAttribute, SetBackgroundColor,
        SetForegroundColor,
    },
    terminal,
};
use unicode_width::UnicodeWidthChar;

use crate::config::{Settings, TimeFormat};
use crate::error::Result;
use crate::store::TIMESTAMP_FORMAT;
use crate::syntax::{BlockState, Color, Session, Span, Style};

/// A chunk of display text sharing one style (None = unstyled)
type StyledChunk = (String, Option<Style>);

/// Print a snippet's code with syntax highlighting
///
/// Lines are highlighted in document order, threading each line's
/// terminal state into the next.
pub fn print_highlighted(
    out: &mut impl Write,
    code: &str,
    session: &Session,
    settings: &Settings,
) -> Result<()> {
    let max_width = terminal::size().ok().map(|(cols, _)| cols as usize);
    let lines: Vec<&str> = code.split('\n').collect();
    let gutter = if settings.line_numbers_visible {
        gutter_width(lines.len())
    } else {
        0
    };

    let mut state = BlockState::Normal;
    for (index, line) in lines.iter().enumerate() {
        let (spans, next) = session.highlight(line, state);
        state = next;

        if gutter > 0 {
            queue!(
                out,
                SetAttribute(Attribute::Dim),
                Print(format!("{:>width$} ", index + 1, width = gutter - 1)),
                SetAttribute(Attribute::Reset),
            )?;
        }

        let text_width = max_width.map(|w| w.saturating_sub(gutter));
        for (chunk, style) in layout_runs(line, &spans, settings.tab_size, text_width) {
            match style {
                Some(style) => {
                    apply_style(out, &style)?;
                    queue!(out, Print(chunk))?;
                    queue!(out, ResetColor, SetAttribute(Attribute::Reset))?;
                }
                None => queue!(out, Print(chunk))?,
            }
        }
        queue!(out, Print("\n"))?;
    }

    out.flush()?;
    Ok(())
}

/// Queue the crossterm commands for one style
fn apply_style(out: &mut impl Write, style: &Style) -> Result<()> {
    queue!(out, SetForegroundColor(term_color(style.fg)))?;
    if let Some(bg) = style.bg {
        queue!(out, SetBackgroundColor(term_color(bg)))?;
    }
    if style.bold {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if style.italic {
        queue!(out, SetAttribute(Attribute::Italic))?;
    }
    if style.underline {
        queue!(out, SetAttribute(Attribute::Underlined))?;
    }
    Ok(())
}

fn term_color(color: Color) -> TermColor {
    TermColor::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

/// Width of the line-number gutter (digits plus separator space)
fn gutter_width(line_count: usize) -> usize {
    let mut digits = 1;
    let mut n = line_count;
    while n >= 10 {
        digits += 1;
        n /= 10;
    }
    digits.max(3) + 1
}

/// Resolve spans into per-byte styles, painted in emission order
fn byte_styles(text: &str, spans: &[Span]) -> Vec<Option<Style>> {
    let mut styles = vec![None; text.len()];
    for span in spans {
        for slot in styles
            .iter_mut()
            .skip(span.start)
            .take(span.len.min(text.len().saturating_sub(span.start)))
        {
            *slot = Some(span.style);
        }
    }
    styles
}

/// Expand tabs and truncate to a display width, grouping the result into
/// same-styled chunks
fn layout_runs(
    text: &str,
    spans: &[Span],
    tab_size: usize,
    max_width: Option<usize>,
) -> Vec<StyledChunk> {
    let styles = byte_styles(text, spans);
    let tab_size = tab_size.max(1);

    let mut chunks: Vec<StyledChunk> = Vec::new();
    let mut current = String::new();
    let mut current_style: Option<Style> = None;
    let mut col = 0;

    for (offset, ch) in text.char_indices() {
        let style = styles.get(offset).copied().flatten();

        let rendered: String = if ch == '\t' {
            let pad = tab_size - (col % tab_size);
            " ".repeat(pad)
        } else {
            ch.to_string()
        };
        let width: usize = rendered
            .chars()
            .map(|c| UnicodeWidthChar::width(c).unwrap_or(1))
            .sum();

        if let Some(max) = max_width {
            if col + width > max {
                break;
            }
        }

        if style != current_style && !current.is_empty() {
            chunks.push((std::mem::take(&mut current), current_style));
        }
        current_style = style;
        current.push_str(&rendered);
        col += width;
    }

    if !current.is_empty() {
        chunks.push((current, current_style));
    }

    chunks
}

/// Format a store timestamp for display per the configured clock format
///
/// Unparsable timestamps pass through untouched.
pub fn format_timestamp(timestamp: &str, format: TimeFormat) -> String {
    match chrono::NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT) {
        Ok(dt) => match format {
            TimeFormat::Twelve => dt.format("%Y-%m-%d %I:%M %p").to_string(),
            TimeFormat::TwentyFour => dt.format("%Y-%m-%d %H:%M").to_string(),
        },
        Err(_) => timestamp.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style(r: u8) -> Style {
        Style::fg(Color::rgb(r, 0, 0))
    }

    #[test]
    fn test_byte_styles_last_write_wins() {
        let spans = [Span::new(0, 5, style(1)), Span::new(2, 2, style(2))];
        let styles = byte_styles("abcdef", &spans);

        assert_eq!(styles[0], Some(style(1)));
        assert_eq!(styles[2], Some(style(2)));
        assert_eq!(styles[3], Some(style(2)));
        assert_eq!(styles[4], Some(style(1)));
        assert_eq!(styles[5], None);
    }

    #[test]
    fn test_byte_styles_span_past_end() {
        let spans = [Span::new(3, 100, style(1))];
        let styles = byte_styles("abcde", &spans);
        assert_eq!(styles.len(), 5);
        assert_eq!(styles[4], Some(style(1)));
    }

    #[test]
    fn test_layout_groups_runs() {
        let spans = [Span::new(0, 2, style(1))];
        let chunks = layout_runs("abcd", &spans, 4, None);

        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0], ("ab".to_string(), Some(style(1))));
        assert_eq!(chunks[1], ("cd".to_string(), None));
    }

    #[test]
    fn test_layout_expands_tabs() {
        let chunks = layout_runs("a\tb", &[], 4, None);
        let text: String = chunks.iter().map(|(s, _)| s.as_str()).collect();
        assert_eq!(text, "a   b");

        let chunks = layout_runs("\t", &[], 8, None);
        let text: String = chunks.iter().map(|(s, _)| s.as_str()).collect();
        assert_eq!(text, "        ");
    }

    #[test]
    fn test_layout_truncates_to_width() {
        let chunks = layout_runs("abcdef", &[], 4, Some(3));
        let text: String = chunks.iter().map(|(s, _)| s.as_str()).collect();
        assert_eq!(text, "abc");
    }

    #[test]
    fn test_gutter_width() {
        assert_eq!(gutter_width(1), 4);
        assert_eq!(gutter_width(999), 4);
        assert_eq!(gutter_width(1000), 5);
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(
            format_timestamp("2024-03-05 14:30:00", TimeFormat::TwentyFour),
            "2024-03-05 14:30"
        );
        assert_eq!(
            format_timestamp("2024-03-05 14:30:00", TimeFormat::Twelve),
            "2024-03-05 02:30 PM"
        );
        assert_eq!(
            format_timestamp("garbage", TimeFormat::Twelve),
            "garbage"
        );
    }
}
