//! String utilities shared by the formatters.
//!
//! Width calculations go through `console`, so wide characters count as two
//! columns and padding never truncates: a string wider than the target is
//! returned unchanged.

use console::{measure_text_width, pad_str, Alignment};
use unicode_width::UnicodeWidthChar;

/// Returns the display width of a string.
pub fn display_width(s: &str) -> usize {
    measure_text_width(s)
}

/// Pads on the left so the text ends at column `width`.
///
/// ```rust
/// use txtfmt_markup::text::pad_left;
///
/// assert_eq!(pad_left("42", 5), "   42");
/// assert_eq!(pad_left("toolong", 3), "toolong");
/// ```
pub fn pad_left(s: &str, width: usize) -> String {
    pad_str(s, width, Alignment::Right, None).into_owned()
}

/// Pads on the right up to `width` columns.
pub fn pad_right(s: &str, width: usize) -> String {
    pad_str(s, width, Alignment::Left, None).into_owned()
}

/// Centers within `width` columns; an odd remainder goes to the right.
///
/// ```rust
/// use txtfmt_markup::text::pad_center;
///
/// assert_eq!(pad_center("hi", 5), " hi  ");
/// ```
pub fn pad_center(s: &str, width: usize) -> String {
    pad_str(s, width, Alignment::Center, None).into_owned()
}

/// Splits on `delim`, skipping empty tokens.
///
/// Consecutive delimiters collapse, so `"a||b|"` yields `a` and `b`.
pub fn split_nonempty(s: &str, delim: char) -> impl Iterator<Item = &str> {
    s.split(delim).filter(|token| !token.is_empty())
}

/// Repeats `symbol` `count` times.
pub fn repeat_symbol(symbol: char, count: usize) -> String {
    std::iter::repeat(symbol).take(count).collect()
}

/// Replaces every `from` with `to`.
pub fn replace_symbol(s: &str, from: char, to: char) -> String {
    s.chars().map(|c| if c == from { to } else { c }).collect()
}

/// Trims leading and trailing spaces (not other whitespace).
pub fn trim_spaces(s: &str) -> &str {
    s.trim_matches(' ')
}

/// True when `s` holds at least one digit and otherwise only `-`, `.`, `,`
/// and spaces, e.g. `1 024,50`.
///
/// ```rust
/// use txtfmt_markup::text::is_numeric;
///
/// assert!(is_numeric("1 024,50"));
/// assert!(!is_numeric(" - "));
/// assert!(!is_numeric("12 apples"));
/// ```
pub fn is_numeric(s: &str) -> bool {
    let allowed = |c: char| c.is_ascii_digit() || matches!(c, '-' | '.' | ' ' | ',');
    s.chars().any(|c| c.is_ascii_digit()) && s.chars().all(allowed)
}

/// Parses a plain decimal number: optional sign, digits, at most one decimal
/// point (`.` or `,`), surrounded by optional spaces.
///
/// ```rust
/// use txtfmt_markup::text::parse_number;
///
/// assert_eq!(parse_number(" 2,5 "), Some(2.5));
/// assert_eq!(parse_number("-7"), Some(-7.0));
/// assert_eq!(parse_number("1e3"), None);
/// assert_eq!(parse_number("abc"), None);
/// ```
pub fn parse_number(s: &str) -> Option<f64> {
    let trimmed = trim_spaces(s);
    let unsigned = trimmed
        .strip_prefix('-')
        .or_else(|| trimmed.strip_prefix('+'))
        .unwrap_or(trimmed);

    let mut digits = 0;
    let mut points = 0;
    for c in unsigned.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' | ',' => points += 1,
            _ => return None,
        }
    }
    if digits == 0 || points > 1 {
        return None;
    }

    replace_symbol(trimmed, ',', '.').parse().ok()
}

/// Greedy word wrap to `width` columns.
///
/// Runs of whitespace collapse to a single space. Words wider than `width`
/// are broken across lines. Always returns at least one line.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    wrap_indent(text, width, 0, 0)
}

/// Word wrap where the first line loses `first` columns and the others
/// lose `rest` columns to an indent the caller adds.
pub fn wrap_indent(text: &str, width: usize, first: usize, rest: usize) -> Vec<String> {
    let limit = |line: usize| {
        let indent = if line == 0 { first } else { rest };
        width.saturating_sub(indent).max(1)
    };
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        for piece in break_word(word, limit(lines.len()).min(limit(1))) {
            let piece_width = display_width(&piece);
            if current_width > 0 && current_width + 1 + piece_width > limit(lines.len()) {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            if current_width > 0 {
                current.push(' ');
                current_width += 1;
            }
            current.push_str(&piece);
            current_width += piece_width;
        }
    }

    lines.push(current);
    lines
}

fn break_word(word: &str, width: usize) -> Vec<String> {
    if display_width(word) <= width {
        return vec![word.to_string()];
    }

    let mut pieces = Vec::new();
    let mut piece = String::new();
    let mut piece_width = 0;
    for c in word.chars() {
        let char_width = c.width().unwrap_or(0);
        if piece_width + char_width > width && !piece.is_empty() {
            pieces.push(std::mem::take(&mut piece));
            piece_width = 0;
        }
        piece.push(c);
        piece_width += char_width;
    }
    if !piece.is_empty() {
        pieces.push(piece);
    }
    pieces
}
