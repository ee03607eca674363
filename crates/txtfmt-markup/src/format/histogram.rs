//! Horizontal bar charts from `label|value` lines.
//!
//! Bars are scaled so the largest absolute value fills the room left after
//! the label column and the value text. Lines whose value does not parse
//! render [`ERROR_MARKER`] and do not affect the scale.

use txtfmt_calc::format_number;

use super::{symbol_attr, Body};
use crate::context::Context;
use crate::text::{display_width, pad_right, parse_number, repeat_symbol, trim_spaces};

pub const ERROR_MARKER: &str = "error";

#[derive(Debug, Clone, PartialEq)]
struct Entry<'a> {
    label: &'a str,
    value: Option<f64>,
}

fn parse_entries(content: &str) -> Vec<Entry<'_>> {
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| match line.split_once('|') {
            Some((label, value)) => Entry {
                label: trim_spaces(label),
                value: parse_number(value),
            },
            None => Entry {
                label: "",
                value: parse_number(line),
            },
        })
        .collect()
}

/// Renders `content` as a histogram `width` columns wide.
pub fn render_histogram(content: &str, attrs: &[&str], width: usize) -> String {
    let entries = parse_entries(content);
    if entries.is_empty() {
        return String::new();
    }
    let symbol = symbol_attr(attrs, '#');

    let scale = entries
        .iter()
        .filter_map(|e| e.value)
        .map(f64::abs)
        .fold(0.0, f64::max);

    let show_labels = entries.iter().any(|e| !e.label.is_empty());
    let label_width = entries.iter().map(|e| display_width(e.label)).max().unwrap_or(0);
    let label_part = if show_labels { label_width + 3 } else { 0 };

    let values: Vec<Option<String>> = entries
        .iter()
        .map(|e| e.value.map(format_number))
        .collect();
    let value_width = values
        .iter()
        .flatten()
        .map(|v| display_width(v))
        .max()
        .unwrap_or(0);
    let room = width.saturating_sub(label_part + value_width + 1).max(1);

    entries
        .iter()
        .zip(&values)
        .map(|(entry, text)| {
            let mut line = String::new();
            if show_labels {
                line.push_str(&pad_right(entry.label, label_width));
                line.push_str(" | ");
            }
            match (entry.value, text) {
                (Some(value), Some(text)) => {
                    let bar = if scale > 0.0 {
                        (value.abs() / scale * room as f64).round() as usize
                    } else {
                        0
                    };
                    if bar > 0 {
                        line.push_str(&repeat_symbol(symbol, bar));
                        line.push(' ');
                    }
                    line.push_str(text);
                }
                _ => line.push_str(ERROR_MARKER),
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub(super) fn histogram(body: Body<'_>, attrs: &[&str], cx: &mut Context<'_>) -> String {
    match body {
        Body::Empty => String::new(),
        Body::Text(text) => render_histogram(text, attrs, cx.width()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_labels_and_bare_values() {
        let entries = parse_entries("a | 3\n\n4,5\nb|x");
        assert_eq!(
            entries,
            vec![
                Entry { label: "a", value: Some(3.0) },
                Entry { label: "", value: Some(4.5) },
                Entry { label: "b", value: None },
            ]
        );
    }

    #[test]
    fn scales_to_largest_value() {
        // room = 20 - (2 + 3) - 2 - 1 = 12
        let out = render_histogram("a|10\nbb|5", &[], 20);
        assert_eq!(out, "a  | ############ 10\nbb | ###### 5");
    }

    #[test]
    fn custom_symbol() {
        let out = render_histogram("1\n2", &["*"], 12);
        assert_eq!(out, "***** 1\n********** 2");
    }

    #[test]
    fn zero_and_error_values() {
        let out = render_histogram("x|0\ny|abc\nz|4", &[], 20);
        assert_eq!(out, "x | 0\ny | error\nz | ############## 4");
    }

    #[test]
    fn all_zero_has_empty_bars() {
        assert_eq!(render_histogram("0\n0", &[], 20), "0\n0");
    }

    #[test]
    fn negative_values_use_magnitude() {
        let out = render_histogram("-2\n4", &[], 12);
        assert_eq!(out, "##### -2\n######### 4");
    }

    #[test]
    fn empty_content() {
        assert_eq!(render_histogram("\n \n", &[], 20), "");
    }
}
