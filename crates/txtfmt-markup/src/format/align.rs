//! Line alignment, paragraphs, frames, lists and separators.
//!
//! Lines wider than the document width are never cut; they are emitted
//! unpadded.

use super::{symbol_attr, Body};
use crate::context::Context;
use crate::text::{
    display_width, pad_center, pad_left, pad_right, repeat_symbol, wrap, wrap_indent,
};

const PARAGRAPH_INDENT: usize = 4;

fn map_lines(body: Body<'_>, f: impl Fn(&str) -> String) -> String {
    body.text()
        .split('\n')
        .map(|line| if line.is_empty() { String::new() } else { f(line) })
        .collect::<Vec<_>>()
        .join("\n")
}

pub(super) fn right(body: Body<'_>, cx: &mut Context<'_>) -> String {
    let width = cx.width();
    map_lines(body, |line| pad_left(line, width))
}

pub(super) fn center(body: Body<'_>, cx: &mut Context<'_>) -> String {
    let width = cx.width();
    map_lines(body, |line| pad_center(line, width))
}

/// Blank-line separated blocks become reflowed paragraphs.
pub(super) fn paragraph(body: Body<'_>, attrs: &[&str], cx: &mut Context<'_>) -> String {
    let width = cx.width();
    let align_right = !attrs.is_empty();

    let mut blocks: Vec<Vec<&str>> = vec![Vec::new()];
    for line in body.text().lines() {
        if line.trim().is_empty() {
            if blocks.last().is_some_and(|b| !b.is_empty()) {
                blocks.push(Vec::new());
            }
        } else if let Some(block) = blocks.last_mut() {
            block.push(line);
        }
    }
    blocks.retain(|b| !b.is_empty());

    blocks
        .iter()
        .map(|block| {
            let text = block.join(" ");
            if align_right {
                wrap(&text, width)
                    .iter()
                    .map(|line| pad_left(line, width))
                    .collect::<Vec<_>>()
                    .join("\n")
            } else {
                let indent = " ".repeat(PARAGRAPH_INDENT);
                wrap_indent(&text, width, PARAGRAPH_INDENT, 0)
                    .into_iter()
                    .enumerate()
                    .map(|(i, line)| if i == 0 { format!("{}{}", indent, line) } else { line })
                    .collect::<Vec<_>>()
                    .join("\n")
            }
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Boxes the text with `+`, `-` and `|`, fitted to the widest line.
pub(super) fn frame(body: Body<'_>, cx: &mut Context<'_>) -> String {
    let inner_limit = cx.width().saturating_sub(4);
    let mut lines = Vec::new();
    for source in body.text().lines() {
        if source.trim().is_empty() {
            lines.push(String::new());
        } else {
            lines.extend(wrap(source, inner_limit));
        }
    }
    if lines.is_empty() {
        lines.push(String::new());
    }

    let inner = lines.iter().map(String::as_str).map(display_width).max().unwrap_or(0);
    let border = format!("+{}+", repeat_symbol('-', inner + 2));

    let mut out = Vec::with_capacity(lines.len() + 2);
    out.push(border.clone());
    for line in &lines {
        out.push(format!("| {} |", pad_right(line, inner)));
    }
    out.push(border);
    out.join("\n")
}

/// One item per non-blank line, numbered or bulleted, with hanging indent.
pub(super) fn list(body: Body<'_>, attrs: &[&str], cx: &mut Context<'_>) -> String {
    let width = cx.width();
    let items: Vec<&str> = body
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let number_width = items.len().to_string().len();
    let bullet = attrs.first().map(|_| symbol_attr(attrs, '*'));

    let mut out = Vec::new();
    for (i, item) in items.iter().enumerate() {
        let marker = match bullet {
            Some(symbol) => format!("{} ", symbol),
            None => format!("{}. ", pad_left(&(i + 1).to_string(), number_width)),
        };
        let indent = display_width(&marker);
        let hang = " ".repeat(indent);
        for (j, line) in wrap_indent(item, width, indent, indent).into_iter().enumerate() {
            let prefix = if j == 0 { marker.as_str() } else { hang.as_str() };
            out.push(format!("{}{}", prefix, line));
        }
    }
    out.join("\n")
}

pub(super) fn separator(attrs: &[&str], cx: &mut Context<'_>) -> String {
    repeat_symbol(symbol_attr(attrs, '-'), cx.width())
}
