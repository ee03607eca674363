//! Headers `h1` to `h4`.
//!
//! Header text is flattened to a single line. When it is wider than the
//! document, the width is raised to fit it for this header only.

use super::{symbol_attr, Body};
use crate::catalog::TagKind;
use crate::context::Context;
use crate::text::{display_width, pad_center, repeat_symbol};

fn default_symbol(kind: TagKind) -> char {
    match kind {
        TagKind::H1 | TagKind::H2 => '=',
        _ => '-',
    }
}

pub(super) fn header(kind: TagKind, body: Body<'_>, attrs: &[&str], cx: &mut Context<'_>) -> String {
    let text = body.text().split_whitespace().collect::<Vec<_>>().join(" ");
    let len = display_width(&text);
    let symbol = symbol_attr(attrs, default_symbol(kind));

    if kind == TagKind::H4 {
        return format!("{}\n{}", text, repeat_symbol(symbol, len));
    }

    let min_width = if len > cx.width() { len + 4 } else { 0 };
    cx.with_min_width(min_width, |cx| {
        let width = cx.width();
        if kind == TagKind::H1 {
            let rule = repeat_symbol(symbol, width);
            return format!("{}\n{}\n{}", rule, pad_center(&text, width), rule);
        }

        let left = width.saturating_sub(len + 1) / 2;
        let mut line = repeat_symbol(symbol, left);
        line.push(' ');
        line.push_str(&text);
        line.push(' ');
        line.push_str(&repeat_symbol(symbol, width.saturating_sub(left + len + 2)));
        line
    })
}
