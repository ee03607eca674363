//! Tables from `cell|cell` lines.
//!
//! Column widths are computed per row shape: rows are grouped by how many
//! cells they have and each group gets its own widths. A three-cell row and
//! a four-cell row never share a column width.
//!
//! ```text
//! <table>            +---+-+
//! a|b          =>    |a  |b|
//! ccc|d              +---+-+
//! </table>           |ccc|d|
//!                    +---+-+
//! ```

use std::collections::BTreeMap;

use txtfmt_calc::{format_number, Evaluator};

use super::Body;
use crate::context::Context;
use crate::diagnostic::Diagnostic;
use crate::text::{
    display_width, is_numeric, pad_left, pad_right, replace_symbol, split_nonempty,
};
use unicode_width::UnicodeWidthChar;

/// Rendering switches parsed from the tag's attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableFlags {
    /// Draw `+-|` borders (cleared by `nb`).
    pub border: bool,
    /// Evaluate each cell as an expression (cleared by `nc`).
    pub calc: bool,
    /// Right-align numeric cells (cleared by `na`).
    pub align_numbers: bool,
}

impl Default for TableFlags {
    fn default() -> Self {
        Self {
            border: true,
            calc: true,
            align_numbers: true,
        }
    }
}

impl TableFlags {
    /// Reads `nb`, `nc` and `na`; returns the flags and any unrecognized attributes.
    pub fn from_attrs<'a>(attrs: &[&'a str]) -> (Self, Vec<&'a str>) {
        let mut flags = Self::default();
        let mut unknown = Vec::new();
        for &attr in attrs {
            match attr {
                "nb" => flags.border = false,
                "nc" => flags.calc = false,
                "na" => flags.align_numbers = false,
                other => unknown.push(other),
            }
        }
        (flags, unknown)
    }
}

/// Renders `content` as a table.
///
/// Rows are the non-empty lines, cells the non-empty `|`-separated pieces.
/// A table with no rows renders as an empty string.
pub fn render_table(content: &str, attrs: &[&str], evaluator: &dyn Evaluator) -> String {
    let (flags, _) = TableFlags::from_attrs(attrs);

    let rows: Vec<Vec<String>> = split_nonempty(content, '\n')
        .map(|line| {
            split_nonempty(line, '|')
                .map(|cell| {
                    if flags.calc {
                        calc_cell(cell, evaluator)
                    } else {
                        cell.to_string()
                    }
                })
                .collect::<Vec<_>>()
        })
        .filter(|row| !row.is_empty())
        .collect();

    if rows.is_empty() {
        return String::new();
    }

    let widths = column_widths(&rows);
    let lines: Vec<String> = rows
        .iter()
        .map(|row| {
            let shape = widths.get(&row.len()).map(Vec::as_slice).unwrap_or(&[]);
            render_row(row, shape, flags)
        })
        .collect();

    if !flags.border {
        return lines.join("\n");
    }

    let mut out = Vec::with_capacity(lines.len() * 2 + 1);
    out.push(border_line(None, lines.first().map(String::as_str)));
    for (i, line) in lines.iter().enumerate() {
        out.push(line.clone());
        out.push(border_line(Some(line), lines.get(i + 1).map(String::as_str)));
    }
    out.join("\n")
}

pub(super) fn table(body: Body<'_>, attrs: &[&str], cx: &mut Context<'_>) -> String {
    let (_, unknown) = TableFlags::from_attrs(attrs);
    for value in unknown {
        cx.report(Diagnostic::invalid_attribute("table", value));
    }
    match body {
        Body::Empty => String::new(),
        Body::Text(text) => render_table(text, attrs, cx.evaluator()),
    }
}

/// Replaces a cell with its computed value, or keeps it when it is not an expression.
fn calc_cell(cell: &str, evaluator: &dyn Evaluator) -> String {
    let expr = replace_symbol(cell, ',', '.');
    match evaluator.evaluate(&expr) {
        Ok(value) => format_number(value),
        Err(_) => cell.to_string(),
    }
}

/// Column widths keyed by row cell count.
fn column_widths(rows: &[Vec<String>]) -> BTreeMap<usize, Vec<usize>> {
    let mut widths: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for row in rows {
        let shape = widths.entry(row.len()).or_insert_with(|| vec![0; row.len()]);
        for (width, cell) in shape.iter_mut().zip(row) {
            *width = (*width).max(display_width(cell));
        }
    }
    widths
}

fn render_row(row: &[String], widths: &[usize], flags: TableFlags) -> String {
    let cells: Vec<String> = row
        .iter()
        .zip(widths)
        .map(|(cell, &width)| {
            if flags.align_numbers && is_numeric(cell) {
                pad_left(cell, width)
            } else {
                pad_right(cell, width)
            }
        })
        .collect();

    if flags.border {
        format!("|{}|", cells.join("|"))
    } else {
        cells.join(" ")
    }
}

/// Display columns holding a `|`, and the row's total width.
fn bar_columns(row: &str) -> (Vec<bool>, usize) {
    let mut bars = Vec::new();
    for c in row.chars() {
        let width = c.width().unwrap_or(0);
        bars.push(c == '|');
        for _ in 1..width {
            bars.push(false);
        }
    }
    let len = bars.len();
    (bars, len)
}

/// A border line: `+` wherever the row above or below has `|`, `-` elsewhere.
fn border_line(above: Option<&str>, below: Option<&str>) -> String {
    let (top, top_len) = above.map(bar_columns).unwrap_or_default();
    let (bottom, bottom_len) = below.map(bar_columns).unwrap_or_default();

    (0..top_len.max(bottom_len))
        .map(|col| {
            let joint = top.get(col).copied().unwrap_or(false)
                || bottom.get(col).copied().unwrap_or(false);
            if joint {
                '+'
            } else {
                '-'
            }
        })
        .collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use txtfmt_calc::Arithmetic;

    fn uniform_table() -> impl Strategy<Value = Vec<Vec<String>>> {
        (1usize..5).prop_flat_map(|cols| {
            prop::collection::vec(prop::collection::vec("[a-z]{1,8}", cols), 1..6)
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn columns_match_widest_cell(rows in uniform_table()) {
            let content = rows.iter().map(|r| r.join("|")).collect::<Vec<_>>().join("\n");
            let out = render_table(&content, &["nc"], &Arithmetic);

            let cols = rows[0].len();
            let expected: Vec<usize> = (0..cols)
                .map(|j| rows.iter().map(|r| r[j].len()).max().unwrap_or(0))
                .collect();

            for line in out.lines().filter(|l| l.starts_with('|')) {
                let widths: Vec<usize> = line
                    .trim_matches('|')
                    .split('|')
                    .map(str::len)
                    .collect();
                prop_assert_eq!(&widths, &expected);
            }
        }

        #[test]
        fn bordered_lines_share_width(rows in uniform_table()) {
            let content = rows.iter().map(|r| r.join("|")).collect::<Vec<_>>().join("\n");
            let out = render_table(&content, &["nc"], &Arithmetic);
            let first = out.lines().next().map(str::len).unwrap_or(0);
            prop_assert!(out.lines().all(|l| l.len() == first));
            prop_assert_eq!(out.lines().count(), rows.len() * 2 + 1);
        }
    }
}
