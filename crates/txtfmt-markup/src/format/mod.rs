//! Formatters, one per tag kind.
//!
//! Every formatter receives the tag's resolved [`Body`], its attributes and
//! the [`Context`], and returns final text. Output is spliced into the
//! document as-is and never scanned for tags again.

mod align;
mod calc;
mod datetime;
mod document;
mod header;
mod histogram;
mod table;

pub use histogram::render_histogram;
pub use table::{render_table, TableFlags};

use crate::catalog::TagKind;
use crate::context::Context;

/// The content between a paired tag's markers, after inner tags resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Body<'t> {
    /// Nothing between the markers (single tags always have this).
    Empty,
    Text(&'t str),
}

impl<'t> Body<'t> {
    /// The content as text. An empty body reads as one space.
    pub fn text(self) -> &'t str {
        match self {
            Body::Empty => " ",
            Body::Text(text) => text,
        }
    }

    /// Lines of content; an empty body has none.
    pub fn lines(self) -> impl Iterator<Item = &'t str> {
        let text = match self {
            Body::Empty => "",
            Body::Text(text) => text,
        };
        text.lines()
    }
}

/// First character of the first attribute, or `default`.
pub(crate) fn symbol_attr(attrs: &[&str], default: char) -> char {
    attrs
        .first()
        .and_then(|attr| attr.chars().next())
        .unwrap_or(default)
}

pub(crate) fn apply(kind: TagKind, body: Body<'_>, attrs: &[&str], cx: &mut Context<'_>) -> String {
    match kind {
        TagKind::Right => align::right(body, cx),
        TagKind::Center => align::center(body, cx),
        TagKind::Paragraph => align::paragraph(body, attrs, cx),
        TagKind::Frame => align::frame(body, cx),
        TagKind::List => align::list(body, attrs, cx),
        TagKind::Lines => document::lines(attrs, cx),
        TagKind::Sep => align::separator(attrs, cx),
        TagKind::H1 | TagKind::H2 | TagKind::H3 | TagKind::H4 => {
            header::header(kind, body, attrs, cx)
        }
        TagKind::Table => table::table(body, attrs, cx),
        TagKind::Histogram => histogram::histogram(body, attrs, cx),
        TagKind::Calc => calc::calc(body, attrs, cx),
        TagKind::Insert => document::insert(attrs, cx),
        TagKind::DocWidth => document::doc_width(attrs, cx),
        TagKind::DefaultWidth => document::default_width(cx),
        TagKind::Date | TagKind::Time | TagKind::DateTime => datetime::stamp(kind, cx),
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::context::{FixedClock, MemoryFiles, Options};
    use chrono::NaiveDate;
    use txtfmt_calc::Arithmetic;

    /// Runs `f` against a context with the given width and test collaborators.
    pub fn with_width<T>(width: usize, f: impl FnOnce(&mut Context<'_>) -> T) -> T {
        let options = Options {
            width,
            ..Options::default()
        };
        let at = NaiveDate::from_ymd_opt(2024, 3, 9)
            .and_then(|d| d.and_hms_opt(8, 5, 0))
            .unwrap();
        let clock = FixedClock(at);
        let files = MemoryFiles::new().with("note.txt", "a <b> c\n");
        let mut cx = Context::new(&options, &clock, &files, &Arithmetic);
        f(&mut cx)
    }
}
