//! Inline markup for plain-text documents.
//!
//! Documents contain tags such as `<center>…</center>`, `<table>…</table>`
//! or `<calc>…</calc>`; resolving a document replaces every tag with its
//! formatted text and yields plain text.
//!
//! # Example
//!
//! ```rust
//! use txtfmt_markup::{Engine, Options};
//!
//! let engine = Engine::new(Options { width: 20, ..Options::default() });
//! let out = engine.resolve("<h2>Totals</h2>\n<table nb>apples|3\npears|12</table>");
//!
//! assert_eq!(out.text, "====== Totals ======\napples  3\npears  12");
//! ```
//!
//! # Tags
//!
//! Paired tags wrap content and are resolved inside out: inner tags are
//! formatted before the tag around them sees its content. Single tags such
//! as `<sep>` or `<date>` stand alone. `txtfmt tags` or [`catalog::CATALOG`]
//! lists them all.
//!
//! # Diagnostics
//!
//! Resolution never fails. Unknown tags keep their content, unclosed tags
//! become a space, and each problem is reported as a [`Diagnostic`] on the
//! [`Rendered`] result.

pub mod catalog;
pub mod context;
mod diagnostic;
pub mod format;
mod resolve;
pub mod scan;
pub mod text;

pub use catalog::{Arity, TagClass, TagDescriptor, TagKind};
pub use context::{
    Clock, Context, DiskFiles, DocWidth, FileSource, FixedClock, MemoryFiles, Options, SystemClock,
};
pub use diagnostic::Diagnostic;
pub use format::{render_histogram, render_table, Body, TableFlags};
pub use resolve::{resolve, Engine, Rendered};
pub use scan::{CloseMatch, TagOccurrence};
