//! The tag-resolution engine.
//!
//! Resolution walks the document once, left to right. For each tag found it
//! locates the content, resolves that content recursively, hands the result
//! to the tag's formatter and appends the formatter output to the result.
//! Text produced by a formatter is final: it is never scanned for tags
//! again, so literal `<` and `>` in inserted files or passthrough content
//! survive untouched.
//!
//! Problems never abort resolution. Unknown tags, missing closing markers
//! and the like are recorded as [`Diagnostic`]s and the engine carries on
//! with a best-effort rendering.

use std::fmt;

use txtfmt_calc::{Arithmetic, Evaluator};

use crate::catalog::{lookup, TagKind};
use crate::context::{Clock, Context, DiskFiles, FileSource, Options, SystemClock};
use crate::diagnostic::Diagnostic;
use crate::format::{self, Body};
use crate::scan::{find_close, find_next_tag, TagOccurrence};

/// The outcome of resolving one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    /// Advisory messages, in the order they were raised.
    pub diagnostics: Vec<Diagnostic>,
    /// Tags whose formatter ran, in the order they ran.
    pub expansions: Vec<TagKind>,
}

impl Rendered {
    pub fn into_text(self) -> String {
        self.text
    }
}

impl fmt::Display for Rendered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Resolves documents with a fixed set of options and collaborators.
///
/// # Example
///
/// ```rust
/// use txtfmt_markup::{Engine, Options};
///
/// let engine = Engine::new(Options { width: 10, ..Options::default() });
/// let out = engine.resolve("<center>hi</center>");
/// assert_eq!(out.text, "    hi    ");
/// assert!(out.diagnostics.is_empty());
/// ```
pub struct Engine {
    options: Options,
    clock: Box<dyn Clock>,
    files: Box<dyn FileSource>,
    evaluator: Box<dyn Evaluator>,
}

impl Engine {
    pub fn new(options: Options) -> Self {
        Self {
            options,
            clock: Box::new(SystemClock),
            files: Box::new(DiskFiles::default()),
            evaluator: Box::new(Arithmetic),
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_files(mut self, files: impl FileSource + 'static) -> Self {
        self.files = Box::new(files);
        self
    }

    pub fn with_evaluator(mut self, evaluator: impl Evaluator + 'static) -> Self {
        self.evaluator = Box::new(evaluator);
        self
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Resolves every tag in `document`.
    pub fn resolve(&self, document: &str) -> Rendered {
        let mut cx = Context::new(
            &self.options,
            self.clock.as_ref(),
            self.files.as_ref(),
            self.evaluator.as_ref(),
        );
        let text = resolve_text(document, 0, &mut cx);
        Rendered {
            text,
            diagnostics: cx.diagnostics,
            expansions: cx.expansions,
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

/// Resolves `document` with default options, the system clock and files
/// relative to the working directory.
pub fn resolve(document: &str) -> Rendered {
    Engine::default().resolve(document)
}

fn resolve_text(text: &str, depth: usize, cx: &mut Context<'_>) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pos = 0;
    while let Some(tag) = find_next_tag(text, pos) {
        out.push_str(&text[pos..tag.start]);
        pos = resolve_occurrence(text, &tag, depth, cx, &mut out);
    }
    out.push_str(&text[pos..]);
    out
}

/// One leading and one trailing newline belong to the markers, not the content.
fn trim_content(content: &str) -> &str {
    let content = content.strip_prefix('\n').unwrap_or(content);
    content.strip_suffix('\n').unwrap_or(content)
}

/// Resolves one tag, appends its replacement to `out` and returns the
/// position to continue scanning from.
fn resolve_occurrence(
    text: &str,
    tag: &TagOccurrence<'_>,
    depth: usize,
    cx: &mut Context<'_>,
    out: &mut String,
) -> usize {
    let descriptor = lookup(tag.name);

    let (content, resume) = match descriptor {
        Some(d) if d.is_single() => (None, tag.end),
        _ => match find_close(text, tag.end, tag.name, cx.options.close_match) {
            Some((close_start, close_end)) => (Some(&text[tag.end..close_start]), close_end),
            None if descriptor.is_some() => {
                cx.report(Diagnostic::missing_close(tag.name));
                out.push(' ');
                return tag.end;
            }
            None => {
                cx.report(Diagnostic::unknown_tag(tag.name));
                out.push_str(&text[tag.start..tag.end]);
                return tag.end;
            }
        },
    };

    if depth >= cx.options.max_depth {
        cx.report(Diagnostic::NestingTooDeep {
            name: tag.name.to_string(),
            limit: cx.options.max_depth,
        });
        out.push_str(&text[tag.start..resume]);
        return resume;
    }

    if descriptor.is_none() {
        cx.report(Diagnostic::unknown_tag(tag.name));
    }

    let resolved = content
        .map(trim_content)
        .filter(|c| !c.is_empty())
        .map(|c| resolve_text(c, depth + 1, cx));
    let body = match &resolved {
        Some(inner) => Body::Text(inner),
        None => Body::Empty,
    };

    let Some(descriptor) = descriptor else {
        out.push_str(body.text());
        return resume;
    };

    let allowed = descriptor.arity.max();
    if tag.attrs.len() > allowed {
        cx.report(Diagnostic::UnexpectedAttributes {
            tag: descriptor.name.to_string(),
            expected: allowed,
            found: tag.attrs.len(),
        });
    }

    tracing::debug!(tag = descriptor.name, depth, "expanding tag");
    out.push_str(&format::apply(descriptor.kind, body, &tag.attrs, cx));
    cx.expansions.push(descriptor.kind);
    resume
}
