//! Tags acting on the document rather than on content: width control,
//! blank lines and file insertion.

use crate::context::Context;
use crate::diagnostic::Diagnostic;

pub(super) fn doc_width(attrs: &[&str], cx: &mut Context<'_>) -> String {
    match attrs.first().map(|a| a.parse::<i64>()) {
        Some(Ok(width)) => cx.set_width(width),
        Some(Err(_)) | None => {
            let value = attrs.first().copied().unwrap_or_default();
            cx.report(Diagnostic::invalid_attribute("doc_width", value));
        }
    }
    String::new()
}

pub(super) fn default_width(cx: &mut Context<'_>) -> String {
    cx.reset_width();
    String::new()
}

/// Most blank lines a single `<lines N>` produces.
pub(crate) const MAX_LINES: usize = 1000;

/// `<lines N>` stands for N empty lines when it sits on its own line.
/// N above [`MAX_LINES`] is reported and clamped.
pub(super) fn lines(attrs: &[&str], cx: &mut Context<'_>) -> String {
    let count = match attrs.first() {
        None => 1,
        Some(value) => match value.parse::<usize>() {
            Ok(n) if n <= MAX_LINES => n,
            Ok(_) => {
                cx.report(Diagnostic::invalid_attribute("lines", *value));
                MAX_LINES
            }
            Err(_) => {
                cx.report(Diagnostic::invalid_attribute("lines", *value));
                1
            }
        },
    };
    "\n".repeat(count.saturating_sub(1))
}

/// Inserts a file verbatim. Its markup is not resolved.
pub(super) fn insert(attrs: &[&str], cx: &mut Context<'_>) -> String {
    let Some(path) = attrs.first() else {
        cx.report(Diagnostic::invalid_attribute("insert", ""));
        return String::new();
    };

    match cx.files.read(path) {
        Ok(content) => match content.strip_suffix('\n') {
            Some(stripped) => stripped.to_string(),
            None => content,
        },
        Err(err) => {
            cx.report(Diagnostic::FileOpen {
                path: path.to_string(),
                reason: err.to_string(),
            });
            String::new()
        }
    }
}
