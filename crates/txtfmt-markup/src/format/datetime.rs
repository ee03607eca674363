use std::fmt::Write;

use crate::catalog::TagKind;
use crate::context::Context;
use crate::diagnostic::Diagnostic;

/// Current date and/or time in the configured format.
pub(super) fn stamp(kind: TagKind, cx: &mut Context<'_>) -> String {
    let options = cx.options;
    let format = match kind {
        TagKind::Date => options.date_format.as_str(),
        TagKind::Time => options.time_format.as_str(),
        _ => options.datetime_format.as_str(),
    };

    let mut out = String::new();
    if write!(out, "{}", cx.clock.now().format(format)).is_err() {
        cx.report(Diagnostic::invalid_attribute(kind.name(), format));
        out.clear();
    }
    out
}
