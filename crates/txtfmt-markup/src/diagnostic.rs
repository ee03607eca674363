//! Advisory messages produced while resolving a document.
//!
//! None of these stop resolution. The engine records them in order on the
//! [`Rendered`](crate::Rendered) result and logs each one as a warning.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    #[error("invalid tag \"{name}\". Ignoring")]
    UnknownTag { name: String },

    #[error("no closing tag found for \"{name}\". Ignoring")]
    MissingCloseTag { name: String },

    #[error("document width cannot be less than {min} characters (requested {requested})")]
    WidthTooSmall { requested: i64, min: usize },

    #[error("document width cannot be more than {max} characters (requested {requested})")]
    WidthTooLarge { requested: i64, max: usize },

    #[error("cannot open file \"{path}\": {reason}")]
    FileOpen { path: String, reason: String },

    #[error("invalid value \"{value}\" for tag \"{tag}\"")]
    InvalidAttribute { tag: String, value: String },

    #[error("tag \"{tag}\" takes at most {expected} attribute(s), found {found}")]
    UnexpectedAttributes {
        tag: String,
        expected: usize,
        found: usize,
    },

    #[error("tag \"{name}\" is nested deeper than {limit} levels. Left as text")]
    NestingTooDeep { name: String, limit: usize },
}

impl Diagnostic {
    pub fn unknown_tag(name: impl Into<String>) -> Self {
        Self::UnknownTag { name: name.into() }
    }

    pub fn missing_close(name: impl Into<String>) -> Self {
        Self::MissingCloseTag { name: name.into() }
    }

    pub fn invalid_attribute(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidAttribute {
            tag: tag.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            Diagnostic::unknown_tag("bogus").to_string(),
            "invalid tag \"bogus\". Ignoring"
        );
        assert_eq!(
            Diagnostic::missing_close("center").to_string(),
            "no closing tag found for \"center\". Ignoring"
        );
        assert_eq!(
            Diagnostic::WidthTooSmall {
                requested: 4,
                min: 10
            }
            .to_string(),
            "document width cannot be less than 10 characters (requested 4)"
        );
    }
}
