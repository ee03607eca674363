//! Static registry of the tag vocabulary.
//!
//! Every tag the engine understands has a [`TagDescriptor`] here. Lookups are
//! pure functions over the [`CATALOG`] table; an unknown name is never an
//! error, it simply has no descriptor.

use std::fmt;

/// Identifies a tag once its name has been looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    Right,
    Center,
    Paragraph,
    Frame,
    List,
    Lines,
    Histogram,
    Table,
    Calc,
    Sep,
    H1,
    H2,
    H3,
    H4,
    Insert,
    DocWidth,
    DefaultWidth,
    Date,
    Time,
    DateTime,
}

/// Whether a tag wraps content or stands alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagClass {
    /// `<name>` on its own; the open marker doubles as the close marker.
    Single,
    /// `<name>content</name>`.
    Paired,
}

/// How many attributes a tag accepts after its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    None,
    One,
    UpTo(u8),
}

impl Arity {
    /// Largest number of attributes the tag makes use of.
    pub fn max(self) -> usize {
        match self {
            Arity::None => 0,
            Arity::One => 1,
            Arity::UpTo(n) => n as usize,
        }
    }

    /// Numeric code used in listings: 0 none, 1 exactly one, N up to N.
    pub fn code(self) -> i32 {
        self.max() as i32
    }
}

/// A single attribute a tag understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeHelp {
    pub name: &'static str,
    pub description: &'static str,
}

/// Static description of one tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagDescriptor {
    pub name: &'static str,
    pub kind: TagKind,
    pub class: TagClass,
    pub arity: Arity,
    pub summary: &'static str,
    pub attributes: &'static [AttributeHelp],
}

impl TagDescriptor {
    pub fn is_single(&self) -> bool {
        self.class == TagClass::Single
    }

    /// Example invocation, e.g. `<table [nb] [nc] [na]>...</table>`.
    pub fn usage(&self) -> String {
        let mut open = String::from(self.name);
        for attr in self.attributes {
            open.push(' ');
            if self.arity == Arity::One {
                open.push_str(attr.name);
            } else {
                open.push('[');
                open.push_str(attr.name);
                open.push(']');
            }
        }
        match self.class {
            TagClass::Single => format!("<{}>", open),
            TagClass::Paired => format!("<{}>...</{}>", open, self.name),
        }
    }
}

macro_rules! attrs {
    ($($name:literal => $desc:literal),* $(,)?) => {
        &[$(AttributeHelp { name: $name, description: $desc }),*]
    };
}

/// Every known tag, in listing order.
pub static CATALOG: &[TagDescriptor] = &[
    TagDescriptor {
        name: "right",
        kind: TagKind::Right,
        class: TagClass::Paired,
        arity: Arity::None,
        summary: "align text to the right edge",
        attributes: &[],
    },
    TagDescriptor {
        name: "center",
        kind: TagKind::Center,
        class: TagClass::Paired,
        arity: Arity::None,
        summary: "center each line",
        attributes: &[],
    },
    TagDescriptor {
        name: "p",
        kind: TagKind::Paragraph,
        class: TagClass::Paired,
        arity: Arity::UpTo(1),
        summary: "paragraph with first-line indent",
        attributes: attrs!["r" => "any attribute aligns the paragraph to the right"],
    },
    TagDescriptor {
        name: "frame",
        kind: TagKind::Frame,
        class: TagClass::Paired,
        arity: Arity::None,
        summary: "draw a box around the text",
        attributes: &[],
    },
    TagDescriptor {
        name: "list",
        kind: TagKind::List,
        class: TagClass::Paired,
        arity: Arity::UpTo(1),
        summary: "numbered list, one item per line",
        attributes: attrs!["symbol" => "bulleted list using this symbol"],
    },
    TagDescriptor {
        name: "lines",
        kind: TagKind::Lines,
        class: TagClass::Single,
        arity: Arity::One,
        summary: "insert empty lines",
        attributes: attrs!["N" => "number of empty lines"],
    },
    TagDescriptor {
        name: "histogram",
        kind: TagKind::Histogram,
        class: TagClass::Paired,
        arity: Arity::UpTo(1),
        summary: "horizontal bar chart from label|value lines",
        attributes: attrs!["symbol" => "bar symbol instead of '#'"],
    },
    TagDescriptor {
        name: "table",
        kind: TagKind::Table,
        class: TagClass::Paired,
        arity: Arity::UpTo(3),
        summary: "table from cell|cell lines",
        attributes: attrs![
            "nb" => "no border",
            "nc" => "no calculations in cells",
            "na" => "do not right-align numbers",
        ],
    },
    TagDescriptor {
        name: "calc",
        kind: TagKind::Calc,
        class: TagClass::Paired,
        arity: Arity::UpTo(1),
        summary: "evaluate each line as an expression",
        attributes: attrs!["f" => "any attribute prints 'expression = result'"],
    },
    TagDescriptor {
        name: "sep",
        kind: TagKind::Sep,
        class: TagClass::Single,
        arity: Arity::UpTo(1),
        summary: "separator line across the document width",
        attributes: attrs!["symbol" => "line symbol instead of '-'"],
    },
    TagDescriptor {
        name: "h1",
        kind: TagKind::H1,
        class: TagClass::Paired,
        arity: Arity::UpTo(1),
        summary: "centered header between two full lines",
        attributes: attrs!["symbol" => "line symbol instead of '='"],
    },
    TagDescriptor {
        name: "h2",
        kind: TagKind::H2,
        class: TagClass::Paired,
        arity: Arity::UpTo(1),
        summary: "header centered in a line of symbols",
        attributes: attrs!["symbol" => "line symbol instead of '='"],
    },
    TagDescriptor {
        name: "h3",
        kind: TagKind::H3,
        class: TagClass::Paired,
        arity: Arity::UpTo(1),
        summary: "header centered in a line of symbols",
        attributes: attrs!["symbol" => "line symbol instead of '-'"],
    },
    TagDescriptor {
        name: "h4",
        kind: TagKind::H4,
        class: TagClass::Paired,
        arity: Arity::UpTo(1),
        summary: "underlined header",
        attributes: attrs!["symbol" => "underline symbol instead of '-'"],
    },
    TagDescriptor {
        name: "insert",
        kind: TagKind::Insert,
        class: TagClass::Single,
        arity: Arity::One,
        summary: "insert a text file verbatim",
        attributes: attrs!["path" => "file path, relative to the document"],
    },
    TagDescriptor {
        name: "doc_width",
        kind: TagKind::DocWidth,
        class: TagClass::Single,
        arity: Arity::One,
        summary: "set the document width for the following text",
        attributes: attrs!["N" => "width in columns, 10 to 250"],
    },
    TagDescriptor {
        name: "default_width",
        kind: TagKind::DefaultWidth,
        class: TagClass::Single,
        arity: Arity::None,
        summary: "restore the default document width",
        attributes: &[],
    },
    TagDescriptor {
        name: "date",
        kind: TagKind::Date,
        class: TagClass::Single,
        arity: Arity::None,
        summary: "current date",
        attributes: &[],
    },
    TagDescriptor {
        name: "time",
        kind: TagKind::Time,
        class: TagClass::Single,
        arity: Arity::None,
        summary: "current time",
        attributes: &[],
    },
    TagDescriptor {
        name: "datetime",
        kind: TagKind::DateTime,
        class: TagClass::Single,
        arity: Arity::None,
        summary: "current date and time",
        attributes: &[],
    },
];

/// Finds the descriptor for `name`.
pub fn lookup(name: &str) -> Option<&'static TagDescriptor> {
    CATALOG.iter().find(|d| d.name == name)
}

/// Position of `name` in the catalog, or -1 when unknown.
pub fn tag_index(name: &str) -> i32 {
    CATALOG
        .iter()
        .position(|d| d.name == name)
        .map_or(-1, |i| i as i32)
}

pub fn is_valid_tag(name: &str) -> bool {
    lookup(name).is_some()
}

pub fn is_single_tag(name: &str) -> bool {
    lookup(name).is_some_and(TagDescriptor::is_single)
}

/// Attribute arity of `name`, `None` when unknown.
pub fn arity(name: &str) -> Option<Arity> {
    lookup(name).map(|d| d.arity)
}

/// The literal opening marker for a raw tag token.
pub fn open_marker(token: &str) -> String {
    format!("<{}>", token)
}

/// The literal closing marker. Single tags close on their own open marker.
pub fn close_marker(token: &str) -> String {
    let name = token.split_whitespace().next().unwrap_or(token);
    if is_single_tag(name) {
        open_marker(token)
    } else {
        format!("</{}>", name)
    }
}

impl TagKind {
    pub fn descriptor(self) -> &'static TagDescriptor {
        // Every variant has exactly one catalog row; the tests check this.
        CATALOG
            .iter()
            .find(|d| d.kind == self)
            .unwrap_or(&CATALOG[0])
    }

    pub fn name(self) -> &'static str {
        self.descriptor().name
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod lookups {
        use super::*;

        #[test]
        fn known_tags() {
            assert_eq!(lookup("table").map(|d| d.kind), Some(TagKind::Table));
            assert_eq!(tag_index("right"), 0);
            assert_eq!(tag_index("datetime"), 19);
            assert!(is_valid_tag("h3"));
        }

        #[test]
        fn unknown_tags() {
            assert_eq!(tag_index("bogus"), -1);
            assert!(!is_valid_tag("bogus"));
            assert!(!is_single_tag("bogus"));
            assert_eq!(arity("bogus"), None);
        }

        #[test]
        fn names_are_case_sensitive() {
            assert!(!is_valid_tag("TABLE"));
        }

        #[test]
        fn single_tags() {
            let singles: Vec<_> = CATALOG
                .iter()
                .filter(|d| d.is_single())
                .map(|d| d.name)
                .collect();
            assert_eq!(
                singles,
                vec![
                    "lines",
                    "sep",
                    "insert",
                    "doc_width",
                    "default_width",
                    "date",
                    "time",
                    "datetime"
                ]
            );
        }

        #[test]
        fn arities() {
            assert_eq!(arity("table"), Some(Arity::UpTo(3)));
            assert_eq!(arity("insert"), Some(Arity::One));
            assert_eq!(arity("date"), Some(Arity::None));
            assert_eq!(Arity::UpTo(3).code(), 3);
        }
    }

    mod markers {
        use super::*;

        #[test]
        fn paired_close_uses_name_only() {
            assert_eq!(open_marker("table nb"), "<table nb>");
            assert_eq!(close_marker("table nb"), "</table>");
        }

        #[test]
        fn single_close_is_open() {
            assert_eq!(close_marker("sep *"), "<sep *>");
        }

        #[test]
        fn unknown_close_is_paired() {
            assert_eq!(close_marker("bogus"), "</bogus>");
        }
    }

    mod descriptors {
        use super::*;

        #[test]
        fn every_kind_round_trips() {
            for d in CATALOG {
                assert_eq!(d.kind.descriptor().name, d.name);
                assert_eq!(lookup(d.name), Some(d));
            }
            assert_eq!(CATALOG.len(), 20);
        }

        #[test]
        fn usage_lines() {
            assert_eq!(
                lookup("table").map(|d| d.usage()),
                Some("<table [nb] [nc] [na]>...</table>".to_string())
            );
            assert_eq!(
                lookup("insert").map(|d| d.usage()),
                Some("<insert path>".to_string())
            );
            assert_eq!(TagKind::DocWidth.to_string(), "doc_width");
        }
    }
}
