//! Locating tags and their closing markers in raw text.
//!
//! A tag is `<name attr attr>` where `name` follows identifier rules:
//! - Starts with an ASCII letter or underscore
//! - Followed by ASCII letters, digits, underscores or hyphens
//!
//! Anything else between `<` and `>` is literal text. Closing markers
//! (`</name>`) are never reported as tags: they are only searched for
//! relative to an opening tag, with [`find_close`].

use serde::Deserialize;

use crate::catalog::close_marker;

/// One opening tag found in the text. Offsets are byte positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagOccurrence<'a> {
    /// Position of the `<`.
    pub start: usize,
    /// Position just past the `>`.
    pub end: usize,
    /// Everything between the brackets.
    pub token: &'a str,
    pub name: &'a str,
    pub attrs: Vec<&'a str>,
}

/// How a paired tag finds its closing marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CloseMatch {
    /// The first literal `</name>` after the opening tag.
    #[default]
    First,
    /// Depth counting: same-name tags opened in between must close first.
    Nested,
}

/// Checks a tag name against the identifier rules.
pub fn is_valid_tag_name(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Parses the tag whose `<` sits at `start`, if it is one.
fn tag_at(text: &str, start: usize) -> Option<TagOccurrence<'_>> {
    let after = &text[start + 1..];
    let close = after.find('>')?;
    let token = &after[..close];
    if token.contains(['<', '\n']) {
        return None;
    }

    let mut parts = token.split_whitespace();
    let name = parts.next()?;
    if !token.starts_with(name) || !is_valid_tag_name(name) {
        return None;
    }

    Some(TagOccurrence {
        start,
        end: start + 1 + close + 1,
        token,
        name,
        attrs: parts.collect(),
    })
}

/// Finds the first tag at or after byte offset `from`.
///
/// Runs of `<` are skipped so the tag starts at the last one: `<<b>` holds
/// the tag `<b>` preceded by a literal `<`. Stray closing markers and
/// bracketed text that is not a tag are passed over.
pub fn find_next_tag(text: &str, from: usize) -> Option<TagOccurrence<'_>> {
    let bytes = text.as_bytes();
    let mut pos = from;

    while let Some(rel) = text[pos..].find('<') {
        let mut start = pos + rel;
        while bytes.get(start + 1) == Some(&b'<') {
            start += 1;
        }
        if let Some(tag) = tag_at(text, start) {
            return Some(tag);
        }
        pos = start + 1;
    }

    None
}

/// Finds the closing marker for the tag `name`, searching from `from`.
///
/// Returns the byte range of the marker. The marker comes from
/// [`close_marker`], so a single tag name searches for its own open marker.
pub fn find_close(text: &str, from: usize, name: &str, strategy: CloseMatch) -> Option<(usize, usize)> {
    let marker = close_marker(name);

    match strategy {
        CloseMatch::First => text[from..]
            .find(&marker)
            .map(|rel| (from + rel, from + rel + marker.len())),
        CloseMatch::Nested => {
            let mut depth = 0usize;
            let mut pos = from;
            while let Some(rel) = text[pos..].find('<') {
                let at = pos + rel;
                if text[at..].starts_with(&marker) {
                    if depth == 0 {
                        return Some((at, at + marker.len()));
                    }
                    depth -= 1;
                    pos = at + marker.len();
                } else if let Some(tag) = tag_at(text, at).filter(|t| t.name == name) {
                    depth += 1;
                    pos = tag.end;
                } else {
                    pos = at + 1;
                }
            }
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod tags {
        use super::*;

        #[test]
        fn simple_tag() {
            let tag = find_next_tag("ab<center>x", 0).unwrap();
            assert_eq!(tag.start, 2);
            assert_eq!(tag.end, 10);
            assert_eq!(tag.name, "center");
            assert!(tag.attrs.is_empty());
        }

        #[test]
        fn attributes_split_on_whitespace() {
            let tag = find_next_tag("<table  nb\tna>", 0).unwrap();
            assert_eq!(tag.token, "table  nb\tna");
            assert_eq!(tag.attrs, vec!["nb", "na"]);
        }

        #[test]
        fn run_of_brackets() {
            let tag = find_next_tag("<<<sep>", 0).unwrap();
            assert_eq!(tag.start, 2);
            assert_eq!(tag.name, "sep");
        }

        #[test]
        fn stray_close_is_skipped() {
            let tag = find_next_tag("</p> then <h1>", 0).unwrap();
            assert_eq!(tag.name, "h1");
        }

        #[test]
        fn comparisons_are_not_tags() {
            assert_eq!(find_next_tag("a < b and c > d", 0), None);
            assert_eq!(find_next_tag("1<2", 0), None);
            assert_eq!(find_next_tag("<>", 0), None);
        }

        #[test]
        fn token_cannot_span_lines() {
            assert_eq!(find_next_tag("<a\nb>", 0), None);
        }

        #[test]
        fn inner_bracket_restarts() {
            let tag = find_next_tag("<a <b>", 0).unwrap();
            assert_eq!(tag.name, "b");
            assert_eq!(tag.start, 3);
        }

        #[test]
        fn search_from_offset() {
            let tag = find_next_tag("<a><b>", 1).unwrap();
            assert_eq!(tag.name, "b");
        }

        #[test]
        fn no_closing_bracket() {
            assert_eq!(find_next_tag("<center", 0), None);
        }
    }

    mod names {
        use super::*;

        #[test]
        fn valid_names() {
            assert!(is_valid_tag_name("h1"));
            assert!(is_valid_tag_name("doc_width"));
            assert!(is_valid_tag_name("my-tag"));
            assert!(is_valid_tag_name("_x"));
        }

        #[test]
        fn invalid_names() {
            assert!(!is_valid_tag_name(""));
            assert!(!is_valid_tag_name("1a"));
            assert!(!is_valid_tag_name("-a"));
            assert!(!is_valid_tag_name("a.b"));
        }
    }

    mod closing {
        use super::*;

        const NESTED: &str = "<p>a<p>b</p>c</p>";

        #[test]
        fn first_occurrence() {
            assert_eq!(find_close(NESTED, 3, "p", CloseMatch::First), Some((8, 12)));
        }

        #[test]
        fn depth_counting() {
            assert_eq!(find_close(NESTED, 3, "p", CloseMatch::Nested), Some((13, 17)));
        }

        #[test]
        fn other_names_do_not_count() {
            let text = "<p><b>x</b></p>";
            assert_eq!(find_close(text, 3, "p", CloseMatch::Nested), Some((11, 15)));
        }

        #[test]
        fn missing_close() {
            assert_eq!(find_close("<p>abc", 3, "p", CloseMatch::First), None);
            assert_eq!(find_close("<p>a<p>b</p>", 3, "p", CloseMatch::Nested), None);
        }

        #[test]
        fn marker_matches_catalog() {
            let text = "<bogus>x</bogus>";
            let (start, end) = find_close(text, 7, "bogus", CloseMatch::First).unwrap();
            assert_eq!(&text[start..end], close_marker("bogus"));
        }

        #[test]
        fn single_tag_closes_on_its_open_marker() {
            let text = "<sep>x<sep>";
            assert_eq!(find_close(text, 5, "sep", CloseMatch::First), Some((6, 11)));
        }
    }
}
