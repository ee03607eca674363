//! The `tags` subcommand: a listing of the tag catalog.

use std::io::{self, Write};

use anyhow::{bail, Result};
use console::{pad_str, style, Alignment};
use txtfmt_markup::catalog::{lookup, CATALOG};
use txtfmt_markup::{Arity, TagClass, TagDescriptor};

fn class_label(class: TagClass) -> &'static str {
    match class {
        TagClass::Single => "single",
        TagClass::Paired => "paired",
    }
}

fn arity_label(arity: Arity) -> String {
    match arity {
        Arity::None => "no attributes".to_string(),
        Arity::One => "one attribute".to_string(),
        Arity::UpTo(n) => format!("up to {} attributes", n),
    }
}

/// One line per tag: name, class and summary.
pub fn list(out: &mut impl Write) -> io::Result<()> {
    let name_width = CATALOG.iter().map(|d| d.name.len()).max().unwrap_or(0);
    for descriptor in CATALOG {
        writeln!(
            out,
            "{}  {}  {}",
            pad_str(descriptor.name, name_width, Alignment::Left, None),
            pad_str(class_label(descriptor.class), 6, Alignment::Left, None),
            descriptor.summary
        )?;
    }
    Ok(())
}

fn describe_descriptor(descriptor: &TagDescriptor, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", style(descriptor.usage()).bold())?;
    writeln!(
        out,
        "  {} tag, {}",
        class_label(descriptor.class),
        arity_label(descriptor.arity)
    )?;
    writeln!(out, "  {}", descriptor.summary)?;

    if !descriptor.attributes.is_empty() {
        writeln!(out)?;
        let width = descriptor
            .attributes
            .iter()
            .map(|a| a.name.len())
            .max()
            .unwrap_or(0);
        for attr in descriptor.attributes {
            writeln!(
                out,
                "  {}  {}",
                pad_str(attr.name, width, Alignment::Left, None),
                attr.description
            )?;
        }
    }
    Ok(())
}

/// Usage, class and attributes of the tag called `name`.
pub fn describe(name: &str, out: &mut impl Write) -> Result<()> {
    let Some(descriptor) = lookup(name) else {
        bail!("unknown tag \"{}\", run `txtfmt tags` for the full list", name);
    };
    describe_descriptor(descriptor, out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing() -> String {
        let mut buf = Vec::new();
        list(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn every_tag_listed_once() {
        let text = listing();
        assert_eq!(text.lines().count(), CATALOG.len());
        for descriptor in CATALOG {
            assert!(text
                .lines()
                .any(|line| line.split_whitespace().next() == Some(descriptor.name)));
        }
    }

    #[test]
    fn columns_line_up() {
        let text = listing();
        let offsets: Vec<_> = text
            .lines()
            .map(|line| line.find("single").or_else(|| line.find("paired")))
            .collect();
        assert!(offsets.iter().all(|o| *o == offsets[0] && o.is_some()));
    }

    #[test]
    fn describe_known_tag() {
        let mut buf = Vec::new();
        describe("table", &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("<table [nb] [nc] [na]>...</table>"));
        assert!(text.contains("paired tag, up to 3 attributes"));
        assert!(text.lines().any(|l| l.trim_start().starts_with("nb")));
    }

    #[test]
    fn describe_unknown_tag() {
        let mut buf = Vec::new();
        let err = describe("bogus", &mut buf).unwrap_err();
        assert!(err.to_string().contains("bogus"));
        assert!(buf.is_empty());
    }
}
