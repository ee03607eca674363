//! Command-line definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::Config;
use txtfmt_markup::CloseMatch;

/// Render markup documents into formatted plain text.
///
/// Each source file (`*.txtm` by default) is rendered into a sibling file
/// with the target extension (`*.txt` by default).
#[derive(Debug, Parser)]
#[command(name = "txtfmt", version)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub render: RenderArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render source files (the default)
    Render(RenderArgs),

    /// List the known tags, or describe one
    Tags {
        /// Tag to describe
        name: Option<String>,
    },
}

#[derive(Debug, Clone, Default, Args)]
pub struct RenderArgs {
    /// Files or directories to render
    #[arg(value_name = "PATHS")]
    pub paths: Vec<PathBuf>,

    /// Starting document width
    #[arg(short, long)]
    pub width: Option<usize>,

    /// Config file (defaults to ./txtfmt.yaml when present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Pair nested tags of the same name by depth
    #[arg(long)]
    pub nested: bool,

    /// Deepest tag nesting to resolve
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Extension of source files
    #[arg(long, value_name = "EXT")]
    pub source_ext: Option<String>,

    /// Extension of rendered files
    #[arg(long, value_name = "EXT")]
    pub target_ext: Option<String>,

    /// Print rendered text instead of writing target files
    #[arg(long)]
    pub stdout: bool,

    /// Only print diagnostics
    #[arg(short, long)]
    pub quiet: bool,
}

impl RenderArgs {
    /// Applies command-line overrides on top of a loaded config.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(width) = self.width {
            config.options.width = width;
        }
        if self.nested {
            config.options.close_match = CloseMatch::Nested;
        }
        if let Some(depth) = self.max_depth {
            config.options.max_depth = depth;
        }
        if let Some(ext) = &self.source_ext {
            config.source_extension = ext.trim_start_matches('.').to_string();
        }
        if let Some(ext) = &self.target_ext {
            config.target_extension = ext.trim_start_matches('.').to_string();
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("txtfmt").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn bare_invocation_renders() {
        let cli = parse(&[]);
        assert!(cli.command.is_none());
        assert!(cli.render.paths.is_empty());
    }

    #[test]
    fn top_level_flags() {
        let cli = parse(&["-w", "60", "--nested", "docs", "a.txtm"]);
        assert_eq!(cli.render.width, Some(60));
        assert!(cli.render.nested);
        assert_eq!(
            cli.render.paths,
            vec![PathBuf::from("docs"), PathBuf::from("a.txtm")]
        );
    }

    #[test]
    fn tags_subcommand() {
        let cli = parse(&["tags", "table"]);
        assert!(matches!(cli.command, Some(Command::Tags { name: Some(ref n) }) if n == "table"));
    }

    #[test]
    fn overrides_win_over_config() {
        let args = RenderArgs {
            width: Some(33),
            max_depth: Some(3),
            source_ext: Some(".src".into()),
            nested: true,
            ..RenderArgs::default()
        };
        let config = args.apply(Config::default());
        assert_eq!(config.options.width, 33);
        assert_eq!(config.options.max_depth, 3);
        assert_eq!(config.options.close_match, CloseMatch::Nested);
        assert_eq!(config.source_extension, "src");
        assert_eq!(config.target_extension, "txt");
    }
}
