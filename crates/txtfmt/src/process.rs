//! Rendering source files to target files.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context as _, Result};
use console::style;
use txtfmt_markup::{DiskFiles, Engine, Rendered};

use crate::config::Config;

/// Where rendered text goes and how chatty the run is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderMode {
    pub to_stdout: bool,
    pub quiet: bool,
}

/// Totals for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub files: usize,
    pub diagnostics: usize,
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().is_some_and(|ext| ext == extension)
}

/// Expands `paths` into the list of source files.
///
/// Files are taken as given. Directories contribute their direct children
/// with the source extension, sorted by name. No paths means the current
/// directory.
pub fn collect_sources(paths: &[PathBuf], extension: &str) -> Result<Vec<PathBuf>> {
    let default = [PathBuf::from(".")];
    let paths = if paths.is_empty() { &default[..] } else { paths };

    let mut sources = Vec::new();
    for path in paths {
        if path.is_dir() {
            let entries = fs::read_dir(path)
                .with_context(|| format!("failed to read directory {}", path.display()))?;
            let mut found = Vec::new();
            for entry in entries {
                let entry = entry
                    .with_context(|| format!("failed to read directory {}", path.display()))?;
                let candidate = entry.path();
                if candidate.is_file() && has_extension(&candidate, extension) {
                    found.push(candidate);
                }
            }
            found.sort();
            sources.extend(found);
        } else if path.is_file() {
            sources.push(path.clone());
        } else {
            bail!("no such file or directory: {}", path.display());
        }
    }
    Ok(sources)
}

/// The rendered file that sits next to `source`.
pub fn target_path(source: &Path, extension: &str) -> PathBuf {
    source.with_extension(extension)
}

/// Directory `insert` paths in `source` are relative to.
fn base_dir(source: &Path) -> &Path {
    source
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
}

/// Renders one file's text with the engine rooted at its directory.
pub fn render_source(source: &Path, config: &Config) -> Result<Rendered> {
    let document = fs::read_to_string(source)
        .with_context(|| format!("failed to read {}", source.display()))?;
    let engine =
        Engine::new(config.options.clone()).with_files(DiskFiles::new(base_dir(source)));
    tracing::debug!(path = %source.display(), "rendering");
    Ok(engine.resolve(&document))
}

/// Renders every source under `paths`, reporting progress to `out`.
pub fn render_paths(
    paths: &[PathBuf],
    config: &Config,
    mode: RenderMode,
    out: &mut impl Write,
) -> Result<Summary> {
    let sources = collect_sources(paths, &config.source_extension)?;
    let mut summary = Summary::default();

    if sources.is_empty() {
        writeln!(
            out,
            "{} .{} files not found",
            style("Error:").red(),
            config.source_extension
        )?;
        return Ok(summary);
    }

    for source in &sources {
        let name = source
            .file_name()
            .map_or_else(|| source.display().to_string(), |n| n.to_string_lossy().into_owned());
        if !mode.quiet {
            writeln!(out, "processing file: {}", style(&name).bold())?;
        }

        let rendered = render_source(source, config)?;
        for diagnostic in &rendered.diagnostics {
            writeln!(out, "  {} {}", style("Error:").red(), diagnostic)?;
        }
        summary.diagnostics += rendered.diagnostics.len();

        if mode.to_stdout {
            write!(out, "{}", rendered.text)?;
            if !rendered.text.ends_with('\n') {
                writeln!(out)?;
            }
        } else {
            let target = target_path(source, &config.target_extension);
            if target == *source {
                bail!(
                    "refusing to overwrite {}: source and target extensions are the same",
                    source.display()
                );
            }
            fs::write(&target, rendered.text.as_bytes())
                .with_context(|| format!("failed to write {}", target.display()))?;
        }

        if !mode.quiet {
            writeln!(out, "  {}", style("done").green())?;
        }
        summary.files += 1;
    }
    Ok(summary)
}
