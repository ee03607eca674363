//! Formatting state threaded through one resolution call.
//!
//! The document width lives here rather than in global state. Formatters
//! read it through [`Context::width`]; the `doc_width` and `default_width`
//! tags change it for the rest of the document, and headers widen it only
//! for their own rendering via [`Context::with_min_width`].

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use serde::Deserialize;
use txtfmt_calc::Evaluator;

use crate::catalog::TagKind;
use crate::diagnostic::Diagnostic;
use crate::scan::CloseMatch;

/// A document width in columns, always within `[MIN, MAX]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DocWidth(usize);

impl DocWidth {
    pub const MIN: usize = 10;
    pub const MAX: usize = 250;
    pub const DEFAULT: usize = 80;

    /// Clamps `requested` into range, reporting when it had to.
    pub fn clamped(requested: i64) -> (Self, Option<Diagnostic>) {
        if requested < Self::MIN as i64 {
            let diag = Diagnostic::WidthTooSmall {
                requested,
                min: Self::MIN,
            };
            (Self(Self::MIN), Some(diag))
        } else if requested > Self::MAX as i64 {
            let diag = Diagnostic::WidthTooLarge {
                requested,
                max: Self::MAX,
            };
            (Self(Self::MAX), Some(diag))
        } else {
            (Self(requested as usize), None)
        }
    }

    /// Clamps without reporting.
    pub fn saturating(requested: usize) -> Self {
        Self(requested.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for DocWidth {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

/// Engine settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Starting document width, also what `default_width` restores.
    pub width: usize,
    pub close_match: CloseMatch,
    /// Deepest tag nesting resolved before tags are left as text.
    pub max_depth: usize,
    /// `chrono` format strings for the date and time tags.
    pub date_format: String,
    pub time_format: String,
    pub datetime_format: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            width: DocWidth::DEFAULT,
            close_match: CloseMatch::default(),
            max_depth: 64,
            date_format: "%d.%m.%Y".to_string(),
            time_format: "%H:%M:%S".to_string(),
            datetime_format: "%d.%m.%Y %H:%M:%S".to_string(),
        }
    }
}

// === Collaborators ===

/// Source of the current time for the date and time tags.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Source of file contents for the `insert` tag.
pub trait FileSource {
    fn read(&self, path: &str) -> io::Result<String>;
}

/// Local wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}

/// A clock stopped at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Reads files from disk, resolving relative paths against `root`.
#[derive(Debug, Clone)]
pub struct DiskFiles {
    root: PathBuf,
}

impl DiskFiles {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Default for DiskFiles {
    fn default() -> Self {
        Self::new(".")
    }
}

impl FileSource for DiskFiles {
    fn read(&self, path: &str) -> io::Result<String> {
        std::fs::read_to_string(self.root.join(path))
    }
}

/// In-memory files, for tests and embedding.
#[derive(Debug, Default, Clone)]
pub struct MemoryFiles {
    files: HashMap<String, String>,
}

impl MemoryFiles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.files.insert(path.into(), content.into());
        self
    }
}

impl FileSource for MemoryFiles {
    fn read(&self, path: &str) -> io::Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "No such file or directory"))
    }
}

// === Per-call state ===

/// Mutable state for one resolution call.
pub struct Context<'a> {
    width: DocWidth,
    default_width: DocWidth,
    pub(crate) options: &'a Options,
    pub(crate) clock: &'a dyn Clock,
    pub(crate) files: &'a dyn FileSource,
    pub(crate) evaluator: &'a dyn Evaluator,
    pub(crate) diagnostics: Vec<Diagnostic>,
    pub(crate) expansions: Vec<TagKind>,
}

impl<'a> Context<'a> {
    pub(crate) fn new(
        options: &'a Options,
        clock: &'a dyn Clock,
        files: &'a dyn FileSource,
        evaluator: &'a dyn Evaluator,
    ) -> Self {
        let (width, diag) = DocWidth::clamped(options.width as i64);
        let mut cx = Self {
            width,
            default_width: width,
            options,
            clock,
            files,
            evaluator,
            diagnostics: Vec::new(),
            expansions: Vec::new(),
        };
        if let Some(diag) = diag {
            cx.report(diag);
        }
        cx
    }

    /// Current document width in columns.
    pub fn width(&self) -> usize {
        self.width.get()
    }

    pub fn set_width(&mut self, requested: i64) {
        let (width, diag) = DocWidth::clamped(requested);
        self.width = width;
        if let Some(diag) = diag {
            self.report(diag);
        }
    }

    pub fn reset_width(&mut self) {
        self.width = self.default_width;
    }

    /// Runs `f` with the width raised to at least `min`, then restores it.
    pub fn with_min_width<T>(&mut self, min: usize, f: impl FnOnce(&mut Self) -> T) -> T {
        if min <= self.width.get() {
            return f(self);
        }
        let saved = self.width;
        self.width = DocWidth::saturating(min);
        let out = f(self);
        self.width = saved;
        out
    }

    pub fn evaluator(&self) -> &dyn Evaluator {
        self.evaluator
    }

    /// Records an advisory message.
    pub fn report(&mut self, diag: Diagnostic) {
        tracing::warn!("{}", diag);
        self.diagnostics.push(diag);
    }
}
