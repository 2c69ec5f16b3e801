// src/config/options.rs
use std::path::{Path, PathBuf};

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub data: DataOptions,
    pub export: ExportOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            data: DataOptions::default(),
            export: ExportOptions::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageKind {
    Teachers,
    Courses,
    Menu,
}

impl PageKind {
    pub fn file_name(self) -> &'static str {
        match self {
            PageKind::Teachers => TEACHERS_FILE,
            PageKind::Courses => COURSES_FILE,
            PageKind::Menu => MENU_FILE,
        }
    }
}

/// Where the static source files live.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataOptions {
    dir: PathBuf,
}

impl Default for DataOptions {
    /// `$IGGY_DATA_DIR` when set and non-empty, else `./public`.
    fn default() -> Self {
        let dir = std::env::var_os(DATA_DIR_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));
        Self { dir }
    }
}

impl DataOptions {
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn set_dir(&mut self, dir: impl Into<PathBuf>) {
        self.dir = dir.into();
    }

    pub fn path_for(&self, kind: PageKind) -> PathBuf {
        self.dir.join(kind.file_name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

/// Options for Copy (GUI) and stdout output (CLI).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            include_headers: true,
        }
    }
}
