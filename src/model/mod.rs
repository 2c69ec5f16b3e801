// src/model/mod.rs
//! Typed records behind the directory and catalog views.
//!
//! Column mapping is positional and lives in each record's field enum
//! (explicit discriminants are the CSV column indices). Header text in the
//! source file is never consulted, so a renamed header is harmless but a
//! reordered column is not.
//!
//! Multi-value columns (subjects, departments, ...) are kept as
//! [`ValueList`]: the trimmed items for facets and display, plus the verbatim
//! joined text, which is what substring filters run against.

use std::borrow::Cow;
use std::fmt::Debug;
use std::hash::Hash;

pub mod course;
pub mod menu;
pub mod teacher;

pub use course::{Course, CourseField};
pub use menu::MenuItem;
pub use teacher::{Teacher, TeacherField};

/// A column of a record kind.
pub trait FieldKey: Copy + Eq + Ord + Hash + Debug + Send + Sync + 'static {
    /// Every column, in file order.
    fn all() -> &'static [Self];

    /// Multi-value columns offered as dropdown facets.
    fn facets() -> &'static [Self];

    /// Zero-based CSV column index.
    fn index(self) -> usize;

    /// Header name as written in the source file.
    fn name(self) -> &'static str;

    /// Human label for tables and filter controls.
    fn label(self) -> &'static str;
}

/// One parsed row of a CSV data source.
pub trait Record: Clone + Debug + Send + Sync + 'static {
    type Field: FieldKey;

    /// Rows with fewer fields are dropped by the loader.
    const MIN_FIELDS: usize;

    /// "Faculty directory", used in notices.
    const SOURCE: &'static str;

    /// Plural noun for "Showing N of M ..." lines.
    const NOUN: &'static str;

    /// Build a record from tokenized fields; `None` when the row is short.
    fn from_fields(fields: Vec<String>) -> Option<Self>;

    /// Raw text of a column. Multi-value columns return the joined text.
    fn text(&self, field: Self::Field) -> &str;

    /// Item view of a multi-value column.
    fn list(&self, _field: Self::Field) -> Option<&ValueList> {
        None
    }

    /// Text for on-screen display (lists re-joined as "a, b").
    fn display(&self, field: Self::Field) -> Cow<'_, str> {
        match self.list(field) {
            Some(list) => Cow::Owned(list.display()),
            None => Cow::Borrowed(self.text(field)),
        }
    }

    /// All columns as owned strings, in file order.
    fn to_row(&self) -> Vec<String> {
        Self::Field::all().iter().map(|&f| s!(self.text(f))).collect()
    }
}

/// A comma-joined multi-value column.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValueList {
    joined: String,
    items: Vec<String>,
}

impl ValueList {
    /// Split on commas, trim each item, drop empty items. The source text is
    /// kept verbatim.
    pub fn parse(joined: String) -> Self {
        let items = joined
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(String::from)
            .collect();
        Self { joined, items }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn joined(&self) -> &str {
        &self.joined
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.iter().any(|i| i == item)
    }

    pub fn display(&self) -> String {
        self.items.join(", ")
    }
}

impl From<&str> for ValueList {
    fn from(joined: &str) -> Self {
        Self::parse(s!(joined))
    }
}
