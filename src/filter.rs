// src/filter.rs
//! Filter engine: facet derivation and per-field substring filtering.
//!
//! Both operations are pure. Filtering keeps input order and returns row
//! indices, so the caller's record set is never copied or reordered.

use std::collections::{BTreeMap, BTreeSet};

use crate::data::FilteredView;
use crate::model::{FieldKey, Record};

/// Sorted distinct values of one column across all records.
///
/// Multi-value columns contribute each trimmed item; plain columns
/// contribute their trimmed text. Empty values are never options.
pub fn distinct_values<R: Record>(records: &[R], field: R::Field) -> Vec<String> {
    let mut set: BTreeSet<&str> = BTreeSet::new();
    for r in records {
        match r.list(field) {
            Some(list) => set.extend(list.items().iter().map(String::as_str)),
            None => {
                let v = r.text(field).trim();
                if !v.is_empty() { set.insert(v); }
            }
        }
    }
    set.into_iter().map(String::from).collect()
}

/// Current filter text per column. Absent and empty entries are inactive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterSet<F: FieldKey> {
    terms: BTreeMap<F, String>,
}

impl<F: FieldKey> Default for FilterSet<F> {
    fn default() -> Self {
        Self { terms: BTreeMap::new() }
    }
}

impl<F: FieldKey> FilterSet<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: F, text: impl Into<String>) -> Self {
        self.set(field, text);
        self
    }

    pub fn set(&mut self, field: F, text: impl Into<String>) {
        self.terms.insert(field, text.into());
    }

    pub fn get(&self, field: F) -> &str {
        self.terms.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Editable slot for a text box or dropdown binding.
    pub fn text_mut(&mut self, field: F) -> &mut String {
        self.terms.entry(field).or_default()
    }

    pub fn clear(&mut self) {
        self.terms.clear();
    }

    /// True when no column has filter text.
    pub fn is_inactive(&self) -> bool {
        self.terms.values().all(String::is_empty)
    }

    /// Columns with non-empty filter text. Whitespace counts as text.
    pub fn active(&self) -> impl Iterator<Item = (F, &str)> {
        self.terms
            .iter()
            .filter(|(_, t)| !t.is_empty())
            .map(|(&f, t)| (f, t.as_str()))
    }

    /// Case-insensitive substring match on every active column (AND).
    pub fn matches<R: Record<Field = F>>(&self, record: &R) -> bool {
        let needles = self.lowered();
        matches_lowered(record, &needles)
    }

    /// Indices of matching records, in input order.
    pub fn apply<R: Record<Field = F>>(&self, records: &[R]) -> FilteredView {
        let total = records.len();
        if self.is_inactive() {
            return FilteredView::all(total);
        }

        let needles = self.lowered();
        let row_ix = records
            .iter()
            .enumerate()
            .filter(|(_, r)| matches_lowered(*r, &needles))
            .map(|(i, _)| i)
            .collect();

        FilteredView::new(row_ix, total)
    }

    fn lowered(&self) -> Vec<(F, String)> {
        self.active().map(|(f, t)| (f, t.to_lowercase())).collect()
    }
}

fn matches_lowered<R: Record>(record: &R, needles: &[(R::Field, String)]) -> bool {
    needles
        .iter()
        .all(|(field, needle)| record.text(*field).to_lowercase().contains(needle.as_str()))
}
