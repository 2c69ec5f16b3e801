// src/data.rs
//
// View-layer state built on top of the loader and filter engine.
//
// - FilteredView: row indices into a record set, plus the total.
// - Catalog:      one CSV-backed view (records, facets, filters, result).
//                 Records are read-only between loads.
// - MenuBoard:    the unfiltered lunch menu listing.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::filter::{distinct_values, FilterSet};
use crate::model::{FieldKey, MenuItem, Record};
use crate::store;

/// Zero-copy filtered view. Holds positions of kept rows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilteredView {
    /// Positions of kept rows in the record set, ascending
    pub row_ix: Vec<usize>,
    total: usize,
}

impl FilteredView {
    pub fn new(row_ix: Vec<usize>, total: usize) -> Self {
        Self { row_ix, total }
    }

    /// Every row kept.
    pub fn all(total: usize) -> Self {
        Self { row_ix: (0..total).collect(), total }
    }

    /// Number of rows in the projection.
    pub fn len(&self) -> usize { self.row_ix.len() }
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }
    pub fn total(&self) -> usize { self.total }

    /// Borrow the kept records in order.
    pub fn iter<'a, R>(&'a self, records: &'a [R]) -> impl Iterator<Item = &'a R> + 'a {
        self.row_ix.iter().filter_map(move |&ix| records.get(ix))
    }

    /// Borrow a single record by projected index.
    pub fn get<'a, R>(&self, records: &'a [R], i: usize) -> Option<&'a R> {
        self.row_ix.get(i).and_then(|&ix| records.get(ix))
    }

    /// "Showing 3 of 40 teachers"
    pub fn summary(&self, noun: &str) -> String {
        format!("Showing {} of {} {}", self.len(), self.total, noun)
    }
}

/// One CSV-backed listing with its facets and live filters.
#[derive(Clone, Debug)]
pub struct Catalog<R: Record> {
    path: PathBuf,
    records: Vec<R>,
    notice: Option<String>,
    facets: BTreeMap<R::Field, Vec<String>>,
    filters: FilterSet<R::Field>,
    view: FilteredView,
}

impl<R: Record> Catalog<R> {
    /// Read `path` now. A missing file yields an empty catalog with a notice.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let mut cat = Self::from_records(path, Vec::new());
        cat.reload();
        cat
    }

    /// Build from records already in memory.
    pub fn from_records(path: impl Into<PathBuf>, records: Vec<R>) -> Self {
        let mut cat = Self {
            path: path.into(),
            records: Vec::new(),
            notice: None,
            facets: BTreeMap::new(),
            filters: FilterSet::new(),
            view: FilteredView::default(),
        };
        cat.replace_records(records);
        cat
    }

    /// Re-read the source file. Filter text survives the reload.
    pub fn reload(&mut self) {
        match store::load_records::<R>(&self.path) {
            Ok(records) => {
                self.notice = None;
                self.replace_records(records);
            }
            Err(e) => {
                self.notice = Some(e.notice());
                self.replace_records(Vec::new());
            }
        }
    }

    fn replace_records(&mut self, records: Vec<R>) {
        self.records = records;
        self.facets = R::Field::facets()
            .iter()
            .map(|&f| (f, distinct_values(&self.records, f)))
            .collect();
        self.refilter();
    }

    /// Recompute the filtered view from the current filter text.
    pub fn refilter(&mut self) {
        self.view = self.filters.apply(&self.records);
    }

    pub fn set_filter(&mut self, field: R::Field, text: impl Into<String>) {
        self.filters.set(field, text);
        self.refilter();
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.refilter();
    }

    /// Direct access for UI bindings; call `refilter` after edits.
    pub fn filters_mut(&mut self) -> &mut FilterSet<R::Field> { &mut self.filters }
    pub fn filters(&self) -> &FilterSet<R::Field> { &self.filters }

    pub fn path(&self) -> &Path { &self.path }
    pub fn set_path(&mut self, path: impl Into<PathBuf>) { self.path = path.into(); }
    pub fn records(&self) -> &[R] { &self.records }
    pub fn view(&self) -> &FilteredView { &self.view }

    /// Sorted dropdown options for a facet column (empty for non-facets).
    pub fn facet(&self, field: R::Field) -> &[String] {
        self.facets.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Set when the source could not be read.
    pub fn notice(&self) -> Option<&str> { self.notice.as_deref() }

    pub fn visible(&self) -> impl Iterator<Item = &R> + '_ {
        self.view.iter(&self.records)
    }

    pub fn summary(&self) -> String {
        self.view.summary(R::NOUN)
    }

    /// Headers (source names) and rows of the current view, every column.
    pub fn export_rows(&self) -> (Vec<String>, Vec<Vec<String>>) {
        let headers = R::Field::all().iter().map(|f| s!(f.name())).collect();
        let rows = self.visible().map(|r| r.to_row()).collect();
        (headers, rows)
    }
}

/// The lunch menu listing. No filters; shown in file order.
#[derive(Clone, Debug)]
pub struct MenuBoard {
    path: PathBuf,
    items: Vec<MenuItem>,
    notice: Option<String>,
}

impl MenuBoard {
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let mut board = Self { path: path.into(), items: Vec::new(), notice: None };
        board.reload();
        board
    }

    pub fn reload(&mut self) {
        match store::load_menu(&self.path) {
            Ok(items) => {
                self.items = items;
                self.notice = None;
            }
            Err(e) => {
                self.items.clear();
                self.notice = Some(e.notice());
            }
        }
    }

    pub fn path(&self) -> &Path { &self.path }
    pub fn set_path(&mut self, path: impl Into<PathBuf>) { self.path = path.into(); }
    pub fn items(&self) -> &[MenuItem] { &self.items }
    pub fn notice(&self) -> Option<&str> { self.notice.as_deref() }

    pub fn export_rows(&self) -> (Vec<String>, Vec<Vec<String>>) {
        (MenuItem::headers(), self.items.iter().map(MenuItem::to_row).collect())
    }
}
