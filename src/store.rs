// src/store.rs
//
// Loader: static files on disk → typed records.
// One blocking read per load; nothing is cached between loads.

use std::{fs, io, path::Path};

use crate::csv::parse_rows;
use crate::error::LoadError;
use crate::model::{MenuItem, Record};

/// Parse a headed CSV document into records, in file order.
/// Rows with fewer than `R::MIN_FIELDS` fields are dropped.
pub fn parse_records<R: Record>(text: &str) -> Vec<R> {
    let rows = parse_rows(text);
    let total = rows.len();
    let records: Vec<R> = rows.into_iter().filter_map(R::from_fields).collect();

    let skipped = total - records.len();
    if skipped > 0 {
        logd!(
            "Parse: {} dropped {} short row(s) (need {} fields)",
            R::SOURCE, skipped, R::MIN_FIELDS
        );
    }
    records
}

/// Read and parse one CSV source.
pub fn load_records<R: Record>(path: &Path) -> Result<Vec<R>, LoadError> {
    let text = read_source(R::SOURCE, path)?;
    let records = parse_records::<R>(&text);
    logf!("Load: {} rows={} from {}", R::SOURCE, records.len(), path.display());
    Ok(records)
}

/// Parse the lunch menu JSON array.
pub fn parse_menu(text: &str) -> Result<Vec<MenuItem>, serde_json::Error> {
    serde_json::from_str(text)
}

/// Read and parse the lunch menu file.
pub fn load_menu(path: &Path) -> Result<Vec<MenuItem>, LoadError> {
    const WHAT: &str = "Menu";
    let text = read_source(WHAT, path)?;
    let items = parse_menu(&text).map_err(|e| LoadError::Malformed {
        what: WHAT,
        path: path.to_path_buf(),
        detail: e.to_string(),
    })?;
    logf!("Load: {} items={} from {}", WHAT, items.len(), path.display());
    Ok(items)
}

fn read_source(what: &'static str, path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source: io::Error| {
        loge!("Load: {} unavailable at {}: {}", what, path.display(), source);
        LoadError::DataUnavailable { what, path: path.to_path_buf(), source }
    })
}
