// src/model/menu.rs
use serde::{Deserialize, Serialize};

/// One day of the hot lunch menu, as written by the menu scraper.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuItem {
    pub day: String,
    pub date: String,
    pub menu: String,
}

impl MenuItem {
    pub fn to_row(&self) -> Vec<String> {
        vec![self.day.clone(), self.date.clone(), self.menu.clone()]
    }

    pub fn headers() -> Vec<String> {
        vec![s!("day"), s!("date"), s!("menu")]
    }
}
