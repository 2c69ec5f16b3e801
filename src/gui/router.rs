// src/gui/router.rs
use crate::config::options::PageKind::{ self, * };
use super::pages::{ self, Page };

pub static PAGES: &[&'static dyn Page] = &[
    &pages::teachers::PAGE,
    &pages::courses::PAGE,
    &pages::menu::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}

pub fn page_for(kind: PageKind) -> &'static dyn Page {
    match kind {
        Teachers => &pages::teachers::PAGE,
        Courses  => &pages::courses::PAGE,
        Menu     => &pages::menu::PAGE,
    }
}

pub fn index_of(kind: PageKind) -> usize {
    PAGES.iter().position(|p| p.kind() == kind).unwrap_or(0)
}
