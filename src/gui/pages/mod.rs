// src/gui/pages/mod.rs
use eframe::egui;

use crate::config::options::PageKind;
use super::app::App;

pub mod courses;
pub mod menu;
pub mod teachers;

pub trait Page: Send + Sync + 'static {
    fn title(&self) -> &'static str;
    fn kind(&self) -> PageKind;

    /// Filter inputs above the listing. Pages without filters draw nothing.
    fn draw_controls(&self, _ui: &mut egui::Ui, _app: &mut App) {}

    /// The listing itself, or the page's unavailable / empty notice.
    fn draw_body(&self, ui: &mut egui::Ui, app: &mut App);

    fn clear_filters(&self, _app: &mut App) {}

    /// Headers and rows of what the page currently shows, for Copy.
    fn export_rows(&self, app: &App) -> (Vec<String>, Vec<Vec<String>>);
}
