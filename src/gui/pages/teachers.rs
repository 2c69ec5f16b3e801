// src/gui/pages/teachers.rs
use eframe::egui;

use crate::config::options::PageKind;
use crate::gui::app::App;
use crate::gui::components::{ data_table, filter_bar::{ self, FilterControl } };
use crate::model::{ Teacher, TeacherField::{ self, * } };

use super::Page;

pub struct TeachersPage;
pub static PAGE: TeachersPage = TeachersPage;

const CONTROLS: [FilterControl<TeacherField>; 3] = [
    FilterControl::Text  { field: Name,        hint: "Search by name..." },
    FilterControl::Facet { field: Departments, all:  "All Departments" },
    FilterControl::Text  { field: Titles,      hint: "Search by title..." },
];

// Photo URLs stay out of the table; remote images are not fetched.
const COLUMNS: [(TeacherField, f32); 5] = [
    (Name, 180.0),
    (Titles, 240.0),
    (Departments, 200.0),
    (Email, 220.0),
    (Phone, 110.0),
];

impl Page for TeachersPage {
    fn title(&self) -> &'static str { "Faculty Directory" }
    fn kind(&self) -> PageKind { PageKind::Teachers }

    fn draw_controls(&self, ui: &mut egui::Ui, app: &mut App) {
        filter_bar::draw(ui, &mut app.teachers, &CONTROLS);
    }

    fn draw_body(&self, ui: &mut egui::Ui, app: &mut App) {
        data_table::draw(ui, &app.teachers, &COLUMNS, data_table::plain_cell::<Teacher>);
    }

    fn clear_filters(&self, app: &mut App) {
        app.teachers.clear_filters();
    }

    fn export_rows(&self, app: &App) -> (Vec<String>, Vec<Vec<String>>) {
        app.teachers.export_rows()
    }
}
