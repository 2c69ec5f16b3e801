// src/gui/pages/courses.rs
use eframe::egui;

use crate::config::options::PageKind;
use crate::gui::app::App;
use crate::gui::components::{ data_table, filter_bar::{ self, FilterControl } };
use crate::model::{ Course, CourseField::{ self, * } };

use super::Page;

pub struct CoursesPage;
pub static PAGE: CoursesPage = CoursesPage;

const CONTROLS: [FilterControl<CourseField>; 5] = [
    FilterControl::Text  { field: Title,       hint: "Search by title..." },
    FilterControl::Facet { field: Subjects,    all:  "All Subjects" },
    FilterControl::Facet { field: GradeLevels, all:  "All Grade Levels" },
    FilterControl::Facet { field: Type,        all:  "All Types" },
    FilterControl::Text  { field: CourseNum,   hint: "Search by course number..." },
];

const COLUMNS: [(CourseField, f32); 11] = [
    (CourseNum, 80.0),
    (Title, 240.0),
    (Subjects, 150.0),
    (GradeLevels, 90.0),
    (Length, 90.0),
    (Type, 130.0),
    (Uccsu, 70.0),
    (Fulfillment, 130.0),
    (Prereq, 180.0),
    (EnrollCriteria, 180.0),
    (Description, 360.0),
];

/// Titles link out to the course page when the catalog has a URL.
fn course_cell(ui: &mut egui::Ui, course: &Course, field: CourseField) {
    match field {
        Title if !course.url.is_empty() => {
            ui.hyperlink_to(course.title.as_str(), &course.url);
        }
        _ => data_table::plain_cell(ui, course, field),
    }
}

impl Page for CoursesPage {
    fn title(&self) -> &'static str { "Course Catalog" }
    fn kind(&self) -> PageKind { PageKind::Courses }

    fn draw_controls(&self, ui: &mut egui::Ui, app: &mut App) {
        filter_bar::draw(ui, &mut app.courses, &CONTROLS);
    }

    fn draw_body(&self, ui: &mut egui::Ui, app: &mut App) {
        data_table::draw(ui, &app.courses, &COLUMNS, course_cell);
    }

    fn clear_filters(&self, app: &mut App) {
        app.courses.clear_filters();
    }

    fn export_rows(&self, app: &App) -> (Vec<String>, Vec<Vec<String>>) {
        app.courses.export_rows()
    }
}
