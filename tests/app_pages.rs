// tests/app_pages.rs
//
// Drive App and the page table without a window.
use std::fs;

use iggy_wiki::config::options::{DataOptions, PageKind};
use iggy_wiki::config::state::AppState;
use iggy_wiki::gui::app::App;
use iggy_wiki::gui::router;
use iggy_wiki::model::CourseField;

fn state_for(dir: &std::path::Path) -> AppState {
    let mut state = AppState::default();
    state.options.data = DataOptions::with_dir(dir);
    state
}

#[test]
fn pages_are_in_tab_order() {
    let kinds: Vec<PageKind> = router::all_pages().iter().map(|p| p.kind()).collect();
    assert_eq!(kinds, [PageKind::Teachers, PageKind::Courses, PageKind::Menu]);
    assert_eq!(router::index_of(PageKind::Menu), 2);
    assert_eq!(router::page_for(PageKind::Courses).kind(), PageKind::Courses);
}

#[test]
fn empty_data_dir_starts_with_notices() {
    let dir = tempfile::tempdir().unwrap();
    let app = App::new(state_for(dir.path()));

    assert!(app.teachers.notice().is_some());
    assert!(app.courses.notice().is_some());
    assert_eq!(app.menu.notice(), Some("Menu data not found."));
    assert_eq!(app.status, "Loaded with 3 source(s) unavailable");
}

#[test]
fn reload_picks_up_new_files_and_clear_resets_filters() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = App::new(state_for(dir.path()));

    fs::write(
        dir.path().join(PageKind::Courses.file_name()),
        "title,url,course_num,subjects,grade_levels,length,type,uccsu,prereq,enroll_criteria,fulfillment,description\n\
         Algebra I,,M101,Math,9,Year,College Prep,c,,,,\n\
         Biology,,S101,Science,10,Year,College Prep,d,,,,\n",
    )
    .unwrap();
    app.courses.set_filter(CourseField::Subjects, "Science");
    app.reload_all();

    assert!(app.courses.notice().is_none());
    assert_eq!(app.courses.summary(), "Showing 1 of 2 courses");

    app.set_current_index(router::index_of(PageKind::Courses));
    assert_eq!(app.current_page_kind(), PageKind::Courses);

    let page = app.current_page();
    page.clear_filters(&mut app);
    let (_, rows) = page.export_rows(&app);
    assert_eq!(rows.len(), 2);
}
