// tests/catalog.rs
//
// View state over real files: notices, reloads and export rows.
use std::fs;
use std::path::Path;

use iggy_wiki::model::{Teacher, TeacherField};
use iggy_wiki::{Catalog, MenuBoard};

const HEADER: &str = "name,titles,departments,email,phone,imageUrl\n";

fn write_teachers(path: &Path, rows: &[&str]) {
    let mut text = String::from(HEADER);
    for r in rows {
        text.push_str(r);
        text.push('\n');
    }
    fs::write(path, text).unwrap();
}

#[test]
fn catalog_facets_and_summary() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("faculty.csv");
    write_teachers(&path, &[
        "J Doe,Teacher,\"Math, Science\",jd@x.org,555-1234,",
        "R Roe,Teacher,English,rr@x.org,555-9876,",
    ]);

    let mut cat = Catalog::<Teacher>::load(&path);
    assert!(cat.notice().is_none());
    assert_eq!(cat.facet(TeacherField::Departments), ["English", "Math", "Science"]);
    assert!(cat.facet(TeacherField::Name).is_empty());
    assert_eq!(cat.summary(), "Showing 2 of 2 teachers");

    cat.set_filter(TeacherField::Departments, "Science");
    assert_eq!(cat.summary(), "Showing 1 of 2 teachers");
    assert_eq!(cat.visible().next().map(|t| t.name.as_str()), Some("J Doe"));

    cat.clear_filters();
    assert_eq!(cat.view().len(), 2);
}

#[test]
fn reload_keeps_filter_text() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("faculty.csv");
    write_teachers(&path, &["J Doe,Teacher,Math,jd@x.org,1,", "A Smith,Teacher,Art,as@x.org,2,"]);

    let mut cat = Catalog::<Teacher>::load(&path);
    cat.set_filter(TeacherField::Name, "doe");
    assert_eq!(cat.view().len(), 1);

    write_teachers(&path, &[
        "J Doe,Teacher,Math,jd@x.org,1,",
        "A Smith,Teacher,Art,as@x.org,2,",
        "K Doering,Coach,PE,kd@x.org,3,",
    ]);
    cat.reload();

    assert_eq!(cat.filters().get(TeacherField::Name), "doe");
    assert_eq!(cat.records().len(), 3);
    assert_eq!(cat.summary(), "Showing 2 of 3 teachers");
}

#[test]
fn missing_source_shows_notice_and_no_rows() {
    let dir = tempfile::tempdir().unwrap();
    let cat = Catalog::<Teacher>::load(dir.path().join("missing.csv"));

    assert_eq!(cat.notice(), Some("Faculty directory data not found."));
    assert!(cat.records().is_empty());
    assert_eq!(cat.summary(), "Showing 0 of 0 teachers");
}

#[test]
fn export_rows_cover_every_column_of_the_view() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("faculty.csv");
    write_teachers(&path, &["J Doe,Teacher,\"Math, Science\",jd@x.org,555-1234,"]);

    let cat = Catalog::<Teacher>::load(&path);
    let (headers, rows) = cat.export_rows();
    assert_eq!(headers, ["name", "titles", "departments", "email", "phone", "imageUrl"]);
    assert_eq!(rows, vec![vec!["J Doe", "Teacher", "Math, Science", "jd@x.org", "555-1234", ""]]);
}

#[test]
fn menu_board_notices() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lunch_menu.json");

    let mut board = MenuBoard::load(&path);
    assert_eq!(board.notice(), Some("Menu data not found."));
    assert!(board.items().is_empty());

    fs::write(&path, "[1, 2").unwrap();
    board.reload();
    assert_eq!(board.notice(), Some("Error loading menu data."));

    fs::write(&path, r#"[{"day":"Friday","date":"Oct 23","menu":"Tacos"}]"#).unwrap();
    board.reload();
    assert!(board.notice().is_none());
    let (headers, rows) = board.export_rows();
    assert_eq!(headers, ["day", "date", "menu"]);
    assert_eq!(rows, vec![vec!["Friday", "Oct 23", "Tacos"]]);
}
