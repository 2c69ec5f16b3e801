// tests/cli_render.rs
#![cfg(feature = "cli")]

use std::fs;

use clap::Parser;
use iggy_wiki::cli::{render, Cli, Command, CourseArgs, FormatArg, TeacherArgs};
use iggy_wiki::config::options::{AppOptions, DataOptions, ExportFormat, PageKind};

fn options_with_faculty() -> (tempfile::TempDir, AppOptions) {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(PageKind::Teachers.file_name()),
        "name,titles,departments,email,phone,imageUrl\n\
         J Doe,Teacher,\"Math, Science\",jd@x.org,555-1234,\n\
         R Roe,Teacher,English,rr@x.org,555-9876,\n",
    )
    .unwrap();

    let mut opts = AppOptions::default();
    opts.data = DataOptions::with_dir(dir.path());
    (dir, opts)
}

#[test]
fn parses_global_flags_after_subcommand() {
    let cli = Cli::parse_from([
        "iggy-cli", "courses", "--grade-level", "10", "--type", "Honors", "--format", "tsv",
        "--include-headers",
    ]);
    assert_eq!(cli.format, FormatArg::Tsv);
    assert!(cli.include_headers);
    match cli.command {
        Command::Courses(args) => {
            assert_eq!(args.grade_level.as_deref(), Some("10"));
            assert_eq!(args.course_type.as_deref(), Some("Honors"));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn teachers_filtered_by_department() {
    let (_dir, opts) = options_with_faculty();
    let cmd = Command::Teachers(TeacherArgs {
        department: Some("science".into()),
        ..Default::default()
    });

    let out = render(&cmd, &opts).unwrap();
    assert_eq!(
        out,
        "name,titles,departments,email,phone,imageUrl\n\
         J Doe,Teacher,\"Math, Science\",jd@x.org,555-1234,\n"
    );
}

#[test]
fn tsv_without_headers() {
    let (_dir, mut opts) = options_with_faculty();
    opts.export.format = ExportFormat::Tsv;
    opts.export.include_headers = false;
    let cmd = Command::Teachers(TeacherArgs { name: Some("roe".into()), ..Default::default() });

    let out = render(&cmd, &opts).unwrap();
    assert_eq!(out, "R Roe\tTeacher\tEnglish\trr@x.org\t555-9876\t\n");
}

#[test]
fn facets_list_sorted_values() {
    let (_dir, opts) = options_with_faculty();
    let cmd = Command::Teachers(TeacherArgs { facets: true, ..Default::default() });

    let out = render(&cmd, &opts).unwrap();
    assert_eq!(
        out,
        "facet,value\ndepartments,English\ndepartments,Math\ndepartments,Science\n"
    );
}

#[test]
fn missing_data_is_an_error_with_the_notice() {
    let dir = tempfile::tempdir().unwrap();
    let mut opts = AppOptions::default();
    opts.data = DataOptions::with_dir(dir.path());

    let err = render(&Command::Courses(CourseArgs::default()), &opts).unwrap_err();
    assert_eq!(err.to_string(), "Course catalog data not found.");

    let err = render(&Command::Menu, &opts).unwrap_err();
    assert_eq!(err.to_string(), "Menu data not found.");
}
