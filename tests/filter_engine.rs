// tests/filter_engine.rs
use iggy_wiki::model::{Course, CourseField, Teacher, TeacherField, ValueList};
use iggy_wiki::{distinct_values, FilterSet};

fn course(title: &str, subjects: &str, grades: &str, kind: &str) -> Course {
    Course {
        title: title.into(),
        course_num: format!("C-{}", title.len()),
        subjects: ValueList::from(subjects),
        grade_levels: ValueList::from(grades),
        course_type: ValueList::from(kind),
        ..Default::default()
    }
}

fn catalog() -> Vec<Course> {
    vec![
        course("Algebra I", "Math", "9,10,11", "College Prep"),
        course("Biology", "Science", "10, 11", "College Prep"),
        course("AP Calculus", "Math", "11,12", "AP"),
        course("Physics Honors", "Science, Math", "11", "Honors"),
    ]
}

fn titles(courses: &[Course], rows: &[usize]) -> Vec<String> {
    rows.iter().map(|&i| courses[i].title.clone()).collect()
}

#[test]
fn no_filter_text_keeps_everything() {
    let courses = catalog();
    let view = FilterSet::<CourseField>::new()
        .with(CourseField::Title, "")
        .apply(&courses);
    assert_eq!(view.len(), courses.len());
    assert_eq!(view.row_ix, vec![0, 1, 2, 3]);
    assert_eq!(view.summary("courses"), "Showing 4 of 4 courses");
}

#[test]
fn substring_is_case_insensitive() {
    let courses = catalog();
    let view = FilterSet::new().with(CourseField::Title, "ALGEBRA").apply(&courses);
    assert_eq!(titles(&courses, &view.row_ix), ["Algebra I"]);
}

#[test]
fn filters_combine_with_and() {
    let courses = catalog();
    let filters = FilterSet::new()
        .with(CourseField::Subjects, "math")
        .with(CourseField::GradeLevels, "11");
    let view = filters.apply(&courses);
    assert_eq!(titles(&courses, &view.row_ix), ["Algebra I", "AP Calculus", "Physics Honors"]);

    let narrower = filters.with(CourseField::Type, "honors").apply(&courses);
    assert_eq!(titles(&courses, &narrower.row_ix), ["Physics Honors"]);
    assert_eq!(narrower.summary("courses"), "Showing 1 of 4 courses");
}

#[test]
fn multi_value_match_uses_the_joined_text() {
    let courses = catalog();
    let view = FilterSet::new().with(CourseField::GradeLevels, "10,11").apply(&courses);
    // "10, 11" has a space, so only the first record contains the literal text
    assert_eq!(titles(&courses, &view.row_ix), ["Algebra I"]);
}

#[test]
fn output_keeps_input_order() {
    let courses = catalog();
    let view = FilterSet::new().with(CourseField::Subjects, "Science").apply(&courses);
    assert_eq!(view.row_ix, vec![1, 3]);
}

#[test]
fn distinct_values_are_sorted_and_unique() {
    let courses = catalog();
    assert_eq!(distinct_values(&courses, CourseField::Subjects), ["Math", "Science"]);
    assert_eq!(
        distinct_values(&courses, CourseField::Type),
        ["AP", "College Prep", "Honors"]
    );
    assert_eq!(
        distinct_values(&courses, CourseField::GradeLevels),
        ["10", "11", "12", "9"]
    );
}

#[test]
fn department_filter_finds_multi_department_teacher() {
    let teachers = vec![
        Teacher { name: "J Doe".into(), departments: ValueList::from("Math, Science"), ..Default::default() },
        Teacher { name: "R Roe".into(), departments: ValueList::from("English"), ..Default::default() },
    ];
    let filters = FilterSet::new().with(TeacherField::Departments, "Science");
    assert!(filters.matches(&teachers[0]));
    assert!(!filters.matches(&teachers[1]));
    assert_eq!(distinct_values(&teachers, TeacherField::Departments), ["English", "Math", "Science"]);
}

#[test]
fn whitespace_filter_is_active() {
    let teachers = vec![
        Teacher { name: "J Doe".into(), ..Default::default() },
        Teacher { name: "Cher".into(), ..Default::default() },
    ];
    let filters = FilterSet::new().with(TeacherField::Name, " ");
    assert!(!filters.is_inactive());
    assert_eq!(filters.apply(&teachers).row_ix, vec![0]);
}
