// benches/filter.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use iggy_wiki::model::{Course, CourseField};
use iggy_wiki::store::parse_records;
use iggy_wiki::FilterSet;

const SUBJECTS: [&str; 6] = ["Math", "Science", "English", "History", "Art", "World Languages"];
const TYPES: [&str; 4] = ["College Prep", "Honors", "AP", "Elective"];

/// Synthetic catalog shaped like the real export (quoted lists, long descriptions).
fn synthetic_csv(rows: usize) -> String {
    let mut text = String::from(
        "title,url,course_num,subjects,grade_levels,length,type,uccsu,prereq,enroll_criteria,fulfillment,description\n",
    );
    for i in 0..rows {
        let subject = SUBJECTS[i % SUBJECTS.len()];
        let kind = TYPES[i % TYPES.len()];
        text.push_str(&format!(
            "Course {i},https://example.org/c/{i},C{i:04},\"{subject}, Elective\",\"{},{}\",Year,{kind},b,None,Open,{subject},\
             \"A \"\"long\"\" description, with commas, for course {i}.\"\n",
            9 + i % 3,
            10 + i % 3,
        ));
    }
    text
}

fn bench_filter(c: &mut Criterion) {
    let doc = synthetic_csv(2_000);

    c.bench_function("parse_courses", |b| {
        b.iter(|| {
            let rows: Vec<Course> = parse_records(black_box(&doc));
            black_box(rows.len())
        })
    });

    let courses: Vec<Course> = parse_records(&doc);
    let filters = FilterSet::new()
        .with(CourseField::Subjects, "science")
        .with(CourseField::GradeLevels, "10")
        .with(CourseField::Title, "course 1");

    c.bench_function("filter_courses", |b| {
        b.iter(|| {
            let view = filters.apply(black_box(&courses));
            black_box(view.len())
        })
    });
}

criterion_group!(benches, bench_filter);
criterion_main!(benches);
