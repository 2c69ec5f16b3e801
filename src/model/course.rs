// src/model/course.rs
use std::mem::take;

use super::{FieldKey, Record, ValueList};

/// Course catalog columns. Discriminants are the CSV column indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CourseField {
    Title = 0,
    Url = 1,
    CourseNum = 2,
    Subjects = 3,
    GradeLevels = 4,
    Length = 5,
    Type = 6,
    Uccsu = 7,
    Prereq = 8,
    EnrollCriteria = 9,
    Fulfillment = 10,
    Description = 11,
}

use CourseField::*;

const ALL: [CourseField; 12] = [
    Title, Url, CourseNum, Subjects, GradeLevels, Length,
    Type, Uccsu, Prereq, EnrollCriteria, Fulfillment, Description,
];

impl FieldKey for CourseField {
    fn all() -> &'static [Self] { &ALL }
    fn facets() -> &'static [Self] { &[Subjects, GradeLevels, Type] }
    fn index(self) -> usize { self as usize }

    fn name(self) -> &'static str {
        match self {
            Title => "title",
            Url => "url",
            CourseNum => "course_num",
            Subjects => "subjects",
            GradeLevels => "grade_levels",
            Length => "length",
            Type => "type",
            Uccsu => "uccsu",
            Prereq => "prereq",
            EnrollCriteria => "enroll_criteria",
            Fulfillment => "fulfillment",
            Description => "description",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Title => "Title",
            Url => "Link",
            CourseNum => "Course #",
            Subjects => "Subject",
            GradeLevels => "Grade Level",
            Length => "Length",
            Type => "Type",
            Uccsu => "UC/CSU",
            Prereq => "Prerequisites",
            EnrollCriteria => "Enrollment Criteria",
            Fulfillment => "Fulfillment",
            Description => "Description",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Course {
    pub title: String,
    pub url: String,
    pub course_num: String,
    pub subjects: ValueList,
    pub grade_levels: ValueList,
    pub length: String,
    pub course_type: ValueList,
    pub uccsu: String,
    pub prereq: String,
    pub enroll_criteria: String,
    pub fulfillment: String,
    pub description: String,
}

impl Record for Course {
    type Field = CourseField;
    const MIN_FIELDS: usize = 12;
    const SOURCE: &'static str = "Course catalog";
    const NOUN: &'static str = "courses";

    fn from_fields(mut fields: Vec<String>) -> Option<Self> {
        if fields.len() < Self::MIN_FIELDS {
            return None;
        }
        let mut col = |f: CourseField| take(&mut fields[f.index()]);
        Some(Self {
            title: col(Title),
            url: col(Url),
            course_num: col(CourseNum),
            subjects: ValueList::parse(col(Subjects)),
            grade_levels: ValueList::parse(col(GradeLevels)),
            length: col(Length),
            course_type: ValueList::parse(col(Type)),
            uccsu: col(Uccsu),
            prereq: col(Prereq),
            enroll_criteria: col(EnrollCriteria),
            fulfillment: col(Fulfillment),
            description: col(Description),
        })
    }

    fn text(&self, field: CourseField) -> &str {
        match field {
            Title => &self.title,
            Url => &self.url,
            CourseNum => &self.course_num,
            Subjects => self.subjects.joined(),
            GradeLevels => self.grade_levels.joined(),
            Length => &self.length,
            Type => self.course_type.joined(),
            Uccsu => &self.uccsu,
            Prereq => &self.prereq,
            EnrollCriteria => &self.enroll_criteria,
            Fulfillment => &self.fulfillment,
            Description => &self.description,
        }
    }

    fn list(&self, field: CourseField) -> Option<&ValueList> {
        match field {
            Subjects => Some(&self.subjects),
            GradeLevels => Some(&self.grade_levels),
            Type => Some(&self.course_type),
            _ => None,
        }
    }
}
