// src/model/teacher.rs
use std::mem::take;

use super::{FieldKey, Record, ValueList};

/// Faculty directory columns. Discriminants are the CSV column indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TeacherField {
    Name = 0,
    Titles = 1,
    Departments = 2,
    Email = 3,
    Phone = 4,
    ImageUrl = 5,
}

use TeacherField::*;

const ALL: [TeacherField; 6] = [Name, Titles, Departments, Email, Phone, ImageUrl];

impl FieldKey for TeacherField {
    fn all() -> &'static [Self] { &ALL }
    fn facets() -> &'static [Self] { &[Departments] }
    fn index(self) -> usize { self as usize }

    fn name(self) -> &'static str {
        match self {
            Name => "name",
            Titles => "titles",
            Departments => "departments",
            Email => "email",
            Phone => "phone",
            ImageUrl => "imageUrl",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Name => "Name",
            Titles => "Title",
            Departments => "Department",
            Email => "Email",
            Phone => "Phone",
            ImageUrl => "Photo",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Teacher {
    pub name: String,
    pub titles: String,
    pub departments: ValueList,
    pub email: String,
    pub phone: String,
    pub image_url: String,
}

impl Record for Teacher {
    type Field = TeacherField;
    const MIN_FIELDS: usize = 6;
    const SOURCE: &'static str = "Faculty directory";
    const NOUN: &'static str = "teachers";

    fn from_fields(mut fields: Vec<String>) -> Option<Self> {
        if fields.len() < Self::MIN_FIELDS {
            return None;
        }
        let mut col = |f: TeacherField| take(&mut fields[f.index()]);
        Some(Self {
            name: col(Name),
            titles: col(Titles),
            departments: ValueList::parse(col(Departments)),
            email: col(Email),
            phone: col(Phone),
            image_url: col(ImageUrl),
        })
    }

    fn text(&self, field: TeacherField) -> &str {
        match field {
            Name => &self.name,
            Titles => &self.titles,
            Departments => self.departments.joined(),
            Email => &self.email,
            Phone => &self.phone,
            ImageUrl => &self.image_url,
        }
    }

    fn list(&self, field: TeacherField) -> Option<&ValueList> {
        match field {
            Departments => Some(&self.departments),
            _ => None,
        }
    }
}
