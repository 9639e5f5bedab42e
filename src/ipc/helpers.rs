use chrono::NaiveDate;
use serde::Serialize;

use crate::data::{self, Student, Teacher};
use crate::roster;

/// A student as the display layer sees it: the record plus derived fields.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentView<'a> {
    #[serde(flatten)]
    pub student: &'a Student,
    pub avatar_url: String,
    pub photo_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_grade: Option<&'static str>,
}

impl<'a> StudentView<'a> {
    pub fn new(student: &'a Student, today: NaiveDate) -> Self {
        Self {
            student,
            avatar_url: data::avatar_url(&student.qq),
            photo_path: data::student_photo_path(student.id),
            current_grade: roster::current_grade(student.graduation_year, today),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherView<'a> {
    #[serde(flatten)]
    pub teacher: &'a Teacher,
    pub avatar_url: String,
    pub photo_path: String,
}

impl<'a> TeacherView<'a> {
    pub fn new(teacher: &'a Teacher) -> Self {
        Self {
            teacher,
            avatar_url: data::avatar_url(&teacher.qq),
            photo_path: data::teacher_photo_path(teacher.id),
        }
    }
}
