use chrono::{Datelike, NaiveDate};

use crate::data::{Student, Teacher};
use crate::filters::{StudentsFilter, TeachersFilter, ALL};

/// Grade labels ordered senior-3 first (largest grade). Also the display
/// order for grade filter options.
pub const GRADE_LABELS: [&str; 6] = ["高三", "高二", "高一", "初三", "初二", "初一"];

/// The school year rolls over in July: from July onward the active school
/// year starts in the current calendar year, before that in the previous.
pub fn school_year_start(today: NaiveDate) -> i32 {
    if today.month() >= 7 {
        today.year()
    } else {
        today.year() - 1
    }
}

/// Current grade of a student, `None` once graduated (or when the
/// graduation year is unknown or implausibly far out).
pub fn current_grade(graduation_year: Option<i32>, today: NaiveDate) -> Option<&'static str> {
    let graduation_year = graduation_year?;
    let years_to_graduation = graduation_year - school_year_start(today);
    match years_to_graduation {
        1 => Some("高三"),
        2 => Some("高二"),
        3 => Some("高一"),
        4 => Some("初三"),
        5 => Some("初二"),
        6 => Some("初一"),
        _ => None,
    }
}

/// Primary sort key: enrolled students rank by grade (senior-3 highest),
/// alumni rank by 10000 - graduationYear so earlier cohorts come first,
/// and students with neither rank 0 and sort last.
pub fn grade_rank(student: &Student, today: NaiveDate) -> i64 {
    if let Some(grade) = current_grade(student.graduation_year, today) {
        return match grade {
            "高三" => 1000,
            "高二" => 999,
            "高一" => 998,
            "初三" => 997,
            "初二" => 996,
            "初一" => 995,
            _ => 0,
        };
    }
    match student.graduation_year {
        Some(year) => 10000 - i64::from(year),
        None => 0,
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

pub fn matches_student(student: &Student, filter: &StudentsFilter, today: NaiveDate) -> bool {
    if filter.selected_year != ALL {
        if GRADE_LABELS.contains(&filter.selected_year.as_str()) {
            if current_grade(student.graduation_year, today)
                != Some(filter.selected_year.as_str())
            {
                return false;
            }
        } else {
            match filter.selected_year.parse::<i32>() {
                Ok(year) if student.graduation_year == Some(year) => {}
                _ => return false,
            }
        }
    }

    if filter.selected_university != ALL
        && student.university.as_deref() != Some(filter.selected_university.as_str())
    {
        return false;
    }

    if !filter.search_query.is_empty()
        && !contains_ci(&student.real_name, &filter.search_query)
        && !contains_ci(&student.nickname, &filter.search_query)
        && !contains_ci(&student.signature, &filter.search_query)
    {
        return false;
    }

    true
}

/// Filtered roster in display order: grade rank descending, then id
/// ascending among equal ranks.
pub fn filter_students<'a>(
    students: &'a [Student],
    filter: &StudentsFilter,
    today: NaiveDate,
) -> Vec<&'a Student> {
    let mut filtered: Vec<&Student> = students
        .iter()
        .filter(|s| matches_student(s, filter, today))
        .collect();
    filtered.sort_by(|a, b| {
        grade_rank(b, today)
            .cmp(&grade_rank(a, today))
            .then(a.id.cmp(&b.id))
    });
    filtered
}

/// Grade filter options: distinct graduation years ascending, then the
/// grade labels currently present, largest grade first.
pub fn year_options(students: &[Student], today: NaiveDate) -> Vec<String> {
    let mut years: Vec<i32> = students.iter().filter_map(|s| s.graduation_year).collect();
    years.sort_unstable();
    years.dedup();

    let mut options: Vec<String> = years.iter().map(|y| y.to_string()).collect();
    for label in GRADE_LABELS {
        if students
            .iter()
            .any(|s| current_grade(s.graduation_year, today) == Some(label))
        {
            options.push(label.to_string());
        }
    }
    options
}

pub fn university_options(students: &[Student]) -> Vec<String> {
    let mut universities: Vec<String> = students
        .iter()
        .filter_map(|s| s.university.clone())
        .collect();
    universities.sort();
    universities.dedup();
    universities
}

pub fn matches_teacher(teacher: &Teacher, filter: &TeachersFilter) -> bool {
    if filter.selected_school != ALL && teacher.school != filter.selected_school {
        return false;
    }
    if !filter.search_query.is_empty()
        && !contains_ci(&teacher.real_name, &filter.search_query)
        && !contains_ci(&teacher.nickname, &filter.search_query)
        && !contains_ci(&teacher.signature, &filter.search_query)
    {
        return false;
    }
    true
}

/// Teachers keep their input order; no grade concept applies.
pub fn filter_teachers<'a>(teachers: &'a [Teacher], filter: &TeachersFilter) -> Vec<&'a Teacher> {
    teachers
        .iter()
        .filter(|t| matches_teacher(t, filter))
        .collect()
}

pub fn school_options(teachers: &[Teacher]) -> Vec<String> {
    let mut schools: Vec<String> = teachers.iter().map(|t| t.school.clone()).collect();
    schools.sort();
    schools.dedup();
    schools
}
