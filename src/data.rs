use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    pub title: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: i64,
    pub qq: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wechat: Option<String>,
    pub real_name: String,
    pub nickname: String,
    /// Absent for students whose cohort is unknown; grade cannot be computed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graduation_year: Option<i32>,
    pub signature: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub university: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub social_links: Vec<SocialLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    pub id: i64,
    pub qq: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wechat: Option<String>,
    pub real_name: String,
    pub nickname: String,
    pub signature: String,
    pub title: String,
    pub school: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub social_links: Vec<SocialLink>,
}

/// Medal buckets of one award. A student id appears in at most one bucket
/// per award, but may recur across awards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedalBuckets {
    pub gold: Vec<i64>,
    pub silver: Vec<i64>,
    pub bronze: Vec<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Award {
    pub id: i64,
    pub year: i32,
    pub season: String,
    pub competition: String,
    pub students: MedalBuckets,
}

static STUDENTS: OnceLock<Vec<Student>> = OnceLock::new();
static TEACHERS: OnceLock<Vec<Teacher>> = OnceLock::new();
static AWARDS: OnceLock<Vec<Award>> = OnceLock::new();

pub fn students() -> &'static [Student] {
    STUDENTS.get_or_init(|| {
        serde_json::from_str(include_str!("../data/students.json"))
            .expect("embedded students dataset parses")
    })
}

pub fn teachers() -> &'static [Teacher] {
    TEACHERS.get_or_init(|| {
        serde_json::from_str(include_str!("../data/teachers.json"))
            .expect("embedded teachers dataset parses")
    })
}

pub fn awards() -> &'static [Award] {
    AWARDS.get_or_init(|| {
        serde_json::from_str(include_str!("../data/awards.json"))
            .expect("embedded awards dataset parses")
    })
}

pub fn student_by_id(id: i64) -> Option<&'static Student> {
    students().iter().find(|s| s.id == id)
}

pub fn teacher_by_id(id: i64) -> Option<&'static Teacher> {
    teachers().iter().find(|t| t.id == id)
}

/// QQ avatar service convention; a plain string format, not a contract we own.
pub fn avatar_url(qq: &str) -> String {
    format!("https://q.qlogo.cn/headimg_dl?bs=qq&dst_uin={qq}&spec=4")
}

pub fn student_photo_path(id: i64) -> String {
    format!("/photos/students/{id}-1.jpg")
}

pub fn teacher_photo_path(id: i64) -> String {
    format!("/photos/teachers/{id}-1.jpg")
}
