use serde::{Deserialize, Serialize};

/// Sentinel meaning "no filter applied" for every enumerable dimension.
/// Never written into a query string; absence of the parameter implies it.
pub const ALL: &str = "all";

fn all_string() -> String {
    ALL.to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Students,
    Teachers,
    Awards,
}

impl Page {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "students" => Some(Self::Students),
            "teachers" => Some(Self::Teachers),
            "awards" => Some(Self::Awards),
            _ => None,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Students => "students",
            Self::Teachers => "teachers",
            Self::Awards => "awards",
        }
    }

    /// The students list is the site root.
    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "/" => Some(Self::Students),
            "/teachers" => Some(Self::Teachers),
            "/awards" => Some(Self::Awards),
            _ => None,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Self::Students => "/",
            Self::Teachers => "/teachers",
            Self::Awards => "/awards",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentsFilter {
    #[serde(default = "all_string")]
    pub selected_year: String,
    #[serde(default = "all_string")]
    pub selected_university: String,
    #[serde(default)]
    pub search_query: String,
}

impl Default for StudentsFilter {
    fn default() -> Self {
        Self {
            selected_year: all_string(),
            selected_university: all_string(),
            search_query: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeachersFilter {
    #[serde(default = "all_string")]
    pub selected_school: String,
    #[serde(default)]
    pub search_query: String,
}

impl Default for TeachersFilter {
    fn default() -> Self {
        Self {
            selected_school: all_string(),
            search_query: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwardsFilter {
    #[serde(default = "all_string")]
    pub selected_year: String,
    #[serde(default = "all_string")]
    pub selected_level: String,
}

impl Default for AwardsFilter {
    fn default() -> Self {
        Self {
            selected_year: all_string(),
            selected_level: all_string(),
        }
    }
}

/// Per-page filter selections for the whole site. One instance lives in the
/// filter store; the session blob is this struct serialized wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    #[serde(default)]
    pub students: StudentsFilter,
    #[serde(default)]
    pub teachers: TeachersFilter,
    #[serde(default)]
    pub awards: AwardsFilter,
}

/// Shallow-merge updates; unset fields keep their prior values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentsPatch {
    pub selected_year: Option<String>,
    pub selected_university: Option<String>,
    pub search_query: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeachersPatch {
    pub selected_school: Option<String>,
    pub search_query: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwardsPatch {
    pub selected_year: Option<String>,
    pub selected_level: Option<String>,
}

impl StudentsFilter {
    pub fn apply(&mut self, patch: StudentsPatch) {
        if let Some(v) = patch.selected_year {
            self.selected_year = v;
        }
        if let Some(v) = patch.selected_university {
            self.selected_university = v;
        }
        if let Some(v) = patch.search_query {
            self.search_query = v;
        }
    }

    pub fn to_query(&self) -> String {
        let mut out = String::new();
        if self.selected_year != ALL {
            push_param(&mut out, "year", &self.selected_year);
        }
        if self.selected_university != ALL {
            push_param(&mut out, "university", &self.selected_university);
        }
        if !self.search_query.is_empty() {
            push_param(&mut out, "search", &self.search_query);
        }
        out
    }

    pub fn from_query(query: &str) -> Self {
        let mut f = Self::default();
        for (key, value) in parse_query_pairs(query) {
            match key.as_str() {
                "year" => f.selected_year = value,
                "university" => f.selected_university = value,
                "search" => f.search_query = value,
                _ => {}
            }
        }
        f
    }
}

impl TeachersFilter {
    pub fn apply(&mut self, patch: TeachersPatch) {
        if let Some(v) = patch.selected_school {
            self.selected_school = v;
        }
        if let Some(v) = patch.search_query {
            self.search_query = v;
        }
    }

    pub fn to_query(&self) -> String {
        let mut out = String::new();
        if self.selected_school != ALL {
            push_param(&mut out, "school", &self.selected_school);
        }
        if !self.search_query.is_empty() {
            push_param(&mut out, "search", &self.search_query);
        }
        out
    }

    pub fn from_query(query: &str) -> Self {
        let mut f = Self::default();
        for (key, value) in parse_query_pairs(query) {
            match key.as_str() {
                "school" => f.selected_school = value,
                "search" => f.search_query = value,
                _ => {}
            }
        }
        f
    }
}

impl AwardsFilter {
    pub fn apply(&mut self, patch: AwardsPatch) {
        if let Some(v) = patch.selected_year {
            self.selected_year = v;
        }
        if let Some(v) = patch.selected_level {
            self.selected_level = v;
        }
    }

    pub fn to_query(&self) -> String {
        let mut out = String::new();
        if self.selected_year != ALL {
            push_param(&mut out, "year", &self.selected_year);
        }
        if self.selected_level != ALL {
            push_param(&mut out, "level", &self.selected_level);
        }
        out
    }

    pub fn from_query(query: &str) -> Self {
        let mut f = Self::default();
        for (key, value) in parse_query_pairs(query) {
            match key.as_str() {
                "year" => f.selected_year = value,
                "level" => f.selected_level = value,
                _ => {}
            }
        }
        f
    }
}

impl FilterState {
    /// Query string of one page's sub-state (may be empty).
    pub fn page_query(&self, page: Page) -> String {
        match page {
            Page::Students => self.students.to_query(),
            Page::Teachers => self.teachers.to_query(),
            Page::Awards => self.awards.to_query(),
        }
    }

    /// Path plus query for one page; bare path when every field is default.
    pub fn page_url(&self, page: Page) -> String {
        let query = self.page_query(page);
        if query.is_empty() {
            page.path().to_string()
        } else {
            format!("{}?{}", page.path(), query)
        }
    }

    /// Replace one page's sub-state with the shape parsed from its query
    /// string. Absent or unknown parameters fall back to the sentinel.
    pub fn set_from_query(&mut self, page: Page, query: &str) {
        match page {
            Page::Students => self.students = StudentsFilter::from_query(query),
            Page::Teachers => self.teachers = TeachersFilter::from_query(query),
            Page::Awards => self.awards = AwardsFilter::from_query(query),
        }
    }
}

fn push_param(out: &mut String, key: &str, value: &str) {
    if !out.is_empty() {
        out.push('&');
    }
    out.push_str(key);
    out.push('=');
    out.push_str(&encode_component(value));
}

/// application/x-www-form-urlencoded: unreserved bytes pass through,
/// space becomes '+', everything else is %XX per UTF-8 byte.
pub fn encode_component(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char);
            }
            b' ' => out.push('+'),
            _ => {
                out.push('%');
                out.push_str(&format!("{b:02X}"));
            }
        }
    }
    out
}

/// Inverse of `encode_component`. Malformed escapes are kept literally and
/// undecodable bytes are replaced, never an error: a bad query parameter
/// must degrade to a harmless filter value.
pub fn decode_component(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                let hi = (bytes[i + 1] as char).to_digit(16);
                let lo = (bytes[i + 2] as char).to_digit(16);
                if let (Some(hi), Some(lo)) = (hi, lo) {
                    out.push((hi * 16 + lo) as u8);
                    i += 3;
                } else {
                    out.push(b'%');
                    i += 1;
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Split a raw query string (no leading '?') into decoded key/value pairs.
/// Empty segments and keys are skipped; a key without '=' yields "".
pub fn parse_query_pairs(query: &str) -> Vec<(String, String)> {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut pairs = Vec::new();
    for segment in query.split('&') {
        if segment.is_empty() {
            continue;
        }
        let (key, value) = match segment.split_once('=') {
            Some((k, v)) => (k, v),
            None => (segment, ""),
        };
        let key = decode_component(key);
        if key.is_empty() {
            continue;
        }
        pairs.push((key, decode_component(value)));
    }
    pairs
}
