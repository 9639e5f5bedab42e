use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::warn;

use crate::filters::{AwardsPatch, FilterState, Page, StudentsPatch, TeachersPatch};

/// Session-scoped key/value storage behind a minimal load/save pair, so the
/// store logic runs against an in-memory fake in tests. Failures are never
/// fatal; in-memory state stays authoritative.
pub trait SessionStore {
    fn load(&self) -> Result<Option<String>>;
    fn save(&mut self, blob: &str) -> Result<()>;
}

#[derive(Debug, Default)]
pub struct MemorySession {
    blob: Option<String>,
}

impl SessionStore for MemorySession {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.blob.clone())
    }

    fn save(&mut self, blob: &str) -> Result<()> {
        self.blob = Some(blob.to_string());
        Ok(())
    }
}

/// One file holding the whole serialized filter state. The host passes a
/// path with the lifetime it wants the session to have.
#[derive(Debug)]
pub struct FileSession {
    path: PathBuf,
}

impl FileSession {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl SessionStore for FileSession {
    fn load(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let blob = fs::read_to_string(&self.path)
            .with_context(|| format!("read session file {}", self.path.display()))?;
        Ok(Some(blob))
    }

    fn save(&mut self, blob: &str) -> Result<()> {
        fs::write(&self.path, blob)
            .with_context(|| format!("write session file {}", self.path.display()))
    }
}

/// Single source of truth for all per-page filter selections. Owns the
/// session store; constructed once at startup and passed by reference.
pub struct FilterStore {
    state: FilterState,
    active_page: Option<Page>,
    session: Box<dyn SessionStore>,
}

impl FilterStore {
    pub fn new(session: Box<dyn SessionStore>) -> Self {
        Self {
            state: FilterState::default(),
            active_page: None,
            session,
        }
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn active_page(&self) -> Option<Page> {
        self.active_page
    }

    /// Route change: track the active page and, for a known list page,
    /// replace its sub-state with whatever the query string says so deep
    /// links and back-navigation reproduce the exact filtered view.
    pub fn route_changed(&mut self, path: &str, query: &str) -> Option<Page> {
        self.active_page = Page::from_path(path);
        if let Some(page) = self.active_page {
            self.state.set_from_query(page, query);
        }
        self.active_page
    }

    /// Merge a partial update into the students sub-state. Returns the URL
    /// to apply as a history replace when the students page is active.
    /// Always persists the whole state.
    pub fn update_students(&mut self, patch: StudentsPatch) -> Option<String> {
        self.state.students.apply(patch);
        self.after_update(Page::Students)
    }

    pub fn update_teachers(&mut self, patch: TeachersPatch) -> Option<String> {
        self.state.teachers.apply(patch);
        self.after_update(Page::Teachers)
    }

    pub fn update_awards(&mut self, patch: AwardsPatch) -> Option<String> {
        self.state.awards.apply(patch);
        self.after_update(Page::Awards)
    }

    /// "Back to list" link for a detail view, preserving that page's
    /// current filters. Pure: no storage read.
    pub fn return_url(&self, page: Page) -> String {
        self.state.page_url(page)
    }

    /// Replace the in-memory state with the persisted blob, if any.
    /// A missing or corrupt blob leaves the current state untouched.
    pub fn restore(&mut self) {
        match self.session.load() {
            Ok(Some(blob)) => match serde_json::from_str(&blob) {
                Ok(state) => self.state = state,
                Err(e) => warn!("ignoring corrupt session blob: {e}"),
            },
            Ok(None) => {}
            Err(e) => warn!("failed to load session state: {e:#}"),
        }
    }

    fn after_update(&mut self, page: Page) -> Option<String> {
        self.persist();
        if self.active_page == Some(page) {
            Some(self.state.page_url(page))
        } else {
            None
        }
    }

    fn persist(&mut self) {
        let blob = match serde_json::to_string(&self.state) {
            Ok(blob) => blob,
            Err(e) => {
                warn!("failed to serialize filter state: {e}");
                return;
            }
        };
        if let Err(e) = self.session.save(&blob) {
            warn!("failed to save session state: {e:#}");
        }
    }
}
