use std::path::PathBuf;

use serde::Deserialize;

use crate::store::FilterStore;

#[derive(Debug, Deserialize, Clone)]
pub struct Request {
    pub id: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

pub struct AppState {
    pub store: FilterStore,
    pub session_path: Option<PathBuf>,
}
