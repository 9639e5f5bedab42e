use serde_json::json;

use crate::data;
use crate::ipc::error::ok;
use crate::ipc::helpers::TeacherView;
use crate::ipc::types::{AppState, Request};
use crate::roster;

fn handle_list(state: &mut AppState, req: &Request) -> serde_json::Value {
    let all = data::teachers();
    let filtered = roster::filter_teachers(all, &state.store.state().teachers);
    let teachers: Vec<TeacherView> = filtered.into_iter().map(TeacherView::new).collect();

    ok(
        &req.id,
        json!({
            "teachers": teachers,
            "total": teachers.len(),
            "schoolOptions": roster::school_options(all),
        }),
    )
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "teachers.list" => Some(handle_list(state, req)),
        _ => None,
    }
}
