use chrono::Local;
use serde_json::json;

use crate::data;
use crate::ipc::error::ok;
use crate::ipc::helpers::StudentView;
use crate::ipc::types::{AppState, Request};
use crate::roster;

fn handle_list(state: &mut AppState, req: &Request) -> serde_json::Value {
    let today = Local::now().date_naive();
    let all = data::students();
    let filtered = roster::filter_students(all, &state.store.state().students, today);
    let students: Vec<StudentView> = filtered
        .into_iter()
        .map(|s| StudentView::new(s, today))
        .collect();

    ok(
        &req.id,
        json!({
            "students": students,
            "total": students.len(),
            "yearOptions": roster::year_options(all, today),
            "universityOptions": roster::university_options(all),
        }),
    )
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "students.list" => Some(handle_list(state, req)),
        _ => None,
    }
}
