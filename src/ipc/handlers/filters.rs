use serde_json::json;

use crate::filters::{AwardsPatch, Page, StudentsPatch, TeachersPatch};
use crate::ipc::error::{err, ok};
use crate::ipc::types::{AppState, Request};

/// Update responses carry the full filter state plus, when the updated page
/// is the active one, the URL the client should apply as a history replace.
fn update_response(
    state: &AppState,
    req: &Request,
    url: Option<String>,
) -> serde_json::Value {
    let mut result = json!({ "filters": state.store.state() });
    if let Some(url) = url {
        result["url"] = json!(url);
    }
    ok(&req.id, result)
}

fn handle_students_update(state: &mut AppState, req: &Request) -> serde_json::Value {
    let patch: StudentsPatch = match serde_json::from_value(req.params.clone()) {
        Ok(p) => p,
        Err(e) => return err(&req.id, "bad_params", e.to_string(), None),
    };
    let url = state.store.update_students(patch);
    update_response(state, req, url)
}

fn handle_teachers_update(state: &mut AppState, req: &Request) -> serde_json::Value {
    let patch: TeachersPatch = match serde_json::from_value(req.params.clone()) {
        Ok(p) => p,
        Err(e) => return err(&req.id, "bad_params", e.to_string(), None),
    };
    let url = state.store.update_teachers(patch);
    update_response(state, req, url)
}

fn handle_awards_update(state: &mut AppState, req: &Request) -> serde_json::Value {
    let patch: AwardsPatch = match serde_json::from_value(req.params.clone()) {
        Ok(p) => p,
        Err(e) => return err(&req.id, "bad_params", e.to_string(), None),
    };
    let url = state.store.update_awards(patch);
    update_response(state, req, url)
}

fn handle_return_url(state: &mut AppState, req: &Request) -> serde_json::Value {
    let page = req
        .params
        .get("page")
        .and_then(|v| v.as_str())
        .and_then(Page::parse);
    let Some(page) = page else {
        return err(
            &req.id,
            "bad_params",
            "params.page must be one of: students, teachers, awards",
            None,
        );
    };
    ok(&req.id, json!({ "url": state.store.return_url(page) }))
}

fn handle_get(state: &mut AppState, req: &Request) -> serde_json::Value {
    ok(&req.id, json!({ "filters": state.store.state() }))
}

fn handle_restore(state: &mut AppState, req: &Request) -> serde_json::Value {
    state.store.restore();
    ok(&req.id, json!({ "filters": state.store.state() }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "filters.get" => Some(handle_get(state, req)),
        "filters.restore" => Some(handle_restore(state, req)),
        "filters.returnUrl" => Some(handle_return_url(state, req)),
        "filters.students.update" => Some(handle_students_update(state, req)),
        "filters.teachers.update" => Some(handle_teachers_update(state, req)),
        "filters.awards.update" => Some(handle_awards_update(state, req)),
        _ => None,
    }
}
