use chrono::Local;
use serde_json::json;

use crate::data;
use crate::filters::Page;
use crate::ipc::error::{err, ok};
use crate::ipc::helpers::{StudentView, TeacherView};
use crate::ipc::types::{AppState, Request};
use crate::timeline;

fn return_label(page: Page) -> &'static str {
    match page {
        Page::Students => "同学列表",
        Page::Teachers => "老师列表",
        Page::Awards => "获奖墙",
    }
}

/// Detail view for one person. `from` records which list the detail view
/// was reached from and picks the return link; default is the person
/// type's own list. Unknown ids are a user-visible not-found state that
/// still offers a way back.
fn handle_get(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(person_type) = req.params.get("personType").and_then(|v| v.as_str()) else {
        return err(&req.id, "bad_params", "missing params.personType", None);
    };
    let Some(id) = req.params.get("id").and_then(|v| v.as_i64()) else {
        return err(&req.id, "bad_params", "missing params.id", None);
    };
    let from = req
        .params
        .get("from")
        .and_then(|v| v.as_str())
        .and_then(Page::parse);

    match person_type {
        "student" => {
            let default_page = from.unwrap_or(Page::Students);
            let return_url = state.store.return_url(default_page);
            let Some(student) = data::student_by_id(id) else {
                return err(
                    &req.id,
                    "not_found",
                    format!("student {id} not found"),
                    Some(json!({ "returnUrl": return_url })),
                );
            };

            let today = Local::now().date_naive();
            let awards: Vec<serde_json::Value> =
                timeline::awards_for_student(data::awards(), id)
                    .into_iter()
                    .map(|a| {
                        json!({
                            "id": a.id,
                            "year": a.year,
                            "season": a.season,
                            "competition": a.competition,
                            "level": timeline::student_level(a, id),
                        })
                    })
                    .collect();

            ok(
                &req.id,
                json!({
                    "personType": "student",
                    "person": StudentView::new(student, today),
                    "awards": awards,
                    "returnUrl": return_url,
                    "returnLabel": return_label(default_page),
                }),
            )
        }
        "teacher" => {
            let default_page = from.unwrap_or(Page::Teachers);
            let return_url = state.store.return_url(default_page);
            let Some(teacher) = data::teacher_by_id(id) else {
                return err(
                    &req.id,
                    "not_found",
                    format!("teacher {id} not found"),
                    Some(json!({ "returnUrl": return_url })),
                );
            };

            ok(
                &req.id,
                json!({
                    "personType": "teacher",
                    "person": TeacherView::new(teacher),
                    "returnUrl": return_url,
                    "returnLabel": return_label(default_page),
                }),
            )
        }
        other => err(
            &req.id,
            "bad_params",
            format!("personType must be student or teacher, got: {other}"),
            None,
        ),
    }
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "person.get" => Some(handle_get(state, req)),
        _ => None,
    }
}
