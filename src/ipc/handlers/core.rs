use serde_json::json;

use crate::ipc::error::{err, ok};
use crate::ipc::types::{AppState, Request};

fn handle_health(state: &mut AppState, req: &Request) -> serde_json::Value {
    ok(
        &req.id,
        json!({
            "version": env!("CARGO_PKG_VERSION"),
            "sessionPath": state
                .session_path
                .as_ref()
                .map(|p| p.to_string_lossy().to_string())
        }),
    )
}

/// The client reports every navigation here so deep links and
/// back-navigation reproduce the filtered view they encode.
fn handle_route_changed(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(path) = req.params.get("path").and_then(|v| v.as_str()) else {
        return err(&req.id, "bad_params", "missing params.path", None);
    };
    let query = req
        .params
        .get("query")
        .and_then(|v| v.as_str())
        .unwrap_or("");

    let page = state.store.route_changed(path, query);
    ok(&req.id, json!({ "page": page.map(|p| p.key()) }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "health" => Some(handle_health(state, req)),
        "route.changed" => Some(handle_route_changed(state, req)),
        _ => None,
    }
}
