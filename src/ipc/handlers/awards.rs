use serde_json::json;

use crate::data;
use crate::ipc::error::ok;
use crate::ipc::types::{AppState, Request};
use crate::timeline;

fn handle_timeline(state: &mut AppState, req: &Request) -> serde_json::Value {
    let all = data::awards();
    let grouped = timeline::build_timeline(all, &state.store.state().awards);
    let stats = timeline::timeline_stats(&grouped);

    ok(
        &req.id,
        json!({
            "timeline": grouped,
            "stats": stats,
            "yearOptions": timeline::year_options(all),
        }),
    )
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "awards.timeline" => Some(handle_timeline(state, req)),
        _ => None,
    }
}
