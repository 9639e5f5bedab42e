mod data;
mod filters;
mod ipc;
mod roster;
mod store;
mod timeline;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use store::{FileSession, FilterStore, MemorySession, SessionStore};

fn main() {
    // stdout carries the protocol; diagnostics go to stderr.
    env_logger::init();

    // Optional single argument: the session file the host scopes to the
    // browsing session. Without it, state lives for the process lifetime.
    let session_path = std::env::args().nth(1).map(PathBuf::from);
    let session: Box<dyn SessionStore> = match &session_path {
        Some(path) => Box::new(FileSession::new(path.clone())),
        None => Box::<MemorySession>::default(),
    };

    let mut store = FilterStore::new(session);
    store.restore();
    let mut state = ipc::AppState {
        store,
        session_path,
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(v) => v,
            Err(_) => break,
        };
        if line.trim().is_empty() {
            continue;
        }

        let req: ipc::Request = match serde_json::from_str(&line) {
            Ok(v) => v,
            Err(e) => {
                // Can't reply with an id; report the parse failure bare.
                let _ = writeln!(
                    stdout,
                    "{{\"ok\":false,\"error\":{{\"code\":\"bad_json\",\"message\":\"{}\"}}}}",
                    e
                );
                let _ = stdout.flush();
                continue;
            }
        };

        let resp = ipc::handle_request(&mut state, req);
        let _ = writeln!(
            stdout,
            "{}",
            serde_json::to_string(&resp).unwrap_or_else(|_| "{\"ok\":false}".to_string())
        );
        let _ = stdout.flush();
    }
}
