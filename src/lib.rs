//! Valentine card in-browser WASM server.
//!
//! Exports `handle_request(method, path, query, body)` for the page's HTMX
//! bridge to call. Uses `matchit` for URL routing, the same router
//! engine that powers Axum.
//!
//! The card is configured entirely by the page's query string
//! (`?r=..&q=..&m=..&i=..&mu=..&s=..&t=..`), edited live from the
//! customize panel, and shared by re-encoding it into a link.

use wasm_bindgen::prelude::*;

pub mod card;
pub mod error;
pub mod logging;
pub mod routes;

/// Install the console logger and panic hook. Call once after the module
/// loads; `level` is a `log` level name ("debug", "info", "warn", ...).
#[wasm_bindgen]
pub fn init_logging(level: &str) {
    console_error_panic_hook::set_once();
    logging::install(logging::parse_level(level));
    log::info!("valentine card module ready");
}

/// Process an HTTP-like request and return an HTML fragment.
///
/// Called from JavaScript via wasm-bindgen.
///
/// # Arguments
/// * `method`: HTTP method ("GET" or "POST")
/// * `path`  : URL path (e.g., "/api/card/edit")
/// * `query` : Query string (e.g., "?r=Sam&t=red")
/// * `body`  : Form-encoded request body. Empty string for GET requests.
///
/// # Returns
/// An HTML string fragment suitable for HTMX to swap into the DOM
/// (JSON for `/api/card/state`).
#[wasm_bindgen]
pub fn handle_request(method: &str, path: &str, query: &str, body: &str) -> String {
    let mut router = matchit::Router::new();

    router.insert("/api/card", "page").ok();
    router.insert("/api/card/state", "state").ok();
    router.insert("/api/card/panel", "panel").ok();
    router.insert("/api/card/edit", "edit").ok();
    router.insert("/api/card/link", "link").ok();
    router.insert("/api/card/copied", "copied").ok();
    router.insert("/api/card/feedback/clear", "feedback_clear").ok();
    router.insert("/api/card/no", "no").ok();
    router.insert("/api/card/yes", "yes").ok();
    router.insert("/api/card/modal/close", "modal_close").ok();
    router.insert("/api/card/music", "music").ok();
    router.insert("/api/card/music/rejected", "music_rejected").ok();

    match router.at(path) {
        Ok(matched) => match (*matched.value, method) {
            ("page", "GET") => routes::card::handle_page_get(query),
            ("state", "GET") => routes::card::handle_state_get(query),
            ("panel", "GET") => routes::card::handle_panel_get(query),
            ("copied", "GET") => routes::card::handle_copied_get(query),

            ("edit", "POST") => routes::card::handle_edit_post(body),
            ("link", "POST") => routes::card::handle_link_post(body),
            ("feedback_clear", "POST") => routes::card::handle_feedback_clear_post(body),
            ("no", "POST") => routes::card::handle_no_post(body),
            ("yes", "POST") => routes::card::handle_yes_post(body),
            ("modal_close", "POST") => routes::card::handle_modal_close_post(body),
            ("music", "POST") => routes::card::handle_music_post(body),
            ("music_rejected", "POST") => routes::card::handle_music_rejected_post(body),

            _ => method_not_allowed(method, path),
        },
        Err(_) => not_found(path),
    }
}

fn not_found(path: &str) -> String {
    log::warn!("no route for {path}");
    r#"<span class="card-error">404: route not found</span>"#.to_string()
}

fn method_not_allowed(method: &str, path: &str) -> String {
    log::warn!("{method} not allowed on {path}");
    r#"<span class="card-error">405: method not allowed</span>"#.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_page_load() {
        let html = handle_request("GET", "/api/card", "?r=Sam", "");
        assert!(html.contains("Will you be my Valentine?, Sam"));
        assert!(html.contains(r#"<div id="card-root">"#));
    }

    #[test]
    fn returns_404_for_unknown_route() {
        let html = handle_request("GET", "/api/nonexistent", "", "");
        assert!(html.contains("404"));
    }

    #[test]
    fn returns_405_for_wrong_method() {
        let html = handle_request("POST", "/api/card", "", "");
        assert!(html.contains("405"));
        let html = handle_request("GET", "/api/card/edit", "", "");
        assert!(html.contains("405"));
    }

    #[test]
    fn edit_then_share_round_trips() {
        handle_request("GET", "/api/card", "", "");
        handle_request("POST", "/api/card/edit", "", "field=recipient&value=Zo%C3%AB+%26+Ana");
        handle_request("POST", "/api/card/edit", "", "field=theme&value=midnight");
        let script = handle_request(
            "POST",
            "/api/card/link",
            "",
            "page=https%3A%2F%2Fcards.example%2F",
        );
        assert!(script.contains("writeText"));

        let link = card::session::with_session(|s| s.last_link.clone()).unwrap();
        let query = link.split_once('?').map(|(_, q)| q).unwrap();
        let before = card::session::with_session(|s| s.card.clone());

        handle_request("GET", "/api/card", query, "");
        let after = card::session::with_session(|s| s.card.clone());
        assert_eq!(before, after);
        assert_eq!(after.recipient, "Zoë & Ana");
    }

    #[test]
    fn routes_panel_open() {
        handle_request("GET", "/api/card", "?q=Dinner%3F", "");
        let html = handle_request("GET", "/api/card/panel", "?action=open", "");
        assert!(html.contains(r#"value="Dinner?""#));
    }

    #[test]
    fn routes_yes_and_close() {
        handle_request("GET", "/api/card", "?r=Alice", "");
        let html = handle_request("POST", "/api/card/yes", "", "");
        assert!(html.contains("Yay! Alice!"));
        let html = handle_request("POST", "/api/card/modal/close", "", "");
        assert!(html.is_empty());
    }

    #[test]
    fn routes_decline_until_exhausted() {
        handle_request("GET", "/api/card", "", "");
        let last = (0..6)
            .map(|_| handle_request("POST", "/api/card/no", "", ""))
            .last()
            .unwrap();
        assert!(last.contains(">Okay :(</button>"));
    }

    #[test]
    fn routes_copy_feedback_cycle() {
        handle_request("GET", "/api/card", "", "");
        let html = handle_request("GET", "/api/card/copied", "?status=ok", "");
        assert!(html.contains("Copied to clipboard!"));
        let html = handle_request("POST", "/api/card/feedback/clear", "", "ticket=1");
        assert!(html.is_empty());
    }

    #[test]
    fn routes_music() {
        handle_request("GET", "/api/card", "?mu=https%3A%2F%2Fcdn.example%2Fa.mp3", "");
        let html = handle_request("POST", "/api/card/music", "", "");
        assert!(html.contains("play()"));
        let html = handle_request("POST", "/api/card/music/rejected", "", "");
        assert!(html.contains("alert("));
    }

    #[test]
    fn routes_state_json() {
        handle_request("GET", "/api/card", "?t=red", "");
        let json = handle_request("GET", "/api/card/state", "", "");
        assert!(json.contains(r#""theme":"red""#));
    }
}
