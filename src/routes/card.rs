//! `/api/card/*` routes: page load, live editing, link sharing, and the
//! Yes/No/music interactions.
//!
//! Every handler returns an HTML fragment. Browser-only effects (clipboard,
//! audio, timers, confetti) are emitted as inline `<script>` snippets whose
//! completions call back into these routes.

use log::{debug, info, warn};

use crate::card::accept::{self, BURST};
use crate::card::decline::{DeclineOutcome, SHAKE_MS, SHAKE_OFFSET_PX};
use crate::card::feedback::{
    COPIED_TEXT, COPY_FAILED_TEXT, COPY_FEEDBACK_MS, CopyStatus,
};
use crate::card::music::{MusicToggle, PLAYBACK_BLOCKED_NOTICE};
use crate::card::params::share_link;
use crate::card::render;
use crate::card::session::{self, CardSession, with_session, with_session_mut};
use crate::card::state::Field;
use crate::error::CardError;
use crate::routes::util::{escape_html, get_param, js_string, parse_form_body, parse_query};

fn error_html(err: &CardError) -> String {
    warn!("card request rejected: {err}");
    format!(
        r#"<span class="card-error">{}</span>"#,
        escape_html(&err.to_string())
    )
}

// ── GET /api/card ──────────────────────────────────────────────────

/// Handle GET /api/card?r=..&q=..&m=..&i=..&mu=..&s=..&t=..
/// Rebuilds the session from the page's query string and returns the page body.
pub fn handle_page_get(query: &str) -> String {
    let fresh = CardSession::from_query(query);
    info!("card loaded");
    debug!("recipient {:?}", fresh.card.recipient);
    let html = render::render_page(&fresh.view(), fresh.controls(), fresh.panel_open);
    session::replace_session(fresh);
    html
}

// ── GET /api/card/state ────────────────────────────────────────────

pub fn handle_state_get(_query: &str) -> String {
    session::export_card_json()
}

// ── GET /api/card/panel ────────────────────────────────────────────

/// Handle GET /api/card/panel?action=open|close
/// Opening re-syncs every input from the current card and re-shows any copy
/// notice still held by the session, with a fresh clear timer.
pub fn handle_panel_get(query: &str) -> String {
    let params = parse_query(query);
    match get_param(&params, "action").unwrap_or("") {
        "open" => with_session_mut(|s| {
            s.panel_open = true;
            let notice = s
                .feedback
                .shown()
                .map(|status| show_copy_notice(s, status))
                .unwrap_or_default();
            render::render_panel(&s.view(), &notice)
        }),
        "close" => {
            with_session_mut(|s| s.panel_open = false);
            String::new()
        }
        _ => error_html(&CardError::MissingParam("action")),
    }
}

// ── POST /api/card/edit ────────────────────────────────────────────

/// Handle POST /api/card/edit
/// Body: field={recipient|question|message|image|music|success|theme}&value={raw}
///
/// Returns the re-rendered stage. Music edits also swap the audio element
/// out-of-band; theme edits re-mark the active swatch.
pub fn handle_edit_post(body: &str) -> String {
    let params = parse_form_body(body);
    match apply_edit(&params) {
        Ok(html) => html,
        Err(e) => error_html(&e),
    }
}

fn apply_edit(params: &[(String, String)]) -> Result<String, CardError> {
    let field: Field = get_param(params, "field")
        .ok_or(CardError::MissingParam("field"))?
        .parse()?;
    let value = get_param(params, "value").unwrap_or("");
    debug!("edit {field} = {value:?}");

    Ok(with_session_mut(|s| {
        s.card.set(field, value);
        if field == Field::Music {
            s.music.stop();
        }
        let view = s.view();
        let mut html = render::render_stage(&view, s.controls());
        match field {
            Field::Music => html.push_str(&render::render_audio(view.music_src.as_deref(), true)),
            Field::Theme => html.push_str(&render::render_swatches(&view.theme, true)),
            _ => {}
        }
        html
    }))
}

// ── POST /api/card/link ────────────────────────────────────────────

/// Handle POST /api/card/link
/// Body: page={location.href}
///
/// Builds the share link and returns a script that writes it to the
/// clipboard, reporting the outcome to GET /api/card/copied.
pub fn handle_link_post(body: &str) -> String {
    let params = parse_form_body(body);
    let Some(page) = get_param(&params, "page").filter(|p| !p.is_empty()) else {
        return error_html(&CardError::MissingParam("page"));
    };
    let link = match with_session(|s| share_link(page, &s.card)) {
        Ok(link) => link,
        Err(e) => return error_html(&e),
    };
    debug!("share link generated ({} bytes)", link.len());
    with_session_mut(|s| s.last_link = Some(link.clone()));

    format!(
        r#"<script>
(function() {{
  function report(status) {{
    htmx.ajax('GET', '/api/card/copied?status=' + status, {{target:'#copy-feedback', swap:'innerHTML'}});
  }}
  Promise.resolve()
    .then(function() {{ return navigator.clipboard.writeText({link}); }})
    .then(function() {{ report('ok'); }}, function() {{ report('failed'); }});
}})();
</script>"#,
        link = js_string(&link)
    )
}

// ── GET /api/card/copied ───────────────────────────────────────────

/// Handle GET /api/card/copied?status=ok|failed
/// Shows the copy notice. Successful copies schedule a ticketed clear and
/// cancel any clear still pending from an earlier click.
pub fn handle_copied_get(query: &str) -> String {
    let params = parse_query(query);
    let Some(status) = get_param(&params, "status").and_then(CopyStatus::parse) else {
        return error_html(&CardError::MissingParam("status"));
    };

    if status == CopyStatus::Failed {
        warn!("clipboard write failed; showing link for manual copy");
    }
    with_session_mut(|s| show_copy_notice(s, status))
}

/// Record `status` as the shown notice and build its markup. Successful
/// copies schedule a ticketed clear; either way any older timer is cancelled.
fn show_copy_notice(s: &mut CardSession, status: CopyStatus) -> String {
    let ticket = s.feedback.show(status);
    let mut html = notice_html(status, s.last_link.as_deref());
    if status.auto_clears() {
        html.push_str(&format!(
            r#"
<script>
  clearTimeout(window.valentineCopyTimer);
  window.valentineCopyTimer = setTimeout(function() {{
    htmx.ajax('POST', '/api/card/feedback/clear', {{target:'#copy-feedback', swap:'innerHTML', values:{{ticket:'{ticket}'}}}});
  }}, {COPY_FEEDBACK_MS});
</script>"#
        ));
    } else {
        html.push_str("\n<script>clearTimeout(window.valentineCopyTimer);</script>");
    }
    html
}

fn notice_html(status: CopyStatus, link: Option<&str>) -> String {
    match status {
        CopyStatus::Copied => format!(r#"<span class="copy-ok">{COPIED_TEXT}</span>"#),
        CopyStatus::Failed => format!(
            r#"<span class="copy-failed">{COPY_FAILED_TEXT}</span><input type="text" class="copy-manual" readonly value="{}" onclick="this.select()">"#,
            escape_html(link.unwrap_or(""))
        ),
    }
}

// ── POST /api/card/feedback/clear ──────────────────────────────────

/// Handle POST /api/card/feedback/clear
/// Body: ticket={n}
///
/// Clears the notice only if `ticket` is still current; a stale clear
/// re-renders the current notice unchanged.
pub fn handle_feedback_clear_post(body: &str) -> String {
    let params = parse_form_body(body);
    let ticket: u64 = get_param(&params, "ticket")
        .and_then(|t| t.parse().ok())
        .unwrap_or(0);

    with_session_mut(|s| {
        if s.feedback.clear(ticket) {
            return String::new();
        }
        s.feedback
            .shown()
            .map(|status| notice_html(status, s.last_link.as_deref()))
            .unwrap_or_default()
    })
}

// ── POST /api/card/no ──────────────────────────────────────────────

pub fn handle_no_post(_body: &str) -> String {
    with_session_mut(|s| {
        let outcome = s.decline.press();
        let mut html = render::render_decline_button(s.decline.label());
        if let DeclineOutcome::Advanced(reply) = outcome {
            debug!("decline pressed, now {reply:?}");
            html.push_str(&format!(
                r#"<script>
(function() {{
  var b = document.getElementById('btn-no');
  b.style.transform = 'translateX({SHAKE_OFFSET_PX}px)';
  setTimeout(function() {{ b.style.transform = 'translateX(0)'; }}, {SHAKE_MS});
}})();
</script>"#
            ));
        }
        html
    })
}

// ── POST /api/card/yes ─────────────────────────────────────────────

/// Handle POST /api/card/yes
/// Returns the modal, the particle burst, and (without a custom image) the
/// success teddy as an out-of-band imagery swap. Safe to repeat.
pub fn handle_yes_post(_body: &str) -> String {
    let celebration = with_session(|s| accept::celebrate(&s.card));
    info!("card accepted");

    let mut html = render::render_modal(&celebration);
    if let Some(imagery) = &celebration.imagery {
        html.push_str(&render::render_imagery(imagery, true));
    }
    html.push_str(&format!(
        r#"<script>if (typeof confetti === 'function') {{ confetti({}); }}</script>"#,
        BURST.to_json()
    ));
    html
}

// ── POST /api/card/modal/close ─────────────────────────────────────

pub fn handle_modal_close_post(_body: &str) -> String {
    String::new()
}

// ── POST /api/card/music ───────────────────────────────────────────

/// Handle POST /api/card/music
/// Flips play/pause. A refused `play()` reports to /api/card/music/rejected.
pub fn handle_music_post(_body: &str) -> String {
    with_session_mut(|s| {
        let visible = !s.card.music.is_empty();
        let state = s.music.toggle();
        let mut html = render::render_music_toggle(visible, state.glyph());
        match state {
            MusicToggle::Playing => html.push_str(
                r#"<script>
(function() {
  var a = document.getElementById('bg-music');
  Promise.resolve()
    .then(function() { return a.play(); })
    .catch(function() {
      htmx.ajax('POST', '/api/card/music/rejected', {target:'#music-slot', swap:'innerHTML'});
    });
})();
</script>"#,
            ),
            MusicToggle::Paused => html.push_str(
                r#"<script>document.getElementById('bg-music').pause();</script>"#,
            ),
        }
        html
    })
}

// ── POST /api/card/music/rejected ──────────────────────────────────

pub fn handle_music_rejected_post(_body: &str) -> String {
    warn!("audio playback rejected by the browser");
    with_session_mut(|s| {
        s.music.stop();
        let mut html = render::render_music_toggle(!s.card.music.is_empty(), s.music.glyph());
        html.push_str(&format!(
            "<script>alert({});</script>",
            js_string(PLAYBACK_BLOCKED_NOTICE)
        ));
        html
    })
}
