//! Card projection and HTML fragment builders.
//!
//! `project` turns a `CardState` into a `View`: plain data describing what
//! each slot on the page should show. The `render_*` functions turn a `View`
//! into HTMX fragments. Both are pure: same input, byte-identical output.
//!
//! Slot ids (stable contract with the page shell):
//!   `#card-root`, `#card-stage`, `#card-imagery`, `#main-heading`,
//!   `#sub-message`, `#decline-slot`, `#music-slot`, `#bg-music`,
//!   `#admin-panel`, `#theme-swatches`, `#copy-feedback`,
//!   `#clipboard-bridge`, `#success-modal`.

use crate::card::accept::Celebration;
use crate::card::state::{CardState, Field};
use crate::routes::util::escape_html;

pub const TEDDY_DEFAULT_SRC: &str = "/assets/teddy-default.svg";
pub const TEDDY_SUCCESS_SRC: &str = "/assets/teddy-success.svg";

/// Theme identifiers offered as swatches in the edit panel.
pub const SWATCHES: [&str; 4] = ["pink", "red", "lavender", "midnight"];

/// Which graphic the imagery slot shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Imagery {
    /// Built-in teddy, waiting for an answer.
    Default,
    /// Built-in teddy after "Yes". Only reachable through the accept flow.
    Success,
    Custom(String),
}

/// Everything the page shows for a given card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub heading: String,
    pub sub_message: String,
    pub imagery: Imagery,
    pub theme: String,
    /// Audio source; `None` keeps the music toggle hidden.
    pub music_src: Option<String>,
    /// Current value for each edit-panel input.
    pub inputs: Vec<(Field, String)>,
}

/// Interaction state that outlives a stage re-render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub decline_label: &'static str,
    pub music_glyph: &'static str,
}

pub fn project(card: &CardState) -> View {
    let heading = if card.recipient.is_empty() {
        card.question.clone()
    } else {
        format!("{}, {}", card.question, card.recipient)
    };
    let imagery = if card.image.is_empty() {
        Imagery::Default
    } else {
        Imagery::Custom(card.image.clone())
    };
    View {
        heading,
        sub_message: card.message.clone(),
        imagery,
        theme: card.theme.clone(),
        music_src: (!card.music.is_empty()).then(|| card.music.clone()),
        inputs: Field::INPUTS
            .into_iter()
            .map(|f| (f, card.get(f).to_string()))
            .collect(),
    }
}

// ── Page ───────────────────────────────────────────────────────────

/// Full page body: stage, audio, edit panel, modal slot.
pub fn render_page(view: &View, controls: Controls, panel_open: bool) -> String {
    let mut h = String::with_capacity(4096);
    h.push_str(r#"<div id="card-root">"#);
    h.push_str(&render_stage(view, controls));
    h.push_str(&render_audio(view.music_src.as_deref(), false));
    h.push_str(r##"<button id="customize-btn" class="customize-btn" hx-get="/api/card/panel?action=open" hx-target="#admin-panel" hx-swap="innerHTML">Customize</button>"##);
    h.push_str(r#"<aside id="admin-panel">"#);
    if panel_open {
        h.push_str(&render_panel(view, ""));
    }
    h.push_str(r#"</aside>"#);
    h.push_str(r#"<div id="success-modal"></div>"#);
    h.push_str(r#"</div>"#);
    h
}

// ── Stage ──────────────────────────────────────────────────────────

/// The themed part of the page. Swapped with `outerHTML` after every edit.
pub fn render_stage(view: &View, controls: Controls) -> String {
    let mut h = String::with_capacity(2048);
    h.push_str(&format!(
        r#"<main id="card-stage" class="theme-{}">"#,
        theme_class(&view.theme)
    ));
    h.push_str(&render_imagery(&view.imagery, false));
    h.push_str(&format!(
        r#"<h1 id="main-heading">{}</h1>"#,
        escape_html(&view.heading)
    ));
    h.push_str(&format!(
        r#"<p id="sub-message">{}</p>"#,
        escape_html(&view.sub_message)
    ));
    h.push_str(r#"<div class="card-actions">"#);
    h.push_str(r##"<button id="btn-yes" class="btn-yes" hx-post="/api/card/yes" hx-target="#success-modal" hx-swap="innerHTML">Yes</button>"##);
    h.push_str(r#"<span id="decline-slot">"#);
    h.push_str(&render_decline_button(controls.decline_label));
    h.push_str(r#"</span>"#);
    h.push_str(r#"</div>"#);
    h.push_str(r#"<span id="music-slot">"#);
    h.push_str(&render_music_toggle(view.music_src.is_some(), controls.music_glyph));
    h.push_str(r#"</span>"#);
    h.push_str(r#"</main>"#);
    h
}

/// Class-safe form of a theme id: anything outside `[A-Za-z0-9_-]` becomes
/// `-`, so the stage never carries more than one theme class.
pub fn theme_class(theme: &str) -> String {
    theme
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .collect()
}

/// The three graphics, exactly one of them visible.
pub fn render_imagery(imagery: &Imagery, oob: bool) -> String {
    let hide = |visible: bool| if visible { "" } else { " hidden" };
    let custom_src = match imagery {
        Imagery::Custom(src) => escape_html(src),
        _ => String::new(),
    };
    format!(
        r#"<div id="card-imagery"{oob}><img id="teddy-default" class="teddy{d}" src="{TEDDY_DEFAULT_SRC}" alt=""><img id="teddy-success" class="teddy{s}" src="{TEDDY_SUCCESS_SRC}" alt=""><img id="custom-image" class="custom-image{c}" src="{custom_src}" alt=""></div>"#,
        oob = if oob { r#" hx-swap-oob="true""# } else { "" },
        d = hide(*imagery == Imagery::Default),
        s = hide(*imagery == Imagery::Success),
        c = hide(matches!(imagery, Imagery::Custom(_))),
    )
}

pub fn render_decline_button(label: &str) -> String {
    format!(
        r##"<button id="btn-no" class="btn-no" hx-post="/api/card/no" hx-target="#decline-slot" hx-swap="innerHTML">{}</button>"##,
        escape_html(label)
    )
}

pub fn render_music_toggle(visible: bool, glyph: &str) -> String {
    format!(
        r##"<button id="music-toggle" class="music-toggle{}" hx-post="/api/card/music" hx-target="#music-slot" hx-swap="innerHTML">{}</button>"##,
        if visible { "" } else { " hidden" },
        glyph
    )
}

/// The audio element. Lives outside the stage so text edits don't restart it.
pub fn render_audio(src: Option<&str>, oob: bool) -> String {
    let oob = if oob { r#" hx-swap-oob="true""# } else { "" };
    match src {
        Some(src) => format!(
            r#"<audio id="bg-music" loop preload="none" src="{}"{oob}></audio>"#,
            escape_html(src)
        ),
        None => format!(r#"<audio id="bg-music" loop preload="none"{oob}></audio>"#),
    }
}

// ── Edit panel ─────────────────────────────────────────────────────

fn input_id(field: Field) -> &'static str {
    match field {
        Field::Recipient => "input-recipient",
        Field::Question => "input-question",
        Field::Message => "input-message",
        Field::Image => "input-image",
        Field::Music => "input-music",
        Field::Success => "input-success-msg",
        Field::Theme => "input-theme",
    }
}

fn input_label(field: Field) -> &'static str {
    match field {
        Field::Recipient => "Their name",
        Field::Question => "Question",
        Field::Message => "Message",
        Field::Image => "Image URL",
        Field::Music => "Music URL",
        Field::Success => "Success message",
        Field::Theme => "Theme",
    }
}

/// Edit panel with every input synced to the card. `notice` is the current
/// copy-feedback markup, placed inside `#copy-feedback`.
pub fn render_panel(view: &View, notice: &str) -> String {
    let mut h = String::with_capacity(4096);
    h.push_str(r#"<div class="admin-panel">"#);
    h.push_str(r##"<button id="close-admin" class="close-admin" hx-get="/api/card/panel?action=close" hx-target="#admin-panel" hx-swap="innerHTML">&times;</button>"##);
    h.push_str(r#"<h2>Customize your card</h2>"#);

    for (field, value) in &view.inputs {
        let kind = match field {
            Field::Image | Field::Music => "url",
            _ => "text",
        };
        h.push_str(&format!(
            r##"<label for="{id}">{label}</label><input type="{kind}" id="{id}" name="value" value="{value}" hx-post="/api/card/edit" hx-trigger="input" hx-vals='{{"field":"{name}"}}' hx-target="#card-stage" hx-swap="outerHTML">"##,
            id = input_id(*field),
            label = input_label(*field),
            value = escape_html(value),
            name = field.name(),
        ));
    }

    h.push_str(&render_swatches(&view.theme, false));
    h.push_str(r##"<button id="btn-generate-link" class="btn-generate" hx-post="/api/card/link" hx-vals='js:{page: window.location.href}' hx-target="#clipboard-bridge" hx-swap="innerHTML">Generate Link</button>"##);
    h.push_str(r#"<div id="copy-feedback" class="copy-feedback">"#);
    h.push_str(notice);
    h.push_str(r#"</div>"#);
    h.push_str(r#"<div id="clipboard-bridge" hidden></div>"#);
    h.push_str(r#"</div>"#);
    h
}

/// Theme swatches, with the current theme marked active.
pub fn render_swatches(current: &str, oob: bool) -> String {
    let mut h = String::with_capacity(1024);
    h.push_str(&format!(
        r#"<div id="theme-swatches" class="theme-swatches"{}>"#,
        if oob { r#" hx-swap-oob="true""# } else { "" }
    ));
    for theme in SWATCHES {
        let active = if theme == current { " active" } else { "" };
        h.push_str(&format!(
            r##"<button type="button" class="color-swatch swatch-{theme}{active}" data-theme="{theme}" title="{theme}" hx-post="/api/card/edit" hx-vals='{{"field":"theme","value":"{theme}"}}' hx-target="#card-stage" hx-swap="outerHTML"></button>"##
        ));
    }
    h.push_str(r#"</div>"#);
    h
}

// ── Modal ──────────────────────────────────────────────────────────

pub fn render_modal(celebration: &Celebration) -> String {
    format!(
        r##"<div class="modal visible" role="dialog"><div class="modal-content"><h2 id="modal-heading">{}</h2><p id="modal-body">{}</p><button id="btn-close-modal" hx-post="/api/card/modal/close" hx-target="#success-modal" hx-swap="innerHTML">Close</button></div></div>"##,
        escape_html(&celebration.heading),
        escape_html(&celebration.body)
    )
}
