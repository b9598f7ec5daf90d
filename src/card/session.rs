//! Per-page session: the card plus the interaction state around it.
//!
//! Uses `thread_local!` + `RefCell` for safe mutable access in single-threaded
//! WASM. The module stays alive for the whole page, so the session persists
//! across `handle_request` calls until the next `GET /api/card` rebuilds it.

use std::cell::RefCell;

use crate::card::decline::DeclineButton;
use crate::card::feedback::CopyFeedback;
use crate::card::music::MusicToggle;
use crate::card::params::card_from_query;
use crate::card::render::{self, Controls, View};
use crate::card::state::CardState;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardSession {
    pub card: CardState,
    pub decline: DeclineButton,
    pub music: MusicToggle,
    pub feedback: CopyFeedback,
    pub panel_open: bool,
    /// Last generated share link, shown again if the clipboard refuses it.
    pub last_link: Option<String>,
}

impl CardSession {
    pub fn from_query(query: &str) -> Self {
        Self {
            card: card_from_query(query),
            ..Self::default()
        }
    }

    pub fn view(&self) -> View {
        render::project(&self.card)
    }

    pub fn controls(&self) -> Controls {
        Controls {
            decline_label: self.decline.label(),
            music_glyph: self.music.glyph(),
        }
    }
}

thread_local! {
    static SESSION: RefCell<CardSession> = RefCell::new(CardSession::default());
}

/// Execute a closure with read access to the session.
pub fn with_session<F, R>(f: F) -> R
where
    F: FnOnce(&CardSession) -> R,
{
    SESSION.with(|s| f(&s.borrow()))
}

/// Execute a closure with mutable access to the session.
pub fn with_session_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut CardSession) -> R,
{
    SESSION.with(|s| f(&mut s.borrow_mut()))
}

/// Replace the whole session (page load).
pub fn replace_session(new_session: CardSession) {
    SESSION.with(|s| {
        *s.borrow_mut() = new_session;
    });
}

/// Export the card as JSON.
pub fn export_card_json() -> String {
    with_session(|s| serde_json::to_string(&s.card).unwrap_or_else(|_| "{}".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_session_is_blank_card() {
        with_session(|s| {
            assert_eq!(s.card, CardState::default());
            assert!(!s.panel_open);
            assert_eq!(s.last_link, None);
        });
    }

    #[test]
    fn from_query_starts_fresh_interactions() {
        let session = CardSession::from_query("?r=Sam&t=red");
        assert_eq!(session.card.recipient, "Sam");
        assert_eq!(session.card.theme, "red");
        assert_eq!(session.decline, DeclineButton::default());
        assert_eq!(session.music, MusicToggle::Paused);
    }

    #[test]
    fn replace_then_export() {
        replace_session(CardSession::from_query("r=Alice"));
        let json = export_card_json();
        assert!(json.contains(r#""recipient":"Alice""#));
        replace_session(CardSession::default());
    }

    #[test]
    fn controls_follow_interaction_state() {
        let mut session = CardSession::default();
        session.decline.press();
        session.music.toggle();
        let controls = session.controls();
        assert_eq!(controls.decline_label, "Are you sure?");
        assert_eq!(controls.music_glyph, "\u{23F8}");
    }
}
