//! Background music play/pause toggle.
//!
//! Only the toggle's own state lives here. The audio source is the card's
//! `music` field; the browser owns actual playback.

pub const PLAY_GLYPH: &str = "\u{1F3B5}"; // 🎵
pub const PAUSE_GLYPH: &str = "\u{23F8}"; // ⏸

/// Shown when the browser refuses to start playback without a prior gesture.
pub const PLAYBACK_BLOCKED_NOTICE: &str = "Please interact with the page first to play audio.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MusicToggle {
    #[default]
    Paused,
    Playing,
}

impl MusicToggle {
    /// Flip the state and return the new one.
    pub fn toggle(&mut self) -> MusicToggle {
        *self = match self {
            MusicToggle::Paused => MusicToggle::Playing,
            MusicToggle::Playing => MusicToggle::Paused,
        };
        *self
    }

    /// Playback was rejected or the source changed; fall back to paused.
    pub fn stop(&mut self) {
        *self = MusicToggle::Paused;
    }

    /// Glyph on the toggle: what pressing it will do next.
    pub fn glyph(self) -> &'static str {
        match self {
            MusicToggle::Paused => PLAY_GLYPH,
            MusicToggle::Playing => PAUSE_GLYPH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggles_back_and_forth() {
        let mut music = MusicToggle::default();
        assert_eq!(music.glyph(), "🎵");
        assert_eq!(music.toggle(), MusicToggle::Playing);
        assert_eq!(music.glyph(), "⏸");
        assert_eq!(music.toggle(), MusicToggle::Paused);
    }

    #[test]
    fn stop_always_pauses() {
        let mut music = MusicToggle::Playing;
        music.stop();
        assert_eq!(music, MusicToggle::Paused);
        music.stop();
        assert_eq!(music, MusicToggle::Paused);
    }
}
