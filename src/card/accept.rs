//! The "Yes" button: particle burst, success teddy, and the modal.

use serde::Serialize;

use crate::card::render::Imagery;
use crate::card::state::CardState;

/// Name used in the modal when the card has no recipient.
pub const FALLBACK_RECIPIENT: &str = "Valentine";

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Origin {
    pub y: f32,
}

/// Options handed to the page's `confetti()` effect, serialized as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BurstConfig {
    pub particle_count: u32,
    pub spread: u32,
    pub origin: Origin,
    pub colors: [&'static str; 3],
}

pub const BURST: BurstConfig = BurstConfig {
    particle_count: 150,
    spread: 70,
    origin: Origin { y: 0.6 },
    colors: ["#FFB6C1", "#C23B59", "#FFF"],
};

impl BurstConfig {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// What the page shows once "Yes" is pressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Celebration {
    pub heading: String,
    pub body: String,
    /// `None` when a custom image is configured and stays as it is.
    pub imagery: Option<Imagery>,
}

pub fn celebrate(card: &CardState) -> Celebration {
    let name = if card.recipient.is_empty() {
        FALLBACK_RECIPIENT
    } else {
        card.recipient.as_str()
    };
    Celebration {
        heading: format!("Yay! {name}!"),
        body: card.success.clone(),
        imagery: card.image.is_empty().then_some(Imagery::Success),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_falls_back_to_valentine() {
        let c = celebrate(&CardState::default());
        assert_eq!(c.heading, "Yay! Valentine!");
        assert_eq!(c.body, "Yay! Best day ever!");
    }

    #[test]
    fn heading_uses_recipient() {
        let card = CardState {
            recipient: "Alice".into(),
            ..CardState::default()
        };
        assert_eq!(celebrate(&card).heading, "Yay! Alice!");
    }

    #[test]
    fn swaps_to_success_teddy_without_custom_image() {
        assert_eq!(
            celebrate(&CardState::default()).imagery,
            Some(Imagery::Success)
        );
        let card = CardState {
            image: "https://img.example/us.jpg".into(),
            ..CardState::default()
        };
        assert_eq!(celebrate(&card).imagery, None);
    }

    #[test]
    fn burst_serializes_with_js_option_names() {
        let json: serde_json::Value = serde_json::from_str(&BURST.to_json()).unwrap();
        assert_eq!(json["particleCount"], 150);
        assert_eq!(json["spread"], 70);
        assert_eq!(json["colors"][1], "#C23B59");
        assert!((json["origin"]["y"].as_f64().unwrap() - 0.6).abs() < 1e-6);
    }
}
