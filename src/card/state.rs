//! The card itself: seven free-form text fields and their defaults.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::CardError;

pub const DEFAULT_QUESTION: &str = "Will you be my Valentine?";
pub const DEFAULT_MESSAGE: &str = "I have a question for you...";
pub const DEFAULT_SUCCESS: &str = "Yay! Best day ever!";
pub const DEFAULT_THEME: &str = "pink";

/// Everything a sender can customize. Every visible part of the page is
/// derived from this record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardState {
    pub recipient: String,
    pub question: String,
    pub message: String,
    /// Custom image URL. Empty means the built-in teddy graphic.
    pub image: String,
    /// Background music URL. Empty hides the music toggle.
    pub music: String,
    /// Body of the modal shown after "Yes".
    pub success: String,
    pub theme: String,
}

impl Default for CardState {
    fn default() -> Self {
        Self {
            recipient: String::new(),
            question: DEFAULT_QUESTION.to_string(),
            message: DEFAULT_MESSAGE.to_string(),
            image: String::new(),
            music: String::new(),
            success: DEFAULT_SUCCESS.to_string(),
            theme: DEFAULT_THEME.to_string(),
        }
    }
}

impl CardState {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Recipient => &self.recipient,
            Field::Question => &self.question,
            Field::Message => &self.message,
            Field::Image => &self.image,
            Field::Music => &self.music,
            Field::Success => &self.success,
            Field::Theme => &self.theme,
        }
    }

    /// Overwrite one field with a raw value. No trimming or validation.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Recipient => &mut self.recipient,
            Field::Question => &mut self.question,
            Field::Message => &mut self.message,
            Field::Image => &mut self.image,
            Field::Music => &mut self.music,
            Field::Success => &mut self.success,
            Field::Theme => &mut self.theme,
        };
        *slot = value.into();
    }
}

/// One of the seven card fields.
///
/// Each field has a short key used in share links (`r`, `q`, ...) and a long
/// name used by the edit panel's form posts (`recipient`, `question`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Recipient,
    Question,
    Message,
    Image,
    Music,
    Success,
    Theme,
}

impl Field {
    /// All fields, in share-link order.
    pub const ALL: [Field; 7] = [
        Field::Recipient,
        Field::Question,
        Field::Message,
        Field::Image,
        Field::Music,
        Field::Success,
        Field::Theme,
    ];

    /// The six fields with a text input in the edit panel. Theme is picked
    /// with swatches instead.
    pub const INPUTS: [Field; 6] = [
        Field::Recipient,
        Field::Question,
        Field::Message,
        Field::Image,
        Field::Music,
        Field::Success,
    ];

    pub fn query_key(self) -> &'static str {
        match self {
            Field::Recipient => "r",
            Field::Question => "q",
            Field::Message => "m",
            Field::Image => "i",
            Field::Music => "mu",
            Field::Success => "s",
            Field::Theme => "t",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Field::Recipient => "recipient",
            Field::Question => "question",
            Field::Message => "message",
            Field::Image => "image",
            Field::Music => "music",
            Field::Success => "success",
            Field::Theme => "theme",
        }
    }

    pub fn from_query_key(key: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.query_key() == key)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| CardError::UnknownField(s.to_string()))
    }
}
