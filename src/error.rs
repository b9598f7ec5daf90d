//! Errors raised by the `/api/card/*` handlers.
//!
//! Nothing here is fatal. Handlers turn a `CardError` into a red error
//! fragment and leave the session untouched.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// An edit named a field the card does not have.
    #[error("unknown card field `{0}`")]
    UnknownField(String),

    #[error("missing `{0}` parameter")]
    MissingParam(&'static str),

    /// The page address posted for link generation could not be parsed.
    #[error("page address `{0}` is not a valid URL")]
    InvalidPageUrl(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offender() {
        assert_eq!(
            CardError::UnknownField("colour".into()).to_string(),
            "unknown card field `colour`"
        );
        assert_eq!(
            CardError::MissingParam("page").to_string(),
            "missing `page` parameter"
        );
    }
}
