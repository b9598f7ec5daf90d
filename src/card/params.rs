//! Reading a card out of a query string and writing it back into a share link.

use url::Url;

use crate::card::state::{CardState, Field};
use crate::error::CardError;
use crate::routes::util::parse_query;

/// Build a card from a page query string (`?r=Sam&t=red`, leading `?`
/// optional). Each recognized key overrides its default independently;
/// unknown keys are ignored and a repeated key keeps its first value.
pub fn card_from_query(query: &str) -> CardState {
    let mut card = CardState::default();
    let mut seen = [false; Field::ALL.len()];
    for (key, value) in parse_query(query) {
        let Some(field) = Field::from_query_key(&key) else {
            continue;
        };
        let idx = field as usize;
        if !seen[idx] {
            seen[idx] = true;
            card.set(field, value);
        }
    }
    card
}

/// Strip query and fragment from the page address, leaving origin + path.
pub fn base_address(page: &str) -> Result<Url, CardError> {
    let mut url = Url::parse(page.trim()).map_err(|_| CardError::InvalidPageUrl(page.to_string()))?;
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}

/// Encode every field of `card` under its short key onto the page's base
/// address. The query is built fresh; anything already on `page` is dropped.
pub fn share_link(page: &str, card: &CardState) -> Result<String, CardError> {
    let mut url = base_address(page)?;
    {
        let mut pairs = url.query_pairs_mut();
        for field in Field::ALL {
            pairs.append_pair(field.query_key(), card.get(field));
        }
    }
    Ok(url.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query_of(link: &str) -> String {
        Url::parse(link).unwrap().query().unwrap_or("").to_string()
    }

    #[test]
    fn empty_query_gives_defaults() {
        assert_eq!(card_from_query(""), CardState::default());
        assert_eq!(card_from_query("?"), CardState::default());
    }

    #[test]
    fn each_key_overrides_only_its_field() {
        for field in Field::ALL {
            let card = card_from_query(&format!("?{}=x", field.query_key()));
            for other in Field::ALL {
                let expected = if other == field {
                    "x".to_string()
                } else {
                    CardState::default().get(other).to_string()
                };
                assert_eq!(card.get(other), expected, "setting {field} touched {other}");
            }
        }
    }

    #[test]
    fn present_but_empty_value_overrides_default() {
        let card = card_from_query("?q=");
        assert_eq!(card.question, "");
    }

    #[test]
    fn unknown_keys_ignored() {
        let card = card_from_query("?utm_source=mail&r=Sam&recipient=Nope");
        assert_eq!(card.recipient, "Sam");
        assert_eq!(card.question, "Will you be my Valentine?");
    }

    #[test]
    fn first_repeated_key_wins() {
        let card = card_from_query("?t=red&t=blue");
        assert_eq!(card.theme, "red");
    }

    #[test]
    fn share_link_drops_existing_query_and_fragment() {
        let card = CardState::default();
        let link = share_link("https://example.com/card/?r=Old&x=1#top", &card).unwrap();
        assert!(link.starts_with("https://example.com/card/?r=&q="));
        assert!(!link.contains("Old"));
        assert!(!link.contains('#'));
    }

    #[test]
    fn share_link_lists_keys_in_order() {
        let link = share_link("https://example.com/", &CardState::default()).unwrap();
        let keys: Vec<String> = url::form_urlencoded::parse(query_of(&link).as_bytes())
            .map(|(k, _)| k.into_owned())
            .collect();
        assert_eq!(keys, ["r", "q", "m", "i", "mu", "s", "t"]);
    }

    #[test]
    fn share_link_rejects_garbage_address() {
        assert_eq!(
            share_link("not a url", &CardState::default()),
            Err(CardError::InvalidPageUrl("not a url".to_string()))
        );
    }

    #[test]
    fn round_trip_preserves_reserved_and_unicode_text() {
        let card = CardState {
            recipient: "Zoë & Ana".into(),
            question: "Will you be mine? 100% + forever =)".into(),
            message: "a=b&c=d#frag ?x".into(),
            image: "https://img.example/p.png?w=300&h=200".into(),
            music: "https://cdn.example/song name.mp3".into(),
            success: "💖 «yes» /slash\\ 'quote' \"dq\"".into(),
            theme: "midnight".into(),
        };
        let link = share_link("https://cards.example/v/index.html", &card).unwrap();
        assert_eq!(card_from_query(&query_of(&link)), card);
    }

    #[test]
    fn round_trip_preserves_defaults() {
        let card = CardState::default();
        let link = share_link("http://localhost:8080/", &card).unwrap();
        assert_eq!(card_from_query(&query_of(&link)), card);
    }
}
