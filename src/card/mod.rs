//! Card module: the card record, its projection onto the page, and the
//! small state machines behind the page's buttons. State lives in WASM
//! memory (thread_local) for the lifetime of the page.

pub mod accept;
pub mod decline;
pub mod feedback;
pub mod music;
pub mod params;
pub mod render;
pub mod session;
pub mod state;
