//! Route handlers called from `handle_request`.

pub mod card;
pub mod util;
