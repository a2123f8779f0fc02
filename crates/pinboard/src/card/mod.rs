//! Card module
//!
//! Cards, their identifiers, and the ordered store that owns them.

mod card;
mod id;
mod store;

pub use card::Card;
pub use id::CardId;
pub use store::CardStore;
