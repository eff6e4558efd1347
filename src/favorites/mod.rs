//! Favorites Ledger: user-marked insect ids, persisted in a [`KeyValueStore`].
//!
//! [`KeyValueStore`]: crate::storage::KeyValueStore

mod codec;
mod ledger;

pub use codec::{decode_favorites, encode_favorites};
pub use ledger::{FavoritesLedger, DEFAULT_FAVORITES_KEY};
