//! Entity module - Contains the records exchanged with the item store.
//! An [`Item`] is what the store holds; a [`DraftItem`] is what the client
//! assembles before the store assigns an id.

pub mod item;

pub use item::{DraftItem, Item, ItemId};
