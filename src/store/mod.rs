//! Item store - the remote collection the ledger reads from and appends to.
//!
//! The ledger only needs two operations: list every item, and submit a draft
//! to get back the stored record. [`HttpItemStore`] talks to the REST item
//! service; [`InMemoryItemStore`] keeps items in process.

/// REST client for `GET /items` and `POST /items`
pub mod http;
/// In-process store with sequential ids
pub mod memory;

pub use http::HttpItemStore;
pub use memory::InMemoryItemStore;

use crate::{
    entities::{DraftItem, Item},
    errors::Result,
};

/// Trait for item store operations
pub trait ItemStore: Send + Sync {
    /// Fetch every item currently known to the store
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<Item>>> + Send;

    /// Submit a draft; the returned record carries the store-assigned id
    fn create(&self, draft: &DraftItem) -> impl Future<Output = Result<Item>> + Send;
}
