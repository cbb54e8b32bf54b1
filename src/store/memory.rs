//! In-process item store.
//!
//! Keeps items in memory behind a `tokio` lock and assigns sequential numeric
//! ids starting at 1. It can be switched to an unavailable mode in which every
//! call fails with `Error::Network`, which is how the view's failure handling
//! is exercised without a server.

use crate::{
    entities::{DraftItem, Item, ItemId},
    errors::{Error, Result},
    store::ItemStore,
};
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;
use tracing::trace;

#[derive(Debug, Default)]
struct Inner {
    items: Vec<Item>,
    next_id: i64,
}

/// Item store holding everything in process memory
#[derive(Debug, Default)]
pub struct InMemoryItemStore {
    inner: RwLock<Inner>,
    unavailable: AtomicBool,
}

impl InMemoryItemStore {
    /// Creates an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `items`; new ids continue after the
    /// highest numeric id present.
    #[must_use]
    pub fn with_items(items: Vec<Item>) -> Self {
        let max_id = items
            .iter()
            .filter_map(|item| match item.id {
                ItemId::Number(n) => Some(n),
                ItemId::Text(_) => None,
            })
            .max()
            .unwrap_or(0);

        Self {
            inner: RwLock::new(Inner {
                items,
                next_id: max_id,
            }),
            unavailable: AtomicBool::new(false),
        }
    }

    /// Makes every subsequent call fail with `Error::Network` (or succeed again).
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(Error::Network {
                message: "in-memory store marked unavailable".to_string(),
            });
        }
        Ok(())
    }
}

impl ItemStore for InMemoryItemStore {
    async fn fetch_all(&self) -> Result<Vec<Item>> {
        self.check_available()?;
        let inner = self.inner.read().await;
        trace!("In-memory store holds {} items", inner.items.len());
        Ok(inner.items.clone())
    }

    async fn create(&self, draft: &DraftItem) -> Result<Item> {
        self.check_available()?;
        let mut inner = self.inner.write().await;
        let id = inner
            .next_id
            .checked_add(1)
            .ok_or_else(|| Error::Validation {
                message: format!("No item id left after {}", inner.next_id),
            })?;
        inner.next_id = id;
        let item = draft.clone().into_item(ItemId::Number(id));
        inner.items.push(item.clone());
        Ok(item)
    }
}
