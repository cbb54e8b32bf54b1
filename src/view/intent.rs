use crate::entities::Item;

/// State transitions of the ledger view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerIntent {
    /// A fetch of all items has started
    LoadStarted,
    /// The fetch returned these items
    ItemsLoaded(Vec<Item>),
    /// The fetch failed; items are left as they were
    LoadFailed(String),
    /// User opened the add-item form
    ModalOpened,
    /// User closed the add-item form
    ModalClosed,
    /// The store accepted a draft and returned this record
    ItemAdded(Item),
    /// Submitting a draft failed; the form stays open for a retry
    AddFailed(String),
    /// User dismissed the error banner
    ErrorDismissed,
}
