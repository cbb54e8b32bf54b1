use crate::entities::Item;

/// Everything needed to render the ledger view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerState {
    /// Items in the order they were loaded and added
    pub items: Vec<Item>,
    /// A fetch is outstanding
    pub loading: bool,
    /// The add-item form is open
    pub modal_open: bool,
    /// Last store failure, shown until dismissed or superseded
    pub error: Option<String>,
}

impl Default for LedgerState {
    /// The view starts out loading, before the first fetch completes.
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            modal_open: false,
            error: None,
        }
    }
}
