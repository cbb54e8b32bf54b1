//! Ledger view controller - runs the load/add data flow against a store.
//!
//! Store failures are caught here, recorded in the view state through the
//! reducer, and then handed back to the caller. The state is never left
//! loading after a failed fetch, and a failed submit leaves the form open.

use super::{intent::LedgerIntent, reducer::LedgerReducer, state::LedgerState};
use crate::{
    core::{report::LedgerReport, settlement::Participants},
    entities::{DraftItem, Item},
    errors::Result,
    store::ItemStore,
};
use chrono::NaiveDate;
use tracing::{error, info, warn};

/// The ledger view: a store, the participants and the current state.
pub struct LedgerView<S> {
    store: S,
    participants: Participants,
    state: LedgerState,
}

impl<S: ItemStore> LedgerView<S> {
    /// Creates a view in its initial (loading) state.
    #[must_use]
    pub fn new(store: S, participants: Participants) -> Self {
        Self {
            store,
            participants,
            state: LedgerState::default(),
        }
    }

    /// Current view state
    #[must_use]
    pub const fn state(&self) -> &LedgerState {
        &self.state
    }

    /// Participants the totals are computed for
    #[must_use]
    pub const fn participants(&self) -> &Participants {
        &self.participants
    }

    /// Underlying item store
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    fn dispatch(&mut self, intent: LedgerIntent) {
        let state = std::mem::take(&mut self.state);
        self.state = LedgerReducer::reduce(state, intent);
    }

    /// Fetches all items into the view, replacing what was there.
    ///
    /// # Errors
    /// Returns the store error after recording it in the state; the previous
    /// items are kept.
    pub async fn load(&mut self) -> Result<()> {
        self.dispatch(LedgerIntent::LoadStarted);

        match self.store.fetch_all().await {
            Ok(items) => {
                info!("Loaded {} items", items.len());
                self.dispatch(LedgerIntent::ItemsLoaded(items));
                Ok(())
            }
            Err(e) => {
                error!("Failed to load items: {e}");
                self.dispatch(LedgerIntent::LoadFailed(e.to_string()));
                Err(e)
            }
        }
    }

    /// Submits `draft` and appends the record the store returns.
    ///
    /// A payee outside the participant set is accepted, but its items will not
    /// count towards any total.
    ///
    /// # Errors
    /// Returns the store error after recording it in the state.
    pub async fn add_item(&mut self, draft: DraftItem) -> Result<Item> {
        if !self.participants.contains(&draft.payee_name) {
            warn!(
                "Payee {:?} is not a ledger participant; the item will not count towards totals",
                draft.payee_name
            );
        }

        match self.store.create(&draft).await {
            Ok(item) => {
                info!("Added item {} ({} by {})", item.id, item.price, item.payee_name);
                self.dispatch(LedgerIntent::ItemAdded(item.clone()));
                Ok(item)
            }
            Err(e) => {
                error!("Failed to add item: {e}");
                self.dispatch(LedgerIntent::AddFailed(e.to_string()));
                Err(e)
            }
        }
    }

    /// Assembles a draft from raw form input and submits it.
    ///
    /// # Errors
    /// Returns the store error after recording it in the state.
    pub async fn submit_form(
        &mut self,
        payee_name: &str,
        price_input: &str,
        product: &str,
        set_date: Option<NaiveDate>,
    ) -> Result<Item> {
        let draft = DraftItem::from_form(payee_name, price_input, product, set_date);
        self.add_item(draft).await
    }

    /// Opens the add-item form
    pub fn open_modal(&mut self) {
        self.dispatch(LedgerIntent::ModalOpened);
    }

    /// Closes the add-item form
    pub fn close_modal(&mut self) {
        self.dispatch(LedgerIntent::ModalClosed);
    }

    /// Clears the error banner
    pub fn dismiss_error(&mut self) {
        self.dispatch(LedgerIntent::ErrorDismissed);
    }

    /// Builds the ledger report from the current items.
    #[must_use]
    pub fn report(&self) -> LedgerReport {
        LedgerReport::build(&self.state.items, &self.participants)
    }
}
