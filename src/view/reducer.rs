use super::{intent::LedgerIntent, state::LedgerState};

/// Pure `(state, intent) -> state` transitions for the ledger view.
///
/// This is the only place the view state changes.
pub struct LedgerReducer;

impl LedgerReducer {
    /// Applies `intent` to `state` and returns the new state.
    #[must_use]
    pub fn reduce(state: LedgerState, intent: LedgerIntent) -> LedgerState {
        match intent {
            LedgerIntent::LoadStarted => LedgerState {
                loading: true,
                error: None,
                ..state
            },
            LedgerIntent::ItemsLoaded(items) => LedgerState {
                items,
                loading: false,
                ..state
            },
            // Loading is cleared so the view can retry instead of hanging.
            LedgerIntent::LoadFailed(message) => LedgerState {
                loading: false,
                error: Some(message),
                ..state
            },
            LedgerIntent::ModalOpened => LedgerState {
                modal_open: true,
                ..state
            },
            LedgerIntent::ModalClosed => LedgerState {
                modal_open: false,
                ..state
            },
            LedgerIntent::ItemAdded(item) => {
                let mut items = state.items;
                items.push(item);
                LedgerState {
                    items,
                    modal_open: false,
                    error: None,
                    ..state
                }
            }
            LedgerIntent::AddFailed(message) => LedgerState {
                error: Some(message),
                ..state
            },
            LedgerIntent::ErrorDismissed => LedgerState {
                error: None,
                ..state
            },
        }
    }
}
