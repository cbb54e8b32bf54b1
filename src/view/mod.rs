//! Ledger view - explicit state container for the expense list.
//!
//! ```text
//! store ──→ LedgerView ──intent──→ LedgerReducer ──→ LedgerState ──→ report
//! ```
//!
//! The state is replaced, never mutated in place, by pure reducer transitions.

/// Store-driven load/add flow
pub mod controller;
/// View transitions
pub mod intent;
/// Pure state transitions
pub mod reducer;
/// View state
pub mod state;

pub use controller::LedgerView;
pub use intent::LedgerIntent;
pub use reducer::LedgerReducer;
pub use state::LedgerState;
