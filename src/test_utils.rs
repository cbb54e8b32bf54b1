//! Shared test utilities for the expense ledger.
//!
//! Builders for items and drafts with sensible defaults, plus tracing setup.
#![allow(clippy::unwrap_used)]

use crate::entities::{DraftItem, Item, ItemId};
use chrono::NaiveDate;
use tracing_subscriber::EnvFilter;

/// Date stamped on test items and drafts.
#[must_use]
pub fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
}

/// Creates a stored item with sensible defaults.
///
/// # Defaults
/// * `product`: `"Test expense"`
/// * `set_date`: [`test_date`]
#[must_use]
pub fn test_item(id: i64, payee: &str, price: u64) -> Item {
    Item {
        id: ItemId::Number(id),
        payee_name: payee.to_string(),
        price,
        product: "Test expense".to_string(),
        set_date: test_date(),
    }
}

/// Creates a draft with sensible defaults.
#[must_use]
pub fn test_draft(payee: &str, price: u64) -> DraftItem {
    DraftItem {
        payee_name: payee.to_string(),
        price,
        product: "Test expense".to_string(),
        set_date: test_date(),
    }
}

/// Installs a tracing subscriber writing to the test output; safe to call
/// from every test.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}
