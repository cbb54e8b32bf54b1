//! Item entity - A single dated, payee-attributed expense.
//!
//! Field names on the wire are camelCase (`payeeName`, `setDate`) to match the
//! item store's JSON. The `id` is assigned by the store and kept verbatim,
//! whether the store uses numeric or string identifiers.
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Store-assigned identifier of an item.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    /// Numeric id (e.g. an auto-increment key)
    Number(i64),
    /// Opaque string id
    Text(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Expense item as stored by the item store
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique identifier assigned by the store
    pub id: ItemId,
    /// Name of the participant who paid
    pub payee_name: String,
    /// Amount paid, in whole rupees
    pub price: u64,
    /// Free-text description of the expense
    pub product: String,
    /// Date the expense was recorded
    pub set_date: NaiveDate,
}

/// Client-assembled item, before the store assigns an id
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftItem {
    /// Name of the participant who paid
    pub payee_name: String,
    /// Amount paid, in whole rupees
    pub price: u64,
    /// Free-text description of the expense
    pub product: String,
    /// Date the expense was recorded
    pub set_date: NaiveDate,
}

impl DraftItem {
    /// Assembles a draft from raw form input.
    ///
    /// The price goes through [`parse_price`], so malformed input becomes 0
    /// rather than an error. When no date is given, today's UTC date is used.
    #[must_use]
    pub fn from_form(
        payee_name: &str,
        price_input: &str,
        product: &str,
        set_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            payee_name: payee_name.to_string(),
            price: parse_price(price_input),
            product: product.to_string(),
            set_date: set_date.unwrap_or_else(|| Utc::now().date_naive()),
        }
    }

    /// Attaches a store-assigned id, producing the stored record.
    #[must_use]
    pub fn into_item(self, id: ItemId) -> Item {
        Item {
            id,
            payee_name: self.payee_name,
            price: self.price,
            product: self.product,
            set_date: self.set_date,
        }
    }
}

/// Parses a price the way a lenient leading-integer parser does.
///
/// Leading whitespace and an optional `+` are skipped, then the longest run of
/// ASCII digits is taken: `"12abc"` is 12 and `"12.7"` is 12. Input without a
/// leading digit, a negative sign, or a digit run that overflows `u64` all
/// yield 0.
#[must_use]
pub fn parse_price(input: &str) -> u64 {
    let trimmed = input.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..digits_end];

    match digits.parse::<u64>() {
        Ok(price) => price,
        Err(e) => {
            debug!("Price input {input:?} coerced to 0: {e}");
            0
        }
    }
}
