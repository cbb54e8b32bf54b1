//! Settlement business logic - per-payee totals and the balancing transfer.
//!
//! The ledger is shared by exactly two participants. Every function here is a
//! pure, total function over the current item collection and is recomputed on
//! every read. Items whose payee is not one of the two participants are
//! excluded from every aggregate without raising an error.

use crate::{
    entities::Item,
    errors::{Error, Result},
};

/// The closed set of payees sharing the ledger, plus the tie-break payee.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Participants {
    first: String,
    second: String,
    tie_break_is_first: bool,
}

impl Participants {
    /// Creates the participant set. On a tie the second payee is named debtor.
    ///
    /// # Errors
    /// Returns `Error::Config` if either name is blank or both names are equal.
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Result<Self> {
        let first = first.into();
        let second = second.into();

        if first.trim().is_empty() || second.trim().is_empty() {
            return Err(Error::Config {
                message: "Payee names cannot be empty".to_string(),
            });
        }
        if first == second {
            return Err(Error::Config {
                message: format!("Payees must be distinct, got {first:?} twice"),
            });
        }

        Ok(Self {
            first,
            second,
            tie_break_is_first: false,
        })
    }

    /// Names `payee` as the debtor when both totals are equal.
    ///
    /// # Errors
    /// Returns `Error::Config` if `payee` is not one of the participants.
    pub fn with_tie_break(mut self, payee: &str) -> Result<Self> {
        if payee == self.first {
            self.tie_break_is_first = true;
        } else if payee == self.second {
            self.tie_break_is_first = false;
        } else {
            return Err(Error::Config {
                message: format!(
                    "Tie-break payee {payee:?} is not one of {:?} / {:?}",
                    self.first, self.second
                ),
            });
        }
        Ok(self)
    }

    /// First payee
    #[must_use]
    pub fn first(&self) -> &str {
        &self.first
    }

    /// Second payee
    #[must_use]
    pub fn second(&self) -> &str {
        &self.second
    }

    /// Payee named as debtor when totals are equal
    #[must_use]
    pub fn tie_break(&self) -> &str {
        if self.tie_break_is_first {
            &self.first
        } else {
            &self.second
        }
    }

    /// Whether `payee` is one of the two participants (exact match).
    #[must_use]
    pub fn contains(&self, payee: &str) -> bool {
        payee == self.first || payee == self.second
    }
}

impl Default for Participants {
    fn default() -> Self {
        Self {
            first: "Rahul".to_string(),
            second: "Ramesh".to_string(),
            tie_break_is_first: false,
        }
    }
}

/// The transfer that equalizes both payees' spend.
#[derive(Clone, Debug, PartialEq)]
pub struct Settlement {
    /// Amount the debtor has to transfer; half the difference of the totals
    pub payable: f64,
    /// Payee who paid less and has to transfer `payable`
    pub debtor: String,
}

impl Settlement {
    /// Footer text naming the debtor, e.g. `"Ramesh has to pay"`.
    #[must_use]
    pub fn message(&self) -> String {
        format!("{} has to pay", self.debtor)
    }
}

/// Sums the price of every item paid by `payee` (exact, case-sensitive match).
#[must_use]
pub fn total_for(items: &[Item], payee: &str) -> u64 {
    items
        .iter()
        .filter(|item| item.payee_name == payee)
        .fold(0, |acc, item| acc.saturating_add(item.price))
}

/// Sums both participants' totals. Items with an unknown payee are excluded.
#[must_use]
pub fn grand_total(items: &[Item], participants: &Participants) -> u64 {
    total_for(items, participants.first()).saturating_add(total_for(items, participants.second()))
}

/// Computes who owes whom: half the difference of the two totals, owed by the
/// payee who paid less. Equal totals name the tie-break payee with 0 payable.
#[must_use]
pub fn settle(items: &[Item], participants: &Participants) -> Settlement {
    let first_paid = total_for(items, participants.first());
    let second_paid = total_for(items, participants.second());

    let debtor = match first_paid.cmp(&second_paid) {
        std::cmp::Ordering::Less => participants.first(),
        std::cmp::Ordering::Greater => participants.second(),
        std::cmp::Ordering::Equal => participants.tie_break(),
    };

    // Halves of integer rupee amounts are exact in f64 for realistic totals.
    #[allow(clippy::cast_precision_loss)]
    let payable = first_paid.abs_diff(second_paid) as f64 / 2.0;

    Settlement {
        payable,
        debtor: debtor.to_string(),
    }
}
