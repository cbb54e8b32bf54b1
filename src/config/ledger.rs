//! Ledger participants from the `[ledger]` table of config.toml.

use crate::{
    core::settlement::Participants,
    errors::{Error, Result},
};
use serde::Deserialize;

/// The two payees sharing the ledger
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LedgerConfig {
    /// Payee names; exactly two are accepted
    #[serde(default = "default_payees")]
    pub payees: Vec<String>,
    /// Payee named as debtor when both totals are equal (defaults to the second)
    #[serde(default)]
    pub tie_break: Option<String>,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            payees: default_payees(),
            tie_break: None,
        }
    }
}

fn default_payees() -> Vec<String> {
    vec!["Rahul".to_string(), "Ramesh".to_string()]
}

impl LedgerConfig {
    /// Builds the validated participant set.
    ///
    /// # Errors
    /// Returns `Error::Config` unless exactly two distinct, non-blank payees
    /// are configured, or if the tie-break payee is outside the set.
    pub fn participants(&self) -> Result<Participants> {
        let [first, second] = self.payees.as_slice() else {
            return Err(Error::Config {
                message: format!(
                    "Exactly two payees are required, got {}: {:?}",
                    self.payees.len(),
                    self.payees
                ),
            });
        };
        let participants = Participants::new(first.as_str(), second.as_str())?;
        match &self.tie_break {
            Some(payee) => participants.with_tie_break(payee),
            None => Ok(participants),
        }
    }
}
