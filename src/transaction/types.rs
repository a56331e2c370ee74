//! Transaction types for InvoiceChain
use crate::amount::Amount;
use crate::crypto::{HashDomain, HashEncoder};
use serde::Serialize;

/// A single transfer from a client to an invoice.
///
/// The hash is computed once in [`Transaction::new`] and never refreshed.
/// Fields are `pub(crate)` so nothing outside the crate can alter a stored
/// transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub(crate) sender: String,
    pub(crate) recipient: String,
    pub(crate) amount: Amount,
    pub(crate) hash: String,
}

impl Transaction {
    /// Builds a transaction and seals its hash. Performs no validation; see
    /// [`super::validate_submission`] for the form-level checks.
    pub fn new(sender: impl Into<String>, recipient: impl Into<String>, amount: Amount) -> Self {
        let sender = sender.into();
        let recipient = recipient.into();
        let hash = Self::calculate_hash(&sender, &recipient, amount);
        Transaction {
            sender,
            recipient,
            amount,
            hash,
        }
    }

    fn calculate_hash(sender: &str, recipient: &str, amount: Amount) -> String {
        let mut enc = HashEncoder::new(HashDomain::Transaction);
        enc.transfer(sender, recipient, amount);
        enc.finish_hex()
    }

    /// Re-derives the hash from the current field values.
    pub fn recompute_hash(&self) -> String {
        Self::calculate_hash(&self.sender, &self.recipient, self.amount)
    }

    pub fn sender(&self) -> &str {
        &self.sender
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    pub fn view(&self) -> TransactionView {
        TransactionView {
            sender: self.sender.clone(),
            recipient: self.recipient.clone(),
            amount: self.amount,
        }
    }
}

/// Owned, display-only copy of a transaction's fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionView {
    pub sender: String,
    pub recipient: String,
    pub amount: Amount,
}
