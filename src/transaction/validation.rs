use crate::amount::Amount;
use crate::error::LedgerError;
use crate::transaction::Transaction;

/// Checks the invoice form fields and builds the transaction.
///
/// Sender and recipient must be non-empty and the amount strictly positive.
pub fn validate_submission(
    sender: &str,
    recipient: &str,
    amount: Amount,
) -> Result<Transaction, LedgerError> {
    if sender.is_empty() {
        return Err(LedgerError::InvalidInput("sender must not be empty".to_string()));
    }
    if recipient.is_empty() {
        return Err(LedgerError::InvalidInput("recipient must not be empty".to_string()));
    }
    if amount.is_zero() {
        return Err(LedgerError::InvalidInput(
            "amount must be greater than zero".to_string(),
        ));
    }
    Ok(Transaction::new(sender, recipient, amount))
}

/// Same as [`validate_submission`] but takes the amount as entered text.
pub fn parse_submission(
    sender: &str,
    recipient: &str,
    amount: &str,
) -> Result<Transaction, LedgerError> {
    let amount: Amount = amount.parse()?;
    validate_submission(sender, recipient, amount)
}
