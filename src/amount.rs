//! Fixed-precision money amounts.
//!
//! Amounts are stored as integer minor units (cents) so that the text
//! rendering fed into the hash is exact and identical on every platform.

use crate::error::LedgerError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Number of fractional digits carried by every amount.
pub const AMOUNT_DECIMALS: usize = 2;

const CENTS_PER_UNIT: u64 = 100;

/// A non-negative decimal amount with two fractional digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(u64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    #[inline]
    pub const fn from_cents(cents: u64) -> Self {
        Amount(cents)
    }

    #[inline]
    pub const fn cents(&self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}.{:02}",
            self.0 / CENTS_PER_UNIT,
            self.0 % CENTS_PER_UNIT
        )
    }
}

impl FromStr for Amount {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.is_empty() {
            return Err(LedgerError::InvalidInput("amount must not be empty".to_string()));
        }
        if text.starts_with('-') {
            return Err(LedgerError::InvalidInput(format!(
                "amount must not be negative, got {}",
                text
            )));
        }
        let text = text.strip_prefix('+').unwrap_or(text);

        let (whole, fraction) = match text.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (text, ""),
        };

        if whole.is_empty() && fraction.is_empty() {
            return Err(LedgerError::InvalidInput(format!("invalid amount: {}", s.trim())));
        }
        if !whole.chars().all(|c| c.is_ascii_digit()) || !fraction.chars().all(|c| c.is_ascii_digit()) {
            return Err(LedgerError::InvalidInput(format!("invalid amount: {}", s.trim())));
        }
        if fraction.len() > AMOUNT_DECIMALS {
            return Err(LedgerError::InvalidInput(format!(
                "amount has more than {} decimal places: {}",
                AMOUNT_DECIMALS,
                s.trim()
            )));
        }

        let overflow = || LedgerError::InvalidInput(format!("amount too large: {}", s.trim()));

        let units: u64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| overflow())?
        };
        let mut cents: u64 = if fraction.is_empty() {
            0
        } else {
            fraction.parse().map_err(|_| overflow())?
        };
        if fraction.len() == 1 {
            cents *= 10;
        }

        units
            .checked_mul(CENTS_PER_UNIT)
            .and_then(|c| c.checked_add(cents))
            .map(Amount)
            .ok_or_else(overflow)
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
