//! InvoiceChain - an append-only hash-chained ledger for invoice payments
//!
//! # Architecture
//!
//! ## Core Ledger
//! - [`blockchain`] - Blocks, the append-only chain, and integrity validation
//! - [`transaction`] - Transaction records and form-level submission checks
//! - [`amount`] - Fixed two-decimal money amounts
//!
//! ## Cryptography
//! - [`crypto`] - Versioned SHA-256 hash encoding shared by transactions and blocks
//!
//! ## Front End
//! - [`cli`] - Interactive invoice-tracker session driving one ledger
//! - [`display`] - Table and JSON rendering of ledger snapshots
//!
//! ## Configuration & Utilities
//! - [`config`] - Configuration management
//! - [`error`] - Error types

#![forbid(unsafe_code)]

// ============================================================================
// Core Ledger
// ============================================================================
pub mod amount;
pub mod blockchain;
pub mod transaction;

// ============================================================================
// Cryptography
// ============================================================================
pub mod crypto;

// ============================================================================
// Front End
// ============================================================================
pub mod cli;
pub mod display;

// ============================================================================
// Configuration & Utilities
// ============================================================================
pub mod config;
pub mod error;

pub use amount::Amount;
pub use blockchain::{Block, BlockView, Ledger, SharedLedger};
pub use error::{LedgerError, Result};
pub use transaction::{Transaction, TransactionView};
