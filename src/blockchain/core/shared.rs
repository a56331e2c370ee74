//! Lock-guarded ledger handle for callers that share one ledger across
//! threads. The plain [`Ledger`] needs none of this.

use crate::blockchain::core::block::{Block, BlockView};
use crate::blockchain::core::chain::Ledger;
use crate::transaction::Transaction;
use parking_lot::RwLock;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct SharedLedger {
    inner: Arc<RwLock<Ledger>>,
}

impl SharedLedger {
    pub fn new() -> Self {
        Self::from_ledger(Ledger::new())
    }

    pub fn from_ledger(ledger: Ledger) -> Self {
        SharedLedger {
            inner: Arc::new(RwLock::new(ledger)),
        }
    }

    /// Reading the tip and pushing the new block happen under one write lock.
    /// Returns a copy of the appended block.
    pub fn append(&self, transactions: Vec<Transaction>) -> Block {
        self.inner.write().append(transactions).clone()
    }

    pub fn is_valid(&self) -> bool {
        self.inner.read().is_valid()
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    pub fn snapshot(&self) -> Vec<BlockView> {
        self.inner.read().snapshot()
    }

    /// Runs `f` against the ledger under the read lock.
    pub fn with_ledger<R>(&self, f: impl FnOnce(&Ledger) -> R) -> R {
        f(&self.inner.read())
    }
}
