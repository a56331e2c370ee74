use crate::crypto::{HashDomain, HashEncoder};
use crate::transaction::{Transaction, TransactionView};
use serde::Serialize;

/// Previous-hash sentinel carried by the genesis block.
pub const GENESIS_PREVIOUS_HASH: &str = "0";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub(crate) previous_hash: String,
    pub(crate) transactions: Vec<Transaction>,
    pub(crate) hash: String,
}

impl Block {
    /// Takes ownership of `transactions`; the block holds the only copy.
    pub fn new(previous_hash: impl Into<String>, transactions: Vec<Transaction>) -> Self {
        let previous_hash = previous_hash.into();
        let hash = Block::calculate_hash(&previous_hash, &transactions);
        Block {
            previous_hash,
            transactions,
            hash,
        }
    }

    pub fn genesis() -> Self {
        Block::new(GENESIS_PREVIOUS_HASH, Vec::new())
    }

    /// Hashes the previous hash and each transaction's triple in order.
    /// Stored transaction hashes are not part of the input.
    pub fn calculate_hash(previous_hash: &str, transactions: &[Transaction]) -> String {
        let mut enc = HashEncoder::new(HashDomain::Block);
        enc.text(previous_hash).count(transactions.len());
        for tx in transactions {
            enc.transfer(tx.sender(), tx.recipient(), tx.amount());
        }
        enc.finish_hex()
    }

    pub fn recompute_hash(&self) -> String {
        Block::calculate_hash(&self.previous_hash, &self.transactions)
    }

    pub fn previous_hash(&self) -> &str {
        &self.previous_hash
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    pub fn view(&self, index: usize) -> BlockView {
        BlockView {
            index,
            previous_hash: self.previous_hash.clone(),
            hash: self.hash.clone(),
            transactions: self.transactions.iter().map(Transaction::view).collect(),
        }
    }
}

/// Read-only snapshot of a block for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockView {
    pub index: usize,
    pub previous_hash: String,
    pub hash: String,
    pub transactions: Vec<TransactionView>,
}
