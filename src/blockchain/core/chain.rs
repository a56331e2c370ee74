use crate::blockchain::core::block::{Block, BlockView};
use crate::blockchain::core::validation::validate_chain;
use crate::transaction::Transaction;
use tracing::info;

/// Append-only chain of blocks, starting from the genesis block.
#[derive(Debug, Clone)]
pub struct Ledger {
    pub(crate) chain: Vec<Block>,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    pub fn new() -> Self {
        let genesis = Block::genesis();
        info!(hash = %genesis.hash(), "created ledger with genesis block");
        Ledger {
            chain: vec![genesis],
        }
    }

    /// Wraps `transactions` in a new block linked to the current tip and
    /// returns it. The chain always grows by exactly one block.
    pub fn append(&mut self, transactions: Vec<Transaction>) -> &Block {
        let previous_hash = self.last_block().hash().to_string();
        let block = Block::new(previous_hash, transactions);
        info!(
            height = self.chain.len(),
            hash = %block.hash(),
            transactions = block.transactions().len(),
            "appended block"
        );
        self.chain.push(block);
        &self.chain[self.chain.len() - 1]
    }

    /// True when every non-genesis block matches its own contents and links
    /// to its predecessor. Reports nothing about where a failure happened.
    pub fn is_valid(&self) -> bool {
        validate_chain(&self.chain)
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Never true: the genesis block is always present.
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    pub fn blocks(&self) -> &[Block] {
        &self.chain
    }

    pub fn genesis(&self) -> &Block {
        &self.chain[0]
    }

    pub fn last_block(&self) -> &Block {
        &self.chain[self.chain.len() - 1]
    }

    pub fn snapshot(&self) -> Vec<BlockView> {
        self.chain
            .iter()
            .enumerate()
            .map(|(index, block)| block.view(index))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amount::Amount;

    fn tx(sender: &str, recipient: &str, cents: u64) -> Transaction {
        Transaction::new(sender, recipient, Amount::from_cents(cents))
    }

    fn invoice_ledger() -> Ledger {
        let mut ledger = Ledger::new();
        ledger.append(vec![tx("Alice", "INV-1", 10_000)]);
        ledger.append(vec![tx("Bob", "INV-2", 5_000)]);
        ledger
    }

    #[test]
    fn test_new_ledger_has_only_genesis() {
        let ledger = Ledger::new();
        assert_eq!(ledger.len(), 1);
        assert!(!ledger.is_empty());
        assert_eq!(ledger.genesis().previous_hash(), "0");
        assert!(ledger.genesis().transactions().is_empty());
        assert!(ledger.is_valid());
    }

    #[test]
    fn test_genesis_is_not_reverified() {
        let mut ledger = Ledger::new();
        ledger.chain[0].previous_hash = "tampered".to_string();
        assert!(ledger.is_valid());

        let mut ledger = invoice_ledger();
        ledger.chain[0].hash = "0".repeat(64);
        assert!(!ledger.is_valid());
    }

    #[test]
    fn test_invoice_scenario() {
        let mut ledger = Ledger::new();
        ledger.append(vec![tx("Alice", "INV-1", 10_000)]);
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.chain[1].previous_hash(), ledger.chain[0].hash());

        ledger.append(vec![tx("Bob", "INV-2", 5_000)]);
        assert_eq!(ledger.len(), 3);
        assert!(ledger.is_valid());

        ledger.chain[1].transactions[0].amount = Amount::from_cents(99_900);
        assert!(!ledger.is_valid());
    }

    #[test]
    fn test_append_links_to_tip_and_returns_block() {
        let mut ledger = Ledger::new();
        let tip = ledger.last_block().hash().to_string();
        let appended = ledger.append(vec![tx("Carol", "INV-3", 1)]).clone();

        assert_eq!(appended.previous_hash(), tip);
        assert_eq!(ledger.last_block(), &appended);
    }

    #[test]
    fn test_valid_after_many_appends() {
        let mut ledger = Ledger::new();
        for i in 0..50u64 {
            ledger.append(vec![tx("Client", &format!("INV-{}", i), i + 1)]);
            assert!(ledger.is_valid());
        }
        assert_eq!(ledger.len(), 51);
    }

    #[test]
    fn test_multi_transaction_blocks_and_duplicates() {
        let mut ledger = Ledger::new();
        let pair = vec![tx("Alice", "INV-1", 100), tx("Alice", "INV-1", 100)];
        ledger.append(pair.clone());
        ledger.append(pair);
        assert_eq!(ledger.len(), 3);
        assert_eq!(ledger.chain[1].transactions().len(), 2);
        assert_ne!(ledger.chain[1].hash(), ledger.chain[2].hash());
        assert!(ledger.is_valid());
    }

    #[test]
    fn test_validation_is_idempotent() {
        let ledger = invoice_ledger();
        let before = ledger.snapshot();
        assert!(ledger.is_valid());
        assert!(ledger.is_valid());
        assert_eq!(ledger.snapshot(), before);
    }

    #[test]
    fn test_tampered_sender_detected() {
        let mut ledger = invoice_ledger();
        ledger.chain[2].transactions[0].sender = "Mallory".to_string();
        assert!(!ledger.is_valid());
    }

    #[test]
    fn test_tampered_recipient_detected() {
        let mut ledger = invoice_ledger();
        ledger.chain[1].transactions[0].recipient = "INV-666".to_string();
        assert!(!ledger.is_valid());
    }

    #[test]
    fn test_tampered_previous_hash_detected() {
        let mut ledger = invoice_ledger();
        ledger.chain[2].previous_hash = "f".repeat(64);
        assert!(!ledger.is_valid());
    }

    #[test]
    fn test_rehashed_block_still_breaks_successor_link() {
        let mut ledger = invoice_ledger();
        ledger.chain[1].transactions[0].amount = Amount::from_cents(99_900);
        ledger.chain[1].hash = ledger.chain[1].recompute_hash();
        assert!(!ledger.is_valid());
    }

    #[test]
    fn test_tampered_block_hash_detected() {
        let mut ledger = invoice_ledger();
        ledger.chain[2].hash = "0".repeat(64);
        assert!(!ledger.is_valid());
    }

    #[test]
    fn test_removed_transaction_detected() {
        let mut ledger = invoice_ledger();
        ledger.chain[1].transactions.clear();
        assert!(!ledger.is_valid());
    }

    #[test]
    fn test_stored_transaction_hash_not_part_of_block_hash() {
        let mut ledger = invoice_ledger();
        ledger.chain[1].transactions[0].hash = "0".repeat(64);
        assert!(ledger.is_valid());
    }

    #[test]
    fn test_snapshot_matches_chain() {
        let ledger = invoice_ledger();
        let snapshot = ledger.snapshot();
        assert_eq!(snapshot.len(), 3);
        assert_eq!(snapshot[0].previous_hash, "0");
        assert!(snapshot[0].transactions.is_empty());
        assert_eq!(snapshot[2].index, 2);
        assert_eq!(snapshot[2].previous_hash, snapshot[1].hash);
        assert_eq!(snapshot[1].transactions[0].sender, "Alice");
        assert_eq!(snapshot[1].transactions[0].amount.to_string(), "100.00");
    }
}
