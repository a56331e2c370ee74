use crate::blockchain::core::block::Block;
use tracing::{debug, warn};

/// Walks the chain from index 1. Each block's stored hash must match the
/// recomputed one and its back-link must equal the predecessor's hash.
/// The genesis block is the fixed anchor and is only checked indirectly
/// through block 1's back-link.
pub fn validate_chain(blocks: &[Block]) -> bool {
    for (offset, pair) in blocks.windows(2).enumerate() {
        let (previous, block) = (&pair[0], &pair[1]);
        let height = offset + 1;

        if block.hash != block.recompute_hash() {
            debug!(height, stored = %block.hash, "block hash does not match its contents");
            warn!("chain validation failed");
            return false;
        }
        if block.previous_hash != previous.hash {
            debug!(height, previous_hash = %block.previous_hash, expected = %previous.hash, "broken back-link");
            warn!("chain validation failed");
            return false;
        }
    }
    debug!(blocks = blocks.len(), "chain validated");
    true
}
