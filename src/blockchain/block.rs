use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::transaction::Transaction;

use super::{GENESIS_PREVIOUS_HASH, GENESIS_PROOF};

/// A single block in the ledger holding a snapshot of pooled transactions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    pub index: u64,
    pub timestamp: i64, // Unix timestamp (UTC), informational only
    pub proof: u64,
    pub previous_hash: String,
    pub transactions: Vec<Transaction>,
}

impl Block {
    /// Create the genesis block (first block in the chain).
    pub fn genesis() -> Self {
        Self {
            index: 1,
            timestamp: Utc::now().timestamp(),
            proof: GENESIS_PROOF,
            previous_hash: GENESIS_PREVIOUS_HASH.to_string(),
            transactions: Vec::new(),
        }
    }

    /// Compute the canonical SHA-256 hash of this block.
    ///
    /// The block is serialized through `serde_json::Value`, whose object
    /// keys come out in sorted order, so every node hashes byte-identical
    /// input for the same logical block.
    pub fn hash(&self) -> String {
        let canonical = serde_json::to_value(self).expect("block serializes to JSON");
        let mut hasher = Sha256::new();
        hasher.update(canonical.to_string().as_bytes());
        hex::encode(hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::{Block, GENESIS_PREVIOUS_HASH, GENESIS_PROOF};
    use crate::transaction::Transaction;

    fn sample_block() -> Block {
        Block {
            index: 2,
            timestamp: 1_700_000_000,
            proof: 533,
            previous_hash: "abc123".into(),
            transactions: vec![Transaction {
                sender: "alice".into(),
                receiver: "bob".into(),
                amount: 2.5,
            }],
        }
    }

    #[test]
    fn genesis_carries_the_fixed_seed() {
        let genesis = Block::genesis();
        assert_eq!(genesis.index, 1);
        assert_eq!(genesis.proof, GENESIS_PROOF);
        assert_eq!(genesis.previous_hash, GENESIS_PREVIOUS_HASH);
        assert!(genesis.transactions.is_empty());
    }

    #[test]
    fn hashing_is_deterministic() {
        let block = sample_block();
        let digest = block.hash();
        assert_eq!(digest, block.hash());
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_uppercase()));
    }

    #[test]
    fn structurally_equal_blocks_hash_identically() {
        assert_eq!(sample_block().hash(), sample_block().hash());
    }

    #[test]
    fn any_field_change_changes_the_hash() {
        let block = sample_block();

        let mut tampered = block.clone();
        tampered.proof += 1;
        assert_ne!(block.hash(), tampered.hash());

        let mut tampered = block.clone();
        tampered.previous_hash.push('0');
        assert_ne!(block.hash(), tampered.hash());

        let mut tampered = block.clone();
        tampered.transactions[0].amount += 1.0;
        assert_ne!(block.hash(), tampered.hash());
    }
}
