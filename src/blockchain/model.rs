use chrono::Utc;
use log::debug;

use crate::error::NodeError;
use crate::transaction::{Transaction, TxPool};

use super::Block;
use super::pow::{self, meets_difficulty, pow_hash};

/// In-memory ledger: the block sequence plus the pool of transactions
/// awaiting the next block.
#[derive(Debug)]
pub struct Blockchain {
    pub chain: Vec<Block>,
    pub pool: TxPool,
    difficulty: u32,
}

impl Blockchain {
    /// Initialize a new ledger with a genesis block.
    pub fn new(difficulty: u32) -> Self {
        let mut bc = Self {
            chain: Vec::new(),
            pool: TxPool::new(),
            difficulty,
        };
        bc.chain.push(Block::genesis());
        bc
    }

    /// Return the most recently appended block.
    pub fn last_block(&self) -> &Block {
        self.chain
            .last()
            .expect("chain always holds at least the genesis block")
    }

    /// Append a block carrying the given proof and previous hash, sealing
    /// the current transaction pool into it.
    ///
    /// No validation happens here: the mining flow derives `proof` and
    /// `previous_hash`, and this is a pure append.
    pub fn create_block(&mut self, proof: u64, previous_hash: String) -> &Block {
        let block = Block {
            index: self.chain.len() as u64 + 1,
            timestamp: Utc::now().timestamp(),
            proof,
            previous_hash,
            transactions: self.pool.drain(),
        };
        self.chain.push(block);
        self.last_block()
    }

    /// Run the Proof-of-Work search against the last block and seal the
    /// pool into a new block.
    ///
    /// Blocks until the search succeeds; there is no abort path.
    pub fn mine_block(&mut self) -> &Block {
        let previous = self.last_block();
        let previous_proof = previous.proof;
        let previous_hash = previous.hash();

        let proof = pow::find_proof(previous_proof, self.difficulty);
        self.create_block(proof, previous_hash)
    }

    /// Queue a transaction for the next block; returns the index of the
    /// block that will contain it.
    pub fn add_transaction(
        &mut self,
        sender: String,
        receiver: String,
        amount: f64,
    ) -> Result<u64, NodeError> {
        self.pool.submit(Transaction {
            sender,
            receiver,
            amount,
        })?;
        Ok(self.chain.len() as u64 + 1)
    }

    /// Check linkage and Proof-of-Work over an arbitrary chain.
    ///
    /// Works on peer-supplied chains as well as the local one. Chains with
    /// fewer than two blocks are vacuously valid; the genesis proof is a
    /// seed, not mined, so validation starts at the second block.
    pub fn is_chain_valid(&self, chain: &[Block]) -> bool {
        for pair in chain.windows(2) {
            let (previous, current) = (&pair[0], &pair[1]);

            if current.previous_hash != previous.hash() {
                debug!("chain invalid: block {} linkage mismatch", current.index);
                return false;
            }

            if !meets_difficulty(&pow_hash(current.proof, previous.proof), self.difficulty) {
                debug!("chain invalid: block {} proof fails difficulty", current.index);
                return false;
            }
        }
        true
    }

    /// Adopt a replacement chain wholesale. Consensus resolution is the
    /// only caller.
    pub fn replace_chain(&mut self, chain: Vec<Block>) {
        self.chain = chain;
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn difficulty(&self) -> u32 {
        self.difficulty
    }
}
