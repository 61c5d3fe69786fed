use super::Transaction;
use crate::error::NodeError;

/// Transactions accepted since the last block was sealed, in submission
/// order.
#[derive(Debug, Default)]
pub struct TxPool {
    pending: Vec<Transaction>,
}

impl TxPool {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
        }
    }

    /// Accept a transaction into the pool.
    ///
    /// The HTTP layer already rejects JSON with missing keys; this re-checks
    /// what the type system cannot: blank identifiers and non-finite amounts.
    pub fn submit(&mut self, tx: Transaction) -> Result<(), NodeError> {
        if tx.sender.trim().is_empty() {
            return Err(NodeError::InvalidTransaction("sender must not be empty"));
        }
        if tx.receiver.trim().is_empty() {
            return Err(NodeError::InvalidTransaction("receiver must not be empty"));
        }
        if !tx.amount.is_finite() {
            return Err(NodeError::InvalidTransaction(
                "amount must be a finite number",
            ));
        }
        self.pending.push(tx);
        Ok(())
    }

    /// Take every pending transaction, leaving the pool empty.
    ///
    /// Called exactly once per block creation so no transaction is lost or
    /// duplicated across blocks.
    pub fn drain(&mut self) -> Vec<Transaction> {
        std::mem::take(&mut self.pending)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Read-only iterator over the pending list.
    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.pending.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::TxPool;
    use crate::transaction::Transaction;

    fn tx(sender: &str, receiver: &str, amount: f64) -> Transaction {
        Transaction {
            sender: sender.into(),
            receiver: receiver.into(),
            amount,
        }
    }

    #[test]
    fn keeps_submission_order() {
        let mut pool = TxPool::new();
        pool.submit(tx("alice", "bob", 1.0)).unwrap();
        pool.submit(tx("bob", "carol", 2.0)).unwrap();
        pool.submit(tx("carol", "alice", 3.0)).unwrap();

        let drained = pool.drain();
        assert_eq!(drained.len(), 3);
        assert_eq!(drained[0].sender, "alice");
        assert_eq!(drained[1].sender, "bob");
        assert_eq!(drained[2].sender, "carol");
    }

    #[test]
    fn drain_resets_the_pool() {
        let mut pool = TxPool::new();
        pool.submit(tx("alice", "bob", 1.0)).unwrap();
        assert_eq!(pool.len(), 1);

        pool.drain();
        assert!(pool.is_empty());
        assert!(pool.drain().is_empty());
    }

    #[test]
    fn rejects_blank_fields() {
        let mut pool = TxPool::new();
        assert!(pool.submit(tx("", "bob", 1.0)).is_err());
        assert!(pool.submit(tx("alice", "  ", 1.0)).is_err());
        assert!(pool.is_empty());
    }

    #[test]
    fn rejects_non_finite_amount() {
        let mut pool = TxPool::new();
        assert!(pool.submit(tx("alice", "bob", f64::NAN)).is_err());
        assert!(pool.submit(tx("alice", "bob", f64::INFINITY)).is_err());
        assert!(pool.is_empty());
    }
}
