use serde::{Deserialize, Serialize};

/// A value transfer between two opaque identifiers.
///
/// Senders and receivers are free-form strings: there are no signatures,
/// balances or fees in this design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub sender: String,
    pub receiver: String,
    pub amount: f64,
}
