use crate::blockchain::{Block, Blockchain, DEFAULT_DIFFICULTY};
use crate::network::PeerRegistry;
use crate::transaction::Transaction;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// Shared application state: one node's ledger (which owns the transaction
/// pool) and its peer registry.
pub struct AppState {
    pub blockchain: Mutex<Blockchain>,
    pub peers: Mutex<PeerRegistry>,
}

impl AppState {
    pub fn new(difficulty: u32) -> Self {
        Self {
            blockchain: Mutex::new(Blockchain::new(difficulty)),
            peers: Mutex::new(PeerRegistry::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_DIFFICULTY)
    }
}

/* ---------- Chain API Models ---------- */

#[derive(Serialize)]
pub struct ChainResponse<'a> {
    pub length: usize,
    pub difficulty: u32,
    pub chain: &'a [Block],
}

#[derive(Serialize)]
pub struct ValidateResponse {
    pub valid: bool,
    pub length: usize,
}

#[derive(Serialize)]
pub struct MineResponse {
    pub index: u64,
    pub timestamp: i64,
    pub proof: u64,
    pub previous_hash: String,
    pub transactions: Vec<Transaction>,
}

/* ---------- TX API Models ---------- */

#[derive(Deserialize)]
pub struct NewTxRequest {
    pub sender: String,
    pub receiver: String,
    pub amount: f64,
}

#[derive(Serialize)]
pub struct NewTxResponse {
    pub index: u64,
}

#[derive(Serialize)]
pub struct PendingResponse {
    pub size: usize,
    pub transactions: Vec<Transaction>,
}

/* ---------- Node API Models ---------- */

#[derive(Deserialize)]
pub struct ConnectNodesRequest {
    pub nodes: Vec<String>,
}

#[derive(Serialize)]
pub struct NodesResponse {
    pub count: usize,
    pub nodes: Vec<String>,
}

#[derive(Serialize)]
pub struct ResolveResponse {
    pub replaced: bool,
    pub length: usize,
    pub chain: Vec<Block>,
}

/* ---------- Stats API Models ---------- */

#[derive(Serialize)]
pub struct StatsResponse {
    pub height: usize,
    pub difficulty: u32,
    pub pending_transactions: usize,
    pub peers: usize,
    pub last_interval_secs: Option<i64>,
}
