use actix_web::{HttpResponse, Responder, get, post, web};
use log::info;

use super::models::{AppState, ChainResponse, MineResponse, ValidateResponse};

/// Get the full chain held by this node.
#[get("/chain/")]
pub async fn get_chain(state: web::Data<AppState>) -> impl Responder {
    let bc = state.blockchain.lock().expect("mutex poisoned");
    let resp = ChainResponse {
        length: bc.len(),
        difficulty: bc.difficulty(),
        chain: &bc.chain,
    };
    HttpResponse::Ok().json(resp)
}

/// Validate the local chain.
#[get("/validate/")]
pub async fn validate_chain(state: web::Data<AppState>) -> impl Responder {
    let bc = state.blockchain.lock().expect("mutex poisoned");
    HttpResponse::Ok().json(ValidateResponse {
        valid: bc.is_chain_valid(&bc.chain),
        length: bc.len(),
    })
}

/// Mine a new block: run the Proof-of-Work search against the last block,
/// seal the pending pool into a new block and append it.
///
/// The search blocks until it succeeds; there is no abort path.
#[post("/mine/")]
pub async fn mine_block(state: web::Data<AppState>) -> impl Responder {
    let block = {
        let mut bc = state.blockchain.lock().expect("mutex poisoned");
        bc.mine_block().clone()
    };

    info!(
        "MINER - sealed block #{} (proof={}, txs={})",
        block.index,
        block.proof,
        block.transactions.len()
    );

    HttpResponse::Ok().json(MineResponse {
        index: block.index,
        timestamp: block.timestamp,
        proof: block.proof,
        previous_hash: block.previous_hash,
        transactions: block.transactions,
    })
}
