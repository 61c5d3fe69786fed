use actix_web::{HttpResponse, Responder, get, post, web};
use log::{info, warn};

use super::models::{AppState, NewTxRequest, NewTxResponse, PendingResponse};

/// Submit a transaction for inclusion in the next mined block.
///
/// Responds 201 with the index of the block that will hold it.
#[post("/tx/")]
pub async fn post_transaction(
    state: web::Data<AppState>,
    body: web::Json<NewTxRequest>,
) -> impl Responder {
    let req = body.into_inner();

    let mut bc = state.blockchain.lock().expect("mutex poisoned");
    match bc.add_transaction(req.sender, req.receiver, req.amount) {
        Ok(index) => {
            info!("TX - queued for block {index} (pool size {})", bc.pool.len());
            HttpResponse::Created().json(NewTxResponse { index })
        }
        Err(err) => {
            warn!("TX - rejected: {err}");
            HttpResponse::BadRequest().body(err.to_string())
        }
    }
}

/// List transactions waiting for the next block.
#[get("/tx/pending/")]
pub async fn get_pending(state: web::Data<AppState>) -> impl Responder {
    let bc = state.blockchain.lock().expect("mutex poisoned");
    let transactions = bc.pool.iter().cloned().collect::<Vec<_>>();
    HttpResponse::Ok().json(PendingResponse {
        size: transactions.len(),
        transactions,
    })
}
