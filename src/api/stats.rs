use actix_web::{HttpResponse, Responder, get, web};

use super::models::{AppState, StatsResponse};

/// Node-level counters: chain height, difficulty, pool and peer sizes.
#[get("/stats/")]
pub async fn get_stats(state: web::Data<AppState>) -> impl Responder {
    let (height, difficulty, pending, last_interval) = {
        let bc = state.blockchain.lock().expect("mutex poisoned");
        let height = bc.len();

        // Seconds between the two most recent blocks, if there are two.
        let last_interval_secs = if height >= 2 {
            let newer = &bc.chain[height - 1];
            let older = &bc.chain[height - 2];
            Some((newer.timestamp - older.timestamp).max(0))
        } else {
            None
        };

        (height, bc.difficulty(), bc.pool.len(), last_interval_secs)
    };

    let peers = {
        let peers = state.peers.lock().expect("mutex poisoned");
        peers.len()
    };

    HttpResponse::Ok().json(StatsResponse {
        height,
        difficulty,
        pending_transactions: pending,
        peers,
        last_interval_secs: last_interval,
    })
}
