use actix_web::{HttpResponse, Responder, get, post, web};
use log::{info, warn};

use super::models::{AppState, ConnectNodesRequest, NodesResponse, ResolveResponse};
use crate::error::NodeError;
use crate::network::{HttpChainSource, consensus};

/// Register a batch of peer addresses.
#[post("/nodes/")]
pub async fn connect_nodes(
    state: web::Data<AppState>,
    body: web::Json<ConnectNodesRequest>,
) -> impl Responder {
    if body.nodes.is_empty() {
        return HttpResponse::BadRequest().body("nodes list must not be empty");
    }

    let mut peers = state.peers.lock().expect("mutex poisoned");
    for address in &body.nodes {
        peers.register(address);
    }

    let nodes = peers.list();
    info!("PEERS - registry now holds {} node(s)", nodes.len());
    HttpResponse::Created().json(NodesResponse {
        count: nodes.len(),
        nodes,
    })
}

/// List known peers.
#[get("/nodes/")]
pub async fn get_nodes(state: web::Data<AppState>) -> impl Responder {
    let peers = state.peers.lock().expect("mutex poisoned");
    let nodes = peers.list();
    HttpResponse::Ok().json(NodesResponse {
        count: nodes.len(),
        nodes,
    })
}

/// Run longest-chain consensus against every registered peer, replacing
/// the local chain if a strictly longer valid one is found.
///
/// Peer fetches are blocking network I/O, so the whole round runs on the
/// blocking pool while holding the ledger lock.
#[post("/nodes/resolve/")]
pub async fn resolve_consensus(state: web::Data<AppState>) -> impl Responder {
    let state = state.clone();
    let outcome = web::block(move || {
        let source = HttpChainSource::new()?;
        let peers = state.peers.lock().expect("mutex poisoned").clone();

        let mut bc = state.blockchain.lock().expect("mutex poisoned");
        let replaced = consensus::resolve(&mut bc, &peers, &source);
        Ok::<_, NodeError>(ResolveResponse {
            replaced,
            length: bc.len(),
            chain: bc.chain.clone(),
        })
    })
    .await;

    match outcome {
        Ok(Ok(resp)) => {
            if resp.replaced {
                info!("CONSENSUS - local chain replaced (length {})", resp.length);
            }
            HttpResponse::Ok().json(resp)
        }
        Ok(Err(err)) => {
            warn!("CONSENSUS - round failed: {err}");
            HttpResponse::InternalServerError().body(err.to_string())
        }
        Err(err) => {
            warn!("CONSENSUS - blocking pool failure: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
