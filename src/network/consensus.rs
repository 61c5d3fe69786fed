use log::{debug, info};
use serde::Deserialize;

use crate::blockchain::{Block, Blockchain};
use crate::error::NodeError;

use super::PeerRegistry;

/// A peer's chain as reported by its chain endpoint.
///
/// Extra response fields (e.g. the peer's difficulty) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct PeerChain {
    pub length: usize,
    pub chain: Vec<Block>,
}

/// Capability to fetch a remote node's chain.
///
/// Injected into [`resolve`] so consensus can be exercised against fake
/// peers in tests.
pub trait ChainSource {
    fn fetch_chain(&self, peer: &str) -> Result<PeerChain, NodeError>;
}

/// Longest-valid-chain consensus.
///
/// Scans every registered peer; a candidate replaces the local chain only
/// if it is strictly longer than the best seen so far and passes
/// validation. Unreachable peers and invalid chains are skipped for the
/// round, without retry. Equal-length chains are never adopted.
///
/// Returns whether the local chain was replaced.
pub fn resolve(bc: &mut Blockchain, peers: &PeerRegistry, source: &dyn ChainSource) -> bool {
    let mut best_length = bc.len();
    let mut best_chain: Option<Vec<Block>> = None;

    for peer in peers.list() {
        let fetched = match source.fetch_chain(&peer) {
            Ok(fetched) => fetched,
            Err(err) => {
                debug!("CONSENSUS - skipping peer {peer}: {err}");
                continue;
            }
        };

        if fetched.length <= best_length {
            debug!(
                "CONSENSUS - peer {peer} chain is not longer ({} <= {best_length})",
                fetched.length
            );
            continue;
        }
        if !bc.is_chain_valid(&fetched.chain) {
            debug!("CONSENSUS - peer {peer} chain failed validation");
            continue;
        }

        best_length = fetched.length;
        best_chain = Some(fetched.chain);
    }

    match best_chain {
        Some(chain) => {
            info!("CONSENSUS - adopting peer chain of length {best_length}");
            bc.replace_chain(chain);
            true
        }
        None => false,
    }
}
