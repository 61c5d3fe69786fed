use std::time::Duration;

use reqwest::blocking::Client;

use crate::error::NodeError;

use super::consensus::{ChainSource, PeerChain};

/// Per-peer timeout for chain fetches, so one unresponsive peer cannot
/// stall a whole resolution round.
pub const PEER_FETCH_TIMEOUT_SECS: u64 = 5;

/// Fetches peer chains over HTTP.
pub struct HttpChainSource {
    client: Client,
}

impl HttpChainSource {
    pub fn new() -> Result<Self, NodeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(PEER_FETCH_TIMEOUT_SECS))
            .build()
            .map_err(|err| NodeError::PeerFetch(err.to_string()))?;
        Ok(Self { client })
    }
}

impl ChainSource for HttpChainSource {
    fn fetch_chain(&self, peer: &str) -> Result<PeerChain, NodeError> {
        let url = format!("http://{peer}/api/v1/chain/");
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|err| NodeError::PeerFetch(err.to_string()))?;

        if !response.status().is_success() {
            return Err(NodeError::PeerFetch(format!(
                "peer {peer} answered {}",
                response.status()
            )));
        }

        response
            .json::<PeerChain>()
            .map_err(|err| NodeError::PeerFetch(err.to_string()))
    }
}
