use std::collections::HashSet;

use log::warn;
use url::Url;

/// The set of known remote node locations (`host[:port]`).
#[derive(Debug, Clone, Default)]
pub struct PeerRegistry {
    nodes: HashSet<String>,
}

impl PeerRegistry {
    pub fn new() -> Self {
        Self {
            nodes: HashSet::new(),
        }
    }

    /// Register a peer by address, keeping only its network location.
    ///
    /// Idempotent; addresses are never resolved or probed. Input from which
    /// no host can be extracted is dropped with a warning.
    pub fn register(&mut self, address: &str) {
        match netloc(address) {
            Some(location) => {
                self.nodes.insert(location);
            }
            None => warn!("ignoring peer address with no network location: {address:?}"),
        }
    }

    /// Current membership, in no particular order.
    pub fn list(&self) -> Vec<String> {
        self.nodes.iter().cloned().collect()
    }

    pub fn contains(&self, location: &str) -> bool {
        self.nodes.contains(location)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Extract `host[:port]` from an address, tolerating a missing scheme.
///
/// `Url::parse` rejects scheme-less input (and parses `localhost:5000` as a
/// scheme with no host), so such addresses are retried with an `http://`
/// prefix.
fn netloc(address: &str) -> Option<String> {
    let trimmed = address.trim();
    let parsed = match Url::parse(trimmed) {
        Ok(url) if url.host_str().is_some() => url,
        _ => Url::parse(&format!("http://{trimmed}")).ok()?,
    };

    let host = parsed.host_str()?;
    Some(match parsed.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::PeerRegistry;

    #[test]
    fn keeps_only_the_network_location() {
        let mut peers = PeerRegistry::new();
        peers.register("http://127.0.0.1:5001/");
        assert!(peers.contains("127.0.0.1:5001"));
    }

    #[test]
    fn registration_is_idempotent() {
        let mut peers = PeerRegistry::new();
        peers.register("http://127.0.0.1:5001");
        peers.register("http://127.0.0.1:5001/");
        peers.register("127.0.0.1:5001");
        assert_eq!(peers.len(), 1);
    }

    #[test]
    fn accepts_scheme_less_addresses() {
        let mut peers = PeerRegistry::new();
        peers.register("localhost:5000");
        peers.register("192.168.0.7:5002");
        assert!(peers.contains("localhost:5000"));
        assert!(peers.contains("192.168.0.7:5002"));
    }

    #[test]
    fn distinct_ports_are_distinct_peers() {
        let mut peers = PeerRegistry::new();
        peers.register("http://node:5001");
        peers.register("http://node:5002");
        assert_eq!(peers.len(), 2);
    }

    #[test]
    fn hostless_input_is_dropped() {
        let mut peers = PeerRegistry::new();
        peers.register("");
        peers.register("%%%");
        assert!(peers.is_empty());
    }
}
