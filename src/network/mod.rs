pub mod consensus;
pub mod http;
pub mod peers;

pub use consensus::{ChainSource, PeerChain};
pub use http::HttpChainSource;
pub use peers::PeerRegistry;
