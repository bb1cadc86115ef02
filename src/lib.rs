pub mod blockchain;
pub mod config;
pub mod error;
pub mod filters;
pub mod indexer;
pub mod metrics;
pub mod models;

pub use blockchain::{BlockFetcher, ConnectionError, ErrorClassifier, ErrorKind};
pub use config::Config;
pub use error::ApiError;
pub use filters::{matches_block, matches_transaction, BlockFilter, TransactionFilter};
pub use models::{Block, BlockHeader, Transaction, TxKind, TxPayload};
