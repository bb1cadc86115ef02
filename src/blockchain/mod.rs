pub mod assembler;
pub mod classifier;
pub mod fetcher;
pub mod paginator;
pub mod resolver;

pub use assembler::assemble;
pub use classifier::{ConnectionError, ErrorClassifier, ErrorKind};
pub use fetcher::BlockFetcher;
pub use resolver::PollPolicy;
