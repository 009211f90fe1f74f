pub mod aggregator;
pub mod backend;
pub mod dedup;
pub mod digest;
pub mod ops;
pub mod ranker;
pub mod source;
pub mod types;
pub mod utils;

pub use aggregator::{aggregate, FanoutReport};
pub use backend::{BackendClient, BackendConfig};
pub use dedup::dedupe;
pub use digest::{annotate, extract_digest, DigestStory};
pub use ops::{DigestOutcome, NewsOps, SearchOutcome};
pub use source::FeedSource;
pub use types::*;
