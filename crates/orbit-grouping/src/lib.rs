//! ORBIT Tab Grouping
//!
//! Deterministic clustering of open tabs into named groups. The engine is a
//! pure function of its inputs: the shell supplies tab descriptors and
//! precomputed title embeddings, the engine returns groups. It never
//! touches the browser, the network, or disk.

mod classify;
mod domain;
mod engine;
mod error;
mod graph;
mod group;
mod hybrid;
mod naming;
mod semantic;
mod session;
mod similarity;
mod validate;

pub use classify::{classify, ContentType};
pub use engine::{cluster, cluster_with_fallback, Strategy};
pub use error::{GroupingError, GroupingFailure};
pub use group::{ClusteredOutput, DomainBuckets, Group, GroupKind, GroupingOutput};
pub use hybrid::Anchor;
pub use similarity::cosine_similarity;
pub use validate::GroupDebug;

pub type Result<T> = std::result::Result<T, GroupingFailure>;
