//! # Affinity
//!
//! A hybrid ranking engine for people matching. Candidate profiles are
//! ordered for a requester by fusing two signals:
//!
//! - a learned embedding-similarity signal (the recommendation score), via a
//!   two-tower encode-and-compare pipeline
//! - a multi-signal lexical score (zoned token overlap plus structured
//!   entity matching), weighted toward a profile's current role
//!
//! Query-adaptive weights decide the blend: short vague queries lean on the
//! embedding signal, entity-rich queries lean on the text signal.
//!
//! ## Features
//!
//! - Pure, stateless soft-match primitives (Gaussian decay, edit distance,
//!   time decay)
//! - Zone-weighted lexical scoring over profile text
//! - Pluggable embedding encoder behind a trait
//! - Async store/cache/interaction collaborators with explicit injection
//! - Recommendation caching and fire-and-forget interaction recording

pub mod embedding;
pub mod error;
pub mod features;
pub mod fusion;
pub mod lexical;
pub mod matching;
pub mod profile;
pub mod query;
pub mod recommend;
pub mod search;
pub mod storage;

pub use error::{AffinityError, Result};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
