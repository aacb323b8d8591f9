//! error taxonomy for split and sampling failures

use thiserror::Error;

/// Errors surfaced by split strategies, negative samplers and the stage
/// orchestrators. Hard failures all propagate to the caller; tolerated
/// data quality issues (bad edge list lines) are counted in
/// [crate::io::edgelist::LoadReport] instead and never reach this type.
#[derive(Debug, Error)]
pub enum Error {
    /// requested split strategy is not registered
    #[error("unknown split strategy: {name}. Chosen: {known:?}")]
    UnknownSplitStrategy { name: String, known: Vec<String> },
    /// requested negative sampler is not registered
    #[error("unknown sampler: {name}. Chosen: {known:?}")]
    UnknownSampler { name: String, known: Vec<String> },
    /// split ratio outside the open interval (0,1)
    #[error("split ratio must be in (0,1), got {0}")]
    InvalidRatio(f64),
    /// fewer than two nodes available for negative sampling
    #[error("not enough nodes for negative sampling, universe has {0}")]
    InsufficientNodes(usize),
    /// requested more negatives than the complement of the visible graph holds
    #[error("complement capacity exceeded: maximum {max}, requested {requested}")]
    CapacityExceeded { max: usize, requested: usize },
    /// rejection sampling ran out of attempts before collecting enough negatives
    #[error("failed to collect enough negative samples: {collected} of {requested} within {budget} rejected draws")]
    SamplingExhausted {
        budget: usize,
        collected: usize,
        requested: usize,
    },
    /// weighted distribution setup failed
    #[error("weighted sampling failed: {0}")]
    WeightedSampling(#[from] rand_distr::WeightedError),
    /// io failure while reading or writing an edge list
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
