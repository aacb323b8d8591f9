//! To ease access to most frequently used items
//!

pub use crate::error::{Error, Result};

pub use crate::graph::{build_edge_set, collect_nodes, get_degrees, Edge, EdgeSet, NodeId};

pub use crate::split::{RandomSplit, SplitRegistry, SplitStrategy};

pub use crate::sampling::{
    DegreeWeightedSampler, NegativeSampler, SampleRequest, SamplerRegistry,
    UniformRejectionSampler,
};

pub use crate::stages::{run_tp, run_tv, TpOutput, TpParams, TvOutput, TvParams};

pub use crate::io::edgelist::*;
