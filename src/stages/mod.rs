//! stage orchestrators for the two pipeline stages
//!
//! The TP stage partitions the raw graph into train and test positives and
//! samples test negatives against the whole raw graph, so test negatives are
//! guaranteed absent from full graph knowledge.
//! The TV stage re-partitions the TP train positives into train (T) and
//! validation (V) positives; train negatives are sampled with only T visible
//! and validation negatives with T and V visible. Both stages draw from the
//! node universe of the raw graph so nodes isolated by splitting keep their
//! place in the universe.

use crate::error::Result;
use crate::graph::{collect_nodes, Edge};
use crate::sampling::{SampleRequest, SamplerRegistry};
use crate::split::SplitRegistry;

// sampler seed offsets relative to the stage split seed
const TP_SAMPLER_SEED_OFFSET: u64 = 100;
const TV_TRAIN_SAMPLER_SEED_OFFSET: u64 = 11;
const TV_VAL_SAMPLER_SEED_OFFSET: u64 = 22;

/// A structure describing the TP stage : raw graph to train/test positives
/// plus test negatives.
#[derive(Clone, Debug)]
pub struct TpParams {
    /// name of the split strategy to resolve
    split_strategy: String,
    /// name of the negative sampler to resolve
    sampler: String,
    /// fraction of edges held out as the test side
    test_ratio: f64,
    /// split seed; the sampler runs on a fixed offset of it
    seed: u64,
} // end of TpParams

impl TpParams {
    pub fn new(split_strategy: &str, sampler: &str, test_ratio: f64, seed: u64) -> Self {
        TpParams {
            split_strategy: split_strategy.to_string(),
            sampler: sampler.to_string(),
            test_ratio,
            seed,
        }
    }

    /// split strategy name
    pub fn get_split_strategy(&self) -> &str {
        &self.split_strategy
    }

    /// negative sampler name
    pub fn get_sampler(&self) -> &str {
        &self.sampler
    }

    /// fraction held out as test
    pub fn get_test_ratio(&self) -> f64 {
        self.test_ratio
    }

    //
    pub fn get_seed(&self) -> u64 {
        self.seed
    }
} // end of impl TpParams

/// A structure describing the TV stage : TP train positives to train (T) and
/// validation (V) positives plus both negative sets.
#[derive(Clone, Debug)]
pub struct TvParams {
    split_strategy: String,
    sampler: String,
    /// fraction of the TP train positives held out as the validation side
    val_ratio: f64,
    seed: u64,
} // end of TvParams

impl TvParams {
    pub fn new(split_strategy: &str, sampler: &str, val_ratio: f64, seed: u64) -> Self {
        TvParams {
            split_strategy: split_strategy.to_string(),
            sampler: sampler.to_string(),
            val_ratio,
            seed,
        }
    }

    pub fn get_split_strategy(&self) -> &str {
        &self.split_strategy
    }

    pub fn get_sampler(&self) -> &str {
        &self.sampler
    }

    /// fraction held out as validation
    pub fn get_val_ratio(&self) -> f64 {
        self.val_ratio
    }

    //
    pub fn get_seed(&self) -> u64 {
        self.seed
    }
} // end of impl TvParams

/// TP stage products. All collections hold canonical edges and are
/// consumed read only by the TV stage and by persistence.
#[derive(Clone, Debug)]
pub struct TpOutput {
    pub train_pos: Vec<Edge>,
    pub test_pos: Vec<Edge>,
    pub test_neg: Vec<Edge>,
}

/// TV stage products.
#[derive(Clone, Debug)]
pub struct TvOutput {
    pub t_pos: Vec<Edge>,
    pub train_neg: Vec<Edge>,
    pub v_pos: Vec<Edge>,
    pub val_neg: Vec<Edge>,
}

/// Runs the TP stage on the raw edge collection.
/// The visible set for test negative sampling is the entire raw collection
/// and the requested count is |test_pos|.
pub fn run_tp(
    edges: &[Edge],
    splits: &SplitRegistry,
    samplers: &SamplerRegistry,
    params: &TpParams,
) -> Result<TpOutput> {
    log::debug!("run_tp : {} edges, params {:?}", edges.len(), params);
    //
    let splitter = splits.get(params.get_split_strategy())?;
    let (train_pos, test_pos) = splitter.split(edges, params.get_test_ratio(), params.get_seed())?;
    log::info!(
        "TP split : {} train positives, {} test positives",
        train_pos.len(),
        test_pos.len()
    );
    //
    let nodes = collect_nodes(edges.iter());
    let sampler = samplers.get(params.get_sampler())?;
    let request = SampleRequest {
        visible: edges,
        nodes: Some(&nodes),
        count: test_pos.len(),
        seed: params.get_seed() + TP_SAMPLER_SEED_OFFSET,
    };
    let test_neg = sampler.sample(&request)?;
    //
    Ok(TpOutput {
        train_pos,
        test_pos,
        test_neg,
    })
} // end of run_tp

/// Runs the TV stage on the TP stage train positives. `raw_edges` is the
/// original full edge collection, used only to derive the node universe.
pub fn run_tv(
    train_pos: &[Edge],
    raw_edges: &[Edge],
    splits: &SplitRegistry,
    samplers: &SamplerRegistry,
    params: &TvParams,
) -> Result<TvOutput> {
    log::debug!("run_tv : {} train positives, params {:?}", train_pos.len(), params);
    //
    let splitter = splits.get(params.get_split_strategy())?;
    let (t_pos, v_pos) = splitter.split(train_pos, params.get_val_ratio(), params.get_seed())?;
    log::info!(
        "TV split : {} T positives, {} V positives",
        t_pos.len(),
        v_pos.len()
    );
    //
    let nodes = collect_nodes(raw_edges.iter());
    let sampler = samplers.get(params.get_sampler())?;
    // train negatives only know T
    let train_request = SampleRequest {
        visible: &t_pos,
        nodes: Some(&nodes),
        count: t_pos.len(),
        seed: params.get_seed() + TV_TRAIN_SAMPLER_SEED_OFFSET,
    };
    let train_neg = sampler.sample(&train_request)?;
    // validation negatives know T and V
    let tv_visible: Vec<Edge> = t_pos.iter().chain(v_pos.iter()).copied().collect();
    let val_request = SampleRequest {
        visible: &tv_visible,
        nodes: Some(&nodes),
        count: v_pos.len(),
        seed: params.get_seed() + TV_VAL_SAMPLER_SEED_OFFSET,
    };
    let val_neg = sampler.sample(&val_request)?;
    //
    Ok(TvOutput {
        t_pos,
        train_neg,
        v_pos,
        val_neg,
    })
} // end of run_tv

//================================================================================================================

// end of mod tests
