//! split strategies : partition an edge collection into retained and held out parts
//!
//! A strategy is resolved by name through an explicit [SplitRegistry] value
//! passed to the stage orchestrators, so nothing depends on process wide
//! registration order. The same registry serves the TP stage (train/test)
//! and the TV stage (train/validation); only the collection it is applied
//! to differs.

use indexmap::IndexMap;

use rand::seq::SliceRandom;
use rand_xoshiro::rand_core::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::error::{Error, Result};
use crate::graph::Edge;

/// A split strategy partitions an edge collection into a (retained, held_out)
/// pair driven by a ratio and a seed. The two sides are disjoint and their
/// union is exactly the input. held_out is the test side at the TP stage and
/// the validation side at the TV stage.
pub trait SplitStrategy {
    fn split(&self, edges: &[Edge], ratio: f64, seed: u64) -> Result<(Vec<Edge>, Vec<Edge>)>;
}

/// Seeded random split.
///
/// Shuffles a copy of the input with a Xoshiro256PlusPlus generator seeded
/// from `seed`, then takes the first max(1, round(m * ratio)) edges as the
/// held out side and the remainder as the retained side. The held out count
/// rounds with [f64::round], half away from zero, which for these positive
/// values is round half up. Identical input and seed give bit identical
/// partitions on every run.
pub struct RandomSplit;

impl SplitStrategy for RandomSplit {
    fn split(&self, edges: &[Edge], ratio: f64, seed: u64) -> Result<(Vec<Edge>, Vec<Edge>)> {
        if !(ratio > 0. && ratio < 1.) {
            log::error!("RandomSplit got ratio {} outside (0,1)", ratio);
            return Err(Error::InvalidRatio(ratio));
        }
        //
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        let mut arr = edges.to_vec();
        arr.shuffle(&mut rng);
        let m = arr.len();
        let m_held = std::cmp::max(1, (m as f64 * ratio).round() as usize).min(m);
        log::debug!("RandomSplit : {} edges, holding out {}", m, m_held);
        // arr keeps the held out prefix, the tail is retained
        let retained = arr.split_off(m_held);
        Ok((retained, arr))
    }
} // end of impl SplitStrategy for RandomSplit

/// Name indexed table of split strategies.
pub struct SplitRegistry {
    strategies: IndexMap<String, Box<dyn SplitStrategy>>,
}

impl SplitRegistry {
    /// an empty registry
    pub fn new() -> Self {
        SplitRegistry {
            strategies: IndexMap::new(),
        }
    }

    /// a registry with the built in strategies registered : "random"
    pub fn with_defaults() -> Self {
        let mut registry = SplitRegistry::new();
        registry.register("random", Box::new(RandomSplit));
        registry
    }

    /// registers a strategy under a name, replacing any previous holder of that name
    pub fn register(&mut self, name: &str, strategy: Box<dyn SplitStrategy>) {
        self.strategies.insert(name.to_string(), strategy);
    }

    /// resolves a strategy by name
    pub fn get(&self, name: &str) -> Result<&dyn SplitStrategy> {
        self.strategies
            .get(name)
            .map(|s| s.as_ref())
            .ok_or_else(|| Error::UnknownSplitStrategy {
                name: name.to_string(),
                known: self.names(),
            })
    }

    /// registered names in registration order
    pub fn names(&self) -> Vec<String> {
        self.strategies.keys().cloned().collect()
    }
} // end of impl SplitRegistry

impl Default for SplitRegistry {
    fn default() -> Self {
        SplitRegistry::with_defaults()
    }
}

//================================================================================================================

#[cfg(test)]
mod tests {

    use super::*;
    use crate::graph::EdgeSet;

    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    // a path graph 0-1-2-...-m
    fn path_edges(m: usize) -> Vec<Edge> {
        (0..m).map(|i| Edge(i as i64, i as i64 + 1)).collect()
    }

    #[test]
    fn test_random_split_partition() {
        log_init_test();
        //
        let edges = path_edges(10);
        let splitter = RandomSplit;
        let (retained, held) = splitter.split(&edges, 0.3, 7).unwrap();
        assert_eq!(held.len(), 3);
        assert_eq!(retained.len(), 7);
        // disjoint and union equal to input
        let retained_set: EdgeSet = retained.iter().copied().collect();
        let held_set: EdgeSet = held.iter().copied().collect();
        assert!(retained_set.intersection(&held_set).next().is_none());
        let mut union: Vec<Edge> = retained_set.union(&held_set).copied().collect();
        union.sort();
        let mut input = edges.clone();
        input.sort();
        assert_eq!(union, input);
    } // end of test_random_split_partition

    #[test]
    fn test_random_split_deterministic() {
        log_init_test();
        //
        let edges = path_edges(100);
        let splitter = RandomSplit;
        let (retained_1, held_1) = splitter.split(&edges, 0.3, 42).unwrap();
        let (retained_2, held_2) = splitter.split(&edges, 0.3, 42).unwrap();
        assert_eq!(retained_1, retained_2);
        assert_eq!(held_1, held_2);
        // another seed moves the split boundary elsewhere
        let (_, held_3) = splitter.split(&edges, 0.3, 43).unwrap();
        let held_1_set: EdgeSet = held_1.iter().copied().collect();
        let held_3_set: EdgeSet = held_3.iter().copied().collect();
        assert_ne!(held_1_set, held_3_set);
    } // end of test_random_split_deterministic

    #[test]
    fn test_random_split_holds_at_least_one() {
        log_init_test();
        //
        let edges = path_edges(5);
        let (retained, held) = RandomSplit.split(&edges, 0.01, 1).unwrap();
        assert_eq!(held.len(), 1);
        assert_eq!(retained.len(), 4);
    } // end of test_random_split_holds_at_least_one

    #[test]
    fn test_invalid_ratio() {
        log_init_test();
        //
        let edges = path_edges(5);
        for ratio in [0., 1., -0.2, 1.5] {
            let res = RandomSplit.split(&edges, ratio, 1);
            assert!(matches!(res, Err(Error::InvalidRatio(_))));
        }
    } // end of test_invalid_ratio

    #[test]
    fn test_unknown_strategy() {
        log_init_test();
        //
        let registry = SplitRegistry::with_defaults();
        assert!(registry.get("random").is_ok());
        let res = registry.get("stratified");
        match res {
            Err(Error::UnknownSplitStrategy { name, known }) => {
                assert_eq!(name, "stratified");
                assert_eq!(known, vec!["random".to_string()]);
            }
            _ => panic!("expected UnknownSplitStrategy"),
        }
    } // end of test_unknown_strategy
} // end of mod tests
