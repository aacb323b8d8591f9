//! uniform rejection sampling of non edges

use indexmap::IndexSet;

use rand::distributions::{Distribution, Uniform};
use rand_xoshiro::rand_core::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::error::{Error, Result};
use crate::graph::Edge;
use crate::sampling::{resolve_universe, NegativeSampler, SampleRequest};

/// Uniform negative sampling over the complement of the visible graph.
///
/// Node index pairs are drawn uniformly from the universe with a
/// Xoshiro256PlusPlus generator seeded from the request. A draw is rejected
/// when it is a self pair, a visible positive edge, or an already accepted
/// negative; rejections count against a budget of max(10000, 50 * requested)
/// and exhausting the budget is an error (the visible graph is too dense for
/// the request). On success exactly `requested` pairwise distinct edges are
/// returned in acceptance order.
pub struct UniformRejectionSampler;

impl NegativeSampler for UniformRejectionSampler {
    fn sample(&self, request: &SampleRequest) -> Result<Vec<Edge>> {
        let (pos_set, nodes) = resolve_universe(request);
        let n = nodes.len();
        if n < 2 {
            log::error!("negative sampling needs at least 2 nodes, universe has {}", n);
            return Err(Error::InsufficientNodes(n));
        }
        // how many non edges the universe can provide at all
        let max_non_edges = (n * (n - 1) / 2).saturating_sub(pos_set.len());
        if request.count > max_non_edges {
            log::error!(
                "complement capacity exceeded : maximum {}, requested {}",
                max_non_edges,
                request.count
            );
            return Err(Error::CapacityExceeded {
                max: max_non_edges,
                requested: request.count,
            });
        }
        //
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(request.seed);
        let node_random = Uniform::from(0..n);
        let budget = std::cmp::max(10_000, 50 * request.count);
        let mut rejected: usize = 0;
        let mut negs = IndexSet::<Edge>::with_capacity(request.count);
        while negs.len() < request.count && rejected < budget {
            let i = node_random.sample(&mut rng);
            let j = node_random.sample(&mut rng);
            if i == j {
                rejected += 1;
                continue;
            }
            let (u, v) = (nodes[i], nodes[j]);
            let edge = if u < v { Edge(u, v) } else { Edge(v, u) };
            if pos_set.contains(&edge) {
                rejected += 1;
                continue;
            }
            if !negs.insert(edge) {
                // duplicate negative
                rejected += 1;
            }
        }
        if negs.len() < request.count {
            log::error!(
                "rejection sampling exhausted : collected {} of {} within {} rejected draws",
                negs.len(),
                request.count,
                budget
            );
            return Err(Error::SamplingExhausted {
                budget,
                collected: negs.len(),
                requested: request.count,
            });
        }
        Ok(negs.into_iter().collect())
    }
} // end of impl NegativeSampler for UniformRejectionSampler

//================================================================================================================

#[cfg(test)]
mod tests {

    use super::*;
    use crate::graph::EdgeSet;

    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_capacity_error() {
        log_init_test();
        // 3 nodes give 3 possible edges, 1 is positive, so at most 2 negatives
        let visible = vec![Edge(1, 2)];
        let nodes = vec![1, 2, 3];
        let request = SampleRequest {
            visible: &visible,
            nodes: Some(&nodes),
            count: 3,
            seed: 5,
        };
        let res = UniformRejectionSampler.sample(&request);
        match res {
            Err(Error::CapacityExceeded { max, requested }) => {
                assert_eq!(max, 2);
                assert_eq!(requested, 3);
            }
            _ => panic!("expected CapacityExceeded"),
        }
        // at capacity the request succeeds and returns the whole complement
        let request = SampleRequest {
            visible: &visible,
            nodes: Some(&nodes),
            count: 2,
            seed: 5,
        };
        let negs = UniformRejectionSampler.sample(&request).unwrap();
        let negs: EdgeSet = negs.into_iter().collect();
        assert_eq!(negs.len(), 2);
        assert!(negs.contains(&Edge(1, 3)));
        assert!(negs.contains(&Edge(2, 3)));
    } // end of test_capacity_error

    #[test]
    fn test_insufficient_nodes() {
        log_init_test();
        //
        let visible: Vec<Edge> = Vec::new();
        let nodes = vec![7];
        let request = SampleRequest {
            visible: &visible,
            nodes: Some(&nodes),
            count: 1,
            seed: 0,
        };
        assert!(matches!(
            UniformRejectionSampler.sample(&request),
            Err(Error::InsufficientNodes(1))
        ));
        // nothing to infer a universe from either
        let request = SampleRequest {
            visible: &visible,
            nodes: None,
            count: 1,
            seed: 0,
        };
        assert!(matches!(
            UniformRejectionSampler.sample(&request),
            Err(Error::InsufficientNodes(0))
        ));
    } // end of test_insufficient_nodes

    #[test]
    fn test_negatives_disjoint_from_visible() {
        log_init_test();
        // the 4 cycle : only (1,3) and (2,4) are non edges
        let visible = vec![Edge(1, 2), Edge(2, 3), Edge(3, 4), Edge(1, 4)];
        let nodes = vec![1, 2, 3, 4];
        let request = SampleRequest {
            visible: &visible,
            nodes: Some(&nodes),
            count: 2,
            seed: 42,
        };
        let negs = UniformRejectionSampler.sample(&request).unwrap();
        assert_eq!(negs.len(), 2);
        for edge in &negs {
            assert!(edge.0 < edge.1);
            assert!(!visible.contains(edge));
            assert!(*edge == Edge(1, 3) || *edge == Edge(2, 4));
        }
    } // end of test_negatives_disjoint_from_visible

    #[test]
    fn test_deterministic_per_seed() {
        log_init_test();
        //
        let visible = vec![Edge(1, 2), Edge(3, 4), Edge(5, 6), Edge(7, 8)];
        let request = SampleRequest {
            visible: &visible,
            nodes: None,
            count: 10,
            seed: 1234,
        };
        let negs_1 = UniformRejectionSampler.sample(&request).unwrap();
        let negs_2 = UniformRejectionSampler.sample(&request).unwrap();
        assert_eq!(negs_1, negs_2);
        // distinct output edges
        let as_set: EdgeSet = negs_1.iter().copied().collect();
        assert_eq!(as_set.len(), negs_1.len());
    } // end of test_deterministic_per_seed

    #[test]
    fn test_inferred_universe_full_complement() {
        log_init_test();
        // universe inferred from the visible edges is {1,2,3,4}, capacity 6 - 2 = 4
        let visible = vec![Edge(1, 2), Edge(3, 4)];
        let request = SampleRequest {
            visible: &visible,
            nodes: None,
            count: 4,
            seed: 17,
        };
        let negs = UniformRejectionSampler.sample(&request).unwrap();
        let negs: EdgeSet = negs.into_iter().collect();
        let expected: EdgeSet = vec![Edge(1, 3), Edge(1, 4), Edge(2, 3), Edge(2, 4)]
            .into_iter()
            .collect();
        assert_eq!(negs.len(), 4);
        assert!(expected.iter().all(|e| negs.contains(e)));
    } // end of test_inferred_universe_full_complement
} // end of mod tests
