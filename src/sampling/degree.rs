//! degree weighted sampling of non edges, with replacement

use rand::distributions::Distribution;
use rand_distr::WeightedAliasIndex;
use rand_xoshiro::rand_core::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::error::{Error, Result};
use crate::graph::{get_degrees, Edge};
use crate::sampling::{resolve_universe, NegativeSampler, SampleRequest};

/// Weighted negative sampling over the full complement of the visible graph.
///
/// Every non edge of the universe is enumerated and weighted by
/// (degree(u)+1) * (degree(v)+1), with degrees counted on the visible edges.
/// High degree endpoints are favoured as harder negatives. Draws are made
/// with replacement, so unlike [crate::sampling::UniformRejectionSampler]
/// the output can contain repeated edges; this asymmetry is intentional and
/// preserved.
///
/// The complement enumeration is quadratic in the universe size, in time and
/// space, which bounds the graph sizes this strategy is usable on.
pub struct DegreeWeightedSampler;

impl NegativeSampler for DegreeWeightedSampler {
    fn sample(&self, request: &SampleRequest) -> Result<Vec<Edge>> {
        let (pos_set, nodes) = resolve_universe(request);
        let n = nodes.len();
        if n < 2 {
            log::error!("negative sampling needs at least 2 nodes, universe has {}", n);
            return Err(Error::InsufficientNodes(n));
        }
        let degrees = get_degrees(pos_set.iter());
        // enumerate the complement. nodes is sorted so Edge(nodes[i], nodes[j])
        // with i < j is canonical by construction
        let mut non_edges = Vec::<Edge>::new();
        let mut weights = Vec::<f64>::new();
        for i in 0..n {
            let d_i = degrees.get(&nodes[i]).copied().unwrap_or(0);
            for j in (i + 1)..n {
                let edge = Edge(nodes[i], nodes[j]);
                if pos_set.contains(&edge) {
                    continue;
                }
                let d_j = degrees.get(&nodes[j]).copied().unwrap_or(0);
                non_edges.push(edge);
                weights.push((d_i + 1) as f64 * (d_j + 1) as f64);
            }
        }
        log::debug!(
            "DegreeWeightedSampler : {} nodes, {} non edges",
            n,
            non_edges.len()
        );
        if non_edges.is_empty() {
            // the visible graph is complete, nothing to draw from
            return Err(Error::CapacityExceeded {
                max: 0,
                requested: request.count,
            });
        }
        //
        let dist = WeightedAliasIndex::new(weights)?;
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(request.seed);
        let mut samples = Vec::<Edge>::with_capacity(request.count);
        for _ in 0..request.count {
            samples.push(non_edges[dist.sample(&mut rng)]);
        }
        Ok(samples)
    }
} // end of impl NegativeSampler for DegreeWeightedSampler

//================================================================================================================

// end of mod tests
