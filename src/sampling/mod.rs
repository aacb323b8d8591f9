//! negative samplers : produce non edges of a visible positive edge collection
//!
//! A sampler only knows the positive edges it is shown (the visible set);
//! which edges are visible at each pipeline stage is decided by the
//! orchestrators in [crate::stages]. Samplers are resolved by name through
//! an explicit [SamplerRegistry] value, like split strategies.

pub mod degree;
pub mod uniform;

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::graph::{collect_nodes, Edge, EdgeSet, NodeId};

pub use degree::DegreeWeightedSampler;
pub use uniform::UniformRejectionSampler;

/// Immutable input to a negative sampler.
#[derive(Copy, Clone, Debug)]
pub struct SampleRequest<'a> {
    /// positive edges the sampler must not return
    pub visible: &'a [Edge],
    /// node universe to draw from; inferred from the visible edges when absent
    pub nodes: Option<&'a [NodeId]>,
    /// number of negatives to produce
    pub count: usize,
    /// seed of the per call generator
    pub seed: u64,
}

/// A negative sampling strategy over the complement of the visible graph.
/// Whether the output is pairwise distinct is part of each implementation's
/// own contract, see [UniformRejectionSampler] and [DegreeWeightedSampler].
pub trait NegativeSampler {
    fn sample(&self, request: &SampleRequest) -> Result<Vec<Edge>>;
}

// The visible set as a canonical edge set plus the sorted deduplicated node
// universe, either as supplied or inferred from the visible edges.
pub(crate) fn resolve_universe(request: &SampleRequest) -> (EdgeSet, Vec<NodeId>) {
    let pos_set: EdgeSet = request.visible.iter().copied().collect();
    let nodes = match request.nodes {
        Some(nodes) => {
            let mut nodes = nodes.to_vec();
            nodes.sort_unstable();
            nodes.dedup();
            nodes
        }
        None => collect_nodes(pos_set.iter()),
    };
    (pos_set, nodes)
} // end of resolve_universe

/// Name indexed table of negative samplers.
pub struct SamplerRegistry {
    samplers: IndexMap<String, Box<dyn NegativeSampler>>,
}

impl SamplerRegistry {
    /// an empty registry
    pub fn new() -> Self {
        SamplerRegistry {
            samplers: IndexMap::new(),
        }
    }

    /// a registry with the built in samplers registered :
    /// "random" and its historical alias "random_visible" (uniform rejection),
    /// and "degree_weighted"
    pub fn with_defaults() -> Self {
        let mut registry = SamplerRegistry::new();
        registry.register("random", Box::new(UniformRejectionSampler));
        registry.register("random_visible", Box::new(UniformRejectionSampler));
        registry.register("degree_weighted", Box::new(DegreeWeightedSampler));
        registry
    }

    /// registers a sampler under a name, replacing any previous holder of that name
    pub fn register(&mut self, name: &str, sampler: Box<dyn NegativeSampler>) {
        self.samplers.insert(name.to_string(), sampler);
    }

    /// resolves a sampler by name
    pub fn get(&self, name: &str) -> Result<&dyn NegativeSampler> {
        self.samplers
            .get(name)
            .map(|s| s.as_ref())
            .ok_or_else(|| Error::UnknownSampler {
                name: name.to_string(),
                known: self.names(),
            })
    }

    /// registered names in registration order
    pub fn names(&self) -> Vec<String> {
        self.samplers.keys().cloned().collect()
    }
} // end of impl SamplerRegistry

impl Default for SamplerRegistry {
    fn default() -> Self {
        SamplerRegistry::with_defaults()
    }
}

//================================================================================================================

#[cfg(test)]
mod tests {

    use super::*;

    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_registry_names() {
        log_init_test();
        //
        let registry = SamplerRegistry::with_defaults();
        assert!(registry.get("random").is_ok());
        assert!(registry.get("random_visible").is_ok());
        assert!(registry.get("degree_weighted").is_ok());
        match registry.get("adversarial") {
            Err(Error::UnknownSampler { name, known }) => {
                assert_eq!(name, "adversarial");
                assert!(known.contains(&"random".to_string()));
                assert!(known.contains(&"degree_weighted".to_string()));
            }
            _ => panic!("expected UnknownSampler"),
        }
    } // end of test_registry_names

    #[test]
    fn test_resolve_universe_inferred() {
        log_init_test();
        //
        let visible = vec![Edge(1, 2), Edge(3, 4)];
        let request = SampleRequest {
            visible: &visible,
            nodes: None,
            count: 1,
            seed: 0,
        };
        let (pos_set, nodes) = resolve_universe(&request);
        assert_eq!(pos_set.len(), 2);
        assert_eq!(nodes, vec![1, 2, 3, 4]);
        // supplied universes are sorted and deduplicated
        let supplied = vec![4, 2, 2, 9];
        let request = SampleRequest {
            visible: &visible,
            nodes: Some(&supplied),
            count: 1,
            seed: 0,
        };
        let (_, nodes) = resolve_universe(&request);
        assert_eq!(nodes, vec![2, 4, 9]);
    } // end of test_resolve_universe_inferred
} // end of mod tests
