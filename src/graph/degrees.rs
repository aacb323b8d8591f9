//! node degrees counted over an edge collection

use std::collections::HashMap;

use crate::graph::edge::{Edge, NodeId};

/// Counts the incidences of every endpoint over an edge collection.
/// Nodes that never appear get no entry; callers treat a missing node as degree 0.
/// Self loops cannot occur since [Edge] construction excludes them.
pub fn get_degrees<'a, I>(edges: I) -> HashMap<NodeId, u32>
where
    I: IntoIterator<Item = &'a Edge>,
{
    let mut degrees = HashMap::<NodeId, u32>::new();
    for edge in edges {
        *degrees.entry(edge.0).or_insert(0) += 1;
        *degrees.entry(edge.1).or_insert(0) += 1;
    }
    degrees
} // end of get_degrees

//================================================================================================================

#[cfg(test)]
mod tests {

    use super::*;
    use crate::graph::edge::build_edge_set;

    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_get_degrees() {
        log_init_test();
        //
        let edges = build_edge_set(vec![(1, 2), (1, 3), (1, 4), (2, 3)]);
        let degrees = get_degrees(edges.iter());
        assert_eq!(degrees.get(&1), Some(&3));
        assert_eq!(degrees.get(&2), Some(&2));
        assert_eq!(degrees.get(&3), Some(&2));
        assert_eq!(degrees.get(&4), Some(&1));
        assert_eq!(degrees.get(&5), None);
    } // end of test_get_degrees
} // end of mod tests
