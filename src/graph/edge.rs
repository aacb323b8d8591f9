//! canonical undirected edge and edge set construction

use std::collections::BTreeSet;

use indexmap::IndexSet;

/// node identifier as read from an edge list file
pub type NodeId = i64;

/// An undirected edge, stored with the smaller node identifier first.
/// Self loops have no representation, see [Edge::canonical].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge(pub NodeId, pub NodeId);

impl Edge {
    /// canonical representation of the unordered pair (u,v), so that
    /// canonical(u,v) == canonical(v,u). Returns None on a self loop.
    pub fn canonical(u: NodeId, v: NodeId) -> Option<Edge> {
        if u == v {
            return None;
        }
        if u < v {
            Some(Edge(u, v))
        } else {
            Some(Edge(v, u))
        }
    }

    /// endpoints, smaller first
    pub fn nodes(&self) -> (NodeId, NodeId) {
        (self.0, self.1)
    }
} // end of impl Edge

/// A collection of canonical edges with set semantics and deterministic
/// (insertion order) iteration.
pub type EdgeSet = IndexSet<Edge>;

/// Canonicalizes each pair, drops self loops and deduplicates by set insertion.
/// Iteration order of the result is first-insertion order, nothing more;
/// consumers needing a sorted view must sort explicitly.
pub fn build_edge_set<I>(pairs: I) -> EdgeSet
where
    I: IntoIterator<Item = (NodeId, NodeId)>,
{
    let mut edges = EdgeSet::default();
    for (u, v) in pairs {
        if let Some(edge) = Edge::canonical(u, v) {
            edges.insert(edge);
        }
    }
    edges
} // end of build_edge_set

/// All node identifiers appearing as an endpoint, ascending and deduplicated.
/// This is the sampling universe derived from a reference edge collection.
pub fn collect_nodes<'a, I>(edges: I) -> Vec<NodeId>
where
    I: IntoIterator<Item = &'a Edge>,
{
    let mut nodes = BTreeSet::<NodeId>::new();
    for edge in edges {
        nodes.insert(edge.0);
        nodes.insert(edge.1);
    }
    nodes.into_iter().collect()
} // end of collect_nodes

//================================================================================================================

// end of mod tests
