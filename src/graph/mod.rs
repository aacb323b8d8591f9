//! edge model : canonical edges, edge sets, node universe and degrees

pub mod degrees;
pub mod edge;

pub use degrees::get_degrees;
pub use edge::{build_edge_set, collect_nodes, Edge, EdgeSet, NodeId};
