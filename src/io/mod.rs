//! edge list file io and the benchmark output layout

pub mod edgelist;
