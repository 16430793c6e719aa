//! Node neighbourhoods

mod node_graph;

pub use node_graph::IsoParametricNodeGraph;
