//! Node geometry
mod metrics;
mod node;
mod template;

pub(crate) use metrics::{cross, norm, unit};
pub use metrics::Metrics;
pub use node::{Coordinates, GhostNode, Node, NodeId};
pub use template::TemplateMap;
