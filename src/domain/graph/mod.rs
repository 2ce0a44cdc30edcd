//! Decision graph - Static questionnaire structure.
//!
//! - `node` - Node keys and the question/module tagged variant
//! - `decision_graph` - The validated, immutable key-to-node mapping
//! - `captive_portal` - The built-in captive portal tutorial graph

mod captive_portal;
mod decision_graph;
mod node;

pub use captive_portal::captive_portal_graph;
pub use decision_graph::{DecisionGraph, GraphError};
pub use node::{module_resource_name, Node, NodeKey};
