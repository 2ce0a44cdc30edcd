//! DecisionGraph - Immutable mapping of node keys to nodes.
//!
//! The graph is fully known at startup and never mutates during a session.
//! A dangling reference is a data-integrity fault: `validate()` is called
//! once at startup and the service refuses to boot on failure.

use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;

use super::node::{Node, NodeKey};

/// Errors raised when a graph definition is structurally unsound.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Start node '{0}' does not exist in the graph")]
    MissingStart(NodeKeyDisplay),

    #[error("Node '{from}' references '{to}', which does not exist in the graph")]
    DanglingReference { from: NodeKeyDisplay, to: NodeKeyDisplay },

    #[error("Node key '{0}' is empty or reserved")]
    InvalidKey(NodeKeyDisplay),

    #[error("Question node '{0}' has an empty prompt")]
    EmptyPrompt(NodeKeyDisplay),

    #[error("Graph has no module node numbered 0 (the always-recommended seed)")]
    MissingModuleZero,

    #[error("Failed to parse graph definition: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Owned key string for error messages.
pub type NodeKeyDisplay = String;

/// Fixed decision graph: node keys mapped to question or module nodes.
#[derive(Debug, Clone, Deserialize)]
pub struct DecisionGraph {
    /// Key of the node where every traversal begins.
    start: NodeKey,

    /// All nodes in the graph.
    nodes: HashMap<NodeKey, Node>,
}

impl DecisionGraph {
    /// Creates a graph from a start key and a node mapping.
    pub fn new(start: NodeKey, nodes: HashMap<NodeKey, Node>) -> Self {
        Self { start, nodes }
    }

    /// Parses a graph from a YAML definition and validates it.
    pub fn from_yaml(yaml: &str) -> Result<Self, GraphError> {
        let graph: DecisionGraph = serde_yaml::from_str(yaml)?;
        graph.validate()?;
        Ok(graph)
    }

    /// Returns the start node key.
    pub fn start(&self) -> &NodeKey {
        &self.start
    }

    /// Resolves a key to its node, if present.
    pub fn node(&self, key: &NodeKey) -> Option<&Node> {
        self.nodes.get(key)
    }

    /// Returns the detail label of the module with the given number.
    pub fn module_detail(&self, number: u32) -> Option<&str> {
        self.nodes.values().find_map(|node| match node {
            Node::Module { number: n, detail } if *n == number => Some(detail.as_str()),
            _ => None,
        })
    }

    /// Checks structural integrity of the graph.
    ///
    /// Every `yes`/`no`/`default` reference must resolve to an existing node
    /// or the terminal marker, the start node must exist, prompts must be
    /// non-empty, and a module node numbered 0 must be present because the
    /// recommendation list is seeded with it.
    pub fn validate(&self) -> Result<(), GraphError> {
        if self.node(&self.start).is_none() {
            return Err(GraphError::MissingStart(self.start.to_string()));
        }

        let mut has_module_zero = false;
        for (key, node) in &self.nodes {
            if key.as_str().is_empty() || key.is_terminal() {
                return Err(GraphError::InvalidKey(key.to_string()));
            }
            match node {
                Node::Question { prompt, yes, no, default } => {
                    if prompt.trim().is_empty() {
                        return Err(GraphError::EmptyPrompt(key.to_string()));
                    }
                    self.check_reference(key, yes)?;
                    if let Some(no) = no {
                        self.check_reference(key, no)?;
                    }
                    if let Some(default) = default {
                        self.check_reference(key, default)?;
                    }
                }
                Node::Module { number, .. } => {
                    if *number == 0 {
                        has_module_zero = true;
                    }
                }
            }
        }

        if !has_module_zero {
            return Err(GraphError::MissingModuleZero);
        }
        Ok(())
    }

    fn check_reference(&self, from: &NodeKey, to: &NodeKey) -> Result<(), GraphError> {
        if to.is_terminal() || self.nodes.contains_key(to) {
            Ok(())
        } else {
            Err(GraphError::DanglingReference {
                from: from.to_string(),
                to: to.to_string(),
            })
        }
    }
}
