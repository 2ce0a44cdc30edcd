//! Node types for the decision graph.
//!
//! A node is either a question (with yes/no branches and an optional
//! deferred default branch) or a terminal module recommendation. The two
//! shapes are a tagged variant so traversal code resolves them by exhaustive
//! pattern matching, never by probing for the presence of a field.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Key identifying a node in the decision graph.
///
/// The reserved key `finished` is the terminal marker: it never maps to a
/// node and ends the traversal immediately when reached.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeKey(String);

impl NodeKey {
    /// The reserved terminal marker key.
    pub const TERMINAL: &'static str = "finished";

    /// Creates a node key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns true if this key is the terminal marker.
    pub fn is_terminal(&self) -> bool {
        self.0 == Self::TERMINAL
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for NodeKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NodeKey {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// A vertex in the decision graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    /// A yes/no question presented to the user.
    Question {
        /// The prompt text shown for this question.
        #[serde(rename = "question")]
        prompt: String,

        /// Node visited on a "yes" answer.
        yes: NodeKey,

        /// Node visited on a "no" answer. When absent, "no" takes the
        /// no-transition sentinel and traversal falls through to the
        /// pending queue.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        no: Option<NodeKey>,

        /// Node enqueued for a deferred visit regardless of the answer.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default: Option<NodeKey>,
    },

    /// A recommendable learning module.
    Module {
        /// The module number, used to address the module's resource.
        #[serde(rename = "module")]
        number: u32,

        /// Human-readable label for the module.
        detail: String,
    },
}

impl Node {
    /// Returns true if this node is a module node.
    pub fn is_module(&self) -> bool {
        matches!(self, Node::Module { .. })
    }
}

/// Resource file name for a module, `Module<N>.md`.
pub fn module_resource_name(number: u32) -> String {
    format!("Module{}.md", number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_key_is_recognized() {
        assert!(NodeKey::new("finished").is_terminal());
        assert!(!NodeKey::new("start").is_terminal());
    }

    #[test]
    fn module_zero_is_a_module_node() {
        // Module number 0 must be detected by variant, not by truthiness
        // of the number field.
        let node = Node::Module {
            number: 0,
            detail: "Guide for Setup Captive Portal Project".to_string(),
        };
        assert!(node.is_module());
    }

    #[test]
    fn question_node_deserializes_from_yaml() {
        let yaml = r#"
question: "Do students need foundational network programming?"
yes: module1
no: switch
default: int_dns
"#;
        let node: Node = serde_yaml::from_str(yaml).unwrap();
        match node {
            Node::Question { prompt, yes, no, default } => {
                assert!(prompt.starts_with("Do students"));
                assert_eq!(yes, NodeKey::new("module1"));
                assert_eq!(no, Some(NodeKey::new("switch")));
                assert_eq!(default, Some(NodeKey::new("int_dns")));
            }
            Node::Module { .. } => panic!("expected question node"),
        }
    }

    #[test]
    fn module_node_deserializes_from_yaml() {
        let yaml = r#"
module: 3
detail: "Module 3: DNS Server Implementation"
"#;
        let node: Node = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            node,
            Node::Module {
                number: 3,
                detail: "Module 3: DNS Server Implementation".to_string()
            }
        );
    }

    #[test]
    fn module_resource_name_formats_number() {
        assert_eq!(module_resource_name(0), "Module0.md");
        assert_eq!(module_resource_name(4), "Module4.md");
    }
}
