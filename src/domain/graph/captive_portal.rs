//! Built-in decision graph for the captive portal tutorial.
//!
//! Mirrors the questionnaire shipped with the tutorial: eight question nodes
//! and six modules (0 through 5). The `mininet` question is defined but not
//! reachable from `start`; it is kept for parity with the published
//! questionnaire and still participates in validation.

use std::collections::HashMap;

use super::decision_graph::DecisionGraph;
use super::node::{Node, NodeKey};

/// Returns the captive portal tutorial graph.
pub fn captive_portal_graph() -> DecisionGraph {
    let mut nodes = HashMap::new();

    let mut question =
        |key: &str, prompt: &str, yes: &str, no: Option<&str>, default: Option<&str>| {
            nodes.insert(
                NodeKey::new(key),
                Node::Question {
                    prompt: prompt.to_string(),
                    yes: NodeKey::new(yes),
                    no: no.map(NodeKey::new),
                    default: default.map(NodeKey::new),
                },
            );
        };

    question(
        "start",
        "Are students interested in network engineering?",
        "tcp",
        Some("exper_dns"),
        None,
    );
    question(
        "tcp",
        "Do students need foundational network programming?",
        "module1",
        Some("switch"),
        Some("int_dns"),
    );
    question(
        "switch",
        "Do students have knowledge and experience with switches?",
        "module2",
        None,
        None,
    );
    question(
        "exper_dns",
        "Do students have knowledge and experience related to DNS?",
        "module3",
        Some("exper_web"),
        Some("exper_web"),
    );
    question(
        "exper_web",
        "Do students have knowledge and experience related to web?",
        "module4",
        None,
        None,
    );
    question(
        "int_dns",
        "Are students interested in understanding DNS?",
        "module3",
        None,
        Some("int_web"),
    );
    question(
        "int_web",
        "Are students interested in Web development?",
        "module4",
        None,
        None,
    );
    question(
        "mininet",
        "Do students have experience with network simulation tools?",
        "module5",
        Some("finished"),
        None,
    );

    let mut module = |key: &str, number: u32, detail: &str| {
        nodes.insert(
            NodeKey::new(key),
            Node::Module {
                number,
                detail: detail.to_string(),
            },
        );
    };

    module("module0", 0, "Guide for Setup Captive Portal Project");
    module("module1", 1, "Module 1: TCP Server/Client");
    module("module2", 2, "Module 2: Switch Implementation");
    module("module3", 3, "Module 3: DNS Server Implementation");
    module(
        "module4",
        4,
        "Module 4: Web Server Frontend and Backend Implementation",
    );
    module("module5", 5, "Module 5: Mininet Implementation");

    DecisionGraph::new(NodeKey::new("start"), nodes)
}
