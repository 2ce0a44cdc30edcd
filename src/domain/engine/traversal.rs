//! TraversalSession - The questionnaire traversal engine.
//!
//! One instance per session. The engine holds the pending queue of deferred
//! default-path nodes and the accumulated recommendation list, seeded with
//! module 0. Traversal advances through `visit`, an explicit work loop; the
//! only reentry points are user answers, so no traversal ever overlaps
//! another.
//!
//! # Invariants
//!
//! - `recommended` always starts with module 0, exactly once
//! - A question's `default` target is enqueued when the question is
//!   presented and drained strictly after the yes/no branch resolves
//! - Duplicate module recommendations are preserved, never deduplicated

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode, SessionId, Timestamp};
use crate::domain::graph::{module_resource_name, DecisionGraph, Node, NodeKey};

use super::view::{RecommendationView, RecommendedModule};

/// Module number seeded into every recommendation list.
const SEED_MODULE: u32 = 0;

/// A yes/no answer to the currently presented question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Answer {
    Yes,
    No,
}

/// Where the engine currently is in its traversal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    /// A question is presented and the engine waits for an answer.
    Awaiting(NodeKey),

    /// The traversal reached its terminal state; the recommendation view
    /// can be produced.
    Finished,
}

/// A pending traversal step.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Step {
    /// Visit the node with this key.
    Key(NodeKey),

    /// The explicit terminal marker: produce the final view, bypassing
    /// the pending queue.
    Finished,

    /// The no-transition sentinel ("no" on a question without a `no`
    /// target): fall through to the pending queue.
    None,
}

impl Step {
    fn from_key(key: NodeKey) -> Self {
        if key.is_terminal() {
            Step::Finished
        } else {
            Step::Key(key)
        }
    }
}

/// One complete walk from the start node to the recommendation view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalSession {
    /// Unique identifier for this session.
    id: SessionId,

    /// Deferred default-path nodes, visited after the current yes/no
    /// branch resolves.
    pending: VecDeque<NodeKey>,

    /// Recommended module numbers, in recommendation order.
    recommended: Vec<u32>,

    /// Current engine state.
    state: EngineState,

    /// When the session was created.
    created_at: Timestamp,

    /// When the session last advanced.
    updated_at: Timestamp,
}

impl TraversalSession {
    /// Starts a new traversal session at the graph's start node.
    ///
    /// # Errors
    ///
    /// Returns `NodeNotFound` if the traversal reaches a key the graph does
    /// not define; unreachable on a graph that passed validation.
    pub fn start(id: SessionId, graph: &DecisionGraph) -> Result<Self, DomainError> {
        let now = Timestamp::now();
        let mut session = Self {
            id,
            pending: VecDeque::new(),
            recommended: vec![SEED_MODULE],
            state: EngineState::Finished,
            created_at: now,
            updated_at: now,
        };
        session.visit(graph, Step::Key(graph.start().clone()))?;
        Ok(session)
    }

    /// Resets the session to its seeded initial state and re-enters the
    /// start node.
    pub fn reset(&mut self, graph: &DecisionGraph) -> Result<(), DomainError> {
        self.pending.clear();
        self.recommended = vec![SEED_MODULE];
        self.updated_at = Timestamp::now();
        self.visit(graph, Step::Key(graph.start().clone()))
    }

    /// Answers the currently presented question and advances the traversal.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` if the session is already finished
    /// - `NodeNotFound` on a graph integrity fault
    pub fn answer(&mut self, graph: &DecisionGraph, answer: Answer) -> Result<(), DomainError> {
        let key = match &self.state {
            EngineState::Awaiting(key) => key.clone(),
            EngineState::Finished => {
                return Err(DomainError::new(
                    ErrorCode::InvalidStateTransition,
                    "Session is already finished",
                ))
            }
        };

        let step = match graph.node(&key) {
            Some(Node::Question { yes, no, .. }) => match answer {
                Answer::Yes => Step::from_key(yes.clone()),
                // An absent `no` target behaves as the no-transition
                // sentinel: traversal falls through to the pending queue.
                Answer::No => no.clone().map(Step::from_key).unwrap_or(Step::None),
            },
            _ => {
                return Err(DomainError::new(
                    ErrorCode::NodeNotFound,
                    format!("Awaited node '{}' is not a question in the graph", key),
                ))
            }
        };

        self.updated_at = Timestamp::now();
        self.visit(graph, step)
    }

    /// Advances the traversal until it reaches the next question or the
    /// terminal state.
    ///
    /// An explicit work loop rather than recursion, so deep graphs cannot
    /// grow the call stack.
    fn visit(&mut self, graph: &DecisionGraph, step: Step) -> Result<(), DomainError> {
        let mut step = step;
        loop {
            match step {
                Step::Finished => {
                    self.state = EngineState::Finished;
                    return Ok(());
                }
                Step::None => match self.pending.pop_front() {
                    Some(key) => step = Step::from_key(key),
                    None => {
                        self.state = EngineState::Finished;
                        return Ok(());
                    }
                },
                Step::Key(key) => match graph.node(&key) {
                    Some(Node::Module { number, .. }) => {
                        self.recommended.push(*number);
                        step = Step::None;
                    }
                    Some(Node::Question { default, .. }) => {
                        // Queued when the question is presented, regardless
                        // of how it is later answered.
                        if let Some(deferred) = default {
                            self.pending.push_back(deferred.clone());
                        }
                        self.state = EngineState::Awaiting(key);
                        return Ok(());
                    }
                    None => {
                        return Err(DomainError::new(
                            ErrorCode::NodeNotFound,
                            format!("No node '{}' in the decision graph", key),
                        ))
                    }
                },
            }
        }
    }

    /// Produces the final recommendation view.
    ///
    /// # Errors
    ///
    /// - `SessionNotFinished` if a question is still awaiting an answer
    /// - `ModuleNotFound` if a recorded number has no module node
    pub fn recommendations(&self, graph: &DecisionGraph) -> Result<RecommendationView, DomainError> {
        if !self.is_finished() {
            return Err(DomainError::new(
                ErrorCode::SessionNotFinished,
                "Recommendations are available once the questionnaire is finished",
            ));
        }

        // Only the seed: the tutorial has nothing to offer this user.
        if self.recommended.len() <= 1 {
            return Ok(RecommendationView::NotApplicable);
        }

        let modules = self
            .recommended
            .iter()
            .map(|&number| {
                let detail = graph.module_detail(number).ok_or_else(|| {
                    DomainError::new(
                        ErrorCode::ModuleNotFound,
                        format!("No module node numbered {}", number),
                    )
                })?;
                Ok(RecommendedModule {
                    number,
                    detail: detail.to_string(),
                    resource: module_resource_name(number),
                })
            })
            .collect::<Result<Vec<_>, DomainError>>()?;

        Ok(RecommendationView::Recommended(modules))
    }

    // ─────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────

    /// Returns the session ID.
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Returns the current engine state.
    pub fn state(&self) -> &EngineState {
        &self.state
    }

    /// Returns true once the traversal reached its terminal state.
    pub fn is_finished(&self) -> bool {
        self.state == EngineState::Finished
    }

    /// Returns the prompt of the currently awaited question, if any.
    pub fn current_prompt<'a>(&self, graph: &'a DecisionGraph) -> Option<&'a str> {
        match &self.state {
            EngineState::Awaiting(key) => match graph.node(key) {
                Some(Node::Question { prompt, .. }) => Some(prompt.as_str()),
                _ => None,
            },
            EngineState::Finished => None,
        }
    }

    /// Returns the recommended module numbers so far, in order.
    pub fn recommended(&self) -> &[u32] {
        &self.recommended
    }

    /// Returns when the session was created.
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Returns when the session last advanced.
    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::engine::view::RecommendationView;
    use crate::domain::graph::captive_portal_graph;
    use proptest::prelude::*;

    fn awaiting(session: &TraversalSession) -> &str {
        match session.state() {
            EngineState::Awaiting(key) => key.as_str(),
            EngineState::Finished => panic!("session unexpectedly finished"),
        }
    }

    #[test]
    fn new_session_awaits_start_and_seeds_module_zero() {
        let graph = captive_portal_graph();
        let session = TraversalSession::start(SessionId::new(), &graph).unwrap();

        assert_eq!(awaiting(&session), "start");
        assert_eq!(session.recommended(), &[0]);
        assert_eq!(
            session.current_prompt(&graph),
            Some("Are students interested in network engineering?")
        );
    }

    #[test]
    fn network_engineering_path_recommends_modules_two_and_four() {
        // yes at start, no at tcp (queues int_dns), yes at switch,
        // default path through int_dns to int_web, yes there.
        let graph = captive_portal_graph();
        let mut session = TraversalSession::start(SessionId::new(), &graph).unwrap();

        session.answer(&graph, Answer::Yes).unwrap();
        assert_eq!(awaiting(&session), "tcp");

        session.answer(&graph, Answer::No).unwrap();
        assert_eq!(awaiting(&session), "switch");

        session.answer(&graph, Answer::Yes).unwrap();
        // module 2 recorded, then the queued int_dns is popped
        assert_eq!(awaiting(&session), "int_dns");
        assert_eq!(session.recommended(), &[0, 2]);

        session.answer(&graph, Answer::No).unwrap();
        // int_dns has no "no" target; its default int_web is next
        assert_eq!(awaiting(&session), "int_web");

        session.answer(&graph, Answer::Yes).unwrap();
        assert!(session.is_finished());
        assert_eq!(session.recommended(), &[0, 2, 4]);
    }

    #[test]
    fn default_target_is_visited_once_after_branch_resolves() {
        let graph = captive_portal_graph();
        let mut session = TraversalSession::start(SessionId::new(), &graph).unwrap();

        session.answer(&graph, Answer::Yes).unwrap(); // start -> tcp, queues int_dns
        session.answer(&graph, Answer::Yes).unwrap(); // tcp -> module1, branch resolves

        // module 1 recorded first, then the deferred int_dns presented
        assert_eq!(session.recommended(), &[0, 1]);
        assert_eq!(awaiting(&session), "int_dns");

        session.answer(&graph, Answer::No).unwrap(); // falls through to int_web
        session.answer(&graph, Answer::No).unwrap(); // dead end, queue empty

        assert!(session.is_finished());
        assert_eq!(session.recommended(), &[0, 1]);
    }

    #[test]
    fn all_no_path_ends_not_applicable() {
        let graph = captive_portal_graph();
        let mut session = TraversalSession::start(SessionId::new(), &graph).unwrap();

        session.answer(&graph, Answer::No).unwrap(); // start -> exper_dns
        session.answer(&graph, Answer::No).unwrap(); // -> exper_web (default exper_web queued)
        session.answer(&graph, Answer::No).unwrap(); // dead end, queue pops exper_web again
        assert_eq!(awaiting(&session), "exper_web");
        session.answer(&graph, Answer::No).unwrap();

        assert!(session.is_finished());
        assert_eq!(session.recommended(), &[0]);
        assert_eq!(
            session.recommendations(&graph).unwrap(),
            RecommendationView::NotApplicable
        );
    }

    #[test]
    fn recommendations_list_carries_details_and_resources() {
        let graph = captive_portal_graph();
        let mut session = TraversalSession::start(SessionId::new(), &graph).unwrap();

        session.answer(&graph, Answer::No).unwrap(); // -> exper_dns
        session.answer(&graph, Answer::Yes).unwrap(); // module 3, then queued exper_web
        session.answer(&graph, Answer::No).unwrap(); // dead end

        assert!(session.is_finished());
        match session.recommendations(&graph).unwrap() {
            RecommendationView::Recommended(modules) => {
                assert_eq!(modules.len(), 2);
                assert_eq!(modules[0].number, 0);
                assert_eq!(modules[0].detail, "Guide for Setup Captive Portal Project");
                assert_eq!(modules[0].resource, "Module0.md");
                assert_eq!(modules[1].number, 3);
                assert_eq!(modules[1].resource, "Module3.md");
            }
            RecommendationView::NotApplicable => panic!("expected recommendations"),
        }
    }

    #[test]
    fn recommendations_before_finish_are_rejected() {
        let graph = captive_portal_graph();
        let session = TraversalSession::start(SessionId::new(), &graph).unwrap();

        let err = session.recommendations(&graph).unwrap_err();
        assert_eq!(err.code, ErrorCode::SessionNotFinished);
    }

    #[test]
    fn answering_a_finished_session_is_rejected() {
        let graph = captive_portal_graph();
        let mut session = TraversalSession::start(SessionId::new(), &graph).unwrap();

        for _ in 0..16 {
            if session.is_finished() {
                break;
            }
            session.answer(&graph, Answer::No).unwrap();
        }
        assert!(session.is_finished());

        let err = session.answer(&graph, Answer::Yes).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStateTransition);
    }

    #[test]
    fn reset_restores_the_seeded_initial_state() {
        let graph = captive_portal_graph();
        let mut session = TraversalSession::start(SessionId::new(), &graph).unwrap();

        session.answer(&graph, Answer::Yes).unwrap();
        session.answer(&graph, Answer::Yes).unwrap();
        assert_ne!(session.recommended(), &[0]);

        session.reset(&graph).unwrap();
        assert_eq!(session.recommended(), &[0]);
        assert_eq!(awaiting(&session), "start");
    }

    proptest! {
        /// Module 0 is present exactly once, first, on every traversal path,
        /// and every path through the built-in graph terminates.
        #[test]
        fn module_zero_is_always_first_and_unique(answers in proptest::collection::vec(any::<bool>(), 16)) {
            let graph = captive_portal_graph();
            let mut session = TraversalSession::start(SessionId::new(), &graph).unwrap();

            for &yes in &answers {
                if session.is_finished() {
                    break;
                }
                let answer = if yes { Answer::Yes } else { Answer::No };
                session.answer(&graph, answer).unwrap();
            }

            prop_assert!(session.is_finished(), "built-in graph must terminate within 16 answers");
            prop_assert_eq!(session.recommended()[0], 0);
            prop_assert_eq!(session.recommended().iter().filter(|&&n| n == 0).count(), 1);
            prop_assert!(session.recommended().iter().all(|&n| n <= 5));
        }
    }
}
