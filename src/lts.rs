//! The immutable Labeled Transition System (LTS) that represents a nondeterministic planning
//! domain, plus the policy-algebra types built on top of it.
//!
//! States are stored in a contiguous, id-indexed arena (§9 design notes: "LTS as arena"); the
//! opaque [StateId] is externalized everywhere else in the crate, and only this module needs to
//! know how states are laid out in memory.

use crate::error::Error;
use crate::set_utils;
use std::collections::HashMap;

/// An opaque, hashable, totally-orderable state identifier.
pub type StateId = u32;

/// An atomic proposition, or a ground compound term (e.g. `at(robot,1)`) treated atomically by
/// identity.
pub type Prop = String;

/// An action label. The distinguished action [TAU] marks goal states.
pub type Action = String;

/// The reserved "do-nothing, already-satisfied" action used to tag goal states in a policy.
pub const TAU: &str = "tau";

/// A policy: a set of `(state, action)` pairs, canonically sorted and deduplicated.
///
/// See the policy algebra in [crate::policy] for the operations defined over this type.
pub type Policy = Vec<(StateId, Action)>;

/// A set of states, canonically sorted and deduplicated.
pub type StateSet = Vec<StateId>;

/// A state paired with the propositions that hold in it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabeledState {
    pub id: StateId,
    pub labels: Vec<Prop>,
}

/// A single `(source, action, successors)` transition. `successors` is nonempty and represents
/// the nondeterministic outcomes of taking `action` in `source`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub source: StateId,
    pub action: Action,
    pub successors: StateSet,
}

/// The domain graph: a read-only set of labeled states and transitions between them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lts {
    states: Vec<LabeledState>,
    index: HashMap<StateId, usize>,
    transitions: Vec<Transition>,
}

impl Lts {
    /// Build an LTS from user-supplied states and transitions, checking the invariants from the
    /// data model: every referenced state must be declared, `(source, action)` pairs must be
    /// unique, and `tau` must not appear as a source-level action.
    pub fn new(
        mut states: Vec<LabeledState>,
        mut transitions: Vec<Transition>,
    ) -> Result<Lts, Error> {
        states.sort_by_key(|s| s.id);
        for state in &mut states {
            set_utils::canonicalize(&mut state.labels);
        }
        transitions.sort_by(|a, b| a.source.cmp(&b.source).then_with(|| a.action.cmp(&b.action)));
        for transition in &mut transitions {
            set_utils::canonicalize(&mut transition.successors);
            if transition.successors.is_empty() {
                return Err(Error::MalformedLts(format!(
                    "transition ({}, {}) has no successors",
                    transition.source, transition.action
                )));
            }
            if transition.action == TAU {
                return Err(Error::MalformedLts(format!(
                    "source LTS may not declare the reserved `{TAU}` action (state {})",
                    transition.source
                )));
            }
        }

        let index: HashMap<StateId, usize> = states
            .iter()
            .enumerate()
            .map(|(i, s)| (s.id, i))
            .collect();
        if index.len() != states.len() {
            return Err(Error::MalformedLts("duplicate state id".to_string()));
        }

        for window in transitions.windows(2) {
            if window[0].source == window[1].source && window[0].action == window[1].action {
                return Err(Error::MalformedLts(format!(
                    "duplicate transition ({}, {})",
                    window[0].source, window[0].action
                )));
            }
        }
        for transition in &transitions {
            if !index.contains_key(&transition.source) {
                return Err(Error::MalformedLts(format!(
                    "transition source {} is not a declared state",
                    transition.source
                )));
            }
            for successor in &transition.successors {
                if !index.contains_key(successor) {
                    return Err(Error::MalformedLts(format!(
                        "transition ({}, {}) references undeclared state {}",
                        transition.source, transition.action, successor
                    )));
                }
            }
        }

        Ok(Lts {
            states,
            index,
            transitions,
        })
    }

    /// Build an LTS without re-checking invariants, for internal use by the induced-LTS
    /// projections (§4.5), which construct a sub-LTS of an already-validated one and may
    /// legitimately introduce `tau` self-loops.
    pub(crate) fn from_parts_unchecked(
        mut states: Vec<LabeledState>,
        mut transitions: Vec<Transition>,
    ) -> Lts {
        states.sort_by_key(|s| s.id);
        states.dedup_by_key(|s| s.id);
        transitions.sort_by(|a, b| a.source.cmp(&b.source).then_with(|| a.action.cmp(&b.action)));
        let index: HashMap<StateId, usize> = states
            .iter()
            .enumerate()
            .map(|(i, s)| (s.id, i))
            .collect();
        Lts {
            states,
            index,
            transitions,
        }
    }

    pub fn states(&self) -> &[LabeledState] {
        &self.states
    }

    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    pub fn contains_state(&self, id: StateId) -> bool {
        self.index.contains_key(&id)
    }

    /// The propositions true in `id`, or an empty slice if `id` is not part of this LTS.
    pub fn label(&self, id: StateId) -> &[Prop] {
        self.index
            .get(&id)
            .map(|&i| self.states[i].labels.as_slice())
            .unwrap_or(&[])
    }

    /// Transitions whose source is `id`.
    pub fn transitions_from(&self, id: StateId) -> impl Iterator<Item = &Transition> {
        // Transitions are sorted by (source, action), so this could binary-search; a linear
        // scan keeps the arena simple and is fast enough for the explicit, finite models this
        // crate targets.
        self.transitions.iter().filter(move |t| t.source == id)
    }

    /// The universal policy: every `(source, action)` pair that appears in the transition
    /// relation. Used as the top element (seed) of the ν-iteration.
    pub fn universe(&self) -> Policy {
        set_utils::from_iter(
            self.transitions
                .iter()
                .map(|t| (t.source, t.action.clone())),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labeled(id: StateId, labels: &[&str]) -> LabeledState {
        LabeledState {
            id,
            labels: labels.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn transition(source: StateId, action: &str, successors: &[StateId]) -> Transition {
        Transition {
            source,
            action: action.to_string(),
            successors: successors.to_vec(),
        }
    }

    #[test]
    fn rejects_dangling_successor() {
        let states = vec![labeled(0, &["p"])];
        let transitions = vec![transition(0, "a", &[1])];
        assert!(matches!(
            Lts::new(states, transitions),
            Err(Error::MalformedLts(_))
        ));
    }

    #[test]
    fn rejects_duplicate_state_action() {
        let states = vec![labeled(0, &["p"]), labeled(1, &["q"])];
        let transitions = vec![transition(0, "a", &[1]), transition(0, "a", &[0])];
        assert!(matches!(
            Lts::new(states, transitions),
            Err(Error::MalformedLts(_))
        ));
    }

    #[test]
    fn rejects_source_level_tau() {
        let states = vec![labeled(0, &["p"])];
        let transitions = vec![transition(0, TAU, &[0])];
        assert!(matches!(
            Lts::new(states, transitions),
            Err(Error::MalformedLts(_))
        ));
    }

    #[test]
    fn universe_collects_all_source_actions() {
        let states = vec![labeled(0, &["p"]), labeled(1, &["q"])];
        let transitions = vec![transition(0, "a", &[1]), transition(1, "b", &[0, 1])];
        let lts = Lts::new(states, transitions).unwrap();
        assert_eq!(
            lts.universe(),
            vec![(0, "a".to_string()), (1, "b".to_string())]
        );
    }
}
