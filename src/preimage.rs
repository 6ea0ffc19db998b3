//! Weak and strong preimage of a policy under an LTS (§4.4).
//!
//! Both operators compute, for a target policy `target`, the set of `(state, action)` pairs
//! whose transition lands the nondeterministic outcome inside (weak) or entirely inside
//! (strong) `dom(target)`. Both exclude pure self-loops, except on the reserved τ action.

use crate::lts::{Lts, Policy, TAU};
use crate::policy;
use crate::set_utils;

/// A transition `(s, a, successors)` is a "pure self-loop" if its only possible outcome is `s`
/// itself. Pure self-loops are excluded from both preimage operators (they make no progress),
/// except when `a` is τ — a τ self-loop marks an already-satisfied goal state and must count.
fn is_excluded_self_loop(source: u32, action: &str, successors: &[u32]) -> bool {
    action != TAU && successors == [source]
}

/// Weak preimage: include `(s, a)` iff some possible outcome of `a` in `s` lies in `dom(target)`.
pub fn wpi(lts: &Lts, target: &Policy) -> Policy {
    let goal_states = policy::dom(target);
    set_utils::from_iter(lts.transitions().iter().filter_map(|t| {
        if is_excluded_self_loop(t.source, &t.action, &t.successors) {
            return None;
        }
        set_utils::intersects(&t.successors, &goal_states).then(|| (t.source, t.action.clone()))
    }))
}

/// Strong preimage: include `(s, a)` iff every possible outcome of `a` in `s` lies in
/// `dom(target)`.
pub fn spi(lts: &Lts, target: &Policy) -> Policy {
    let goal_states = policy::dom(target);
    set_utils::from_iter(lts.transitions().iter().filter_map(|t| {
        if is_excluded_self_loop(t.source, &t.action, &t.successors) {
            return None;
        }
        set_utils::subset(&t.successors, &goal_states).then(|| (t.source, t.action.clone()))
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lts::{LabeledState, Transition};

    fn lts_with(transitions: Vec<Transition>) -> Lts {
        let mut ids: Vec<u32> = transitions
            .iter()
            .flat_map(|t| std::iter::once(t.source).chain(t.successors.iter().copied()))
            .collect();
        ids.sort_unstable();
        ids.dedup();
        let states = ids
            .into_iter()
            .map(|id| LabeledState {
                id,
                labels: vec![],
            })
            .collect();
        Lts::new(states, transitions).unwrap()
    }

    fn goal(states: &[u32]) -> Policy {
        policy::tau_tag(&states.to_vec())
    }

    #[test]
    fn wpi_includes_transitions_that_might_reach_target() {
        let lts = lts_with(vec![Transition {
            source: 0,
            action: "a".to_string(),
            successors: vec![1, 2],
        }]);
        assert_eq!(wpi(&lts, &goal(&[2])), vec![(0, "a".to_string())]);
        assert_eq!(wpi(&lts, &goal(&[3])), Policy::new());
    }

    #[test]
    fn spi_requires_every_outcome_in_target() {
        let lts = lts_with(vec![Transition {
            source: 0,
            action: "a".to_string(),
            successors: vec![1, 2],
        }]);
        assert_eq!(spi(&lts, &goal(&[1, 2])), vec![(0, "a".to_string())]);
        assert_eq!(spi(&lts, &goal(&[1])), Policy::new());
    }

    #[test]
    fn pure_self_loop_is_excluded_from_both_operators() {
        let lts = lts_with(vec![Transition {
            source: 0,
            action: "a".to_string(),
            successors: vec![0],
        }]);
        assert_eq!(wpi(&lts, &goal(&[0])), Policy::new());
        assert_eq!(spi(&lts, &goal(&[0])), Policy::new());
    }

    #[test]
    fn tau_self_loop_is_always_admitted() {
        // `tau` self-loops are only introduced internally (§4.5's `tau` projection), so this
        // bypasses `Lts::new`'s rejection of source-level `tau` transitions.
        let lts = Lts::from_parts_unchecked(
            vec![LabeledState {
                id: 0,
                labels: vec![],
            }],
            vec![Transition {
                source: 0,
                action: TAU.to_string(),
                successors: vec![0],
            }],
        );
        assert_eq!(wpi(&lts, &goal(&[0])), vec![(0, TAU.to_string())]);
        assert_eq!(spi(&lts, &goal(&[0])), vec![(0, TAU.to_string())]);
    }
}
