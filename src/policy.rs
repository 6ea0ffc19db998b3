//! Operations over [Policy] — a policy's domain, its intersection with a state set, pruning
//! against an accumulator under the current fixed-point scope, and the τ-goal filter.

use crate::lts::{Action, Policy, StateSet, TAU};
use crate::set_utils;

/// The evaluator's fixed-point mode. `Min` is in effect while computing a least fixed point (μ);
/// `Max` while computing a greatest fixed point (ν). [crate::evaluation::context::EvalContext]
/// threads this explicitly rather than through global mutable state, so that nested `eg`/`ag`
/// evaluations can save and restore their caller's mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scope {
    Min,
    Max,
}

/// `dom(pi)`: the set of source states covered by `pi`.
pub fn dom(pi: &Policy) -> StateSet {
    set_utils::from_iter(pi.iter().map(|(s, _)| *s))
}

/// `inter(pi, states)`: retain the pairs of `pi` whose state lies in `states`.
pub fn inter(pi: &Policy, states: &StateSet) -> Policy {
    pi.iter()
        .filter(|(s, _)| states.binary_search(s).is_ok())
        .cloned()
        .collect()
}

/// `prune(pi, accumulator, scope)`: in `Scope::Min`, drop pairs whose state is already covered
/// by `accumulator` (so μ-iteration makes monotone progress toward a fixed point); in
/// `Scope::Max`, return `pi` unchanged (ν-iteration must not drop coverage mid-flight).
pub fn prune(pi: &Policy, accumulator: &Policy, scope: Scope) -> Policy {
    match scope {
        Scope::Max => pi.clone(),
        Scope::Min => {
            let covered = dom(accumulator);
            pi.iter()
                .filter(|(s, _)| covered.binary_search(s).is_err())
                .cloned()
                .collect()
        }
    }
}

/// `goals(pi)`: keep only the τ-tagged pairs.
pub fn goals(pi: &Policy) -> Policy {
    pi.iter().filter(|(_, a)| is_tau(a)).cloned().collect()
}

/// Whether `action` is the reserved τ action.
pub fn is_tau(action: &Action) -> bool {
    action == TAU
}

/// Tag every state in `states` with the τ action, producing a goal-marked policy.
pub fn tau_tag(states: &StateSet) -> Policy {
    states.iter().map(|s| (*s, TAU.to_string())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lts::StateId;

    fn p(pairs: &[(StateId, &str)]) -> Policy {
        set_utils::from_iter(pairs.iter().map(|(s, a)| (*s, a.to_string())))
    }

    #[test]
    fn dom_collects_unique_sorted_states() {
        assert_eq!(dom(&p(&[(2, "a"), (1, "b"), (1, "c")])), vec![1, 2]);
    }

    #[test]
    fn inter_filters_by_state_membership() {
        let pi = p(&[(1, "a"), (2, "b"), (3, "c")]);
        assert_eq!(inter(&pi, &vec![1, 3]), p(&[(1, "a"), (3, "c")]));
    }

    #[test]
    fn prune_drops_covered_states_only_in_min_scope() {
        let pi = p(&[(1, "a"), (2, "b")]);
        let accumulator = p(&[(1, "x")]);
        assert_eq!(prune(&pi, &accumulator, Scope::Min), p(&[(2, "b")]));
        assert_eq!(prune(&pi, &accumulator, Scope::Max), pi);
    }

    #[test]
    fn goals_keeps_only_tau_pairs() {
        let pi = p(&[(1, "a"), (2, TAU)]);
        assert_eq!(goals(&pi), p(&[(2, TAU)]));
    }

    #[test]
    fn tau_tag_marks_every_state() {
        assert_eq!(tau_tag(&vec![1, 2]), p(&[(1, TAU), (2, TAU)]));
    }
}
