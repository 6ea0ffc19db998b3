//! The ω step-function constructors (§4.8): each `omega_*` function computes one step of the
//! monotone iteration that [crate::fixpoint] drives to a least or greatest fixed point.

use crate::evaluation::context::EvalContext;
use crate::lts::{Lts, Policy, StateSet};
use crate::policy;
use crate::preimage::{spi, wpi};
use crate::set_utils;

/// `ω_eu(phi_policy, psi_policy)(x) = (wpi(x) ∩ phi_states) pruned by x, unioned with x and
/// psi_policy`.
pub fn omega_eu(
    ctx: &EvalContext,
    lts: &Lts,
    phi_states: &StateSet,
    psi_policy: &Policy,
    x: &Policy,
) -> Policy {
    let advanced = policy::inter(&wpi(lts, x), phi_states);
    let pruned = policy::prune(&advanced, x, ctx.scope);
    let grown = set_utils::union(&pruned, x);
    set_utils::union(&grown, psi_policy)
}

/// As [omega_eu], but using the strong preimage.
pub fn omega_au(
    ctx: &EvalContext,
    lts: &Lts,
    phi_states: &StateSet,
    psi_policy: &Policy,
    x: &Policy,
) -> Policy {
    let advanced = policy::inter(&spi(lts, x), phi_states);
    let pruned = policy::prune(&advanced, x, ctx.scope);
    let grown = set_utils::union(&pruned, x);
    set_utils::union(&grown, psi_policy)
}

/// `ω_ef(phi_policy)(x) = (wpi(x) pruned by x) ∪ x ∪ phi_policy`.
pub fn omega_ef(ctx: &EvalContext, lts: &Lts, phi_policy: &Policy, x: &Policy) -> Policy {
    let advanced = policy::prune(&wpi(lts, x), x, ctx.scope);
    let grown = set_utils::union(&advanced, x);
    set_utils::union(&grown, phi_policy)
}

/// As [omega_ef], but using the strong preimage.
pub fn omega_af(ctx: &EvalContext, lts: &Lts, phi_policy: &Policy, x: &Policy) -> Policy {
    let advanced = policy::prune(&spi(lts, x), x, ctx.scope);
    let grown = set_utils::union(&advanced, x);
    set_utils::union(&grown, phi_policy)
}

/// `ω_eg(x) = wpi(x) ∩ universe(lts)`. Partial — meant to be driven by ν, starting from the
/// universal policy and shrinking.
pub fn omega_eg(lts: &Lts, x: &Policy) -> Policy {
    set_utils::intersection(&wpi(lts, x), &lts.universe())
}

/// `ω_ag(x) = spi(x) ∩ universe(lts)`. Partial — driven by ν.
pub fn omega_ag(lts: &Lts, x: &Policy) -> Policy {
    set_utils::intersection(&spi(lts, x), &lts.universe())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lts::{LabeledState, Transition};
    use crate::policy::Scope;

    fn two_state_lts() -> Lts {
        let states = vec![
            LabeledState {
                id: 0,
                labels: vec![],
            },
            LabeledState {
                id: 1,
                labels: vec![],
            },
        ];
        let transitions = vec![Transition {
            source: 0,
            action: "a".to_string(),
            successors: vec![1],
        }];
        Lts::new(states, transitions).unwrap()
    }

    #[test]
    fn omega_ef_grows_monotonically_toward_the_goal() {
        let lts = two_state_lts();
        let ctx = EvalContext::new();
        let goal = policy::tau_tag(&vec![1]);
        let step0 = omega_ef(&ctx, &lts, &goal, &Policy::new());
        assert_eq!(step0, policy::tau_tag(&vec![1]));
        let step1 = omega_ef(&ctx, &lts, &goal, &step0);
        assert_eq!(
            step1,
            set_utils::union(&[(0, "a".to_string())], &policy::tau_tag(&vec![1]))
        );
        let step2 = omega_ef(&ctx, &lts, &goal, &step1);
        assert_eq!(step2, step1, "should have reached a fixed point");
    }

    #[test]
    fn omega_eg_keeps_a_genuine_cycle_at_the_universe() {
        let states = vec![
            LabeledState {
                id: 0,
                labels: vec![],
            },
            LabeledState {
                id: 1,
                labels: vec![],
            },
        ];
        let transitions = vec![
            Transition {
                source: 0,
                action: "a".to_string(),
                successors: vec![1],
            },
            Transition {
                source: 1,
                action: "b".to_string(),
                successors: vec![0],
            },
        ];
        let lts = Lts::new(states, transitions).unwrap();
        let universe = lts.universe();
        let shrunk = omega_eg(&lts, &universe);
        assert_eq!(shrunk, universe, "a genuine cycle is already a fixed point");
    }

    #[test]
    fn omega_eg_drops_a_state_nothing_reenters() {
        // state 0's only transition leads to state 1, and nothing leads back into state 0, so
        // it can never be part of an infinite path and must be dropped from the greatest fixed
        // point.
        let lts = two_state_lts();
        let universe = lts.universe();
        let shrunk = omega_eg(&lts, &universe);
        assert!(!policy::dom(&shrunk).contains(&0));
    }

    #[test]
    fn prune_inside_omega_eu_respects_scope() {
        let lts = two_state_lts();
        let mut ctx = EvalContext::new();
        let phi_states = vec![0, 1];
        let psi = policy::tau_tag(&vec![1]);
        let accumulator = vec![(0, "a".to_string())];

        ctx.scope = Scope::Min;
        let min_result = omega_eu(&ctx, &lts, &phi_states, &psi, &accumulator);
        assert!(policy::dom(&min_result).contains(&1));

        ctx.scope = Scope::Max;
        let max_result = omega_eu(&ctx, &lts, &phi_states, &psi, &accumulator);
        assert!(set_utils::subset(&accumulator, &max_result));
    }
}
