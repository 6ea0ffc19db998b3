//! Contains the high-level model-checking algorithm: the recursive `sat` evaluator (§4.7) and
//! the top-level entry point (§4.9).

use crate::error::{Error, Result};
use crate::evaluation::context::EvalContext;
use crate::evaluation::operators::{omega_af, omega_ag, omega_au, omega_ef, omega_eg, omega_eu};
use crate::fixpoint;
use crate::formula::Formula;
use crate::induced;
use crate::lts::{Lts, Policy, StateSet};
use crate::policy::{self, Scope};
use crate::preimage::{spi, wpi};
use crate::set_utils;

/// Evaluate `formula` over `lts`, returning the synthesized policy.
///
/// This is a total recursive function over the [Formula] tag: every variant is handled by
/// exactly one match arm, so — unlike an interpreter over an untyped term structure —
/// `UnknownOperator` can never actually be raised here; the tagged-sum encoding makes malformed
/// operator heads a parse-time error instead (§9 design notes).
pub fn sat(lts: &Lts, formula: &Formula, ctx: &mut EvalContext) -> Result<Policy> {
    ctx.nested(|ctx| {
        log::debug!("{}entering {formula}", ctx.indent());
        let result = sat_inner(lts, formula, ctx)?;
        log::debug!(
            "{}leaving {formula}: {} pairs",
            ctx.indent(),
            result.len()
        );
        Ok(result)
    })
}

fn sat_inner(lts: &Lts, formula: &Formula, ctx: &mut EvalContext) -> Result<Policy> {
    match formula {
        Formula::True => Ok(policy::tau_tag(&all_states(lts))),
        Formula::Prop(name) => {
            let covered: StateSet = set_utils::build(all_states(lts), |s| {
                lts.label(*s).binary_search(name).is_ok()
            });
            Ok(policy::tau_tag(&covered))
        }
        Formula::Not(phi) => {
            if !phi.is_atomic() {
                return Err(Error::NonAtomicNegation(phi.to_string()));
            }
            let universe = sat(lts, &Formula::True, ctx)?;
            let covered = sat(lts, phi, ctx)?;
            Ok(set_utils::difference(&universe, &covered))
        }
        Formula::And(l, r) => {
            let left = sat(lts, l, ctx)?;
            let right = sat(lts, r, ctx)?;
            Ok(set_utils::intersection(&left, &right))
        }
        Formula::Or(l, r) => {
            let left = sat(lts, l, ctx)?;
            let right = sat(lts, r, ctx)?;
            Ok(set_utils::union(&left, &right))
        }
        Formula::Ex(phi) => {
            let target = sat(lts, phi, ctx)?;
            Ok(policy::tau_tag(&policy::dom(&wpi(lts, &target))))
        }
        Formula::Ax(phi) => {
            let target = sat(lts, phi, ctx)?;
            Ok(policy::tau_tag(&policy::dom(&spi(lts, &target))))
        }
        Formula::Eu(psi, phi) => {
            let psi_states = policy::dom(&sat(lts, psi, ctx)?);
            let phi_policy = sat(lts, phi, ctx)?;
            let bound = mu_bound(lts, &phi_policy);
            fixpoint::mu(bound, |x| omega_eu(ctx, lts, &psi_states, &phi_policy, x))
        }
        Formula::Au(psi, phi) => {
            let psi_states = policy::dom(&sat(lts, psi, ctx)?);
            let phi_policy = sat(lts, phi, ctx)?;
            let bound = mu_bound(lts, &phi_policy);
            fixpoint::mu(bound, |x| omega_au(ctx, lts, &psi_states, &phi_policy, x))
        }
        Formula::Ef(phi) => {
            let phi_policy = sat(lts, phi, ctx)?;
            let bound = mu_bound(lts, &phi_policy);
            fixpoint::mu(bound, |x| omega_ef(ctx, lts, &phi_policy, x))
        }
        Formula::Af(phi) => {
            let phi_policy = sat(lts, phi, ctx)?;
            let bound = mu_bound(lts, &phi_policy);
            fixpoint::mu(bound, |x| omega_af(ctx, lts, &phi_policy, x))
        }
        Formula::Eg(phi) => eval_two_phase(lts, phi, ctx, omega_eg),
        Formula::Ag(phi) => eval_two_phase(lts, phi, ctx, omega_ag),
    }
}

/// Shared implementation of the two-phase ν-then-μ construction behind `eg`/`ag` (§4.7 step
/// list). `phase1` is `omega_eg` or `omega_ag`, picking which preimage quantifier dissolves
/// escaping states in the ν-phase.
fn eval_two_phase(
    lts: &Lts,
    phi: &Formula,
    ctx: &mut EvalContext,
    phase1: impl Fn(&Lts, &Policy) -> Policy,
) -> Result<Policy> {
    let result = ctx.with_scope(Scope::Max, |ctx| -> Result<Policy> {
        let phi_policy = sat(lts, phi, ctx)?;
        let tau_lts = induced::tau(lts, &phi_policy);
        let universe = tau_lts.universe();
        fixpoint::nu(universe, |x| phase1(&tau_lts, x))
    })?;

    ctx.with_scope(Scope::Min, |ctx| -> Result<Policy> {
        let reentered = induced::tau(lts, &result);
        let live_ends = policy::goals(&result);
        fixpoint::mu(reentered.universe().len(), |x| {
            omega_ef(ctx, &reentered, &live_ends, x)
        })
    })
}

fn all_states(lts: &Lts) -> StateSet {
    lts.states().iter().map(|s| s.id).collect()
}

/// The size of the μ-iteration's accumulator universe: the accumulator can only ever contain
/// pairs drawn from the LTS's transition universe plus the (fixed, τ-tagged) goal seed it is
/// unioned with every step. [fixpoint::mu] adds its own safety margin on top of this count.
fn mu_bound(lts: &Lts, goal_seed: &Policy) -> usize {
    set_utils::union(&lts.universe(), goal_seed).len()
}

/// `sat_top(lts, formula) -> induced lts`: initialize scope to `Min`, compute the policy, and
/// project it to the induced LTS (§4.9).
pub fn sat_top(lts: &Lts, formula: &Formula) -> Result<Lts> {
    let mut ctx = EvalContext::new();
    let policy = sat(lts, formula, &mut ctx)?;
    Ok(induced::lts(lts, &policy))
}
