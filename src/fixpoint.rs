//! The fixed-point driver (§4.6): iterates a monotone step function from a seed until it
//! stabilizes under structural set equality.

use crate::error::Error;
use crate::lts::Policy;

/// Repeatedly apply `step` to `seed` until two consecutive iterates are structurally equal, or
/// `bound` iterations have passed without converging (an `Invariant` violation — this can only
/// happen if `step` is not actually monotone, which would be an internal bug).
fn fixpt(mut current: Policy, bound: usize, mut step: impl FnMut(&Policy) -> Policy) -> Result<Policy, Error> {
    for iteration in 0..bound {
        let next = step(&current);
        if next == current {
            log::trace!("fixpoint reached after {iteration} iterations ({} pairs)", current.len());
            return Ok(current);
        }
        current = next;
    }
    Err(Error::Invariant(format!(
        "fixed-point iteration did not converge within {bound} steps"
    )))
}

/// Least fixed point: iterate `step` from the empty policy. `universe_size` bounds the number of
/// iterations (the finite `(state, action)` universe guarantees termination within that bound
/// provided `step` is monotone).
pub fn mu(universe_size: usize, step: impl FnMut(&Policy) -> Policy) -> Result<Policy, Error> {
    fixpt(Policy::new(), universe_size + 1, step)
}

/// Greatest fixed point: iterate `step` from `seed` (conventionally the universal policy).
pub fn nu(seed: Policy, step: impl FnMut(&Policy) -> Policy) -> Result<Policy, Error> {
    let bound = seed.len() + 1;
    fixpt(seed, bound, step)
}
