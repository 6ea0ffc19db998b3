//! The induced-LTS projections (§4.5): `lts(Π)` restricts a domain graph to the states and
//! transitions a policy covers, and `tau(Π)` additionally threads in synthetic τ self-loops on
//! the policy's goal states.

use crate::lts::{Lts, Policy, Transition, TAU};
use crate::policy;
use crate::set_utils;

/// `lts(base, pi)`: the sub-LTS of `base` covered by `pi`.
///
/// States are every state `pi` selects an action from, plus every successor reachable via one
/// of those selected transitions — even states `pi` itself does not cover. That asymmetry is
/// intentional (§9 design notes): it keeps the induced LTS self-contained as a display, since a
/// dead-end successor still needs its label to be shown.
pub fn lts(base: &Lts, pi: &Policy) -> Lts {
    let transitions: Vec<Transition> = base
        .transitions()
        .iter()
        .filter(|t| pi.iter().any(|(s, a)| *s == t.source && a == &t.action))
        .cloned()
        .collect();

    let mut state_ids = policy::dom(pi);
    for t in &transitions {
        state_ids.extend(t.successors.iter().copied());
    }
    set_utils::canonicalize(&mut state_ids);

    let states = state_ids
        .into_iter()
        .filter(|id| base.contains_state(*id))
        .map(|id| crate::lts::LabeledState {
            id,
            labels: base.label(id).to_vec(),
        })
        .collect();

    Lts::from_parts_unchecked(states, transitions)
}

/// `tau(base, pi)`: [lts] augmented with an explicit self-loop `(s, tau, {s})` for every
/// τ-tagged pair in `pi`. These synthetic loops let `wpi`/`spi` recognise goal states as
/// "reachable to themselves" during the ν- and μ-iterations of `eg`/`ag`.
pub fn tau(base: &Lts, pi: &Policy) -> Lts {
    let projected = lts(base, pi);
    let mut states = projected.states().to_vec();
    let mut transitions = projected.transitions().to_vec();

    for (s, _) in policy::goals(pi) {
        transitions.push(Transition {
            source: s,
            action: TAU.to_string(),
            successors: vec![s],
        });
        if !states.iter().any(|st| st.id == s) {
            states.push(crate::lts::LabeledState {
                id: s,
                labels: base.label(s).to_vec(),
            });
        }
    }

    Lts::from_parts_unchecked(states, transitions)
}
