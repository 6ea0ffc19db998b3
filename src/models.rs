//! Built-in example LTSs used in end-to-end scenarios (§4.12, §8), analogous to the teacher's
//! bundled example networks. Not part of the core evaluator; purely a convenience consumer.

use crate::error::{Error, Result};
use crate::lts::{LabeledState, Lts, Transition};

fn labeled(id: u32, labels: &[&str]) -> LabeledState {
    LabeledState {
        id,
        labels: labels.iter().map(|s| s.to_string()).collect(),
    }
}

fn transition(source: u32, action: &str, successors: &[u32]) -> Transition {
    Transition {
        source,
        action: action.to_string(),
        successors: successors.to_vec(),
    }
}

/// The worked example from the source material: states `0:[p,q], 1:[p], 2:[r], 3:[q],
/// 4:[p,q,r]`; transitions `(0,a,[1]), (0,b,[3]), (1,b,[1,2]), (3,a,[3]), (3,c,[2,4])`. State 3
/// is a trap: its only escape, action `c`, nondeterministically may land back on itself's
/// neighbourhood without ever guaranteeing `r ∧ ¬p`.
fn model_1() -> Lts {
    let states = vec![
        labeled(0, &["p", "q"]),
        labeled(1, &["p"]),
        labeled(2, &["r"]),
        labeled(3, &["q"]),
        labeled(4, &["p", "q", "r"]),
    ];
    let transitions = vec![
        transition(0, "a", &[1]),
        transition(0, "b", &[3]),
        transition(1, "b", &[1, 2]),
        transition(3, "a", &[3]),
        transition(3, "c", &[2, 4]),
    ];
    Lts::new(states, transitions).expect("model 1 is a well-formed LTS")
}

/// Model 1 extended with a fresh state `5:[r]` and action `d` from state 3 straight to it,
/// dissolving state 3's trap: a planner can now always escape to `r ∧ ¬p` instead of being
/// stuck between the self-loop under `a` and the nondeterministic `c`.
fn model_4() -> Lts {
    let states = vec![
        labeled(0, &["p", "q"]),
        labeled(1, &["p"]),
        labeled(2, &["r"]),
        labeled(3, &["q"]),
        labeled(4, &["p", "q", "r"]),
        labeled(5, &["r"]),
    ];
    let transitions = vec![
        transition(0, "a", &[1]),
        transition(0, "b", &[3]),
        transition(1, "b", &[1, 2]),
        transition(3, "a", &[3]),
        transition(3, "c", &[2, 4]),
        transition(3, "d", &[5]),
    ];
    Lts::new(states, transitions).expect("model 4 is a well-formed LTS")
}

/// A two-room gripper domain with one ball. States are `(robot_room, ball_room, holding)`
/// triples, numbered below; `at(ball,N)` and `at(robot,N)` are ground compound propositions
/// (§9: ground terms are atomic by identity), `holding` marks the gripper-closed states. The
/// robot starts in room 1 holding nothing, the ball starts in room 1.
///
/// - 0: robot@1, ball@1, empty
/// - 1: robot@1, ball@1, holding (after `grab`, nondeterministic: might also fail and stay at 0)
/// - 2: robot@2, ball@1, holding (after `move` from 1)
/// - 3: robot@2, ball@2, empty (after `release` from 2)
///
/// `grab` in state 0 nondeterministically either succeeds (moving to 1) or fails (self-loop at
/// 0, excluded from preimage since it is a pure non-tau self-loop) — exercising the weak-vs-
/// strong preimage distinction that `ag(ef(...))` must still plan around.
fn model_6() -> Lts {
    let states = vec![
        labeled(0, &["at(robot,1)", "at(ball,1)"]),
        labeled(1, &["at(robot,1)", "at(ball,1)", "holding"]),
        labeled(2, &["at(robot,2)", "at(ball,1)", "holding"]),
        labeled(3, &["at(robot,2)", "at(ball,2)"]),
    ];
    let transitions = vec![
        transition(0, "grab", &[0, 1]),
        transition(1, "move", &[2]),
        transition(2, "release", &[3]),
    ];
    Lts::new(states, transitions).expect("model 6 is a well-formed LTS")
}

/// Look up a built-in model by id, as referenced by the end-to-end scenarios.
pub fn model(id: u32) -> Result<Lts> {
    match id {
        1 => Ok(model_1()),
        4 => Ok(model_4()),
        6 => Ok(model_6()),
        other => Err(Error::UnknownModel(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_model_id_is_rejected() {
        assert!(matches!(model(99), Err(Error::UnknownModel(99))));
    }

    #[test]
    fn model_1_has_the_documented_shape() {
        let lts = model_1();
        assert_eq!(lts.states().len(), 5);
        assert_eq!(lts.transitions().len(), 5);
    }

    #[test]
    fn model_4_adds_state_5_and_action_d() {
        let lts = model_4();
        assert!(lts.contains_state(5));
        assert!(lts
            .transitions_from(3)
            .any(|t| t.action == "d" && t.successors == vec![5]));
    }
}
