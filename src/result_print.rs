//! Print results of the computation: either an aggregated summary, or the full induced LTS
//! state-by-state (§4.13).

use crate::lts::{Lts, StateSet};
use crate::policy::Scope;
use std::time::SystemTime;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PrintOptions {
    NoPrint,
    ShortPrint,
    MediumPrint,
    FullPrint,
}

/// Print general info about the resulting induced LTS: state/transition counts and the
/// computation time. Printed at `ShortPrint` and above.
pub fn summarize_results(formula: &str, induced: &Lts, start_time: SystemTime) {
    if let Ok(elapsed) = start_time.elapsed() {
        println!("Time to evaluate `{formula}`: {}ms", elapsed.as_millis());
    }
    println!("{} states in the induced LTS", induced.states().len());
    println!("{} transitions in the induced LTS", induced.transitions().len());
    println!("-----");
}

/// Print the general summary, then the full induced LTS: every state with its labels (goal
/// states highlighted) and every transition with its chosen action.
///
/// `goal_states` is the domain of the synthesized policy's τ-tagged pairs (see
/// [crate::policy::goals]), computed from the policy itself before it was projected into
/// `induced` — the induced LTS's own transitions never carry the reserved τ action, since
/// `induced::lts` (unlike `induced::tau`) does not introduce τ self-loops.
pub fn print_induced_lts(
    formula: &str,
    induced: &Lts,
    goal_states: &StateSet,
    start_time: SystemTime,
    print_options: PrintOptions,
) {
    if print_options == PrintOptions::NoPrint {
        return;
    }
    summarize_results(formula, induced, start_time);
    if print_options == PrintOptions::ShortPrint {
        return;
    }

    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    for state in induced.states() {
        let is_goal = goal_states.contains(&state.id);
        let color = if is_goal { Color::Green } else { Color::White };
        stdout.set_color(ColorSpec::new().set_fg(Some(color))).ok();
        print!("state {}: [{}]", state.id, state.labels.join(", "));
        stdout.reset().ok();
        if is_goal {
            print!(" (goal)");
        }
        println!();

        if print_options == PrintOptions::FullPrint {
            for transition in induced.transitions_from(state.id) {
                stdout
                    .set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))
                    .ok();
                print!("  -{}-> ", transition.action);
                stdout.reset().ok();
                println!("{:?}", transition.successors);
            }
        }
    }
    println!("-----");
}

/// Print a short line describing the evaluator's current fixed-point scope; used by the CLI
/// driver only in verbose runs, never by the core.
pub fn describe_scope(scope: Scope) -> &'static str {
    match scope {
        Scope::Min => "min (least fixed point)",
        Scope::Max => "max (greatest fixed point)",
    }
}
