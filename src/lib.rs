//! An explicit-state model checker for α-CTL, a branching-time temporal logic with existential
//! actions. Given a nondeterministic Labeled Transition System and an α-CTL formula, synthesizes
//! a policy (state-action pairs) achieving the goal, and computes the induced LTS.
//!
//! As of now, the library supports:
//!  - Policy synthesis (`sat`) for the full α-CTL operator set: boolean connectives, `ex`/`ax`,
//!    `eu`/`au`, `ef`/`af`, `eg`/`ag`.
//!  - A small formula surface syntax (tokenizer + recursive-descent parser).
//!  - Plain-text loaders for LTSs and formula files.
//!  - A built-in registry of example LTSs used in the end-to-end scenarios.
//!  - Pretty-printing of a synthesized policy's induced LTS.

pub mod error;
pub mod evaluation;
pub mod fixpoint;
pub mod formula;
pub mod induced;
pub mod load_inputs;
pub mod lts;
pub mod models;
pub mod policy;
pub mod preimage;
pub mod preprocessing;
pub mod result_print;
pub mod set_utils;

use error::Result;
use lts::Lts;

/// Convenience entry point: look up a built-in model by id, parse `formula`, and return the
/// induced LTS of its synthesized policy. Printing is the `result_print` collaborator's job.
pub fn sat_and_display(id: u32, formula: &str) -> Result<Lts> {
    let lts = models::model(id)?;
    let tree = preprocessing::parser::parse_formula(formula)?;
    evaluation::algorithm::sat_top(&lts, &tree)
}
