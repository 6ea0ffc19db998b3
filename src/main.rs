//! Explicit-state α-CTL model checker for nondeterministic planning domains.
//!
//! Takes a model (a built-in id or a path to a plain-text LTS file) and a path to a file of
//! α-CTL formulae, and synthesizes a policy for each formula, printing the induced LTS.

use alpha_ctl_planner::evaluation::algorithm::sat;
use alpha_ctl_planner::evaluation::context::EvalContext;
use alpha_ctl_planner::induced;
use alpha_ctl_planner::load_inputs::{is_valid_file, load_formulae, load_lts};
use alpha_ctl_planner::models;
use alpha_ctl_planner::policy;
use alpha_ctl_planner::preprocessing::parser::parse_formula;
use alpha_ctl_planner::result_print::{print_induced_lts, PrintOptions};

use clap::builder::PossibleValuesParser;
use clap::Parser;

use std::process::ExitCode;
use std::time::SystemTime;

/// Structure to collect CLI arguments
#[derive(Parser)]
#[clap(
    version,
    about = "Explicit-state model checker for alpha-CTL, synthesizing policies for nondeterministic planning domains."
)]
struct Arguments {
    /// Either a built-in model id (e.g. `1`) or a path to a plain-text LTS file.
    model: String,

    /// Path to a file with one alpha-CTL formula per line.
    formulae_path: String,

    /// Choice of the amount of output regarding computation and results.
    #[clap(short, long, default_value = "short", value_parser = PossibleValuesParser::new(["none", "short", "medium", "full"]))]
    print_option: String,
}

fn print_options_from(name: &str) -> PrintOptions {
    match name {
        "none" => PrintOptions::NoPrint,
        "short" => PrintOptions::ShortPrint,
        "medium" => PrintOptions::MediumPrint,
        "full" => PrintOptions::FullPrint,
        // value_parser restricts to the four options above; unreachable otherwise.
        _ => unreachable!("clap already validated --print-option"),
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Arguments::parse();

    if !is_valid_file(&args.formulae_path) {
        eprintln!("{} is not a valid file", args.formulae_path);
        return ExitCode::FAILURE;
    }

    let lts = if let Ok(id) = args.model.parse::<u32>() {
        models::model(id)
    } else if is_valid_file(&args.model) {
        load_lts(&args.model)
    } else {
        eprintln!("{} is neither a built-in model id nor a valid file", args.model);
        return ExitCode::FAILURE;
    };
    let lts = match lts {
        Ok(lts) => lts,
        Err(err) => {
            eprintln!("failed to load model: {err}");
            return ExitCode::FAILURE;
        }
    };

    let formulae = match load_formulae(&args.formulae_path) {
        Ok(formulae) => formulae,
        Err(err) => {
            eprintln!("failed to load formulae: {err}");
            return ExitCode::FAILURE;
        }
    };

    let print_options = print_options_from(&args.print_option);
    let mut had_error = false;

    for raw_formula in formulae {
        let start_time = SystemTime::now();
        let result = parse_formula(&raw_formula).and_then(|formula| {
            let mut ctx = EvalContext::new();
            let policy = sat(&lts, &formula, &mut ctx)?;
            let goal_states = policy::dom(&policy::goals(&policy));
            let induced = induced::lts(&lts, &policy);
            Ok((induced, goal_states))
        });
        match result {
            Ok((induced, goal_states)) => print_induced_lts(
                &raw_formula,
                &induced,
                &goal_states,
                start_time,
                print_options,
            ),
            Err(err) => {
                eprintln!("`{raw_formula}`: {err}");
                had_error = true;
            }
        }
    }

    if had_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
