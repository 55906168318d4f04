//! Command-line front end: reads a system from a text file, solves it,
//! self-checks the parametrization and writes the outcome.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Arg, Command, value_parser};
use dioph::verify::{Check, verify};
use log::{error, info};

#[derive(Debug, thiserror::Error)]
enum Failure {
    #[error(transparent)]
    Input(#[from] dioph::io::InputError),
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("internal invariant violated: the reduced system failed the substitution check")]
    SelfCheck,
}

fn main() -> ExitCode {
    env_logger::init();

    let matches = Command::new("dioph")
        .about("Finds all integer solutions of a linear diophantine system.")
        .arg(
            Arg::new("input")
                .value_name("INPUT")
                .default_value("input.txt")
                .help("Input file: a header `n m`, then n rows of m+1 integers"),
        )
        .arg(
            Arg::new("output")
                .value_name("OUTPUT")
                .default_value("output.txt")
                .help("Output file: `NO SOLUTIONS` or the parametrized solution"),
        )
        .arg(
            Arg::new("trials")
                .long("trials")
                .value_name("N")
                .value_parser(value_parser!(usize))
                .default_value("4")
                .help("Number of random substitutions in the self-check"),
        )
        .arg(
            Arg::new("bound")
                .long("param-bound")
                .value_name("B")
                .value_parser(value_parser!(i64))
                .default_value("100")
                .help("Free parameters are drawn uniformly from [-B, B]"),
        )
        .get_matches();

    let input = matches.get_one::<String>("input").unwrap();
    let output = matches.get_one::<String>("output").unwrap();
    let trials = *matches.get_one::<usize>("trials").unwrap();
    let bound = *matches.get_one::<i64>("bound").unwrap();
    let check = Check {
        trials,
        range: -bound.abs()..=bound.abs(),
    };

    match run(input, output, &check) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("error: {e}");
            match e {
                Failure::SelfCheck => ExitCode::from(2),
                _ => ExitCode::FAILURE,
            }
        }
    }
}

fn run(input: &str, output: &str, check: &Check<i64>) -> Result<(), Failure> {
    let system = dioph::io::read_system(input)?;
    info!(
        "read {} equations in {} unknowns from {input}",
        system.num_equations(),
        system.num_unknowns()
    );

    let solution = dioph::solve(&system);

    match &solution {
        Some(solution) => {
            // A failure here is never "no solution": it means the reducer
            // produced a parametrization that does not satisfy the input.
            if !verify(solution, &system, check, &mut rand::rng()) {
                return Err(Failure::SelfCheck);
            }
            info!(
                "solution space has {} free parameters, self-check passed",
                solution.num_free_params()
            );
        }
        None => info!("no integer solutions"),
    }

    dioph::io::write_outcome(output, solution.as_ref()).map_err(|source| Failure::Write {
        path: output.into(),
        source,
    })
}
