//! The text format of the solver's input and output files.
//!
//! Input: a header `n m`, then `n` rows of `m + 1` whitespace-separated
//! integers, the right-hand side last. Output: the literal text
//! `NO SOLUTIONS`, or a first line with the free-parameter count `s` followed
//! by one line per unknown listing its `s` free-parameter coefficients and
//! then its particular constant.
//!
//! Parsing and rendering are plain format adapters; everything is rejected or
//! rendered before or after the reduction, never during it.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use thiserror::Error;

use crate::solution::SolutionSet;
use crate::system::EquationSystem;

/// The ways the input text can be malformed. All of these are detected
/// before any reduction starts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unexpected end of input while reading the {0}")]
    UnexpectedEnd(&'static str),
    #[error("invalid integer {token:?} in the {what}")]
    InvalidToken { token: String, what: &'static str },
    #[error("{0} stray tokens after the last equation")]
    TrailingTokens(usize),
}

/// Failures of the file-level helpers, with the offending path attached.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}

/// Parses an equation system from the input text.
pub fn parse_system(text: &str) -> Result<EquationSystem<i64>, ParseError> {
    let mut tokens = text.split_whitespace();

    let n: usize = parse_token(tokens.next(), "header")?;
    let m: usize = parse_token(tokens.next(), "header")?;

    let mut rows = Vec::with_capacity(n);
    for _ in 0..n {
        let mut row = Vec::with_capacity(m + 1);
        for _ in 0..m + 1 {
            row.push(parse_token::<i64>(tokens.next(), "equations")?);
        }
        rows.push(row);
    }

    let rest = tokens.count();
    if rest != 0 {
        return Err(ParseError::TrailingTokens(rest));
    }

    Ok(EquationSystem::from_augmented_rows(m, &rows))
}

fn parse_token<T: FromStr>(token: Option<&str>, what: &'static str) -> Result<T, ParseError> {
    let token = token.ok_or(ParseError::UnexpectedEnd(what))?;
    token.parse().map_err(|_| ParseError::InvalidToken {
        token: token.to_string(),
        what,
    })
}

/// Renders the outcome of a solve in the output format. `None` means the
/// system has no integer solutions.
pub fn render_outcome(solution: Option<&SolutionSet<i64>>) -> String {
    let Some(sol) = solution else {
        return "NO SOLUTIONS".to_string();
    };

    let s = sol.num_free_params();
    let mut out = format!("{s}\n");
    for j in 0..sol.num_unknowns() {
        for k in 0..s {
            out.push_str(&format!("{} ", sol.basis[(k, j)]));
        }
        out.push_str(&format!("{} \n", sol.particular[j]));
    }
    out
}

/// Reads and parses an input file.
pub fn read_system(path: impl AsRef<Path>) -> Result<EquationSystem<i64>, InputError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.into(),
        source,
    })?;
    parse_system(&text).map_err(|source| InputError::Parse {
        path: path.into(),
        source,
    })
}

/// Renders the outcome and writes it to a file.
pub fn write_outcome(
    path: impl AsRef<Path>,
    solution: Option<&SolutionSet<i64>>,
) -> std::io::Result<()> {
    fs::write(path, render_outcome(solution))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::matrix::Matrix;
    use crate::vector::Vector;

    #[test]
    fn parse_small_system() {
        let system = parse_system("1 2\n2 4 6\n").unwrap();
        assert_eq!(system.num_equations(), 1);
        assert_eq!(system.num_unknowns(), 2);
        assert_eq!(system.coefficients().row(0), &[2, 4]);
        assert_eq!(system.rhs().as_slice(), &[6]);
    }

    #[test]
    fn parse_is_whitespace_insensitive() {
        let a = parse_system("2 2 1 0 5 0 1 7").unwrap();
        let b = parse_system("2 2\n1 0 5\n0 1 7\n").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn parse_empty_system() {
        let system = parse_system("0 2").unwrap();
        assert_eq!(system.num_equations(), 0);
        assert_eq!(system.num_unknowns(), 2);
    }

    #[test]
    fn truncated_input_is_rejected() {
        assert_eq!(parse_system(""), Err(ParseError::UnexpectedEnd("header")));
        assert_eq!(parse_system("2"), Err(ParseError::UnexpectedEnd("header")));
        assert_eq!(
            parse_system("1 2\n2 4"),
            Err(ParseError::UnexpectedEnd("equations"))
        );
    }

    #[test]
    fn bad_tokens_are_rejected() {
        assert!(matches!(
            parse_system("one 2"),
            Err(ParseError::InvalidToken { what: "header", .. })
        ));
        assert!(matches!(
            parse_system("1 2\n2 x 6"),
            Err(ParseError::InvalidToken { what: "equations", .. })
        ));
        // Dimensions must be non-negative.
        assert!(matches!(
            parse_system("-1 2"),
            Err(ParseError::InvalidToken { what: "header", .. })
        ));
    }

    #[test]
    fn stray_tokens_are_rejected() {
        assert_eq!(
            parse_system("1 1\n2 4 9"),
            Err(ParseError::TrailingTokens(1))
        );
    }

    #[test]
    fn render_no_solutions() {
        assert_eq!(render_outcome(None), "NO SOLUTIONS");
    }

    #[test]
    fn render_parametrized_solution() {
        // x = 3 - 2t, y = t.
        let sol = SolutionSet {
            particular: Vector::from_entries([3i64, 0]),
            basis: Matrix::from_rows(&[[-2i64, 1]]),
        };
        assert_eq!(render_outcome(Some(&sol)), "1\n-2 3 \n1 0 \n");
    }

    #[test]
    fn render_unique_solution() {
        let sol = SolutionSet {
            particular: Vector::from_entries([2i64, 1]),
            basis: Matrix::zero(0, 2),
        };
        assert_eq!(render_outcome(Some(&sol)), "0\n2 \n1 \n");
    }

    #[test]
    fn end_to_end_text_pipeline() {
        let system = parse_system("1 2\n2 4 6\n").unwrap();
        let solution = crate::solve(&system);
        assert_eq!(render_outcome(solution.as_ref()), "1\n-2 3 \n1 0 \n");
    }
}
