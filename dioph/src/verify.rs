//! Randomized self-check of a claimed parametrization.
//!
//! The reduction is exact, so a correct parametrization satisfies the
//! original equations for *every* choice of the free parameters. The check
//! substitutes arbitrary integer draws, reconstructs all unknowns and
//! recomputes every equation with plain integer arithmetic against the
//! untouched input system. Any nonzero discrepancy can only come from a
//! defect in the reduction, never from an unlucky draw, so a failure here is
//! an internal invariant violation rather than an ordinary negative result.

use std::ops::RangeInclusive;

use log::warn;
use rand::Rng;
use rand::distr::uniform::SampleUniform;
use rand::distr::{Distribution as _, Uniform};

use crate::Int;
use crate::solution::SolutionSet;
use crate::system::EquationSystem;

/// Configuration of the randomized check.
///
/// A single draw already exposes a broken reduction with high probability,
/// but extra trials over a range spanning negative values, zero and positive
/// values cost next to nothing, so both knobs are configurable rather than
/// hard-coded.
#[derive(Clone, Debug)]
pub struct Check<T> {
    /// How many independent substitutions to try.
    pub trials: usize,
    /// The inclusive range the free parameters are drawn from.
    pub range: RangeInclusive<T>,
}

impl<T: Int> Default for Check<T> {
    fn default() -> Self {
        // 100 fits even the narrowest supported integer type.
        let hundred: T = num_traits::NumCast::from(100).unwrap();
        Self {
            trials: 4,
            range: -hundred..=hundred,
        }
    }
}

/// Checks the parametrization against the untouched system, once per trial
/// with freshly drawn free parameters.
pub fn verify<T, R>(
    solution: &SolutionSet<T>,
    system: &EquationSystem<T>,
    check: &Check<T>,
    rng: &mut R,
) -> bool
where
    T: Int + SampleUniform,
    R: Rng + ?Sized,
{
    let dist = Uniform::new_inclusive(*check.range.start(), *check.range.end())
        .expect("Parameter range must not be empty.");

    (0..check.trials).all(|_| {
        let params: Vec<T> = (0..solution.num_free_params())
            .map(|_| dist.sample(rng))
            .collect();
        verify_at(solution, system, &params)
    })
}

/// Checks the parametrization for one fixed choice of the free parameters.
pub fn verify_at<T: Int>(
    solution: &SolutionSet<T>,
    system: &EquationSystem<T>,
    params: &[T],
) -> bool {
    let x = solution.at(params);
    let ok = system.is_satisfied_by(&x);
    if !ok {
        warn!(
            "parametrization fails at {params:?}: lhs {:?}, rhs {:?}",
            system.eval(&x),
            system.rhs()
        );
    }
    ok
}
