//! The parametrized solution set of a solvable system.

use std::ops::RangeInclusive;

use rand::Rng;
use rand::distr::uniform::SampleUniform;
use rand::distr::{Distribution as _, Uniform};

use crate::Int;
use crate::matrix::Matrix;
use crate::system::AugmentedSystem;
use crate::vector::Vector;

/// All integer solutions of a system: a particular solution plus the integer
/// span of the basis rows.
///
/// Row `k` of `basis` is the coefficient vector of free parameter `k`:
/// unknown `j` takes the value
/// `particular[j] + sum_k params[k] * basis[k][j]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolutionSet<T: Int> {
    pub particular: Vector<T>,
    pub basis: Matrix<T>,
}

impl<T: Int> SolutionSet<T> {
    /// Reads the parametrization out of a successfully reduced system.
    ///
    /// Row `n + j` of the tracking block expresses unknown `x_j`: its entry
    /// in the right-hand-side column is the particular value, and its entries
    /// in the last `s` coefficient columns are the coefficients of the free
    /// parameters.
    pub fn from_reduced(sys: &AugmentedSystem<T>) -> Self {
        let n = sys.num_equations();
        let m = sys.num_unknowns();
        let s = sys.num_free_params();
        let b = sys.matrix();

        let particular = Vector::from_iter(m, (0..m).map(|j| b[(n + j, m)]));
        let basis = Matrix::from_iter(
            s,
            m,
            (0..s).flat_map(|k| (0..m).map(move |j| b[(n + j, m - s + k)])),
        );

        Self { particular, basis }
    }

    /// The number of unknowns.
    pub fn num_unknowns(&self) -> usize {
        self.particular.dim()
    }

    /// The number of free parameters.
    pub fn num_free_params(&self) -> usize {
        self.basis.num_rows()
    }

    /// The solution selected by a choice of the free parameters.
    pub fn at(&self, params: &[T]) -> Vector<T> {
        assert_eq!(
            params.len(),
            self.num_free_params(),
            "One value per free parameter."
        );
        let mut x = self.particular.clone();
        for (k, &t) in params.iter().enumerate() {
            x.mul_add_assign(t, self.basis.row(k));
        }
        x
    }

    /// A random solution, with free parameters drawn uniformly from `range`.
    pub fn sample_point<R: Rng + ?Sized>(
        &self,
        range: RangeInclusive<T>,
        rng: &mut R,
    ) -> Vector<T>
    where
        T: SampleUniform,
    {
        let dist = Uniform::new_inclusive(*range.start(), *range.end())
            .expect("Parameter range must not be empty.");
        let params: Vec<T> = (0..self.num_free_params())
            .map(|_| dist.sample(rng))
            .collect();
        self.at(&params)
    }
}
