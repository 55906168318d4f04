//! The equation system and its augmented working form.

use crate::Int;
use crate::matrix::Matrix;
use crate::vector::Vector;

/// An immutable system of `n` linear equations in `m` integer unknowns.
///
/// The system is kept untouched next to the working matrix so that a claimed
/// solution can later be checked against the original coefficients.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EquationSystem<T: Int> {
    coeffs: Matrix<T>,
    rhs: Vector<T>,
}

impl<T: Int> EquationSystem<T> {
    /// Creates a system from its coefficient matrix and right-hand side.
    pub fn new(coeffs: Matrix<T>, rhs: Vector<T>) -> Self {
        assert_eq!(
            coeffs.num_rows(),
            rhs.dim(),
            "One right-hand side entry per equation."
        );
        Self { coeffs, rhs }
    }

    /// Splits rows laid out as `m` coefficients followed by the right-hand
    /// side, the row shape of the text format.
    pub fn from_augmented_rows<U: AsRef<[T]>>(unknowns: usize, rows: &[U]) -> Self {
        let mut coeffs = Matrix::zero(rows.len(), unknowns);
        let mut rhs = Vector::zero(rows.len());
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            assert_eq!(
                row.len(),
                unknowns + 1,
                "Each row holds the coefficients and the right-hand side."
            );
            coeffs.row_mut(i).copy_from_slice(&row[..unknowns]);
            rhs[i] = row[unknowns];
        }
        Self { coeffs, rhs }
    }

    /// The number of equations.
    pub fn num_equations(&self) -> usize {
        self.coeffs.num_rows()
    }

    /// The number of unknowns.
    pub fn num_unknowns(&self) -> usize {
        self.coeffs.num_cols()
    }

    /// The coefficient matrix.
    pub fn coefficients(&self) -> &Matrix<T> {
        &self.coeffs
    }

    /// The right-hand side vector.
    pub fn rhs(&self) -> &Vector<T> {
        &self.rhs
    }

    /// Evaluates the left-hand side of every equation at `x`.
    pub fn eval(&self, x: &Vector<T>) -> Vector<T> {
        self.coeffs.mul_vec(x)
    }

    /// Does `x` satisfy every equation exactly?
    pub fn is_satisfied_by(&self, x: &Vector<T>) -> bool {
        self.eval(x) == self.rhs
    }
}

/// The working matrix of the reducer.
///
/// For a system of `n` equations in `m` unknowns this is the
/// `(n + m) x (m + 1)` matrix `B`:
///
/// - Rows `0..n` hold the equations in homogeneous form. Column `m` carries
///   the right-hand side *negated at load time*, so that row `i` asserts
///   `sum_j B[i][j] * y_j + B[i][m] = 0`, where `y` are the unknowns
///   expressed in the current column basis. The negation is an invariant of
///   this data model, not a detail of the loader: the reducer's divisibility
///   test and the final read-off of particular values both rely on it.
/// - Rows `n..n+m` start as the identity with a zero entry in column `m`.
///   Every column operation applies to these rows like to any other, so row
///   `n + j` always expresses the original unknown `x_j` in the current
///   basis. After a successful reduction it holds the particular value of
///   `x_j` in column `m` and its free-parameter coefficients in the last
///   `s` coefficient columns.
///
/// `num_equations` shrinks as redundant rows are removed; the number of
/// unknowns never changes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AugmentedSystem<T: Int> {
    pub(crate) b: Matrix<T>,
    equations: usize,
    unknowns: usize,
}

impl<T: Int> AugmentedSystem<T> {
    /// Builds the augmented working matrix for a system.
    pub fn new(system: &EquationSystem<T>) -> Self {
        let n = system.num_equations();
        let m = system.num_unknowns();

        let mut b = Matrix::zero(n + m, m + 1);
        for i in 0..n {
            let row = b.row_mut(i);
            row[..m].copy_from_slice(system.coefficients().row(i));
            row[m] = -system.rhs()[i];
        }
        for j in 0..m {
            b[(n + j, j)] = T::one();
        }

        Self {
            b,
            equations: n,
            unknowns: m,
        }
    }

    /// The number of equation rows still in the matrix.
    pub fn num_equations(&self) -> usize {
        self.equations
    }

    /// The number of unknowns.
    pub fn num_unknowns(&self) -> usize {
        self.unknowns
    }

    /// The number of rows currently in the working matrix.
    pub fn size(&self) -> usize {
        self.b.num_rows()
    }

    /// The number of free parameters of the solution space, `m - n`.
    ///
    /// Only meaningful once reduction has succeeded; a successful reduction
    /// never leaves more equations than unknowns.
    pub fn num_free_params(&self) -> usize {
        self.unknowns - self.equations
    }

    /// The working matrix.
    pub fn matrix(&self) -> &Matrix<T> {
        &self.b
    }

    /// Removes equation row `i`, shrinking the active equation count.
    pub(crate) fn remove_equation(&mut self, i: usize) {
        debug_assert!(i < self.equations);
        self.b.remove_row(i);
        self.equations -= 1;
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn sys(coeffs: &[&[i64]], rhs: &[i64]) -> EquationSystem<i64> {
        EquationSystem::new(Matrix::from_rows(coeffs), Vector::from_entries(rhs))
    }

    #[test]
    fn augmented_layout() {
        // x + 2y = 3, 4x + 5y = 6
        let system = sys(&[&[1, 2], &[4, 5]], &[3, 6]);
        let aug = AugmentedSystem::new(&system);

        assert_eq!(aug.size(), 4);
        assert_eq!(aug.num_equations(), 2);
        assert_eq!(aug.num_unknowns(), 2);

        // Equations with negated right-hand side.
        assert_eq!(aug.matrix().row(0), &[1, 2, -3]);
        assert_eq!(aug.matrix().row(1), &[4, 5, -6]);
        // Identity tracking block with zero right-hand side.
        assert_eq!(aug.matrix().row(2), &[1, 0, 0]);
        assert_eq!(aug.matrix().row(3), &[0, 1, 0]);
    }

    #[test]
    fn remove_equation_shifts_block() {
        let system = sys(&[&[1, 2], &[4, 5]], &[3, 6]);
        let mut aug = AugmentedSystem::new(&system);
        aug.remove_equation(0);

        assert_eq!(aug.num_equations(), 1);
        assert_eq!(aug.size(), 3);
        assert_eq!(aug.matrix().row(0), &[4, 5, -6]);
        assert_eq!(aug.matrix().row(1), &[1, 0, 0]);
    }

    #[test]
    fn evaluation() {
        let system = sys(&[&[2, -1]], &[5]);
        assert!(system.is_satisfied_by(&Vector::from_entries([3i64, 1])));
        assert!(!system.is_satisfied_by(&Vector::from_entries([3i64, 2])));
        assert_eq!(
            system.eval(&Vector::from_entries([0i64, 0])).as_slice(),
            &[0]
        );
    }

    #[test]
    fn from_augmented_rows_splits_rhs() {
        let system = EquationSystem::from_augmented_rows(2, &[[1i64, 2, 3], [4, 5, 6]]);
        assert_eq!(system, sys(&[&[1, 2], &[4, 5]], &[3, 6]));
    }

    #[test]
    fn empty_system() {
        let system = EquationSystem::new(Matrix::<i64>::zero(0, 2), Vector::zero(0));
        let aug = AugmentedSystem::new(&system);
        assert_eq!(aug.size(), 2);
        assert_eq!(aug.num_free_params(), 2);
        assert_eq!(aug.matrix().row(0), &[1, 0, 0]);
        assert_eq!(aug.matrix().row(1), &[0, 1, 0]);
    }
}
