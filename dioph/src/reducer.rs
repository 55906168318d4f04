//! The column-pivoting elimination at the heart of the solver.
//!
//! [`reduce`] drives every equation row of an [`AugmentedSystem`] to a single
//! nonzero entry on the diagonal and a zero right-hand side, or proves along
//! the way that no integer solution exists. Its only tools are elementary
//! column operations, each applied identically to every row of the working
//! matrix: subtracting an integer multiple of one column from another, and
//! swapping two columns. Both preserve the set of integer solutions expressed
//! through the column basis, and the identity block below the equations
//! records the accumulated basis change.
//!
//! Repeatedly subtracting the right multiple of the pivot column is the
//! Euclidean algorithm run on all entries of the row at once: the smallest
//! absolute value strictly decreases until a single entry remains, equal (up
//! to sign) to the gcd of the row's original coefficients. That gives both
//! termination and the divisibility form of the solvability test.

use log::debug;

use crate::Int;
use crate::matrix::Matrix;
use crate::system::AugmentedSystem;

/// The terminal states of the reduction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reduction {
    /// Every remaining equation row was driven to `0 = 0`; the tracking block
    /// now holds a parametrization of the solution set.
    Solvable,
    /// Some row reduced to `0 = c` with nonzero `c`, or to a diagonal entry
    /// that does not divide its right-hand side: no integer solution exists.
    Unsolvable,
}

/// Triangularizes the system in place, removing redundant equation rows.
///
/// On [`Reduction::Solvable`] the system's tracking block expresses every
/// unknown as a particular value plus an integer combination of the
/// `m - n` surviving free columns; see
/// [`SolutionSet::from_reduced`](crate::solution::SolutionSet::from_reduced).
pub fn reduce<T: Int>(sys: &mut AugmentedSystem<T>) -> Reduction {
    let m = sys.num_unknowns();

    let mut i = 0;
    'rows: while i < sys.num_equations() {
        loop {
            // Pivot search: the nonzero entry of smallest absolute value in
            // columns i..m of row i, the leftmost on ties.
            let Some(min) = pivot_column(&sys.b, i, m) else {
                // The coefficient part of the row is zero. Either the row is
                // a combination of earlier rows and carries no constraint, or
                // it reads 0 = c.
                if sys.b[(i, m)].is_zero() {
                    debug!("row {i} is redundant, removing it");
                    sys.remove_equation(i);
                    // The same index now points at the row that followed.
                    continue 'rows;
                }
                debug!("row {i} reduced to 0 = {}", -sys.b[(i, m)]);
                return Reduction::Unsolvable;
            };

            // Euclidean step: shrink every other nonzero entry of the row by
            // subtracting the right multiple of the pivot column.
            for j in i..m {
                if j != min && !sys.b[(i, j)].is_zero() {
                    let q = sys.b[(i, j)] / sys.b[(i, min)];
                    sys.b.col_multiply_add(j, min, -q);
                }
            }

            // The pivot belongs on the diagonal.
            if sys.b[(i, i)].is_zero() {
                sys.b.swap_columns(i, min);
            }

            // Anything left right of the diagonal means the row needs another
            // pass.
            if (i + 1..m).any(|j| !sys.b[(i, j)].is_zero()) {
                continue;
            }

            // The row is diagonal: it asserts `d * y_i + r = 0`, so `d` must
            // divide the right-hand side entry exactly.
            let d = sys.b[(i, i)];
            let r = sys.b[(i, m)];
            if !r.is_multiple_of(&d) {
                debug!("row {i}: {d} does not divide {}", -r);
                return Reduction::Unsolvable;
            }

            // Zero the row's right-hand side, propagating the choice into the
            // tracking block.
            let q = r / d;
            sys.b.col_multiply_add(m, i, -q);

            // A unit diagonal clears whatever remainder the division left.
            if d.is_one() {
                let q = sys.b[(i, m)];
                sys.b.col_multiply_add(m, i, -q);
            }

            if sys.b[(i, m)].is_zero() {
                i += 1;
                break;
            }
        }
    }

    Reduction::Solvable
}

/// Returns the column in `i..m` holding the nonzero entry of row `i` with the
/// smallest absolute value, or `None` if that part of the row is zero.
fn pivot_column<T: Int>(b: &Matrix<T>, i: usize, m: usize) -> Option<usize> {
    b.row(i)[..m]
        .iter()
        .enumerate()
        .skip(i)
        .filter(|(_, e)| !e.is_zero())
        .min_by_key(|(_, e)| e.abs())
        .map(|(j, _)| j)
}
