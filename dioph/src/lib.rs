//! Exact solving of linear diophantine systems.
//!
//! Given `n` integer equations in `m` unknowns, [`solve`] decides whether an
//! all-integer solution exists and, if so, returns the general solution as a
//! particular integer vector plus an integer linear combination of
//! `s = m - n` free parameters.
//!
//! Everything happens over the integers. The reducer only ever applies
//! elementary column operations (subtract an integer multiple of one column
//! from another, swap two columns), each applied identically to every row of
//! the working matrix, so the set of integer solutions is preserved exactly at
//! every step. There is no floating point anywhere and no loss of exactness.
//!
//! The working matrix carries an identity block below the equations that
//! records the accumulated basis change; see [`system::AugmentedSystem`]. On a
//! successful reduction the block reads off the parametrization directly, and
//! [`verify`] can substitute arbitrary integers for the free parameters and
//! re-check the untouched input system.

pub mod io;
pub mod matrix;
pub mod reducer;
pub mod solution;
pub mod system;
pub mod vector;
pub mod verify;

use std::fmt::{Debug, Display};

use num_integer::Integer;
use num_traits::{PrimInt, Signed};

pub use matrix::Matrix;
pub use reducer::{Reduction, reduce};
pub use solution::SolutionSet;
pub use system::{AugmentedSystem, EquationSystem};
pub use vector::Vector;

/// The integer types the solver works on.
///
/// The solver is exact for any width, but it does not use arbitrary-precision
/// arithmetic: intermediate entries of the working matrix can exceed the
/// magnitude of the input coefficients, and adversarial inputs can overflow a
/// fixed-width type. This is a known limitation of the design, not a guarded
/// condition.
pub trait Int: PrimInt + Signed + Integer + Debug + Display {}

impl<T: PrimInt + Signed + Integer + Debug + Display> Int for T {}

/// Reduces the system and, if it has integer solutions, extracts the
/// parametrized solution set.
///
/// Returns `None` when no all-integer solution exists.
pub fn solve<T: Int>(system: &EquationSystem<T>) -> Option<SolutionSet<T>> {
    let mut aug = AugmentedSystem::new(system);
    match reducer::reduce(&mut aug) {
        Reduction::Solvable => Some(SolutionSet::from_reduced(&aug)),
        Reduction::Unsolvable => None,
    }
}
