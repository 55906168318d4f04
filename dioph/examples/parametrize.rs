use dioph::matrix::Matrix;
use dioph::system::EquationSystem;
use dioph::vector::Vector;

// Solve a small diophantine system and print its general solution.
fn main() {
    let system = EquationSystem::new(
        Matrix::from_rows(&[[1, 2, -3], [4, -1, 2]]),
        Vector::from_entries([5, 1]),
    );

    match dioph::solve(&system) {
        None => println!("No solutions"),
        Some(sol) => {
            println!("Particular: {:?}", sol.particular);
            for (k, b) in sol.basis.rows().enumerate() {
                println!("t{k}: {b:?}");
            }
        }
    }
}
