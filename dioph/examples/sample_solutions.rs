use dioph::matrix::Matrix;
use dioph::system::EquationSystem;
use dioph::vector::Vector;

// Draw a few random members of a solution space and re-check them against
// the system they came from.
fn main() {
    let system = EquationSystem::new(
        Matrix::from_rows(&[[2, 4, 6]]),
        Vector::from_entries([10]),
    );

    let Some(sol) = dioph::solve(&system) else {
        println!("No solutions");
        return;
    };

    let rng = &mut rand::rng();
    for _ in 0..5 {
        let x = sol.sample_point(-20..=20, rng);
        println!("{x:?} satisfies the system: {}", system.is_satisfied_by(&x));
    }
}
