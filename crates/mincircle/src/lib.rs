//! Smallest circles enclosing finite sets of planar points.
//!
//! The production entry point is [`minimum_enclosing_circle`], which shuffles
//! the input and runs the explicit-stack form of Welzl's algorithm. The
//! recursive form and the incremental solver in [`reference`] compute the same
//! circle and exist for cross-validation.

mod circle;
mod order;
pub mod reference;
mod welzl;

pub use circle::Circle;
pub use geo_types::Coord;
pub use order::bisection_order;
pub use welzl::{welzl_iterative, welzl_recursive};

use rand::{Rng, seq::SliceRandom};

/// Compute the minimum enclosing circle of `points`, or `None` for an empty set.
///
/// The order of the points is randomized with `rng` before solving, so the
/// expected running time is linear regardless of how the input is ordered.
/// Seeding `rng` makes the result reproducible bit-for-bit.
pub fn minimum_enclosing_circle<R: Rng + ?Sized>(points: &[Coord<f64>], rng: &mut R) -> Option<Circle> {
    let mut shuffled = points.to_vec();
    shuffled.shuffle(rng);
    welzl_iterative(&bisection_order(&shuffled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn empty_input_has_no_circle() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(minimum_enclosing_circle(&[], &mut rng).is_none());
    }

    #[test]
    fn single_point_has_zero_radius() {
        let mut rng = StdRng::seed_from_u64(7);
        let circle = minimum_enclosing_circle(&[Coord { x: 3.0, y: -1.0 }], &mut rng).unwrap();
        assert_eq!(circle.center, Coord { x: 3.0, y: -1.0 });
        assert_eq!(circle.radius, 0.0);
    }

    #[test]
    fn same_seed_gives_identical_circles() {
        let points = (0..200)
            .map(|i| {
                let t = i as f64 * 0.37;
                Coord { x: t.cos() * (1.0 + 0.1 * t.sin()), y: t.sin() * 0.8 }
            })
            .collect::<Vec<_>>();

        let a = minimum_enclosing_circle(&points, &mut StdRng::seed_from_u64(11)).unwrap();
        let b = minimum_enclosing_circle(&points, &mut StdRng::seed_from_u64(11)).unwrap();
        assert_eq!(a, b);
    }
}
