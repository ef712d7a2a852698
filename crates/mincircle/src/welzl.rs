use geo_types::Coord;
use smallvec::SmallVec;

use crate::circle::Circle;

/// Points fixed on the boundary of the circle being built (at most three).
type Boundary = SmallVec<[Coord<f64>; 3]>;

/// The unique smallest circle with every point of `boundary` on it.
fn trivial(boundary: &[Coord<f64>]) -> Option<Circle> {
    match *boundary {
        [] => None,
        [a] => Some(Circle::from_point(a)),
        [a, b] => Some(Circle::from_diameter(a, b)),
        [a, b, c] => Some(Circle::from_three(a, b, c)),
        _ => unreachable!("at most three boundary points"),
    }
}

/// Welzl's algorithm in its natural recursive form.
///
/// Recursion depth grows with the number of points; prefer
/// [`welzl_iterative`] for large inputs.
pub fn welzl_recursive(points: &[Coord<f64>]) -> Option<Circle> {
    fn minidisk(points: &[Coord<f64>], boundary: &Boundary) -> Option<Circle> {
        let Some((&p, rest)) = points.split_first() else { return trivial(boundary) };
        if boundary.len() == 3 { return trivial(boundary) }

        match minidisk(rest, boundary) {
            Some(circle) if circle.contains(p) => Some(circle),
            _ => {
                let mut boundary = boundary.clone();
                boundary.push(p);
                minidisk(rest, &boundary)
            }
        }
    }

    minidisk(points, &Boundary::new())
}

/// Work items for the explicit-stack form of Welzl's algorithm.
enum Frame {
    /// Solve for `points[index..]` with `boundary` fixed.
    Solve { index: usize, boundary: Boundary },
    /// The circle for `points[index + 1..]` is ready; check `points[index]` against it.
    Check { index: usize, boundary: Boundary },
}

/// Welzl's algorithm with an explicit stack in place of recursion.
///
/// Produces the same circle as [`welzl_recursive`] for the same point order.
pub fn welzl_iterative(points: &[Coord<f64>]) -> Option<Circle> {
    let mut stack = vec![Frame::Solve { index: 0, boundary: Boundary::new() }];
    let mut result: Option<Circle> = None;

    while let Some(frame) = stack.pop() {
        match frame {
            Frame::Solve { index, boundary } => {
                if index >= points.len() || boundary.len() == 3 {
                    result = trivial(&boundary);
                } else {
                    stack.push(Frame::Check { index, boundary: boundary.clone() });
                    stack.push(Frame::Solve { index: index + 1, boundary });
                }
            }
            Frame::Check { index, mut boundary } => {
                let p = points[index];
                if !result.is_some_and(|circle| circle.contains(p)) {
                    boundary.push(p);
                    stack.push(Frame::Solve { index: index + 1, boundary });
                }
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Coord<f64>> {
        vec![
            Coord { x: 0.0, y: 0.0 },
            Coord { x: 2.0, y: 0.0 },
            Coord { x: 2.0, y: 2.0 },
            Coord { x: 0.0, y: 2.0 },
            Coord { x: 1.0, y: 1.0 },
        ]
    }

    #[test]
    fn square_is_enclosed_by_its_circumcircle() {
        for circle in [welzl_recursive(&square()), welzl_iterative(&square())] {
            let circle = circle.unwrap();
            assert!((circle.center.x - 1.0).abs() < 1e-12);
            assert!((circle.center.y - 1.0).abs() < 1e-12);
            assert!((circle.radius - 2.0_f64.sqrt()).abs() < 1e-12);
        }
    }

    #[test]
    fn empty_and_single_point() {
        assert!(welzl_recursive(&[]).is_none());
        assert!(welzl_iterative(&[]).is_none());

        let p = Coord { x: -4.0, y: 2.5 };
        assert_eq!(welzl_iterative(&[p]), Some(Circle::from_point(p)));
        assert_eq!(welzl_recursive(&[p]), Some(Circle::from_point(p)));
    }

    #[test]
    fn collinear_points_use_extreme_pair() {
        let points = (0..10).map(|i| Coord { x: i as f64, y: 2.0 * i as f64 }).collect::<Vec<_>>();
        let circle = welzl_iterative(&points).unwrap();
        assert!((circle.center.x - 4.5).abs() < 1e-9);
        assert!((circle.center.y - 9.0).abs() < 1e-9);
        assert!((circle.radius - (4.5_f64.powi(2) + 9.0_f64.powi(2)).sqrt()).abs() < 1e-9);
    }

    #[test]
    fn iterative_handles_long_inputs() {
        use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

        // Deep enough that the recursive form would risk the stack.
        let mut points = (0..50_000)
            .map(|i| {
                let t = i as f64 * 1e-3;
                Coord { x: t.cos(), y: t.sin() }
            })
            .collect::<Vec<_>>();
        points.shuffle(&mut StdRng::seed_from_u64(3));

        let circle = welzl_iterative(&points).unwrap();
        assert!((circle.radius - 1.0).abs() < 1e-6);
        assert!(points.iter().all(|&p| crate::circle::distance(circle.center, p) <= circle.radius * (1.0 + 1e-9)));
    }
}
