//! Incremental enclosing-circle solver used to cross-check the Welzl forms.
//!
//! Points are added one at a time; whenever a point falls outside the current
//! circle, the circle is rebuilt with that point (and then a second point) on
//! its boundary. The two-point stage chooses between the tightest circumcircles
//! on either side of the fixed chord.

use geo_types::Coord;
use rand::{Rng, seq::SliceRandom};

use crate::circle::{Circle, circumcircle};

/// Smallest circle enclosing `points`, in shuffled order.
pub fn enclosing_circle<R: Rng + ?Sized>(points: &[Coord<f64>], rng: &mut R) -> Option<Circle> {
    let mut shuffled = points.to_vec();
    shuffled.shuffle(rng);
    enclosing_circle_in_order(&shuffled)
}

/// Smallest circle enclosing `points`, taking them in the order given.
pub fn enclosing_circle_in_order(points: &[Coord<f64>]) -> Option<Circle> {
    let mut circle: Option<Circle> = None;
    for (i, &p) in points.iter().enumerate() {
        if !circle.is_some_and(|c| c.contains(p)) {
            circle = Some(with_one_point(&points[..=i], p));
        }
    }
    circle
}

/// One boundary point known.
fn with_one_point(points: &[Coord<f64>], p: Coord<f64>) -> Circle {
    let mut circle = Circle::from_point(p);
    for (i, &q) in points.iter().enumerate() {
        if circle.contains(q) { continue }
        circle = if circle.radius == 0.0 {
            Circle::from_diameter(p, q)
        } else {
            with_two_points(&points[..=i], p, q)
        };
    }
    circle
}

/// Two boundary points known.
fn with_two_points(points: &[Coord<f64>], p: Coord<f64>, q: Coord<f64>) -> Circle {
    let chord = Circle::from_diameter(p, q);
    let mut left: Option<Circle> = None;
    let mut right: Option<Circle> = None;

    for &r in points {
        if chord.contains(r) { continue }

        let cross = cross_product(p, q, r);
        let Some(circle) = circumcircle(p, q, r) else { continue };
        let side = cross_product(p, q, circle.center);

        if cross > 0.0 && left.is_none_or(|l| side > cross_product(p, q, l.center)) {
            left = Some(circle);
        } else if cross < 0.0 && right.is_none_or(|r| side < cross_product(p, q, r.center)) {
            right = Some(circle);
        }
    }

    match (left, right) {
        (None, None) => chord,
        (Some(l), None) => l,
        (None, Some(r)) => r,
        (Some(l), Some(r)) => if l.radius <= r.radius { l } else { r },
    }
}

/// Twice the signed area of triangle (a, b, c).
#[inline]
fn cross_product(a: Coord<f64>, b: Coord<f64>, c: Coord<f64>) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}
