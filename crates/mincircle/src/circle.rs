use geo_types::Coord;

/// Slack applied to the radius in containment tests.
const MULTIPLICATIVE_EPSILON: f64 = 1.0 + 1e-14;

/// Relative size below which three points are treated as collinear.
const COLLINEAR_EPSILON: f64 = 1e-12;

/// A circle in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Coord<f64>,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Coord<f64>, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Zero-radius circle centered on `p`.
    #[inline] pub fn from_point(p: Coord<f64>) -> Self { Self::new(p, 0.0) }

    /// Smallest circle with `a` and `b` on its boundary.
    pub fn from_diameter(a: Coord<f64>, b: Coord<f64>) -> Self {
        let center = Coord { x: (a.x + b.x) / 2.0, y: (a.y + b.y) / 2.0 };
        Self::new(center, distance(center, a).max(distance(center, b)))
    }

    /// Circle through `a`, `b` and `c`.
    ///
    /// When the points are (nearly) collinear the circumcircle is unbounded,
    /// so the diameter circle of the farthest pair is returned instead.
    pub fn from_three(a: Coord<f64>, b: Coord<f64>, c: Coord<f64>) -> Self {
        circumcircle(a, b, c).unwrap_or_else(|| {
            [Self::from_diameter(a, b), Self::from_diameter(b, c), Self::from_diameter(a, c)]
                .into_iter()
                .fold(Self::from_point(a), |best, circle| if circle.radius > best.radius { circle } else { best })
        })
    }

    /// Diameter of the circle.
    #[inline] pub fn diameter(&self) -> f64 { 2.0 * self.radius }

    /// Whether `p` lies inside or on the circle, up to a tiny relative slack.
    #[inline]
    pub fn contains(&self, p: Coord<f64>) -> bool {
        distance(self.center, p) <= self.radius * MULTIPLICATIVE_EPSILON
    }
}

#[inline]
pub(crate) fn distance(a: Coord<f64>, b: Coord<f64>) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Circumcircle of three points, or `None` if they are (nearly) collinear.
/// Coordinates are translated to the bounding-box center first to limit cancellation.
pub(crate) fn circumcircle(a: Coord<f64>, b: Coord<f64>, c: Coord<f64>) -> Option<Circle> {
    let ox = (a.x.min(b.x).min(c.x) + a.x.max(b.x).max(c.x)) / 2.0;
    let oy = (a.y.min(b.y).min(c.y) + a.y.max(b.y).max(c.y)) / 2.0;
    let (ax, ay) = (a.x - ox, a.y - oy);
    let (bx, by) = (b.x - ox, b.y - oy);
    let (cx, cy) = (c.x - ox, c.y - oy);

    let d = (ax * (by - cy) + bx * (cy - ay) + cx * (ay - by)) * 2.0;
    let span = [ax, ay, bx, by, cx, cy].into_iter().fold(0.0_f64, |m, v| m.max(v.abs()));
    if span == 0.0 || d.abs() <= COLLINEAR_EPSILON * span * span { return None }

    let (a2, b2, c2) = (ax * ax + ay * ay, bx * bx + by * by, cx * cx + cy * cy);
    let center = Coord {
        x: ox + (a2 * (by - cy) + b2 * (cy - ay) + c2 * (ay - by)) / d,
        y: oy + (a2 * (cx - bx) + b2 * (ax - cx) + c2 * (bx - ax)) / d,
    };
    let radius = distance(center, a).max(distance(center, b)).max(distance(center, c));

    Some(Circle::new(center, radius))
}
