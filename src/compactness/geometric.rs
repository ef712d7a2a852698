use std::f64::consts::PI;

/// Reock score: district area over the area of its minimum enclosing circle.
/// Zero when the circle is degenerate.
pub fn reock(area: f64, diameter: f64) -> f64 {
    let radius = diameter / 2.0;
    let circle = PI * radius * radius;
    if circle > 0.0 { area / circle } else { 0.0 }
}

/// Polsby-Popper score: `4 pi area / perimeter^2`. Zero for a zero perimeter.
pub fn polsby_popper(area: f64, perimeter: f64) -> f64 {
    if perimeter > 0.0 { 4.0 * PI * area / (perimeter * perimeter) } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_scores_one() {
        let r = 2.5;
        let area = PI * r * r;
        assert!((reock(area, 2.0 * r) - 1.0).abs() < 1e-12);
        assert!((polsby_popper(area, 2.0 * PI * r) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn square_scores() {
        assert!((reock(4.0, 2.0 * 2f64.sqrt()) - 2.0 / PI).abs() < 1e-12);
        assert!((polsby_popper(4.0, 8.0) - PI / 4.0).abs() < 1e-12);
    }

    #[test]
    fn degenerate_inputs_score_zero() {
        assert_eq!(reock(1.0, 0.0), 0.0);
        assert_eq!(polsby_popper(1.0, 0.0), 0.0);
    }
}
