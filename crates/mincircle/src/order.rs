use geo_types::Coord;

/// Reorder points by repeated bisection.
///
/// The list is split in half and the first element of each piece is emitted
/// level by level, so consecutive outputs are spread across the whole input.
/// Boundary rings stored in walking order then reach the solver as widely
/// separated points, which lets the early circles cover most of the set.
pub fn bisection_order(points: &[Coord<f64>]) -> Vec<Coord<f64>> {
    let half = points.len() / 2;
    let mut level: Vec<&[Coord<f64>]> = vec![&points[..half], &points[half..]];
    let mut ordered = Vec::with_capacity(points.len());

    while !level.is_empty() {
        let mut left = Vec::with_capacity(level.len());
        let mut right = Vec::with_capacity(level.len());
        for slice in level.into_iter().filter(|s| !s.is_empty()) {
            ordered.push(slice[0]);
            let rest = &slice[1..];
            let (l, r) = rest.split_at(rest.len() / 2);
            left.push(l);
            right.push(r);
        }
        left.append(&mut right);
        level = left.into_iter().filter(|s| !s.is_empty()).collect();
    }

    ordered
}
