/// Minimal enclosing circle of a point set.
///
/// Welzl's incremental construction, run over the points in their given
/// order rather than a shuffled one: contour sizes here are small enough
/// that the expected-linear speedup is irrelevant, and a fixed order keeps
/// repeated runs bit-identical.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: (f32, f32),
    pub radius: f32,
}

const EPS: f64 = 1e-7;

pub fn min_enclosing_circle(points: &[(f32, f32)]) -> Option<Circle> {
    if points.is_empty() {
        return None;
    }
    let pts: Vec<(f64, f64)> = points.iter().map(|&(x, y)| (x as f64, y as f64)).collect();

    let mut circle = (pts[0], 0.0);
    for i in 1..pts.len() {
        if !contains(circle, pts[i]) {
            circle = with_one_on_boundary(&pts[..i], pts[i]);
        }
    }

    Some(Circle {
        center: (circle.0.0 as f32, circle.0.1 as f32),
        radius: circle.1 as f32,
    })
}

type RawCircle = ((f64, f64), f64);

fn with_one_on_boundary(pts: &[(f64, f64)], p: (f64, f64)) -> RawCircle {
    let mut circle = (p, 0.0);
    for j in 0..pts.len() {
        if !contains(circle, pts[j]) {
            circle = with_two_on_boundary(&pts[..j], pts[j], p);
        }
    }
    circle
}

fn with_two_on_boundary(pts: &[(f64, f64)], p: (f64, f64), q: (f64, f64)) -> RawCircle {
    let mut circle = from_diameter(p, q);
    for k in 0..pts.len() {
        if !contains(circle, pts[k]) {
            circle = from_three(p, q, pts[k]);
        }
    }
    circle
}

fn contains(circle: RawCircle, p: (f64, f64)) -> bool {
    distance(circle.0, p) <= circle.1 + EPS
}

fn distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    let dx = a.0 - b.0;
    let dy = a.1 - b.1;
    (dx * dx + dy * dy).sqrt()
}

fn from_diameter(a: (f64, f64), b: (f64, f64)) -> RawCircle {
    let center = ((a.0 + b.0) / 2.0, (a.1 + b.1) / 2.0);
    (center, distance(a, b) / 2.0)
}

/// Circumcircle of three points; collinear triples fall back to the
/// widest diameter pair, which already encloses the middle point.
fn from_three(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> RawCircle {
    let d = 2.0 * (a.0 * (b.1 - c.1) + b.0 * (c.1 - a.1) + c.0 * (a.1 - b.1));
    if d.abs() < 1e-12 {
        let candidates = [from_diameter(a, b), from_diameter(a, c), from_diameter(b, c)];
        return candidates
            .into_iter()
            .max_by(|x, y| x.1.total_cmp(&y.1))
            .unwrap_or(from_diameter(a, b));
    }

    let a2 = a.0 * a.0 + a.1 * a.1;
    let b2 = b.0 * b.0 + b.1 * b.1;
    let c2 = c.0 * c.0 + c.1 * c.1;
    let ux = (a2 * (b.1 - c.1) + b2 * (c.1 - a.1) + c2 * (a.1 - b.1)) / d;
    let uy = (a2 * (c.0 - b.0) + b2 * (a.0 - c.0) + c2 * (b.0 - a.0)) / d;
    let center = (ux, uy);

    let radius = distance(center, a)
        .max(distance(center, b))
        .max(distance(center, c));
    (center, radius)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_encloses(points: &[(f32, f32)], circle: &Circle) {
        for &(x, y) in points {
            let d = distance(
                (circle.center.0 as f64, circle.center.1 as f64),
                (x as f64, y as f64),
            );
            assert!(
                d <= circle.radius as f64 + 1e-3,
                "point ({x},{y}) at distance {d} outside radius {}",
                circle.radius
            );
        }
    }

    #[test]
    fn empty_input_yields_none() {
        assert!(min_enclosing_circle(&[]).is_none());
    }

    #[test]
    fn single_point_is_zero_radius() {
        let circle = min_enclosing_circle(&[(3.0, 4.0)]).unwrap();
        assert_eq!(circle.center, (3.0, 4.0));
        assert_eq!(circle.radius, 0.0);
    }

    #[test]
    fn two_points_span_a_diameter() {
        let circle = min_enclosing_circle(&[(0.0, 0.0), (10.0, 0.0)]).unwrap();
        assert!((circle.center.0 - 5.0).abs() < 1e-5);
        assert!((circle.center.1 - 0.0).abs() < 1e-5);
        assert!((circle.radius - 5.0).abs() < 1e-5);
    }

    #[test]
    fn collinear_points_use_widest_pair() {
        let points = [(0.0, 0.0), (4.0, 0.0), (10.0, 0.0)];
        let circle = min_enclosing_circle(&points).unwrap();
        assert!((circle.radius - 5.0).abs() < 1e-5);
        assert_encloses(&points, &circle);
    }

    #[test]
    fn square_corners_fit_on_circumcircle() {
        let points = [(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)];
        let circle = min_enclosing_circle(&points).unwrap();
        assert!((circle.center.0 - 5.0).abs() < 1e-4);
        assert!((circle.center.1 - 5.0).abs() < 1e-4);
        assert!((circle.radius - 50.0f32.sqrt()).abs() < 1e-4);
        assert_encloses(&points, &circle);
    }

    #[test]
    fn interior_points_do_not_grow_the_circle() {
        let points = [
            (0.0, 0.0),
            (10.0, 0.0),
            (5.0, 5.0),
            (4.0, 1.0),
            (6.0, 3.0),
        ];
        let circle = min_enclosing_circle(&points).unwrap();
        assert!((circle.radius - 5.0).abs() < 1e-4);
        assert_encloses(&points, &circle);
    }

    #[test]
    fn sampled_ring_is_enclosed_tightly() {
        let points: Vec<(f32, f32)> = (0..36)
            .map(|i| {
                let theta = i as f32 * std::f32::consts::PI / 18.0;
                (50.0 + 20.0 * theta.cos(), 50.0 + 20.0 * theta.sin())
            })
            .collect();
        let circle = min_enclosing_circle(&points).unwrap();
        assert!((circle.center.0 - 50.0).abs() < 0.1);
        assert!((circle.center.1 - 50.0).abs() < 0.1);
        assert!((circle.radius - 20.0).abs() < 0.1);
        assert_encloses(&points, &circle);
    }

    #[test]
    fn result_is_order_deterministic() {
        let points = [(1.0, 2.0), (8.0, 3.0), (4.0, 9.0), (0.0, 5.0)];
        let first = min_enclosing_circle(&points).unwrap();
        let second = min_enclosing_circle(&points).unwrap();
        assert_eq!(first, second);
    }
}
