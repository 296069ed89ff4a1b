use image::GrayImage;
use imageproc::contours::{BorderType, find_contours};
use imageproc::point::Point;

/// An outer boundary traced from the mask, with its enclosed polygon area.
#[derive(Debug, Clone)]
pub struct TracedContour {
    pub points: Vec<(f32, f32)>,
    pub area: f64,
}

/// Trace all external boundaries in a binary mask and return the one
/// enclosing the largest area, or `None` for an all-background mask.
///
/// Holes are not separate contours: only `BorderType::Outer` borders
/// count. Ties on area keep the first contour in the tracer's fixed scan
/// order, so repeated runs select the same region.
pub fn largest_outer_contour(mask: &GrayImage) -> Option<TracedContour> {
    let mut best: Option<TracedContour> = None;
    for contour in find_contours::<i32>(mask) {
        if contour.border_type != BorderType::Outer {
            continue;
        }
        let area = polygon_area(&contour.points);
        if best.as_ref().is_none_or(|b| area > b.area) {
            best = Some(TracedContour {
                points: contour
                    .points
                    .iter()
                    .map(|p| (p.x as f32, p.y as f32))
                    .collect(),
                area,
            });
        }
    }
    best
}

/// Shoelace area of the ordered boundary polygon. Degenerate boundaries
/// (one or two points) enclose zero area.
fn polygon_area(points: &[Point<i32>]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut twice_area: i64 = 0;
    for i in 0..points.len() {
        let p = points[i];
        let q = points[(i + 1) % points.len()];
        twice_area += p.x as i64 * q.y as i64 - q.x as i64 * p.y as i64;
    }
    twice_area.unsigned_abs() as f64 / 2.0
}
