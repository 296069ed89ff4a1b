use crate::models::{Detection, DistanceRecord};

/// Distance between the first two detections with distinct names.
///
/// Pairing is by name rather than list position, so a reordering of the
/// result list cannot silently pair the wrong objects. Fewer than two
/// distinct names means no record.
pub fn between_first_pair(results: &[Detection]) -> Option<DistanceRecord> {
    let first = results.first()?;
    let second = results.iter().find(|d| d.target != first.target)?;

    let dx = (second.center.0 - first.center.0) as f64;
    let dy = (second.center.1 - first.center.1) as f64;
    let distance = (dx * dx + dy * dy).sqrt() as f32;

    Some(DistanceRecord {
        from: first.target.clone(),
        to: second.target.clone(),
        distance,
    })
}
