pub mod circle;
pub mod contours;
pub mod hsv;
pub mod mask;

use image::RgbImage;
use log::{debug, info, warn};

use crate::models::{Detection, DetectionTarget};

/// Per-target detection orchestrator: HSV mask, largest outer contour,
/// minimal enclosing circle.
pub struct DetectionPipeline {
    targets: Vec<DetectionTarget>,
}

impl DetectionPipeline {
    pub fn new(targets: Vec<DetectionTarget>) -> Self {
        Self { targets }
    }

    pub fn targets(&self) -> &[DetectionTarget] {
        &self.targets
    }

    /// Run every configured target over the image, in configuration order.
    ///
    /// A target whose color is absent is a miss, not an error: it is
    /// logged and simply contributes no result downstream.
    pub fn detect(&self, img: &RgbImage) -> Vec<Detection> {
        let hsv = hsv::to_hsv(img);
        let mut results = Vec::new();

        for target in &self.targets {
            let mask = mask::build_mask(&hsv, &target.ranges);

            let Some(contour) = contours::largest_outer_contour(&mask) else {
                warn!("target '{}' not detected", target.name);
                continue;
            };
            debug!(
                "target '{}': largest contour has {} boundary points, area {:.1}",
                target.name,
                contour.points.len(),
                contour.area
            );

            let Some(circle) = circle::min_enclosing_circle(&contour.points) else {
                warn!("target '{}': contour produced no enclosing circle", target.name);
                continue;
            };

            info!(
                "target '{}' detected at ({:.1}, {:.1}), radius {:.1}",
                target.name, circle.center.0, circle.center.1, circle.radius
            );
            results.push(Detection {
                target: target.name.clone(),
                center: circle.center,
                radius: circle.radius,
            });
        }

        results
    }
}
