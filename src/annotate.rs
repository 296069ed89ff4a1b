use ab_glyph::FontRef;
use anyhow::Context;
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_hollow_circle_mut, draw_line_segment_mut, draw_text_mut};

use crate::config::AnnotationStyle;
use crate::models::{Detection, DetectionTarget, DistanceRecord};

const FONT_BYTES: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");

const LABEL_OFFSET_PX: f32 = 18.0;
const ARROW_LENGTH_PX: f32 = 22.0;
const ARROW_HEAD_PX: f32 = 6.0;
const DISTANCE_COLOR: Rgb<u8> = Rgb([255, 255, 255]);

/// Draws detection and distance overlays onto a copy of the source image.
///
/// All drawing goes through `render`, which applies detections in target
/// order and distance records afterwards; later draws may overlap earlier
/// ones, so the order is part of the output contract.
pub struct Annotator {
    style: AnnotationStyle,
    font: FontRef<'static>,
}

impl Annotator {
    pub fn new(style: AnnotationStyle) -> anyhow::Result<Self> {
        let font = FontRef::try_from_slice(FONT_BYTES).context("bundled font failed to parse")?;
        Ok(Self { style, font })
    }

    /// Copy the source once, then draw every overlay into the copy.
    pub fn render(
        &self,
        source: &RgbImage,
        targets: &[DetectionTarget],
        detections: &[Detection],
        distances: &[DistanceRecord],
    ) -> RgbImage {
        let mut canvas = source.clone();

        for detection in detections {
            let color = targets
                .iter()
                .find(|t| t.name == detection.target)
                .map(|t| Rgb(t.display_color))
                .unwrap_or(DISTANCE_COLOR);
            self.draw_detection(&mut canvas, detection, color);
        }
        for record in distances {
            self.draw_distance(&mut canvas, record, detections);
        }

        canvas
    }

    fn draw_detection(&self, canvas: &mut RgbImage, detection: &Detection, color: Rgb<u8>) {
        let (cx, cy) = detection.center;
        let radius = (detection.radius.round() as i32 + self.style.draw_margin_px)
            .max(self.style.min_visible_radius_px);

        draw_hollow_circle_mut(canvas, (cx.round() as i32, cy.round() as i32), radius, color);

        // Arrow comes in from the upper right, tip on the circle edge.
        let r = radius as f32;
        let tip = (cx + r * 0.707, cy - r * 0.707);
        let tail = (tip.0 + ARROW_LENGTH_PX, tip.1 - ARROW_LENGTH_PX);
        draw_arrow_mut(canvas, tail, tip, color);

        draw_text_mut(
            canvas,
            color,
            (tail.0 + 4.0).round() as i32,
            (tail.1 - LABEL_OFFSET_PX).round() as i32,
            self.style.label_font_scale,
            &self.font,
            &detection.target,
        );
    }

    fn draw_distance(
        &self,
        canvas: &mut RgbImage,
        record: &DistanceRecord,
        detections: &[Detection],
    ) {
        let endpoints = (
            detections.iter().find(|d| d.target == record.from),
            detections.iter().find(|d| d.target == record.to),
        );
        let (Some(from), Some(to)) = endpoints else {
            log::warn!(
                "distance record {} references a detection that is not present",
                record.label()
            );
            return;
        };

        draw_line_segment_mut(canvas, from.center, to.center, DISTANCE_COLOR);

        let mid_x = (from.center.0 + to.center.0) / 2.0;
        let mid_y = (from.center.1 + to.center.1) / 2.0;
        draw_text_mut(
            canvas,
            DISTANCE_COLOR,
            mid_x.round() as i32,
            (mid_y - 10.0).round() as i32,
            self.style.label_font_scale,
            &self.font,
            &format!("{:.1} px", record.distance),
        );
    }
}

/// Straight shaft plus two head strokes angled back from the tip.
fn draw_arrow_mut(canvas: &mut RgbImage, tail: (f32, f32), tip: (f32, f32), color: Rgb<u8>) {
    draw_line_segment_mut(canvas, tail, tip, color);

    let angle = (tip.1 - tail.1).atan2(tip.0 - tail.0);
    for wing in [-0.5f32, 0.5f32] {
        let back = angle + std::f32::consts::PI + wing;
        let end = (
            tip.0 + ARROW_HEAD_PX * back.cos(),
            tip.1 + ARROW_HEAD_PX * back.sin(),
        );
        draw_line_segment_mut(canvas, tip, end, color);
    }
}
