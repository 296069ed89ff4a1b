use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::models::{ColorRange, DetectionTarget};

/// Visual constants used by the annotator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotationStyle {
    /// Extra pixels added to the detected radius when drawing the circle.
    pub draw_margin_px: i32,
    /// Smallest circle radius ever drawn, so tiny detections stay visible.
    pub min_visible_radius_px: i32,
    /// Pixel height of label text.
    pub label_font_scale: f32,
}

impl Default for AnnotationStyle {
    fn default() -> Self {
        Self {
            draw_margin_px: 10,
            min_visible_radius_px: 3,
            label_font_scale: 16.0,
        }
    }
}

/// Complete run configuration: which targets to look for and how to draw
/// them. Can be loaded from a JSON file or built from the defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub targets: Vec<DetectionTarget>,
    #[serde(default)]
    pub style: AnnotationStyle,
}

impl PipelineConfig {
    /// The built-in earth/mars configuration. Mars needs two ranges
    /// because red wraps the hue circle.
    pub fn builtin() -> Self {
        Self {
            targets: vec![
                DetectionTarget::new(
                    "earth",
                    [0, 0, 255],
                    vec![ColorRange::new([90, 30, 100], [140, 255, 255])],
                ),
                DetectionTarget::new(
                    "mars",
                    [255, 0, 0],
                    vec![
                        ColorRange::new([0, 100, 100], [10, 255, 255]),
                        ColorRange::new([170, 100, 100], [179, 255, 255]),
                    ],
                ),
            ],
            style: AnnotationStyle::default(),
        }
    }

    pub fn from_json_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config {}: {}", path.display(), e))?;
        let config: Self = serde_json::from_str(&text)
            .map_err(|e| anyhow::anyhow!("failed to parse config {}: {}", path.display(), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Checked once at startup; a bad range or an empty target list is a
    /// configuration error, not a per-pixel surprise later.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.targets.is_empty() {
            anyhow::bail!("configuration has no detection targets");
        }
        for target in &self.targets {
            target.validate()?;
        }
        Ok(())
    }
}
