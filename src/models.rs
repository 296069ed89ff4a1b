use serde::{Deserialize, Serialize};

/// Inclusive lower/upper bounds in HSV space.
///
/// Hue lives in the 0-179 domain (degrees halved); saturation and value
/// are full bytes. Colors that wrap the hue circle (red) are expressed as
/// two disjoint ranges on one target, never as a single wrapping range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRange {
    pub lower: [u8; 3],
    pub upper: [u8; 3],
}

pub const HUE_MAX: u8 = 179;

impl ColorRange {
    pub fn new(lower: [u8; 3], upper: [u8; 3]) -> Self {
        Self { lower, upper }
    }

    /// True iff all three channels fall within the inclusive bounds.
    pub fn contains(&self, hsv: [u8; 3]) -> bool {
        hsv[0] >= self.lower[0]
            && hsv[0] <= self.upper[0]
            && hsv[1] >= self.lower[1]
            && hsv[1] <= self.upper[1]
            && hsv[2] >= self.lower[2]
            && hsv[2] <= self.upper[2]
    }

    /// Checks per-channel ordering and the hue domain.
    pub fn validate(&self) -> anyhow::Result<()> {
        for i in 0..3 {
            if self.lower[i] > self.upper[i] {
                anyhow::bail!(
                    "channel {} lower bound {} exceeds upper bound {}",
                    i,
                    self.lower[i],
                    self.upper[i]
                );
            }
        }
        if self.upper[0] > HUE_MAX {
            anyhow::bail!("hue upper bound {} outside 0-{}", self.upper[0], HUE_MAX);
        }
        Ok(())
    }
}

/// A configured object of interest: a name, the RGB color used when
/// drawing its annotations, and one or more HSV ranges that select it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionTarget {
    pub name: String,
    pub display_color: [u8; 3],
    pub ranges: Vec<ColorRange>,
}

impl DetectionTarget {
    pub fn new(name: impl Into<String>, display_color: [u8; 3], ranges: Vec<ColorRange>) -> Self {
        Self {
            name: name.into(),
            display_color,
            ranges,
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.ranges.is_empty() {
            anyhow::bail!("target '{}' has no color ranges", self.name);
        }
        for range in &self.ranges {
            range
                .validate()
                .map_err(|e| anyhow::anyhow!("target '{}': {}", self.name, e))?;
        }
        Ok(())
    }
}

/// One located object: the target it matched and the minimal enclosing
/// circle of its largest contour.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    pub target: String,
    pub center: (f32, f32),
    pub radius: f32,
}

/// Euclidean distance between the centers of two named detections.
/// Computed once; symmetric by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceRecord {
    pub from: String,
    pub to: String,
    pub distance: f32,
}

impl DistanceRecord {
    /// Row label used in the exported tables, e.g. `earth_mars_distance`.
    pub fn label(&self) -> String {
        format!("{}_{}_distance", self.from, self.to)
    }
}
