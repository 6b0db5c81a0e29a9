//! Corner radii and paddings, in points.

use serde::{Deserialize, Serialize};

/// Horizontal and vertical insets around a component's label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    pub horizontal: f32,
    pub vertical: f32,
}

impl Padding {
    pub const fn new(horizontal: f32, vertical: f32) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

/// Numeric layout attributes used by the resolver.
///
/// Deserializes with every field optional; missing fields keep Orbit's
/// values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metrics {
    pub corner_radius: f32,
    pub checkbox_radius: f32,
    pub radio_radius: f32,
    pub button_padding: Padding,
    pub button_small_padding: Padding,
    pub link_padding: Padding,
    pub tag_padding: Padding,
    pub input_padding: Padding,
}

impl Metrics {
    pub const ORBIT: Metrics = Metrics {
        corner_radius: 6.0,
        checkbox_radius: 4.0,
        radio_radius: 10.0,
        button_padding: Padding::new(16.0, 12.0),
        button_small_padding: Padding::new(12.0, 6.0),
        link_padding: Padding::new(0.0, 6.0),
        tag_padding: Padding::new(8.0, 6.0),
        input_padding: Padding::new(12.0, 10.0),
    };
}

impl Default for Metrics {
    fn default() -> Self {
        Metrics::ORBIT
    }
}
