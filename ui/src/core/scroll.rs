//! Page scroll geometry.

use serde::Deserialize;

/// Snapshot of the page's vertical scroll state, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

impl ScrollMetrics {
    /// Pixels left between the bottom of the viewport and the end of the document.
    pub fn distance_to_bottom(&self) -> f64 {
        (self.document_height - (self.scroll_y + self.viewport_height)).max(0.0)
    }

    /// Inclusive: exactly `threshold_px` away still counts as near.
    pub fn is_near_bottom(&self, threshold_px: f64) -> bool {
        self.distance_to_bottom() <= threshold_px
    }
}
