//! Body column detection from vertical edge density
//!
//! A person standing in front of a plain background produces strong
//! horizontal luminance changes (garment edges, folds, arms) in the middle
//! of the frame. The detector averages luminance per column across a
//! horizontal strip, takes the central-difference gradient and slides a
//! fixed window over it; the window with the largest total gradient is the
//! body column.
//!
//! Weak evidence yields no detection. Callers fall back to a centered crop,
//! which is safer than cropping the subject out.

use serde::{Deserialize, Serialize};

use crate::config::BodyDetectionConfig;
use crate::constants::body::LUMA_WEIGHTS;
use crate::pixel_buffer::PixelBuffer;

/// Horizontal extent of the detected body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodyColumn {
    pub x: u32,
    pub width: u32,
}

/// Edge-density body column detector
#[derive(Debug, Clone, Default)]
pub struct BodyColumnDetector {
    config: BodyDetectionConfig,
}

impl BodyColumnDetector {
    /// Create a detector with default parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detector with custom parameters
    pub fn with_config(config: BodyDetectionConfig) -> Self {
        Self { config }
    }

    /// Locate the body column, or `None` when the evidence is inconclusive
    pub fn detect(&self, buffer: &PixelBuffer) -> Option<BodyColumn> {
        let width = buffer.width();
        let height = buffer.height();

        let strip_top = (height as f64 * self.config.strip_start).floor() as u32;
        let strip_bottom = (height as f64 * self.config.strip_end).floor() as u32;
        let strip_height = strip_bottom.saturating_sub(strip_top);

        if strip_height < self.config.min_strip_height || width < self.config.min_width {
            log::debug!(
                "Body detection skipped: {}x{} image, strip height {}",
                width,
                height,
                strip_height
            );
            return None;
        }

        let luminance = self.column_luminance(buffer, strip_top, strip_bottom);
        let gradient = gradient_magnitude(&luminance);

        let window = ((width as f64 * self.config.window_ratio).floor() as usize).max(1);
        let (start, sum) = max_window(&gradient, window);
        let strength = sum / window as f64;

        if strength < self.config.min_edge_strength {
            log::debug!(
                "No clear body column: mean edge strength {:.2} below {:.2}",
                strength,
                self.config.min_edge_strength
            );
            return None;
        }

        let padding = (width as f64 * self.config.padding_ratio).floor() as usize;
        let left = start.saturating_sub(padding);
        let right = (start + window + padding).min(width as usize);

        let column = BodyColumn {
            x: left as u32,
            width: (right - left) as u32,
        };
        log::debug!(
            "Body column at x={} width={} (edge strength {:.2})",
            column.x,
            column.width,
            strength
        );
        Some(column)
    }

    /// Mean luma per column over every `row_stride`th row of the strip
    fn column_luminance(&self, buffer: &PixelBuffer, top: u32, bottom: u32) -> Vec<f64> {
        let rows: Vec<u32> = (top..bottom)
            .step_by(self.config.row_stride.max(1) as usize)
            .collect();

        (0..buffer.width())
            .map(|x| {
                let total: f64 = rows
                    .iter()
                    .filter_map(|&y| buffer.pixel(x, y))
                    .map(|[r, g, b, _]| {
                        LUMA_WEIGHTS[0] * r as f64
                            + LUMA_WEIGHTS[1] * g as f64
                            + LUMA_WEIGHTS[2] * b as f64
                    })
                    .sum();
                total / rows.len().max(1) as f64
            })
            .collect()
    }
}

/// Central-difference gradient magnitude, zero at both borders
fn gradient_magnitude(luminance: &[f64]) -> Vec<f64> {
    let mut gradient = vec![0.0; luminance.len()];
    for x in 1..luminance.len().saturating_sub(1) {
        gradient[x] = (luminance[x + 1] - luminance[x - 1]).abs();
    }
    gradient
}

/// Start and sum of the first fixed-size window with the largest sum
fn max_window(values: &[f64], window: usize) -> (usize, f64) {
    let window = window.min(values.len());
    if window == 0 {
        return (0, 0.0);
    }

    let mut sum: f64 = values[..window].iter().sum();
    let mut best = (0, sum);

    for start in 1..=values.len() - window {
        sum += values[start + window - 1] - values[start - 1];
        if sum > best.1 {
            best = (start, sum);
        }
    }
    best
}
