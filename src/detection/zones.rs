//! Garment zone geometry
//!
//! Zones combine fixed vertical bands (top, bottom, shoes) with the
//! horizontal extent of the body column. Each zone carries a sampling
//! rectangle inset vertically so samples do not bleed across garment
//! boundaries. No pixels are read here beyond the optional body detection.

use serde::{Deserialize, Serialize};

use super::body::{BodyColumn, BodyColumnDetector};
use crate::config::{Band, BodyDetectionConfig, ZoneConfig};
use crate::pixel_buffer::{PixelBuffer, Rect};
use crate::GarmentSet;

/// A garment region of the image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub label: String,
    /// Inset region actually sampled
    pub sampling_rect: Rect,
}

impl Zone {
    /// Full visual extent, used for overlays
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// Options for zone detection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneOptions {
    /// Narrow the zones to the detected body column
    pub smart_crop: bool,
}

impl Default for ZoneOptions {
    fn default() -> Self {
        Self { smart_crop: true }
    }
}

/// Computes top/bottom/shoes zones for an image
#[derive(Debug, Clone, Default)]
pub struct ZoneDetector {
    config: ZoneConfig,
    body_detector: BodyColumnDetector,
}

impl ZoneDetector {
    /// Create a zone detector with default parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a zone detector with custom layout and body detection parameters
    pub fn with_config(config: ZoneConfig, body: BodyDetectionConfig) -> Self {
        Self {
            config,
            body_detector: BodyColumnDetector::with_config(body),
        }
    }

    /// Zones for the whole buffer
    pub fn detect(&self, buffer: &PixelBuffer, options: ZoneOptions) -> GarmentSet<Zone> {
        let column = if options.smart_crop {
            self.body_detector.detect(buffer)
        } else {
            None
        };
        self.zones_for(buffer.width(), buffer.height(), column)
    }

    /// Zones for an image of the given size and an optional body column
    pub fn zones_for(&self, width: u32, height: u32, column: Option<BodyColumn>) -> GarmentSet<Zone> {
        let column = column.unwrap_or_else(|| self.center_column(width));
        log::debug!(
            "Zone columns x={} width={} for {}x{} image",
            column.x,
            column.width,
            width,
            height
        );

        GarmentSet {
            top: self.zone("top", self.config.top, height, column),
            bottom: self.zone("bottom", self.config.bottom, height, column),
            shoes: self.zone("shoes", self.config.shoes, height, column),
        }
    }

    fn center_column(&self, width: u32) -> BodyColumn {
        let ratio = self.config.center_fallback_ratio.clamp(0.0, 1.0);
        let column_width = (width as f64 * ratio).floor() as u32;
        BodyColumn {
            x: (width - column_width) / 2,
            width: column_width,
        }
    }

    fn zone(&self, label: &str, band: Band, height: u32, column: BodyColumn) -> Zone {
        let y = (height as f64 * band.start).floor() as u32;
        let bottom = (height as f64 * band.end).floor() as u32;
        let zone_height = bottom.saturating_sub(y);
        let inset = (zone_height as f64 * self.config.inset_ratio).floor() as u32;

        Zone {
            x: column.x,
            y,
            width: column.width,
            height: zone_height,
            label: label.to_string(),
            sampling_rect: Rect::new(
                column.x,
                y + inset,
                column.width,
                zone_height.saturating_sub(2 * inset),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn test_fixed_bands_with_center_fallback() {
        let zones = ZoneDetector::new().zones_for(200, 1000, None);

        assert_eq!(zones.top.rect(), Rect::new(40, 80, 120, 340));
        assert_eq!(zones.top.sampling_rect, Rect::new(40, 114, 120, 272));

        assert_eq!(zones.bottom.rect(), Rect::new(40, 420, 120, 360));
        assert_eq!(zones.bottom.sampling_rect, Rect::new(40, 456, 120, 288));

        assert_eq!(zones.shoes.rect(), Rect::new(40, 780, 120, 190));
        assert_eq!(zones.shoes.sampling_rect, Rect::new(40, 799, 120, 152));
        assert_eq!(zones.shoes.label, "shoes");
    }

    #[test]
    fn test_body_column_sets_horizontal_bounds() {
        let column = BodyColumn { x: 12, width: 30 };
        let zones = ZoneDetector::new().zones_for(100, 100, Some(column));

        for zone in zones.iter() {
            assert_eq!(zone.x, 12);
            assert_eq!(zone.width, 30);
            assert_eq!(zone.sampling_rect.x, 12);
            assert_eq!(zone.sampling_rect.width, 30);
        }
    }

    #[test]
    fn test_sampling_rect_inside_zone() {
        let zones = ZoneDetector::new().zones_for(640, 480, None);
        for zone in zones.iter() {
            let rect = zone.sampling_rect;
            assert!(rect.y >= zone.y);
            assert!(rect.y + rect.height <= zone.y + zone.height);
        }
    }

    #[test]
    fn test_smart_crop_disabled_uses_center() {
        let image = RgbaImage::from_fn(100, 100, |x, _| {
            if x < 30 && (x / 2) % 2 == 0 {
                Rgba([0, 0, 0, 255])
            } else {
                Rgba([255, 255, 255, 255])
            }
        });
        let buffer = PixelBuffer::from_image(&image);
        let detector = ZoneDetector::new();

        let centered = detector.detect(&buffer, ZoneOptions { smart_crop: false });
        assert_eq!(centered.top.x, 20);
        assert_eq!(centered.top.width, 60);

        let smart = detector.detect(&buffer, ZoneOptions::default());
        assert_eq!(smart.top.x, 0);
    }

    #[test]
    fn test_center_fallback_ratio_is_clamped() {
        let config = ZoneConfig {
            center_fallback_ratio: 1.5,
            ..ZoneConfig::default()
        };
        let detector = ZoneDetector::with_config(config, BodyDetectionConfig::default());

        let zones = detector.zones_for(200, 100, None);
        assert_eq!(zones.top.x, 0);
        assert_eq!(zones.top.width, 200);
    }
}
