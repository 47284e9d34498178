//! Typed RGBA pixel buffer and region sampling
//!
//! The capture layer hands over raw RGBA bytes. `PixelBuffer` wraps them with
//! their geometry so every pixel access is bounds-checked, and
//! `sample_region` walks a rectangle at a fixed stride, skipping transparent
//! pixels.
//!
//! ```rust
//! use outfit_colors::pixel_buffer::{PixelBuffer, Rect};
//! use image::{Rgba, RgbaImage};
//!
//! let image = RgbaImage::from_pixel(8, 8, Rgba([200, 30, 30, 255]));
//! let buffer = PixelBuffer::from_image(&image);
//! let pixels = buffer.sample_region(Rect::new(0, 0, 8, 8), 2, 128);
//! assert_eq!(pixels.len(), 16);
//! ```

use image::RgbaImage;
use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::{AnalysisError, Result};

const BYTES_PER_PIXEL: usize = 4;

/// Axis-aligned rectangle in pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Intersection with a `width` x `height` image; may be empty
    pub fn clamp_to(&self, width: u32, height: u32) -> Rect {
        let x = self.x.min(width);
        let y = self.y.min(height);
        let right = self.x.saturating_add(self.width).min(width);
        let bottom = self.y.saturating_add(self.height).min(height);
        Rect::new(x, y, right - x, bottom - y)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// Borrowed RGBA8 pixel data with explicit geometry
#[derive(Debug, Clone, Copy)]
pub struct PixelBuffer<'a> {
    data: &'a [u8],
    width: u32,
    height: u32,
    /// Bytes per row
    stride: usize,
}

impl<'a> PixelBuffer<'a> {
    /// Wrap tightly packed RGBA rows
    pub fn new(data: &'a [u8], width: u32, height: u32) -> Result<Self> {
        Self::with_stride(data, width, height, width as usize * BYTES_PER_PIXEL)
    }

    /// Wrap RGBA rows that may carry padding at the end of each row
    pub fn with_stride(data: &'a [u8], width: u32, height: u32, stride: usize) -> Result<Self> {
        let row_bytes = width as usize * BYTES_PER_PIXEL;
        if stride < row_bytes {
            return Err(AnalysisError::invalid_buffer(format!(
                "row stride {} is smaller than {} bytes for {} pixels",
                stride, row_bytes, width
            )));
        }

        // The last row does not need its padding
        let required = match height {
            0 => 0,
            h => stride * (h as usize - 1) + row_bytes,
        };
        if data.len() < required {
            return Err(AnalysisError::invalid_buffer(format!(
                "{} bytes provided, {}x{} RGBA needs {}",
                data.len(),
                width,
                height,
                required
            )));
        }

        Ok(Self {
            data,
            width,
            height,
            stride,
        })
    }

    /// Borrow the pixels of a decoded image
    pub fn from_image(image: &'a RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            data: image.as_raw(),
            width,
            height,
            stride: width as usize * BYTES_PER_PIXEL,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    /// RGBA value at (x, y), `None` outside the image
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = y as usize * self.stride + x as usize * BYTES_PER_PIXEL;
        let bytes = self.data.get(offset..offset + BYTES_PER_PIXEL)?;
        Some([bytes[0], bytes[1], bytes[2], bytes[3]])
    }

    /// Opaque pixels of `rect`, visiting every `stride`th column and row
    ///
    /// The rectangle is clamped to the image; pixels with alpha below
    /// `min_alpha` are skipped.
    pub fn sample_region(&self, rect: Rect, stride: u32, min_alpha: u8) -> Vec<Rgb> {
        let rect = rect.clamp_to(self.width, self.height);
        let step = stride.max(1) as usize;

        let mut pixels = Vec::with_capacity((rect.area() / (step * step) as u64) as usize + 1);
        for y in (rect.y..rect.y + rect.height).step_by(step) {
            for x in (rect.x..rect.x + rect.width).step_by(step) {
                match self.pixel(x, y) {
                    Some([r, g, b, a]) if a >= min_alpha => pixels.push(Rgb::new(r, g, b)),
                    _ => {}
                }
            }
        }
        pixels
    }
}
