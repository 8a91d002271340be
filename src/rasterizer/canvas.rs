//! Pixel buffer in canvas-centered coordinates
//!
//! All drawing goes through `put_pixel`; the centered→raster mapping is
//! computed here and nowhere else.

use std::path::Path;

use super::types::Color;
use crate::error::Result;

/// Flat row-major buffer of packed RGBA pixels
#[derive(Debug, Clone)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::BLACK.to_packed(); width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Packed pixels in raster order (top-to-bottom, left-to-right)
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color.to_packed());
    }

    /// Linear index for a centered coordinate, `None` if off the canvas
    pub fn raster_index(&self, x: i32, y: i32) -> Option<usize> {
        let w = self.width as i64;
        let h = self.height as i64;
        let raster_x = x as i64 + w / 2;
        let raster_y = h / 2 - y as i64 - 1;
        if raster_x < 0 || raster_x >= w || raster_y < 0 || raster_y >= h {
            return None;
        }
        Some((raster_y * w + raster_x) as usize)
    }

    /// Centered x values that land on the canvas, inclusive
    pub fn x_bounds(&self) -> (i32, i32) {
        let w = self.width as i64;
        ((-(w / 2)) as i32, (w - w / 2 - 1) as i32)
    }

    /// Centered y values that land on the canvas, inclusive
    pub fn y_bounds(&self) -> (i32, i32) {
        let h = self.height as i64;
        ((h / 2 - h) as i32, (h / 2 - 1) as i32)
    }

    /// Write one pixel; off-canvas writes are dropped
    pub fn put_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(idx) = self.raster_index(x, y) {
            self.pixels[idx] = color.to_packed();
        }
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.raster_index(x, y).map(|idx| Color::from_packed(self.pixels[idx]))
    }

    /// RGBA8 bytes for texture upload
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| p.to_le_bytes()).collect()
    }

    /// Write the buffer to a PNG file
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let img = image::RgbaImage::from_raw(self.width as u32, self.height as u32, self.to_rgba8())
            .ok_or_else(|| {
                std::io::Error::new(std::io::ErrorKind::InvalidData, "pixel buffer size mismatch")
            })?;
        img.save(path)?;
        log::info!("Saved frame to {}", path.display());
        Ok(())
    }
}
