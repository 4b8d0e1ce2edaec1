//! Pixel canvas for software painting
//!
//! Provides a small, safe API over an ARGB pixel buffer so presentation code
//! never indexes the buffer directly. Out-of-bounds drawing is clipped.

use crate::model::Rect;

/// Blend a foreground color onto a background color using alpha compositing.
///
/// Both colors are in ARGB format (0xAARRGGBB). Returns an opaque color.
#[inline]
pub fn blend_colors(bg: u32, fg: u32, alpha: f32) -> u32 {
    let bg_r = ((bg >> 16) & 0xFF) as f32;
    let bg_g = ((bg >> 8) & 0xFF) as f32;
    let bg_b = (bg & 0xFF) as f32;

    let fg_r = ((fg >> 16) & 0xFF) as f32;
    let fg_g = ((fg >> 8) & 0xFF) as f32;
    let fg_b = (fg & 0xFF) as f32;

    let final_r = (bg_r * (1.0 - alpha) + fg_r * alpha) as u32;
    let final_g = (bg_g * (1.0 - alpha) + fg_g * alpha) as u32;
    let final_b = (bg_b * (1.0 - alpha) + fg_b * alpha) as u32;

    0xFF000000 | (final_r << 16) | (final_g << 8) | final_b
}

/// A pixel buffer wrapper providing clipped drawing primitives.
pub struct Canvas<'a> {
    buffer: &'a mut [u32],
    width: usize,
    height: usize,
}

impl<'a> Canvas<'a> {
    /// Wrap a buffer. If it is smaller than width*height, the height is
    /// reduced to fit.
    pub fn new(buffer: &'a mut [u32], width: usize, height: usize) -> Self {
        let height = if width > 0 {
            height.min(buffer.len() / width)
        } else {
            0
        };
        Self {
            buffer,
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Clear the entire buffer with a solid color
    #[inline]
    pub fn clear(&mut self, color: u32) {
        self.buffer.fill(color);
    }

    /// Pixel span covered by `rect`, clipped to the canvas
    fn span(&self, rect: Rect) -> (usize, usize, usize, usize) {
        let x0 = (rect.x.max(0.0) as usize).min(self.width);
        let y0 = (rect.y.max(0.0) as usize).min(self.height);
        let x1 = ((rect.x + rect.width).max(0.0) as usize).min(self.width);
        let y1 = ((rect.y + rect.height).max(0.0) as usize).min(self.height);
        (x0, y0, x1.max(x0), y1.max(y0))
    }

    /// Fill a rectangle with a solid color
    pub fn fill_rect(&mut self, rect: Rect, color: u32) {
        let (x0, y0, x1, y1) = self.span(rect);
        for y in y0..y1 {
            let row = y * self.width;
            self.buffer[row + x0..row + x1].fill(color);
        }
    }

    /// Fill a rectangle with rounded corners, anti-aliased at the corners
    pub fn fill_rounded_rect(&mut self, rect: Rect, radius: f64, color: u32) {
        let radius = radius.clamp(0.0, rect.width.min(rect.height) / 2.0);
        if radius < 0.5 {
            return self.fill_rect(rect, color);
        }

        let (x0, y0, x1, y1) = self.span(rect);
        let right = rect.x + rect.width;
        let bottom = rect.y + rect.height;

        for y in y0..y1 {
            let py = y as f64 + 0.5;
            let row = y * self.width;
            for x in x0..x1 {
                let px = x as f64 + 0.5;
                // Distance past the nearest corner circle, 0 inside the straight edges
                let dx = (rect.x + radius - px).max(px - (right - radius)).max(0.0);
                let dy = (rect.y + radius - py).max(py - (bottom - radius)).max(0.0);
                let coverage = (radius + 0.5 - dx.hypot(dy)).clamp(0.0, 1.0);
                if coverage >= 1.0 {
                    self.buffer[row + x] = color | 0xFF000000;
                } else if coverage > 0.0 {
                    self.buffer[row + x] =
                        blend_colors(self.buffer[row + x], color, coverage as f32);
                }
            }
        }
    }

    /// Fill a rectangle with alpha blending (color is ARGB format)
    pub fn fill_rect_blended(&mut self, rect: Rect, color: u32) {
        let alpha = ((color >> 24) & 0xFF) as f32 / 255.0;
        if alpha <= 0.0 {
            return;
        }
        if alpha >= 1.0 {
            return self.fill_rect(rect, color);
        }

        let (x0, y0, x1, y1) = self.span(rect);
        for y in y0..y1 {
            let row = y * self.width;
            for x in x0..x1 {
                let idx = row + x;
                self.buffer[idx] = blend_colors(self.buffer[idx], color, alpha);
            }
        }
    }

    /// Get a single pixel (returns 0 if out of bounds)
    #[inline]
    pub fn get_pixel(&self, x: usize, y: usize) -> u32 {
        if x < self.width && y < self.height {
            self.buffer[y * self.width + x]
        } else {
            0
        }
    }
}
