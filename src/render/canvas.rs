//! Logical frame buffer holding one column per bar and one row per value unit

use image::{Rgba, RgbaImage};
use ndarray::Array2;

/// Colour role of a single logical pixel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Shade {
    /// Cleared surface
    #[default]
    Background,
    /// Bar with no highlight
    Bar,
    /// Bar at the primary highlight index
    Primary,
    /// Bar at the secondary highlight index
    Secondary,
}

impl Shade {
    /// RGBA colour used for image export
    pub const fn rgba(self) -> [u8; 4] {
        match self {
            Self::Background => [0, 0, 0, 255],
            Self::Bar => [255, 255, 255, 255],
            Self::Primary => [0, 255, 0, 255],
            Self::Secondary => [255, 0, 0, 255],
        }
    }

    /// Colour packed as `0x00RRGGBB` for the window surface
    pub const fn packed(self) -> u32 {
        let [r, g, b, _] = self.rgba();
        ((r as u32) << 16) | ((g as u32) << 8) | b as u32
    }
}

/// Frame buffer at the configured logical resolution, indexed `[row, col]`
#[derive(Clone, Debug)]
pub struct Canvas {
    pixels: Array2<Shade>,
}

impl Canvas {
    /// Create a cleared canvas
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            pixels: Array2::from_elem((height, width), Shade::Background),
        }
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.pixels.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.pixels.nrows()
    }

    /// Shade at a logical pixel, if it lies on the canvas
    pub fn shade_at(&self, row: usize, col: usize) -> Option<Shade> {
        self.pixels.get([row, col]).copied()
    }

    /// Clear the canvas and draw one bar per value
    ///
    /// Bar `k` occupies column `k` from the bottom row upward, `bars[k]` rows
    /// tall. The primary index is checked before the secondary one, so a
    /// coinciding pair is drawn as primary. Bars beyond the canvas edges are
    /// clipped.
    pub fn draw_bars(&mut self, bars: &[i32], primary: Option<usize>, secondary: Option<usize>) {
        self.pixels.fill(Shade::Background);

        let height = self.height();
        for (col, &value) in bars.iter().enumerate().take(self.width()) {
            let shade = if primary == Some(col) {
                Shade::Primary
            } else if secondary == Some(col) {
                Shade::Secondary
            } else {
                Shade::Bar
            };

            let bar_height = usize::try_from(value).unwrap_or(0).min(height);
            for row in (height - bar_height)..height {
                if let Some(pixel) = self.pixels.get_mut([row, col]) {
                    *pixel = shade;
                }
            }
        }
    }

    /// Nearest-neighbour scale the canvas into a row-major `0x00RRGGBB` buffer
    ///
    /// The target height is `target.len() / target_width`; trailing pixels of
    /// an incomplete row are left untouched.
    pub fn blit_scaled(&self, target: &mut [u32], target_width: usize) {
        if target_width == 0 {
            return;
        }

        let target_height = (target.len() / target_width).max(1);
        let (width, height) = (self.width(), self.height());
        let column_map: Vec<usize> = (0..target_width)
            .map(|x| x * width / target_width)
            .collect();

        for (y, line) in target.chunks_exact_mut(target_width).enumerate() {
            let row = y * height / target_height;
            for (pixel, &col) in line.iter_mut().zip(&column_map) {
                *pixel = self.shade_at(row, col).unwrap_or_default().packed();
            }
        }
    }

    /// Rasterise at logical resolution for image export
    pub fn to_rgba_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width() as u32, self.height() as u32, |x, y| {
            Rgba(
                self.shade_at(y as usize, x as usize)
                    .unwrap_or_default()
                    .rgba(),
            )
        })
    }
}
