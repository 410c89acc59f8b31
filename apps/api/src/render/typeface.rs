//! Glyph measurement and rasterisation for a single font at a fixed pixel size.
//!
//! Text is positioned by its alphabetic baseline, matching how the notice
//! templates specify their anchor coordinates.

use std::path::Path;

use fontdue::{Font, FontSettings};
use image::{Rgba, RgbaImage};

use crate::layout::Measure;
use crate::render::RenderError;

/// A font usable for both wrapping decisions and drawing.
pub trait Typeface: Measure + Send + Sync {
    /// Draws `text` with its baseline starting at (`x`, `baseline_y`).
    /// Pixels outside `target` are clipped.
    fn draw(&self, target: &mut RgbaImage, text: &str, x: f32, baseline_y: f32, color: Rgba<u8>);
}

/// `fontdue`-backed typeface loaded from a TrueType/OpenType file.
pub struct FontTypeface {
    font: Font,
    px: f32,
}

impl FontTypeface {
    pub fn from_bytes(bytes: &[u8], px: f32) -> Result<Self, String> {
        let font = Font::from_bytes(bytes, FontSettings::default()).map_err(str::to_string)?;
        Ok(Self { font, px })
    }

    /// Reads and parses the font at `path`.
    pub fn from_file(path: &Path, px: f32) -> Result<Self, RenderError> {
        let bytes = std::fs::read(path).map_err(|e| RenderError::Font {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_bytes(&bytes, px).map_err(|reason| RenderError::Font {
            path: path.to_path_buf(),
            reason,
        })
    }

    pub fn px(&self) -> f32 {
        self.px
    }

    fn kern(&self, prev: Option<char>, c: char) -> f32 {
        prev.and_then(|p| self.font.horizontal_kern(p, c, self.px))
            .unwrap_or(0.0)
    }
}

impl Measure for FontTypeface {
    fn measure(&self, text: &str) -> f32 {
        let mut width = 0.0_f32;
        let mut prev = None;
        for c in text.chars() {
            width += self.kern(prev, c) + self.font.metrics(c, self.px).advance_width;
            prev = Some(c);
        }
        width
    }
}

impl Typeface for FontTypeface {
    fn draw(&self, target: &mut RgbaImage, text: &str, x: f32, baseline_y: f32, color: Rgba<u8>) {
        let mut pen_x = x;
        let mut prev = None;

        for c in text.chars() {
            pen_x += self.kern(prev, c);
            let (metrics, coverage) = self.font.rasterize(c, self.px);

            // fontdue bitmaps are top-down; ymin is the offset of the bitmap's bottom edge.
            let left = pen_x.round() as i64 + metrics.xmin as i64;
            let top = baseline_y.round() as i64 - metrics.ymin as i64 - metrics.height as i64;

            for row in 0..metrics.height {
                for col in 0..metrics.width {
                    let alpha = coverage[row * metrics.width + col];
                    if alpha == 0 {
                        continue;
                    }
                    put_blended(target, left + col as i64, top + row as i64, color, alpha);
                }
            }

            pen_x += metrics.advance_width;
            prev = Some(c);
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Pixel helpers
// ────────────────────────────────────────────────────────────────────────────

/// Alpha-blends `color` at `coverage` onto the pixel at (x, y), ignoring
/// coordinates outside the image.
pub(crate) fn put_blended(target: &mut RgbaImage, x: i64, y: i64, color: Rgba<u8>, coverage: u8) {
    if x < 0 || y < 0 || x >= target.width() as i64 || y >= target.height() as i64 {
        return;
    }
    let pixel = target.get_pixel_mut(x as u32, y as u32);
    blend(pixel, color, coverage);
}

/// Source-over compositing of `color` scaled by `coverage` (0..=255).
pub(crate) fn blend(dst: &mut Rgba<u8>, color: Rgba<u8>, coverage: u8) {
    let a = (coverage as u32 * color[3] as u32) / 255;
    let inv = 255 - a;
    for i in 0..3 {
        dst[i] = ((color[i] as u32 * a + dst[i] as u32 * inv) / 255) as u8;
    }
    dst[3] = (a + dst[3] as u32 * inv / 255).min(255) as u8;
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

    #[test]
    fn test_full_coverage_replaces_pixel() {
        let mut px = Rgba([255, 255, 255, 255]);
        blend(&mut px, BLACK, 255);
        assert_eq!(px, BLACK);
    }

    #[test]
    fn test_zero_coverage_leaves_pixel() {
        let mut px = Rgba([200, 100, 50, 255]);
        blend(&mut px, BLACK, 0);
        assert_eq!(px, Rgba([200, 100, 50, 255]));
    }

    #[test]
    fn test_half_coverage_mixes() {
        let mut px = Rgba([255, 255, 255, 255]);
        blend(&mut px, BLACK, 128);
        assert!(px[0] > 100 && px[0] < 160, "expected mid-grey, got {px:?}");
        assert_eq!(px[3], 255);
    }

    #[test]
    fn test_out_of_bounds_is_clipped() {
        let mut img = RgbaImage::from_pixel(4, 4, Rgba([255, 255, 255, 255]));
        put_blended(&mut img, -1, 0, BLACK, 255);
        put_blended(&mut img, 0, 4, BLACK, 255);
        put_blended(&mut img, 10, 10, BLACK, 255);
        assert!(img.pixels().all(|p| *p == Rgba([255, 255, 255, 255])));

        put_blended(&mut img, 3, 3, BLACK, 255);
        assert_eq!(*img.get_pixel(3, 3), BLACK);
    }

    #[test]
    fn test_invalid_font_bytes_rejected() {
        assert!(FontTypeface::from_bytes(b"not a font", 63.0).is_err());
    }

    #[test]
    fn test_missing_font_file_reports_path() {
        let err = FontTypeface::from_file(Path::new("/nonexistent/font.ttf"), 63.0)
            .err()
            .expect("missing font must fail");
        assert!(err.to_string().contains("/nonexistent/font.ttf"));
    }

    // ── fontdue-backed typeface ─────────────────────────────────────────────

    static DEJAVU_SANS: &[u8] =
        include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/fonts/DejaVuSans.ttf"));

    fn dejavu(px: f32) -> FontTypeface {
        FontTypeface::from_bytes(DEJAVU_SANS, px).expect("fixture font should parse")
    }

    #[test]
    fn test_measure_empty_is_zero() {
        assert_eq!(dejavu(63.0).measure(""), 0.0);
    }

    #[test]
    fn test_measure_pair_includes_kerning() {
        let face = dejavu(63.0);
        let pair = face.measure("AV");
        assert!(pair > 0.0, "AV should have positive width, got {pair}");
        assert!(
            pair <= face.measure("A") + face.measure("V") + 1e-3,
            "kerned pair should not be wider than its glyphs apart"
        );
    }

    #[test]
    fn test_measure_grows_with_text() {
        let face = dejavu(63.0);
        assert!(face.measure("Do page 10 ") > face.measure("Do page 10"));
        assert!(face.measure("Mathematics") > face.measure("Math"));
    }

    #[test]
    fn test_measure_scales_with_pixel_size() {
        let small = dejavu(20.0).measure("Homework");
        let large = dejavu(40.0).measure("Homework");
        assert!((large - 2.0 * small).abs() < 2.0, "small={small} large={large}");
    }

    #[test]
    fn test_draw_sits_above_baseline() {
        let face = dejavu(40.0);
        let white = Rgba([255, 255, 255, 255]);
        let mut img = RgbaImage::from_pixel(200, 100, white);
        let baseline = 70;

        face.draw(&mut img, "HIL", 10.0, baseline as f32, BLACK);

        let marked: Vec<(u32, u32)> = img
            .enumerate_pixels()
            .filter(|(_, _, p)| **p != white)
            .map(|(x, y, _)| (x, y))
            .collect();
        assert!(!marked.is_empty(), "glyphs should mark pixels");
        assert!(
            marked.iter().all(|&(_, y)| y < baseline),
            "baseline-resting glyphs must stay above row {baseline}"
        );
        assert!(marked.iter().all(|&(x, _)| x >= 10), "nothing left of the pen start");
    }
}
