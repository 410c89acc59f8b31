//! Drawing surface for one notice: a background copy plus text operations.

use std::io::Cursor;
use std::sync::Arc;

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};

use crate::layout::{layout, LayoutRequest};
use crate::render::{RenderError, Typeface};

/// Horizontal anchoring of single-line text relative to its x coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Start,
    Center,
}

pub struct Canvas {
    image: RgbaImage,
    typeface: Arc<dyn Typeface>,
    color: Rgba<u8>,
}

impl Canvas {
    /// Creates a canvas the size of `background` with the background drawn at the origin.
    pub fn from_background(
        background: &DynamicImage,
        typeface: Arc<dyn Typeface>,
        color: Rgba<u8>,
    ) -> Self {
        Self {
            image: background.to_rgba8(),
            typeface,
            color,
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Draws one line of text with its baseline at `y`.
    pub fn fill_text(&mut self, text: &str, x: f32, y: f32, align: TextAlign) {
        let x = match align {
            TextAlign::Start => x,
            TextAlign::Center => x - self.typeface.measure(text) / 2.0,
        };
        self.typeface.draw(&mut self.image, text, x, y, self.color);
    }

    /// Word-wraps `text` to `max_width` and draws each line start-aligned.
    /// Returns the number of lines drawn.
    pub fn fill_wrapped(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        max_width: f32,
        line_height: f32,
    ) -> usize {
        let request = LayoutRequest {
            text,
            max_width,
            line_height,
            start_x: x,
            start_y: y,
        };
        let typeface: &dyn Typeface = &*self.typeface;

        let mut drawn = 0;
        for fragment in layout(request, typeface) {
            typeface.draw(&mut self.image, &fragment.text, fragment.x, fragment.y, self.color);
            drawn += 1;
        }
        drawn
    }

    pub fn encode_png(&self) -> Result<Vec<u8>, RenderError> {
        let mut buf = Vec::new();
        self.image
            .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
            .map_err(RenderError::Encode)?;
        Ok(buf)
    }

    #[cfg(test)]
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }
}
