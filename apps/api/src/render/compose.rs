//! Composes a complete notice onto its template background.

use std::sync::Arc;
use std::time::Instant;

use tracing::debug;

use crate::render::canvas::{Canvas, TextAlign};
use crate::render::template::Anchor;
use crate::render::{RenderError, TemplateSpec, Typeface};

/// Validated text for one notice, with defaults already applied.
#[derive(Debug, Clone, PartialEq)]
pub struct NoticeFields {
    pub class_name: String,
    pub subject: String,
    pub teacher: String,
    /// Full overlay text, including the `Date: ` prefix.
    pub date_line: String,
    pub class_work: String,
    pub homework: Option<String>,
    pub remarks: String,
}

/// Decodes `background`, draws every overlay for `spec` and returns PNG bytes.
///
/// CPU-bound; call from `spawn_blocking`.
pub fn compose_notice(
    spec: &TemplateSpec,
    background: &[u8],
    typeface: Arc<dyn Typeface>,
    fields: &NoticeFields,
) -> Result<Vec<u8>, RenderError> {
    let started = Instant::now();

    let image = image::load_from_memory(background).map_err(|source| RenderError::Decode {
        name: spec.background.to_string(),
        source,
    })?;
    let mut canvas = Canvas::from_background(&image, typeface, spec.ink);
    draw_notice(&mut canvas, spec, fields);
    let png = canvas.encode_png()?;

    debug!(
        template = ?spec.variant,
        width = image.width(),
        height = image.height(),
        png_bytes = png.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Composed notice"
    );
    Ok(png)
}

/// Draws the header fields, wrapped blocks and centered date.
pub(crate) fn draw_notice(canvas: &mut Canvas, spec: &TemplateSpec, fields: &NoticeFields) {
    let header: [(&str, Anchor); 3] = [
        (&fields.class_name, spec.class_at),
        (&fields.subject, spec.subject_at),
        (&fields.teacher, spec.teacher_at),
    ];
    for (text, at) in header {
        canvas.fill_text(text, at.x, at.y, TextAlign::Start);
    }

    let block = spec.class_work;
    canvas.fill_wrapped(&fields.class_work, block.x, block.y, block.max_width, block.line_height);

    if let (Some(block), Some(homework)) = (spec.homework, fields.homework.as_deref()) {
        canvas.fill_wrapped(homework, block.x, block.y, block.max_width, block.line_height);
    }

    let block = spec.remarks;
    canvas.fill_wrapped(&fields.remarks, block.x, block.y, block.max_width, block.line_height);

    let date_x = canvas.width() as f32 - spec.date_right_offset;
    canvas.fill_text(&fields.date_line, date_x, spec.date_y, TextAlign::Center);
}
