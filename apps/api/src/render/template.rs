//! Fixed template variants: background asset and overlay geometry.
//!
//! Coordinates are pixels on the background image. Text anchors are
//! baselines; the date is centered on a point measured from the right edge.

use image::Rgba;

use crate::notice::request::Field;

/// The two notice layouts served by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateVariant {
    /// Class work and remarks only (`/generate`).
    Plain,
    /// Class work, homework and remarks (`/generate-hw`).
    Homework,
}

impl TemplateVariant {
    pub fn spec(self) -> &'static TemplateSpec {
        match self {
            TemplateVariant::Plain => &PLAIN,
            TemplateVariant::Homework => &HOMEWORK,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub x: f32,
    pub y: f32,
}

/// A wrapped multi-line block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextBlock {
    pub x: f32,
    pub y: f32,
    pub max_width: f32,
    pub line_height: f32,
}

#[derive(Debug)]
pub struct TemplateSpec {
    pub variant: TemplateVariant,
    /// Background asset name, resolved by the asset loader.
    pub background: &'static str,
    pub ink: Rgba<u8>,
    pub class_at: Anchor,
    pub subject_at: Anchor,
    pub teacher_at: Anchor,
    /// Date center x is `image width - date_right_offset`.
    pub date_right_offset: f32,
    pub date_y: f32,
    pub class_work: TextBlock,
    /// Present only on templates with a homework section.
    pub homework: Option<TextBlock>,
    pub remarks: TextBlock,
    /// Query parameters that must be present and non-empty, in message order.
    pub required_fields: &'static [Field],
    pub failure_message: &'static str,
    /// Used instead of `failure_message` when the background file is missing.
    pub missing_asset_message: Option<&'static str>,
}

impl TemplateSpec {
    /// Client-facing message for a render failure on this template.
    pub fn failure_message_for(&self, missing_asset: bool) -> &'static str {
        match self.missing_asset_message {
            Some(msg) if missing_asset => msg,
            _ => self.failure_message,
        }
    }
}

const INK: Rgba<u8> = Rgba([0, 0, 0, 255]);
const WRAP_WIDTH: f32 = 2000.0;
const LINE_HEIGHT: f32 = 70.0;

const fn block(x: f32, y: f32) -> TextBlock {
    TextBlock {
        x,
        y,
        max_width: WRAP_WIDTH,
        line_height: LINE_HEIGHT,
    }
}

pub static PLAIN: TemplateSpec = TemplateSpec {
    variant: TemplateVariant::Plain,
    background: "bg.jpg",
    ink: INK,
    class_at: Anchor { x: 372.0, y: 772.0 },
    subject_at: Anchor { x: 422.0, y: 902.0 },
    teacher_at: Anchor { x: 692.0, y: 1029.0 },
    date_right_offset: 838.0,
    date_y: 775.0,
    class_work: block(179.0, 1227.0),
    homework: None,
    remarks: block(179.0, 1628.0),
    required_fields: &[Field::Class, Field::Subject, Field::ClassWork],
    failure_message: "Failed to generate image",
    missing_asset_message: None,
};

pub static HOMEWORK: TemplateSpec = TemplateSpec {
    variant: TemplateVariant::Homework,
    background: "bg-v2.jpg",
    ink: INK,
    class_at: Anchor { x: 375.0, y: 762.0 },
    subject_at: Anchor { x: 425.0, y: 892.0 },
    teacher_at: Anchor { x: 695.0, y: 1018.0 },
    date_right_offset: 800.0,
    date_y: 763.0,
    class_work: block(181.0, 1240.0),
    homework: Some(block(181.0, 1668.0)),
    remarks: block(181.0, 2100.0),
    required_fields: &[Field::Class, Field::Subject, Field::ClassWork, Field::Homework],
    failure_message: "Failed to generate HW image",
    missing_asset_message: Some("Failed to load bg-v2.jpg. Make sure it's in the same folder."),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_resolves_its_spec() {
        assert_eq!(TemplateVariant::Plain.spec().variant, TemplateVariant::Plain);
        assert_eq!(TemplateVariant::Homework.spec().background, "bg-v2.jpg");
    }

    #[test]
    fn test_only_homework_template_has_homework_block() {
        assert!(PLAIN.homework.is_none());
        assert!(HOMEWORK.homework.is_some());
        assert!(HOMEWORK.required_fields.contains(&Field::Homework));
        assert!(!PLAIN.required_fields.contains(&Field::Homework));
    }

    #[test]
    fn test_plain_failure_ignores_missing_asset() {
        assert_eq!(PLAIN.failure_message_for(true), "Failed to generate image");
    }

    #[test]
    fn test_homework_missing_asset_message() {
        assert_eq!(
            HOMEWORK.failure_message_for(true),
            "Failed to load bg-v2.jpg. Make sure it's in the same folder."
        );
        assert_eq!(HOMEWORK.failure_message_for(false), "Failed to generate HW image");
    }
}
