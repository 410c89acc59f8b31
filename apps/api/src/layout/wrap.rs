//! Greedy word-wrap producing positioned line fragments.
//!
//! # Rules
//! - Input is split on `\n` into paragraphs, each wrapped independently.
//! - Paragraphs are split on the single-space delimiter. Consecutive spaces
//!   produce empty words, which are kept and measured.
//! - A word joins the current line unless the line is non-empty and
//!   `line + word + " "` measures wider than `max_width`.
//! - Width is measured with the trailing space included, so a line that would
//!   fit exactly without it still wraps.
//! - A word wider than `max_width` on its own is placed alone, never split.
//! - Every emitted line advances y by `line_height`; the cursor carries
//!   across paragraphs. A blank paragraph is the single empty word, so it
//!   emits a lone space.
//!
//! The engine never fails. Non-positive `max_width` degenerates to one word
//! per line.

use std::str::Split;

use super::Measure;

// ────────────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────────────

/// A block of text to wrap, anchored at the baseline of its first line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutRequest<'a> {
    pub text: &'a str,
    pub max_width: f32,
    pub line_height: f32,
    pub start_x: f32,
    pub start_y: f32,
}

/// One wrapped line and its draw position (x, baseline y).
///
/// `text` keeps the trailing space of its last word, exactly as measured.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedFragment {
    pub text: String,
    pub x: f32,
    pub y: f32,
}

// ────────────────────────────────────────────────────────────────────────────
// Engine
// ────────────────────────────────────────────────────────────────────────────

/// Lays out `request.text`, returning a lazy iterator of fragments.
///
/// Empty text yields nothing.
pub fn layout<'a, M>(request: LayoutRequest<'a>, measure: &'a M) -> Fragments<'a, M>
where
    M: Measure + ?Sized,
{
    let paragraphs = if request.text.is_empty() {
        None
    } else {
        Some(request.text.split('\n'))
    };

    Fragments {
        paragraphs,
        words: None,
        line: String::new(),
        measure,
        max_width: request.max_width,
        line_height: request.line_height,
        x: request.start_x,
        y: request.start_y,
    }
}

/// Iterator state for [`layout`]. One paragraph's words are consumed at a time.
pub struct Fragments<'a, M: ?Sized> {
    paragraphs: Option<Split<'a, char>>,
    words: Option<Split<'a, char>>,
    /// Accumulator for the line in progress.
    line: String,
    measure: &'a M,
    max_width: f32,
    line_height: f32,
    x: f32,
    y: f32,
}

impl<'a, M> Iterator for Fragments<'a, M>
where
    M: Measure + ?Sized,
{
    type Item = PositionedFragment;

    fn next(&mut self) -> Option<PositionedFragment> {
        if self.words.is_none() {
            let paragraph = self.paragraphs.as_mut()?.next()?;
            self.words = Some(paragraph.split(' '));
            self.line.clear();
        }

        let words = self.words.as_mut()?;
        for word in words.by_ref() {
            let candidate = format!("{}{word} ", self.line);
            if !self.line.is_empty() && self.measure.measure(&candidate) > self.max_width {
                // Overflow: flush the line so far and start the next one with this word.
                let text = std::mem::replace(&mut self.line, format!("{word} "));
                let fragment = PositionedFragment {
                    text,
                    x: self.x,
                    y: self.y,
                };
                self.y += self.line_height;
                return Some(fragment);
            }
            self.line = candidate;
        }

        // Paragraph exhausted: flush whatever remains.
        self.words = None;
        let fragment = PositionedFragment {
            text: std::mem::take(&mut self.line),
            x: self.x,
            y: self.y,
        };
        self.y += self.line_height;
        Some(fragment)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
