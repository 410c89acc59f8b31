// Text layout for notice overlays.
// Greedy word-wrap over a caller-supplied width measurement; no rendering here.

pub mod wrap;

pub use wrap::{layout, LayoutRequest};

/// Width measurement capability supplied by the rendering surface.
///
/// Returns the rendered width of `text` in the same units as the layout's
/// `max_width`. Implementations are expected to be pure for a given font state.
pub trait Measure {
    fn measure(&self, text: &str) -> f32;
}

impl<F> Measure for F
where
    F: Fn(&str) -> f32,
{
    fn measure(&self, text: &str) -> f32 {
        self(text)
    }
}
