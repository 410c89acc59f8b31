use std::sync::Arc;

use crate::notice::date::Clock;
use crate::render::{AssetLoader, Typeface};

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds only immutable capabilities; each request renders independently.
#[derive(Clone)]
pub struct AppState {
    /// Font used for both measurement and drawing.
    pub typeface: Arc<dyn Typeface>,
    /// Source of template backgrounds (disk in production).
    pub assets: Arc<dyn AssetLoader>,
    /// Supplies today's date for the default date overlay.
    pub clock: Arc<dyn Clock>,
}
