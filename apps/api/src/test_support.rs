//! Deterministic stand-ins for the injected capabilities: a block typeface,
//! in-memory assets and a fixed clock.

use std::collections::HashMap;
use std::io::Cursor;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use chrono::NaiveDate;
use image::{ImageFormat, Rgba, RgbaImage};

use crate::layout::Measure;
use crate::notice::date::Clock;
use crate::render::typeface::put_blended;
use crate::render::{AssetError, AssetLoader, Typeface};
use crate::state::AppState;

pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    pub text: String,
    pub x: f32,
    pub y: f32,
}

/// Monospaced typeface: every char is `advance` wide and drawn as a solid block
/// sitting on the baseline. Records every draw call.
pub struct BlockTypeface {
    advance: f32,
    calls: Mutex<Vec<DrawCall>>,
}

impl BlockTypeface {
    pub fn new(advance: f32) -> Self {
        Self {
            advance,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<DrawCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl Measure for BlockTypeface {
    fn measure(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.advance
    }
}

impl Typeface for BlockTypeface {
    fn draw(&self, target: &mut RgbaImage, text: &str, x: f32, baseline_y: f32, color: Rgba<u8>) {
        self.calls.lock().unwrap().push(DrawCall {
            text: text.to_string(),
            x,
            y: baseline_y,
        });

        let size = (self.advance as i64 - 2).max(1);
        for (i, c) in text.chars().enumerate() {
            if c.is_whitespace() {
                continue;
            }
            let left = (x + i as f32 * self.advance) as i64;
            let bottom = baseline_y as i64;
            for dy in 0..size {
                for dx in 0..size {
                    put_blended(target, left + dx, bottom - dy, color, 255);
                }
            }
        }
    }
}

/// PNG-encoded white background of the given size.
pub fn background_png(width: u32, height: u32) -> Vec<u8> {
    let img = RgbaImage::from_pixel(width, height, WHITE);
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .unwrap();
    buf
}

#[derive(Default)]
pub struct MemoryAssets {
    files: HashMap<String, Bytes>,
}

impl MemoryAssets {
    pub fn with(mut self, name: &str, data: Vec<u8>) -> Self {
        self.files.insert(name.to_string(), Bytes::from(data));
        self
    }
}

#[async_trait]
impl AssetLoader for MemoryAssets {
    async fn load(&self, name: &str) -> Result<Bytes, AssetError> {
        self.files
            .get(name)
            .cloned()
            .ok_or_else(|| AssetError::NotFound { path: name.into() })
    }
}

pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// 2024-01-01 was a Monday.
pub fn new_year_2024() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

/// App state with both backgrounds present, a 10px block typeface and a fixed clock.
pub fn test_state() -> (AppState, Arc<BlockTypeface>) {
    let assets = MemoryAssets::default()
        .with("bg.jpg", background_png(2480, 64))
        .with("bg-v2.jpg", background_png(2480, 64));
    state_with_assets(assets)
}

pub fn state_with_assets(assets: MemoryAssets) -> (AppState, Arc<BlockTypeface>) {
    let typeface = Arc::new(BlockTypeface::new(10.0));
    let state = AppState {
        typeface: typeface.clone(),
        assets: Arc::new(assets),
        clock: Arc::new(FixedClock(new_year_2024())),
    };
    (state, typeface)
}
