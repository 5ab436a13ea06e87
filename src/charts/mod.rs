//! Bar chart rendering for the stats page.
//!
//! Callers only see [`BarChartRenderer`]: labelled counts in, PNG bytes out.

mod png;

pub use png::PlottersRenderer;

use crate::errors::{AppError, AppResult};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use plotters::style::FontStyle;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

/// Fonts tried when the configuration names none.
pub const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

static FONT_REGISTERED: AtomicBool = AtomicBool::new(false);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarColor {
    Blue,
    Red,
}

/// A bar chart: one bar per `(label, count)`, drawn in the given order.
#[derive(Debug, Clone)]
pub struct BarChart<'a> {
    pub title: &'a str,
    pub x_label: &'a str,
    pub y_label: &'a str,
    pub color: BarColor,
    pub bars: Vec<(String, u32)>,
}

pub trait BarChartRenderer: Send + Sync {
    /// Render `chart` as a PNG image.
    fn render(&self, chart: &BarChart<'_>) -> AppResult<Vec<u8>>;
}

pub fn encode_base64(bytes: &[u8]) -> String {
    BASE64.encode(bytes)
}

/// Register the TrueType font used for chart text.
pub fn register_font(path: &Path) -> AppResult<()> {
    let bytes = fs::read(path)?;
    // plotters keeps registered font data for the lifetime of the process.
    let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
    plotters::style::register_font("sans-serif", FontStyle::Normal, bytes)
        .map_err(|_| AppError::Chart(format!("invalid font {}", path.display())))?;
    FONT_REGISTERED.store(true, Ordering::Release);
    Ok(())
}

/// Register `configured`, or else the first readable entry of [`FONT_CANDIDATES`].
///
/// Returns the font in use, or `None` when charts will be drawn without text.
pub fn register_first_available(configured: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = configured {
        return match register_font(path) {
            Ok(()) => Some(path.to_path_buf()),
            Err(e) => {
                tracing::warn!(error = %e, "configured chart font not usable");
                None
            }
        };
    }

    FONT_CANDIDATES
        .iter()
        .map(Path::new)
        .filter(|p| p.exists())
        .find(|p| register_font(p).is_ok())
        .map(Path::to_path_buf)
}

pub fn font_registered() -> bool {
    FONT_REGISTERED.load(Ordering::Acquire)
}
