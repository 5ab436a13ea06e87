use super::{BarChart, BarChartRenderer, BarColor, font_registered};
use crate::errors::{AppError, AppResult};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::fmt::Display;
use std::io::Cursor;

const MARGIN_LEFT: u32 = 60;
const MARGIN_RIGHT: u32 = 20;
const MARGIN_TOP: u32 = 50;
const MARGIN_BOTTOM: u32 = 70;
const SLOT_WIDTH: u32 = 64;
const MIN_WIDTH: u32 = 480;
const GRID: RGBColor = RGBColor(220, 220, 220);

/// Draws bar charts with plotters into an RGB buffer and encodes them as PNG.
#[derive(Debug, Clone)]
pub struct PlottersRenderer {
    height: u32,
    with_text: bool,
}

impl PlottersRenderer {
    pub fn new(height: u32, with_text: bool) -> Self {
        Self { height, with_text }
    }

    /// Text is drawn only when a font has been registered.
    pub fn detect() -> Self {
        Self::new(400, font_registered())
    }

    fn width_for(&self, bars: usize) -> u32 {
        (MARGIN_LEFT + MARGIN_RIGHT + SLOT_WIDTH * bars as u32).max(MIN_WIDTH)
    }
}

impl Default for PlottersRenderer {
    fn default() -> Self {
        Self::detect()
    }
}

impl BarChartRenderer for PlottersRenderer {
    fn render(&self, chart: &BarChart<'_>) -> AppResult<Vec<u8>> {
        let width = self.width_for(chart.bars.len());
        let height = self.height.max(MARGIN_TOP + MARGIN_BOTTOM + 10);
        let mut buffer = vec![0u8; (width * height * 3) as usize];

        {
            let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
            draw(&root, chart, (width, height), self.with_text)?;
            root.present().map_err(chart_err)?;
        }

        encode_png(buffer, width, height)
    }
}

fn draw(
    root: &DrawingArea<BitMapBackend<'_>, Shift>,
    chart: &BarChart<'_>,
    (width, height): (u32, u32),
    with_text: bool,
) -> AppResult<()> {
    root.fill(&WHITE).map_err(chart_err)?;

    let left = MARGIN_LEFT as i32;
    let right = (width - MARGIN_RIGHT) as i32;
    let top = MARGIN_TOP as i32;
    let bottom = (height - MARGIN_BOTTOM) as i32;
    let plot_h = bottom - top;

    let max = chart.bars.iter().map(|(_, c)| *c).max().unwrap_or(0).max(1);
    let y_of = |count: u32| bottom - (count as i64 * plot_h as i64 / max as i64) as i32;

    let small = text_style(12.0);

    // Horizontal grid with y ticks.
    let step = max.div_ceil(5).max(1);
    for tick in (0..=max).step_by(step as usize) {
        let y = y_of(tick);
        root.draw(&PathElement::new(
            vec![(left, y), (right, y)],
            GRID.stroke_width(1),
        ))
        .map_err(chart_err)?;
        if with_text {
            root.draw(&Text::new(
                tick.to_string(),
                (left - 8, y),
                small.pos(Pos::new(HPos::Right, VPos::Center)),
            ))
            .map_err(chart_err)?;
        }
    }

    let color = match chart.color {
        BarColor::Blue => BLUE,
        BarColor::Red => RED,
    };

    if !chart.bars.is_empty() {
        let slot = (right - left) / chart.bars.len() as i32;
        let bar_w = (slot * 7 / 10).max(1);

        for (i, (label, count)) in chart.bars.iter().enumerate() {
            let x0 = left + i as i32 * slot + (slot - bar_w) / 2;
            let x1 = x0 + bar_w;
            let y0 = y_of(*count);

            if *count > 0 {
                root.draw(&Rectangle::new([(x0, y0), (x1, bottom)], color.filled()))
                    .map_err(chart_err)?;
            }

            if with_text {
                let center = (x0 + x1) / 2;
                root.draw(&Text::new(
                    count.to_string(),
                    (center, y0 - 4),
                    small.pos(Pos::new(HPos::Center, VPos::Bottom)),
                ))
                .map_err(chart_err)?;
                root.draw(&Text::new(
                    label.clone(),
                    (center, bottom + 6),
                    small.pos(Pos::new(HPos::Center, VPos::Top)),
                ))
                .map_err(chart_err)?;
            }
        }
    }

    // Axes.
    root.draw(&PathElement::new(
        vec![(left, top), (left, bottom), (right, bottom)],
        BLACK.stroke_width(1),
    ))
    .map_err(chart_err)?;

    if with_text {
        root.draw(&Text::new(
            chart.title.to_string(),
            (width as i32 / 2, 12),
            text_style(20.0).pos(Pos::new(HPos::Center, VPos::Top)),
        ))
        .map_err(chart_err)?;
        root.draw(&Text::new(
            chart.y_label.to_string(),
            (8, top - 10),
            small.pos(Pos::new(HPos::Left, VPos::Bottom)),
        ))
        .map_err(chart_err)?;
        root.draw(&Text::new(
            chart.x_label.to_string(),
            (width as i32 / 2, height as i32 - 12),
            text_style(14.0).pos(Pos::new(HPos::Center, VPos::Bottom)),
        ))
        .map_err(chart_err)?;
    }

    Ok(())
}

fn text_style(size: f64) -> TextStyle<'static> {
    FontDesc::new(FontFamily::SansSerif, size, FontStyle::Normal).color(&BLACK)
}

fn encode_png(buffer: Vec<u8>, width: u32, height: u32) -> AppResult<Vec<u8>> {
    let img = image::RgbImage::from_raw(width, height, buffer)
        .ok_or_else(|| AppError::Chart("pixel buffer does not match image size".into()))?;

    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png)
        .map_err(chart_err)?;
    Ok(out.into_inner())
}

fn chart_err<E: Display>(e: E) -> AppError {
    AppError::Chart(e.to_string())
}
