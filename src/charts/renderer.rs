//! Static Chart Renderer
//! Renders the ranking chart to a PNG image for export.
//!
//! Layout:
//! 1. Title: "Top {n} by {metric}" centered
//! 2. One bar per reel, labelled with its display URL
//! 3. Y axis in units of the active metric

use crate::metrics::{Metric, RankedReel};
use image::{ImageFormat, RgbImage};
use plotters::prelude::*;
use std::io::Cursor;
use thiserror::Error;

const BAR_COLOR: RGBColor = RGBColor(52, 152, 219);

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("No reels to chart")]
    NoData,
    #[error("Drawing failed: {0}")]
    Draw(String),
    #[error("Pixel buffer does not match {0}x{1}")]
    BufferSize(u32, u32),
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

fn draw_err<E: std::fmt::Display>(e: E) -> RenderError {
    RenderError::Draw(e.to_string())
}

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Render the top entries as a bar chart and return PNG bytes.
    pub fn render_ranking_png(
        top: &[RankedReel<'_>],
        metric: Metric,
        width: u32,
        height: u32,
    ) -> Result<Vec<u8>, RenderError> {
        if top.is_empty() {
            return Err(RenderError::NoData);
        }

        let mut buffer = vec![0u8; width as usize * height as usize * 3];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
            root.fill(&WHITE).map_err(draw_err)?;

            let y_max = Self::y_max(top, metric);
            let mut chart = ChartBuilder::on(&root)
                .caption(
                    format!("Top {} by {}", top.len(), metric.label()),
                    ("sans-serif", 28),
                )
                .margin(20)
                .x_label_area_size(50)
                .y_label_area_size(80)
                .build_cartesian_2d((0..top.len()).into_segmented(), 0f64..y_max)
                .map_err(draw_err)?;

            let label = |seg: &SegmentValue<usize>| match seg {
                SegmentValue::CenterOf(i) => top
                    .get(*i)
                    .map(|r| r.display_url.clone())
                    .unwrap_or_default(),
                _ => String::new(),
            };

            chart
                .configure_mesh()
                .disable_x_mesh()
                .x_labels(top.len())
                .x_label_formatter(&label)
                .y_desc(metric.label())
                .draw()
                .map_err(draw_err)?;

            chart
                .draw_series(
                    Histogram::vertical(&chart)
                        .style(BAR_COLOR.filled())
                        .margin(12)
                        .data(top.iter().enumerate().map(|(i, r)| (i, metric.value(r.reel)))),
                )
                .map_err(draw_err)?;

            root.present().map_err(draw_err)?;
        }

        Self::encode_png(buffer, width, height)
    }

    fn y_max(top: &[RankedReel<'_>], metric: Metric) -> f64 {
        let max = top
            .iter()
            .map(|r| metric.value(r.reel))
            .filter(|v| v.is_finite())
            .fold(0.0, f64::max);
        if max > 0.0 {
            max * 1.1
        } else {
            1.0
        }
    }

    /// Encode a packed RGB buffer as PNG.
    pub fn encode_png(buffer: Vec<u8>, width: u32, height: u32) -> Result<Vec<u8>, RenderError> {
        let img = RgbImage::from_raw(width, height, buffer)
            .ok_or(RenderError::BufferSize(width, height))?;
        let mut bytes = Cursor::new(Vec::new());
        img.write_to(&mut bytes, ImageFormat::Png)?;
        Ok(bytes.into_inner())
    }
}
