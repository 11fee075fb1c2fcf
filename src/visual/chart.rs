/*
 * @Author       : 老董
 * @Date         : 2026-10-14
 * @Description  : 代价曲线图
 *
 * 横轴为轮次，纵轴为代价（可选 log10 刻度）。每个变体一条折线，
 * 非有限值（含对数刻度下的非正值）处折线断开。
 *
 * 两种输出：
 * - SVG（plotters）：带标题、坐标轴名称、刻度与按变体名标注的图例
 * - PNG（image/imageproc）：无文字的位图，右上角用同一配色的色块作图例
 */

use std::path::Path;

use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut, draw_line_segment_mut};
use imageproc::rect::Rect;
use plotters::prelude::{
    BLACK, ChartBuilder, Color, IntoDrawingArea, LineSeries, PathElement, RGBColor, SVGBackend,
    SeriesLabelPosition, WHITE,
};

use super::error::VisualError;
use super::check_series;
use crate::optim::CostSeries;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const AXIS: Rgb<u8> = Rgb([0, 0, 0]);
const GRID: Rgb<u8> = Rgb([220, 220, 220]);
/// 曲线配色，超过4条时循环使用
pub const PALETTE: [Rgb<u8>; 4] = [
    Rgb([31, 119, 180]),
    Rgb([255, 127, 14]),
    Rgb([44, 160, 44]),
    Rgb([214, 39, 40]),
];

/// 图表标题与坐标轴名称
pub const TITLE: &str = "Comparison of Gradient Descent Algorithms";
pub const X_LABEL: &str = "Iterations";
pub const Y_LABEL: &str = "Cost Function (MSE)";

const MARGIN: u32 = 40;
const GRID_LINES: u32 = 5;
const LEGEND_SWATCH: u32 = 12;

/// 代价曲线图的绘制参数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostChart {
    width: u32,
    height: u32,
    log_scale: bool,
}

impl Default for CostChart {
    fn default() -> Self {
        Self {
            width: 800,
            height: 500,
            log_scale: false,
        }
    }
}

impl CostChart {
    /// 指定画布尺寸；宽高至少为 2·MARGIN + 1
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(2 * MARGIN + 1),
            height: height.max(2 * MARGIN + 1),
            log_scale: false,
        }
    }

    /// 纵轴是否使用 log10 刻度
    pub fn log_scale(mut self, log_scale: bool) -> Self {
        self.log_scale = log_scale;
        self
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// 绘制到内存中的 RGB 图像
    pub fn render(&self, series: &[CostSeries<'_>]) -> Result<RgbImage, VisualError> {
        let epochs = check_series(series)?;
        let mut canvas = RgbImage::from_pixel(self.width, self.height, BACKGROUND);

        let left = MARGIN as f32;
        let top = MARGIN as f32;
        let plot_w = (self.width - 2 * MARGIN) as f32;
        let plot_h = (self.height - 2 * MARGIN) as f32;

        let values = self.scaled(series);
        let (low, high) = value_range(values.iter().flatten().copied());

        // 水平网格
        for k in 1..GRID_LINES {
            let y = top + plot_h * k as f32 / GRID_LINES as f32;
            draw_line_segment_mut(&mut canvas, (left, y), (left + plot_w, y), GRID);
        }

        let to_x = |epoch: usize| {
            if epochs > 1 {
                left + plot_w * epoch as f32 / (epochs - 1) as f32
            } else {
                left + plot_w / 2.0
            }
        };
        let to_y = |value: f32| top + plot_h * (high - value) / (high - low);

        for (idx, points) in values.iter().enumerate() {
            let color = PALETTE[idx % PALETTE.len()];
            let mut previous: Option<(f32, f32)> = None;
            for (epoch, &value) in points.iter().enumerate() {
                if !value.is_finite() {
                    previous = None;
                    continue;
                }
                let point = (to_x(epoch), to_y(value));
                match previous {
                    Some(start) => draw_line_segment_mut(&mut canvas, start, point, color),
                    None => draw_line_segment_mut(&mut canvas, point, point, color),
                }
                previous = Some(point);
            }
        }

        // 坐标框
        draw_hollow_rect_mut(
            &mut canvas,
            Rect::at(MARGIN as i32, MARGIN as i32)
                .of_size(self.width - 2 * MARGIN, self.height - 2 * MARGIN),
            AXIS,
        );

        // 图例色块
        for idx in 0..series.len() {
            let x = self.width - MARGIN - LEGEND_SWATCH - 4;
            let y = MARGIN + 4 + idx as u32 * (LEGEND_SWATCH + 4);
            if y + LEGEND_SWATCH >= self.height - MARGIN {
                break;
            }
            draw_filled_rect_mut(
                &mut canvas,
                Rect::at(x as i32, y as i32).of_size(LEGEND_SWATCH, LEGEND_SWATCH),
                PALETTE[idx % PALETTE.len()],
            );
        }

        Ok(canvas)
    }

    /// 绘制并保存为图片（格式由扩展名决定，通常为 png）
    pub fn save(&self, series: &[CostSeries<'_>], path: impl AsRef<Path>) -> Result<(), VisualError> {
        let path = path.as_ref();
        self.render(series)?.save(path)?;
        log::info!("代价曲线已保存到 {:?}", path);
        Ok(())
    }

    /// 绘制为带标题、坐标轴名称与图例的 SVG 文本
    pub fn render_svg(&self, series: &[CostSeries<'_>]) -> Result<String, VisualError> {
        let epochs = check_series(series)?;
        let values = self.scaled(series);
        let (low, high) = value_range(values.iter().flatten().copied());
        let x_max = (epochs.max(2) - 1) as f32;
        let y_desc = if self.log_scale {
            format!("log10 {}", Y_LABEL)
        } else {
            Y_LABEL.to_string()
        };

        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (self.width, self.height))
                .into_drawing_area();
            root.fill(&WHITE).map_err(plot_error)?;

            let mut chart = ChartBuilder::on(&root)
                .caption(TITLE, ("sans-serif", 20))
                .margin(10)
                .x_label_area_size(40)
                .y_label_area_size(70)
                .build_cartesian_2d(0f32..x_max, low..high)
                .map_err(plot_error)?;
            chart
                .configure_mesh()
                .x_desc(X_LABEL)
                .y_desc(y_desc)
                .draw()
                .map_err(plot_error)?;

            for (idx, (s, points)) in series.iter().zip(&values).enumerate() {
                let Rgb([r, g, b]) = PALETTE[idx % PALETTE.len()];
                let color = RGBColor(r, g, b);
                // 图例条目：每个变体恰好一条，与是否有有限值无关
                chart
                    .draw_series(LineSeries::new(
                        std::iter::empty::<(f32, f32)>(),
                        color.stroke_width(2),
                    ))
                    .map_err(plot_error)?
                    .label(s.name)
                    .legend(move |(x, y)| {
                        PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
                    });
                for segment in finite_segments(points) {
                    chart
                        .draw_series(LineSeries::new(segment, color.stroke_width(2)))
                        .map_err(plot_error)?;
                }
            }

            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::UpperRight)
                .background_style(&WHITE.mix(0.8))
                .border_style(&BLACK)
                .draw()
                .map_err(plot_error)?;
            root.present().map_err(plot_error)?;
        }
        Ok(svg)
    }

    /// 绘制并保存为 SVG 文件
    pub fn save_svg(
        &self,
        series: &[CostSeries<'_>],
        path: impl AsRef<Path>,
    ) -> Result<(), VisualError> {
        let path = path.as_ref();
        std::fs::write(path, self.render_svg(series)?)?;
        log::info!("代价曲线（SVG）已保存到 {:?}", path);
        Ok(())
    }

    fn scaled(&self, series: &[CostSeries<'_>]) -> Vec<Vec<f32>> {
        series
            .iter()
            .map(|s| s.costs.iter().map(|&c| self.scale(c)).collect())
            .collect()
    }

    fn scale(&self, cost: f32) -> f32 {
        match self.log_scale {
            true if cost > 0.0 => cost.log10(),
            true => f32::NAN,
            false => cost,
        }
    }
}

/// 连续的有限值片段，点为 (轮次, 值)
fn finite_segments(points: &[f32]) -> Vec<Vec<(f32, f32)>> {
    let mut segments = Vec::new();
    let mut current = Vec::new();
    for (epoch, &value) in points.iter().enumerate() {
        if value.is_finite() {
            current.push((epoch as f32, value));
        } else if !current.is_empty() {
            segments.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

fn plot_error(err: impl std::fmt::Display) -> VisualError {
    VisualError::Plot(err.to_string())
}

/// 有限值的取值范围；没有有限值或区间退化时扩展为非零宽度
fn value_range(values: impl Iterator<Item = f32>) -> (f32, f32) {
    let (low, high) = values
        .filter(|v| v.is_finite())
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    if !low.is_finite() {
        (0.0, 1.0)
    } else if high - low <= f32::EPSILON * high.abs().max(1.0) {
        (low - 0.5, high + 0.5)
    } else {
        (low, high)
    }
}
