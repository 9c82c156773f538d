// File: crates/livechart-core/src/raster.rs
// Summary: Skia drawing of a Chart onto raster (RGBA/PNG) and PDF canvases.

use anyhow::{bail, Result};
use skia_safe as skia;

use crate::chart::Chart;
use crate::export::{encode_raster, ExportFormat};
use crate::geometry::{clamp, Mapping, PlotRect};
use crate::grid::{format_tick, nice_ticks};
use crate::series::{LineStyle, Series, SeriesRole, SeriesType};
use crate::text::{Anchor, TextShaper};
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Text (title, labels, ticks, legend). Off gives platform-independent pixels.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::dark(),
            draw_labels: true,
        }
    }
}

impl Chart {
    /// Rasterize into a tightly packed, unpremultiplied RGBA8 buffer.
    /// Returns `(pixels, width, height, row_bytes)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        if opts.width <= 0 || opts.height <= 0 {
            bail!("invalid surface size {}x{}", opts.width, opts.height);
        }
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        draw_scene(surface.canvas(), self, opts);

        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let row_bytes = opts.width as usize * 4;
        let mut pixels = vec![0u8; row_bytes * opts.height as usize];
        if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            bail!("failed to read back raster pixels");
        }
        Ok((pixels, opts.width as u32, opts.height as u32, row_bytes))
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let (pixels, w, h, _) = self.render_to_rgba8(opts)?;
        Ok(encode_raster(pixels, w, h, ExportFormat::Png)?)
    }

    /// Single-page vector PDF of the chart, page size = surface size in points.
    pub fn render_to_pdf_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        let document = skia::pdf::new_document(&mut out, None);
        let mut page = document.begin_page((opts.width as f32, opts.height as f32), None);
        draw_scene(page.canvas(), self, opts);
        page.end_page().close();
        if out.is_empty() {
            bail!("PDF backend produced no output");
        }
        Ok(out)
    }
}

// ---- scene -----------------------------------------------------------------

fn draw_scene(canvas: &skia::Canvas, chart: &Chart, opts: &RenderOptions) {
    let theme = &opts.theme;
    canvas.clear(theme.background);

    let rect = PlotRect::inset(opts.width, opts.height, &opts.insets);
    let map = Mapping::new(rect, &chart.x_axis, &chart.y_axis);
    let shaper = opts.draw_labels.then(TextShaper::new);

    if chart.show_axes {
        draw_grid(canvas, &rect, chart, &map, theme);
    }

    canvas.save();
    canvas.clip_rect(skia::Rect::from_ltrb(rect.left, rect.top, rect.right, rect.bottom), skia::ClipOp::Intersect, true);
    for s in &chart.series {
        match s.series_type {
            SeriesType::Line => draw_line_series(canvas, &map, s, theme),
            SeriesType::Bar => draw_bar_series(canvas, &map, s, theme),
            SeriesType::Scatter => draw_scatter_series(canvas, &map, s, theme),
            SeriesType::Histogram => draw_histogram_series(canvas, &map, s, theme),
            SeriesType::Area => draw_area_series(canvas, &map, s, theme),
            SeriesType::Pie => {}
        }
    }
    canvas.restore();

    // Pie labels may sit outside the plot rect, so wedges are drawn unclipped.
    for s in chart.series.iter().filter(|s| s.series_type == SeriesType::Pie) {
        draw_pie_series(canvas, &rect, s, theme, shaper.as_ref());
    }

    if chart.show_axes {
        draw_axes(canvas, &rect, theme);
    }

    if let Some(shaper) = &shaper {
        shaper.draw(
            canvas,
            &chart.title,
            (opts.width as f32 * 0.5, rect.top * 0.5 + 9.0),
            18.0,
            theme.axis_label,
            Anchor::Center,
        );
        if chart.show_axes {
            draw_axis_labels(canvas, &rect, chart, &map, theme, shaper);
        }
    }
    draw_legend(canvas, &rect, chart, theme, shaper.as_ref());
}

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}

fn series_color(s: &Series, theme: &Theme) -> skia::Color {
    match s.role {
        SeriesRole::Trend => theme.trend,
        SeriesRole::Clusters => theme.cluster_color(0),
        SeriesRole::Data => match s.series_type {
            SeriesType::Bar => theme.bar_fill,
            SeriesType::Histogram => theme.histogram,
            _ => theme.line_stroke,
        },
    }
}

fn draw_grid(canvas: &skia::Canvas, rect: &PlotRect, chart: &Chart, map: &Mapping, theme: &Theme) {
    let paint = stroke_paint(theme.grid, 1.0);
    for x in nice_ticks(chart.x_axis.min, chart.x_axis.max, 10) {
        let px = map.sx(x);
        canvas.draw_line((px, rect.top), (px, rect.bottom), &paint);
    }
    for y in nice_ticks(chart.y_axis.min, chart.y_axis.max, 6) {
        let py = map.sy(y);
        canvas.draw_line((rect.left, py), (rect.right, py), &paint);
    }
}

fn draw_axes(canvas: &skia::Canvas, rect: &PlotRect, theme: &Theme) {
    let paint = stroke_paint(theme.axis_line, 1.5);
    canvas.draw_line((rect.left, rect.bottom), (rect.right, rect.bottom), &paint);
    canvas.draw_line((rect.left, rect.top), (rect.left, rect.bottom), &paint);
}

fn draw_axis_labels(
    canvas: &skia::Canvas,
    rect: &PlotRect,
    chart: &Chart,
    map: &Mapping,
    theme: &Theme,
    shaper: &TextShaper,
) {
    for x in nice_ticks(chart.x_axis.min, chart.x_axis.max, 10) {
        shaper.draw(canvas, &format_tick(x), (map.sx(x), rect.bottom + 16.0), 11.0, theme.tick, Anchor::Center);
    }
    for y in nice_ticks(chart.y_axis.min, chart.y_axis.max, 6) {
        shaper.draw(canvas, &format_tick(y), (rect.left - 6.0, map.sy(y) + 4.0), 11.0, theme.tick, Anchor::Right);
    }
    let (cx, _) = rect.center();
    shaper.draw(canvas, &chart.x_axis.label, (cx, rect.bottom + 40.0), 14.0, theme.axis_label, Anchor::Center);
    shaper.draw(canvas, &chart.y_axis.label, (8.0, rect.top - 10.0), 14.0, theme.axis_label, Anchor::Left);
}

fn draw_line_series(canvas: &skia::Canvas, map: &Mapping, s: &Series, theme: &Theme) {
    let data = &s.data_xy;
    let color = series_color(s, theme);

    if data.len() >= 2 {
        let mut path = skia::Path::new();
        let (x0, y0) = data[0];
        path.move_to((map.sx(x0), map.sy(y0)));
        for &(x, y) in data.iter().skip(1) {
            path.line_to((map.sx(x), map.sy(y)));
        }
        let mut stroke = stroke_paint(color, 2.0);
        if s.line_style == LineStyle::Dashed {
            stroke.set_path_effect(skia::PathEffect::dash(&[10.0, 6.0], 0.0));
        }
        canvas.draw_path(&path, &stroke);
    }

    if s.markers {
        let dot = fill_paint(color);
        for &(x, y) in data {
            canvas.draw_circle((map.sx(x), map.sy(y)), 3.5, &dot);
        }
    }
}

fn draw_bar_series(canvas: &skia::Canvas, map: &Mapping, s: &Series, theme: &Theme) {
    let body = fill_paint(series_color(s, theme));
    let half = s.bar_width * 0.5;
    let y_base = map.sy(s.baseline_value());
    for &(x, y) in &s.data_xy {
        let top = map.sy(y).min(y_base);
        let bottom = map.sy(y).max(y_base);
        let rect = skia::Rect::from_ltrb(map.sx(x - half), top, map.sx(x + half), bottom.max(top + 1.0));
        canvas.draw_rect(rect, &body);
    }
}

fn draw_histogram_series(canvas: &skia::Canvas, map: &Mapping, s: &Series, theme: &Theme) {
    let body = fill_paint(series_color(s, theme));
    let edge = stroke_paint(theme.background, 1.0);
    let y_base = map.sy(s.baseline_value());
    for &(left, count) in &s.data_xy {
        let rect = skia::Rect::from_ltrb(map.sx(left), map.sy(count).min(y_base), map.sx(left + s.bar_width), y_base);
        canvas.draw_rect(rect, &body);
        canvas.draw_rect(rect, &edge);
    }
}

fn draw_scatter_series(canvas: &skia::Canvas, map: &Mapping, s: &Series, theme: &Theme) {
    let radius = clamp(map.dx(0.25), 3.0, 6.0);
    for (i, &(x, y)) in s.data_xy.iter().enumerate() {
        let color = match (s.role, s.groups.get(i)) {
            (SeriesRole::Clusters, Some(&g)) => theme.cluster_color(g),
            _ => series_color(s, theme),
        };
        canvas.draw_circle((map.sx(x), map.sy(y)), radius, &fill_paint(color));
    }
}

fn draw_area_series(canvas: &skia::Canvas, map: &Mapping, s: &Series, theme: &Theme) {
    let data = &s.data_xy;
    let (Some(&(first_x, _)), Some(&(last_x, _))) = (data.first(), data.last()) else {
        return;
    };
    let y_base = map.sy(s.baseline_value());

    let mut fill = skia::Path::new();
    fill.move_to((map.sx(first_x), y_base));
    for &(x, y) in data {
        fill.line_to((map.sx(x), map.sy(y)));
    }
    fill.line_to((map.sx(last_x), y_base));
    fill.close();
    canvas.draw_path(&fill, &fill_paint(theme.area_fill));

    if data.len() >= 2 {
        let mut outline = skia::Path::new();
        outline.move_to((map.sx(first_x), map.sy(data[0].1)));
        for &(x, y) in data.iter().skip(1) {
            outline.line_to((map.sx(x), map.sy(y)));
        }
        canvas.draw_path(&outline, &stroke_paint(series_color(s, theme), 2.0));
    }
}

fn draw_pie_series(
    canvas: &skia::Canvas,
    rect: &PlotRect,
    s: &Series,
    theme: &Theme,
    shaper: Option<&TextShaper>,
) {
    let (cx, cy) = rect.center();
    let radius = rect.width().min(rect.height()) * 0.4;
    let oval = skia::Rect::from_ltrb(cx - radius, cy - radius, cx + radius, cy + radius);
    let edge = stroke_paint(theme.wedge_edge, 1.0);

    for (i, w) in s.wedges.iter().enumerate() {
        if w.sweep_deg <= 0.0 {
            continue;
        }
        // Skia angles run clockwise on screen; wedge angles run counter-clockwise.
        let mut path = skia::Path::new();
        path.move_to((cx, cy));
        path.arc_to(oval, -w.start_deg as f32, -w.sweep_deg as f32, false);
        path.close();
        canvas.draw_path(&path, &fill_paint(theme.wedge_color(i)));
        canvas.draw_path(&path, &edge);

        if let Some(shaper) = shaper {
            let mid = (w.start_deg + w.sweep_deg * 0.5).to_radians();
            let (dx, dy) = (mid.cos() as f32, -(mid.sin() as f32));
            let anchor = if dx >= 0.0 { Anchor::Left } else { Anchor::Right };
            let outer = (cx + dx * radius * 1.1, cy + dy * radius * 1.1 + 4.0);
            shaper.draw(canvas, &w.label, outer, 12.0, theme.axis_label, anchor);
            let inner = (cx + dx * radius * 0.6, cy + dy * radius * 0.6 + 4.0);
            shaper.draw(canvas, &w.percent_label(), inner, 12.0, theme.background, Anchor::Center);
        }
    }
}

fn draw_legend(
    canvas: &skia::Canvas,
    rect: &PlotRect,
    chart: &Chart,
    theme: &Theme,
    shaper: Option<&TextShaper>,
) {
    let entries = chart.legend();
    if entries.is_empty() {
        return;
    }
    let row_h = 18.0;
    let text_w = shaper
        .map(|sh| entries.iter().map(|(l, _)| sh.measure_width(l, 12.0)).fold(0.0, f32::max))
        .unwrap_or(0.0);
    let box_w = 36.0 + text_w + 8.0;
    let left = rect.right - box_w - 8.0;
    let top = rect.top + 8.0;
    let frame = skia::Rect::from_ltrb(left, top, left + box_w, top + row_h * entries.len() as f32 + 8.0);
    canvas.draw_rect(frame, &fill_paint(theme.background));
    canvas.draw_rect(frame, &stroke_paint(theme.grid, 1.0));

    for (i, (label, s)) in entries.iter().enumerate() {
        let y = top + 4.0 + row_h * (i as f32 + 0.5);
        let mut swatch = stroke_paint(series_color(s, theme), 2.0);
        if s.line_style == LineStyle::Dashed {
            swatch.set_path_effect(skia::PathEffect::dash(&[6.0, 3.0], 0.0));
        }
        canvas.draw_line((left + 6.0, y), (left + 30.0, y), &swatch);
        if let Some(shaper) = shaper {
            shaper.draw(canvas, label, (left + 36.0, y + 4.0), 12.0, theme.axis_label, Anchor::Left);
        }
    }
}
