// File: crates/livechart-core/src/geometry.rs
// Summary: Plot-area rectangle and the world-to-pixel mapping used by the rasterizer.

use crate::axis::Axis;
use crate::types::Insets;

/// Pixel rectangle of the plot area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl PlotRect {
    /// Plot area of a `width x height` surface after removing `insets`.
    /// Collapses to a 1px area rather than inverting when insets exceed the surface.
    pub fn inset(width: i32, height: i32, insets: &Insets) -> Self {
        let left = insets.left as f32;
        let top = insets.top as f32;
        let right = (width as f32 - insets.right as f32).max(left + 1.0);
        let bottom = (height as f32 - insets.bottom as f32).max(top + 1.0);
        Self { left, top, right, bottom }
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
    pub fn center(&self) -> (f32, f32) {
        ((self.left + self.right) * 0.5, (self.top + self.bottom) * 0.5)
    }
}

/// Linear mapping from chart coordinates into a [`PlotRect`].
#[derive(Clone, Copy, Debug)]
pub struct Mapping {
    rect: PlotRect,
    x_min: f64,
    x_span: f64,
    y_min: f64,
    y_span: f64,
}

impl Mapping {
    pub fn new(rect: PlotRect, x: &Axis, y: &Axis) -> Self {
        Self {
            rect,
            x_min: x.min,
            x_span: (x.max - x.min).max(1e-9),
            y_min: y.min,
            y_span: (y.max - y.min).max(1e-9),
        }
    }
    #[inline]
    pub fn sx(&self, x: f64) -> f32 {
        self.rect.left + ((x - self.x_min) / self.x_span) as f32 * self.rect.width()
    }
    #[inline]
    pub fn sy(&self, y: f64) -> f32 {
        self.rect.bottom - ((y - self.y_min) / self.y_span) as f32 * self.rect.height()
    }
    /// Pixel length of `dx` chart units along X.
    #[inline]
    pub fn dx(&self, dx: f64) -> f32 {
        (dx / self.x_span) as f32 * self.rect.width()
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}
