// File: crates/livechart-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors.

use skia_safe as skia;

/// Categorical palette for pie wedges (the classic 20-color tab20 cycle).
const TAB20: [(u8, u8, u8); 20] = [
    (31, 119, 180), (174, 199, 232), (255, 127, 14), (255, 187, 120),
    (44, 160, 44), (152, 223, 138), (214, 39, 40), (255, 152, 150),
    (148, 103, 189), (197, 176, 213), (140, 86, 75), (196, 156, 148),
    (227, 119, 194), (247, 182, 210), (127, 127, 127), (199, 199, 199),
    (188, 189, 34), (219, 219, 141), (23, 190, 207), (158, 218, 229),
];

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub line_stroke: skia::Color,
    pub bar_fill: skia::Color,
    pub histogram: skia::Color,
    pub area_fill: skia::Color,
    pub trend: skia::Color,
    pub clusters: [skia::Color; 2],
    pub wedge_edge: skia::Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            line_stroke: skia::Color::from_argb(255, 64, 160, 255),
            bar_fill: skia::Color::from_argb(255, 64, 160, 255),
            histogram: skia::Color::from_argb(255, 96, 156, 255),
            area_fill: skia::Color::from_argb(96, 64, 160, 255),
            trend: skia::Color::from_argb(255, 235, 80, 80),
            clusters: [
                skia::Color::from_argb(255, 255, 200, 60),
                skia::Color::from_argb(255, 170, 110, 255),
            ],
            wedge_edge: skia::Color::from_argb(255, 18, 18, 20),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            grid: skia::Color::from_argb(255, 230, 230, 235),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            tick: skia::Color::from_argb(255, 100, 100, 110),
            line_stroke: skia::Color::from_argb(255, 32, 120, 200),
            bar_fill: skia::Color::from_argb(255, 32, 120, 200),
            histogram: skia::Color::from_argb(255, 40, 120, 200),
            area_fill: skia::Color::from_argb(80, 32, 120, 200),
            trend: skia::Color::from_argb(255, 200, 40, 40),
            clusters: [
                skia::Color::from_argb(255, 68, 1, 84),
                skia::Color::from_argb(255, 253, 231, 37),
            ],
            wedge_edge: skia::Color::from_argb(255, 255, 255, 255),
        }
    }

    /// Fill for the `i`-th pie wedge; cycles through the palette.
    pub fn wedge_color(&self, i: usize) -> skia::Color {
        let (r, g, b) = TAB20[i % TAB20.len()];
        skia::Color::from_argb(255, r, g, b)
    }

    /// Color for cluster `label`.
    pub fn cluster_color(&self, label: usize) -> skia::Color {
        self.clusters[label % self.clusters.len()]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::dark)
}
