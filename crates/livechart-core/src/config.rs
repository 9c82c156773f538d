// File: crates/livechart-core/src/config.rs
// Summary: Application configuration as code-level defaults (nothing is persisted).

use crate::raster::RenderOptions;
use crate::stream::StreamConfig;
use crate::theme;

#[derive(Clone, Copy, Debug, Default)]
pub struct AppConfig {
    pub render: RenderOptions,
    pub stream: StreamConfig,
}

impl AppConfig {
    /// Defaults with the named theme preset (unknown names fall back to dark).
    pub fn with_theme(name: &str) -> Self {
        let mut cfg = Self::default();
        cfg.render.theme = theme::find(name);
        cfg
    }

    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.render.width = width;
        self.render.height = height;
        self
    }
}
