// File: crates/livechart-core/src/export.rs
// Summary: Serialize the rendered chart to PNG, JPEG or PDF chosen by file extension.

use std::io::Cursor;
use std::path::Path;

use tracing::info;

use crate::chart::Chart;
use crate::error::{ExportError, RenderError};
use crate::raster::RenderOptions;

const JPEG_QUALITY: u8 = 90;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Png,
    Jpeg,
    Pdf,
}

impl ExportFormat {
    /// Format implied by the path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, ExportError> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "png" => Ok(Self::Png),
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "pdf" => Ok(Self::Pdf),
            _ => Err(ExportError::unsupported(ext)),
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::Pdf => "pdf",
        }
    }
}

/// Encode an RGBA8 buffer as PNG or JPEG (alpha is dropped for JPEG).
pub fn encode_raster(pixels: Vec<u8>, width: u32, height: u32, format: ExportFormat) -> Result<Vec<u8>, ExportError> {
    let img = image::RgbaImage::from_raw(width, height, pixels).ok_or_else(|| {
        RenderError::Raster(anyhow::anyhow!("pixel buffer does not match {width}x{height}"))
    })?;
    let mut out = Cursor::new(Vec::new());
    match format {
        ExportFormat::Png => img.write_to(&mut out, image::ImageFormat::Png)?,
        ExportFormat::Jpeg => {
            let rgb = image::DynamicImage::ImageRgba8(img).to_rgb8();
            let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut out, JPEG_QUALITY);
            rgb.write_with_encoder(encoder)?;
        }
        ExportFormat::Pdf => {
            return Err(RenderError::Raster(anyhow::anyhow!("PDF is a vector format; use Chart::render_to_pdf_bytes")).into());
        }
    }
    Ok(out.into_inner())
}

/// Render `chart` and write it to `path` in the format its extension names.
/// Parent directories are created as needed.
pub fn export_chart(chart: &Chart, opts: &RenderOptions, path: impl AsRef<Path>) -> Result<ExportFormat, ExportError> {
    let path = path.as_ref();
    let format = ExportFormat::from_path(path)?;

    let bytes = match format {
        ExportFormat::Pdf => chart.render_to_pdf_bytes(opts).map_err(RenderError::from)?,
        ExportFormat::Png | ExportFormat::Jpeg => {
            let (pixels, w, h, _) = chart.render_to_rgba8(opts).map_err(RenderError::from)?;
            encode_raster(pixels, w, h, format)?
        }
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| ExportError::io(parent, e))?;
    }
    std::fs::write(path, &bytes).map_err(|e| ExportError::io(path, e))?;
    info!(path = %path.display(), format = format.extension(), bytes = bytes.len(), "exported chart");
    Ok(format)
}
