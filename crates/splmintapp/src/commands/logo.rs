use crate::commands::{CmdMessage, CmdResult};
use crate::error::{MintError, Result};
use crate::model::{LogoPreview, LogoSource};
use image::imageops::FilterType;
use image::ImageFormat;
use std::fs;
use std::io;
use std::path::Path;

/// Logos are previewed at a fixed square size.
pub const PREVIEW_SIZE: u32 = 100;

fn read_source(source: &LogoSource) -> Result<Vec<u8>> {
    match source {
        LogoSource::File(path) => fs::read(path).map_err(|e| {
            MintError::ImageLoadFailed(format!("{}: {}", path.display(), e))
        }),
        LogoSource::Url(url) => fetch(url),
    }
}

fn fetch(url: &str) -> Result<Vec<u8>> {
    tracing::debug!(url, "fetching logo");
    let failed = |e: reqwest::Error| MintError::ImageLoadFailed(format!("{}: {}", url, e));
    let response = reqwest::blocking::get(url)
        .and_then(|r| r.error_for_status())
        .map_err(failed)?;
    let bytes = response.bytes().map_err(failed)?;
    Ok(bytes.to_vec())
}

/// Decode image bytes and resize them to the preview size.
pub fn decode_preview(bytes: &[u8], source: LogoSource) -> Result<LogoPreview> {
    let decoded = image::load_from_memory(bytes)
        .map_err(|e| MintError::ImageLoadFailed(format!("{}: {}", source, e)))?;
    let image = decoded
        .resize_exact(PREVIEW_SIZE, PREVIEW_SIZE, FilterType::Triangle)
        .to_rgba8();
    Ok(LogoPreview { source, image })
}

/// Load a logo from a local file or a URL.
pub fn load(source: &LogoSource) -> Result<LogoPreview> {
    let bytes = read_source(source)?;
    decode_preview(&bytes, source.clone())
}

/// Write the preview as a PNG file.
pub fn save_png(preview: &LogoPreview, path: &Path) -> Result<()> {
    preview
        .image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| MintError::Io(io::Error::new(io::ErrorKind::Other, e.to_string())))
}

pub fn run(source: &LogoSource, out: Option<&Path>) -> Result<CmdResult> {
    let preview = load(source)?;
    let (width, height) = preview.dimensions();
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Logo loaded from {} ({}x{})",
        source, width, height
    )));
    if let Some(path) = out {
        save_png(&preview, path)?;
        result.add_message(CmdMessage::info(format!(
            "Preview saved to {}",
            path.display()
        )));
    }
    Ok(result.with_logo(preview))
}
