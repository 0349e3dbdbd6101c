//! Tree icon rendering and PNG output

mod layout;
mod palette;
mod raster;

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use image::{ColorType, ImageFormat, RgbaImage};
use serde::Serialize;
use thiserror::Error;

pub use layout::*;
pub use palette::*;

/// Sizes generated when none are configured (toolbar, extensions page, store)
pub const DEFAULT_SIZES: [u32; 3] = [16, 48, 128];

/// Smallest renderable size
pub const MIN_SIZE: u32 = 1;

/// Largest renderable size
pub const MAX_SIZE: u32 = 4096;

/// Errors that can occur while rendering or writing icons
#[derive(Debug, Error)]
pub enum IconError {
    #[error("Invalid icon size {0} (expected {min}..={max})", min = MIN_SIZE, max = MAX_SIZE)]
    InvalidSize(u32),

    #[error("Failed to write {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Image error for {}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Check that a size can be rendered
pub fn validate_size(size: u32) -> Result<u32, IconError> {
    if (MIN_SIZE..=MAX_SIZE).contains(&size) {
        Ok(size)
    } else {
        Err(IconError::InvalidSize(size))
    }
}

/// Drop repeated sizes, keeping the first occurrence of each
pub fn dedup_sizes(sizes: &[u32]) -> Vec<u32> {
    let mut unique = Vec::with_capacity(sizes.len());
    for &size in sizes {
        if !unique.contains(&size) {
            unique.push(size);
        }
    }
    unique
}

/// File name for an icon of the given size
pub fn icon_file_name(size: u32) -> String {
    format!("icon{}.png", size)
}

/// Render the tree icon at `size` x `size` pixels
pub fn render_icon(size: u32, palette: &Palette) -> Result<RgbaImage, IconError> {
    validate_size(size)?;

    let layout = TreeLayout::for_size(size);
    let mut canvas = raster::transparent_canvas(layout.size);

    for (kind, rect) in layout.shapes() {
        let color = match kind {
            ShapeKind::Trunk => palette.trunk,
            ShapeKind::Crown => palette.crown,
            ShapeKind::Highlight => palette.highlight,
        };

        if kind.is_round() {
            raster::fill_ellipse(&mut canvas, rect, color);
        } else {
            raster::fill_rect(&mut canvas, rect, color);
        }
    }

    Ok(canvas)
}

/// Encode an icon as PNG into `dir`, returning the written path
pub fn write_icon(image: &RgbaImage, dir: &Path, size: u32) -> Result<PathBuf, IconError> {
    std::fs::create_dir_all(dir).map_err(|source| IconError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(icon_file_name(size));
    image
        .save_with_format(&path, ImageFormat::Png)
        .map_err(|source| IconError::Image {
            path: path.clone(),
            source,
        })?;

    Ok(path)
}

/// Decoded properties of an icon file on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconInfo {
    pub width: u32,
    pub height: u32,
    pub has_alpha: bool,
}

/// Decode a PNG and report its dimensions
pub fn inspect_icon(path: &Path) -> Result<IconInfo, IconError> {
    let decoded = image::open(path).map_err(|source| IconError::Image {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(IconInfo {
        width: decoded.width(),
        height: decoded.height(),
        has_alpha: decoded.color() == ColorType::Rgba8,
    })
}

/// One icon written by `generate_all`
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedIcon {
    pub size: u32,
    pub path: PathBuf,
    pub bytes: u64,
}

/// Summary of a generation run
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub output_dir: PathBuf,
    pub icons: Vec<GeneratedIcon>,
    pub generated_at: DateTime<Utc>,
}

/// Render and write one icon per size, in order
pub fn generate_all(
    sizes: &[u32],
    palette: &Palette,
    output_dir: &Path,
) -> Result<GenerationReport, IconError> {
    let sizes = dedup_sizes(sizes);
    for &size in &sizes {
        validate_size(size)?;
    }

    let mut icons = Vec::with_capacity(sizes.len());
    for size in sizes {
        let image = render_icon(size, palette)?;
        let path = write_icon(&image, output_dir, size)?;
        let bytes = std::fs::metadata(&path)
            .map(|m| m.len())
            .map_err(|source| IconError::Io {
                path: path.clone(),
                source,
            })?;

        tracing::debug!("Wrote {} ({} bytes)", path.display(), bytes);
        icons.push(GeneratedIcon { size, path, bytes });
    }

    Ok(GenerationReport {
        output_dir: output_dir.to_path_buf(),
        icons,
        generated_at: Utc::now(),
    })
}
