use std::{fmt, path::Path};

use image::ImageReader;
use log::{debug, warn};

/// 无法读取图片尺寸时使用的默认值
pub const FALLBACK_DIMENSIONS: Dimensions = Dimensions { width: 196, height: 196 };

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[derive(Debug)]
pub enum DimensionError {
    Open(std::io::Error),
    Decode(image::ImageError),
}

impl fmt::Display for DimensionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DimensionError::Open(err) => write!(f, "Failed to open image: {err}"),
            DimensionError::Decode(err) => write!(f, "Failed to read image header: {err}"),
        }
    }
}

impl std::error::Error for DimensionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DimensionError::Open(err) => Some(err),
            DimensionError::Decode(err) => Some(err),
        }
    }
}

/// Dimensions together with the reason they had to be substituted, if any.
#[derive(Debug)]
pub struct DimensionReading {
    pub dimensions: Dimensions,
    pub fallback: Option<DimensionError>,
}

impl DimensionReading {
    pub fn is_fallback(&self) -> bool {
        self.fallback.is_some()
    }
}

/// Read the pixel size from the image header without decoding pixels.
pub fn measure(path: &Path) -> Result<Dimensions, DimensionError> {
    // 按文件内容识别格式, 不只依赖扩展名
    let reader = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(DimensionError::Open)?;
    let (width, height) = reader.into_dimensions().map_err(DimensionError::Decode)?;
    Ok(Dimensions { width, height })
}

/// Best-effort variant of [`measure`]: any failure is logged and replaced by
/// [`FALLBACK_DIMENSIONS`].
pub fn read_dimensions(path: &Path) -> DimensionReading {
    match measure(path) {
        Ok(dimensions) => {
            debug!("Read dimensions {dimensions} from {}", path.display());
            DimensionReading { dimensions, fallback: None }
        }
        Err(e) => {
            warn!("Could not read image dimensions: {e}, using {FALLBACK_DIMENSIONS}");
            DimensionReading { dimensions: FALLBACK_DIMENSIONS, fallback: Some(e) }
        }
    }
}
