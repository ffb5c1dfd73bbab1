use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::utils::ResizerError;

/// Output encoding target, derived from a source image's MIME type.
///
/// Covers the formats the `image` crate can both decode and encode, so a
/// successfully decoded source can always be re-encoded to its own format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Jpeg,
    Png,
    WebP,
    Gif,
    Bmp,
    Tiff,
}

impl OutputFormat {
    /// Maps a MIME type (e.g. `"image/jpeg"`) to an output format.
    pub fn from_mime_type(mime: &str) -> Result<Self, ResizerError> {
        let normalized = mime.trim().to_ascii_lowercase();
        let subtype = normalized
            .strip_prefix("image/")
            .ok_or_else(|| ResizerError::format(format!("Not an image MIME type: {}", mime)))?;

        subtype.parse()
    }

    /// The corresponding `image` crate format.
    pub fn to_image_format(self) -> image::ImageFormat {
        match self {
            Self::Jpeg => image::ImageFormat::Jpeg,
            Self::Png => image::ImageFormat::Png,
            Self::WebP => image::ImageFormat::WebP,
            Self::Gif => image::ImageFormat::Gif,
            Self::Bmp => image::ImageFormat::Bmp,
            Self::Tiff => image::ImageFormat::Tiff,
        }
    }

    /// Whether the encoder rejects an alpha channel.
    ///
    /// JPEG output must be flattened to RGB before encoding.
    pub fn requires_opaque(self) -> bool {
        matches!(self, Self::Jpeg)
    }

    /// Get file extensions associated with this format
    pub fn extensions(&self) -> &[&str] {
        match self {
            Self::Jpeg => &["jpg", "jpeg"],
            Self::Png => &["png"],
            Self::WebP => &["webp"],
            Self::Gif => &["gif"],
            Self::Bmp => &["bmp"],
            Self::Tiff => &["tif", "tiff"],
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ResizerError;

    fn from_str(subtype: &str) -> Result<Self, Self::Err> {
        match subtype {
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "png" => Ok(Self::Png),
            "webp" => Ok(Self::WebP),
            "gif" => Ok(Self::Gif),
            "bmp" => Ok(Self::Bmp),
            "tif" | "tiff" => Ok(Self::Tiff),
            _ => Err(ResizerError::format(format!(
                "Unsupported image format: {}",
                subtype
            ))),
        }
    }
}
