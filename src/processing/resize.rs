//! Resize engine: decode, scale, and re-encode one image in memory.
//!
//! Scaling goes through `fast_image_resize` in a single whole-image pass
//! with a bilinear filter; encoding targets the source's own format.

use std::io::Cursor;

use fast_image_resize as fr;
use image::{DynamicImage, GenericImageView, ImageBuffer, Rgba};
use tracing::debug;

use crate::core::{ResizeRequest, SourceImage};
use crate::utils::{OutputFormat, ResizerError, ResizerResult};

/// Resizes one source image according to `request` and returns the
/// re-encoded bytes.
///
/// The decoded raster and the intermediate scale buffer are function-locals
/// and are released on every exit path. Callers are responsible for
/// validating the request dimensions first.
pub fn resize(source: &SourceImage, request: &ResizeRequest) -> ResizerResult<Vec<u8>> {
    let format = OutputFormat::from_mime_type(&source.mime_type)?;

    let decoded = image::load_from_memory(&source.bytes)
        .map_err(|e| ResizerError::decode(format!("Failed to decode '{}': {}", source.name, e)))?;

    let (intrinsic_w, intrinsic_h) = decoded.dimensions();
    let (final_w, final_h) = target_dimensions(intrinsic_w, intrinsic_h, request);

    debug!(
        "Resizing '{}': {}x{} -> {}x{}",
        source.name, intrinsic_w, intrinsic_h, final_w, final_h
    );

    let scaled = scale(decoded, final_w, final_h)?;
    encode(scaled, format, &source.name)
}

/// Computes the output dimensions for a source raster.
///
/// With the aspect ratio preserved, height is derived solely from the
/// target width and the source's intrinsic ratio; the requested height is
/// ignored. Non-integer results round to nearest, with a floor of one pixel
/// so the raster stays encodable.
pub(crate) fn target_dimensions(
    intrinsic_w: u32,
    intrinsic_h: u32,
    request: &ResizeRequest,
) -> (u32, u32) {
    if request.preserve_aspect_ratio {
        let aspect = intrinsic_w as f64 / intrinsic_h as f64;
        let height = (request.target_width as f64 / aspect).round() as u32;
        (request.target_width, height.max(1))
    } else {
        (request.target_width, request.target_height)
    }
}

/// Scales the decoded raster to exactly `width` x `height` in one pass.
fn scale(decoded: DynamicImage, width: u32, height: u32) -> ResizerResult<DynamicImage> {
    let src = decoded.into_rgba8();
    let (src_w, src_h) = src.dimensions();

    let src_image =
        fr::images::Image::from_vec_u8(src_w, src_h, src.into_raw(), fr::PixelType::U8x4)
            .map_err(|e| ResizerError::processing(format!("Source raster buffer invalid: {}", e)))?;

    let mut dst_image = fr::images::Image::new(width, height, fr::PixelType::U8x4);

    let mut resizer = fr::Resizer::new();
    let options =
        fr::ResizeOptions::new().resize_alg(fr::ResizeAlg::Convolution(fr::FilterType::Bilinear));

    resizer
        .resize(&src_image, &mut dst_image, Some(&options))
        .map_err(|e| ResizerError::processing(format!("Scale failed: {}", e)))?;

    let raster = ImageBuffer::<Rgba<u8>, Vec<u8>>::from_raw(width, height, dst_image.into_vec())
        .ok_or_else(|| ResizerError::processing("Scaled buffer length mismatch"))?;

    Ok(DynamicImage::ImageRgba8(raster))
}

/// Re-encodes the scaled raster to the target format.
fn encode(raster: DynamicImage, format: OutputFormat, name: &str) -> ResizerResult<Vec<u8>> {
    // JPEG has no alpha channel; flatten before encoding.
    let raster = if format.requires_opaque() {
        DynamicImage::ImageRgb8(raster.to_rgb8())
    } else {
        raster
    };

    let mut buffer = Cursor::new(Vec::new());
    raster
        .write_to(&mut buffer, format.to_image_format())
        .map_err(|e| {
            ResizerError::encode(format!("Failed to encode '{}' as {:?}: {}", name, format, e))
        })?;

    let bytes = buffer.into_inner();
    if bytes.is_empty() {
        return Err(ResizerError::encode(format!(
            "Encoding '{}' produced no output",
            name
        )));
    }

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png_source(name: &str, width: u32, height: u32) -> SourceImage {
        let raster =
            DynamicImage::ImageRgba8(ImageBuffer::from_pixel(width, height, Rgba([10, 20, 30, 255])));
        let mut cursor = Cursor::new(Vec::new());
        raster.write_to(&mut cursor, image::ImageFormat::Png).unwrap();
        SourceImage::new(name, cursor.into_inner(), "image/png")
    }

    #[test]
    fn aspect_lock_derives_height_from_width_alone() {
        let request = ResizeRequest {
            target_width: 800,
            target_height: 600,
            preserve_aspect_ratio: true,
        };
        // 4:1 source; the requested 600 is ignored.
        assert_eq!(target_dimensions(1600, 400, &request), (800, 200));
    }

    #[test]
    fn unlocked_dimensions_pass_through_exactly() {
        let request = ResizeRequest {
            target_width: 321,
            target_height: 123,
            preserve_aspect_ratio: false,
        };
        assert_eq!(target_dimensions(1600, 400, &request), (321, 123));
    }

    #[test]
    fn fractional_heights_round_to_nearest() {
        let request = ResizeRequest {
            target_width: 100,
            target_height: 1,
            preserve_aspect_ratio: true,
        };
        // 3:2 ratio: 100 / 1.5 = 66.67 -> 67
        assert_eq!(target_dimensions(300, 200, &request), (100, 67));
    }

    #[test]
    fn derived_height_never_collapses_to_zero() {
        let request = ResizeRequest {
            target_width: 100,
            target_height: 1,
            preserve_aspect_ratio: true,
        };
        // 10000:1 ratio would round to 0.
        assert_eq!(target_dimensions(10000, 1, &request), (100, 1));
    }

    #[test]
    fn resized_output_decodes_to_the_requested_dimensions() {
        let source = png_source("square.png", 16, 16);
        let request = ResizeRequest {
            target_width: 5,
            target_height: 9,
            preserve_aspect_ratio: false,
        };

        let bytes = resize(&source, &request).unwrap();
        let output = image::load_from_memory(&bytes).unwrap();
        assert_eq!(output.dimensions(), (5, 9));
    }

    #[test]
    fn output_keeps_the_source_format() {
        let source = png_source("square.png", 8, 8);
        let bytes = resize(&source, &ResizeRequest::default()).unwrap();
        assert_eq!(image::guess_format(&bytes).unwrap(), image::ImageFormat::Png);
    }

    #[test]
    fn undecodable_bytes_fail_with_decode_error() {
        let source = SourceImage::new("broken.png", b"definitely not an image".to_vec(), "image/png");
        let result = resize(&source, &ResizeRequest::default());
        assert!(matches!(result, Err(ResizerError::Decode(_))));
    }

    #[test]
    fn unknown_mime_type_fails_with_format_error() {
        let mut source = png_source("weird.png", 8, 8);
        source.mime_type = "application/octet-stream".to_string();
        let result = resize(&source, &ResizeRequest::default());
        assert!(matches!(result, Err(ResizerError::Format(_))));
    }

    #[test]
    fn jpeg_sources_reencode_despite_alpha() {
        let raster =
            DynamicImage::ImageRgba8(ImageBuffer::from_pixel(12, 12, Rgba([10, 20, 30, 128])));
        let mut cursor = Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(raster.to_rgb8())
            .write_to(&mut cursor, image::ImageFormat::Jpeg)
            .unwrap();
        let source = SourceImage::new("photo.jpg", cursor.into_inner(), "image/jpeg");

        let request = ResizeRequest {
            target_width: 6,
            target_height: 6,
            preserve_aspect_ratio: false,
        };
        let bytes = resize(&source, &request).unwrap();
        assert_eq!(image::guess_format(&bytes).unwrap(), image::ImageFormat::Jpeg);
    }
}
