/// Photo loader
///
/// Reads the selected file into memory, checks that the model can take it
/// inline, and decodes a downscaled copy for the on-screen preview.
/// The bytes sent to the model are the file bytes, untouched.

use image::{imageops::FilterType, DynamicImage, ImageFormat};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::task;
use tracing::debug;

use crate::error::ImageError;
use crate::state::data::{LoadedImage, PreviewPixels};

/// Largest payload the API accepts as inline data (20 MiB)
pub const MAX_INLINE_BYTES: usize = 20 * 1024 * 1024;

/// Longest edge of the preview image
const PREVIEW_SIZE: u32 = 512;

/// Formats the model accepts inline
const ACCEPTED_FORMATS: [ImageFormat; 3] = [ImageFormat::Png, ImageFormat::Jpeg, ImageFormat::WebP];

/// Extensions offered by the file picker
pub const PICKER_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "webp"];

/// Load a photo selected by the user
///
/// # Returns
/// * `Err(ImageError::NoFile)` - no file was provided (dialog cancelled)
/// * `Ok(LoadedImage)` - bytes, detected MIME type and preview pixels
pub async fn load_image(file: Option<PathBuf>) -> Result<LoadedImage, ImageError> {
    let path = file.ok_or(ImageError::NoFile)?;

    // Spawn blocking because decoding a large photo is CPU-intensive
    task::spawn_blocking(move || load_image_blocking(&path))
        .await
        .map_err(|e| ImageError::Task(e.to_string()))?
}

/// Blocking implementation of photo loading
fn load_image_blocking(path: &Path) -> Result<LoadedImage, ImageError> {
    let bytes = fs::read(path).map_err(|e| ImageError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());

    decode_image(name, bytes)
}

/// Validate in-memory bytes and build the preview
pub fn decode_image(name: String, bytes: Vec<u8>) -> Result<LoadedImage, ImageError> {
    if bytes.len() > MAX_INLINE_BYTES {
        return Err(ImageError::TooLarge {
            size: bytes.len(),
            limit: MAX_INLINE_BYTES,
        });
    }

    // Sniff the content, the extension may lie
    let format = image::guess_format(&bytes)
        .map_err(|_| ImageError::Decode(format!("{} is not a recognized image", name)))?;
    if !ACCEPTED_FORMATS.contains(&format) {
        return Err(ImageError::Unsupported(format!("{:?}", format)));
    }

    let img = image::load_from_memory_with_format(&bytes, format)
        .map_err(|e| ImageError::Decode(e.to_string()))?;

    let (width, height) = (img.width(), img.height());
    let preview = preview_pixels(&img);
    debug!(
        "Decoded {} ({}x{}), preview {}x{}",
        name, width, height, preview.width, preview.height
    );

    Ok(LoadedImage {
        name,
        mime_type: format.to_mime_type().to_string(),
        bytes: Arc::from(bytes),
        width,
        height,
        preview,
    })
}

/// Downscale (never upscale) to fit the preview box
fn preview_pixels(img: &DynamicImage) -> PreviewPixels {
    let rgba = if img.width() > PREVIEW_SIZE || img.height() > PREVIEW_SIZE {
        img.resize(PREVIEW_SIZE, PREVIEW_SIZE, FilterType::Lanczos3)
            .to_rgba8()
    } else {
        img.to_rgba8()
    };

    PreviewPixels {
        width: rgba.width(),
        height: rgba.height(),
        rgba: rgba.into_raw(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use tempfile::tempdir;

    fn write_image(path: &Path, width: u32, height: u32) {
        RgbaImage::from_pixel(width, height, Rgba([200, 150, 120, 255]))
            .save(path)
            .unwrap();
    }

    #[tokio::test]
    async fn test_no_file_is_invalid_input() {
        let result = load_image(None).await;
        assert_eq!(result.unwrap_err(), ImageError::NoFile);
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let result = load_image(Some(PathBuf::from("/nonexistent/selfie.png"))).await;
        assert!(matches!(result, Err(ImageError::Io { .. })));
    }

    #[tokio::test]
    async fn test_png_loads_with_mime_and_dimensions() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("selfie.png");
        write_image(&path, 4, 3);

        let loaded = load_image(Some(path.clone())).await.unwrap();

        assert_eq!(loaded.name, "selfie.png");
        assert_eq!(loaded.mime_type, "image/png");
        assert_eq!((loaded.width, loaded.height), (4, 3));
        // Small images are not upscaled
        assert_eq!((loaded.preview.width, loaded.preview.height), (4, 3));
        assert_eq!(loaded.preview.rgba.len(), 4 * 3 * 4);
        assert_eq!(&loaded.bytes[..], &fs::read(&path).unwrap()[..]);
    }

    #[test]
    fn test_large_image_preview_is_downscaled() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("wide.png");
        write_image(&path, 1024, 600);

        let loaded = load_image_blocking(&path).unwrap();

        assert_eq!((loaded.width, loaded.height), (1024, 600));
        assert_eq!(loaded.preview.width, 512);
        assert_eq!(loaded.preview.height, 300);
    }

    #[test]
    fn test_content_beats_extension() {
        let dir = tempdir().unwrap();
        let png = dir.path().join("real.png");
        write_image(&png, 2, 2);
        let disguised = dir.path().join("photo.jpg");
        fs::copy(&png, &disguised).unwrap();

        let loaded = load_image_blocking(&disguised).unwrap();
        assert_eq!(loaded.mime_type, "image/png");
    }

    #[test]
    fn test_gif_is_unsupported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("anim.gif");
        write_image(&path, 2, 2);

        let err = load_image_blocking(&path).unwrap_err();
        assert!(matches!(err, ImageError::Unsupported(_)));
    }

    #[test]
    fn test_text_file_is_rejected() {
        let err = decode_image("notes.png".to_string(), b"not an image".to_vec()).unwrap_err();
        assert!(matches!(err, ImageError::Decode(_)));
    }

    #[test]
    fn test_oversized_payload_is_rejected() {
        let err = decode_image("huge.jpg".to_string(), vec![0u8; MAX_INLINE_BYTES + 1]).unwrap_err();
        assert_eq!(
            err,
            ImageError::TooLarge {
                size: MAX_INLINE_BYTES + 1,
                limit: MAX_INLINE_BYTES
            }
        );
    }
}
