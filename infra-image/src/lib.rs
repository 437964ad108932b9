use std::io::Cursor;

use async_trait::async_trait;
use image::error::ImageError;
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat};

use pixfit_domain::{
    DomainError, FetchedImage, ImageTransformPort, SizingInstruction, TransformMode,
    TransformedImage,
};

/// Pixel-processing adapter on top of the `image` crate. Decode, geometry
/// and re-encode run on a blocking worker thread; the adapter itself holds
/// no state.
#[derive(Default)]
pub struct ImageTransformAdapter;

impl ImageTransformAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ImageTransformPort for ImageTransformAdapter {
    async fn transform(
        &self,
        image: FetchedImage,
        sizing: SizingInstruction,
        mode: TransformMode,
    ) -> Result<TransformedImage, DomainError> {
        let media_type = image.media_type;
        let bytes = tokio::task::spawn_blocking(move || {
            transform_blocking(&image.bytes, sizing, mode)
        })
        .await
        .map_err(|err| DomainError::internal_error(format!("transform task failed: {err}")))??;

        tracing::debug!(
            media_type = %media_type,
            output_bytes = bytes.len(),
            mode = mode.as_str(),
            "image transform completed"
        );

        Ok(TransformedImage { bytes, media_type })
    }
}

fn transform_blocking(
    bytes: &[u8],
    sizing: SizingInstruction,
    mode: TransformMode,
) -> Result<Vec<u8>, DomainError> {
    let format = image::guess_format(bytes)
        .map_err(|err| DomainError::invalid_image(err.to_string()))?;
    let source = image::load_from_memory_with_format(bytes, format)
        .map_err(|err| DomainError::invalid_image(err.to_string()))?;

    let output = match mode {
        TransformMode::Resize => apply_resize(&source, sizing),
        TransformMode::Crop => apply_crop(&source, sizing),
    };

    encode(&output, format)
}

/// Expand the sizing instruction into a concrete pixel box. With
/// `preserve_aspect_ratio` the missing dimension is derived from the source
/// aspect ratio, rounded to the nearest pixel, never below 1.
fn target_box(source: &DynamicImage, sizing: SizingInstruction) -> (u32, u32) {
    if !sizing.preserve_aspect_ratio {
        return (sizing.target_width, sizing.target_height);
    }
    if sizing.target_width > 0 {
        let height = scale_dimension(source.height(), source.width(), sizing.target_width);
        (sizing.target_width, height)
    } else {
        let width = scale_dimension(source.width(), source.height(), sizing.target_height);
        (width, sizing.target_height)
    }
}

fn scale_dimension(scaled_axis: u32, fixed_axis: u32, target: u32) -> u32 {
    let fixed = u64::from(fixed_axis.max(1));
    let scaled = (u64::from(scaled_axis) * u64::from(target) + fixed / 2) / fixed;
    scaled.clamp(1, u64::from(u32::MAX)) as u32
}

fn apply_resize(source: &DynamicImage, sizing: SizingInstruction) -> DynamicImage {
    let (width, height) = target_box(source, sizing);
    source.resize_exact(width, height, FilterType::Lanczos3)
}

/// Center-anchored crop. The box is clamped to the source bounds; a crop
/// can only discard pixels, never invent them.
fn apply_crop(source: &DynamicImage, sizing: SizingInstruction) -> DynamicImage {
    let (width, height) = target_box(source, sizing);
    let width = width.min(source.width());
    let height = height.min(source.height());
    let x = (source.width() - width) / 2;
    let y = (source.height() - height) / 2;
    source.crop_imm(x, y, width, height)
}

fn encode(image: &DynamicImage, format: ImageFormat) -> Result<Vec<u8>, DomainError> {
    let mut buffer = Cursor::new(Vec::new());
    image.write_to(&mut buffer, format).map_err(|err| match err {
        ImageError::Unsupported(reason) => DomainError::invalid_image(reason.to_string()),
        other => DomainError::internal_error(format!("encoding failed: {other}")),
    })?;
    Ok(buffer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_ratio_scaling_rounds_to_nearest_pixel() {
        assert_eq!(scale_dimension(600, 800, 400), 300);
        assert_eq!(scale_dimension(800, 600, 300), 400);
        assert_eq!(scale_dimension(100, 300, 1), 1);
        assert_eq!(scale_dimension(1, 4096, 10), 1);
    }
}
