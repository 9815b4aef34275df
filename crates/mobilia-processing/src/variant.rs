//! Image variant generator.
//!
//! One decode, three encodes: thumbnail (300x300 cover crop), medium
//! (contained in 800x800) and original (contained in 1600x1600), all
//! re-encoded as JPEG at fixed per-variant qualities. The contained variants
//! never upscale a smaller source.

use bytes::Bytes;
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, GenericImageView, ImageReader};
use mobilia_core::models::ImageVariant;
use std::io::Cursor;

#[derive(Debug, thiserror::Error)]
pub enum ProcessingError {
    #[error("Failed to decode image: {0}")]
    Decode(String),

    #[error("Failed to encode image: {0}")]
    Encode(String),
}

/// The three derived JPEG buffers for one upload. Immutable once produced.
#[derive(Debug, Clone)]
pub struct ImageVariantSet {
    pub thumbnail: Bytes,
    pub medium: Bytes,
    pub original: Bytes,
}

impl ImageVariantSet {
    pub fn get(&self, variant: ImageVariant) -> &Bytes {
        match variant {
            ImageVariant::Thumbnail => &self.thumbnail,
            ImageVariant::Medium => &self.medium,
            ImageVariant::Original => &self.original,
        }
    }
}

pub struct VariantGenerator;

impl VariantGenerator {
    /// Produce all three renditions from raw image bytes.
    ///
    /// The input format is guessed from the bytes; any decodable raster
    /// format is accepted. Fails if the input is not a decodable image.
    pub fn generate(data: &[u8]) -> Result<ImageVariantSet, ProcessingError> {
        let img = ImageReader::new(Cursor::new(data))
            .with_guessed_format()
            .map_err(|e| ProcessingError::Decode(e.to_string()))?
            .decode()
            .map_err(|e| ProcessingError::Decode(e.to_string()))?;

        let (width, height) = img.dimensions();
        tracing::debug!(width, height, "Decoded upload for variant generation");

        let thumbnail = Self::encode_jpeg(
            &Self::cover(&img, ImageVariant::Thumbnail.bound()),
            ImageVariant::Thumbnail.jpeg_quality(),
        )?;
        let medium = Self::encode_jpeg(
            &Self::contain(&img, ImageVariant::Medium.bound()),
            ImageVariant::Medium.jpeg_quality(),
        )?;
        let original = Self::encode_jpeg(
            &Self::contain(&img, ImageVariant::Original.bound()),
            ImageVariant::Original.jpeg_quality(),
        )?;

        Ok(ImageVariantSet {
            thumbnail,
            medium,
            original,
        })
    }

    /// Cover fit: scale to fill `side`x`side` and center-crop the overflow.
    fn cover(img: &DynamicImage, side: u32) -> DynamicImage {
        let (w, h) = img.dimensions();
        img.resize_to_fill(side, side, Self::select_filter(w, h, side, side))
    }

    /// Inside fit: scale down to fit within `bound`x`bound`, preserving
    /// aspect ratio. Sources already inside the box pass through unresized
    /// (re-encode only, no upscaling).
    fn contain(img: &DynamicImage, bound: u32) -> DynamicImage {
        let (w, h) = img.dimensions();
        if w <= bound && h <= bound {
            return img.clone();
        }
        img.resize(bound, bound, Self::select_filter(w, h, bound, bound))
    }

    /// Select the downscale filter by resize ratio: cheaper filters for large
    /// reductions where ringing is invisible, Lanczos3 near 1:1.
    fn select_filter(
        orig_width: u32,
        orig_height: u32,
        new_width: u32,
        new_height: u32,
    ) -> image::imageops::FilterType {
        let width_ratio = orig_width as f32 / new_width as f32;
        let height_ratio = orig_height as f32 / new_height as f32;
        let max_ratio = width_ratio.max(height_ratio);

        if max_ratio > 2.0 {
            image::imageops::FilterType::Triangle
        } else if max_ratio > 1.5 {
            image::imageops::FilterType::CatmullRom
        } else {
            image::imageops::FilterType::Lanczos3
        }
    }

    /// JPEG-encode at the given quality. Alpha sources are flattened to RGB
    /// first; JPEG has no alpha channel.
    fn encode_jpeg(img: &DynamicImage, quality: u8) -> Result<Bytes, ProcessingError> {
        let rgb = img.to_rgb8();
        let (width, height) = rgb.dimensions();
        let estimated_size = (width * height * 3) as usize;
        let mut buffer = Vec::with_capacity(estimated_size);

        rgb.write_with_encoder(JpegEncoder::new_with_quality(
            &mut Cursor::new(&mut buffer),
            quality,
        ))
        .map_err(|e| ProcessingError::Encode(e.to_string()))?;

        Ok(Bytes::from(buffer))
    }
}
