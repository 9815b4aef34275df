/// One of the three fixed JPEG renditions derived from an uploaded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageVariant {
    /// 300x300, cover fit (center crop), quality 80.
    Thumbnail,
    /// Fits within 800x800, never upscaled, quality 85.
    Medium,
    /// Fits within 1600x1600, never upscaled, quality 90.
    Original,
}

impl ImageVariant {
    pub const ALL: [ImageVariant; 3] = [
        ImageVariant::Thumbnail,
        ImageVariant::Medium,
        ImageVariant::Original,
    ];

    /// Tag used in derived filenames (`...-{tag}.jpg`).
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageVariant::Thumbnail => "thumbnail",
            ImageVariant::Medium => "medium",
            ImageVariant::Original => "original",
        }
    }

    /// Bounding box side length in pixels.
    pub fn bound(&self) -> u32 {
        match self {
            ImageVariant::Thumbnail => 300,
            ImageVariant::Medium => 800,
            ImageVariant::Original => 1600,
        }
    }

    /// JPEG quality for this rendition.
    pub fn jpeg_quality(&self) -> u8 {
        match self {
            ImageVariant::Thumbnail => 80,
            ImageVariant::Medium => 85,
            ImageVariant::Original => 90,
        }
    }
}

impl std::fmt::Display for ImageVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
