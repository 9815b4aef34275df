/// Object-storage buckets, one per owning entity kind.
///
/// Keeping each entity kind in its own bucket is a deliberate separation so
/// access and lifecycle policy can be applied per kind at the storage layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    ProductImages,
    Avatars,
    BrandLogos,
    CategoryImages,
    RoomImages,
    ProductDatasheets,
}

impl Bucket {
    /// All buckets the service writes to. S3 backends pre-build one client
    /// per bucket from this list.
    pub const ALL: [Bucket; 6] = [
        Bucket::ProductImages,
        Bucket::Avatars,
        Bucket::BrandLogos,
        Bucket::CategoryImages,
        Bucket::RoomImages,
        Bucket::ProductDatasheets,
    ];

    /// Bucket name as it appears in storage and in public URLs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Bucket::ProductImages => "product-images",
            Bucket::Avatars => "avatars",
            Bucket::BrandLogos => "brand-logos",
            Bucket::CategoryImages => "category-images",
            Bucket::RoomImages => "room-images",
            Bucket::ProductDatasheets => "product-datasheets",
        }
    }
}

impl std::fmt::Display for Bucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
