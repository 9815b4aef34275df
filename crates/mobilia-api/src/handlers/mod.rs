pub mod avatar;
pub mod brand;
pub mod category;
pub mod category_delete;
pub mod datasheet;
pub mod health;
pub mod product_images;
pub mod room;

mod single_variant;

pub use avatar::upload_avatar;
pub use brand::upload_brand_logo;
pub use category::upload_category_image;
pub use category_delete::delete_category_image;
pub use datasheet::upload_datasheet;
pub use health::health;
pub use product_images::upload_product_images;
pub use room::upload_room_image;
