pub mod decode;
pub mod error;
pub mod normalize;
pub mod price;
pub mod richtext;
pub mod types;

pub use decode::{parse_product, parse_products};
pub use error::CatalogError;
pub use normalize::{normalize_product, normalize_products, PLACEHOLDER_IMAGE, UNCATEGORIZED};
pub use types::{CategoryField, CategoryRef, RawColorVariant, RawProductRecord};
