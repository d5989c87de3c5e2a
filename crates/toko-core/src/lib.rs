pub mod config;
pub mod product;

pub use config::{load_store_config, ConfigError, StoreConfig};
pub use product::{ColorOption, ColorVariant, ProductViewModel};
