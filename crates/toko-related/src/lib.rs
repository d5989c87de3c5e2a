pub mod scorer;
pub mod selector;

pub use scorer::similarity_score;
pub use selector::select_related;
pub use toko_core::config::DEFAULT_RELATED_LIMIT;
