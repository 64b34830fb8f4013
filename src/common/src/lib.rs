pub mod config;
pub mod error;
pub mod types;

pub use types::CATEGORIES_COUNT;
pub use types::MAX_REVIEW_CHARS;
