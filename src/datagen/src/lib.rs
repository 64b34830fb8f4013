pub mod batch_builder;
pub mod catalog;
pub mod error;
pub mod persona;
pub mod products;
pub mod rating;
pub mod reader;
pub mod reviews;
pub mod scenario;
pub mod schema;
pub mod text;
pub mod writer;

pub use error::DatagenError;
pub use error::Result;
