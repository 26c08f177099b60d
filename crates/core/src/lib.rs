pub mod domain;
pub mod error;
pub mod render;
pub mod types;

pub use error::CoreError;
