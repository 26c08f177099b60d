pub mod credential;
pub mod filter;

pub use credential::Credential;
pub use filter::SearchFilter;
