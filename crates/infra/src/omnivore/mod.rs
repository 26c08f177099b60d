pub mod client;
pub mod documents;
pub mod mapper;
pub mod transport;

pub use client::OmnivoreClient;
pub use mapper::{map_archive, map_count, map_search};
pub use transport::{DEFAULT_ENDPOINT, GraphqlTransport, HttpTransport, OmnivoreError};
