/// Search result records and payload decoding
pub mod entities;
/// Error types and result aliases
pub mod errors;
/// iTunes Search API client
pub mod itunes;

pub use entities::SearchResult;
pub use itunes::ITunesClient;
