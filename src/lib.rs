//! Storesearch - query the iTunes Search API
//!
//! This library builds search requests, fetches them and decodes the returned
//! catalog items into typed records, tolerating the fields the API does not
//! always send.

/// Client modules for the search endpoint and its payloads
pub mod clients;
