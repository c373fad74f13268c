use log::debug;
use reqwest::{StatusCode, Url};

use crate::clients::{
    entities::{SearchResult, decode_results},
    errors::{Error, Result},
};

/// Public search endpoint of the iTunes Store
pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://itunes.apple.com/search";

/// What a successful search returned: the raw body alongside its decoded records
pub struct SearchResponse {
    pub body: Vec<u8>,
    pub results: Vec<SearchResult>,
}

pub struct ITunesClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl ITunesClient {
    pub fn new(http: reqwest::Client, endpoint: Url) -> Self {
        ITunesClient { http, endpoint }
    }

    // Create a client against the given endpoint or raise a configuration error
    pub fn try_with_endpoint(endpoint: &str) -> Result<Self> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| Error::InvalidEndpoint(format!("{endpoint:?}: {e}")))?;
        Ok(ITunesClient::new(reqwest::Client::new(), endpoint))
    }

    pub fn try_default() -> Result<Self> {
        ITunesClient::try_with_endpoint(DEFAULT_SEARCH_ENDPOINT)
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Compose the request URL, appending every pair as a query parameter.
    ///
    /// Values are encoded but otherwise passed through as given.
    pub fn search_url<I, K, V>(&self, query: I) -> Url
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().extend_pairs(query);
        url
    }

    // Fetch the raw search body. Anything but a 200 is reported as `SearchFailed`
    pub async fn fetch<I, K, V>(&self, query: I) -> Result<Vec<u8>>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let url = self.search_url(query);
        debug!("Requesting {url}");
        let response = self.http.get(url).send().await?;
        let status = response.status();
        debug!("Search endpoint answered with {status}");
        if status != StatusCode::OK {
            return Err(Error::SearchFailed);
        }
        Ok(response.bytes().await?.to_vec())
    }

    /// Run one search and decode the results in the order they were returned.
    pub async fn search<I, K, V>(&self, query: I) -> Result<SearchResponse>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let body = self.fetch(query).await?;
        let results = decode_results(&body)?;
        debug!("Decoded {} search results", results.len());
        Ok(SearchResponse { body, results })
    }
}
