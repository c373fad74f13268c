use log::{debug, info};
use std::collections::BTreeMap;
use std::fmt::Write;
use storesearch::clients::{
    ITunesClient,
    entities::pretty_json,
    errors::Result,
    itunes::SearchResponse,
};

pub const DEFAULT_TERM: &str = "the beatles";
pub const DEFAULT_MEDIA: &str = "music";

// Configuration for the Searcher struct
pub struct Config {
    pub client: ITunesClient,
    pub query: BTreeMap<String, String>,
    pub dump_json: bool,
}

pub struct ConfigBuilder {
    endpoint: Option<String>,
    query: BTreeMap<String, String>,
    dump_json: bool,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            endpoint: None,
            query: BTreeMap::new(),
            dump_json: false,
        }
    }

    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    pub fn dump_json(mut self, dump_json: bool) -> Self {
        self.dump_json = dump_json;
        self
    }

    pub fn build(self) -> Result<Config> {
        let client = match self.endpoint {
            Some(endpoint) => ITunesClient::try_with_endpoint(&endpoint)?,
            None => ITunesClient::try_default()?,
        };
        let mut query = self.query;
        query
            .entry("term".to_string())
            .or_insert_with(|| DEFAULT_TERM.to_string());
        query
            .entry("media".to_string())
            .or_insert_with(|| DEFAULT_MEDIA.to_string());
        Ok(Config {
            client,
            query,
            dump_json: self.dump_json,
        })
    }
}

// Runs a single search and renders what it found
pub struct Searcher {
    config: Config,
}

impl Searcher {
    pub fn new(config: Config) -> Self {
        Searcher { config }
    }

    // Nothing is rendered unless the whole response decoded
    pub async fn run(&self) -> Result<String> {
        info!("Searching for {:?} ...", self.config.query);
        let response = self.config.client.search(&self.config.query).await?;
        info!("Found {} results", response.results.len());
        Ok(self.render(&response))
    }

    fn render(&self, response: &SearchResponse) -> String {
        let mut output = String::new();
        if self.config.dump_json {
            debug!("Dumping raw response ({} bytes)", response.body.len());
            let dump = pretty_json(&response.body)
                .unwrap_or_else(|| "Failed to read JSON Object.".to_string());
            let _ = writeln!(output, "{dump}");
        }
        for item in &response.results {
            let _ = writeln!(output, "{}", item.summary());
        }
        output
    }
}
