use clap::Parser;
use log::info;
use storesearch::clients::{errors::Result, itunes::DEFAULT_SEARCH_ENDPOINT};

use crate::search::{self, DEFAULT_MEDIA, DEFAULT_TERM};

#[derive(Parser)]
#[command(name = "storesearch")]
#[command(version, about = "Search the iTunes Store catalog", long_about = None)]
struct Cli {
    /// Text to search for
    #[arg(long, default_value = DEFAULT_TERM)]
    term: String,

    /// Media type to search (music, movie, podcast, ebook ...)
    #[arg(long, default_value = DEFAULT_MEDIA)]
    media: String,

    /// Kind of result to return, relative to the media type (e.g. song, album)
    #[arg(long)]
    entity: Option<String>,

    /// Two-letter store country code
    #[arg(long)]
    country: Option<String>,

    /// Maximum number of results
    #[arg(long)]
    limit: Option<u32>,

    /// Search endpoint to query
    #[arg(long, default_value = DEFAULT_SEARCH_ENDPOINT)]
    base_url: String,

    /// Print the raw response before the summaries
    #[arg(long)]
    dump_json: bool,
}

impl Cli {
    fn into_config(self) -> Result<search::Config> {
        let mut builder = search::ConfigBuilder::new()
            .endpoint(self.base_url)
            .param("term", self.term)
            .param("media", self.media)
            .dump_json(self.dump_json);
        if let Some(entity) = self.entity {
            builder = builder.param("entity", entity);
        }
        if let Some(country) = self.country {
            builder = builder.param("country", country);
        }
        if let Some(limit) = self.limit {
            builder = builder.param("limit", limit.to_string());
        }
        builder.build()
    }
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    info!("Building config ...");
    let config = cli.into_config()?;
    let output = search::Searcher::new(config).run().await?;
    print!("{output}");
    Ok(())
}
