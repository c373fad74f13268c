use std::fmt;

use log::debug;
use reqwest::Url;
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::{Map, Value};

use crate::clients::errors::{Error, Result};

/// Artwork resolutions offered by the catalog.
///
/// The wire keys carry the pixel size instead of a descriptive name, so this
/// enum is the single place where the two are tied together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artwork {
    /// 30x30 thumbnail
    Small,
    /// 60x60 thumbnail
    Medium,
    /// 100x100 thumbnail
    Large,
}

impl Artwork {
    /// Every resolution, smallest first.
    pub const ALL: [Artwork; 3] = [Artwork::Small, Artwork::Medium, Artwork::Large];

    /// Key under which this resolution appears in a result object.
    #[must_use]
    pub fn wire_key(self) -> &'static str {
        match self {
            Artwork::Small => "artworkUrl30",
            Artwork::Medium => "artworkUrl60",
            Artwork::Large => "artworkUrl100",
        }
    }
}

/// A single catalog item (track, album, artist ...) returned by a search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub wrapper_type: String,
    pub kind: String,
    pub country: String,
    pub currency: String,
    pub release_date: String,
    pub is_streamable: bool,

    pub artist_id: u64,
    pub collection_id: u64,
    pub track_id: u64,

    pub artist_name: String,
    pub collection_name: String,
    pub collection_censored_name: String,
    pub track_name: String,
    pub track_censored_name: String,
    pub collection_explicitness: String,
    pub track_explicitness: String,
    pub primary_genre_name: String,

    pub disc_count: u32,
    pub disc_number: u32,
    pub track_count: u32,
    pub track_number: u32,
    pub track_time_millis: u64,

    pub artist_view_url: Url,
    pub collection_view_url: Url,
    pub track_view_url: Url,
    pub preview_url: Url,
    pub artwork_small_url: Url,
    pub artwork_medium_url: Url,
    pub artwork_large_url: Url,

    pub collection_price: Option<f64>,
    pub track_price: Option<f64>,
    /// Either `description` or `longDescription` from the payload, empty if neither is usable
    pub description: String,
}

/// A mandatory field that was missing or had the wrong type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub reason: String,
}

impl FieldError {
    fn missing(field: &'static str) -> Self {
        FieldError {
            field,
            reason: "missing field".to_string(),
        }
    }

    fn into_error(self, index: usize) -> Error {
        Error::Field {
            index,
            field: self.field,
            reason: self.reason,
        }
    }
}

/// Decode a mandatory field by its wire key.
pub fn required<T: DeserializeOwned>(
    object: &Map<String, Value>,
    key: &'static str,
) -> std::result::Result<T, FieldError> {
    let value = object.get(key).ok_or_else(|| FieldError::missing(key))?;
    T::deserialize(value).map_err(|e| FieldError {
        field: key,
        reason: e.to_string(),
    })
}

/// Decode a mandatory field holding an absolute URL.
pub fn required_url(
    object: &Map<String, Value>,
    key: &'static str,
) -> std::result::Result<Url, FieldError> {
    let raw: String = required(object, key)?;
    Url::parse(&raw).map_err(|e| FieldError {
        field: key,
        reason: format!("invalid URL {raw:?}: {e}"),
    })
}

/// Decode an optional field. Absent, null and mistyped values all yield `None`.
pub fn optional<T: DeserializeOwned>(object: &Map<String, Value>, key: &str) -> Option<T> {
    let value = object.get(key)?;
    match T::deserialize(value) {
        Ok(decoded) => Some(decoded),
        Err(e) => {
            if !value.is_null() {
                debug!("Ignoring unusable value for `{key}`: {e}");
            }
            None
        }
    }
}

/// `description` if usable, otherwise `longDescription`, otherwise an empty string.
#[must_use]
pub fn description_or_fallback(object: &Map<String, Value>) -> String {
    optional::<String>(object, "description")
        .or_else(|| optional::<String>(object, "longDescription"))
        .unwrap_or_default()
}

impl SearchResult {
    /// Build a record from one element of the `results` array.
    ///
    /// Fails on the first mandatory field that cannot be decoded; no partial
    /// record is ever produced.
    pub fn from_object(object: &Map<String, Value>) -> std::result::Result<Self, FieldError> {
        Ok(SearchResult {
            wrapper_type: required(object, "wrapperType")?,
            kind: required(object, "kind")?,
            country: required(object, "country")?,
            currency: required(object, "currency")?,
            release_date: required(object, "releaseDate")?,
            is_streamable: required(object, "isStreamable")?,
            artist_id: required(object, "artistId")?,
            collection_id: required(object, "collectionId")?,
            track_id: required(object, "trackId")?,
            artist_name: required(object, "artistName")?,
            collection_name: required(object, "collectionName")?,
            collection_censored_name: required(object, "collectionCensoredName")?,
            track_name: required(object, "trackName")?,
            track_censored_name: required(object, "trackCensoredName")?,
            collection_explicitness: required(object, "collectionExplicitness")?,
            track_explicitness: required(object, "trackExplicitness")?,
            primary_genre_name: required(object, "primaryGenreName")?,
            disc_count: required(object, "discCount")?,
            disc_number: required(object, "discNumber")?,
            track_count: required(object, "trackCount")?,
            track_number: required(object, "trackNumber")?,
            track_time_millis: required(object, "trackTimeMillis")?,
            artist_view_url: required_url(object, "artistViewUrl")?,
            collection_view_url: required_url(object, "collectionViewUrl")?,
            track_view_url: required_url(object, "trackViewUrl")?,
            preview_url: required_url(object, "previewUrl")?,
            artwork_small_url: required_url(object, Artwork::Small.wire_key())?,
            artwork_medium_url: required_url(object, Artwork::Medium.wire_key())?,
            artwork_large_url: required_url(object, Artwork::Large.wire_key())?,
            collection_price: optional(object, "collectionPrice"),
            track_price: optional(object, "trackPrice"),
            description: description_or_fallback(object),
        })
    }

    /// Artwork URL for the given resolution.
    #[must_use]
    pub fn artwork(&self, size: Artwork) -> &Url {
        match size {
            Artwork::Small => &self.artwork_small_url,
            Artwork::Medium => &self.artwork_medium_url,
            Artwork::Large => &self.artwork_large_url,
        }
    }

    /// Console block describing this record.
    #[must_use]
    pub fn summary(&self) -> Summary<'_> {
        Summary(self)
    }
}

/// Multi-line console rendering of a [`SearchResult`], framed by `***` lines.
pub struct Summary<'a>(&'a SearchResult);

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let item = self.0;
        writeln!(f, "***")?;
        writeln!(f, "Name: {}", item.track_name)?;
        writeln!(f, "Artist: {}", item.artist_name)?;
        writeln!(f, "Kind: {}", item.kind)?;
        writeln!(f, "Description: {}", item.description)?;
        writeln!(f, "Artwork URL: {}", item.artwork_small_url)?;
        write!(f, "***")
    }
}

#[derive(Deserialize)]
struct RawSearchResponse {
    results: Vec<Map<String, Value>>,
}

/// Decode a `{ "results": [...] }` payload, keeping the array order.
///
/// A single undecodable result discards the whole response.
pub fn decode_results(payload: &[u8]) -> Result<Vec<SearchResult>> {
    let response: RawSearchResponse = serde_json::from_slice(payload)?;
    response
        .results
        .iter()
        .enumerate()
        .map(|(index, object)| SearchResult::from_object(object).map_err(|e| e.into_error(index)))
        .collect()
}

/// Re-indent a JSON payload for display; `None` if it is not valid JSON.
#[must_use]
pub fn pretty_json(payload: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(payload).ok()?;
    serde_json::to_string_pretty(&value).ok()
}
