use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Number;

/// Envelope of the `/search/movie` endpoint. Only the first page is read.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchPage {
    /// Matching movies in API order
    #[serde(default)]
    pub results: Vec<SearchResult>,
}

/// A single search hit, used to build a selectable option
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SearchResult {
    /// TMDB movie id
    pub id: u64,
    /// Title in the original language
    #[serde(rename = "original_title")]
    pub title: String,
}

/// Genre entry of a movie detail
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Genre {
    /// Genre name, e.g. "Drama"
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
}

/// Production company entry of a movie detail
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Company {
    /// Company name
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
}

/// Full metadata of one movie from `/movie/{id}`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MovieDetail {
    /// Title in the original language
    #[serde(rename = "original_title")]
    pub title: String,
    /// Plot summary
    #[serde(default, deserialize_with = "null_as_empty")]
    pub overview: String,
    /// Release date as `YYYY-MM-DD`, empty when unknown
    #[serde(default, deserialize_with = "null_as_empty")]
    pub release_date: String,
    /// Budget in US dollars
    #[serde(default)]
    pub budget: u64,
    /// Box office revenue in US dollars
    #[serde(default)]
    pub revenue: u64,
    /// Genres in API order
    #[serde(default)]
    pub genres: Vec<Genre>,
    /// Production companies in API order
    #[serde(default)]
    pub production_companies: Vec<Company>,
    /// Marketing tagline
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tagline: String,
    /// Average user rating out of 10, kept as sent so `7.0` stays `7.0`
    #[serde(default = "zero")]
    pub vote_average: Number,
    /// Poster image path relative to the image base URL
    #[serde(default)]
    pub poster_path: Option<String>,
}

// TMDB sends `null` for several string fields; treat it like an empty string.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn zero() -> Number {
    Number::from(0)
}
