use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single catalog record, in load order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogEntry {
    /// Position in load order, stable for the process lifetime
    pub index: usize,
    /// TMDB movie identifier, `None` when the record has no usable id
    pub movie_id: Option<u64>,
    /// Title shown in the selector and used as the lookup key
    pub title: String,
    /// Remaining fields of the record, kept as-is
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

impl CatalogEntry {
    /// Builds an entry from a raw JSON record.
    ///
    /// `movie_id` (or `id`) and `title` are lifted out; every other field is
    /// kept in `metadata`. Returns `None` when the record has no string title.
    pub fn from_record(index: usize, mut record: Map<String, Value>) -> Option<Self> {
        let title = match record.remove("title")? {
            Value::String(title) => title,
            _ => return None,
        };

        let movie_id = record
            .remove("movie_id")
            .or_else(|| record.remove("id"))
            .as_ref()
            .and_then(parse_movie_id);

        Some(Self {
            index,
            movie_id,
            title,
            metadata: record,
        })
    }
}

/// Parses an identifier the way it tends to show up in exported frames:
/// integer, integral float or numeric string. Zero counts as missing.
pub fn parse_movie_id(value: &Value) -> Option<u64> {
    let id = match value {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f > 0.0 && *f <= u64::MAX as f64)
                .map(|f| f as u64)
        }),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    }?;

    (id != 0).then_some(id)
}

/// A ranked neighbour of the queried movie
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SimilarMovie {
    pub index: usize,
    pub movie_id: u64,
    pub title: String,
    pub score: f64,
}

/// A recommendation paired with its resolved poster
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendedMovie {
    pub title: String,
    pub movie_id: u64,
    pub poster_url: String,
}
