use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};

use crate::{
    error::{AppError, AppResult},
    models::CatalogEntry,
};

/// On-disk catalog layouts
///
/// `Records` is a plain array of objects. `Columns` is the pandas
/// `DataFrame.to_dict()` shape: column name -> { row index -> value }.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Records(Vec<Map<String, Value>>),
    Columns(BTreeMap<String, Map<String, Value>>),
}

/// The ordered movie catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    /// Title -> position of its first occurrence
    by_title: HashMap<String, usize>,
    duplicate_titles: usize,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        let mut by_title = HashMap::with_capacity(entries.len());
        let mut duplicate_titles = 0;

        for (position, entry) in entries.iter().enumerate() {
            if by_title.contains_key(&entry.title) {
                duplicate_titles += 1;
            } else {
                by_title.insert(entry.title.clone(), position);
            }
        }

        Self {
            entries,
            by_title,
            duplicate_titles,
        }
    }

    /// Parses a catalog from JSON in either supported layout
    pub fn from_json(bytes: &[u8]) -> AppResult<Self> {
        let file: CatalogFile = serde_json::from_slice(bytes)
            .map_err(|e| AppError::DataLoad(format!("Malformed catalog: {}", e)))?;

        let records = match file {
            CatalogFile::Records(records) => records,
            CatalogFile::Columns(columns) => columns_to_records(columns)?,
        };

        let entries = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                CatalogEntry::from_record(index, record).ok_or_else(|| {
                    AppError::DataLoad(format!("Catalog row {} has no string title", index))
                })
            })
            .collect::<AppResult<Vec<_>>>()?;

        Ok(Self::new(entries))
    }

    /// First entry in load order with exactly this title
    pub fn find_by_title(&self, title: &str) -> Option<&CatalogEntry> {
        self.by_title.get(title).and_then(|&position| self.entries.get(position))
    }

    pub fn get(&self, index: usize) -> Option<&CatalogEntry> {
        self.entries.get(index)
    }

    /// All titles in catalog order, duplicates included
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.title.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries whose title already appeared earlier
    pub fn duplicate_titles(&self) -> usize {
        self.duplicate_titles
    }
}

/// Pivots column-oriented data into row records ordered by numeric row key
fn columns_to_records(
    columns: BTreeMap<String, Map<String, Value>>,
) -> AppResult<Vec<Map<String, Value>>> {
    let mut rows: BTreeMap<usize, Map<String, Value>> = BTreeMap::new();

    for (column, cells) in columns {
        for (key, value) in cells {
            let row = key.parse::<usize>().map_err(|_| {
                AppError::DataLoad(format!(
                    "Column '{}' has non-numeric row key '{}'",
                    column, key
                ))
            })?;
            rows.entry(row).or_default().insert(column.clone(), value);
        }
    }

    Ok(rows.into_values().collect())
}
