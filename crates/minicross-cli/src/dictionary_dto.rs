use std::{collections::HashSet, fs, path::Path};

use minicross_core::{DictionaryEntry, EntryError, WordIndex, dictionary::normalize_word};
use serde::Deserialize;

use crate::error::CliError;

/// DTO for one record of a JSON dictionary file.
///
/// `word` is the grid form, `original` the optional display form. The
/// definition is read from either `def` or `definition`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct DictionaryEntryDto {
    pub(crate) word: String,
    #[serde(default)]
    pub(crate) original: Option<String>,
    #[serde(alias = "def")]
    pub(crate) definition: String,
}

impl TryFrom<DictionaryEntryDto> for DictionaryEntry {
    type Error = EntryError;

    fn try_from(value: DictionaryEntryDto) -> Result<Self, Self::Error> {
        match value.original {
            Some(original) => DictionaryEntry::from_normalized(
                &normalize_word(&value.word),
                &original,
                &value.definition,
            ),
            None => DictionaryEntry::new(&value.word, &value.definition),
        }
    }
}

/// Reads a JSON dictionary file into an index.
pub(crate) fn load_dictionary(path: &Path) -> Result<WordIndex, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::ReadDictionary {
        path: path.to_owned(),
        source,
    })?;
    parse_dictionary(&text, path)
}

/// Parses the JSON text of the dictionary file at `path` into an index.
pub(crate) fn parse_dictionary(text: &str, path: &Path) -> Result<WordIndex, CliError> {
    let dtos: Vec<DictionaryEntryDto> =
        serde_json::from_str(text).map_err(|source| CliError::ParseDictionary {
            path: path.to_owned(),
            source,
        })?;
    let total = dtos.len();
    let index = WordIndex::new(convert_entries(dtos));
    log::info!(
        "loaded {} of {total} entries from {}",
        index.len(),
        path.display()
    );
    if index.is_empty() {
        return Err(CliError::EmptyDictionary {
            path: path.to_owned(),
        });
    }
    Ok(index)
}

/// Converts records to entries, skipping invalid records and later
/// duplicates of a normalized word.
pub(crate) fn convert_entries(dtos: Vec<DictionaryEntryDto>) -> Vec<DictionaryEntry> {
    let mut seen = HashSet::new();
    let mut entries = Vec::with_capacity(dtos.len());
    for dto in dtos {
        let word = dto.word.clone();
        match DictionaryEntry::try_from(dto) {
            Ok(entry) => {
                if seen.insert(entry.word().to_owned()) {
                    entries.push(entry);
                } else {
                    log::debug!("skipping duplicate word {word:?}");
                }
            }
            Err(err) => log::warn!("skipping entry {word:?}: {err}"),
        }
    }
    entries
}
