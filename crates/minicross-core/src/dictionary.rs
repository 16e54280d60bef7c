//! Dictionary entries.
//!
//! A [`DictionaryEntry`] pairs a grid-ready word with its display form and
//! its definition. Grid words are uppercase ASCII letters with diacritics
//! stripped, so `"Été"` is stored as `"ETE"` and crosses any other `E`.

use unicode_normalization::{UnicodeNormalization as _, char::is_combining_mark};

/// The shortest word a slot can hold.
pub const MIN_WORD_LEN: usize = 2;

/// The longest word accepted into a dictionary.
pub const MAX_WORD_LEN: usize = 6;

/// Errors returned when building a [`DictionaryEntry`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum EntryError {
    /// The normalized word is shorter than [`MIN_WORD_LEN`] or longer than
    /// [`MAX_WORD_LEN`].
    #[display("word length {len} is outside 2..=6")]
    InvalidLength {
        /// Length of the normalized word.
        len: usize,
    },
    /// The word contains a character that does not normalize to `A`-`Z`.
    #[display("word contains invalid letter {ch:?}")]
    InvalidLetter {
        /// The offending character.
        ch: char,
    },
    /// The definition is blank.
    #[display("definition is empty")]
    EmptyDefinition,
}

/// A word with its definition, ready to be placed in a grid.
///
/// # Examples
///
/// ```
/// use minicross_core::DictionaryEntry;
///
/// let entry = DictionaryEntry::new("Été", "  saison chaude. ")?;
/// assert_eq!(entry.word(), "ETE");
/// assert_eq!(entry.original(), "Été");
/// assert_eq!(entry.definition(), "Saison chaude.");
/// # Ok::<(), minicross_core::EntryError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DictionaryEntry {
    word: String,
    original: String,
    definition: String,
}

impl DictionaryEntry {
    /// Builds an entry from a word in display form.
    ///
    /// The word is decomposed, stripped of combining marks and uppercased.
    /// The definition is trimmed and its first letter capitalized.
    ///
    /// # Errors
    ///
    /// Returns [`EntryError`] if the normalized word contains anything other
    /// than `A`-`Z`, has an unsupported length, or the definition is blank.
    pub fn new(original: &str, definition: &str) -> Result<Self, EntryError> {
        let word = normalize_word(original.trim());
        Self::from_normalized(&word, original.trim(), definition)
    }

    /// Builds an entry from an already normalized word.
    ///
    /// The definition is cleaned the same way as in [`new`](Self::new).
    ///
    /// # Errors
    ///
    /// Returns [`EntryError`] if `word` is not 2-6 characters of `A`-`Z`, or
    /// the definition is blank.
    pub fn from_normalized(
        word: &str,
        original: &str,
        definition: &str,
    ) -> Result<Self, EntryError> {
        if let Some(ch) = word.chars().find(|ch| !ch.is_ascii_uppercase()) {
            return Err(EntryError::InvalidLetter { ch });
        }
        let len = word.len();
        if !(MIN_WORD_LEN..=MAX_WORD_LEN).contains(&len) {
            return Err(EntryError::InvalidLength { len });
        }
        let definition = clean_definition(definition);
        if definition.is_empty() {
            return Err(EntryError::EmptyDefinition);
        }
        Ok(Self {
            word: word.to_owned(),
            original: original.to_owned(),
            definition,
        })
    }

    /// Returns the grid form of the word (uppercase `A`-`Z`).
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Returns the word as it was originally written.
    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Returns the definition used as the clue.
    #[must_use]
    pub fn definition(&self) -> &str {
        &self.definition
    }

    /// Returns the number of letters in the grid word.
    #[must_use]
    pub fn len(&self) -> usize {
        self.word.len()
    }

    /// Returns `true` if the word is empty, which a validated entry never is.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }
}

/// Converts a word to grid form: decomposed, without combining marks,
/// uppercase.
///
/// Characters that have no ASCII base letter are kept as-is so that
/// validation can report them.
///
/// # Examples
///
/// ```
/// use minicross_core::dictionary::normalize_word;
///
/// assert_eq!(normalize_word("ça"), "CA");
/// assert_eq!(normalize_word("Noël"), "NOEL");
/// ```
#[must_use]
pub fn normalize_word(word: &str) -> String {
    word.nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .flat_map(char::to_uppercase)
        .collect()
}

fn clean_definition(definition: &str) -> String {
    let definition = definition.trim();
    let mut chars = definition.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalization_strips_diacritics() {
        assert_eq!(normalize_word("élève"), "ELEVE");
        assert_eq!(normalize_word("ÎLE"), "ILE");
        assert_eq!(normalize_word("maïs"), "MAIS");
        assert_eq!(normalize_word("garçon"), "GARCON");
    }

    #[test]
    fn test_new_entry() {
        let entry = DictionaryEntry::new("île", "terre entourée d'eau").unwrap();
        assert_eq!(entry.word(), "ILE");
        assert_eq!(entry.original(), "île");
        assert_eq!(entry.definition(), "Terre entourée d'eau");
        assert_eq!(entry.len(), 3);
        assert!(!entry.is_empty());
    }

    #[test]
    fn test_length_bounds() {
        assert_eq!(
            DictionaryEntry::new("a", "Lettre."),
            Err(EntryError::InvalidLength { len: 1 })
        );
        assert_eq!(
            DictionaryEntry::new("abricot", "Fruit."),
            Err(EntryError::InvalidLength { len: 7 })
        );
        assert!(DictionaryEntry::new("os", "Partie du squelette.").is_ok());
        assert!(DictionaryEntry::new("soleil", "Astre.").is_ok());
    }

    #[test]
    fn test_invalid_letters() {
        assert_eq!(
            DictionaryEntry::new("l'eau", "Liquide."),
            Err(EntryError::InvalidLetter { ch: '\'' })
        );
        assert_eq!(
            DictionaryEntry::new("cœur", "Organe."),
            Err(EntryError::InvalidLetter { ch: 'Œ' })
        );
        assert_eq!(
            DictionaryEntry::from_normalized("Abc", "abc", "Test."),
            Err(EntryError::InvalidLetter { ch: 'b' })
        );
    }

    #[test]
    fn test_empty_definition() {
        assert_eq!(
            DictionaryEntry::new("pin", "   "),
            Err(EntryError::EmptyDefinition)
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            EntryError::InvalidLength { len: 9 }.to_string(),
            "word length 9 is outside 2..=6"
        );
        assert_eq!(
            EntryError::InvalidLetter { ch: '-' }.to_string(),
            "word contains invalid letter '-'"
        );
    }
}
