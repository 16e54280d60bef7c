//! Dictionary entries grouped by word length.

use crate::DictionaryEntry;

/// A read-only dictionary grouped by word length.
///
/// Slots only ever ask for words of one length, so grouping once up front
/// turns every candidate lookup into a slice access. Entries keep their
/// input order within each length.
///
/// The index is immutable after construction and can be shared by reference
/// between threads generating puzzles in parallel.
///
/// # Examples
///
/// ```
/// use minicross_core::{DictionaryEntry, WordIndex};
///
/// let index: WordIndex = [("os", "Partie du squelette."), ("pin", "Arbre."), ("or", "Métal.")]
///     .into_iter()
///     .map(|(word, def)| DictionaryEntry::new(word, def))
///     .collect::<Result<_, _>>()?;
///
/// assert_eq!(index.len(), 3);
/// let twos: Vec<_> = index.entries_of_length(2).iter().map(|e| e.word()).collect();
/// assert_eq!(twos, ["OS", "OR"]);
/// assert!(index.entries_of_length(5).is_empty());
/// # Ok::<(), minicross_core::EntryError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct WordIndex {
    by_length: Vec<Vec<DictionaryEntry>>,
    len: usize,
}

impl WordIndex {
    /// Builds an index from a sequence of entries.
    #[must_use]
    pub fn new<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = DictionaryEntry>,
    {
        let mut index = Self::default();
        for entry in entries {
            let len = entry.len();
            if index.by_length.len() <= len {
                index.by_length.resize_with(len + 1, Vec::new);
            }
            index.by_length[len].push(entry);
            index.len += 1;
        }
        index
    }

    /// Returns the entries whose word has exactly `len` letters.
    ///
    /// An absent length yields an empty slice.
    #[must_use]
    pub fn entries_of_length(&self, len: usize) -> &[DictionaryEntry] {
        self.by_length.get(len).map(Vec::as_slice).unwrap_or_default()
    }

    /// Returns the total number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the index holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterates over all entries, shortest words first.
    pub fn iter(&self) -> impl Iterator<Item = &DictionaryEntry> {
        self.by_length.iter().flatten()
    }

    /// Returns `(length, count)` pairs for every length present, ascending.
    ///
    /// # Examples
    ///
    /// ```
    /// use minicross_core::{DictionaryEntry, WordIndex};
    ///
    /// let index = WordIndex::new(
    ///     ["un", "et", "pin"].map(|w| DictionaryEntry::new(w, "Mot.").unwrap()),
    /// );
    /// assert_eq!(index.length_distribution().collect::<Vec<_>>(), [(2, 2), (3, 1)]);
    /// ```
    pub fn length_distribution(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.by_length
            .iter()
            .enumerate()
            .filter(|(_, entries)| !entries.is_empty())
            .map(|(len, entries)| (len, entries.len()))
    }
}

impl FromIterator<DictionaryEntry> for WordIndex {
    fn from_iter<I: IntoIterator<Item = DictionaryEntry>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a WordIndex {
    type Item = &'a DictionaryEntry;
    type IntoIter = std::iter::Flatten<std::slice::Iter<'a, Vec<DictionaryEntry>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.by_length.iter().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(word: &str) -> DictionaryEntry {
        DictionaryEntry::new(word, "Définition.").unwrap()
    }

    #[test]
    fn test_groups_by_length_preserving_order() {
        let index = WordIndex::new(["tic", "ce", "tac", "soleil", "de", "toc"].map(entry));
        let words = |len| {
            index
                .entries_of_length(len)
                .iter()
                .map(DictionaryEntry::word)
                .collect::<Vec<_>>()
        };
        assert_eq!(words(2), ["CE", "DE"]);
        assert_eq!(words(3), ["TIC", "TAC", "TOC"]);
        assert_eq!(words(6), ["SOLEIL"]);
        assert!(words(4).is_empty());
        assert_eq!(index.len(), 6);
        assert!(!index.is_empty());
    }

    #[test]
    fn test_missing_lengths_are_empty() {
        let index = WordIndex::default();
        assert!(index.is_empty());
        assert!(index.entries_of_length(0).is_empty());
        assert!(index.entries_of_length(2).is_empty());
        assert!(index.entries_of_length(100).is_empty());
        assert_eq!(index.length_distribution().count(), 0);
    }

    #[test]
    fn test_iteration_covers_all_entries() {
        let index: WordIndex = ["pin", "os", "pas"].map(entry).into_iter().collect();
        let words: Vec<_> = index.iter().map(DictionaryEntry::word).collect();
        assert_eq!(words, ["OS", "PIN", "PAS"]);
        assert_eq!((&index).into_iter().count(), 3);
        assert_eq!(
            index.length_distribution().collect::<Vec<_>>(),
            [(2, 1), (3, 2)]
        );
    }
}
