//! Partially known letters of a slot.

use std::fmt::{self, Display, Write as _};

use tinyvec::TinyVec;

/// The letters currently known along a slot.
///
/// Each position is either a fixed letter (placed by a crossing word) or
/// unknown. Slots in mini grids are short, so the letters are stored inline.
///
/// # Examples
///
/// ```
/// use minicross_core::Pattern;
///
/// let pattern: Pattern = [Some('C'), None, Some('T')].into_iter().collect();
/// assert_eq!(pattern.to_string(), "C.T");
/// assert!(pattern.matches("CAT"));
/// assert!(pattern.matches("COT"));
/// assert!(!pattern.matches("CAR"));
/// assert!(!pattern.matches("CATS"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Pattern {
    letters: TinyVec<[Option<char>; 8]>,
}

impl Pattern {
    /// Returns the pattern length.
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Returns `true` if the pattern has no positions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Returns the letter at `index`, or `None` when unknown or out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<char> {
        self.letters.get(index).copied().flatten()
    }

    /// Iterates over the pattern positions.
    pub fn iter(&self) -> impl Iterator<Item = Option<char>> + '_ {
        self.letters.iter().copied()
    }

    /// Returns the number of fixed letters.
    #[must_use]
    pub fn fixed_count(&self) -> usize {
        self.letters.iter().filter(|letter| letter.is_some()).count()
    }

    /// Returns `true` if every position holds a letter.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.letters.iter().all(Option::is_some)
    }

    /// Returns `true` if `word` has the pattern's length and agrees with every
    /// fixed letter.
    #[must_use]
    pub fn matches(&self, word: &str) -> bool {
        let mut chars = word.chars();
        for letter in self.letters.iter() {
            match (chars.next(), letter) {
                (None, _) => return false,
                (Some(ch), Some(fixed)) if ch != *fixed => return false,
                _ => {}
            }
        }
        chars.next().is_none()
    }
}

impl FromIterator<Option<char>> for Pattern {
    fn from_iter<I: IntoIterator<Item = Option<char>>>(iter: I) -> Self {
        Self {
            letters: iter.into_iter().collect(),
        }
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.letters.iter() {
            f.write_char(letter.unwrap_or('.'))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(s: &str) -> Pattern {
        s.chars().map(|ch| (ch != '.').then_some(ch)).collect()
    }

    #[test]
    fn test_empty_pattern_matches_any_word_of_same_length() {
        let p = pattern("...");
        assert_eq!(p.len(), 3);
        assert_eq!(p.fixed_count(), 0);
        assert!(!p.is_complete());
        assert!(p.matches("ABC"));
        assert!(!p.matches("AB"));
        assert!(!p.matches("ABCD"));
    }

    #[test]
    fn test_fixed_letters_must_agree() {
        let p = pattern(".E.");
        assert_eq!(p.get(1), Some('E'));
        assert_eq!(p.get(0), None);
        assert_eq!(p.get(9), None);
        assert!(p.matches("BED"));
        assert!(!p.matches("BAD"));
    }

    #[test]
    fn test_complete_pattern() {
        let p = pattern("SOLEIL");
        assert!(p.is_complete());
        assert_eq!(p.fixed_count(), 6);
        assert!(p.matches("SOLEIL"));
        assert_eq!(p.to_string(), "SOLEIL");
    }

    #[test]
    fn test_long_pattern_spills_to_heap() {
        let p = pattern("..........");
        assert_eq!(p.len(), 10);
        assert!(p.matches("ABCDEFGHIJ"));
    }
}
