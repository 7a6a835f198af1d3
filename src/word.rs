//! Words to hide in the grid, and the rule for deciding when a selection
//! finds one.

use std::fmt::Display;

use crate::{grid::Cell, Error};

/// A word that can be hidden in the puzzle.
///
/// Input text is normalized on ingestion: surrounding whitespace is trimmed
/// and the remainder is uppercased, so matching is case-insensitive at the
/// boundary.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

impl Word {
    /// Normalizes the given text into a word, or returns an error if nothing
    /// remains after trimming.
    pub fn new(text: &str) -> Result<Self, Error> {
        let normalized = text.trim().to_uppercase();

        if normalized.is_empty() {
            return Err(Error::InvalidWord(text.to_owned()));
        }

        Ok(Self { text: normalized })
    }

    /// The normalized text of the word.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The number of letters in the word, which is also the number of grid
    /// cells it occupies when placed.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Whether the given cells count as finding this word.
    ///
    /// The rule is order-independent: the selection matches when its
    /// characters, sorted, equal the word's characters, sorted. A player may
    /// therefore drag a placed word from either end. Any other arrangement
    /// of exactly the word's letters also counts as found.
    pub fn matches(&self, cells: &[Cell]) -> bool {
        let mut selected: Vec<char> = cells.iter().map(Cell::letter).collect();
        let mut required: Vec<char> = self.text.chars().collect();

        selected.sort_unstable();
        required.sort_unstable();

        selected == required
    }
}

impl Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(text: &str) -> Vec<Cell> {
        text.chars()
            .map(|letter| {
                let mut cell = Cell::blank();
                cell.set(letter);
                cell
            })
            .collect()
    }

    #[test]
    fn normalizes_on_ingestion() {
        let word = Word::new("  kotlin ").unwrap();

        assert_eq!(word.text(), "KOTLIN");
        assert_eq!(word.len(), 6);
    }

    #[test]
    fn empty_words_are_rejected() {
        assert!(matches!(Word::new(""), Err(Error::InvalidWord(_))));
        assert!(matches!(Word::new("   "), Err(Error::InvalidWord(_))));
    }

    #[test]
    fn matches_forwards_and_backwards() {
        let word = Word::new("CAT").unwrap();

        assert!(word.matches(&cells("CAT")));
        assert!(word.matches(&cells("TAC")));
    }

    #[test]
    fn matches_any_arrangement_of_the_letters() {
        let word = Word::new("STOP").unwrap();

        assert!(word.matches(&cells("POTS")));
        assert!(word.matches(&cells("OPTS")));
    }

    #[test]
    fn rejects_a_single_differing_character() {
        let word = Word::new("CAT").unwrap();

        assert!(!word.matches(&cells("CAB")));
        assert!(!word.matches(&cells("CA")));
        assert!(!word.matches(&cells("CATS")));
        assert!(!word.matches(&cells("CAA")));
    }

    #[test]
    fn matching_respects_letter_counts() {
        let word = Word::new("LOOT").unwrap();

        assert!(word.matches(&cells("TOOL")));
        assert!(!word.matches(&cells("TOL")));
        assert!(!word.matches(&cells("LTTO")));
    }
}
