//! Test utilities for the fill search.
//!
//! This module provides [`FillTester`], a harness that runs
//! [`BacktrackingFiller`] on a grid and checks the outcome.
//!
//! # Example
//!
//! ```ignore
//! FillTester::from_str("....", &["SE", "OR", "SO", "ER"])
//!     .fill(DEFAULT_STEP_BUDGET, 0)
//!     .assert_filled()
//!     .assert_consistent();
//! ```

use std::{collections::HashSet, str::FromStr as _};

use minicross_core::{DictionaryEntry, Direction, Grid, Position, Slot, WordIndex, extract_slots};
use rand::SeedableRng as _;
use rand_pcg::Pcg64;

use crate::{BacktrackingFiller, FillFailure};

type Outcome = Result<Vec<(Slot, String)>, FillFailure>;

/// A test harness for the fill search.
///
/// `FillTester` keeps the initial grid, the grid after filling and the fill
/// outcome, so assertions can compare them.
///
/// # Method Chaining
///
/// All methods return `self`, enabling fluent method chaining for readable tests.
///
/// # Panics
///
/// All assertion methods panic with detailed messages on failure, using
/// `#[track_caller]` to report the correct source location.
#[derive(Debug)]
pub struct FillTester {
    initial: Grid,
    current: Grid,
    index: WordIndex,
    outcome: Option<Outcome>,
}

impl FillTester {
    /// Creates a tester for `grid` with a dictionary made of `words`.
    #[track_caller]
    pub fn new(grid: Grid, words: &[&str]) -> Self {
        let index = words
            .iter()
            .map(|word| DictionaryEntry::new(word, "Test definition.").unwrap())
            .collect();
        Self {
            current: grid.clone(),
            initial: grid,
            index,
            outcome: None,
        }
    }

    /// Creates a tester from a grid string (see [`Grid`]'s text format).
    #[track_caller]
    pub fn from_str(s: &str, words: &[&str]) -> Self {
        Self::new(Grid::from_str(s).unwrap(), words)
    }

    /// Runs the filler with the given budget and a generator seeded with `seed`.
    pub fn fill(mut self, step_budget: usize, seed: u64) -> Self {
        let slots = extract_slots(&self.current);
        let mut rng = Pcg64::seed_from_u64(seed);
        let outcome = BacktrackingFiller::new(step_budget)
            .fill(&mut self.current, &slots, &self.index, &mut rng)
            .map(|fill| {
                fill.assignments()
                    .iter()
                    .map(|a| (a.slot(), a.word().to_owned()))
                    .collect()
            });
        self.outcome = Some(outcome);
        self
    }

    /// Returns the grid after the last fill.
    pub fn current(&self) -> &Grid {
        &self.current
    }

    /// Returns the `(slot, word)` assignments of a successful fill.
    #[track_caller]
    pub fn assignments(&self) -> &[(Slot, String)] {
        match self.outcome() {
            Ok(assignments) => assignments,
            Err(failure) => panic!("expected a fill, got failure: {failure}"),
        }
    }

    /// Returns the failure of an unsuccessful fill.
    #[track_caller]
    pub fn failure(&self) -> FillFailure {
        match self.outcome() {
            Ok(_) => panic!("expected a failure, but the grid was filled:\n{}", self.current),
            Err(failure) => *failure,
        }
    }

    #[track_caller]
    fn outcome(&self) -> &Outcome {
        self.outcome.as_ref().expect("fill() must be called before assertions")
    }

    /// Asserts that the fill succeeded and every slot cell holds a letter.
    #[track_caller]
    pub fn assert_filled(self) -> Self {
        for (slot, _) in self.assignments() {
            for pos in slot.positions() {
                assert!(
                    self.current[pos].is_letter(),
                    "slot cell {pos} is not filled:\n{}",
                    self.current
                );
            }
        }
        self
    }

    /// Asserts the number of assigned slots.
    #[track_caller]
    pub fn assert_slot_count(self, expected: usize) -> Self {
        assert_eq!(self.assignments().len(), expected);
        self
    }

    /// Asserts that the search space was exhausted.
    #[track_caller]
    pub fn assert_unsatisfiable(self) -> Self {
        let failure = self.failure();
        assert!(failure.is_unsatisfiable(), "expected unsatisfiable, got {failure}");
        self
    }

    /// Asserts that the search ran out of budget.
    #[track_caller]
    pub fn assert_budget_exceeded(self) -> Self {
        let failure = self.failure();
        assert!(
            failure.is_step_budget_exceeded(),
            "expected budget exhaustion, got {failure}"
        );
        self
    }

    /// Asserts that the grid equals the grid before filling.
    #[track_caller]
    pub fn assert_unchanged(self) -> Self {
        assert_eq!(
            self.current, self.initial,
            "grid changed:\n{}\nexpected:\n{}",
            self.current, self.initial
        );
        self
    }

    /// Asserts that each word reads back from the grid and crossing slots
    /// agree on their shared cell.
    #[track_caller]
    pub fn assert_consistent(self) -> Self {
        let assignments = self.assignments();
        for (slot, word) in assignments {
            assert_eq!(
                self.current.pattern(slot).to_string(),
                *word,
                "slot {slot:?} does not read {word}"
            );
        }
        let across = assignments
            .iter()
            .filter(|(slot, _)| slot.direction() == Direction::Across);
        for (a_slot, a_word) in across {
            for (d_slot, d_word) in assignments
                .iter()
                .filter(|(slot, _)| slot.direction() == Direction::Down)
            {
                let crossing = a_slot
                    .positions()
                    .find(|pos| d_slot.offset_of(*pos).is_some());
                if let Some(pos) = crossing {
                    let a_letter = letter_at(a_word, a_slot, pos);
                    let d_letter = letter_at(d_word, d_slot, pos);
                    assert_eq!(a_letter, d_letter, "{a_word} and {d_word} disagree at {pos}");
                }
            }
        }
        self
    }

    /// Asserts that no word is used twice.
    #[track_caller]
    pub fn assert_unique_words(self) -> Self {
        let mut seen = HashSet::new();
        for (_, word) in self.assignments() {
            assert!(seen.insert(word), "{word} used twice");
        }
        self
    }

    /// Asserts that every word comes from the dictionary with the slot's length.
    #[track_caller]
    pub fn assert_words_in_dictionary(self) -> Self {
        for (slot, word) in self.assignments() {
            assert!(
                self.index
                    .entries_of_length(slot.length())
                    .iter()
                    .any(|entry| entry.word() == word.as_str()),
                "{word} is not a dictionary word of length {}",
                slot.length()
            );
        }
        self
    }

    /// Asserts the letter at `pos`.
    #[track_caller]
    pub fn assert_cell(self, pos: Position, expected: char) -> Self {
        assert_eq!(self.current[pos].letter(), Some(expected), "at {pos}");
        self
    }
}

fn letter_at(word: &str, slot: &Slot, pos: Position) -> Option<char> {
    slot.offset_of(pos).and_then(|offset| word.chars().nth(offset))
}
