use std::{cmp::Reverse, collections::HashSet};

use minicross_core::{DictionaryEntry, Grid, Pattern, Slot, WordIndex};
use rand::{Rng, seq::SliceRandom as _};

use crate::FillFailure;

/// Default number of candidate trials allowed per fill attempt.
pub const DEFAULT_STEP_BUDGET: usize = 20_000;

/// Statistics collected during a fill search.
///
/// # Examples
///
/// ```
/// use minicross_core::{Grid, WordIndex, extract_slots};
/// use minicross_filler::BacktrackingFiller;
///
/// let mut grid = Grid::new(2);
/// let slots = extract_slots(&grid);
/// let failure = BacktrackingFiller::default()
///     .fill(&mut grid, &slots, &WordIndex::default(), &mut rand::rng())
///     .unwrap_err();
///
/// // No candidate was ever tried; the first slot was a dead end.
/// assert_eq!(failure.stats().steps(), 0);
/// assert_eq!(failure.stats().dead_ends(), 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FillStats {
    steps: usize,
    backtracks: usize,
    dead_ends: usize,
}

impl FillStats {
    /// Returns the number of candidate words tried.
    ///
    /// This is the quantity bounded by the step budget.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Returns how many times a slot ran out of candidates and the search
    /// returned to the previous slot.
    #[must_use]
    pub fn backtracks(&self) -> usize {
        self.backtracks
    }

    /// Returns how many times a slot had no candidate at all for its pattern.
    #[must_use]
    pub fn dead_ends(&self) -> usize {
        self.dead_ends
    }
}

/// A dictionary entry placed in a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assignment<'a> {
    slot: Slot,
    entry: &'a DictionaryEntry,
}

impl<'a> Assignment<'a> {
    /// Returns the filled slot.
    #[must_use]
    pub fn slot(&self) -> Slot {
        self.slot
    }

    /// Returns the entry placed in the slot.
    #[must_use]
    pub fn entry(&self) -> &'a DictionaryEntry {
        self.entry
    }

    /// Returns the placed word.
    #[must_use]
    pub fn word(&self) -> &'a str {
        self.entry.word()
    }
}

/// A successful fill: one assignment per slot.
#[derive(Debug, Clone)]
pub struct Fill<'a> {
    assignments: Vec<Assignment<'a>>,
    stats: FillStats,
}

impl<'a> Fill<'a> {
    /// Returns the assignments in the order the slots were filled
    /// (longest slots first).
    #[must_use]
    pub fn assignments(&self) -> &[Assignment<'a>] {
        &self.assignments
    }

    /// Consumes the fill and returns its assignments.
    #[must_use]
    pub fn into_assignments(self) -> Vec<Assignment<'a>> {
        self.assignments
    }

    /// Returns the statistics of the successful search.
    #[must_use]
    pub fn stats(&self) -> FillStats {
        self.stats
    }
}

/// A depth-first filler that assigns a unique word to every slot.
///
/// Slots are filled longest first: long words are the most constrained, so
/// impossible layouts are rejected before effort is spent on short slots.
/// Each slot's candidates are the dictionary words of its length that are not
/// used yet and agree with the letters already placed by crossing slots,
/// tried in a random order drawn from the caller's generator.
///
/// The search keeps an explicit stack of frames instead of recursing. Every
/// frame remembers the slot's pattern before its word was written, so
/// backtracking restores the grid exactly.
///
/// # Examples
///
/// ```
/// use minicross_core::{DictionaryEntry, Grid, WordIndex, extract_slots};
/// use minicross_filler::{BacktrackingFiller, FillFailure};
/// use rand::SeedableRng as _;
///
/// let index: WordIndex = ["cat", "ore", "wed", "cow", "are", "ted"]
///     .into_iter()
///     .map(|word| DictionaryEntry::new(word, "Mot."))
///     .collect::<Result<_, _>>()?;
/// let mut grid = Grid::new(3);
/// let slots = extract_slots(&grid);
/// let mut rng = rand_pcg::Pcg64::seed_from_u64(7);
///
/// // One trial is not enough for six slots; the grid is left untouched.
/// let failure = BacktrackingFiller::new(1)
///     .fill(&mut grid, &slots, &index, &mut rng)
///     .unwrap_err();
/// assert!(failure.is_step_budget_exceeded());
/// assert_eq!(grid, Grid::new(3));
///
/// let fill = BacktrackingFiller::default()
///     .fill(&mut grid, &slots, &index, &mut rng)
///     .unwrap();
/// assert_eq!(fill.assignments().len(), 6);
/// assert!(grid.is_complete());
/// # Ok::<(), minicross_core::EntryError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BacktrackingFiller {
    step_budget: usize,
}

impl Default for BacktrackingFiller {
    fn default() -> Self {
        Self::new(DEFAULT_STEP_BUDGET)
    }
}

impl BacktrackingFiller {
    /// Creates a filler that gives up after `step_budget` candidate trials.
    #[must_use]
    pub const fn new(step_budget: usize) -> Self {
        Self { step_budget }
    }

    /// Returns the number of candidate trials allowed per call.
    #[must_use]
    pub const fn step_budget(&self) -> usize {
        self.step_budget
    }

    /// Fills every slot of `grid` with a distinct word from `index`.
    ///
    /// Letters already present in the grid are treated as fixed. On success
    /// the grid holds the finished fill. On failure the grid is restored to
    /// exactly its state before the call.
    ///
    /// An empty `slots` list succeeds immediately with no assignments.
    ///
    /// # Errors
    ///
    /// - [`FillFailure::StepBudgetExceeded`] once more than
    ///   [`step_budget`](Self::step_budget) candidates have been tried.
    /// - [`FillFailure::Unsatisfiable`] if the search space is exhausted.
    pub fn fill<'a, R>(
        &self,
        grid: &mut Grid,
        slots: &[Slot],
        index: &'a WordIndex,
        rng: &mut R,
    ) -> Result<Fill<'a>, FillFailure>
    where
        R: Rng + ?Sized,
    {
        let mut order = slots.to_vec();
        order.sort_by_key(|slot| Reverse(slot.length()));

        let mut stats = FillStats::default();
        let mut used = HashSet::new();
        let mut stack: Vec<Frame<'a>> = Vec::with_capacity(order.len());

        let Some(first) = order.first() else {
            return Ok(Fill {
                assignments: vec![],
                stats,
            });
        };
        match Frame::new(0, first, grid, index, &used, rng) {
            Some(frame) => stack.push(frame),
            None => {
                stats.dead_ends += 1;
                log::trace!("first slot {first:?} has no candidates");
                return Err(FillFailure::Unsatisfiable { stats });
            }
        }

        loop {
            let Some(frame) = stack.last_mut() else {
                log::trace!("search space exhausted: {stats:?}");
                return Err(FillFailure::Unsatisfiable { stats });
            };
            let slot = order[frame.slot];

            if let Some(previous) = frame.placed.take() {
                grid.restore(&slot, &frame.saved);
                used.remove(previous.word());
            }

            let Some(entry) = frame.candidates.pop() else {
                stack.pop();
                stats.backtracks += 1;
                continue;
            };

            stats.steps += 1;
            if stats.steps > self.step_budget {
                unwind(grid, &order, &mut stack);
                log::trace!("step budget exceeded: {stats:?}");
                return Err(FillFailure::StepBudgetExceeded {
                    budget: self.step_budget,
                    stats,
                });
            }

            grid.place_word(&slot, entry.word());
            used.insert(entry.word());
            frame.placed = Some(entry);
            let next = frame.slot + 1;

            let Some(next_slot) = order.get(next) else {
                let assignments = stack
                    .iter()
                    .filter_map(|frame| {
                        frame.placed.map(|entry| Assignment {
                            slot: order[frame.slot],
                            entry,
                        })
                    })
                    .collect();
                log::trace!("fill found: {stats:?}");
                return Ok(Fill { assignments, stats });
            };

            match Frame::new(next, next_slot, grid, index, &used, rng) {
                Some(frame) => stack.push(frame),
                None => stats.dead_ends += 1,
            }
        }
    }
}

/// Search state for one slot on the stack.
#[derive(Debug)]
struct Frame<'a> {
    /// Index of the slot in fill order.
    slot: usize,
    /// Candidates not tried yet; the next one is popped from the back.
    candidates: Vec<&'a DictionaryEntry>,
    /// The slot's letters before any candidate was written.
    saved: Pattern,
    /// The candidate currently written into the grid.
    placed: Option<&'a DictionaryEntry>,
}

impl<'a> Frame<'a> {
    /// Collects the candidates for `slot`, or `None` if there are none.
    fn new<R>(
        slot_index: usize,
        slot: &Slot,
        grid: &Grid,
        index: &'a WordIndex,
        used: &HashSet<&str>,
        rng: &mut R,
    ) -> Option<Self>
    where
        R: Rng + ?Sized,
    {
        let saved = grid.pattern(slot);
        let mut candidates = index
            .entries_of_length(slot.length())
            .iter()
            .filter(|entry| !used.contains(entry.word()) && saved.matches(entry.word()))
            .collect::<Vec<_>>();
        if candidates.is_empty() {
            return None;
        }
        candidates.shuffle(rng);
        Some(Self {
            slot: slot_index,
            candidates,
            saved,
            placed: None,
        })
    }
}

/// Restores every placed word on the stack, newest first.
fn unwind(grid: &mut Grid, order: &[Slot], stack: &mut Vec<Frame<'_>>) {
    while let Some(frame) = stack.pop() {
        if frame.placed.is_some() {
            grid.restore(&order[frame.slot], &frame.saved);
        }
    }
}
