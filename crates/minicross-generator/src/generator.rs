use minicross_core::{WordIndex, extract_slots};
use minicross_filler::BacktrackingFiller;
use rand::Rng as _;

use crate::{
    GeneratorConfig, Puzzle, PuzzleId, PuzzleSeed, number_clues,
    topology::{black_cell_count, block_isolated_cells, build_topology},
};

/// Errors returned by [`PuzzleGenerator`].
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::IsVariant,
)]
pub enum GeneratorError {
    /// Every topology attempt failed to fill.
    ///
    /// The dictionary is too sparse for the configured sizes and density.
    /// Retrying with the same dictionary and configuration is unlikely to
    /// help.
    #[display("no puzzle could be filled in {attempts} attempts")]
    GenerationExhausted {
        /// Number of topologies tried.
        attempts: usize,
    },
}

/// Generates mini crosswords from a dictionary.
///
/// Each attempt draws a grid size, scatters black cells, extracts the slots
/// and runs a [`BacktrackingFiller`] bounded by the configured step budget.
/// A failed attempt is discarded and a fresh topology is drawn.
///
/// All randomness comes from a [`PuzzleSeed`], so the same seed, dictionary
/// and configuration always produce the same puzzle.
///
/// # Examples
///
/// ```
/// use minicross_core::{DictionaryEntry, WordIndex};
/// use minicross_generator::{GeneratorConfig, PuzzleGenerator};
///
/// let index: WordIndex = ["se", "or", "so", "er"]
///     .into_iter()
///     .map(|word| DictionaryEntry::new(word, "Mot court."))
///     .collect::<Result<_, _>>()?;
/// let config = GeneratorConfig::default()
///     .with_grid_sizes([2])?
///     .with_black_cell_percent(0)?
///     .with_black_cell_jitter(0);
///
/// let generator = PuzzleGenerator::with_config(&index, config);
/// let puzzle = generator.generate()?;
/// assert!(puzzle.grid.is_complete());
/// assert_eq!(puzzle.definitions.len(), 4);
///
/// let again = generator.generate_with_seed(puzzle.seed)?;
/// assert_eq!(again, puzzle);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct PuzzleGenerator<'a> {
    index: &'a WordIndex,
    config: GeneratorConfig,
}

impl<'a> PuzzleGenerator<'a> {
    /// Creates a generator with the default configuration.
    #[must_use]
    pub fn new(index: &'a WordIndex) -> Self {
        Self::with_config(index, GeneratorConfig::default())
    }

    /// Creates a generator with a custom configuration.
    #[must_use]
    pub fn with_config(index: &'a WordIndex, config: GeneratorConfig) -> Self {
        Self { index, config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates a puzzle from a random seed.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::GenerationExhausted`] if no attempt succeeds.
    pub fn generate(&self) -> Result<Puzzle, GeneratorError> {
        self.generate_with_seed(PuzzleSeed::random())
    }

    /// Generates the puzzle determined by `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::GenerationExhausted`] if no attempt succeeds.
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> Result<Puzzle, GeneratorError> {
        let config = &self.config;
        let sizes = config.grid_sizes();
        let filler = BacktrackingFiller::new(config.step_budget());
        let mut rng = seed.rng();

        for attempt in 1..=config.max_attempts() {
            let size = sizes[rng.random_range(0..sizes.len())];
            let black_cells = black_cell_count(
                size,
                config.black_cell_percent(),
                config.black_cell_jitter(),
                &mut rng,
            );
            let mut grid = build_topology(size, black_cells, &mut rng);
            let slots = extract_slots(&grid);
            block_isolated_cells(&mut grid, &slots);

            match filler.fill(&mut grid, &slots, self.index, &mut rng) {
                Ok(fill) => {
                    log::info!(
                        "generated {size}x{size} puzzle with {} slots on attempt {attempt} ({:?})",
                        slots.len(),
                        fill.stats()
                    );
                    let definitions = number_clues(&grid, fill.assignments());
                    return Ok(Puzzle {
                        id: PuzzleId::new(&seed, &grid),
                        seed,
                        grid,
                        definitions,
                    });
                }
                Err(failure) => {
                    log::debug!(
                        "attempt {attempt}: {size}x{size} grid with {black_cells} black cells failed: {failure} ({:?})",
                        failure.stats()
                    );
                }
            }
        }

        log::warn!(
            "gave up after {} attempts with seed {seed}",
            config.max_attempts()
        );
        Err(GeneratorError::GenerationExhausted {
            attempts: config.max_attempts(),
        })
    }
}
