use minicross_core::MIN_WORD_LEN;
use minicross_filler::DEFAULT_STEP_BUDGET;

/// Default grid sizes, one picked per attempt.
pub const DEFAULT_GRID_SIZES: [usize; 2] = [5, 6];

/// Default share of cells turned into black cells, in percent.
pub const DEFAULT_BLACK_CELL_PERCENT: u32 = 15;

/// Default upper bound of the random extra black cells per attempt.
pub const DEFAULT_BLACK_CELL_JITTER: usize = 1;

/// Default number of topologies tried before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 50;

/// Errors returned when a [`GeneratorConfig`] setter rejects a value.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    /// No grid size was given.
    #[display("at least one grid size is required")]
    NoGridSizes,
    /// A grid size cannot hold a single slot.
    #[display("grid size {size} is smaller than 2")]
    GridSizeTooSmall {
        /// The rejected size.
        size: usize,
    },
    /// The black cell share is not a percentage.
    #[display("black cell percentage {percent} exceeds 100")]
    BlackCellPercentOutOfRange {
        /// The rejected percentage.
        percent: u32,
    },
}

/// Tuning knobs of the [`PuzzleGenerator`](crate::PuzzleGenerator).
///
/// The defaults suit a dictionary of a few thousand short words. A sparse
/// dictionary needs more black cells (shorter slots) or a larger budget.
///
/// # Examples
///
/// ```
/// use minicross_generator::{ConfigError, GeneratorConfig};
///
/// let config = GeneratorConfig::default()
///     .with_grid_sizes([4])?
///     .with_black_cell_percent(20)?
///     .with_max_attempts(200);
/// assert_eq!(config.grid_sizes(), [4]);
/// assert_eq!(config.step_budget(), 20_000);
///
/// assert_eq!(
///     GeneratorConfig::default().with_grid_sizes([]),
///     Err(ConfigError::NoGridSizes)
/// );
/// # Ok::<(), ConfigError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    grid_sizes: Vec<usize>,
    black_cell_percent: u32,
    black_cell_jitter: usize,
    max_attempts: usize,
    step_budget: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            grid_sizes: DEFAULT_GRID_SIZES.to_vec(),
            black_cell_percent: DEFAULT_BLACK_CELL_PERCENT,
            black_cell_jitter: DEFAULT_BLACK_CELL_JITTER,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            step_budget: DEFAULT_STEP_BUDGET,
        }
    }
}

impl GeneratorConfig {
    /// Sets the grid sizes to pick from, uniformly, on every attempt.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoGridSizes`] for an empty list and
    /// [`ConfigError::GridSizeTooSmall`] for a size below 2.
    pub fn with_grid_sizes<I>(mut self, sizes: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = usize>,
    {
        let sizes = sizes.into_iter().collect::<Vec<_>>();
        if sizes.is_empty() {
            return Err(ConfigError::NoGridSizes);
        }
        if let Some(&size) = sizes.iter().find(|&&size| size < MIN_WORD_LEN) {
            return Err(ConfigError::GridSizeTooSmall { size });
        }
        self.grid_sizes = sizes;
        Ok(self)
    }

    /// Sets the share of cells, in percent, blocked on every attempt.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::BlackCellPercentOutOfRange`] above 100.
    pub fn with_black_cell_percent(mut self, percent: u32) -> Result<Self, ConfigError> {
        if percent > 100 {
            return Err(ConfigError::BlackCellPercentOutOfRange { percent });
        }
        self.black_cell_percent = percent;
        Ok(self)
    }

    /// Sets the upper bound (inclusive) of extra black cells drawn per attempt.
    #[must_use]
    pub fn with_black_cell_jitter(mut self, jitter: usize) -> Self {
        self.black_cell_jitter = jitter;
        self
    }

    /// Sets the number of topologies tried before giving up.
    #[must_use]
    pub fn with_max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// Sets the candidate trials allowed per topology.
    #[must_use]
    pub fn with_step_budget(mut self, budget: usize) -> Self {
        self.step_budget = budget;
        self
    }

    /// Returns the grid sizes; never empty.
    #[must_use]
    pub fn grid_sizes(&self) -> &[usize] {
        &self.grid_sizes
    }

    /// Returns the black cell share in percent.
    #[must_use]
    pub fn black_cell_percent(&self) -> u32 {
        self.black_cell_percent
    }

    /// Returns the upper bound of extra black cells.
    #[must_use]
    pub fn black_cell_jitter(&self) -> usize {
        self.black_cell_jitter
    }

    /// Returns the number of topologies tried.
    #[must_use]
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Returns the step budget per topology.
    #[must_use]
    pub fn step_budget(&self) -> usize {
        self.step_budget
    }
}
