use crate::FillStats;

/// Reasons a fill attempt gave up.
///
/// Both variants are an expected outcome of filling a random grid: the caller
/// discards the grid and tries another layout. In either case the grid passed
/// to the filler has been restored to its state before the call.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::IsVariant,
)]
pub enum FillFailure {
    /// The search tried more candidates than its budget allows.
    #[display("step budget of {budget} exceeded")]
    StepBudgetExceeded {
        /// The budget that was exhausted.
        budget: usize,
        /// Work done before aborting.
        stats: FillStats,
    },
    /// Every combination of candidates was tried without success.
    #[display("no fill exists for this grid and dictionary")]
    Unsatisfiable {
        /// Work done before giving up.
        stats: FillStats,
    },
}

impl FillFailure {
    /// Returns the statistics of the failed search.
    #[must_use]
    pub fn stats(&self) -> FillStats {
        match self {
            Self::StepBudgetExceeded { stats, .. } | Self::Unsatisfiable { stats } => *stats,
        }
    }
}
