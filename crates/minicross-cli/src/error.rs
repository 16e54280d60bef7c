use std::{io, path::PathBuf};

use minicross_generator::{ConfigError, GeneratorError};

/// Errors that end a `minicross` run.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub(crate) enum CliError {
    #[display("failed to read dictionary {}", path.display())]
    ReadDictionary { path: PathBuf, source: io::Error },
    #[display("failed to parse dictionary {}", path.display())]
    ParseDictionary {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[display("dictionary {} has no usable entries", path.display())]
    EmptyDictionary { path: PathBuf },
    #[display("invalid generator configuration")]
    Config(#[from] ConfigError),
    #[display("puzzle generation failed")]
    Generator(#[from] GeneratorError),
    #[display("failed to serialize puzzles")]
    Serialize(#[from] serde_json::Error),
    #[display("failed to write output")]
    WriteOutput(#[from] io::Error),
}
