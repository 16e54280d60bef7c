use minicross_generator::{Clue, Definitions, Puzzle};
use serde::Serialize;

/// DTO for exporting a generated puzzle as JSON.
///
/// The grid is one string per row in the text grid format (`#` blocked,
/// `A`-`Z` letters); seed and id are 64-char hex strings.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct PuzzleDto {
    pub(crate) id: String,
    pub(crate) seed: String,
    pub(crate) size: usize,
    pub(crate) grid: Vec<String>,
    pub(crate) definitions: DefinitionsDto,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct DefinitionsDto {
    pub(crate) across: Vec<ClueDto>,
    pub(crate) down: Vec<ClueDto>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct ClueDto {
    pub(crate) number: usize,
    pub(crate) clue: String,
    pub(crate) answer: String,
    pub(crate) length: usize,
    pub(crate) row: usize,
    pub(crate) col: usize,
}

impl From<&Puzzle> for PuzzleDto {
    fn from(puzzle: &Puzzle) -> Self {
        Self {
            id: puzzle.id.to_string(),
            seed: puzzle.seed.to_string(),
            size: puzzle.grid.size(),
            grid: puzzle
                .grid
                .to_string()
                .lines()
                .map(str::to_owned)
                .collect(),
            definitions: DefinitionsDto::from(&puzzle.definitions),
        }
    }
}

impl From<&Definitions> for DefinitionsDto {
    fn from(definitions: &Definitions) -> Self {
        Self {
            across: definitions.across.iter().map(ClueDto::from).collect(),
            down: definitions.down.iter().map(ClueDto::from).collect(),
        }
    }
}

impl From<&Clue> for ClueDto {
    fn from(clue: &Clue) -> Self {
        Self {
            number: clue.number,
            clue: clue.clue.clone(),
            answer: clue.answer.clone(),
            length: clue.length,
            row: clue.row,
            col: clue.col,
        }
    }
}
