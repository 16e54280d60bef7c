use std::{fmt, io::Write};

use minicross_core::{Cell, Direction, WordIndex};
use minicross_generator::Puzzle;

use crate::{error::CliError, puzzle_dto::PuzzleDto};

/// Writes `puzzles` to `out`, as one pretty JSON array or as text blocks
/// separated by blank lines.
///
/// Serialization happens before any byte is written, so a failing writer
/// always surfaces as [`CliError::WriteOutput`].
pub(crate) fn write_puzzles<W>(
    out: &mut W,
    puzzles: &[Puzzle],
    json: bool,
) -> Result<(), CliError>
where
    W: Write + ?Sized,
{
    if json {
        let dtos = puzzles.iter().map(PuzzleDto::from).collect::<Vec<_>>();
        let text = serde_json::to_string_pretty(&dtos)?;
        writeln!(out, "{text}")?;
    } else {
        for (i, puzzle) in puzzles.iter().enumerate() {
            if i > 0 {
                writeln!(out)?;
            }
            write!(out, "{}", PuzzleText(puzzle))?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Text rendering of a puzzle: the blank grid with clue numbers, the clues
/// and the solution.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PuzzleText<'a>(pub(crate) &'a Puzzle);

impl fmt::Display for PuzzleText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let puzzle = self.0;
        writeln!(f, "Puzzle {}", puzzle.id)?;
        writeln!(f, "Seed:  {}", puzzle.seed)?;
        writeln!(f)?;

        let size = puzzle.grid.size();
        let mut numbers = vec![None; size * size];
        for clue in puzzle.definitions.iter() {
            numbers[clue.row * size + clue.col] = Some(clue.number);
        }
        for (row, cells) in puzzle.grid.rows().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                match (cell, numbers[row * size + col]) {
                    (Cell::Blocked, _) => write!(f, " ##")?,
                    (_, Some(number)) => write!(f, "{number:>3}")?,
                    (_, None) => write!(f, "  .")?,
                }
            }
            writeln!(f)?;
        }

        for direction in Direction::ALL {
            let title = match direction {
                Direction::Across => "Across",
                Direction::Down => "Down",
            };
            writeln!(f)?;
            writeln!(f, "{title}:")?;
            for clue in puzzle.definitions.clues(direction) {
                writeln!(f, "  {clue}")?;
            }
        }

        writeln!(f)?;
        writeln!(f, "Solution:")?;
        for line in puzzle.grid.to_string().lines() {
            writeln!(f, "  {line}")?;
        }
        Ok(())
    }
}

/// Text rendering of the word count per length of a dictionary.
#[derive(Debug, Clone, Copy)]
pub(crate) struct StatsText<'a>(pub(crate) &'a WordIndex);

impl fmt::Display for StatsText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total words: {}", self.0.len())?;
        for (len, count) in self.0.length_distribution() {
            writeln!(f, "  {len} letters: {count}")?;
        }
        Ok(())
    }
}
