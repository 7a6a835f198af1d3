//! The placement engine: writes words into the grid along permitted
//! directions, then fills the leftover cells with random letters.

use std::fmt::Display;

use log::{debug, warn};
use rand::{seq::SliceRandom, Rng};

use crate::{
    grid::{Cell, Grid},
    word::Word,
    Error,
};

/// The direction a word is written in inside the puzzle grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Left to right along a row.
    Right,

    /// Right to left along a row.
    Left,

    /// Top to bottom along a column.
    Down,

    /// Bottom to top along a column.
    Up,

    /// Diagonally toward the bottom-right corner.
    DownRight,

    /// Diagonally toward the bottom-left corner.
    DownLeft,

    /// Diagonally toward the top-right corner.
    UpRight,

    /// Diagonally toward the top-left corner.
    UpLeft,
}

impl Direction {
    /// All eight compass directions.
    pub const ALL: [Self; 8] = [
        Self::Right,
        Self::Left,
        Self::Down,
        Self::Up,
        Self::DownRight,
        Self::DownLeft,
        Self::UpRight,
        Self::UpLeft,
    ];

    /// The row and column steps between consecutive letters.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Self::Right => (0, 1),
            Self::Left => (0, -1),
            Self::Down => (1, 0),
            Self::Up => (-1, 0),
            Self::DownRight => (1, 1),
            Self::DownLeft => (1, -1),
            Self::UpRight => (-1, 1),
            Self::UpLeft => (-1, -1),
        }
    }

    /// The direction matching a single row/column step, or [`Option::None`]
    /// if the step is not one of the eight unit vectors.
    pub fn from_step(row_step: isize, column_step: isize) -> Option<Self> {
        match (row_step, column_step) {
            (0, 1) => Some(Self::Right),
            (0, -1) => Some(Self::Left),
            (1, 0) => Some(Self::Down),
            (-1, 0) => Some(Self::Up),
            (1, 1) => Some(Self::DownRight),
            (1, -1) => Some(Self::DownLeft),
            (-1, 1) => Some(Self::UpRight),
            (-1, -1) => Some(Self::UpLeft),
            _ => None,
        }
    }
}

/// The difficulty of a puzzle, which decides the subset of directions words
/// may be written in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difficulty {
    /// Words read left-to-right or top-to-bottom only.
    Easy,

    /// Words read along any row or column, in either direction.
    Medium,

    /// Words read along any of the eight directions, diagonals included.
    Hard,
}

impl Difficulty {
    /// The placement directions eligible at this difficulty. The engine
    /// shuffles a copy per word, so the order here only seeds trial order.
    pub fn directions(self) -> &'static [Direction] {
        match self {
            Self::Easy => &[Direction::Right, Direction::Down],
            Self::Medium => &[
                Direction::Right,
                Direction::Left,
                Direction::Down,
                Direction::Up,
            ],
            Self::Hard => &Direction::ALL,
        }
    }
}

/// A word that was successfully written into the grid, along with where it
/// starts and which way it runs.
#[derive(Clone, Debug)]
pub struct PlacedWord {
    word: Word,
    start: (usize, usize),
    direction: Direction,
}

impl PlacedWord {
    /// The word that was placed.
    pub fn word(&self) -> &Word {
        &self.word
    }

    /// The `(row, column)` coordinate of the word's first letter.
    pub fn start(&self) -> (usize, usize) {
        self.start
    }

    /// The direction the word runs in.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The grid coordinates the word's letters occupy, in letter order.
    pub fn path(&self) -> Vec<(usize, usize)> {
        let (row_step, column_step) = self.direction.delta();

        (0..self.word.len() as isize)
            .map(|i| {
                (
                    (self.start.0 as isize + row_step * i) as usize,
                    (self.start.1 as isize + column_step * i) as usize,
                )
            })
            .collect()
    }
}

/// The configuration for a puzzle. See [`Puzzle::generate`] for details.
#[derive(Debug)]
pub struct PuzzleConfig<'a> {
    /// The width and height of the square grid.
    pub grid_size: usize,

    /// The difficulty, which restricts the directions words may run in.
    pub difficulty: Difficulty,

    /// The words to hide in the grid.
    pub words: &'a [String],
}

/// A generated word-search puzzle: a completed letter grid plus the words
/// that were actually hidden in it.
#[derive(Debug)]
pub struct Puzzle {
    grid: Grid,
    placed_words: Vec<PlacedWord>,
}

impl Puzzle {
    /// Generates a puzzle from the given configuration, drawing every random
    /// choice from `rng`.
    ///
    /// Words are processed in shuffled order; for each one the engine tries
    /// the difficulty's directions in shuffled order, and within a direction
    /// every starting cell with independently shuffled row and column
    /// orders. A start is taken when the whole path stays in bounds and
    /// every touched cell is blank or already holds the letter the word
    /// needs there, which lets crossing words share letters. Once all words
    /// are processed, every cell still blank receives a random letter from
    /// A to Z.
    ///
    /// A word with no valid start anywhere is left out rather than failing
    /// generation: it simply never appears in [`Puzzle::placed_words`].
    /// The only errors are invalid inputs, a grid with no cells or a word
    /// with no letters, both reported before any placement happens.
    ///
    /// Generation is fully reproducible: the same configuration and a rng
    /// seeded the same way produce the same puzzle.
    pub fn generate<R: Rng>(config: &PuzzleConfig<'_>, rng: &mut R) -> Result<Self, Error> {
        let mut grid = Grid::new(config.grid_size)?;

        let mut words = config
            .words
            .iter()
            .map(|text| Word::new(text))
            .collect::<Result<Vec<_>, _>>()?;

        // Processing order decides which word wins a contested slot when the
        // grid gets crowded, so it must not be a fixed priority.
        words.shuffle(rng);

        let mut placed_words = Vec::with_capacity(words.len());

        for word in words {
            match place_word(&mut grid, &word, config.difficulty, rng) {
                Some((start, direction)) => {
                    debug!("placed {} at {:?} running {:?}", word, start, direction);

                    placed_words.push(PlacedWord {
                        word,
                        start,
                        direction,
                    });
                }
                None => warn!("no open slot for {}, leaving it out", word),
            }
        }

        fill_blanks(&mut grid, rng);

        Ok(Self { grid, placed_words })
    }

    /// The completed letter grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The words that were actually placed, in processing order. This can be
    /// a subset of the requested words; callers showing "found X of Y" must
    /// count this list, never the request.
    pub fn placed_words(&self) -> &[PlacedWord] {
        &self.placed_words
    }

    /// Resolves a selection path to the placed word it finds, if any, using
    /// the order-independent rule of [`Word::matches`].
    pub fn find_match(&self, path: &[(usize, usize)]) -> Option<&PlacedWord> {
        let cells: Vec<Cell> = path
            .iter()
            .filter_map(|&(row, column)| self.grid.get(row, column))
            .collect();

        if cells.len() != path.len() {
            // Part of the path was out of bounds
            return None;
        }

        self.placed_words
            .iter()
            .find(|placed| placed.word().matches(&cells))
    }
}

impl Display for Puzzle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut words_iter = self.placed_words.iter().map(|placed| placed.word().text());

        for row in 0..self.grid.size() {
            for column in 0..self.grid.size() {
                f.write_fmt(format_args!("{} ", self.grid[(row, column)].letter()))?;
            }

            f.write_fmt(format_args!("| {} \n", words_iter.next().unwrap_or("")))?;
        }

        Ok(())
    }
}

/// Tries to place a word in any of the difficulty's directions, in random
/// order, returning the start and direction that worked.
fn place_word<R: Rng>(
    grid: &mut Grid,
    word: &Word,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<((usize, usize), Direction)> {
    let mut directions = difficulty.directions().to_vec();
    directions.shuffle(rng);

    directions.into_iter().find_map(|direction| {
        place_along(grid, word, direction, rng).map(|start| (start, direction))
    })
}

/// Scans every starting cell in shuffled row and column order, committing
/// the word at the first one whose path is open.
fn place_along<R: Rng>(
    grid: &mut Grid,
    word: &Word,
    direction: Direction,
    rng: &mut R,
) -> Option<(usize, usize)> {
    let size = grid.size() as isize;
    let (row_step, column_step) = direction.delta();
    let reach = word.len() as isize - 1;

    let mut rows: Vec<usize> = (0..grid.size()).collect();
    let mut columns: Vec<usize> = (0..grid.size()).collect();
    rows.shuffle(rng);
    columns.shuffle(rng);

    for &row in &rows {
        for &column in &columns {
            let end_row = row as isize + row_step * reach;
            let end_column = column as isize + column_step * reach;

            if end_row < 0 || end_row >= size || end_column < 0 || end_column >= size {
                continue;
            }

            if let Some(path) = open_path(grid, word, (row, column), direction) {
                for (letter, (path_row, path_column)) in word.text().chars().zip(path) {
                    grid.set(path_row, path_column, letter);
                }

                return Some((row, column));
            }
        }
    }

    None
}

/// Walks the cells the word would cover from `start`. Every cell must be
/// blank or already hold the letter the word needs at that position;
/// returns the path coordinates on success.
fn open_path(
    grid: &Grid,
    word: &Word,
    start: (usize, usize),
    direction: Direction,
) -> Option<Vec<(usize, usize)>> {
    let (row_step, column_step) = direction.delta();

    let mut path = Vec::with_capacity(word.len());
    let (mut row, mut column) = (start.0 as isize, start.1 as isize);

    for letter in word.text().chars() {
        let cell = grid.get(row as usize, column as usize)?;

        if !cell.is_blank() && cell.letter() != letter {
            return None;
        }

        path.push((row as usize, column as usize));

        row += row_step;
        column += column_step;
    }

    Some(path)
}

/// Assigns a uniformly random letter from A to Z to every cell no word
/// claimed. Runs strictly after all placement, so filler letters can never
/// block a path a later word needed.
fn fill_blanks<R: Rng>(grid: &mut Grid, rng: &mut R) {
    let letters: Vec<char> = ('A'..='Z').collect();

    for row in 0..grid.size() {
        for column in 0..grid.size() {
            if grid[(row, column)].is_blank() {
                grid.set(row, column, letters[rng.gen_range(0..letters.len())]);
            }
        }
    }
}
