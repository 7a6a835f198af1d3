//! Drag-selection tracking: an explicit session value that follows one
//! gesture across the grid, instead of loose "last cell" and "direction"
//! fields scattered through a UI controller.

use crate::generator::Direction;

/// Where a drag gesture currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionState {
    /// No drag in progress.
    Idle,

    /// A drag started at `origin`. The direction is [`Option::None`] until
    /// the drag commits to a line with its first step.
    Dragging {
        /// The cell the drag started on.
        origin: (usize, usize),

        /// The locked direction, once the first step away from the origin
        /// has been taken.
        direction: Option<Direction>,
    },
}

/// Tracks one drag gesture across the grid.
///
/// A session moves from idle to dragging on [`begin`], collects cells along
/// a single straight line via [`extend`], and returns to idle through
/// [`finish`] or [`cancel`]. The finished path is what callers hand to
/// [`Puzzle::find_match`] to decide whether the drag found a word.
///
/// [`begin`]: SelectionSession::begin
/// [`extend`]: SelectionSession::extend
/// [`finish`]: SelectionSession::finish
/// [`cancel`]: SelectionSession::cancel
/// [`Puzzle::find_match`]: crate::Puzzle::find_match
#[derive(Debug)]
pub struct SelectionSession {
    grid_size: usize,
    state: SelectionState,
    cells: Vec<(usize, usize)>,
}

impl SelectionSession {
    /// Creates an idle session for a grid of the given size.
    pub fn new(grid_size: usize) -> Self {
        Self {
            grid_size,
            state: SelectionState::Idle,
            cells: Vec::new(),
        }
    }

    /// The current state of the gesture.
    pub fn state(&self) -> SelectionState {
        self.state
    }

    /// The cells selected so far, in drag order.
    pub fn cells(&self) -> &[(usize, usize)] {
        &self.cells
    }

    /// Starts a drag at the given cell, discarding any drag in progress.
    /// Out-of-bounds cells leave the session idle.
    pub fn begin(&mut self, cell: (usize, usize)) {
        self.cells.clear();

        if !self.in_bounds(cell) {
            self.state = SelectionState::Idle;
            return;
        }

        self.state = SelectionState::Dragging {
            origin: cell,
            direction: None,
        };
        self.cells.push(cell);
    }

    /// Extends the drag to a new cell.
    ///
    /// The first step away from the origin locks the drag to one of the
    /// eight straight directions; after that only the next cell along the
    /// locked line is accepted. Anything else, a wobble over a cell corner,
    /// a jump, a step backwards, an out-of-bounds cell, is ignored.
    pub fn extend(&mut self, cell: (usize, usize)) {
        let SelectionState::Dragging { origin, direction } = self.state else {
            return;
        };

        if !self.in_bounds(cell) {
            return;
        }

        let Some(&(last_row, last_column)) = self.cells.last() else {
            return;
        };

        let Some(step) = Direction::from_step(
            cell.0 as isize - last_row as isize,
            cell.1 as isize - last_column as isize,
        ) else {
            return;
        };

        match direction {
            None => {
                self.state = SelectionState::Dragging {
                    origin,
                    direction: Some(step),
                };
                self.cells.push(cell);
            }
            Some(locked) if locked == step => self.cells.push(cell),
            Some(_) => {}
        }
    }

    /// Ends the drag, returning the selected path and resetting to idle.
    pub fn finish(&mut self) -> Vec<(usize, usize)> {
        self.state = SelectionState::Idle;
        std::mem::take(&mut self.cells)
    }

    /// Abandons the drag without producing a path.
    pub fn cancel(&mut self) {
        self.state = SelectionState::Idle;
        self.cells.clear();
    }

    fn in_bounds(&self, cell: (usize, usize)) -> bool {
        cell.0 < self.grid_size && cell.1 < self.grid_size
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use crate::{Difficulty, Puzzle, PuzzleConfig};

    use super::*;

    #[test]
    fn starts_idle() {
        let session = SelectionSession::new(5);

        assert_eq!(session.state(), SelectionState::Idle);
        assert!(session.cells().is_empty());
    }

    #[test]
    fn locks_direction_on_the_first_step() {
        let mut session = SelectionSession::new(5);

        session.begin((2, 2));
        assert_eq!(
            session.state(),
            SelectionState::Dragging {
                origin: (2, 2),
                direction: None,
            }
        );

        session.extend((2, 3));
        assert_eq!(
            session.state(),
            SelectionState::Dragging {
                origin: (2, 2),
                direction: Some(Direction::Right),
            }
        );

        session.extend((2, 4));
        assert_eq!(session.cells(), &[(2, 2), (2, 3), (2, 4)]);
    }

    #[test]
    fn ignores_cells_off_the_locked_line() {
        let mut session = SelectionSession::new(5);

        session.begin((0, 0));
        session.extend((1, 1));
        session.extend((2, 1)); // wobble off the diagonal
        session.extend((1, 0)); // step backwards
        session.extend((2, 2));

        assert_eq!(session.cells(), &[(0, 0), (1, 1), (2, 2)]);
    }

    #[test]
    fn ignores_jumps_and_out_of_bounds_cells() {
        let mut session = SelectionSession::new(5);

        session.begin((4, 4));
        session.extend((4, 6)); // not a unit step, and out of bounds
        session.extend((2, 4)); // a jump

        assert_eq!(session.cells(), &[(4, 4)]);

        session.begin((9, 9));
        assert_eq!(session.state(), SelectionState::Idle);
        assert!(session.cells().is_empty());
    }

    #[test]
    fn finish_returns_the_path_and_resets() {
        let mut session = SelectionSession::new(5);

        session.begin((0, 2));
        session.extend((1, 2));
        session.extend((2, 2));

        assert_eq!(session.finish(), vec![(0, 2), (1, 2), (2, 2)]);
        assert_eq!(session.state(), SelectionState::Idle);
        assert!(session.cells().is_empty());

        // Extending after the drag ended does nothing.
        session.extend((3, 2));
        assert!(session.cells().is_empty());
    }

    #[test]
    fn cancel_discards_the_drag() {
        let mut session = SelectionSession::new(5);

        session.begin((1, 1));
        session.extend((1, 2));
        session.cancel();

        assert_eq!(session.state(), SelectionState::Idle);
        assert!(session.finish().is_empty());
    }

    #[test]
    fn a_drag_along_a_placed_word_finds_it() {
        let words = [String::from("CAT")];

        let puzzle = Puzzle::generate(
            &PuzzleConfig {
                grid_size: 10,
                difficulty: Difficulty::Easy,
                words: &words,
            },
            &mut StdRng::seed_from_u64(11),
        )
        .unwrap();

        let placed_path = puzzle.placed_words()[0].path();

        let mut session = SelectionSession::new(puzzle.grid().size());
        session.begin(placed_path[0]);
        for &cell in &placed_path[1..] {
            session.extend(cell);
        }

        let selected = session.finish();

        assert_eq!(selected, placed_path);
        assert_eq!(puzzle.find_match(&selected).unwrap().word().text(), "CAT");
    }
}
