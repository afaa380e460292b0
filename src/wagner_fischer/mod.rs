pub mod types;
pub use types::*;

use crate::grid::Grid;

/// How a cell of the edit grid was reached from its neighbour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Start,
    Match,
    Delete,
    Insert,
    Substitute,
}

/// Number of edits needed for the prefixes ending at this cell, and the last
/// step of the path that achieves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cell {
    edits: usize,
    step: Step,
}

impl Cell {
    const START: Cell = Cell {
        edits: 0,
        step: Step::Start,
    };

    fn new(edits: usize, step: Step) -> Self {
        Cell { edits, step }
    }
}

/// Computes the edit script between the characters of two strings.
pub fn diff_chars(origin: &str, destination: &str) -> EditScript<char> {
    let origin: Vec<char> = origin.chars().collect();
    let destination: Vec<char> = destination.chars().collect();
    calculate_diff(&origin, &destination)
}

/// Computes the edit script between two strings after breaking them into
/// newlines and running `calculate_diff`.
pub fn diff_lines(origin: &str, destination: &str) -> EditScript<String> {
    let origin: Vec<String> = origin.split('\n').map(ToString::to_string).collect();
    let destination: Vec<String> = destination.split('\n').map(ToString::to_string).collect();
    calculate_diff(&origin, &destination)
}

/// Computes the shortest edit script turning `origin` into `destination`
/// using the Wagner-Fischer algorithm.
///
/// Every edit has unit cost. When several scripts of the same length exist,
/// the one returned is fixed by the order the grid is filled in and by the
/// candidate precedence at each cell: deletion first, then insertion, then
/// substitution. That precedence is kept for output compatibility and is not
/// a judgement on which alignment is better.
///
/// `T`'s equality must be reflexive and symmetric; otherwise the result is
/// unspecified.
///
/// # Examples
///
/// ```
/// use arraydiff::wagner_fischer::{calculate_diff, Edit};
///
/// let origin: Vec<char> = "sitting".chars().collect();
/// let destination: Vec<char> = "kitten".chars().collect();
/// let result = calculate_diff(&origin, &destination);
/// assert_eq!(result, vec![
///     Edit::substitute('k', 0),
///     Edit::substitute('e', 4),
///     Edit::delete('g', 6),
/// ]);
/// ```
///
/// # Arguments
///
/// * `origin` - The original sequence
/// * `destination` - The sequence to reach
pub fn calculate_diff<T: Eq + Clone>(origin: &[T], destination: &[T]) -> EditScript<T> {
    log::trace!(
        "filling {}x{} edit grid",
        origin.len() + 1,
        destination.len() + 1
    );
    let grid = fill(origin, destination);
    let script = traceback(origin, destination, &grid);
    log::trace!("found {} edits", script.len());
    script
}

fn fill<T: Eq>(origin: &[T], destination: &[T]) -> Grid<Cell> {
    let mut grid = Grid::new(origin.len() + 1, destination.len() + 1, Cell::START);

    // reducing an origin prefix to nothing
    for i in 0..origin.len() {
        grid.set(i + 1, 0, Cell::new(i + 1, Step::Delete));
    }
    // building a destination prefix from nothing
    for j in 0..destination.len() {
        grid.set(0, j + 1, Cell::new(j + 1, Step::Insert));
    }

    for (j, destination_el) in destination.iter().enumerate() {
        for (i, origin_el) in origin.iter().enumerate() {
            let cell = if origin_el == destination_el {
                Cell::new(grid[(i, j)].edits, Step::Match)
            } else {
                let deletion = grid[(i, j + 1)].edits;
                let insertion = grid[(i + 1, j)].edits;
                let substitution = grid[(i, j)].edits;
                if deletion <= insertion && deletion <= substitution {
                    Cell::new(deletion + 1, Step::Delete)
                } else if insertion <= substitution {
                    Cell::new(insertion + 1, Step::Insert)
                } else {
                    Cell::new(substitution + 1, Step::Substitute)
                }
            };
            grid.set(i + 1, j + 1, cell);
        }
    }
    grid
}

fn traceback<T: Clone>(origin: &[T], destination: &[T], grid: &Grid<Cell>) -> EditScript<T> {
    let mut i = origin.len();
    let mut j = destination.len();
    let mut script = Vec::with_capacity(grid[(i, j)].edits);
    loop {
        match grid[(i, j)].step {
            Step::Start => break,
            Step::Match => {
                i -= 1;
                j -= 1;
            }
            Step::Delete => {
                i -= 1;
                script.push(Edit::delete(origin[i].clone(), i));
            }
            Step::Insert => {
                j -= 1;
                script.push(Edit::insert(destination[j].clone(), j));
            }
            Step::Substitute => {
                i -= 1;
                j -= 1;
                script.push(Edit::substitute(destination[j].clone(), j));
            }
        }
    }

    script.reverse();
    script
}
