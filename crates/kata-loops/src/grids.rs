//! Grid katas: matrix multiplication and
//! [tic-tac-toe](https://en.wikipedia.org/wiki/Tic-tac-toe) evaluation.

use strum_macros::Display;

/// One player's mark on the tic-tac-toe board.
///
/// The noughts mark displays as the digit `0`, matching the historical
/// notation of the exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Mark {
    /// The crosses player.
    #[strum(serialize = "X")]
    X,
    /// The noughts player.
    #[strum(serialize = "0")]
    O,
}

/// The [product](https://en.wikipedia.org/wiki/Matrix_multiplication) of
/// two matrices, or `None` when the shapes are incompatible.
///
/// `m1` must be a non-empty rectangular matrix whose row length equals the
/// number of rows of `m2`, itself non-empty and rectangular.
///
/// ```
/// let row = vec![vec![1, 2, 3]];
/// let col = vec![vec![4], vec![5], vec![6]];
/// assert_eq!(kata_loops::matrix_product(&row, &col), Some(vec![vec![32]]));
/// ```
#[must_use]
pub fn matrix_product(m1: &[Vec<i64>], m2: &[Vec<i64>]) -> Option<Vec<Vec<i64>>> {
    let inner = m1.first()?.len();
    let cols = m2.first()?.len();
    if inner == 0
        || cols == 0
        || inner != m2.len()
        || m1.iter().any(|row| row.len() != inner)
        || m2.iter().any(|row| row.len() != cols)
    {
        return None;
    }

    let product = m1
        .iter()
        .map(|row| {
            (0..cols)
                .map(|j| (0..inner).map(|k| row[k] * m2[k][j]).sum())
                .collect()
        })
        .collect();
    Some(product)
}

/// Who, if anyone, has three in a row on the given 3x3 position.
///
/// Checks the three rows, three columns and two diagonals; `None` means no
/// completed line (a draw or an unfinished game).
///
/// ```
/// use kata_loops::{Mark, evaluate_tic_tac_toe};
///
/// let x = Some(Mark::X);
/// let o = Some(Mark::O);
/// let position = [[x, None, o], [None, x, o], [None, None, x]];
/// assert_eq!(evaluate_tic_tac_toe(position), Some(Mark::X));
/// ```
#[must_use]
pub fn evaluate_tic_tac_toe(position: [[Option<Mark>; 3]; 3]) -> Option<Mark> {
    const LINES: [[(usize, usize); 3]; 8] = [
        [(0, 0), (0, 1), (0, 2)],
        [(1, 0), (1, 1), (1, 2)],
        [(2, 0), (2, 1), (2, 2)],
        [(0, 0), (1, 0), (2, 0)],
        [(0, 1), (1, 1), (2, 1)],
        [(0, 2), (1, 2), (2, 2)],
        [(0, 0), (1, 1), (2, 2)],
        [(0, 2), (1, 1), (2, 0)],
    ];

    for line in LINES {
        let [a, b, c] = line.map(|(row, col)| position[row][col]);
        if a.is_some() && a == b && b == c {
            return a;
        }
    }
    None
}
