//! Standalone numeric, string, geometry and grid katas.
//!
//! Each function is a pure transform over primitive inputs with no shared
//! state and no dependency on any other function; they exist to be called
//! one at a time, typically from a unit test.

/// Geometry predicates: triangles, rectangle overlap, point-in-circle.
pub mod geometry;
/// Grid katas: matrix multiplication and tic-tac-toe evaluation.
pub mod grids;
/// Numeric katas: `FizzBuzz`, factorial, Luhn, digital root and friends.
pub mod numbers;
/// String katas: reversal, brackets, intervals and common paths.
pub mod strings;

pub use geometry::{Circle, Point, Rect, is_inside_circle, is_triangle, rectangles_overlap};
pub use grids::{Mark, evaluate_tic_tac_toe, matrix_product};
pub use numbers::{
    FizzBuzz, digital_root, factorial, fizz_buzz, is_credit_card_number, reverse_integer,
    sum_between, to_nary_string,
};
pub use strings::{
    common_directory_path, find_first_single_char, interval_string, is_brackets_balanced,
    reverse_string,
};
