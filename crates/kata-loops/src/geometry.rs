//! Geometry predicates.
//!
//! Rectangles live in the
//! [canvas coordinate space](https://developer.mozilla.org/en-US/docs/Web/API/Canvas_API/Tutorial/Drawing_shapes#the_grid):
//! the origin is the top-left corner and `top` grows downward, unlike the
//! Cartesian plane.

/// An axis-aligned rectangle in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Distance from the top edge of the canvas.
    pub top: f64,
    /// Distance from the left edge of the canvas.
    pub left: f64,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

/// A point on the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

/// A circle given by its center and radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    /// Center of the circle.
    pub center: Point,
    /// Radius of the circle.
    pub radius: f64,
}

/// Whether a triangle can be built from sides of lengths `a`, `b` and `c`.
///
/// Requires positive sides satisfying the strict triangle inequality on
/// every pairing; a degenerate "triangle" like 1, 2, 3 does not count.
///
/// ```
/// assert!(kata_loops::is_triangle(3.0, 4.0, 5.0));
/// assert!(!kata_loops::is_triangle(10.0, 1.0, 1.0));
/// ```
#[must_use]
pub fn is_triangle(a: f64, b: f64, c: f64) -> bool {
    a > 0.0 && b > 0.0 && c > 0.0 && a + b > c && a + c > b && b + c > a
}

/// Whether two axis-aligned rectangles overlap.
///
/// Rectangles that merely touch along an edge or corner count as
/// overlapping.
///
/// ```
/// use kata_loops::{Rect, rectangles_overlap};
///
/// let a = Rect { top: 0.0, left: 0.0, width: 10.0, height: 10.0 };
/// let b = Rect { top: 5.0, left: 5.0, width: 20.0, height: 20.0 };
/// let c = Rect { top: 20.0, left: 20.0, width: 20.0, height: 20.0 };
/// assert!(rectangles_overlap(&a, &b));
/// assert!(!rectangles_overlap(&a, &c));
/// ```
#[must_use]
pub fn rectangles_overlap(rect1: &Rect, rect2: &Rect) -> bool {
    let separated = rect1.left > rect2.left + rect2.width
        || rect2.left > rect1.left + rect1.width
        || rect1.top > rect2.top + rect2.height
        || rect2.top > rect1.top + rect1.height;
    !separated
}

/// Whether `point` lies strictly inside `circle`.
///
/// Points on the circumference are not inside.
///
/// ```
/// use kata_loops::{Circle, Point, is_inside_circle};
///
/// let circle = Circle { center: Point { x: 0.0, y: 0.0 }, radius: 10.0 };
/// assert!(is_inside_circle(&circle, &Point { x: 0.0, y: 0.0 }));
/// assert!(!is_inside_circle(&circle, &Point { x: 10.0, y: 10.0 }));
/// ```
#[must_use]
pub fn is_inside_circle(circle: &Circle, point: &Point) -> bool {
    let dx = point.x - circle.center.x;
    let dy = point.y - circle.center.y;
    dx.mul_add(dx, dy * dy) < circle.radius * circle.radius
}
