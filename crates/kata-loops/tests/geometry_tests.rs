//! Integration tests for the geometry predicates.

use kata_loops::{Circle, Point, Rect, is_inside_circle, is_triangle, rectangles_overlap};

const fn rect(top: f64, left: f64, width: f64, height: f64) -> Rect {
    Rect {
        top,
        left,
        width,
        height,
    }
}

#[test]
fn test_is_triangle() {
    assert!(!is_triangle(1.0, 2.0, 3.0));
    assert!(is_triangle(3.0, 4.0, 5.0));
    assert!(!is_triangle(10.0, 1.0, 1.0));
    assert!(is_triangle(10.0, 10.0, 10.0));
}

#[test]
fn test_is_triangle_rejects_non_positive_sides() {
    assert!(!is_triangle(0.0, 1.0, 1.0));
    assert!(!is_triangle(-3.0, 4.0, 5.0));
}

#[test]
fn test_rectangles_overlap() {
    assert!(rectangles_overlap(
        &rect(0.0, 0.0, 10.0, 10.0),
        &rect(5.0, 5.0, 20.0, 20.0)
    ));
    assert!(!rectangles_overlap(
        &rect(0.0, 0.0, 10.0, 10.0),
        &rect(20.0, 20.0, 20.0, 20.0)
    ));
}

#[test]
fn test_rectangles_touching_count_as_overlap() {
    // Shares the edge at x == 10.
    assert!(rectangles_overlap(
        &rect(0.0, 0.0, 10.0, 10.0),
        &rect(0.0, 10.0, 5.0, 5.0)
    ));
}

#[test]
fn test_rectangles_overlap_is_symmetric() {
    let a = rect(0.0, 0.0, 10.0, 10.0);
    let b = rect(5.0, 5.0, 20.0, 20.0);
    assert_eq!(rectangles_overlap(&a, &b), rectangles_overlap(&b, &a));

    let c = rect(20.0, 20.0, 20.0, 20.0);
    assert_eq!(rectangles_overlap(&a, &c), rectangles_overlap(&c, &a));
}

#[test]
fn test_is_inside_circle() {
    let circle = Circle {
        center: Point { x: 0.0, y: 0.0 },
        radius: 10.0,
    };
    assert!(is_inside_circle(&circle, &Point { x: 0.0, y: 0.0 }));
    assert!(!is_inside_circle(&circle, &Point { x: 10.0, y: 10.0 }));
}

#[test]
fn test_point_on_circumference_is_not_inside() {
    let circle = Circle {
        center: Point { x: 0.0, y: 0.0 },
        radius: 10.0,
    };
    assert!(!is_inside_circle(&circle, &Point { x: 10.0, y: 0.0 }));
    assert!(is_inside_circle(&circle, &Point { x: 9.9, y: 0.0 }));
}

#[test]
fn test_circle_away_from_origin() {
    let circle = Circle {
        center: Point { x: 5.0, y: 5.0 },
        radius: 2.0,
    };
    assert!(is_inside_circle(&circle, &Point { x: 6.0, y: 5.5 }));
    assert!(!is_inside_circle(&circle, &Point { x: 0.0, y: 0.0 }));
}
