//! Utilities for generating examples, benchmarks, and test cases.

use crate::Point;

/// Generates a regular polygon with `sides` vertices, in counter-clockwise order.
///
/// The vertices lie on the circle of the given `radius` around `center`, and
/// the first one is at angle `rotation` (in radians) from the positive `x` axis.
pub fn regular_polygon(center: Point, radius: f64, sides: usize, rotation: f64) -> Vec<Point> {
    (0..sides)
        .map(|i| {
            let theta = rotation + std::f64::consts::TAU * i as f64 / sides as f64;
            Point::new(
                center.x + radius * theta.cos(),
                center.y + radius * theta.sin(),
            )
        })
        .collect()
}

/// The tooth width of [`comb_and_bar`].
const TOOTH_WIDTH: f64 = 1.0;
/// The height of the comb's spine.
const SPINE: f64 = 1.0;
/// The height of the comb's teeth, measured from the bottom of the spine.
const HEIGHT: f64 = 5.0;

/// Generates a comb with `teeth` teeth, and a horizontal bar crossing all of them.
///
/// For `teeth = 3`, it looks like:
///
/// ```text
///    +-+ +-+ +-+
///  +-+-+-+-+-+-+-+
///  | | | | | | | |
///  +-+-+-+-+-+-+-+
///    | +-+ +-+ |
///    +---------+
/// ```
///
/// Both are counter-clockwise, and their intersection consists of `teeth`
/// disjoint rectangles, each with four vertices and area 2.
///
/// # Panics
///
/// Panics if `teeth` is zero.
pub fn comb_and_bar(teeth: usize) -> (Vec<Point>, Vec<Point>) {
    assert!(teeth > 0);

    let width = (2 * teeth - 1) as f64 * TOOTH_WIDTH;
    let mut comb = vec![Point::new(0.0, 0.0), Point::new(width, 0.0)];
    for k in (0..teeth).rev() {
        let x0 = 2.0 * k as f64 * TOOTH_WIDTH;
        let x1 = x0 + TOOTH_WIDTH;
        comb.push(Point::new(x1, HEIGHT));
        comb.push(Point::new(x0, HEIGHT));
        if k > 0 {
            comb.push(Point::new(x0, SPINE));
            comb.push(Point::new(x0 - TOOTH_WIDTH, SPINE));
        }
    }

    let margin = (HEIGHT - SPINE) / 4.0;
    let (y0, y1) = (SPINE + margin, HEIGHT - margin);
    let bar = vec![
        Point::new(-1.0, y0),
        Point::new(width + 1.0, y0),
        Point::new(width + 1.0, y1),
        Point::new(-1.0, y1),
    ];

    (comb, bar)
}

/// Two overlapping axis-aligned squares: `[0, 4]²` and `[2, 6]²`.
///
/// Their intersection is the square `[2, 4]²`.
pub fn squares() -> (Vec<Point>, Vec<Point>) {
    let square = |x: f64, y: f64| {
        vec![
            Point::new(x, y),
            Point::new(x + 4.0, y),
            Point::new(x + 4.0, y + 4.0),
            Point::new(x, y + 4.0),
        ]
    };
    (square(0.0, 0.0), square(2.0, 2.0))
}
