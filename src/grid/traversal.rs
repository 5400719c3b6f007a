//! Lattice-point traversal between two grid corners.
//!
//! Each axis steps independently from its start value toward its end value
//! with the same positive step magnitude; the direction per axis is the sign
//! of `end - start`. Enumeration is lexicographic with the last axis varying
//! fastest, and both endpoints are visited when they land exactly on the
//! step grid.
//!
//! The traversal comes in two delivery modes: eager callback walks
//! ([`for_each_from_to_2d`], [`for_each_from_to`]) and lazy iterators
//! ([`points_from_to_2d`], [`points_from_to`]). The iterators hold nothing
//! but their own cursor, so calling the constructor again with the same
//! arguments replays the identical sequence.

use crate::math::{Point2, Point3, Vector2, Vector3};

#[inline]
fn axis_step(start: i64, end: i64, step: i64) -> i64 {
    if start < end {
        step
    } else {
        -step
    }
}

#[inline]
fn passed(value: i64, end: i64, step: i64) -> bool {
    if step > 0 {
        value > end
    } else {
        value < end
    }
}

/// Invokes `run` for every lattice point between `start` and `end`
/// (inclusive), `x` outer, `y` inner.
///
/// # Panics
///
/// Panics if `step` is not positive.
pub fn for_each_from_to_2d(
    start: Point2<i64>,
    end: Point2<i64>,
    step: i64,
    mut run: impl FnMut(i64, i64),
) {
    assert!(step > 0, "the traversal step must be positive");
    let xstep = axis_step(start.x, end.x, step);
    let ystep = axis_step(start.y, end.y, step);

    let mut x = start.x;
    while !passed(x, end.x, xstep) {
        let mut y = start.y;
        while !passed(y, end.y, ystep) {
            run(x, y);
            y += ystep;
        }
        x += xstep;
    }
}

/// Invokes `run` for every lattice point between `start` and `end`
/// (inclusive), `x` outer, `z` inner.
///
/// # Panics
///
/// Panics if `step` is not positive.
pub fn for_each_from_to(
    start: Point3<i64>,
    end: Point3<i64>,
    step: i64,
    mut run: impl FnMut(i64, i64, i64),
) {
    assert!(step > 0, "the traversal step must be positive");
    let xstep = axis_step(start.x, end.x, step);
    let ystep = axis_step(start.y, end.y, step);
    let zstep = axis_step(start.z, end.z, step);

    let mut x = start.x;
    while !passed(x, end.x, xstep) {
        let mut y = start.y;
        while !passed(y, end.y, ystep) {
            let mut z = start.z;
            while !passed(z, end.z, zstep) {
                run(x, y, z);
                z += zstep;
            }
            y += ystep;
        }
        x += xstep;
    }
}

/// Lazy counterpart of [`for_each_from_to_2d`].
///
/// ```rust
/// use voxelmath::grid::points_from_to_2d;
/// use voxelmath::na::Point2;
///
/// let points: Vec<_> = points_from_to_2d(Point2::new(0, 0), Point2::new(1, 1), 1).collect();
/// assert_eq!(
///     points,
///     vec![
///         Point2::new(0, 0),
///         Point2::new(0, 1),
///         Point2::new(1, 0),
///         Point2::new(1, 1),
///     ]
/// );
/// ```
///
/// # Panics
///
/// Panics if `step` is not positive.
pub fn points_from_to_2d(start: Point2<i64>, end: Point2<i64>, step: i64) -> GridPoints2 {
    assert!(step > 0, "the traversal step must be positive");
    GridPoints2 {
        start_y: start.y,
        end,
        steps: Vector2::new(axis_step(start.x, end.x, step), axis_step(start.y, end.y, step)),
        next: start,
        done: false,
    }
}

/// Lazy counterpart of [`for_each_from_to`].
///
/// # Panics
///
/// Panics if `step` is not positive.
pub fn points_from_to(start: Point3<i64>, end: Point3<i64>, step: i64) -> GridPoints3 {
    assert!(step > 0, "the traversal step must be positive");
    GridPoints3 {
        start_y: start.y,
        start_z: start.z,
        end,
        steps: Vector3::new(
            axis_step(start.x, end.x, step),
            axis_step(start.y, end.y, step),
            axis_step(start.z, end.z, step),
        ),
        next: start,
        done: false,
    }
}

/// Iterator over the 2D lattice points produced by [`points_from_to_2d`].
#[derive(Clone, Debug)]
pub struct GridPoints2 {
    start_y: i64,
    end: Point2<i64>,
    steps: Vector2<i64>,
    next: Point2<i64>,
    done: bool,
}

impl Iterator for GridPoints2 {
    type Item = Point2<i64>;

    fn next(&mut self) -> Option<Point2<i64>> {
        if self.done {
            return None;
        }

        // The first cursor value is always in range: each per-axis direction
        // points from start toward end.
        let current = self.next;

        self.next.y += self.steps.y;
        if passed(self.next.y, self.end.y, self.steps.y) {
            self.next.y = self.start_y;
            self.next.x += self.steps.x;
            if passed(self.next.x, self.end.x, self.steps.x) {
                self.done = true;
            }
        }

        Some(current)
    }
}

impl std::iter::FusedIterator for GridPoints2 {}

/// Iterator over the 3D lattice points produced by [`points_from_to`].
#[derive(Clone, Debug)]
pub struct GridPoints3 {
    start_y: i64,
    start_z: i64,
    end: Point3<i64>,
    steps: Vector3<i64>,
    next: Point3<i64>,
    done: bool,
}

impl Iterator for GridPoints3 {
    type Item = Point3<i64>;

    fn next(&mut self) -> Option<Point3<i64>> {
        if self.done {
            return None;
        }

        let current = self.next;

        self.next.z += self.steps.z;
        if passed(self.next.z, self.end.z, self.steps.z) {
            self.next.z = self.start_z;
            self.next.y += self.steps.y;
            if passed(self.next.y, self.end.y, self.steps.y) {
                self.next.y = self.start_y;
                self.next.x += self.steps.x;
                if passed(self.next.x, self.end.x, self.steps.x) {
                    self.done = true;
                }
            }
        }

        Some(current)
    }
}

impl std::iter::FusedIterator for GridPoints3 {}
