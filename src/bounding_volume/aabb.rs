//! Axis Aligned Bounding Box.

use crate::math::{Point, Real, Vector, DIM};
use na;

/// An Axis-Aligned Bounding Box (AABB) with cached derived metrics.
///
/// The authoritative state is the pair of corners `mins` and `maxs`. The
/// extents (`maxs - mins`), center (midpoint of the corners) and signed
/// volume (product of the extents) are cached alongside them: every mutator
/// re-establishes all three before returning, so the accessors never have to
/// recompute anything.
///
/// The box is deliberately permissive about degenerate geometry: `maxs` may
/// be smaller than `mins` on any axis. Such a box has negative extents and a
/// negative or zero volume, and all queries keep operating on it mechanically
/// (there is no validation layer).
///
/// # Example
///
/// ```rust
/// use voxelmath::bounding_volume::Aabb;
/// use voxelmath::na::Point3;
///
/// let mut aabb = Aabb::new(Point3::origin(), Point3::new(2.0, 3.0, 4.0));
/// assert_eq!(aabb.volume(), 24.0);
/// assert_eq!(aabb.center(), Point3::new(1.0, 1.5, 2.0));
///
/// // Moving the min corner drags the max corner along: the extents are kept.
/// aabb.set_mins(Point3::new(1.0, 1.0, 1.0));
/// assert_eq!(aabb.maxs(), Point3::new(3.0, 4.0, 5.0));
/// assert_eq!(aabb.volume(), 24.0);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Aabb {
    mins: Point<Real>,
    maxs: Point<Real>,
    extents: Vector<Real>,
    center: Point<Real>,
    volume: Real,
}

impl Aabb {
    /// Creates a new AABB from its minimum and maximum corners.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        let mut result = Aabb {
            mins,
            maxs,
            extents: Vector::zeros(),
            center: Point::origin(),
            volume: 0.0,
        };
        result.set_min_max(mins, maxs);
        result
    }

    /// Creates a new AABB from its center and half-extents.
    #[inline]
    pub fn from_half_extents(center: Point<Real>, half_extents: Vector<Real>) -> Aabb {
        Aabb::new(center - half_extents, center + half_extents)
    }

    /// Sets both corners, then recomputes the extents, center and volume.
    #[inline]
    pub fn set_min_max(&mut self, mins: Point<Real>, maxs: Point<Real>) {
        self.mins = mins;
        self.maxs = maxs;
        self.extents = self.maxs - self.mins;
        self.recompute_volume();
        self.recompute_center();
    }

    /// Sets the extents, keeping the min corner fixed.
    ///
    /// The max corner is re-derived as `mins + extents`; the center and
    /// volume follow.
    #[inline]
    pub fn set_extents(&mut self, extents: Vector<Real>) {
        self.extents = extents;
        self.recompute_volume();
        self.update_maxs();
        self.recompute_center();
    }

    /// Sets the min corner and the extents in one call.
    #[inline]
    pub fn set_mins_and_extents(&mut self, mins: Point<Real>, extents: Vector<Real>) {
        self.mins = mins;
        self.extents = extents;
        self.recompute_volume();
        self.update_maxs();
        self.recompute_center();
    }

    /// Moves the min corner, keeping the current extents.
    ///
    /// The max corner and center follow; the volume cannot change since the
    /// extents did not.
    #[inline]
    pub fn set_mins(&mut self, mins: Point<Real>) {
        self.mins = mins;
        self.update_maxs();
        self.recompute_center();
    }

    /// The corner with the smallest coordinates.
    #[inline]
    pub fn mins(&self) -> Point<Real> {
        self.mins
    }

    /// The corner with the largest coordinates.
    #[inline]
    pub fn maxs(&self) -> Point<Real> {
        self.maxs
    }

    /// The extents of this AABB (`maxs - mins`).
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.extents
    }

    /// The half-extents of this AABB.
    #[inline]
    pub fn half_extents(&self) -> Vector<Real> {
        self.extents * 0.5
    }

    /// The center of this AABB.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        self.center
    }

    /// The signed volume of this AABB (product of the extents).
    #[inline]
    pub fn volume(&self) -> Real {
        self.volume
    }

    /// Does this AABB contain a point expressed in the same coordinate frame
    /// as `self`?
    ///
    /// All six faces are inclusive: a point lying exactly on a face is
    /// contained.
    #[inline]
    pub fn contains_local_point(&self, point: &Point<Real>) -> bool {
        for i in 0..DIM {
            if point[i] < self.mins[i] || point[i] > self.maxs[i] {
                return false;
            }
        }

        true
    }

    /// Does this AABB overlap the box given by the corners `mins` and `maxs`?
    ///
    /// Separating-axis test with a short-circuit per axis. Boxes sharing
    /// nothing but a face (or an edge, or a corner) still intersect.
    #[inline]
    pub fn intersects_min_max(&self, mins: &Point<Real>, maxs: &Point<Real>) -> bool {
        for i in 0..DIM {
            if self.maxs[i] < mins[i] || self.mins[i] > maxs[i] {
                return false;
            }
        }

        true
    }

    /// Does this AABB overlap `other`?
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.intersects_min_max(&other.mins, &other.maxs)
    }

    #[inline]
    fn update_maxs(&mut self) {
        self.maxs = self.mins + self.extents;
    }

    #[inline]
    fn recompute_center(&mut self) {
        self.center = na::center(&self.mins, &self.maxs);
    }

    #[inline]
    fn recompute_volume(&mut self) {
        self.volume = self.extents.x * self.extents.y * self.extents.z;
    }
}

impl Default for Aabb {
    /// A zero-sized box sitting at the origin.
    #[inline]
    fn default() -> Aabb {
        Aabb::new(Point::origin(), Point::origin())
    }
}
