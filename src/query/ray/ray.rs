//! Traits and structure needed to cast rays.

use crate::math::{Point, Real, Vector};

/// A ray for ray-casting queries.
///
/// A ray is a half-infinite line starting at an origin point and extending in
/// a direction. The direction does not need to be normalized; when it is, the
/// cast parameter `t` measures actual distance along the ray.
///
/// A zero direction component makes the ray axis-parallel on that slab; a
/// fully zero direction is accepted and handled mechanically by the casting
/// code (the ray degenerates to its origin point).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ray {
    /// Starting point of the ray.
    pub origin: Point<Real>,
    /// Direction of the ray. Does not need to be normalized.
    pub dir: Vector<Real>,
}

impl Ray {
    /// Creates a new ray from an origin point and a direction vector.
    #[inline]
    pub fn new(origin: Point<Real>, dir: Vector<Real>) -> Ray {
        Ray { origin, dir }
    }

    /// Translates this ray by the given vector. Its direction is left unchanged.
    #[inline]
    pub fn translate_by(&self, v: Vector<Real>) -> Ray {
        Ray::new(self.origin + v, self.dir)
    }

    /// Computes the point at parameter `t`: `origin + dir * t`.
    ///
    /// ```rust
    /// use voxelmath::query::Ray;
    /// use voxelmath::na::{Point3, Vector3};
    ///
    /// let ray = Ray::new(Point3::origin(), Vector3::new(1.0, 0.0, 0.0));
    /// assert_eq!(ray.point_at(5.0), Point3::new(5.0, 0.0, 0.0));
    /// ```
    #[inline]
    pub fn point_at(&self, t: Real) -> Point<Real> {
        self.origin + self.dir * t
    }
}

/// Traits of objects which can be tested for intersection with a ray.
pub trait RayCast {
    /// Computes the smallest non-negative parameter `t` at which `ray` hits
    /// the boundary of this object, or `None` if there is no hit within
    /// `[0, max_toi]`.
    ///
    /// The cast is solid: a ray starting inside the object hits immediately
    /// at `t = 0`.
    fn cast_local_ray(&self, ray: &Ray, max_toi: Real) -> Option<Real>;

    /// Tests whether `ray` hits this object within `[0, max_toi]`.
    #[inline]
    fn intersects_local_ray(&self, ray: &Ray, max_toi: Real) -> bool {
        self.cast_local_ray(ray, max_toi).is_some()
    }
}
