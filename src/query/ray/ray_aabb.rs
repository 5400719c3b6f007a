use std::mem;

use crate::bounding_volume::Aabb;
use crate::math::{Real, DIM};
use crate::query::{Ray, RayCast};
use num::Zero;

impl RayCast for Aabb {
    /// Slab-method cast against this AABB.
    ///
    /// The running parameter interval starts at `[0, max_toi]` and is
    /// intersected with the entry/exit interval of each axis slab in turn.
    /// An axis-parallel ray (zero direction component) either misses the box
    /// entirely, when its origin lies outside that slab, or imposes no
    /// constraint at all.
    fn cast_local_ray(&self, ray: &Ray, max_toi: Real) -> Option<Real> {
        let mut tmin: Real = 0.0;
        let mut tmax: Real = max_toi;

        for i in 0usize..DIM {
            if ray.dir[i].is_zero() {
                if ray.origin[i] < self.mins()[i] || ray.origin[i] > self.maxs()[i] {
                    return None;
                }
            } else {
                let denom = 1.0 / ray.dir[i];
                let mut inter_with_near_halfspace = (self.mins()[i] - ray.origin[i]) * denom;
                let mut inter_with_far_halfspace = (self.maxs()[i] - ray.origin[i]) * denom;

                if inter_with_near_halfspace > inter_with_far_halfspace {
                    mem::swap(
                        &mut inter_with_near_halfspace,
                        &mut inter_with_far_halfspace,
                    )
                }

                tmin = tmin.max(inter_with_near_halfspace);
                tmax = tmax.min(inter_with_far_halfspace);

                if tmin > tmax {
                    // This covers the case where tmax is negative because tmin is
                    // initialized at zero.
                    return None;
                }
            }
        }

        Some(tmin)
    }
}

impl Aabb {
    /// Exit cast for a ray whose origin lies inside this AABB.
    ///
    /// Cheaper than [`RayCast::cast_local_ray`]: each axis only contributes
    /// the face the ray is heading toward (the max face for a positive
    /// direction component, the min face for a negative one; axis-parallel
    /// components contribute nothing). The smallest candidate parameter is
    /// the exit distance.
    ///
    /// Returns `None` when that candidate is non-finite, negative, or larger
    /// than `max_toi`.
    ///
    /// Containment of the origin is a caller contract and is **not**
    /// validated: calling this with an origin outside the box can return a
    /// finite parameter that does not correspond to any boundary crossing of
    /// interest.
    pub fn cast_local_ray_from_within(&self, ray: &Ray, max_toi: Real) -> Option<Real> {
        let mut t = Real::INFINITY;

        for i in 0..DIM {
            if ray.dir[i].is_zero() {
                continue;
            }

            let face = if ray.dir[i] > 0.0 {
                self.maxs()[i]
            } else {
                self.mins()[i]
            };
            t = t.min((face - ray.origin[i]) / ray.dir[i]);
        }

        if t.is_finite() && t >= 0.0 && t <= max_toi {
            Some(t)
        } else {
            None
        }
    }
}
