pub use self::ray::{Ray, RayCast};

#[doc(hidden)]
pub mod ray;
mod ray_aabb;
