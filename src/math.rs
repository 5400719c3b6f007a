//! Compilation flags dependent aliases for mathematical types.

pub use na::{Point2, Point3, Vector2, Vector3};

/// The scalar type used throughout this crate.
#[cfg(feature = "f32")]
pub type Real = f32;

/// The scalar type used throughout this crate.
#[cfg(feature = "f64")]
pub type Real = f64;

/// The dimension of the ambient space.
pub const DIM: usize = 3;

/// The point type.
pub type Point<N> = Point3<N>;

/// The vector type.
pub type Vector<N> = Vector3<N>;
