//! Non-persistent geometric queries.

pub use self::ray::{Ray, RayCast};

mod ray;
