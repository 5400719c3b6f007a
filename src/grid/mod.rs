//! Flat indexing and lattice traversal of 2D/3D grids.

pub use self::flat_index::{FlatIndex2d, FlatIndexOrder};
pub use self::traversal::{
    for_each_from_to, for_each_from_to_2d, points_from_to, points_from_to_2d, GridPoints2,
    GridPoints3,
};

mod flat_index;
mod traversal;
