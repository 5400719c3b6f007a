//! Various unsorted numerical utilities.

pub use self::coord_hash::{hash_cell, hash_cell_xyz};

mod coord_hash;
