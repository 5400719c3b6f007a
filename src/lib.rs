/*!
voxelmath
=========

**voxelmath** is a spatial-math kernel for voxel and grid based geometry,
written with the rust programming language. It provides an axis-aligned
bounding box with cached derived metrics, slab-method ray casting, a
collision-free hash for 3D integer cells, bijective flat indexing of 2D
grids, and lattice-point traversal.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::manual_range_contains)]

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;
#[cfg_attr(test, macro_use)]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod grid;
pub mod math;
pub mod query;
pub mod utils;
