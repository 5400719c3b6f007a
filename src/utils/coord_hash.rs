//! Collision-free hashing of 3D integer cell coordinates.

use crate::math::Point3;

/// Maps the signed integers bijectively onto the non-negative integers:
/// `0, -1, 1, -2, 2, ...` become `0, 1, 2, 3, 4, ...`.
#[inline]
fn zigzag(n: i64) -> u64 {
    ((n << 1) ^ (n >> 63)) as u64
}

/// The Cantor pairing function, a bijection from pairs of non-negative
/// integers onto the non-negative integers.
#[inline]
fn cantor_pair(a: u128, b: u128) -> u128 {
    (a + b) * (a + b + 1) / 2 + b
}

/// Hashes the integer cell `(x, y, z)` to a single non-negative integer.
///
/// Each coordinate is zig-zag encoded, then the three encodings are folded
/// with two rounds of Cantor pairing. Both steps are bijections, so distinct
/// cells always produce distinct hashes, negative coordinates included, and
/// `hash_cell_xyz(0, 0, 0) == 0`.
///
/// The pairing arithmetic stays within `u128` for coordinate magnitudes up to
/// `2^30`. Larger cells can wrap and lose uniqueness; this is a
/// representability limit, not a checked condition.
///
/// ```rust
/// use voxelmath::utils::hash_cell_xyz;
///
/// assert_eq!(hash_cell_xyz(0, 0, 0), 0);
/// assert_ne!(hash_cell_xyz(1, 2, 3), hash_cell_xyz(3, 2, 1));
/// assert_ne!(hash_cell_xyz(-1, 0, 0), hash_cell_xyz(1, 0, 0));
/// ```
#[inline]
pub fn hash_cell_xyz(x: i64, y: i64, z: i64) -> u128 {
    let a = zigzag(x) as u128;
    let b = zigzag(y) as u128;
    let c = zigzag(z) as u128;
    cantor_pair(cantor_pair(a, b), c)
}

/// Hashes an integer cell given as a point. See [`hash_cell_xyz`].
#[inline]
pub fn hash_cell(cell: Point3<i64>) -> u128 {
    hash_cell_xyz(cell.x, cell.y, cell.z)
}
