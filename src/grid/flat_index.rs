//! Bijective mapping between 2D grid coordinates and flat buffer offsets.

use crate::math::{Point2, Vector2};

/// The iteration order used by a [`FlatIndex2d`] to linearize coordinates.
///
/// Only the two axis-major orders exist, so the injectable encode/decode
/// strategy is a plain enum rather than a pair of function pointers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FlatIndexOrder {
    /// Row-major: `index = x + y * width`, `x` varies fastest.
    #[default]
    XFirst,
    /// Column-major: `index = y + x * height`, `y` varies fastest.
    YFirst,
}

impl FlatIndexOrder {
    #[inline]
    fn encode(self, coord: Point2<u32>, bounds: Vector2<u32>) -> u64 {
        match self {
            FlatIndexOrder::XFirst => coord.x as u64 + coord.y as u64 * bounds.x as u64,
            FlatIndexOrder::YFirst => coord.y as u64 + coord.x as u64 * bounds.y as u64,
        }
    }

    #[inline]
    fn decode(self, index: u64, bounds: Vector2<u32>) -> Point2<u32> {
        match self {
            FlatIndexOrder::XFirst => {
                let width = bounds.x as u64;
                Point2::new((index % width) as u32, (index / width) as u32)
            }
            FlatIndexOrder::YFirst => {
                let height = bounds.y as u64;
                Point2::new((index / height) as u32, (index % height) as u32)
            }
        }
    }
}

/// A bijective mapping between 2D grid coordinates and offsets into a flat
/// buffer of `width * height` cells.
///
/// For every coordinate inside the current bounds,
/// `coord_of(index_of(coord)) == coord`. Coordinates outside the bounds
/// encode without panicking but land outside the conceptual rectangle;
/// bounds-checking against [`FlatIndex2d::len`] is the caller's job.
///
/// The index itself never owns or resizes any buffer: [`FlatIndex2d::set_bounds`]
/// only affects future calls, and re-sizing storage that was allocated for the
/// old bounds is up to the caller.
///
/// # Example
///
/// ```rust
/// use voxelmath::grid::FlatIndex2d;
/// use voxelmath::na::Point2;
///
/// let mut index = FlatIndex2d::xy_order();
/// index.set_bounds(16, 16);
///
/// let i = index.index_of(Point2::new(3, 5));
/// assert_eq!(i, 3 + 5 * 16);
/// assert_eq!(index.coord_of(i), Point2::new(3, 5));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FlatIndex2d {
    bounds: Vector2<u32>,
    order: FlatIndexOrder,
}

impl FlatIndex2d {
    /// A flat index using the default row-major [`FlatIndexOrder::XFirst`]
    /// order, with 1x1 bounds.
    #[inline]
    pub fn xy_order() -> FlatIndex2d {
        FlatIndex2d::with_order(FlatIndexOrder::XFirst)
    }

    /// A flat index using the given iteration order, with 1x1 bounds.
    #[inline]
    pub fn with_order(order: FlatIndexOrder) -> FlatIndex2d {
        FlatIndex2d {
            bounds: Vector2::new(1, 1),
            order,
        }
    }

    /// The linear offset of `coord` under the current bounds.
    #[inline]
    pub fn index_of(&self, coord: Point2<u32>) -> u64 {
        self.order.encode(coord, self.bounds)
    }

    /// The linear offset of `(x, y)` under the current bounds.
    #[inline]
    pub fn index_of_xy(&self, x: u32, y: u32) -> u64 {
        self.index_of(Point2::new(x, y))
    }

    /// The coordinate whose linear offset is `index`.
    ///
    /// Decoding divides by the grid extent, so calling this with zero-width
    /// bounds (zero-height for [`FlatIndexOrder::YFirst`]) is a contract
    /// violation and panics on the integer division.
    #[inline]
    pub fn coord_of(&self, index: u64) -> Point2<u32> {
        self.order.decode(index, self.bounds)
    }

    /// Replaces the grid extent. Takes effect on the next call; previously
    /// computed indices keep their old meaning.
    #[inline]
    pub fn set_bounds(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            log::warn!(
                "flat 2d index bounds set to {}x{}; decoding indices is undefined for \
                 zero-sized bounds",
                width,
                height
            );
        }

        self.bounds = Vector2::new(width, height);
    }

    /// The current grid extent.
    #[inline]
    pub fn bounds(&self) -> Vector2<u32> {
        self.bounds
    }

    /// The number of cells addressed by the current bounds.
    #[inline]
    pub fn len(&self) -> u64 {
        self.bounds.x as u64 * self.bounds.y as u64
    }

    /// Whether the current bounds address no cell at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The iteration order fixed at construction.
    #[inline]
    pub fn order(&self) -> FlatIndexOrder {
        self.order
    }
}

impl Default for FlatIndex2d {
    #[inline]
    fn default() -> FlatIndex2d {
        FlatIndex2d::xy_order()
    }
}
