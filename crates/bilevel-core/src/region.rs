use serde::{Deserialize, Serialize};

/// A requested rectangle in image coordinates.
///
/// May extend past any edge of the image, or miss it entirely; filters clip it
/// with [`Rect::resolve`] and never fail on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle covering a whole `width` x `height` image.
    pub fn full(width: usize, height: usize) -> Self {
        Self::new(0, 0, clamp_i32(width), clamp_i32(height))
    }

    /// Exclusive right edge, widened to i64 so `x + width` cannot overflow.
    pub fn right(&self) -> i64 {
        self.x as i64 + self.width as i64
    }

    /// Exclusive bottom edge, widened to i64 so `y + height` cannot overflow.
    pub fn bottom(&self) -> i64 {
        self.y as i64 + self.height as i64
    }

    /// Clip this rectangle against a `width` x `height` image.
    pub fn resolve(&self, width: usize, height: usize) -> ResolvedRegion {
        let (min_x, max_x) = clip_axis(self.x, self.right(), width);
        let (min_y, max_y) = clip_axis(self.y, self.bottom(), height);

        ResolvedRegion {
            min_x,
            max_x,
            min_y,
            max_y,
            offset_x: axis_offset(self.x),
            offset_y: axis_offset(self.y),
        }
    }
}

/// The in-bounds part of a [`Rect`], as half-open ranges `[min, max)`.
///
/// Rows and columns are addressed through a view anchored at
/// `(offset_x, offset_y)`: row `y` is found at `y - offset_y` and column `x` at
/// `x - offset_x`. The offset is the rectangle's own origin on an axis where
/// that origin is non-negative, and 0 (absolute addressing) where it is
/// negative. Whenever the region is non-empty, `offset <= min` on both axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedRegion {
    pub min_x: usize,
    pub max_x: usize,
    pub min_y: usize,
    pub max_y: usize,
    pub offset_x: usize,
    pub offset_y: usize,
}

impl ResolvedRegion {
    pub fn is_empty(&self) -> bool {
        self.min_x >= self.max_x || self.min_y >= self.max_y
    }

    pub fn width(&self) -> usize {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> usize {
        self.max_y - self.min_y
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        (self.min_x..self.max_x).contains(&x) && (self.min_y..self.max_y).contains(&y)
    }
}

/// `[max(0, start), min(len, end))`, collapsed to `max == min` when empty.
fn clip_axis(start: i32, end: i64, len: usize) -> (usize, usize) {
    let min = (start as i64).max(0);
    let max = end.min(len as i64).max(min);
    (min as usize, max as usize)
}

fn axis_offset(origin: i32) -> usize {
    if origin >= 0 {
        origin as usize
    } else {
        0
    }
}

fn clamp_i32(v: usize) -> i32 {
    v.min(i32::MAX as usize) as i32
}
