//! Rect - Rectangular regions of interest
//!
//! A small `Copy` rectangle used to select sub-regions of an image for
//! statistics, color conversion and word-extent search.

use crate::error::{Error, Result};

/// A rectangle region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Left x coordinate
    pub x: i32,
    /// Top y coordinate
    pub y: i32,
    /// Width
    pub w: i32,
    /// Height
    pub h: i32,
}

impl Rect {
    /// Create a new rectangle
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is negative.
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Result<Self> {
        if w < 0 || h < 0 {
            return Err(Error::InvalidParameter(format!(
                "rect dimensions must be non-negative: w={}, h={}",
                w, h
            )));
        }
        Ok(Self { x, y, w, h })
    }

    /// Create a rectangle without validation
    pub const fn new_unchecked(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Create a rectangle from `left, top` (inclusive) and `right, bottom`
    /// (exclusive) edges.
    pub fn from_edges(left: i32, top: i32, right: i32, bottom: i32) -> Result<Self> {
        Self::new(left, top, right - left, bottom - top)
    }

    /// Rectangle covering a whole `width` x `height` image
    pub fn full(width: u32, height: u32) -> Self {
        Self {
            x: 0,
            y: 0,
            w: width as i32,
            h: height as i32,
        }
    }

    /// Right x coordinate (exclusive)
    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    /// Bottom y coordinate (exclusive)
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Area
    #[inline]
    pub fn area(&self) -> i64 {
        self.w as i64 * self.h as i64
    }

    /// Check if the rectangle is empty (zero area)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// Check if a point is inside the rectangle
    #[inline]
    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Check if this rectangle contains another one
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Check that the rectangle lies inside a `width` x `height` image.
    ///
    /// Bounds are inclusive: a rectangle flush against the right or bottom
    /// edge is accepted.
    ///
    /// # Errors
    ///
    /// [`Error::RoiOutOfBounds`] otherwise.
    pub fn check_inside(&self, width: u32, height: u32) -> Result<()> {
        let right = self.x as i64 + self.w as i64;
        let bottom = self.y as i64 + self.h as i64;
        if self.x < 0
            || self.y < 0
            || self.w < 0
            || self.h < 0
            || right > width as i64
            || bottom > height as i64
        {
            return Err(self.out_of_bounds(width, height));
        }
        Ok(())
    }

    /// Build the [`Error::RoiOutOfBounds`] describing this rectangle.
    pub fn out_of_bounds(&self, width: u32, height: u32) -> Error {
        Error::RoiOutOfBounds {
            x: self.x,
            y: self.y,
            w: self.w,
            h: self.h,
            image_width: width,
            image_height: height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_negative() {
        assert!(Rect::new(0, 0, -1, 3).is_err());
        assert!(Rect::new(-5, -5, 1, 1).is_ok());
    }

    #[test]
    fn test_edges() {
        let r = Rect::from_edges(2, 3, 6, 4).unwrap();
        assert_eq!(r, Rect::new_unchecked(2, 3, 4, 1));
        assert_eq!(r.right(), 6);
        assert_eq!(r.bottom(), 4);
        assert_eq!(r.area(), 4);
        assert!(Rect::from_edges(5, 0, 4, 1).is_err());
    }

    #[test]
    fn test_contains() {
        let outer = Rect::full(10, 8);
        assert!(outer.contains_rect(&Rect::new_unchecked(0, 0, 10, 8)));
        assert!(!outer.contains_rect(&Rect::new_unchecked(1, 0, 10, 8)));
        assert!(outer.contains_point(9, 7));
        assert!(!outer.contains_point(10, 0));
    }

    #[test]
    fn test_check_inside_is_inclusive() {
        assert!(Rect::new_unchecked(0, 0, 4, 3).check_inside(4, 3).is_ok());
        assert!(Rect::new_unchecked(1, 0, 4, 3).check_inside(4, 3).is_err());
        assert!(Rect::new_unchecked(-1, 0, 1, 1).check_inside(4, 3).is_err());
        assert!(
            Rect::new_unchecked(i32::MAX, 0, 10, 1)
                .check_inside(4, 3)
                .is_err()
        );
    }
}
