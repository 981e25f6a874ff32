//! Structuring elements for grayscale morphology
//!
//! A structuring element is a set of neighbor offsets `(dx, dy)` relative
//! to the pixel being computed, together with the bounding box of those
//! offsets. The bounding box always contains the origin, so for every
//! element `min_x <= 0 <= max_x` and `min_y <= 0 <= max_y`.

use crate::{MorphError, MorphResult};

/// Largest radius accepted by the line, square and cross shapes; the
/// diameter `2 * radius + 1` still fits an `i32`.
pub const MAX_SEL_RADIUS: u32 = (i32::MAX as u32 - 1) / 2;

fn checked_radius(radius: u32) -> MorphResult<i32> {
    if radius > MAX_SEL_RADIUS {
        return Err(MorphError::InvalidSel(format!(
            "radius {} exceeds {}",
            radius, MAX_SEL_RADIUS
        )));
    }
    i32::try_from(radius)
        .map_err(|_| MorphError::InvalidSel(format!("radius {} too large", radius)))
}

/// Bounding box of a structuring element's offsets, origin included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SelBounds {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl SelBounds {
    /// True if `(dx, dy)` lies inside the box.
    pub fn contains(&self, dx: i32, dy: i32) -> bool {
        dx >= self.min_x && dx <= self.max_x && dy >= self.min_y && dy <= self.max_y
    }

    /// Width of the box in pixels.
    pub fn width(&self) -> i64 {
        self.max_x as i64 - self.min_x as i64 + 1
    }

    /// Height of the box in pixels.
    pub fn height(&self) -> i64 {
        self.max_y as i64 - self.min_y as i64 + 1
    }
}

/// A validated, non-empty set of neighbor offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuringElement {
    dx: Vec<i32>,
    dy: Vec<i32>,
    bounds: SelBounds,
}

impl StructuringElement {
    /// Build an element from `(dx, dy)` offsets, computing the bounding box.
    ///
    /// # Errors
    ///
    /// [`MorphError::InvalidSel`] if `offsets` is empty.
    pub fn new(offsets: impl IntoIterator<Item = (i32, i32)>) -> MorphResult<Self> {
        let (dx, dy): (Vec<i32>, Vec<i32>) = offsets.into_iter().unzip();
        if dx.is_empty() {
            return Err(MorphError::InvalidSel(
                "structuring element has no offsets".into(),
            ));
        }
        let bounds = SelBounds {
            min_x: dx.iter().copied().fold(0, i32::min),
            max_x: dx.iter().copied().fold(0, i32::max),
            min_y: dy.iter().copied().fold(0, i32::min),
            max_y: dy.iter().copied().fold(0, i32::max),
        };
        Ok(Self { dx, dy, bounds })
    }

    /// Build an element from separate offset arrays and a caller-supplied
    /// bounding box.
    ///
    /// # Errors
    ///
    /// [`MorphError::InvalidSel`] if the arrays are empty or differ in
    /// length, if the box does not contain the origin, or if any offset
    /// falls outside the box.
    pub fn from_parts(dx: &[i32], dy: &[i32], bounds: SelBounds) -> MorphResult<Self> {
        if dx.is_empty() {
            return Err(MorphError::InvalidSel(
                "structuring element has no offsets".into(),
            ));
        }
        if dx.len() != dy.len() {
            return Err(MorphError::InvalidSel(format!(
                "offset arrays differ in length: {} horizontal, {} vertical",
                dx.len(),
                dy.len()
            )));
        }
        if bounds.min_x > 0 || bounds.max_x < 0 || bounds.min_y > 0 || bounds.max_y < 0 {
            return Err(MorphError::InvalidSel(format!(
                "bounding box x [{}, {}] y [{}, {}] must contain the origin",
                bounds.min_x, bounds.max_x, bounds.min_y, bounds.max_y
            )));
        }
        if let Some(k) = (0..dx.len()).find(|&k| !bounds.contains(dx[k], dy[k])) {
            return Err(MorphError::InvalidSel(format!(
                "offset {} ({}, {}) lies outside the bounding box",
                k, dx[k], dy[k]
            )));
        }
        Ok(Self {
            dx: dx.to_vec(),
            dy: dy.to_vec(),
            bounds,
        })
    }

    /// Build an element from a `width` x `height` mask; nonzero entries are
    /// members.
    ///
    /// The anchor defaults to the center `(width / 2, height / 2)`. Member
    /// `(col, row)` becomes the offset `(col - anchor_x, row - anchor_y)`.
    ///
    /// # Errors
    ///
    /// [`MorphError::InvalidSel`] if the mask is too short, has no members,
    /// or the anchor is outside it.
    pub fn from_mask(
        mask: &[u8],
        width: u32,
        height: u32,
        anchor: Option<(u32, u32)>,
    ) -> MorphResult<Self> {
        let len = width as usize * height as usize;
        if mask.len() < len {
            return Err(MorphError::InvalidSel(format!(
                "mask too short: {} < {}x{}",
                mask.len(),
                width,
                height
            )));
        }
        let (ax, ay) = anchor.unwrap_or((width / 2, height / 2));
        if ax >= width || ay >= height {
            return Err(MorphError::InvalidSel(format!(
                "anchor ({}, {}) outside {}x{} mask",
                ax, ay, width, height
            )));
        }
        let w = width.max(1) as usize;
        let offsets = mask[..len]
            .iter()
            .enumerate()
            .filter(|&(_, &m)| m != 0)
            .map(|(idx, _)| {
                let col = (idx % w) as i32;
                let row = (idx / w) as i32;
                (col - ax as i32, row - ay as i32)
            });
        Self::new(offsets)
    }

    /// Rectangular `width` x `height` element anchored at its center.
    pub fn brick(width: u32, height: u32) -> MorphResult<Self> {
        if width == 0 || height == 0 {
            return Err(MorphError::InvalidSel(format!(
                "brick must be at least 1x1, got {}x{}",
                width, height
            )));
        }
        let (Ok(w), Ok(h)) = (i32::try_from(width), i32::try_from(height)) else {
            return Err(MorphError::InvalidSel(format!(
                "brick {}x{} too large",
                width, height
            )));
        };
        let (cx, cy) = (w / 2, h / 2);
        let offsets = (0..h).flat_map(move |y| (0..w).map(move |x| (x - cx, y - cy)));
        Self::new(offsets)
    }

    /// Horizontal line of `2 * radius + 1` pixels.
    pub fn horizontal(radius: u32) -> MorphResult<Self> {
        let r = checked_radius(radius)?;
        Self::new((-r..=r).map(|dx| (dx, 0)))
    }

    /// Vertical line of `2 * radius + 1` pixels.
    pub fn vertical(radius: u32) -> MorphResult<Self> {
        let r = checked_radius(radius)?;
        Self::new((-r..=r).map(|dy| (0, dy)))
    }

    /// `(2 * radius + 1)` square centered on the origin.
    pub fn square(radius: u32) -> MorphResult<Self> {
        let side = checked_radius(radius)? as u32 * 2 + 1;
        Self::brick(side, side)
    }

    /// Plus sign with arms of length `radius`, center included.
    pub fn cross(radius: u32) -> MorphResult<Self> {
        let r = checked_radius(radius)?;
        let arms = (-r..=r)
            .filter(|&d| d != 0)
            .flat_map(|d| [(d, 0), (0, d)]);
        Self::new(std::iter::once((0, 0)).chain(arms))
    }

    /// The origin alone.
    pub fn identity() -> Self {
        Self {
            dx: vec![0],
            dy: vec![0],
            bounds: SelBounds::default(),
        }
    }

    /// Number of offsets
    pub fn len(&self) -> usize {
        self.dx.len()
    }

    /// Always false; elements hold at least one offset.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Bounding box of the offsets
    pub fn bounds(&self) -> SelBounds {
        self.bounds
    }

    /// Horizontal offsets
    pub fn dx(&self) -> &[i32] {
        &self.dx
    }

    /// Vertical offsets
    pub fn dy(&self) -> &[i32] {
        &self.dy
    }

    /// Iterate over `(dx, dy)` offsets
    pub fn offsets(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.dx.iter().copied().zip(self.dy.iter().copied())
    }

    /// Offsets flattened for a row-major image of the given width:
    /// `dy * width + dx`.
    pub fn linear_offsets(&self, width: u32) -> Vec<i64> {
        self.offsets()
            .map(|(dx, dy)| dy as i64 * width as i64 + dx as i64)
            .collect()
    }
}
