//! Borrowed 8-bit grayscale image views
//!
//! The library never owns pixel memory. A [`GrayImage`] borrows a flat
//! sample slice read-only and a [`GrayImageMut`] borrows one mutably; both
//! attach `width` and `height` to it.
//!
//! # Addressing
//!
//! Samples are row-major: the sample at row `y`, column `x` lives at
//! offset `y * width + x`. The borrowed slice may be longer than
//! `width * height`; trailing samples are ignored and never written.
//!
//! # Validation
//!
//! Constructing a view is where buffer preconditions are checked:
//! negative dimensions are rejected with [`Error::InvalidDimension`] and a
//! slice shorter than `width * height` with [`Error::BufferTooShort`].
//! Operations taking views therefore only have to compare dimensions.

use crate::error::{Error, Result};

/// Validate signed dimensions and convert them to the unsigned form.
fn checked_dims(width: i32, height: i32) -> Result<(u32, u32)> {
    if width < 0 || height < 0 {
        return Err(Error::InvalidDimension {
            width: width as i64,
            height: height as i64,
        });
    }
    Ok((width as u32, height as u32))
}

/// Number of samples covered by a `width` x `height` image.
pub fn required_len(width: u32, height: u32) -> Result<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .ok_or(Error::InvalidDimension {
            width: width as i64,
            height: height as i64,
        })
}

fn check_len(len: usize, width: u32, height: u32, name: &'static str) -> Result<usize> {
    let required = required_len(width, height)?;
    if len < required {
        return Err(Error::BufferTooShort {
            name,
            len,
            required,
        });
    }
    Ok(required)
}

/// Fail with [`Error::DimensionMismatch`] unless both sizes agree.
pub fn check_same_size(expected: (u32, u32), actual: (u32, u32)) -> Result<()> {
    if expected != actual {
        return Err(Error::DimensionMismatch { expected, actual });
    }
    Ok(())
}

/// Read-only view of an 8-bit grayscale image.
#[derive(Debug, Clone, Copy)]
pub struct GrayImage<'a> {
    data: &'a [u8],
    width: u32,
    height: u32,
}

impl<'a> GrayImage<'a> {
    /// Wrap `data` as a `width` x `height` image.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDimension`] for negative dimensions,
    /// [`Error::BufferTooShort`] if `data.len() < width * height`.
    pub fn new(data: &'a [u8], width: i32, height: i32) -> Result<Self> {
        Self::new_named(data, width, height, "input")
    }

    /// Like [`GrayImage::new`], naming the buffer in error messages
    /// (e.g. `"threshold"`).
    pub fn new_named(data: &'a [u8], width: i32, height: i32, name: &'static str) -> Result<Self> {
        let (width, height) = checked_dims(width, height)?;
        Self::from_parts(data, width, height, name)
    }

    /// Wrap `data` using already unsigned dimensions.
    pub fn from_parts(data: &'a [u8], width: u32, height: u32, name: &'static str) -> Result<Self> {
        let len = check_len(data.len(), width, height, name)?;
        Ok(Self {
            data: &data[..len],
            width,
            height,
        })
    }

    /// Image width in samples
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in rows
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of samples, `width * height`.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when the image has no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The `width * height` samples in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &'a [u8] {
        self.data
    }

    /// Samples of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &'a [u8] {
        let w = self.width as usize;
        let start = y as usize * w;
        &self.data[start..start + w]
    }

    /// Sample at (x, y), or `None` outside the image.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Sample at (x, y) without the coordinate check.
    ///
    /// # Panics
    ///
    /// Panics if the linear index falls outside the image.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u8 {
        self.data[y as usize * self.width as usize + x as usize]
    }
}

/// Mutable view of an 8-bit grayscale image.
#[derive(Debug)]
pub struct GrayImageMut<'a> {
    data: &'a mut [u8],
    width: u32,
    height: u32,
}

impl<'a> GrayImageMut<'a> {
    /// Wrap `data` as a writable `width` x `height` image.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDimension`] for negative dimensions,
    /// [`Error::BufferTooShort`] if `data.len() < width * height`.
    pub fn new(data: &'a mut [u8], width: i32, height: i32) -> Result<Self> {
        Self::new_named(data, width, height, "output")
    }

    /// Like [`GrayImageMut::new`], naming the buffer in error messages.
    pub fn new_named(
        data: &'a mut [u8],
        width: i32,
        height: i32,
        name: &'static str,
    ) -> Result<Self> {
        let (width, height) = checked_dims(width, height)?;
        Self::from_parts(data, width, height, name)
    }

    /// Wrap `data` using already unsigned dimensions.
    pub fn from_parts(
        data: &'a mut [u8],
        width: u32,
        height: u32,
        name: &'static str,
    ) -> Result<Self> {
        let len = check_len(data.len(), width, height, name)?;
        Ok(Self {
            data: &mut data[..len],
            width,
            height,
        })
    }

    /// Image width in samples
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in rows
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of samples, `width * height`.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when the image has no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Reborrow as a read-only view.
    #[inline]
    pub fn as_image(&self) -> GrayImage<'_> {
        GrayImage {
            data: &*self.data,
            width: self.width,
            height: self.height,
        }
    }

    /// The `width * height` samples in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &*self.data
    }

    /// Mutable access to the `width * height` samples.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut *self.data
    }

    /// Mutable samples of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        let w = self.width as usize;
        let start = y as usize * w;
        &mut self.data[start..start + w]
    }

    /// Sample at (x, y), or `None` outside the image.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u8> {
        self.as_image().get_pixel(x, y)
    }

    /// Set the sample at (x, y).
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] if (x, y) lies outside the image.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: u8) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::InvalidParameter(format!(
                "pixel ({x}, {y}) outside {}x{} image",
                self.width, self.height
            )));
        }
        self.set_pixel_unchecked(x, y, val);
        Ok(())
    }

    /// Set the sample at (x, y) without the coordinate check.
    ///
    /// # Panics
    ///
    /// Panics if the linear index falls outside the image.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: u8) {
        let idx = y as usize * self.width as usize + x as usize;
        self.data[idx] = val;
    }

    /// Set every sample to `val`.
    pub fn fill(&mut self, val: u8) {
        self.data.fill(val);
    }

    /// Copy all samples from `src`.
    ///
    /// # Errors
    ///
    /// [`Error::DimensionMismatch`] if the sizes differ.
    pub fn copy_from(&mut self, src: &GrayImage<'_>) -> Result<()> {
        check_same_size(self.dimensions(), src.dimensions())?;
        self.data.copy_from_slice(src.as_slice());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_negative_dimensions() {
        let data = [0u8; 4];
        assert_eq!(
            GrayImage::new(&data, -1, 2).unwrap_err(),
            Error::InvalidDimension {
                width: -1,
                height: 2
            }
        );
        let mut out = [0u8; 4];
        assert!(matches!(
            GrayImageMut::new(&mut out, 2, -3),
            Err(Error::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_new_rejects_short_buffer() {
        let data = [0u8; 5];
        let err = GrayImage::new(&data, 3, 2).unwrap_err();
        assert_eq!(
            err,
            Error::BufferTooShort {
                name: "input",
                len: 5,
                required: 6
            }
        );
        let mut out = [0u8; 5];
        let err = GrayImageMut::new_named(&mut out, 3, 2, "threshold").unwrap_err();
        assert!(err.to_string().starts_with("threshold array too short"));
    }

    #[test]
    fn test_longer_buffer_is_truncated_to_image() {
        let data = [1u8, 2, 3, 4, 5, 6, 7];
        let img = GrayImage::new(&data, 3, 2).unwrap();
        assert_eq!(img.len(), 6);
        assert_eq!(img.as_slice(), &[1, 2, 3, 4, 5, 6]);
        assert_eq!(img.row(1), &[4, 5, 6]);
    }

    #[test]
    fn test_row_major_addressing() {
        let data: Vec<u8> = (0..12).collect();
        let img = GrayImage::new(&data, 4, 3).unwrap();
        assert_eq!(img.get_pixel(0, 0), Some(0));
        assert_eq!(img.get_pixel(3, 0), Some(3));
        assert_eq!(img.get_pixel(1, 2), Some(9));
        assert_eq!(img.get_pixel(4, 0), None);
        assert_eq!(img.get_pixel(0, 3), None);
    }

    #[test]
    fn test_zero_sized_images() {
        let img = GrayImage::new(&[], 0, 5).unwrap();
        assert!(img.is_empty());
        assert_eq!(img.dimensions(), (0, 5));
        let img = GrayImage::new(&[], 7, 0).unwrap();
        assert!(img.is_empty());
    }

    #[test]
    fn test_mutable_view_access() {
        let mut data = vec![0u8; 6];
        {
            let mut img = GrayImageMut::new(&mut data, 3, 2).unwrap();
            img.set_pixel(2, 1, 9).unwrap();
            assert!(img.set_pixel(3, 0, 1).is_err());
            img.row_mut(0).copy_from_slice(&[1, 2, 3]);
            assert_eq!(img.get_pixel(2, 1), Some(9));
        }
        assert_eq!(data, vec![1, 2, 3, 0, 0, 9]);
    }

    #[test]
    fn test_copy_from_checks_size() {
        let src_data = [7u8; 4];
        let src = GrayImage::new(&src_data, 2, 2).unwrap();
        let mut out = [0u8; 4];
        let mut dst = GrayImageMut::new(&mut out, 4, 1).unwrap();
        assert!(matches!(
            dst.copy_from(&src),
            Err(Error::DimensionMismatch { .. })
        ));
        assert_eq!(out, [0; 4]);

        let mut out = [0u8; 4];
        let mut dst = GrayImageMut::new(&mut out, 2, 2).unwrap();
        dst.copy_from(&src).unwrap();
        assert_eq!(out, [7; 4]);
    }
}
