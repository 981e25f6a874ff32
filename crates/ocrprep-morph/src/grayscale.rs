//! Grayscale morphological operations
//!
//! Implements erosion, dilation, opening, and closing for 8-bit grayscale
//! views with an arbitrary [`StructuringElement`].
//!
//! - **Dilation**: maximum over the neighborhood (seed 0)
//! - **Erosion**: minimum over the neighborhood (seed 255)
//! - **Opening**: erosion followed by dilation (removes small bright features)
//! - **Closing**: dilation followed by erosion (fills small dark features)

use crate::MorphResult;
use crate::sel::StructuringElement;
use crate::transform::{Max, Min, Reducer, structural_transform};
use ocrprep_core::{GrayImage, GrayImageMut, check_same_size, try_alloc_zeroed};

/// Erode a grayscale image
///
/// Each output sample is the minimum of the source samples under `sel`,
/// which shrinks bright regions and grows dark ones.
///
/// # Example
///
/// ```
/// use ocrprep_core::{GrayImage, GrayImageMut};
/// use ocrprep_morph::{StructuringElement, erode_gray};
///
/// let src = [5u8, 9, 1, 8];
/// let mut out = [0u8; 4];
/// let img = GrayImage::new(&src, 2, 2).unwrap();
/// let mut dst = GrayImageMut::new(&mut out, 2, 2).unwrap();
/// erode_gray(&img, &mut dst, &StructuringElement::cross(1).unwrap()).unwrap();
/// assert_eq!(out[0], 1);
/// ```
pub fn erode_gray(
    src: &GrayImage<'_>,
    dst: &mut GrayImageMut<'_>,
    sel: &StructuringElement,
) -> MorphResult<()> {
    structural_transform::<Min>(src, dst, sel)
}

/// Dilate a grayscale image
///
/// Each output sample is the maximum of the source samples under `sel`,
/// which grows bright regions and shrinks dark ones.
pub fn dilate_gray(
    src: &GrayImage<'_>,
    dst: &mut GrayImageMut<'_>,
    sel: &StructuringElement,
) -> MorphResult<()> {
    structural_transform::<Max>(src, dst, sel)
}

/// Apply reducer `A` then reducer `B` through one scratch image.
fn sequence<A: Reducer, B: Reducer>(
    src: &GrayImage<'_>,
    dst: &mut GrayImageMut<'_>,
    sel: &StructuringElement,
) -> MorphResult<()> {
    check_same_size(src.dimensions(), dst.dimensions())?;
    let (w, h) = src.dimensions();
    let mut scratch: Vec<u8> = try_alloc_zeroed(src.len(), "morphology scratch")?;
    let mut tmp = GrayImageMut::from_parts(&mut scratch, w, h, "scratch")?;
    structural_transform::<A>(src, &mut tmp, sel)?;
    structural_transform::<B>(&tmp.as_image(), dst, sel)
}

/// Open a grayscale image (erosion followed by dilation)
pub fn open_gray(
    src: &GrayImage<'_>,
    dst: &mut GrayImageMut<'_>,
    sel: &StructuringElement,
) -> MorphResult<()> {
    sequence::<Min, Max>(src, dst, sel)
}

/// Close a grayscale image (dilation followed by erosion)
pub fn close_gray(
    src: &GrayImage<'_>,
    dst: &mut GrayImageMut<'_>,
    sel: &StructuringElement,
) -> MorphResult<()> {
    sequence::<Max, Min>(src, dst, sel)
}
