//! Word binarization and extent regression test
//!
//! Tests the binarization pipeline on synthetic text lines of both
//! polarities and the extent search on known ink layouts.

use ocrprep_core::{GrayImage, GrayImageMut, Rect, stats};
use ocrprep_filter::{BoxFilterKind, contrast_stretch};
use ocrprep_recog::{
    BinarizeOptions, BinarizeOutcome, Polarity, binarize_word, find_word_extent, locate_word,
};
use ocrprep_test::{RegParams, generators};

fn binarize(src: &[u8], w: u32, h: u32, options: &BinarizeOptions) -> (Vec<u8>, BinarizeOutcome) {
    let img = GrayImage::new(src, w as i32, h as i32).expect("view");
    let mut out = vec![0u8; src.len()];
    let mut dst = GrayImageMut::new(&mut out, w as i32, h as i32).expect("view");
    let outcome = binarize_word(&img, &mut dst, options).expect("binarize");
    (out, outcome)
}

#[test]
fn wordextent_reg() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut rp = RegParams::new("wordextent");

    let (w, h) = (80u32, 30u32);
    let options = BinarizeOptions::default();

    // --- Test 1: Dark text on light paper ---
    let (dark, _) = generators::text_line(w, h, 30, 220);
    let (bin, outcome) = binarize(&dark, w, h, &options);
    rp.compare_values(30.0, outcome.range.0 as f64, 0.0);
    rp.compare_values(220.0, outcome.range.1 as f64, 0.0);
    rp.compare_values(
        1.0,
        if outcome.polarity == Polarity::DarkOnLight { 1.0 } else { 0.0 },
        0.0,
    );
    let binary = bin.iter().all(|&v| v == 0 || v == 255);
    rp.compare_values(1.0, if binary { 1.0 } else { 0.0 }, 0.0);
    rp.write_samples(&bin, w, h).expect("write");

    // --- Test 2: Bias is a truncated fraction of the stretched deviation ---
    let mut stretched = vec![0u8; dark.len()];
    {
        let img = GrayImage::new(&dark, w as i32, h as i32).expect("view");
        let mut dst = GrayImageMut::new(&mut stretched, w as i32, h as i32).expect("view");
        contrast_stretch(&img, &mut dst, 30, 220).expect("stretch");
    }
    let simg = GrayImage::new(&stretched, w as i32, h as i32).expect("view");
    let var = stats::variance_in_rect(&simg, None).expect("variance");
    rp.compare_values((0.33f32 * var.sqrt()).trunc() as f64, outcome.bias as f64, 0.0);
    rp.compare_values(stats::mean(&simg) as f64, outcome.mean as f64, 0.0);

    // --- Test 3: Light text flips the polarity ---
    let (light, _) = generators::text_line(w, h, 220, 30);
    let (_, light_outcome) = binarize(&light, w, h, &options);
    rp.compare_values(
        1.0,
        if light_outcome.polarity == Polarity::LightOnDark { 1.0 } else { 0.0 },
        0.0,
    );

    // --- Test 4: Both box filter strategies binarize identically ---
    let naive = options.with_filter(BoxFilterKind::Naive);
    let (bin_naive, _) = binarize(&dark, w, h, &naive);
    rp.compare_samples(&bin, &bin_naive);

    // --- Test 5: Extent of a connected ink block from a corner seed ---
    let (ink_line, [l, t, r, b]) = generators::text_line(w, h, 0, 255);
    let img = GrayImage::new(&ink_line, w as i32, h as i32).expect("view");
    let seed = Rect::new(l as i32, t as i32, 1, 1).expect("rect");
    let ext = find_word_extent(&img, &seed, 0).expect("extent");
    rp.compare_values(l as f64, ext.x as f64, 0.0);
    rp.compare_values(t as f64, ext.y as f64, 0.0);
    rp.compare_values(r as f64, ext.right() as f64, 0.0);
    rp.compare_values(b as f64, ext.bottom() as f64, 0.0);

    // --- Test 6: Full pipeline keeps the seed inside the extent ---
    let mut out = vec![0u8; dark.len()];
    let src = GrayImage::new(&dark, w as i32, h as i32).expect("view");
    let mut dst = GrayImageMut::new(&mut out, w as i32, h as i32).expect("view");
    let center = Rect::new((l + r) as i32 / 2, (t + b) as i32 / 2, 1, 1).expect("rect");
    let (found, _) = locate_word(&src, &mut dst, &center, &options).expect("locate");
    rp.compare_values(1.0, if found.contains_rect(&center) { 1.0 } else { 0.0 }, 0.0);

    assert!(rp.cleanup(), "wordextent regression test failed");
}
