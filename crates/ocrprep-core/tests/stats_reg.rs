//! Region statistics regression test
//!
//! Tests the global mean, per-region extrema, mean, variance and
//! histogram on synthetic images, cross-checked against direct sums.

use ocrprep_core::stats;
use ocrprep_core::{Error, GrayImage, Rect};
use ocrprep_test::{RegParams, generators};

#[test]
fn stats_reg() {
    let mut rp = RegParams::new("stats");

    // --- Test 1: Global mean matches a truncating direct sum ---
    let (w, h) = (37u32, 23u32);
    let data = generators::random_image(w, h, 11);
    let img = GrayImage::new(&data, w as i32, h as i32).expect("view");
    let sum: u64 = data.iter().map(|&v| v as u64).sum();
    let expected = sum / (w as u64 * h as u64);
    rp.compare_values(expected as f64, stats::mean(&img) as f64, 0.0);

    // --- Test 2: Whole-image region equals None ---
    let full = Rect::full(w, h);
    rp.compare_values(
        stats::mean_in_rect(&img, None).expect("mean") as f64,
        stats::mean_in_rect(&img, Some(&full)).expect("mean") as f64,
        0.0,
    );

    // --- Test 3: Sub-region extrema on a gradient ---
    let grad = generators::gradient(256, 4);
    let gimg = GrayImage::new(&grad, 256, 4).expect("view");
    let r = Rect::new(10, 1, 20, 2).expect("rect");
    rp.compare_values(10.0, stats::min_in_rect(&gimg, Some(&r)).expect("min") as f64, 0.0);
    rp.compare_values(29.0, stats::max_in_rect(&gimg, Some(&r)).expect("max") as f64, 0.0);
    rp.compare_values(19.5, stats::mean_in_rect(&gimg, Some(&r)).expect("mean") as f64, 1e-4);

    // --- Test 4: Variance of 0..20 is (n^2 - 1) / 12 ---
    let var = stats::variance_in_rect(&gimg, Some(&r)).expect("variance");
    rp.compare_values((400.0 - 1.0) / 12.0, var as f64, 1e-3);

    // --- Test 5: Histogram counts every sample once ---
    let hist = stats::histogram_in_rect(&img, None).expect("histogram");
    let total: u32 = hist.iter().sum();
    rp.compare_values((w * h) as f64, total as f64, 0.0);
    let hist = stats::histogram_in_rect(&gimg, Some(&r)).expect("histogram");
    rp.compare_values(2.0, hist[15] as f64, 0.0);
    rp.compare_values(0.0, hist[30] as f64, 0.0);

    // --- Test 6: Regions flush with the edge are accepted, beyond are not ---
    let edge = Rect::new(236, 0, 20, 4).expect("rect");
    rp.compare_values(255.0, stats::max_in_rect(&gimg, Some(&edge)).expect("max") as f64, 0.0);
    let beyond = Rect::new(237, 0, 20, 4).expect("rect");
    let err = stats::max_in_rect(&gimg, Some(&beyond)).unwrap_err();
    rp.compare_values(
        1.0,
        if matches!(err, Error::RoiOutOfBounds { .. }) { 1.0 } else { 0.0 },
        0.0,
    );

    assert!(rp.cleanup(), "stats regression test failed");
}
