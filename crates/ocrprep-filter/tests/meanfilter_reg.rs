//! Mean filter regression test
//!
//! Tests the incremental box filter against the naive reference over a
//! grid of image sizes and radii, border behavior, fixed points and the
//! returned global mean.

use ocrprep_core::{GrayImage, GrayImageMut};
use ocrprep_filter::{BoxFilter, BoxFilterKind, IncrementalBoxFilter, NaiveBoxFilter};
use ocrprep_test::{RegParams, generators};

fn filter(kind: BoxFilterKind, src: &[u8], w: u32, h: u32, r: u32) -> (Vec<u8>, u8) {
    let img = GrayImage::new(src, w as i32, h as i32).expect("src view");
    let mut out = vec![0u8; src.len()];
    let mut dst = GrayImageMut::new(&mut out, w as i32, h as i32).expect("dst view");
    let mean = kind.apply(&img, &mut dst, r).expect("filter");
    (out, mean)
}

#[test]
fn meanfilter_reg() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut rp = RegParams::new("meanfilter");

    // --- Test 1: Incremental == naive over sizes and radii, including r >= w, h ---
    let sizes = [(1u32, 1u32), (1, 9), (9, 1), (2, 3), (5, 5), (16, 7), (31, 12)];
    for (n, &(w, h)) in sizes.iter().enumerate() {
        let src = generators::random_image(w, h, 100 + n as u64);
        for r in [0u32, 1, 2, 3, 5, 8, 15, 40] {
            let (naive, naive_mean) = filter(BoxFilterKind::Naive, &src, w, h, r);
            let (fast, fast_mean) = filter(BoxFilterKind::Incremental, &src, w, h, r);
            rp.compare_samples(&naive, &fast);
            rp.compare_values(naive_mean as f64, fast_mean as f64, 0.0);
        }
    }

    // --- Test 2: Global mean is independent of radius ---
    let (w, h) = (24u32, 18u32);
    let src = generators::random_image(w, h, 7);
    let sum: u64 = src.iter().map(|&v| v as u64).sum();
    let expected = (sum / (w * h) as u64) as f64;
    for r in [0u32, 4, 50] {
        let (_, mean) = filter(BoxFilterKind::Incremental, &src, w, h, r);
        rp.compare_values(expected, mean as f64, 0.0);
    }

    // --- Test 3: Corner (0,0) averages an (r+1)x(r+1) window ---
    let r = 3u32;
    let (out, _) = filter(BoxFilterKind::Incremental, &src, w, h, r);
    let mut corner = 0u64;
    for y in 0..=r {
        for x in 0..=r {
            corner += src[(y * w + x) as usize] as u64;
        }
    }
    rp.compare_values((corner / 16) as f64, out[0] as f64, 0.0);
    rp.write_samples(&out, w, h).expect("write");

    // --- Test 4: Constant images are fixed points ---
    let flat = generators::constant(13, 11, 173);
    for kind in [BoxFilterKind::Naive, BoxFilterKind::Incremental] {
        let (out, mean) = filter(kind, &flat, 13, 11, 4);
        rp.compare_samples(&flat, &out);
        rp.compare_values(173.0, mean as f64, 0.0);
    }

    // --- Test 5: Gradient keeps its ramp in the interior ---
    let grad = generators::gradient(256, 5);
    let (out, _) = filter(BoxFilterKind::Incremental, &grad, 256, 5, 2);
    rp.compare_values(100.0, out[2 * 256 + 100] as f64, 0.0);
    rp.compare_values(1.0, out[0] as f64, 0.0);

    // --- Test 6: Short buffers fail at view construction ---
    let short = [0u8; 5];
    let err = GrayImage::new(&short, 3, 2).unwrap_err();
    rp.compare_values(
        1.0,
        if matches!(err, ocrprep_core::Error::BufferTooShort { .. }) { 1.0 } else { 0.0 },
        0.0,
    );

    // --- Test 7: Trait objects and unit strategies agree ---
    let src = generators::random_image(10, 10, 3);
    let img = GrayImage::new(&src, 10, 10).expect("view");
    let mut a = vec![0u8; 100];
    let mut b = vec![0u8; 100];
    let strategies: [&dyn BoxFilter; 2] = [&NaiveBoxFilter, &IncrementalBoxFilter];
    for (s, out) in strategies.iter().zip([&mut a, &mut b]) {
        let mut dst = GrayImageMut::new(out, 10, 10).expect("view");
        s.apply(&img, &mut dst, 2).expect("filter");
    }
    rp.compare_samples(&a, &b);

    assert!(rp.cleanup(), "meanfilter regression test failed");
}
