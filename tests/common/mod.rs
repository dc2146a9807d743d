#![allow(dead_code)]

use std::io::Cursor;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Content area used by most tests: 100pt wide, 80pt tall. With the default
/// 10pt font (5pt per char, 11.5pt lines) a line holds 20 chars and a page
/// holds 6 lines.
pub fn test_context() -> pageflow::DrawContext {
    pageflow::DrawContext::new(100.0, 80.0)
}

/// Composer whose content area matches `test_context`.
pub fn test_composer() -> pageflow::Composer {
    let mut composer = pageflow::Composer::with_page_size(120.0, 100.0);
    composer.set_margins(pageflow::Margins::uniform(10.0));
    composer
}

/// `n` repetitions of "word": four words per 100pt line at the default font.
pub fn words(n: usize) -> String {
    vec!["word"; n].join(" ")
}

/// In-memory PNG of the given pixel size, for image-content fixtures.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbaImage::new(width, height);
    let mut buf = Cursor::new(Vec::new());
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut buf, image::ImageFormat::Png)
        .expect("encode test png");
    buf.into_inner()
}

pub fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-3,
        "expected {expected}, got {actual}"
    );
}
