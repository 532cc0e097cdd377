//! Integration tests for the Skia backend
//!
//! Font-dependent tests look for a test font and are skipped when none is
//! installed.

use std::path::PathBuf;
use std::sync::Arc;

use moji_assets::Font;
use moji_core::{
    traits::{Canvas, TextMetrics},
    types::BitmapData,
    Color, MojiError, RenderParams,
};
use moji_render_skia::{SkiaCanvas, SkrifaMetrics};

/// Candidate locations for a Latin test font
fn test_font_paths() -> Vec<PathBuf> {
    let mut repo = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    repo.pop(); // backends
    repo.pop(); // root
    repo.push("test-fonts");
    repo.push("NotoSans-Regular.ttf");

    vec![
        repo,
        PathBuf::from("/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf"),
        PathBuf::from("/usr/share/fonts/truetype/DejaVuSans.ttf"),
    ]
}

fn load_font() -> Option<Arc<Font>> {
    test_font_paths()
        .into_iter()
        .find(|path| path.exists())
        .and_then(|path| Font::from_file(path).ok())
        .map(Arc::new)
}

fn small_params() -> RenderParams {
    RenderParams {
        canvas_width: 64,
        canvas_height: 32,
        font_size: 20.0,
        foreground: Color::white(),
        background: Color::black(),
    }
}

#[test]
fn test_canvas_is_filled_with_background() {
    let Some(font) = load_font() else {
        eprintln!("Skipping test: no test font found");
        return;
    };
    let params = RenderParams {
        background: Color::rgba(10, 20, 30, 255),
        ..small_params()
    };
    let canvas = SkiaCanvas::new(font, &params).unwrap();

    let bitmap = canvas.snapshot();
    assert_eq!((bitmap.width, bitmap.height), (64, 32));
    assert_eq!(bitmap.data.len(), bitmap.expected_len());
    assert_eq!(bitmap.pixel(0, 0), Some([10, 20, 30, 255]));
    assert_eq!(bitmap.pixel(63, 31), Some([10, 20, 30, 255]));
}

#[test]
fn test_zero_sized_canvas_is_rejected() {
    let Some(font) = load_font() else {
        eprintln!("Skipping test: no test font found");
        return;
    };
    let params = RenderParams {
        canvas_height: 0,
        ..small_params()
    };
    assert!(matches!(
        SkiaCanvas::new(font, &params),
        Err(MojiError::RenderingFailed(_))
    ));
}

#[test]
fn test_metrics_are_additive() {
    let Some(font) = load_font() else {
        eprintln!("Skipping test: no test font found");
        return;
    };
    let metrics = SkrifaMetrics::new(font, 50.0).unwrap();

    let m = metrics.measure_char('M');
    assert!(m > 0.0);
    let sum = metrics.measure_char('h') + metrics.measure_char('i') + m;
    assert!((metrics.measure("hiM") - sum).abs() < 1e-3);
    assert_eq!(metrics.measure(""), 0.0);
}

#[test]
fn test_unmapped_char_measures_zero() {
    let Some(font) = load_font() else {
        eprintln!("Skipping test: no test font found");
        return;
    };
    let metrics = SkrifaMetrics::new(font, 50.0).unwrap();
    assert!(metrics.glyph_id('\u{FFF5}').is_none());
    assert_eq!(metrics.measure_char('\u{FFF5}'), 0.0);
}

#[test]
fn test_draw_char_marks_pixels_near_anchor() {
    let Some(font) = load_font() else {
        eprintln!("Skipping test: no test font found");
        return;
    };
    let mut canvas = SkiaCanvas::new(font, &small_params()).unwrap();
    canvas.draw_char('M', 4.0, 16.0);

    let bitmap = canvas.snapshot();
    let lit = (0..bitmap.height)
        .flat_map(|y| (0..bitmap.width).map(move |x| (x, y)))
        .filter(|&(x, y)| bitmap.pixel(x, y).is_some_and(|px| px[0] > 128))
        .count();
    assert!(lit > 0, "glyph should light some pixels");

    // Nothing lands left of the anchor
    for y in 0..bitmap.height {
        for x in 0..3 {
            assert_eq!(bitmap.pixel(x, y), Some([0, 0, 0, 255]));
        }
    }
}

#[test]
fn test_draw_image_blends_and_clips() {
    let Some(font) = load_font() else {
        eprintln!("Skipping test: no test font found");
        return;
    };
    let mut canvas = SkiaCanvas::new(font, &small_params()).unwrap();
    let red = BitmapData {
        width: 4,
        height: 4,
        data: [255, 0, 0, 255].repeat(16),
    };
    let half = BitmapData {
        width: 1,
        height: 1,
        data: vec![0, 0, 255, 0],
    };

    canvas.draw_image(&red, 10, 10);
    canvas.draw_image(&red, 62, 30);
    canvas.draw_image(&half, 11, 11);

    let bitmap = canvas.snapshot();
    assert_eq!(bitmap.pixel(10, 10), Some([255, 0, 0, 255]));
    assert_eq!(bitmap.pixel(13, 13), Some([255, 0, 0, 255]));
    assert_eq!(bitmap.pixel(14, 14), Some([0, 0, 0, 255]));
    // Fully transparent pixel leaves the red underneath
    assert_eq!(bitmap.pixel(11, 11), Some([255, 0, 0, 255]));
    assert_eq!(bitmap.pixel(63, 31), Some([255, 0, 0, 255]));
}
