//! Integration tests exercising the public API end to end.

use palette_cut::{contrast_ratio, extract_palette, min_alpha, Color32, Error};

fn pixel(r: u8, g: u8, b: u8) -> Color32 {
    Color32::pack(255, r, g, b)
}

#[test]
fn solid_color_image_yields_a_single_swatch() {
    let pixels = vec![pixel(200, 30, 30); 500];
    let palette = extract_palette(&pixels, 5).unwrap();
    assert_eq!(palette.len(), 1);
    assert_eq!(palette[0].population(), 500);
}

#[test]
fn two_color_image_stays_under_the_cap() {
    let mut pixels = vec![pixel(10, 10, 200); 300];
    pixels.extend(vec![pixel(200, 200, 10); 700]);

    let palette = extract_palette(&pixels, 8).unwrap();
    assert_eq!(palette.len(), 2);

    let total: u32 = palette.iter().map(|s| s.population()).sum();
    assert_eq!(total, 1000);
}

#[test]
fn black_and_white_image_is_entirely_filtered() {
    let mut pixels = vec![pixel(0, 0, 0); 400];
    pixels.extend(vec![pixel(255, 255, 255); 400]);

    let palette = extract_palette(&pixels, 8).unwrap();
    assert!(palette.is_empty());
}

#[test]
fn a_rich_image_respects_the_requested_cap() {
    let mut pixels = Vec::new();
    for r in (0..=255u16).step_by(17) {
        for g in (0..=255u16).step_by(51) {
            for b in (0..=255u16).step_by(85) {
                pixels.push(pixel(r as u8, g as u8, b as u8));
            }
        }
    }

    let palette = extract_palette(&pixels, 6).unwrap();
    assert!(palette.len() <= 6);
    assert!(!palette.is_empty());
}

#[test]
fn zero_max_colors_is_rejected() {
    let pixels = vec![pixel(1, 2, 3)];
    assert_eq!(extract_palette(&pixels, 0), Err(Error::InvalidMaxColors(0)));
}

#[test]
fn text_overlay_on_mid_gray_swatch_meets_both_targets() {
    let pixels = vec![pixel(128, 128, 128); 200];
    let palette = extract_palette(&pixels, 4).unwrap();
    assert_eq!(palette.len(), 1);

    let swatch = &palette[0];
    let title = swatch.title_text_color().expect("mid-gray should resolve a title color");
    let body = swatch.body_text_color().expect("mid-gray should resolve a body color");

    let bg = swatch.color32();
    let white = Color32::pack(255, 255, 255, 255);
    let black = Color32::pack(255, 0, 0, 0);

    let fg = if title.gray == 1 { white } else { black };
    let ratio = contrast_ratio(fg.set_alpha_component((title.alpha * 255.0).round() as u8), bg);
    assert!(ratio >= 3.0 - 0.05);

    let fg = if body.gray == 1 { white } else { black };
    let ratio = contrast_ratio(fg.set_alpha_component((body.alpha * 255.0).round() as u8), bg);
    assert!(ratio >= 4.5 - 0.05);
}

#[test]
fn identical_foreground_and_background_never_resolve_a_text_color() {
    // A mid-gray swatch overlaid with itself can never reach 3:1, no matter
    // the overlay alpha, so min_alpha must report no solution.
    let gray = Color32::pack(255, 128, 128, 128);
    assert_eq!(min_alpha(gray, gray, 3.0), None);
}

#[test]
fn empty_pixel_buffer_yields_an_empty_palette_not_an_error() {
    let palette = extract_palette(&[], 10).unwrap();
    assert!(palette.is_empty());
}
