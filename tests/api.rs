use image::{Rgba, RgbaImage};

use capimg::{
    CapInsets, Density, GenParams, detect_path, generate_to_buffer, generate_to_path,
};

#[test]
fn detect_then_generate_solid_png() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("btn.png");
    RgbaImage::from_pixel(20, 20, Rgba([50, 100, 150, 255]))
        .save(&input)
        .unwrap();

    let detection = detect_path(&input).unwrap();
    assert_eq!((detection.width, detection.height), (20, 20));
    assert_eq!(detection.insets, CapInsets::new(0, 0, 0, 0));
    assert_eq!(detection.max_row_interval.start, 0);
    assert_eq!(detection.max_row_interval.end, 20);
    assert_eq!(detection.max_col_interval.end, 20);

    let out_dir = dir.path().join("out");
    std::fs::create_dir_all(&out_dir).unwrap();
    let params = GenParams {
        insets: None,
        target_dir: out_dir.clone(),
    };
    let asset = generate_to_path(&input, &params).unwrap();
    assert_eq!(asset.insets, CapInsets::new(0, 0, 0, 0));
    assert_eq!(asset.output, out_dir.join("btn-0-0-0-0.png"));

    let written = image::open(&asset.output).unwrap().to_rgba8();
    assert_eq!(written.dimensions(), (1, 1));
    assert_eq!(written.get_pixel(0, 0), &Rgba([50, 100, 150, 255]));
}

#[test]
fn retina_round_trip_keeps_geometry() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("panel@2x.png");
    // Physical insets (4, 4, 4, 4) around a repeated middle block.
    let tag = |v: u32| if (4..=15).contains(&v) { 4 } else { v as u8 * 10 };
    RgbaImage::from_fn(20, 20, |x, y| Rgba([tag(y), tag(x), 0, 255]))
        .save(&input)
        .unwrap();

    let detection = detect_path(&input).unwrap();
    // Reported in logical units: ceil(4 / 2) per side.
    assert_eq!(detection.insets, CapInsets::new(2, 2, 2, 2));

    let params = GenParams {
        insets: Some(detection.insets),
        target_dir: dir.path().to_path_buf(),
    };
    let asset = generate_to_path(&input, &params).unwrap();
    assert_eq!(asset.density, Density::Retina);
    assert_eq!(asset.output, dir.path().join("panel-2-2-2-2@2x.png"));

    // Scaled insets (4, 4, 4, 4) plus a 2px stretch band per axis.
    let written = image::open(&asset.output).unwrap().to_rgba8();
    assert_eq!(written.dimensions(), (10, 10));

    // Corner blocks are preserved exactly.
    let source = image::open(&input).unwrap().to_rgba8();
    for y in 0..4 {
        for x in 0..4 {
            assert_eq!(written.get_pixel(x, y), source.get_pixel(x, y));
            assert_eq!(
                written.get_pixel(10 - 4 + x, 10 - 4 + y),
                source.get_pixel(20 - 4 + x, 20 - 4 + y)
            );
        }
    }
}

#[test]
fn explicit_insets_skip_detection() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("stripe.png");
    // No repeated lines at all; detection alone would degenerate.
    RgbaImage::from_fn(8, 8, |x, y| Rgba([x as u8 * 16, y as u8 * 16, 0, 255]))
        .save(&input)
        .unwrap();

    let params = GenParams {
        insets: Some(CapInsets::new(2, 2, 2, 2)),
        target_dir: dir.path().to_path_buf(),
    };
    let asset = generate_to_path(&input, &params).unwrap();
    assert_eq!(asset.output, dir.path().join("stripe-2-2-2-2.png"));
    let written = image::open(&asset.output).unwrap().to_rgba8();
    assert_eq!(written.dimensions(), (5, 5));
}

#[test]
fn oversized_insets_are_rejected() {
    let source = RgbaImage::from_pixel(6, 6, Rgba([1, 1, 1, 255]));
    let err = generate_to_buffer(&source, CapInsets::new(3, 3, 3, 3), Density::Standard)
        .unwrap_err();
    assert!(matches!(err, capimg::Error::InsetsOutOfBounds { .. }));
}

#[test]
fn non_image_files_fail_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("readme.txt");
    std::fs::write(&input, "not pixels").unwrap();

    assert!(detect_path(&input).is_err());
    assert!(generate_to_path(&input, &GenParams::default()).is_err());
}
