//! End-to-end tests: real decode, resample, PNG encode and manifest on disk.

use icongen::config::IconConfig;
use icongen::imaging::{QualityTier, SourceError};
use icongen::manifest::Manifest;
use icongen::naming::Layout;
use icongen::process::{ProcessError, ProcessEvent, process};
use icongen::sizes::APP_ICON_SIZES;
use image::{GenericImageView, Rgb, RgbImage, Rgba, Rgba32FImage, RgbaImage};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn opaque_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x ^ y) % 256) as u8])
    })
    .save(&path)
    .unwrap();
    path
}

fn config(quality: QualityTier, layout: Layout) -> IconConfig {
    IconConfig {
        quality,
        layout,
        ..IconConfig::default()
    }
}

/// Every regular file under `dir`, relative and `/`-separated.
fn files_under(dir: &Path) -> BTreeSet<String> {
    fn walk(root: &Path, dir: &Path, out: &mut BTreeSet<String>) {
        for entry in std::fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                walk(root, &path, out);
            } else {
                let rel = path.strip_prefix(root).unwrap();
                out.insert(rel.to_string_lossy().replace('\\', "/"));
            }
        }
    }
    let mut out = BTreeSet::new();
    walk(dir, dir, &mut out);
    out
}

#[test]
fn full_run_on_1024_source_at_high_quality() {
    let tmp = TempDir::new().unwrap();
    let input = opaque_png(tmp.path(), "logo.png", 1024, 1024);
    let out = tmp.path().join("AppIcons");

    let result = process(&input, &out, &config(QualityTier::High, Layout::Catalog), None).unwrap();

    let catalog = out.join("ios/AppIcon.appiconset");
    assert_eq!(result.catalog_dir, catalog);
    assert_eq!(result.icons.len(), APP_ICON_SIZES.len());
    assert!(result.icons.len() >= 13);

    assert_eq!(
        image::image_dimensions(catalog.join("appstore_1024x1024.png")).unwrap(),
        (1024, 1024)
    );
    assert_eq!(
        image::image_dimensions(catalog.join("iphone_60x60@3x.png")).unwrap(),
        (180, 180)
    );

    let manifest: Manifest =
        serde_json::from_str(&std::fs::read_to_string(catalog.join("Contents.json")).unwrap())
            .unwrap();
    assert_eq!(manifest.images.len(), APP_ICON_SIZES.len());
    let phone = manifest
        .images
        .iter()
        .find(|e| e.filename == "iphone_60x60@3x.png")
        .unwrap();
    assert_eq!(phone.size, "60x60");
    assert_eq!(phone.scale, "3x");
    assert_eq!(phone.idiom.as_str(), "iphone");
    let store = manifest
        .images
        .iter()
        .find(|e| e.filename == "appstore_1024x1024.png")
        .unwrap();
    assert_eq!(store.idiom.as_str(), "ios-marketing");
    assert_eq!(store.size, "1024x1024");
    assert_eq!(store.scale, "1x");
}

#[test]
fn every_output_has_its_spec_dimensions() {
    let tmp = TempDir::new().unwrap();
    let input = opaque_png(tmp.path(), "logo.png", 512, 512);
    let out = tmp.path().join("out");

    let result = process(&input, &out, &config(QualityTier::Low, Layout::Idiom), None).unwrap();

    for (spec, path) in APP_ICON_SIZES.iter().zip(&result.icons) {
        let px = spec.pixels();
        assert_eq!(image::image_dimensions(path).unwrap(), (px, px), "{}", path.display());
    }
}

#[test]
fn manifest_and_directory_agree_exactly() {
    let tmp = TempDir::new().unwrap();
    let input = opaque_png(tmp.path(), "logo.png", 600, 600);
    let out = tmp.path().join("out");

    for layout in [Layout::Catalog, Layout::Idiom] {
        let result = process(
            &input,
            &out.join(format!("{layout:?}")),
            &config(QualityTier::Medium, layout),
            None,
        )
        .unwrap();

        let mut on_disk = files_under(&result.catalog_dir);
        assert!(on_disk.remove("Contents.json"));
        let listed: BTreeSet<String> = result
            .manifest
            .unwrap()
            .images
            .into_iter()
            .map(|e| e.filename)
            .collect();
        assert_eq!(listed.len(), APP_ICON_SIZES.len(), "duplicate names in {layout:?}");
        assert_eq!(listed, on_disk, "{layout:?}");
    }
}

#[test]
fn two_runs_are_byte_identical() {
    let tmp = TempDir::new().unwrap();
    let input = opaque_png(tmp.path(), "logo.png", 640, 640);
    let cfg = config(QualityTier::Medium, Layout::Catalog);

    let first = process(&input, &tmp.path().join("a"), &cfg, None).unwrap();
    let second = process(&input, &tmp.path().join("b"), &cfg, None).unwrap();

    for name in files_under(&first.catalog_dir) {
        let a = std::fs::read(first.catalog_dir.join(&name)).unwrap();
        let b = std::fs::read(second.catalog_dir.join(&name)).unwrap();
        assert!(a == b, "{name} differs between runs");
    }
}

#[test]
fn rerun_into_same_directory_overwrites_in_place() {
    let tmp = TempDir::new().unwrap();
    let input = opaque_png(tmp.path(), "logo.png", 512, 512);
    let out = tmp.path().join("out");
    let cfg = config(QualityTier::Low, Layout::Catalog);

    let first = process(&input, &out, &cfg, None).unwrap();
    let before = files_under(&first.catalog_dir);
    let second = process(&input, &out, &cfg, None).unwrap();

    assert_eq!(files_under(&second.catalog_dir), before);
}

#[test]
fn non_square_source_is_center_cropped() {
    let tmp = TempDir::new().unwrap();
    // Left and right 100px columns are red; the centered 600x600 is blue.
    let input = tmp.path().join("wide.png");
    RgbaImage::from_fn(800, 600, |x, _| {
        if (100..700).contains(&x) {
            Rgba([0, 0, 255, 255])
        } else {
            Rgba([255, 0, 0, 255])
        }
    })
    .save(&input)
    .unwrap();
    let (tx, rx) = std::sync::mpsc::channel();

    let result = process(
        &input,
        &tmp.path().join("out"),
        &config(QualityTier::Low, Layout::Catalog),
        Some(tx),
    )
    .unwrap();

    assert_eq!(result.square_side, 600);
    let events: Vec<ProcessEvent> = rx.iter().collect();
    let crop = events.iter().find_map(|e| match e {
        ProcessEvent::SourceCropped { rect, .. } => Some(*rect),
        _ => None,
    });
    let crop = crop.expect("crop event");
    assert_eq!((crop.x, crop.y, crop.side), (100, 0, 600));

    // Nearest-neighbour downscale of the crop sees only the blue region.
    let icon = image::open(result.catalog_dir.join("ipad_76x76@2x.png")).unwrap();
    assert_eq!(icon.dimensions(), (152, 152));
    for (x, y) in [(0, 0), (151, 0), (0, 151), (151, 151), (76, 76)] {
        assert_eq!(icon.get_pixel(x, y), Rgba([0, 0, 255, 255]), "({x}, {y})");
    }
}

#[test]
fn alpha_survives_to_output() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("alpha.png");
    RgbaImage::from_pixel(512, 512, Rgba([10, 20, 30, 77]))
        .save(&input)
        .unwrap();

    let result = process(
        &input,
        &tmp.path().join("out"),
        &config(QualityTier::Low, Layout::Catalog),
        None,
    )
    .unwrap();

    let icon = image::open(result.catalog_dir.join("iphone_20x20@2x.png")).unwrap();
    assert!(icon.color().has_alpha());
    assert_eq!(icon.get_pixel(5, 5)[3], 77);
}

#[test]
fn float_tiff_source_produces_full_set_with_alpha() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("render.tiff");
    Rgba32FImage::from_pixel(512, 512, Rgba([0.1, 0.3, 0.9, 0.5]))
        .save(&input)
        .unwrap();

    let result = process(
        &input,
        &tmp.path().join("out"),
        &config(QualityTier::Medium, Layout::Catalog),
        None,
    )
    .unwrap();

    assert_eq!(result.icons.len(), APP_ICON_SIZES.len());
    let icon = image::open(result.catalog_dir.join("appstore_1024x1024.png")).unwrap();
    assert_eq!(icon.dimensions(), (1024, 1024));
    assert!(icon.color().has_alpha());
}

#[test]
fn source_at_minimum_succeeds_one_below_fails() {
    let tmp = TempDir::new().unwrap();
    let cfg = config(QualityTier::Low, Layout::Catalog);

    let ok = opaque_png(tmp.path(), "ok.png", 512, 700);
    assert!(process(&ok, &tmp.path().join("ok"), &cfg, None).is_ok());

    let small = opaque_png(tmp.path(), "small.png", 700, 511);
    let err = process(&small, &tmp.path().join("small"), &cfg, None).unwrap_err();
    assert!(matches!(
        err,
        ProcessError::Source(SourceError::ImageTooSmall {
            width: 700,
            height: 511,
            min: 512,
            ..
        })
    ));
    assert!(!tmp.path().join("small").exists());
}

#[test]
fn empty_file_is_unreadable() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("empty.png");
    std::fs::write(&input, b"").unwrap();

    let err = process(&input, &tmp.path().join("out"), &IconConfig::default(), None).unwrap_err();

    assert!(matches!(
        err,
        ProcessError::Source(SourceError::UnreadableImage { .. })
    ));
    assert!(err.to_string().contains("empty.png"));
}

#[test]
fn missing_file_is_unreadable() {
    let tmp = TempDir::new().unwrap();
    let err = process(
        &tmp.path().join("nope.png"),
        &tmp.path().join("out"),
        &IconConfig::default(),
        None,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        ProcessError::Source(SourceError::UnreadableImage { .. })
    ));
}

#[test]
fn unwritable_output_is_write_error() {
    let tmp = TempDir::new().unwrap();
    let input = opaque_png(tmp.path(), "logo.png", 512, 512);
    // A file where the platform directory must be created
    let out = tmp.path().join("out");
    std::fs::create_dir_all(&out).unwrap();
    std::fs::write(out.join("ios"), b"not a directory").unwrap();

    let err = process(&input, &out, &config(QualityTier::Low, Layout::Catalog), None).unwrap_err();

    assert!(matches!(err, ProcessError::Export(_)));
    assert!(err.to_string().starts_with("cannot write"));
}
