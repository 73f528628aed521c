use assert_cmd::Command;
use image::{ImageBuffer, Rgb, RgbImage};
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_sample(dir: &Path) -> PathBuf {
    let img: RgbImage = ImageBuffer::from_fn(6, 4, |x, y| {
        Rgb([(x * 40) as u8, (y * 60) as u8, ((x + y) * 20) as u8])
    });
    let path = dir.join("sample.ppm");
    img.save_with_format(&path, image::ImageFormat::Pnm).unwrap();
    path
}

#[test]
fn slims_to_a_file() {
    let dir = TempDir::new().unwrap();
    let input = write_sample(dir.path());
    let output = dir.path().join("slim.ppm");

    Command::cargo_bin("pnmslim")
        .unwrap()
        .arg(&input)
        .arg("2")
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    let slim = image::open(&output).unwrap();
    assert_eq!((slim.width(), slim.height()), (4, 4));
}

#[test]
fn slims_to_stdout_as_binary_ppm() {
    let dir = TempDir::new().unwrap();
    let input = write_sample(dir.path());

    let out = Command::cargo_bin("pnmslim")
        .unwrap()
        .arg(&input)
        .arg("1")
        .output()
        .unwrap();
    assert!(out.status.success());
    assert!(out.stdout.starts_with(b"P6"));
    let slim = image::load_from_memory(&out.stdout).unwrap();
    assert_eq!((slim.width(), slim.height()), (5, 4));
}

#[test]
fn energy_mode_writes_a_graymap() {
    let dir = TempDir::new().unwrap();
    let input = write_sample(dir.path());

    let out = Command::cargo_bin("pnmslim")
        .unwrap()
        .arg(&input)
        .arg("--energy")
        .output()
        .unwrap();
    assert!(out.status.success());
    assert!(out.stdout.starts_with(b"P5"));
    let energy = image::load_from_memory(&out.stdout).unwrap();
    assert_eq!((energy.width(), energy.height()), (6, 4));
}

#[test]
fn too_many_seams_fails() {
    let dir = TempDir::new().unwrap();
    let input = write_sample(dir.path());

    Command::cargo_bin("pnmslim")
        .unwrap()
        .arg(&input)
        .arg("6")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot remove 6 seams"));
}

#[test]
fn bad_seam_counts_fail() {
    let dir = TempDir::new().unwrap();
    let input = write_sample(dir.path());

    Command::cargo_bin("pnmslim")
        .unwrap()
        .arg(&input)
        .arg("-3")
        .assert()
        .failure();
}

#[test]
fn missing_files_fail() {
    Command::cargo_bin("pnmslim")
        .unwrap()
        .arg("/no/such/image.ppm")
        .arg("1")
        .assert()
        .failure();
}
