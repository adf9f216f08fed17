use std::{
    io::Write,
    process::{Command, Output},
};

use tempfile::NamedTempFile;

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bmp-ascii"))
        .args(args)
        .env_remove("BMP_ASCII_LOG")
        .output()
        .unwrap()
}

/// A 2x1 24-bit bitmap: black, then `right`
fn bmp(right: [u8; 3]) -> NamedTempFile {
    let mut data = Vec::new();
    data.extend_from_slice(b"BM");
    data.extend_from_slice(&62u32.to_le_bytes());
    data.extend_from_slice(&[0; 4]);
    data.extend_from_slice(&54u32.to_le_bytes());
    data.extend_from_slice(&40u32.to_le_bytes());
    data.extend_from_slice(&2i32.to_le_bytes());
    data.extend_from_slice(&1i32.to_le_bytes());
    data.extend_from_slice(&1u16.to_le_bytes());
    data.extend_from_slice(&24u16.to_le_bytes());
    data.extend_from_slice(&[0; 24]);
    data.extend_from_slice(&[0, 0, 0]);
    data.extend_from_slice(&right);
    data.extend_from_slice(&[0, 0]);

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(&data).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn usage_errors_exit_with_one() {
    let file = bmp([255, 255, 255]);
    let path = file.path().to_str().unwrap();
    for args in [&[][..], &[path, path][..], &["--frame", path][..]] {
        let out = run(args);
        assert_eq!(out.status.code(), Some(1), "args: {:?}", args);
        assert!(out.stdout.is_empty());
        assert!(!out.stderr.is_empty());
    }
}

#[test]
fn prints_art() {
    let file = bmp([255, 255, 255]);
    let out = run(&[file.path().to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(String::from_utf8(out.stdout).unwrap(), "# \n");
}

#[test]
fn warns_about_colors() {
    let file = bmp([0, 0, 200]);
    let out = run(&[file.path().to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        "The image contains colored pixels. They will be ignored when output.\n# \n"
    );
}

#[test]
fn decode_errors_exit_with_one() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"GIF89a, not a bitmap").unwrap();
    file.flush().unwrap();
    let out = run(&[file.path().to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());

    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.bmp");
    let out = run(&[missing.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(1));
}
