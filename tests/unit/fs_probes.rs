use nixplat::core::NixplatError;
use nixplat::utils::fs::{directory_exists, file_exists, file_size, resolve_full_path};
use serial_test::serial;
use std::fs::{self, File};
use std::path::Path;
use tempfile::TempDir;

#[test]
fn test_probes_on_file_directory_and_missing_path() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("data.bin");
    fs::write(&file, [0u8; 42]).unwrap();

    assert!(file_exists(&file));
    assert!(!directory_exists(&file));

    assert!(file_exists(temp.path()));
    assert!(directory_exists(temp.path()));

    let missing = temp.path().join("missing");
    assert!(!file_exists(&missing));
    assert!(!directory_exists(&missing));

    assert_eq!(file_size(&File::open(&file).unwrap()), 42);
}

#[test]
#[serial]
fn test_relative_path_with_parent_segments_resolves_like_absolute() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("a")).unwrap();
    fs::write(temp.path().join("a").join("file.txt"), "x").unwrap();

    let original = std::env::current_dir().unwrap();
    std::env::set_current_dir(temp.path()).unwrap();
    let relative = resolve_full_path(Path::new("./a/../a/file.txt"));
    std::env::set_current_dir(original).unwrap();

    let absolute = resolve_full_path(&temp.path().join("a").join("file.txt")).unwrap();
    assert_eq!(relative.unwrap(), absolute);
    assert!(absolute.is_absolute());
}

#[test]
fn test_resolving_missing_path_fails() {
    let temp = TempDir::new().unwrap();
    let err = resolve_full_path(&temp.path().join("ghost")).unwrap_err();
    assert!(matches!(err, NixplatError::PathResolution { .. }));
}
