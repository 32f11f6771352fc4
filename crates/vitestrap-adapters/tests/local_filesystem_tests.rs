use std::path::Path;

use tempfile::TempDir;
use vitestrap_adapters::LocalFilesystem;
use vitestrap_core::{
    application::{ApplicationError, ports::Filesystem},
    error::VitestrapError,
};

#[test]
fn write_read_remove_round_trip() {
    let tmp = TempDir::new().unwrap();
    let fs = LocalFilesystem::new();
    let dir = tmp.path().join("app/src/pages");

    fs.create_dir_all(&dir).unwrap();
    assert!(fs.exists(&dir));

    let file = dir.join("HomePage.jsx");
    fs.write_file(&file, "first").unwrap();
    fs.write_file(&file, "second").unwrap();
    assert_eq!(fs.read_to_string(&file).unwrap(), "second");

    fs.remove_file(&file).unwrap();
    assert!(!fs.exists(&file));
}

#[test]
fn removing_missing_file_is_a_filesystem_error() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("src/App.css");

    let err = LocalFilesystem::new().remove_file(&missing).unwrap_err();
    match err {
        VitestrapError::Application(ApplicationError::FilesystemError { path, reason }) => {
            assert_eq!(path, missing);
            assert!(reason.starts_with("Failed to remove file"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn writing_without_parent_directory_fails() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("missing/index.css");

    let err = LocalFilesystem::new().write_file(&file, "body {}").unwrap_err();
    assert!(err.to_string().contains("Failed to write file"));
    assert!(!Path::new(&file).exists());
}
