//! Fehlerfälle der Build- und Ladepfade

use kochbuch::error::KochbuchError;
use kochbuch::{artifact, scanner};
use std::path::Path;
use tempfile::tempdir;

#[test]
fn test_scan_nonexistent_folder() {
    let result = scanner::scan_folder(Path::new("/nonexistent/path/12345"));
    assert!(result.is_err());

    let err = result.unwrap_err();
    assert!(matches!(err, KochbuchError::FolderNotFound(_)));
}

#[test]
fn test_scan_empty_folder_is_not_an_error() {
    let dir = tempdir().expect("Failed to create temp dir");
    let result = scanner::scan_folder(dir.path());

    assert!(result.is_ok());
    assert!(result.unwrap().is_empty());
}

#[test]
fn test_load_missing_artifact() {
    let result = artifact::load(Path::new("/nonexistent/data.json"));
    assert!(matches!(result, Err(KochbuchError::FileNotFound(_))));
}

#[test]
fn test_load_unparseable_artifact() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data.json");
    std::fs::write(&path, "kein json").unwrap();

    let result = artifact::load(&path);
    assert!(matches!(
        result,
        Err(KochbuchError::Common(kochbuch_common::Error::Json(_)))
    ));
}

#[test]
fn test_load_artifact_violating_invariant() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data.json");
    std::fs::write(&path, r#"[{"title": "", "ingredients": [["x"]], "html": ""}]"#).unwrap();

    let result = artifact::load(&path);
    assert!(matches!(
        result,
        Err(KochbuchError::Common(kochbuch_common::Error::Data(_)))
    ));
}

#[test]
fn test_error_display_german() {
    let errors = vec![
        KochbuchError::Config("Testfehler".to_string()),
        KochbuchError::FileNotFound("data.json".to_string()),
        KochbuchError::FolderNotFound("/pfad/zu/rezepten".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "leere Fehlermeldung: {:?}", err);
    }

    let display = format!("{}", KochbuchError::FolderNotFound("rezepte".to_string()));
    assert!(display.contains("Ordner nicht gefunden"));
}

#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: KochbuchError = io_err.into();

    assert!(matches!(err, KochbuchError::Io(_)));
    let display = format!("{}", err);
    assert!(display.contains("IO"));
}

#[test]
fn test_common_error_is_transparent() {
    let common_err = kochbuch_common::Error::Data("Rezept ohne Titel".to_string());
    let err: KochbuchError = common_err.into();

    assert!(matches!(err, KochbuchError::Common(_)));
    let display = format!("{}", err);
    assert!(display.contains("Rezept ohne Titel"));
}
