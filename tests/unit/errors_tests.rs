/*!
 * Tests for error types and conversions
 */

use std::path::PathBuf;

use seasons_sync::errors::{AppError, SourceError, WriteError};

#[test]
fn test_sourceError_malformed_shouldDisplayPathAndReason() {
    let error = SourceError::Malformed {
        path: PathBuf::from("data/sopranos.xml"),
        reason: "ill-formed document at byte 42".to_string(),
    };
    let display = format!("{}", error);
    assert!(display.contains("Malformed source document"));
    assert!(display.contains("data/sopranos.xml"));
    assert!(display.contains("byte 42"));
}

#[test]
fn test_sourceError_withPath_shouldReplacePath() {
    let error = SourceError::NotAWorkbook {
        path: PathBuf::new(),
        root: "html".to_string(),
    }
    .with_path(PathBuf::from("input.xml"));

    assert!(matches!(error, SourceError::NotAWorkbook { ref path, .. } if *path == PathBuf::from("input.xml")));
}

#[test]
fn test_writeError_io_shouldDisplayPathAndCause() {
    let error = WriteError::Io {
        path: PathBuf::from("missing/seasons.json"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory"),
    };
    let display = format!("{}", error);
    assert!(display.contains("missing/seasons.json"));
    assert!(display.contains("No such file or directory"));
}

#[test]
fn test_appError_fromSourceError_shouldWrap() {
    let source = SourceError::Malformed {
        path: PathBuf::from("x.xml"),
        reason: "bad".to_string(),
    };
    let app_error: AppError = source.into();
    assert!(matches!(app_error, AppError::Source(_)));
    assert!(app_error.to_string().starts_with("Source error:"));
}

#[test]
fn test_appError_fromWriteError_shouldWrap() {
    let write = WriteError::Io {
        path: PathBuf::from("out/seasons.json"),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    };
    let app_error: AppError = write.into();
    assert!(matches!(app_error, AppError::Write(WriteError::Io { .. })));
    assert!(app_error.to_string().starts_with("Write error:"));
    assert!(app_error.to_string().contains("denied"));
}

#[test]
fn test_appError_config_shouldDisplayReason() {
    let app_error = AppError::Config("Season prefix must not be empty".to_string());
    assert_eq!(
        app_error.to_string(),
        "Configuration error: Season prefix must not be empty"
    );
}
