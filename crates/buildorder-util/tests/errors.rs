use buildorder_util::errors::BuildorderError;

#[test]
fn test_io_error_display() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
    let err = BuildorderError::from(io_err);
    assert!(err.to_string().contains("I/O error"), "got: {err}");
}

#[test]
fn test_manifest_error_display() {
    let err = BuildorderError::Manifest {
        message: "bad syntax".to_string(),
    };
    assert_eq!(err.to_string(), "Manifest error: bad syntax");
}

#[test]
fn test_config_error_display() {
    let err = BuildorderError::Config {
        message: "unknown format".to_string(),
    };
    assert_eq!(err.to_string(), "Config error: unknown format");
}

#[test]
fn test_generic_error_display() {
    let err = BuildorderError::Generic {
        message: "something broke".to_string(),
    };
    assert_eq!(err.to_string(), "something broke");
}

#[test]
fn test_manifest_error_has_help() {
    use miette::Diagnostic;

    let err = BuildorderError::Manifest {
        message: "bad".to_string(),
    };
    let help = err.help().map(|h| h.to_string()).unwrap_or_default();
    assert!(help.contains("Buildorder.toml"), "got: {help}");
}

#[test]
fn test_io_error_from_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err: BuildorderError = io_err.into();
    assert!(matches!(err, BuildorderError::Io(_)));
}
