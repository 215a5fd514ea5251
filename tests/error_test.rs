use std::io;
use std::path::PathBuf;

use stencil::error::Error;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::parse("templates/simple/templates.yaml", "unexpected end of stream");
    assert_eq!(
        err.to_string(),
        "Failed to parse 'templates/simple/templates.yaml': unexpected end of stream."
    );

    let err = Error::WriteError {
        path: PathBuf::from("build/index.json"),
        source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
    };
    assert_eq!(err.to_string(), "Failed to write 'build/index.json': denied.");

    let err = Error::ValidationFailed { files: 2 };
    assert_eq!(err.to_string(), "2 template definition(s) failed validation.");
}
