//! Tests for error types including source chaining, messages and exit codes

#[cfg(test)]
mod tests {
    use gridcollage::CollageError;
    use gridcollage::io::error::invalid_parameter;
    use std::error::Error;
    use std::path::PathBuf;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = CollageError::FileSystem {
            path: "/tmp/out.png".into(),
            operation: "create file",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(
            CollageError::NotEnoughImages {
                needed: 1,
                found: 0
            }
            .source()
            .is_none()
        );
    }

    // Tests shortage message names both counts
    // Verified by omitting the found count from message
    #[test]
    fn test_not_enough_images_message() {
        let error = CollageError::NotEnoughImages {
            needed: 9,
            found: 4,
        };

        let message = error.to_string();
        assert!(message.contains("need at least 9"));
        assert!(message.contains("got 4"));
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("tile", &0, &"must be at least 1");

        let message = error.to_string();
        assert!(message.contains("tile"));
        assert!(message.contains("'0'"));
        assert!(message.contains("must be at least 1"));
    }

    // Tests ImageExport error with IO source
    // Verified by excluding source error from message
    #[test]
    fn test_image_export_error() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));

        let error = CollageError::ImageExport {
            path: PathBuf::from("/restricted/output.png"),
            source: image_error,
        };

        let message = error.to_string();
        assert!(message.contains("/restricted/output.png"));
        assert!(error.source().is_some());
        assert!(
            message.contains("Permission denied")
                || message.contains("permission denied")
                || message.contains("access denied"),
            "Error message should include source error details: {message}"
        );
    }

    // Tests unsupported format message names the extension
    // Verified by dropping the extension from the message
    #[test]
    fn test_unsupported_format_message() {
        let error = CollageError::UnsupportedFormat {
            path: PathBuf::from("collage.tiff"),
            extension: "tiff".to_string(),
        };

        assert!(error.to_string().contains(".tiff"));
    }

    // Tests each error kind maps to its own exit code
    // Verified by collapsing all codes to 1
    #[test]
    fn test_exit_codes() {
        let io = || std::io::Error::other("boom");
        let cases = [
            (invalid_parameter("n", &0, &"zero"), 2),
            (
                CollageError::NotEnoughImages {
                    needed: 4,
                    found: 1,
                },
                4,
            ),
            (
                CollageError::ImageLoad {
                    path: PathBuf::from("a.png"),
                    source: image::ImageError::IoError(io()),
                },
                5,
            ),
            (
                CollageError::UnsupportedFormat {
                    path: PathBuf::from("a.gif"),
                    extension: "gif".to_string(),
                },
                6,
            ),
            (
                CollageError::FileSystem {
                    path: PathBuf::from("out/collage.png"),
                    operation: "create file",
                    source: io(),
                },
                7,
            ),
        ];

        for (error, code) in cases {
            assert_eq!(error.exit_code(), code, "{error}");
            assert_ne!(error.exit_code(), 0);
        }
    }
}
