//! Tests for layout constants, defaults and configuration validation

#[cfg(test)]
mod tests {
    use gridcollage::CollageError;
    use gridcollage::io::configuration::{
        CAPTION_GAP, CAPTION_HEIGHT, CollageConfig, DEFAULT_GRID_SIZE, DEFAULT_OUTPUT,
        DEFAULT_TILE_SIZE, JPEG_QUALITY, MARGIN, SUPPORTED_EXTENSIONS,
    };
    use gridcollage::io::encoder::OutputFormat;
    use std::path::PathBuf;

    // Tests fixed layout geometry
    // Verified by changing constant values
    #[test]
    fn test_layout_constants() {
        assert_eq!(MARGIN, 10);
        assert_eq!(CAPTION_HEIGHT, 20);
        assert_eq!(CAPTION_GAP, 5);
        assert_eq!(JPEG_QUALITY, 90);
    }

    // Tests command-line defaults
    // Verified by changing default values
    #[test]
    fn test_defaults() {
        assert_eq!(DEFAULT_GRID_SIZE, 3);
        assert_eq!(DEFAULT_TILE_SIZE, 300);
        assert_eq!(DEFAULT_OUTPUT, "output.png");
    }

    // Tests supported extensions are lowercase and complete
    // Verified by removing bmp from the list
    #[test]
    fn test_supported_extensions() {
        assert_eq!(SUPPORTED_EXTENSIONS, ["jpg", "jpeg", "png", "gif", "bmp"]);
        assert!(
            SUPPORTED_EXTENSIONS
                .iter()
                .all(|ext| ext.chars().all(|c| c.is_ascii_lowercase()))
        );
    }

    // Tests a valid configuration derives layout and encoder
    // Verified by ignoring the output extension
    #[test]
    fn test_validate_ok() {
        let config = CollageConfig::validate(
            PathBuf::from("photos"),
            PathBuf::from("out.JPG"),
            4,
            100,
            Some(3),
        )
        .unwrap();

        assert_eq!(config.output_format, OutputFormat::Jpeg);
        assert_eq!(config.required_images(), 16);
        assert_eq!(config.layout.canvas_width(), 450);
        assert_eq!(config.seed, Some(3));
    }

    // Tests unsupported output is rejected during validation
    // Verified by deferring the format check to encoding
    #[test]
    fn test_validate_rejects_output_format() {
        let result = CollageConfig::validate(
            PathBuf::from("photos"),
            PathBuf::from("out.gif"),
            3,
            300,
            None,
        );

        assert!(matches!(result, Err(CollageError::UnsupportedFormat { .. })));
    }

    // Tests degenerate geometry is a configuration error
    // Verified by removing the zero checks
    #[test]
    fn test_validate_rejects_zero_sizes() {
        for (n, tile) in [(0, 300), (3, 0)] {
            let result = CollageConfig::validate(
                PathBuf::from("photos"),
                PathBuf::from(DEFAULT_OUTPUT),
                n,
                tile,
                None,
            );
            let error = result.unwrap_err();
            assert!(matches!(error, CollageError::InvalidParameter { .. }));
            assert_eq!(error.exit_code(), 2);
        }
    }
}
