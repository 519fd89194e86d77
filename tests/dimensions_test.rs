#[cfg(test)]
mod tests {
    use std::fs;

    use image::RgbaImage;
    use logo_header::dimensions::{
        DimensionError, Dimensions, FALLBACK_DIMENSIONS, measure, read_dimensions,
    };
    use tempfile::tempdir;

    #[test]
    fn reads_png_size() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("logo.png");
        RgbaImage::new(7, 3).save(&path).unwrap();

        let reading = read_dimensions(&path);
        assert!(!reading.is_fallback());
        assert_eq!(reading.dimensions, Dimensions { width: 7, height: 3 });
    }

    #[test]
    fn sniffs_format_from_content() {
        let dir = tempdir().unwrap();
        let png = dir.path().join("logo.png");
        RgbaImage::new(5, 9).save(&png).unwrap();
        let renamed = dir.path().join("logo.bin");
        fs::rename(&png, &renamed).unwrap();

        assert_eq!(measure(&renamed).unwrap(), Dimensions { width: 5, height: 9 });
    }

    #[test]
    fn corrupt_file_falls_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("logo.png");
        fs::write(&path, b"definitely not a png").unwrap();

        let reading = read_dimensions(&path);
        assert_eq!(reading.dimensions, FALLBACK_DIMENSIONS);
        assert_eq!(reading.dimensions, Dimensions { width: 196, height: 196 });
        assert!(matches!(reading.fallback, Some(DimensionError::Decode(_))));
    }

    #[test]
    fn missing_file_falls_back() {
        let dir = tempdir().unwrap();
        let reading = read_dimensions(&dir.path().join("nope.png"));

        assert_eq!(reading.dimensions, FALLBACK_DIMENSIONS);
        match reading.fallback {
            Some(DimensionError::Open(err)) => {
                assert_eq!(err.kind(), std::io::ErrorKind::NotFound)
            }
            other => panic!("unexpected fallback: {other:?}"),
        }
    }

    #[test]
    fn display_formats() {
        assert_eq!(FALLBACK_DIMENSIONS.to_string(), "196x196");
    }
}
