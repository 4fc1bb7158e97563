use std::path::Path;

/// MIME type for a recognized image extension, matched case-insensitively.
///
/// Files with any other extension (or none) are not uploaded at all; the
/// walker drops them before the upload loop sees them.
pub fn content_type_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        // The site's PNG assets are WebP re-encodes served under the .png name
        "png" => Some("image/webp"),
        "webp" => Some("image/webp"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "svg" => Some("image/svg+xml"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_maps_to_webp() {
        assert_eq!(content_type_for(Path::new("hive/a.png")), Some("image/webp"));
    }

    #[test]
    fn test_extension_match_is_case_insensitive() {
        assert_eq!(content_type_for(Path::new("A.PNG")), Some("image/webp"));
        assert_eq!(content_type_for(Path::new("b.JpEg")), Some("image/jpeg"));
    }

    #[test]
    fn test_known_extensions() {
        assert_eq!(content_type_for(Path::new("a.webp")), Some("image/webp"));
        assert_eq!(content_type_for(Path::new("a.jpg")), Some("image/jpeg"));
        assert_eq!(content_type_for(Path::new("a.gif")), Some("image/gif"));
        assert_eq!(content_type_for(Path::new("a.svg")), Some("image/svg+xml"));
    }

    #[test]
    fn test_unmapped_extensions_are_none() {
        assert_eq!(content_type_for(Path::new("notes.txt")), None);
        assert_eq!(content_type_for(Path::new("archive.tar.gz")), None);
        assert_eq!(content_type_for(Path::new("no_extension")), None);
    }
}
