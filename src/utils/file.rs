use std::path::Path;

/// Object path for an uploaded asset: `{prefix}/{millis}_{filename}`.
pub fn generate_object_path(prefix: &str, timestamp_millis: i64, filename: &str) -> String {
    format!("{}/{}_{}", prefix, timestamp_millis, sanitize_file_name(filename))
}

/// Keeps only the final path component and replaces anything outside
/// `[A-Za-z0-9._-]` with `_`.
pub fn sanitize_file_name(filename: &str) -> String {
    let base = Path::new(filename.trim())
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("");

    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();

    let cleaned = cleaned.trim_start_matches('.');
    if cleaned.is_empty() {
        "file".to_string()
    } else {
        cleaned.to_string()
    }
}

/// Content type of an uploaded part, falling back to the filename when the
/// client sent none or a generic one.
pub fn resolve_content_type(declared: Option<&str>, filename: &str) -> String {
    match declared {
        Some(ct) if !ct.is_empty() && ct != "application/octet-stream" => ct.to_string(),
        _ => mime_guess::from_path(filename)
            .first_or_octet_stream()
            .essence_str()
            .to_string(),
    }
}

pub fn is_image(content_type: &str) -> bool {
    content_type.starts_with("image/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_object_path() {
        assert_eq!(
            generate_object_path("banners", 1700000000123, "cover.png"),
            "banners/1700000000123_cover.png"
        );
    }

    #[test]
    fn test_sanitize_file_name() {
        assert_eq!(sanitize_file_name("my shot (1).jpg"), "my_shot__1_.jpg");
        assert_eq!(sanitize_file_name("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_file_name("..."), "file");
        assert_eq!(sanitize_file_name(""), "file");
    }

    #[test]
    fn test_resolve_content_type() {
        assert_eq!(resolve_content_type(Some("image/webp"), "a.png"), "image/webp");
        assert_eq!(resolve_content_type(None, "a.png"), "image/png");
        assert_eq!(resolve_content_type(Some("application/octet-stream"), "a.jpg"), "image/jpeg");
        assert!(!is_image(&resolve_content_type(None, "setup.exe")));
    }
}
