//! Pure predicates that decide how a single string should be embedded:
//! as a base64 data URI, as an image URL, or as plain text.
//!
//! These never touch the network and never verify that an image actually
//! exists or decodes; they only look at the string itself.

use url::Url;

/// File extensions (lowercase) that mark a URL path as an image.
const IMAGE_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".gif", ".bmp", ".webp", ".svg"];

/// True iff `s` is a `data:image/...` URI with a `;base64,` payload marker.
///
/// The base64 payload itself is not validated.
pub fn is_base64_image(s: &str) -> bool {
    s.starts_with("data:image/") && s.contains(";base64,")
}

/// True iff `s` parses as an absolute URL whose path ends with a known
/// image extension (case-insensitive).
///
/// A string that fails URL parsing is never an image URL; callers treat
/// it as plain text rather than an error.
pub fn is_image_url(s: &str) -> bool {
    match Url::parse(s) {
        Ok(url) => {
            let path = url.path().to_ascii_lowercase();
            IMAGE_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
        }
        Err(_) => false,
    }
}

/// True iff `s` denotes image content in either supported form.
pub fn is_image_string(s: &str) -> bool {
    is_base64_image(s) || is_image_url(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base64_image_requires_prefix_and_marker() {
        assert!(is_base64_image("data:image/png;base64,iVBORw0KGgo="));
        assert!(is_base64_image("data:image/jpeg;base64,AAAA"));
        assert!(is_base64_image("data:image/svg+xml;base64,PHN2Zz4="));

        // Wrong prefix.
        assert!(!is_base64_image("data:application/pdf;base64,AAAA"));
        assert!(!is_base64_image("image/png;base64,AAAA"));
        // Missing the base64 marker.
        assert!(!is_base64_image("data:image/png,rawbytes"));
        assert!(!is_base64_image("hello world"));
    }

    #[test]
    fn image_url_matches_known_extensions() {
        assert!(is_image_url("https://example.com/photo.jpg"));
        assert!(is_image_url("https://example.com/photo.jpeg"));
        assert!(is_image_url("https://example.com/a/b/c.png"));
        assert!(is_image_url("http://example.com/anim.gif"));
        assert!(is_image_url("https://example.com/pic.bmp"));
        assert!(is_image_url("https://example.com/pic.webp"));
        assert!(is_image_url("https://example.com/logo.svg"));
    }

    #[test]
    fn image_url_extension_is_case_insensitive() {
        assert!(is_image_url("https://example.com/photo.JPG"));
        assert!(is_image_url("https://example.com/photo.PnG"));
    }

    #[test]
    fn image_url_ignores_query_and_fragment() {
        // The extension check runs against the path component only.
        assert!(is_image_url("https://example.com/photo.png?size=large"));
        assert!(!is_image_url("https://example.com/page?file=photo.png"));
    }

    #[test]
    fn non_image_urls_are_rejected() {
        assert!(!is_image_url("https://example.com/document.pdf"));
        assert!(!is_image_url("https://example.com/"));
        // Not an absolute URL, regardless of suffix.
        assert!(!is_image_url("photo.jpg"));
        assert!(!is_image_url("/images/photo.jpg"));
        assert!(!is_image_url("not a url at all"));
    }

    #[test]
    fn image_string_covers_both_forms() {
        assert!(is_image_string("data:image/png;base64,AAAA"));
        assert!(is_image_string("https://example.com/photo.jpg"));
        assert!(!is_image_string("just some text"));
    }
}
