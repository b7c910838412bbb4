//! Image URL construction.
//!
//! TMDB serves images from a fixed host; a full URL is the host base
//! joined with a size token and the record's path fragment.

/// Image host base URL.
const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

/// Default poster size token.
pub const POSTER_SIZE: &str = "w500";

/// Default backdrop size token.
pub const BACKDROP_SIZE: &str = "w1280";

/// Default profile size token.
pub const PROFILE_SIZE: &str = "w185";

/// Builds an image URL with an explicit size token.
///
/// Returns `None` when the path fragment is absent.
#[must_use]
pub fn image_url(path: Option<&str>, size: &str) -> Option<String> {
    path.map(|p| format!("{IMAGE_BASE_URL}/{size}{p}"))
}

/// Builds a poster URL at the default poster size.
#[must_use]
pub fn poster_url(path: Option<&str>) -> Option<String> {
    image_url(path, POSTER_SIZE)
}

/// Builds a backdrop URL at the default backdrop size.
#[must_use]
pub fn backdrop_url(path: Option<&str>) -> Option<String> {
    image_url(path, BACKDROP_SIZE)
}

/// Builds a profile URL at the default profile size.
#[must_use]
pub fn profile_url(path: Option<&str>) -> Option<String> {
    image_url(path, PROFILE_SIZE)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_absent_path_yields_none() {
        // Arrange & Act & Assert
        assert_eq!(poster_url(None), None);
        assert_eq!(backdrop_url(None), None);
        assert_eq!(profile_url(None), None);
        assert_eq!(image_url(None, "w200"), None);
    }

    #[test]
    fn test_explicit_size_token() {
        // Arrange & Act
        let url = image_url(Some("/abc.jpg"), "w200");

        // Assert
        assert_eq!(
            url.as_deref(),
            Some("https://image.tmdb.org/t/p/w200/abc.jpg")
        );
    }

    #[test]
    fn test_default_sizes() {
        // Arrange & Act & Assert
        assert_eq!(
            poster_url(Some("/p.jpg")).unwrap(),
            "https://image.tmdb.org/t/p/w500/p.jpg"
        );
        assert_eq!(
            backdrop_url(Some("/b.jpg")).unwrap(),
            "https://image.tmdb.org/t/p/w1280/b.jpg"
        );
        assert_eq!(
            profile_url(Some("/f.jpg")).unwrap(),
            "https://image.tmdb.org/t/p/w185/f.jpg"
        );
    }
}
