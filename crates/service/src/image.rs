//! Cache-validation support for the image proxy.
use sha2::{Digest, Sha256};

/// Cache directive attached to every proxied image response.
pub const IMMUTABLE_CACHE_CONTROL: &str = "public, max-age=31536000, immutable";

/// Deterministic, quoted ETag for an object identity. Derived from
/// `(bucket, path)` only, so it is stable across processes and restarts.
pub fn object_etag(bucket: &str, path: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bucket.as_bytes());
    hasher.update(b"/");
    hasher.update(path.as_bytes());
    format!("\"{:x}\"", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn etag_is_deterministic() {
        assert_eq!(object_etag("galeri", "a.jpg"), object_etag("galeri", "a.jpg"));
    }

    #[test]
    fn etag_differs_per_object() {
        assert_ne!(object_etag("galeri", "a.jpg"), object_etag("galeri", "b.jpg"));
        assert_ne!(object_etag("galeri", "a.jpg"), object_etag("icerik", "a.jpg"));
    }

    #[test]
    fn etag_is_quoted_hex() {
        let tag = object_etag("galeri", "a.jpg");
        assert!(tag.starts_with('"') && tag.ends_with('"'));
        assert_eq!(tag.len(), 66); // 64 hex chars + quotes
    }
}
