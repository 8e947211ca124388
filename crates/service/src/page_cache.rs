//! Rendered-HTML cache keyed by request path. This is what the revalidation
//! endpoints invalidate.
use moka::future::Cache;

#[derive(Clone)]
pub struct PageCache {
    inner: Cache<String, String>,
}

impl PageCache {
    pub fn new(max_pages: u64) -> Self {
        Self { inner: Cache::builder().max_capacity(max_pages).build() }
    }

    pub async fn get(&self, path: &str) -> Option<String> {
        self.inner.get(path).await
    }

    pub async fn insert(&self, path: impl Into<String>, html: String) {
        self.inner.insert(path.into(), html).await;
    }

    pub async fn invalidate(&self, path: &str) {
        self.inner.invalidate(path).await;
    }

    pub fn invalidate_all(&self) {
        self.inner.invalidate_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn insert_get_invalidate_roundtrip() {
        let cache = PageCache::new(8);
        cache.insert("/", "<html>ana sayfa</html>".to_string()).await;
        assert_eq!(cache.get("/").await.as_deref(), Some("<html>ana sayfa</html>"));

        cache.invalidate("/").await;
        assert!(cache.get("/").await.is_none());
    }

    #[tokio::test]
    async fn invalidate_all_clears_every_path() {
        let cache = PageCache::new(8);
        cache.insert("/", "a".to_string()).await;
        cache.insert("/hizmetler", "b".to_string()).await;
        cache.invalidate_all();
        // moka applies full invalidation lazily; reads observe it immediately.
        assert!(cache.get("/").await.is_none());
        assert!(cache.get("/hizmetler").await.is_none());
    }
}
