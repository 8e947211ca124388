//! Client for the hosted object-storage HTTP API. Public objects are read
//! anonymously; uploads and deletes carry the service key.
use tracing::debug;

use crate::errors::ServiceError;

#[derive(Clone)]
pub struct StorageClient {
    http: reqwest::Client,
    base_url: String,
    service_key: String,
}

/// Raw object bytes plus the content type the store reported.
pub struct StoredObject {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

impl StorageClient {
    pub fn new(cfg: &configs::StorageConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
            service_key: cfg.service_key.clone(),
        }
    }

    /// Publicly addressable URL of an object.
    pub fn public_url(&self, bucket: &str, path: &str) -> String {
        format!("{}/object/public/{}/{}", self.base_url, bucket, path)
    }

    fn object_url(&self, bucket: &str, path: &str) -> String {
        format!("{}/object/{}/{}", self.base_url, bucket, path)
    }

    pub async fn download(&self, bucket: &str, path: &str) -> Result<StoredObject, ServiceError> {
        let url = self.public_url(bucket, path);
        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ServiceError::Upstream(e.to_string()))?;
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(ServiceError::not_found("object"));
        }
        if !resp.status().is_success() {
            return Err(ServiceError::Upstream(format!(
                "storage download returned {}",
                resp.status()
            )));
        }
        let content_type = resp
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = resp
            .bytes()
            .await
            .map_err(|e| ServiceError::Upstream(e.to_string()))?;
        Ok(StoredObject { bytes: bytes.to_vec(), content_type })
    }

    pub async fn upload(
        &self,
        bucket: &str,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), ServiceError> {
        let url = self.object_url(bucket, path);
        let resp = self
            .http
            .post(&url)
            .bearer_auth(&self.service_key)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await
            .map_err(|e| ServiceError::Upstream(e.to_string()))?;
        if !resp.status().is_success() {
            return Err(ServiceError::Upstream(format!(
                "storage upload returned {}",
                resp.status()
            )));
        }
        debug!(bucket, path, "object uploaded");
        Ok(())
    }

    pub async fn delete(&self, bucket: &str, path: &str) -> Result<(), ServiceError> {
        let url = self.object_url(bucket, path);
        let resp = self
            .http
            .delete(&url)
            .bearer_auth(&self.service_key)
            .send()
            .await
            .map_err(|e| ServiceError::Upstream(e.to_string()))?;
        if !resp.status().is_success() {
            return Err(ServiceError::Upstream(format!(
                "storage delete returned {}",
                resp.status()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> StorageClient {
        let cfg = configs::StorageConfig {
            base_url: "https://storage.example.com/storage/v1/".into(),
            service_key: "k".into(),
            gallery_bucket: "galeri".into(),
            content_bucket: "icerik".into(),
        };
        StorageClient::new(&cfg)
    }

    #[test]
    fn public_url_trims_trailing_slash() {
        assert_eq!(
            client().public_url("galeri", "abc.jpg"),
            "https://storage.example.com/storage/v1/object/public/galeri/abc.jpg"
        );
    }
}
