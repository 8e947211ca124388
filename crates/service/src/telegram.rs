//! Minimal Telegram Bot API client covering the three methods this site
//! uses: sendMessage, getFile, and file download.
use serde::Deserialize;

use crate::errors::ServiceError;

const API_BASE: &str = "https://api.telegram.org";

#[derive(Clone)]
pub struct TelegramClient {
    http: reqwest::Client,
    token: String,
}

#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    ok: bool,
    result: Option<T>,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FilePayload {
    file_path: Option<String>,
}

impl TelegramClient {
    pub fn new(token: impl Into<String>) -> Self {
        Self { http: reqwest::Client::new(), token: token.into() }
    }

    /// Send an HTML-formatted message to one chat.
    pub async fn send_message(&self, chat_id: i64, text: &str) -> Result<(), ServiceError> {
        let url = format!("{}/bot{}/sendMessage", API_BASE, self.token);
        let resp = self
            .http
            .post(&url)
            .json(&serde_json::json!({
                "chat_id": chat_id,
                "text": text,
                "parse_mode": "HTML",
            }))
            .send()
            .await
            .map_err(|e| ServiceError::Upstream(e.to_string()))?;
        let body: ApiResponse<serde_json::Value> = resp
            .json()
            .await
            .map_err(|e| ServiceError::Upstream(e.to_string()))?;
        if !body.ok {
            return Err(ServiceError::Upstream(
                body.description.unwrap_or_else(|| "sendMessage failed".into()),
            ));
        }
        Ok(())
    }

    /// Resolve the server-side path of an uploaded file by its id.
    pub async fn get_file_path(&self, file_id: &str) -> Result<String, ServiceError> {
        let url = format!("{}/bot{}/getFile", API_BASE, self.token);
        let resp = self
            .http
            .get(&url)
            .query(&[("file_id", file_id)])
            .send()
            .await
            .map_err(|e| ServiceError::Upstream(e.to_string()))?;
        let body: ApiResponse<FilePayload> = resp
            .json()
            .await
            .map_err(|e| ServiceError::Upstream(e.to_string()))?;
        match body.result.and_then(|f| f.file_path) {
            Some(path) if body.ok => Ok(path),
            _ => Err(ServiceError::Upstream(
                body.description.unwrap_or_else(|| "getFile failed".into()),
            )),
        }
    }

    /// Download the bytes of a file previously resolved via [`get_file_path`].
    pub async fn download_file(&self, file_path: &str) -> Result<Vec<u8>, ServiceError> {
        let url = format!("{}/file/bot{}/{}", API_BASE, self.token, file_path);
        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ServiceError::Upstream(e.to_string()))?;
        if !resp.status().is_success() {
            return Err(ServiceError::Upstream(format!(
                "file download returned {}",
                resp.status()
            )));
        }
        let bytes = resp
            .bytes()
            .await
            .map_err(|e| ServiceError::Upstream(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}
