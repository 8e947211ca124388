//! Bot-ingest pipeline: webhook photo messages become gallery rows.
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use tracing::{info, warn};
use uuid::Uuid;

use models::gallery_item;

use crate::errors::ServiceError;
use crate::storage::StorageClient;
use crate::telegram::TelegramClient;

const DEFAULT_TITLE: &str = "Galeri Fotoğrafı";

/// Inbound webhook payload; only the fields this route reads.
#[derive(Debug, Deserialize)]
pub struct TelegramUpdate {
    pub update_id: i64,
    pub message: Option<IncomingMessage>,
}

#[derive(Debug, Deserialize)]
pub struct IncomingMessage {
    pub message_id: i64,
    pub chat: Chat,
    #[serde(default)]
    pub photo: Vec<PhotoSize>,
    pub caption: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Chat {
    pub id: i64,
}

#[derive(Debug, Deserialize)]
pub struct PhotoSize {
    pub file_id: String,
    pub width: i32,
    pub height: i32,
}

#[derive(Debug)]
pub enum IngestOutcome {
    /// The update carried no photo; nothing was stored.
    NoPhoto,
    Stored(gallery_item::Model),
}

/// The highest-resolution variant, if the update carries a photo at all.
/// Telegram orders photo sizes ascending, so the last entry wins.
pub fn best_photo(update: &TelegramUpdate) -> Option<(&IncomingMessage, &PhotoSize)> {
    let message = update.message.as_ref()?;
    let photo = message.photo.last()?;
    Some((message, photo))
}

/// Split a caption into title (first line) and description (the rest).
pub fn parse_caption(caption: Option<&str>) -> (String, Option<String>) {
    let Some(caption) = caption.map(str::trim).filter(|c| !c.is_empty()) else {
        return (DEFAULT_TITLE.to_string(), None);
    };
    match caption.split_once('\n') {
        Some((first, rest)) => {
            let description = rest.trim();
            (
                first.trim().to_string(),
                (!description.is_empty()).then(|| description.to_string()),
            )
        }
        None => (caption.to_string(), None),
    }
}

/// Run the full ingest: resolve, download, upload, insert, confirm.
///
/// If the row insert fails after the object was uploaded, a best-effort
/// compensating delete removes the orphan before the error propagates.
pub async fn ingest(
    db: &DatabaseConnection,
    storage: &StorageClient,
    bot: Option<&TelegramClient>,
    bucket: &str,
    update: &TelegramUpdate,
) -> Result<IngestOutcome, ServiceError> {
    let Some((message, photo)) = best_photo(update) else {
        return Ok(IngestOutcome::NoPhoto);
    };
    let Some(bot) = bot else {
        return Err(ServiceError::Upstream("bot token not configured".into()));
    };

    let file_path = bot.get_file_path(&photo.file_id).await?;
    let bytes = bot.download_file(&file_path).await?;

    let object_path = format!("{}.jpg", Uuid::new_v4());
    storage.upload(bucket, &object_path, bytes, "image/jpeg").await?;

    let (title, description) = parse_caption(message.caption.as_deref());
    let image_url = storage.public_url(bucket, &object_path);
    let item =
        match gallery_item::create(db, &title, description.as_deref(), &image_url).await {
            Ok(item) => item,
            Err(e) => {
                // The object is already in the bucket; try not to leak it.
                if let Err(del) = storage.delete(bucket, &object_path).await {
                    warn!(bucket = %bucket, object_path = %object_path, error = %del, "compensating delete failed; object orphaned");
                }
                return Err(e.into());
            }
        };

    info!(item_id = %item.id, width = photo.width, height = photo.height, "gallery item ingested");

    if let Err(e) = bot.send_message(message.chat.id, "✅ Fotoğraf galeriye eklendi").await {
        warn!(chat_id = message.chat.id, error = %e, "ingest confirmation failed");
    }

    Ok(IngestOutcome::Stored(item))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caption_splits_title_and_description() {
        let (title, desc) = parse_caption(Some("Ofis taşıma\nAnkara projesi\nHaziran"));
        assert_eq!(title, "Ofis taşıma");
        assert_eq!(desc.as_deref(), Some("Ankara projesi\nHaziran"));
    }

    #[test]
    fn caption_without_newline_is_title_only() {
        let (title, desc) = parse_caption(Some("Depo fotoğrafı"));
        assert_eq!(title, "Depo fotoğrafı");
        assert!(desc.is_none());
    }

    #[test]
    fn missing_caption_uses_default_title() {
        let (title, desc) = parse_caption(None);
        assert_eq!(title, DEFAULT_TITLE);
        assert!(desc.is_none());
        let (title, _) = parse_caption(Some("   "));
        assert_eq!(title, DEFAULT_TITLE);
    }

    #[test]
    fn best_photo_none_without_photo() {
        let update: TelegramUpdate = serde_json::from_str(
            r#"{"update_id":1,"message":{"message_id":5,"chat":{"id":42},"caption":"x"}}"#,
        )
        .expect("parse");
        assert!(best_photo(&update).is_none());
    }

    #[test]
    fn best_photo_picks_highest_resolution() {
        let update: TelegramUpdate = serde_json::from_str(
            r#"{
                "update_id": 1,
                "message": {
                    "message_id": 5,
                    "chat": {"id": 42},
                    "photo": [
                        {"file_id": "small", "width": 90, "height": 60},
                        {"file_id": "large", "width": 1280, "height": 853}
                    ]
                }
            }"#,
        )
        .expect("parse");
        let (_, photo) = best_photo(&update).expect("photo present");
        assert_eq!(photo.file_id, "large");
    }
}
