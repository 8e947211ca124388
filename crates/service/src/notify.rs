//! Form-submission notifications: fixed-field-order message formatting and
//! concurrent fan-out to every active chat target.
use sea_orm::DatabaseConnection;
use tokio::task::JoinSet;
use tracing::{debug, warn};

use models::{iletisim, notification_target, teklif};

use crate::telegram::TelegramClient;

const FALLBACK: &str = "Belirtilmemiş";

fn or_fallback(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => FALLBACK,
    }
}

/// Notification text for a new quote request.
pub fn quote_message(q: &teklif::Model) -> String {
    format!(
        "🚚 <b>Yeni Teklif Talebi</b>\n\n\
         👤 Ad Soyad: {} {}\n\
         📧 E-posta: {}\n\
         📞 Telefon: {}\n\
         📦 Hizmet: {}\n\
         📍 Nereden: {}\n\
         📍 Nereye: {}\n\
         📅 Taşınma Tarihi: {}\n\
         📝 Not: {}",
        q.ad,
        q.soyad,
        q.email,
        q.telefon,
        q.hizmet_turu,
        q.nereden_adres,
        q.nereye_adres,
        q.tasinma_tarihi,
        or_fallback(q.notlar.as_deref()),
    )
}

/// Notification text for a new contact message.
pub fn contact_message(m: &iletisim::Model) -> String {
    format!(
        "✉️ <b>Yeni İletişim Mesajı</b>\n\n\
         👤 Ad Soyad: {}\n\
         📧 E-posta: {}\n\
         📞 Telefon: {}\n\
         💬 Mesaj: {}",
        m.ad_soyad, m.email, m.telefon, m.mesaj,
    )
}

/// Deliver `text` to every active notification target.
///
/// Silent no-op when no bot is configured or the target list is empty. Sends
/// run concurrently; a failed target never blocks the others and no failure
/// reaches the caller.
pub async fn dispatch(db: &DatabaseConnection, bot: Option<&TelegramClient>, text: &str) {
    let Some(bot) = bot else {
        debug!("no bot token configured; skipping notification");
        return;
    };
    let targets = match notification_target::list_active(db).await {
        Ok(targets) => targets,
        Err(e) => {
            warn!(error = %e, "failed to load notification targets; skipping notification");
            return;
        }
    };
    if targets.is_empty() {
        debug!("no active notification targets; skipping notification");
        return;
    }

    let mut set = JoinSet::new();
    for target in targets {
        let bot = bot.clone();
        let text = text.to_string();
        set.spawn(async move {
            (target.chat_id, bot.send_message(target.chat_id, &text).await)
        });
    }
    while let Some(joined) = set.join_next().await {
        match joined {
            Ok((_, Ok(()))) => {}
            Ok((chat_id, Err(e))) => {
                warn!(chat_id, error = %e, "notification delivery failed");
            }
            Err(e) => warn!(error = %e, "notification task panicked"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn sample_quote(notlar: Option<&str>) -> teklif::Model {
        let now = Utc::now().into();
        teklif::Model {
            id: Uuid::new_v4(),
            ad: "Ayşe".into(),
            soyad: "Yılmaz".into(),
            email: "ayse@example.com".into(),
            telefon: "5551112233".into(),
            hizmet_turu: "Evden Eve Nakliyat".into(),
            nereden_adres: "Kadıköy, İstanbul".into(),
            nereye_adres: "Çankaya, Ankara".into(),
            tasinma_tarihi: "2026-09-01".into(),
            notlar: notlar.map(str::to_string),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn quote_message_contains_all_fields() {
        let msg = quote_message(&sample_quote(Some("Piyano var")));
        assert!(msg.contains("Yeni Teklif Talebi"));
        assert!(msg.contains("Ayşe Yılmaz"));
        assert!(msg.contains("ayse@example.com"));
        assert!(msg.contains("Evden Eve Nakliyat"));
        assert!(msg.contains("Kadıköy, İstanbul"));
        assert!(msg.contains("Piyano var"));
    }

    #[test]
    fn quote_message_falls_back_on_missing_notes() {
        assert!(quote_message(&sample_quote(None)).contains(FALLBACK));
        assert!(quote_message(&sample_quote(Some("  "))).contains(FALLBACK));
    }

    #[test]
    fn contact_message_field_order() {
        let m = iletisim::Model {
            id: Uuid::new_v4(),
            ad_soyad: "Ali Veli".into(),
            email: "a@b.com".into(),
            telefon: "5551112233".into(),
            mesaj: "Merhaba".into(),
            created_at: Utc::now().into(),
        };
        let msg = contact_message(&m);
        let name_at = msg.find("Ali Veli").expect("name present");
        let mail_at = msg.find("a@b.com").expect("email present");
        let body_at = msg.find("Merhaba").expect("message present");
        assert!(name_at < mail_at && mail_at < body_at);
    }
}
