use anyhow::Result;
use chrono::Utc;
use migration::MigratorTrait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use uuid::Uuid;

use crate::{admin_user, cms_page, db, iletisim, notification_target, service_item, teklif};

/// Connect and migrate, or `None` when the environment provides no database
/// (SKIP_DB_TESTS set or DATABASE_URL missing).
async fn setup_test_db() -> Result<Option<DatabaseConnection>> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(None);
    }
    let Ok(url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL missing; skip db tests");
        return Ok(None);
    };
    let mut cfg = configs::DatabaseConfig::default();
    cfg.url = url;
    let db = db::connect(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(Some(db))
}

#[tokio::test]
async fn test_teklif_create_stores_fields_verbatim() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };

    let input = teklif::NewTeklif {
        ad: "Mehmet".into(),
        soyad: "Demir".into(),
        email: format!("mehmet_{}@example.com", Uuid::new_v4()),
        telefon: "5329998877".into(),
        hizmet_turu: "Ofis Taşıma".into(),
        nereden_adres: "Levent, İstanbul".into(),
        nereye_adres: "Bornova, İzmir".into(),
        tasinma_tarihi: "2026-10-15".into(),
        notlar: Some("Arşiv dolapları var".into()),
    };
    let created = teklif::create(&db, input.clone()).await?;
    assert_eq!(created.ad, input.ad);
    assert_eq!(created.soyad, input.soyad);
    assert_eq!(created.email, input.email);
    assert_eq!(created.hizmet_turu, input.hizmet_turu);
    assert_eq!(created.notlar, input.notlar);

    let found = teklif::Entity::find_by_id(created.id).one(&db).await?;
    assert_eq!(found.as_ref().map(|m| m.nereden_adres.as_str()), Some("Levent, İstanbul"));

    teklif::Entity::delete_by_id(created.id).exec(&db).await?;
    Ok(())
}

#[tokio::test]
async fn test_teklif_rejects_invalid_email() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };

    let input = teklif::NewTeklif {
        ad: "Ayşe".into(),
        soyad: "Yılmaz".into(),
        email: "not-an-email".into(),
        telefon: "5551112233".into(),
        hizmet_turu: "Evden Eve".into(),
        nereden_adres: "İstanbul".into(),
        nereye_adres: "Ankara".into(),
        tasinma_tarihi: "2026-09-01".into(),
        notlar: None,
    };
    assert!(teklif::create(&db, input).await.is_err());
    Ok(())
}

#[tokio::test]
async fn test_iletisim_create_and_count() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };

    let before = iletisim::count(&db).await?;
    let created =
        iletisim::create(&db, "Ali Veli", "a@b.com", "5551112233", "Merhaba").await?;
    assert_eq!(created.ad_soyad, "Ali Veli");
    assert_eq!(iletisim::count(&db).await?, before + 1);

    iletisim::Entity::delete_by_id(created.id).exec(&db).await?;
    Ok(())
}

#[tokio::test]
async fn test_cms_page_inactive_invisible_to_slug_lookup() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };

    let now = Utc::now().into();
    let active_slug = format!("hakkimizda-{}", Uuid::new_v4());
    let inactive_slug = format!("taslak-{}", Uuid::new_v4());
    let mut ids = Vec::new();
    for (slug, is_active) in [(&active_slug, true), (&inactive_slug, false)] {
        let am = cms_page::ActiveModel {
            id: Set(Uuid::new_v4()),
            slug: Set(slug.clone()),
            title: Set("Sayfa".into()),
            body_html: Set("<p>icerik</p>".into()),
            meta_title: Set(None),
            meta_description: Set(None),
            is_active: Set(is_active),
            created_at: Set(now),
            updated_at: Set(now),
        };
        ids.push(am.insert(&db).await?.id);
    }

    let found = cms_page::find_active_by_slug(&db, &active_slug).await?;
    assert_eq!(found.map(|p| p.slug), Some(active_slug));
    assert!(cms_page::find_active_by_slug(&db, &inactive_slug).await?.is_none());

    let listed = cms_page::list_active(&db).await?;
    assert!(listed.iter().all(|p| p.slug != inactive_slug));

    for id in ids {
        cms_page::Entity::delete_by_id(id).exec(&db).await?;
    }
    Ok(())
}

#[tokio::test]
async fn test_services_active_filter_and_ordering() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };

    let now = Utc::now().into();
    let marker = format!("svc-{}", Uuid::new_v4());
    let mut ids = Vec::new();
    for (title, is_active, sort_order) in
        [("b", true, 20), ("a", true, 10), ("gizli", false, 0)]
    {
        let am = service_item::ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(format!("{} {}", marker, title)),
            description: Set("Nakliyat hizmeti".into()),
            image_url: Set(None),
            is_active: Set(is_active),
            sort_order: Set(sort_order),
            created_at: Set(now),
            updated_at: Set(now),
        };
        ids.push(am.insert(&db).await?.id);
    }

    let listed: Vec<_> = service_item::list_active(&db)
        .await?
        .into_iter()
        .filter(|s| s.title.starts_with(&marker))
        .collect();
    assert_eq!(listed.len(), 2);
    // Ascending sort_order: "a" (10) before "b" (20); the inactive row is gone.
    assert!(listed[0].title.ends_with(" a"));
    assert!(listed[1].title.ends_with(" b"));

    for id in ids {
        service_item::Entity::delete_by_id(id).exec(&db).await?;
    }
    Ok(())
}

#[tokio::test]
async fn test_admin_user_find_by_subject() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };

    let subject = format!("auth0|{}", Uuid::new_v4());
    let am = admin_user::ActiveModel {
        id: Set(Uuid::new_v4()),
        subject: Set(subject.clone()),
        role: Set("admin".into()),
        created_at: Set(Utc::now().into()),
    };
    let created = am.insert(&db).await?;

    assert!(admin_user::find_by_subject(&db, &subject).await?.is_some());
    assert!(admin_user::find_by_subject(&db, "auth0|nonexistent").await?.is_none());

    admin_user::Entity::delete_by_id(created.id).exec(&db).await?;
    Ok(())
}

#[tokio::test]
async fn test_notification_targets_active_set() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };

    let mut ids = Vec::new();
    for (chat_id, is_active) in [(990001_i64, true), (990002, false)] {
        let am = notification_target::ActiveModel {
            id: Set(Uuid::new_v4()),
            chat_id: Set(chat_id),
            label: Set(Some("test".into())),
            is_active: Set(is_active),
        };
        ids.push(am.insert(&db).await?.id);
    }

    let active = notification_target::list_active(&db).await?;
    assert!(active.iter().any(|t| t.chat_id == 990001));
    assert!(active.iter().all(|t| t.chat_id != 990002));

    for id in ids {
        notification_target::Entity::delete_by_id(id).exec(&db).await?;
    }
    Ok(())
}
