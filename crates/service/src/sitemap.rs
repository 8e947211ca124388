//! Sitemap and robots.txt assembly.
//!
//! Table reads are partial-failure tolerant: a failing category is logged and
//! contributes nothing, and the document is still produced.
use sea_orm::DatabaseConnection;
use tracing::warn;

use models::{cms_page, service_item, site_settings};

const DEFAULT_BASE_URL: &str = "https://www.atlasnakliyat.com";
const DEFAULT_CHANGE_FREQ: &str = "weekly";
const DEFAULT_PRIORITY: f64 = 0.8;

pub const ROBOTS_FALLBACK: &str = "User-agent: *\nAllow: /";

/// Static site paths and their hardcoded priorities.
const STATIC_PATHS: &[(&str, &str)] = &[
    ("/hizmetler", "0.9"),
    ("/iletisim", "0.8"),
    ("/hakkimizda", "0.7"),
    ("/galeri", "0.6"),
];

/// Table-backed inputs of one sitemap build.
#[derive(Default)]
pub struct SitemapSources {
    pub pages: Vec<cms_page::Model>,
    pub services: Vec<service_item::Model>,
}

/// Read settings and the active content tables concurrently, tolerating
/// per-table failures.
pub async fn collect(
    db: &DatabaseConnection,
) -> (Option<site_settings::Model>, SitemapSources) {
    let (settings, pages, services) = tokio::join!(
        site_settings::get(db),
        cms_page::list_active(db),
        service_item::list_active(db),
    );
    let settings = settings.unwrap_or_else(|e| {
        warn!(error = %e, "sitemap: site settings read failed");
        None
    });
    let pages = pages.unwrap_or_else(|e| {
        warn!(error = %e, "sitemap: cms pages read failed");
        Vec::new()
    });
    let services = services.unwrap_or_else(|e| {
        warn!(error = %e, "sitemap: services read failed");
        Vec::new()
    });
    (settings, SitemapSources { pages, services })
}

/// Render the sitemap document from already-collected records.
pub fn render(settings: Option<&site_settings::Model>, sources: &SitemapSources) -> String {
    let base = settings
        .map(|s| s.base_url.trim_end_matches('/'))
        .filter(|b| !b.is_empty())
        .unwrap_or(DEFAULT_BASE_URL);
    let change_freq = settings
        .map(|s| s.sitemap_change_freq.as_str())
        .filter(|f| !f.is_empty())
        .unwrap_or(DEFAULT_CHANGE_FREQ);
    let priority = format!(
        "{:.1}",
        settings.map(|s| s.sitemap_priority).unwrap_or(DEFAULT_PRIORITY)
    );

    let mut out = String::with_capacity(1024);
    out.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    out.push('\n');
    out.push_str(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#);
    out.push('\n');

    // Home is always present at full priority.
    push_url(&mut out, base, "/", None, "daily", "1.0");

    for (path, prio) in STATIC_PATHS {
        push_url(&mut out, base, path, None, change_freq, prio);
    }
    for page in &sources.pages {
        let lastmod = page.updated_at.format("%Y-%m-%d").to_string();
        push_url(
            &mut out,
            base,
            &format!("/{}", page.slug),
            Some(&lastmod),
            change_freq,
            &priority,
        );
    }
    for svc in &sources.services {
        let lastmod = svc.updated_at.format("%Y-%m-%d").to_string();
        push_url(
            &mut out,
            base,
            &format!("/hizmet/{}", svc.id),
            Some(&lastmod),
            change_freq,
            &priority,
        );
    }

    out.push_str("</urlset>\n");
    out
}

pub async fn build(db: &DatabaseConnection) -> String {
    let (settings, sources) = collect(db).await;
    render(settings.as_ref(), &sources)
}

/// robots.txt body: the stored blob, or the permissive default.
pub fn robots_txt(settings: Option<&site_settings::Model>) -> String {
    settings
        .and_then(|s| s.robots_txt.clone())
        .filter(|body| !body.trim().is_empty())
        .unwrap_or_else(|| ROBOTS_FALLBACK.to_string())
}

fn push_url(
    out: &mut String,
    base: &str,
    path: &str,
    lastmod: Option<&str>,
    change_freq: &str,
    priority: &str,
) {
    let loc = if path == "/" {
        format!("{}/", base)
    } else {
        format!("{}{}", base, path)
    };
    out.push_str("  <url>\n");
    out.push_str(&format!("    <loc>{}</loc>\n", xml_escape(&loc)));
    if let Some(lastmod) = lastmod {
        out.push_str(&format!("    <lastmod>{}</lastmod>\n", lastmod));
    }
    out.push_str(&format!("    <changefreq>{}</changefreq>\n", change_freq));
    out.push_str(&format!("    <priority>{}</priority>\n", priority));
    out.push_str("  </url>\n");
}

fn xml_escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn page(slug: &str, active: bool) -> cms_page::Model {
        let now = Utc::now().into();
        cms_page::Model {
            id: Uuid::new_v4(),
            slug: slug.into(),
            title: slug.into(),
            body_html: "<p>icerik</p>".into(),
            meta_title: None,
            meta_description: None,
            is_active: active,
            created_at: now,
            updated_at: now,
        }
    }

    fn settings(base_url: &str) -> site_settings::Model {
        site_settings::Model {
            id: Uuid::new_v4(),
            site_name: "Atlas Nakliyat".into(),
            base_url: base_url.into(),
            meta_description: None,
            robots_txt: None,
            sitemap_change_freq: "weekly".into(),
            sitemap_priority: 0.8,
            updated_at: Utc::now().into(),
        }
    }

    #[test]
    fn home_always_present_with_full_priority() {
        let xml = render(None, &SitemapSources::default());
        assert!(xml.contains(&format!("<loc>{}/</loc>", DEFAULT_BASE_URL)));
        assert!(xml.contains("<priority>1.0</priority>"));
    }

    #[test]
    fn active_pages_appear_exactly_once() {
        // The read path already filtered inactive rows; render everything given.
        let sources = SitemapSources {
            pages: vec![page("hakkimizda-detay", true), page("sss", true)],
            services: vec![],
        };
        let s = settings("https://nakliyat.example.com");
        let xml = render(Some(&s), &sources);
        assert_eq!(
            xml.matches("<loc>https://nakliyat.example.com/hakkimizda-detay</loc>").count(),
            1
        );
        assert_eq!(xml.matches("<loc>https://nakliyat.example.com/sss</loc>").count(), 1);
    }

    #[test]
    fn base_url_trailing_slash_normalized() {
        let s = settings("https://nakliyat.example.com/");
        let xml = render(Some(&s), &SitemapSources::default());
        assert!(xml.contains("<loc>https://nakliyat.example.com/</loc>"));
        assert!(xml.contains("<loc>https://nakliyat.example.com/hizmetler</loc>"));
    }

    #[test]
    fn loc_is_xml_escaped() {
        let sources = SitemapSources {
            pages: vec![page("kampanya&indirim", true)],
            services: vec![],
        };
        let xml = render(None, &sources);
        assert!(xml.contains("kampanya&amp;indirim"));
        assert!(!xml.contains("kampanya&indirim<"));
    }

    #[test]
    fn robots_falls_back_when_absent() {
        assert_eq!(robots_txt(None), ROBOTS_FALLBACK);
        let mut s = settings("https://x.example.com");
        s.robots_txt = Some("  ".into());
        assert_eq!(robots_txt(Some(&s)), ROBOTS_FALLBACK);
        s.robots_txt = Some("User-agent: *\nDisallow: /admin".into());
        assert_eq!(robots_txt(Some(&s)), "User-agent: *\nDisallow: /admin");
    }
}
