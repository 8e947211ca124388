//! Maud templates for every rendered page.
use maud::{html, Markup, PreEscaped, DOCTYPE};

use models::{cms_page, gallery_item, service_item, testimonial};

const SITE_NAME: &str = "Atlas Nakliyat";

/// Static marketing counters shown on the home page.
const STATS: &[(&str, &str)] = &[
    ("25+", "Yıllık Tecrübe"),
    ("10.000+", "Tamamlanan Taşıma"),
    ("81", "İle Hizmet"),
    ("%98", "Müşteri Memnuniyeti"),
];

const FEATURES: &[(&str, &str)] = &[
    ("Sigortalı Taşıma", "Tüm eşyalarınız taşıma süresince sigorta kapsamındadır."),
    ("Profesyonel Ekip", "Paketlemeden kuruluma deneyimli ekip eşlik eder."),
    ("Ücretsiz Keşif", "Taşınma öncesi adresinizde ücretsiz keşif yapılır."),
];

pub fn layout(title: &str, description: Option<&str>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="tr" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " | " (SITE_NAME) }
                @if let Some(description) = description {
                    meta name="description" content=(description);
                }
            }
            body {
                header class="site-header" {
                    a class="logo" href="/" { (SITE_NAME) }
                    nav {
                        a href="/hizmetler" { "Hizmetlerimiz" }
                        a href="/galeri" { "Galeri" }
                        a href="/hakkimizda" { "Hakkımızda" }
                        a href="/iletisim" { "İletişim" }
                    }
                }
                main { (content) }
                footer class="site-footer" {
                    p { "© " (SITE_NAME) " — Evden eve nakliyat, ofis taşıma, depolama" }
                }
            }
        }
    }
}

fn services_section(services: &[service_item::Model]) -> Markup {
    html! {
        section class="services" {
            h2 { "Hizmetlerimiz" }
            div class="service-grid" {
                @for service in services {
                    article class="service-card" {
                        @if let Some(image_url) = &service.image_url {
                            img src=(image_url) alt=(service.title);
                        }
                        h3 { (service.title) }
                        p { (service.description) }
                    }
                }
            }
        }
    }
}

fn testimonials_section(testimonials: &[testimonial::Model]) -> Markup {
    html! {
        @if !testimonials.is_empty() {
            section class="testimonials" {
                h2 { "Müşterilerimiz Ne Diyor?" }
                div class="testimonial-grid" {
                    @for t in testimonials {
                        blockquote class="testimonial" {
                            span class="stars" { (star_row(t.rating)) }
                            p { (t.comment) }
                            cite { (t.author) }
                        }
                    }
                }
            }
        }
    }
}

fn star_row(rating: i16) -> String {
    let filled = rating.clamp(0, 5) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

pub fn home(services: &[service_item::Model], testimonials: &[testimonial::Model]) -> Markup {
    let content = html! {
        section class="hero" {
            h1 { "Eşyalarınız Bizimle Güvende" }
            p { "Evden eve nakliyat, ofis taşıma ve depolamada yılların tecrübesi." }
            a class="cta" href="/iletisim" { "Ücretsiz Teklif Al" }
        }
        (services_section(services))
        section class="features" {
            @for (title, text) in FEATURES {
                div class="feature" {
                    h3 { (title) }
                    p { (text) }
                }
            }
        }
        section class="stats" {
            @for (value, label) in STATS {
                div class="stat" {
                    strong { (value) }
                    span { (label) }
                }
            }
        }
        (testimonials_section(testimonials))
    };
    layout(
        "Ana Sayfa",
        Some("Evden eve nakliyat, ofis taşıma ve depolama hizmetleri."),
        content,
    )
}

pub fn services_page(services: &[service_item::Model]) -> Markup {
    layout(
        "Hizmetlerimiz",
        Some("Sunduğumuz nakliyat ve depolama hizmetleri."),
        services_section(services),
    )
}

pub fn gallery_page(items: &[gallery_item::Model]) -> Markup {
    let content = html! {
        section class="gallery" {
            h1 { "Galeri" }
            div class="gallery-grid" {
                @for item in items {
                    figure {
                        img src=(item.image_url) alt=(item.title);
                        figcaption {
                            strong { (item.title) }
                            @if let Some(description) = &item.description {
                                p { (description) }
                            }
                        }
                    }
                }
            }
        }
    };
    layout("Galeri", None, content)
}

pub fn cms_page(page: &cms_page::Model) -> Markup {
    let title = page.meta_title.as_deref().unwrap_or(&page.title);
    let content = html! {
        article class="cms-body" {
            h1 { (page.title) }
            // Body HTML is authored in the admin editor and stored verbatim.
            (PreEscaped(page.body_html.clone()))
        }
    };
    layout(title, page.meta_description.as_deref(), content)
}

pub fn not_found() -> Markup {
    layout(
        "Sayfa Bulunamadı",
        None,
        html! {
            section class="not-found" {
                h1 { "404" }
                p { "Aradığınız sayfa taşınmış ya da hiç var olmamış olabilir." }
                a href="/" { "Ana sayfaya dön" }
            }
        },
    )
}

pub fn login() -> Markup {
    layout(
        "Yönetici Girişi",
        None,
        html! {
            section class="admin-login" {
                h1 { "Yönetici Girişi" }
                form method="post" action="/auth/v1/token" {
                    label { "E-posta" input type="email" name="email" required; }
                    label { "Şifre" input type="password" name="password" required; }
                    button type="submit" { "Giriş Yap" }
                }
            }
        },
    )
}

pub fn dashboard(stats: &[(&str, u64)]) -> Markup {
    let max = stats.iter().map(|(_, n)| *n).max().unwrap_or(0).max(1);
    layout(
        "Yönetim Paneli",
        None,
        html! {
            section class="admin-dashboard" {
                h1 { "Yönetim Paneli" }
                ul class="stat-bars" {
                    @for (label, value) in stats {
                        @let width = ((*value as f64 / max as f64) * 100.0).round() as u64;
                        li {
                            span class="label" { (label) }
                            span class="bar" style=(format!("width:{}%", width.max(2))) {}
                            span class="value" { (value) }
                        }
                    }
                }
                p { a href="/admin/icerik" { "İçerik düzenleyiciyi aç" } }
            }
        },
    )
}

pub fn editor(api_key: Option<&str>) -> Markup {
    let script_src = format!(
        "https://cdn.tiny.cloud/1/{}/tinymce/6/tinymce.min.js",
        api_key.unwrap_or("no-api-key")
    );
    layout(
        "İçerik Düzenleyici",
        None,
        html! {
            section class="admin-editor" {
                h1 { "İçerik Düzenleyici" }
                textarea id="icerik-editor" {}
                script src=(script_src) referrerpolicy="origin" {}
                script {
                    (PreEscaped(r#"
                    tinymce.init({
                        selector: '#icerik-editor',
                        language: 'tr',
                        plugins: 'image link lists table',
                        images_upload_url: '/api/admin/upload',
                        automatic_uploads: true
                    });
                    "#))
                }
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    #[test]
    fn cms_body_is_rendered_verbatim() {
        let now = Utc::now().into();
        let page = cms_page::Model {
            id: Uuid::new_v4(),
            slug: "hakkimizda".into(),
            title: "Hakkımızda".into(),
            body_html: "<p>1995'ten beri <strong>taşıyoruz</strong>.</p>".into(),
            meta_title: None,
            meta_description: None,
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        let html = cms_page(&page).into_string();
        assert!(html.contains("<p>1995'ten beri <strong>taşıyoruz</strong>.</p>"));
    }

    #[test]
    fn user_content_is_escaped() {
        let now = Utc::now().into();
        let t = testimonial::Model {
            id: Uuid::new_v4(),
            author: "<script>alert(1)</script>".into(),
            rating: 5,
            comment: "Harika".into(),
            sort_order: 0,
            created_at: now,
        };
        let html = home(&[], &[t]).into_string();
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn star_row_clamps_rating() {
        assert_eq!(star_row(5), "★★★★★");
        assert_eq!(star_row(3), "★★★☆☆");
        assert_eq!(star_row(9), "★★★★★");
        assert_eq!(star_row(-2), "☆☆☆☆☆");
    }
}
