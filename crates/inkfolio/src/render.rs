//! Terminal rendering of the page model.

use inkfolio_common::truncate_chars;
use inkfolio_site::PageView;
use std::fmt::{self, Write};

/// Longest description shown on a card before it is cut.
pub const CARD_TEXT_LIMIT: usize = 72;

/// Render the page as plain text
#[must_use]
pub fn render_text(page: &PageView) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_page(&mut out, page);
    out
}

/// Render the page model as pretty-printed JSON
pub fn render_json(page: &PageView) -> serde_json::Result<String> {
    serde_json::to_string_pretty(page)
}

fn heading(out: &mut String, title: &str) -> fmt::Result {
    writeln!(out)?;
    writeln!(out, "== {title} ==")
}

fn write_page(out: &mut String, page: &PageView) -> fmt::Result {
    let header = &page.header;
    let languages: Vec<String> = header
        .languages
        .iter()
        .map(|option| {
            if option.active {
                format!("[{}]", option.name)
            } else {
                option.name.to_string()
            }
        })
        .collect();
    writeln!(out, "{}  |  {}: {}", header.brand, header.language_label, languages.join(" "))?;
    let nav: Vec<String> = header
        .nav
        .iter()
        .map(|link| format!("{} (#{})", link.label, link.anchor))
        .collect();
    writeln!(out, "{}: {}", header.menu_label, nav.join(" · "))?;

    let hero = &page.hero;
    heading(out, &hero.title)?;
    writeln!(out, "{}", hero.subtitle)?;
    writeln!(out, "{}", hero.description)?;
    for action in &hero.actions {
        writeln!(out, "  > {} (#{})", action.label, action.target.anchor())?;
    }
    writeln!(out, "  \"{}\"", hero.bubble)?;

    let gallery = &page.gallery;
    heading(out, &gallery.title)?;
    writeln!(out, "{}", gallery.subtitle)?;
    let filters: Vec<String> = gallery
        .filters
        .iter()
        .map(|f| {
            if f.active {
                format!("[{}]", f.label)
            } else {
                f.label.to_string()
            }
        })
        .collect();
    writeln!(out, "{}", filters.join(" "))?;
    for artwork in &gallery.artworks {
        let heart = if artwork.liked { "♥" } else { "♡" };
        writeln!(out, "  #{} {} {} {}", artwork.id, artwork.title, heart, artwork.likes)?;
        writeln!(out, "     {}", truncate_chars(&artwork.description, CARD_TEXT_LIMIT))?;
    }
    writeln!(out, "  {}", gallery.view_more)?;

    let about = &page.about;
    heading(out, &about.title)?;
    writeln!(out, "{}", about.subtitle)?;
    writeln!(out, "{}", about.intro)?;
    writeln!(out, "  {} | {}", about.location, about.experience)?;
    writeln!(out, "{}: {}", about.specialties_heading, about.specialties.join(", "))?;
    writeln!(out, "{}:", about.journey_heading)?;
    for entry in &about.timeline {
        writeln!(out, "  {} {}: {}", entry.year, entry.title, entry.description)?;
    }

    let commissions = &page.commissions;
    heading(out, &commissions.title)?;
    writeln!(out, "{}", commissions.subtitle)?;
    for package in &commissions.packages {
        let badge = if package.popular {
            format!(" [{}]", commissions.popular_badge)
        } else {
            String::new()
        };
        let marker = if package.selected { "*" } else { "-" };
        writeln!(out, "  {marker} {} {}{badge}", package.name, package.price)?;
        for feature in &package.features {
            writeln!(out, "      {feature}")?;
        }
    }
    let form = &commissions.form;
    writeln!(
        out,
        "{}: {}: {}",
        form.title,
        form.package_label,
        form.selected_package.as_deref().unwrap_or(form.package_placeholder)
    )?;
    if let Some(success) = form.success {
        writeln!(out, "  {success}")?;
    }

    let wall = &page.fan_wall;
    heading(out, &wall.title)?;
    writeln!(out, "{}", wall.subtitle)?;
    for comment in &wall.comments {
        let replied = if comment.replied {
            format!(" [{}]", wall.replied_badge)
        } else {
            String::new()
        };
        let heart = if comment.liked { "♥" } else { "♡" };
        writeln!(
            out,
            "  {} {} ({}){replied} {heart} {}",
            comment.avatar, comment.name, comment.posted, comment.likes
        )?;
        writeln!(out, "     {}", truncate_chars(&comment.message, CARD_TEXT_LIMIT))?;
    }
    writeln!(out, "{} {}", wall.share_prompt, wall.share_invite)?;

    let contact = &page.contact;
    heading(out, &contact.title)?;
    writeln!(out, "{}", contact.subtitle)?;
    writeln!(out, "{}:", contact.info_heading)?;
    for item in &contact.info {
        writeln!(out, "  {}: {}", item.heading, item.value)?;
    }
    let social: Vec<String> = contact
        .social
        .iter()
        .map(|link| format!("{} {}", link.network, link.handle))
        .collect();
    writeln!(out, "{}: {}", contact.social_title, social.join(", "))?;
    if let Some(success) = contact.success {
        writeln!(out, "  {success}")?;
    }

    let footer = &page.footer;
    writeln!(out)?;
    writeln!(out, "{} - {}", footer.studio, footer.tagline)?;
    writeln!(out, "\"{}\"", footer.quote)?;
    writeln!(out, "{}", footer.copyright)
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkfolio_config::MemoryPreferenceStore;
    use inkfolio_i18n::{LanguageCode, LocaleCatalog};
    use inkfolio_site::Site;
    use std::sync::Arc;

    fn site() -> Site {
        Site::new(
            LocaleCatalog::shared().unwrap(),
            Arc::new(MemoryPreferenceStore::new()),
        )
    }

    #[test]
    fn test_text_lists_every_section() {
        let page = site().page();
        let text = render_text(&page);

        assert!(text.starts_with(page.header.brand));
        for title in [
            &page.hero.title,
            &page.gallery.title,
            &page.about.title,
            &page.commissions.title,
            &page.fan_wall.title,
            &page.contact.title,
        ] {
            assert!(text.contains(&format!("== {title} ==")), "missing {title}");
        }
        assert!(text.contains(&page.footer.copyright));
    }

    #[test]
    fn test_text_follows_language() {
        let site = site();
        site.set_language(LanguageCode::Jp);
        let text = render_text(&site.page());

        assert!(text.contains("[日本語]"));
        assert!(text.contains("ゴムの魂"));
        assert!(!text.contains("Rubber Soul"));
    }

    #[test]
    fn test_card_text_is_truncated() {
        let text = render_text(&site().page());
        for line in text.lines().filter(|line| line.starts_with("     ")) {
            assert!(line.trim_start().chars().count() <= CARD_TEXT_LIMIT);
        }
    }

    #[test]
    fn test_json_matches_page_model() {
        let page = site().page();
        let json: serde_json::Value = serde_json::from_str(&render_json(&page).unwrap()).unwrap();
        assert_eq!(json["language"], "en");
        assert_eq!(json["gallery"]["artworks"].as_array().map(Vec::len), Some(8));
    }
}
