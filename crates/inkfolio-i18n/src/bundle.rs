//! Typed locale bundles
//!
//! A [`LocaleBundle`] is the fully resolved set of shared UI strings for one
//! language. Each field is filled from a Fluent message id; the id list is
//! the completeness contract every `locales/<code>/main.ftl` must satisfy.

use crate::error::I18nResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Source of message text used while building a bundle
pub(crate) trait MessageSource {
    /// Text for the given message id
    fn message(&mut self, key: &'static str) -> String;
}

/// Records requested ids without resolving anything
#[derive(Default)]
struct KeyCollector {
    keys: Vec<&'static str>,
}

impl MessageSource for KeyCollector {
    fn message(&mut self, key: &'static str) -> String {
        self.keys.push(key);
        String::new()
    }
}

/// Shared UI strings for one language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleBundle {
    /// Footer strings
    pub footer: FooterStrings,
    /// Header strings
    pub header: HeaderStrings,
    /// Hero banner strings
    pub hero: HeroStrings,
    /// Gallery strings
    pub gallery: GalleryStrings,
    /// About section strings
    pub about: AboutStrings,
    /// Commission section strings
    pub commissions: CommissionStrings,
    /// Contact section strings
    pub contact: ContactStrings,
    /// Fan wall strings
    pub fan_wall: FanWallStrings,
}

/// Footer strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterStrings {
    pub tagline: String,
    pub copyright: String,
    pub links: FooterLinks,
    pub social: FooterSocial,
    pub quote: String,
    pub quick_links: String,
    pub stay_updated: String,
    pub notification_info: String,
    pub subscribe: String,
    pub back_to_adventure: String,
}

/// Footer quick link labels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterLinks {
    pub home: String,
    pub gallery: String,
    pub about: String,
    pub commissions: String,
    pub contact: String,
}

/// Footer social block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterSocial {
    pub title: String,
    pub instagram: String,
    pub twitter: String,
    pub pixiv: String,
    pub artstation: String,
}

/// Header strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderStrings {
    pub menu: String,
    pub language: String,
}

/// Hero banner strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroStrings {
    pub title: String,
    pub subtitle: String,
    pub cta_button: String,
}

/// Gallery strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryStrings {
    pub title: String,
    pub subtitle: String,
    pub categories: GalleryCategories,
}

/// Gallery category labels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryCategories {
    pub all: String,
    pub characters: String,
    pub landscapes: String,
    pub action: String,
}

/// About section strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutStrings {
    pub title: String,
    pub story: String,
    pub skills: String,
}

/// Commission section strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommissionStrings {
    pub title: String,
    pub status_open: String,
    pub status_closed: String,
    pub pricing: String,
    pub cta: String,
}

/// Contact section strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactStrings {
    pub title: String,
    pub form_name: String,
    pub form_email: String,
    pub form_message: String,
    pub form_submit: String,
}

/// Fan wall strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FanWallStrings {
    pub title: String,
    pub subtitle: String,
    pub share_button: String,
}

impl LocaleBundle {
    pub(crate) fn build(m: &mut impl MessageSource) -> Self {
        Self {
            footer: FooterStrings {
                tagline: m.message("footer-tagline"),
                copyright: m.message("footer-copyright"),
                links: FooterLinks {
                    home: m.message("footer-links-home"),
                    gallery: m.message("footer-links-gallery"),
                    about: m.message("footer-links-about"),
                    commissions: m.message("footer-links-commissions"),
                    contact: m.message("footer-links-contact"),
                },
                social: FooterSocial {
                    title: m.message("footer-social-title"),
                    instagram: m.message("footer-social-instagram"),
                    twitter: m.message("footer-social-twitter"),
                    pixiv: m.message("footer-social-pixiv"),
                    artstation: m.message("footer-social-artstation"),
                },
                quote: m.message("footer-quote"),
                quick_links: m.message("footer-quick-links"),
                stay_updated: m.message("footer-stay-updated"),
                notification_info: m.message("footer-notification-info"),
                subscribe: m.message("footer-subscribe"),
                back_to_adventure: m.message("footer-back-to-adventure"),
            },
            header: HeaderStrings {
                menu: m.message("header-menu"),
                language: m.message("header-language"),
            },
            hero: HeroStrings {
                title: m.message("hero-title"),
                subtitle: m.message("hero-subtitle"),
                cta_button: m.message("hero-cta-button"),
            },
            gallery: GalleryStrings {
                title: m.message("gallery-title"),
                subtitle: m.message("gallery-subtitle"),
                categories: GalleryCategories {
                    all: m.message("gallery-categories-all"),
                    characters: m.message("gallery-categories-characters"),
                    landscapes: m.message("gallery-categories-landscapes"),
                    action: m.message("gallery-categories-action"),
                },
            },
            about: AboutStrings {
                title: m.message("about-title"),
                story: m.message("about-story"),
                skills: m.message("about-skills"),
            },
            commissions: CommissionStrings {
                title: m.message("commissions-title"),
                status_open: m.message("commissions-status-open"),
                status_closed: m.message("commissions-status-closed"),
                pricing: m.message("commissions-pricing"),
                cta: m.message("commissions-cta"),
            },
            contact: ContactStrings {
                title: m.message("contact-title"),
                form_name: m.message("contact-form-name"),
                form_email: m.message("contact-form-email"),
                form_message: m.message("contact-form-message"),
                form_submit: m.message("contact-form-submit"),
            },
            fan_wall: FanWallStrings {
                title: m.message("fan-wall-title"),
                subtitle: m.message("fan-wall-subtitle"),
                share_button: m.message("fan-wall-share-button"),
            },
        }
    }

    /// Every Fluent message id a bundle is built from, in field order
    #[must_use]
    pub fn message_keys() -> Vec<&'static str> {
        let mut collector = KeyCollector::default();
        Self::build(&mut collector);
        collector.keys
    }

    /// Dotted paths of every string leaf, e.g. `footer.links.home`
    ///
    /// Two bundles with equal paths have the same structure.
    pub fn key_paths(&self) -> I18nResult<Vec<String>> {
        let value = serde_json::to_value(self)?;
        let mut paths = Vec::new();
        collect_paths(&value, String::new(), &mut paths);
        paths.sort();
        Ok(paths)
    }
}

fn collect_paths(value: &Value, prefix: String, paths: &mut Vec<String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                collect_paths(child, path, paths);
            }
        }
        _ => paths.push(prefix),
    }
}
