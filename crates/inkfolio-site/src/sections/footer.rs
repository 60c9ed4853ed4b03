//! Footer, rendered entirely from the locale bundle.

use crate::context::LanguageSnapshot;
use inkfolio_common::SectionId;
use serde::Serialize;

/// Studio name shown in the footer.
pub const STUDIO_NAME: &str = "Luffy's Art Studio";

/// Footer quick link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FooterLinkView {
    pub label: String,
    pub anchor: &'static str,
}

/// Rendered footer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterView {
    pub studio: &'static str,
    pub tagline: String,
    pub quick_links_title: String,
    pub quick_links: Vec<FooterLinkView>,
    pub social_title: String,
    pub social: Vec<String>,
    pub stay_updated: String,
    pub notification_info: String,
    pub subscribe: String,
    pub quote: String,
    pub back_to_top: String,
    pub copyright: String,
}

/// Render the footer
#[must_use]
pub fn view(snapshot: &LanguageSnapshot) -> FooterView {
    let footer = &snapshot.bundle().footer;
    let links = &footer.links;
    let social = &footer.social;

    let quick_links = [
        (&links.home, SectionId::Hero),
        (&links.gallery, SectionId::Gallery),
        (&links.about, SectionId::About),
        (&links.commissions, SectionId::Commissions),
        (&links.contact, SectionId::Contact),
    ]
    .into_iter()
    .map(|(label, target)| FooterLinkView {
        label: label.clone(),
        anchor: target.anchor(),
    })
    .collect();

    FooterView {
        studio: STUDIO_NAME,
        tagline: footer.tagline.clone(),
        quick_links_title: footer.quick_links.clone(),
        quick_links,
        social_title: social.title.clone(),
        social: vec![
            social.instagram.clone(),
            social.twitter.clone(),
            social.pixiv.clone(),
            social.artstation.clone(),
        ],
        stay_updated: footer.stay_updated.clone(),
        notification_info: footer.notification_info.clone(),
        subscribe: footer.subscribe.clone(),
        quote: footer.quote.clone(),
        back_to_top: footer.back_to_adventure.clone(),
        copyright: footer.copyright.clone(),
    }
}
