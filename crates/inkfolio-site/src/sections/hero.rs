//! Hero banner.

use crate::context::LanguageSnapshot;
use crate::selector::Localized;
use inkfolio_common::SectionId;
use serde::Serialize;

/// Hero copy not shared through the locale catalog
#[derive(Debug, Clone, Copy)]
pub struct HeroCopy {
    pub description: &'static str,
    pub commission_cta: &'static str,
    pub bubble: &'static str,
}

/// Hero copy per language.
pub const HERO_COPY: Localized<HeroCopy> = Localized::new(
    HeroCopy {
        description: "Step into a world where every stroke tells a story, every shade whispers emotion, and every character comes alive through the magic of digital ink.",
        commission_cta: "Commission Art",
        bubble: "Let's create something amazing together!",
    },
    HeroCopy {
        description: "すべてのストロークが物語を語り、すべての色合いが感情をささやき、すべてのキャラクターがデジタルインクの魔法を通して生き生きとする世界に足を踏み入れてください。",
        commission_cta: "アートを依頼",
        bubble: "一緒に素晴らしいものを作りましょう！",
    },
);

/// Call to action button
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallToAction {
    pub label: String,
    pub target: SectionId,
}

/// Rendered hero banner
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeroView {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub actions: Vec<CallToAction>,
    pub bubble: String,
}

/// Render the hero banner
#[must_use]
pub fn view(snapshot: &LanguageSnapshot) -> HeroView {
    let strings = &snapshot.bundle().hero;
    let copy = HERO_COPY.get(snapshot.language());

    HeroView {
        title: strings.title.clone(),
        subtitle: strings.subtitle.clone(),
        description: copy.description.to_string(),
        actions: vec![
            CallToAction {
                label: strings.cta_button.clone(),
                target: SectionId::Gallery,
            },
            CallToAction {
                label: copy.commission_cta.to_string(),
                target: SectionId::Commissions,
            },
        ],
        bubble: copy.bubble.to_string(),
    }
}
