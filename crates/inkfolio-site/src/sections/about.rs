//! About the artist: introduction, specialties and timeline.

use crate::context::LanguageSnapshot;
use crate::selector::{select, Localize, Localized};
use inkfolio_i18n::LanguageCode;
use serde::Serialize;

/// About copy not shared through the locale catalog
#[derive(Debug, Clone, Copy)]
pub struct AboutCopy {
    pub intro: &'static str,
    pub location: &'static str,
    pub experience: &'static str,
    pub specialties: [&'static str; 4],
    pub journey_heading: &'static str,
}

/// About copy per language.
pub const ABOUT_COPY: Localized<AboutCopy> = Localized::new(
    AboutCopy {
        intro: "Hey there! I'm a passionate manga artist who believes that every stroke tells a story. My journey started with simple doodles and grew into a full adventure of creating worlds and characters.",
        location: "Grand Line, New World",
        experience: "10+ Years Drawing",
        specialties: [
            "Character Design",
            "Action Scenes",
            "Emotional Storytelling",
            "Comic Panels",
        ],
        journey_heading: "My Journey",
    },
    AboutCopy {
        intro: "こんにちは！私は一筆一筆にストーリーがあると信じている情熱的なマンガアーティストです。私の旅は単純な落書きから始まり、世界とキャラクターを創造する冒険へと成長しました。",
        location: "グランドライン、新世界",
        experience: "10年以上の描画経験",
        specialties: [
            "キャラクターデザイン",
            "アクションシーン",
            "感情的なストーリーテリング",
            "コミックパネル",
        ],
        journey_heading: "私の旅",
    },
);

/// Milestone on the artist's timeline
#[derive(Debug, Clone, Copy)]
pub struct TimelineEntry {
    pub year: u16,
    pub title: Localized<&'static str>,
    pub description: Localized<&'static str>,
}

/// Timeline in chronological order.
pub static TIMELINE: [TimelineEntry; 6] = [
    TimelineEntry {
        year: 2014,
        title: Localized::new("First Sketch", "最初のスケッチ"),
        description: Localized::new(
            "Started drawing my favorite characters from manga and anime",
            "マンガやアニメの好きなキャラクターを描き始めました",
        ),
    },
    TimelineEntry {
        year: 2016,
        title: Localized::new("Art School", "美術学校"),
        description: Localized::new(
            "Enrolled in formal art education to improve my techniques",
            "技術向上のため正式な美術教育に入学しました",
        ),
    },
    TimelineEntry {
        year: 2018,
        title: Localized::new("Digital Transition", "デジタル移行"),
        description: Localized::new(
            "Began creating digital artwork and exploring new mediums",
            "デジタルアートワークの制作を開始し、新しいメディアを探求しました",
        ),
    },
    TimelineEntry {
        year: 2020,
        title: Localized::new("First Commission", "初の依頼"),
        description: Localized::new(
            "Received my first paid commission for original character design",
            "オリジナルキャラクターデザインで初の有料依頼を受けました",
        ),
    },
    TimelineEntry {
        year: 2022,
        title: Localized::new("Professional Artist", "プロのアーティスト"),
        description: Localized::new(
            "Became a full-time manga artist with regular clients",
            "定期的なクライアントを持つフルタイムのマンガアーティストになりました",
        ),
    },
    TimelineEntry {
        year: 2024,
        title: Localized::new("Current Adventures", "現在の冒険"),
        description: Localized::new(
            "Continuing to create amazing art and inspire others",
            "素晴らしいアートを作り続け、他の人にインスピレーションを与えています",
        ),
    },
];

/// Rendered timeline milestone
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineView {
    pub year: u16,
    pub title: String,
    pub description: String,
}

impl Localize for TimelineEntry {
    type View = TimelineView;

    fn localize(&self, language: LanguageCode) -> TimelineView {
        TimelineView {
            year: self.year,
            title: self.title.text(language),
            description: self.description.text(language),
        }
    }
}

/// Rendered about section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutView {
    pub title: String,
    pub subtitle: String,
    pub intro: String,
    pub location: String,
    pub experience: String,
    pub specialties_heading: String,
    pub specialties: Vec<String>,
    pub journey_heading: String,
    pub timeline: Vec<TimelineView>,
}

/// Render the about section
#[must_use]
pub fn view(snapshot: &LanguageSnapshot) -> AboutView {
    let language = snapshot.language();
    let strings = &snapshot.bundle().about;
    let copy = ABOUT_COPY.get(language);

    AboutView {
        title: strings.title.clone(),
        subtitle: strings.story.clone(),
        intro: copy.intro.to_string(),
        location: copy.location.to_string(),
        experience: copy.experience.to_string(),
        specialties_heading: strings.skills.clone(),
        specialties: copy.specialties.iter().map(ToString::to_string).collect(),
        journey_heading: copy.journey_heading.to_string(),
        timeline: select(language, &TIMELINE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeline_is_chronological_in_every_language() {
        for language in LanguageCode::ALL {
            let years: Vec<u16> = select(language, &TIMELINE).iter().map(|t| t.year).collect();
            assert_eq!(years, [2014, 2016, 2018, 2020, 2022, 2024]);
        }
    }

    #[test]
    fn test_timeline_translations() {
        let jp = select(LanguageCode::Jp, &TIMELINE);
        assert_eq!(jp[3].title, "初の依頼");
        let en = select(LanguageCode::En, &TIMELINE);
        assert_eq!(en[3].title, "First Commission");
    }
}
