//! Artwork gallery with category filter and likes.

use crate::context::LanguageSnapshot;
use crate::selector::{Localize, Localized};
use inkfolio_i18n::LanguageCode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use tracing::{debug, warn};

const ARTWORK_IMAGE: &str =
    "https://images.pexels.com/photos/1070537/pexels-photo-1070537.jpeg?auto=compress&cs=tinysrgb&w=600";

/// Identifier of an artwork in [`ARTWORKS`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ArtworkId(pub u32);

impl fmt::Display for ArtworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Medium an artwork belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtCategory {
    Sketch,
    Colored,
    Digital,
    Commissioned,
}

/// Gallery filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GalleryFilter {
    #[default]
    All,
    Sketch,
    Colored,
    Digital,
    Commissioned,
}

impl GalleryFilter {
    /// Filters in display order
    pub const ALL: [Self; 5] = [
        Self::All,
        Self::Sketch,
        Self::Colored,
        Self::Digital,
        Self::Commissioned,
    ];

    /// Stable key of the filter
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Sketch => "sketch",
            Self::Colored => "colored",
            Self::Digital => "digital",
            Self::Commissioned => "commissioned",
        }
    }

    /// Parse a filter key, ignoring case and surrounding whitespace
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        Self::ALL
            .into_iter()
            .find(|filter| filter.key().eq_ignore_ascii_case(key))
    }

    /// Whether artworks of `category` pass this filter
    #[must_use]
    pub const fn matches(self, category: ArtCategory) -> bool {
        matches!(
            (self, category),
            (Self::All, _)
                | (Self::Sketch, ArtCategory::Sketch)
                | (Self::Colored, ArtCategory::Colored)
                | (Self::Digital, ArtCategory::Digital)
                | (Self::Commissioned, ArtCategory::Commissioned)
        )
    }
}

impl fmt::Display for GalleryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Gallery copy
#[derive(Debug, Clone, Copy)]
pub struct GalleryCopy {
    pub filter_all: &'static str,
    pub filter_sketch: &'static str,
    pub filter_colored: &'static str,
    pub filter_digital: &'static str,
    pub filter_commissioned: &'static str,
    pub view_more: &'static str,
}

impl GalleryCopy {
    /// Label of a filter button
    #[must_use]
    pub const fn filter_label(&self, filter: GalleryFilter) -> &'static str {
        match filter {
            GalleryFilter::All => self.filter_all,
            GalleryFilter::Sketch => self.filter_sketch,
            GalleryFilter::Colored => self.filter_colored,
            GalleryFilter::Digital => self.filter_digital,
            GalleryFilter::Commissioned => self.filter_commissioned,
        }
    }
}

/// Gallery copy per language.
pub const GALLERY_COPY: Localized<GalleryCopy> = Localized::new(
    GalleryCopy {
        filter_all: "All Artwork",
        filter_sketch: "Ink Sketches",
        filter_colored: "Watercolor",
        filter_digital: "Digital Art",
        filter_commissioned: "Commissions",
        view_more: "View More Artwork",
    },
    GalleryCopy {
        filter_all: "すべてのアートワーク",
        filter_sketch: "インクスケッチ",
        filter_colored: "水彩画",
        filter_digital: "デジタルアート",
        filter_commissioned: "依頼作品",
        view_more: "もっとアートワークを見る",
    },
);

/// Gallery entry
#[derive(Debug, Clone, Copy)]
pub struct Artwork {
    pub id: ArtworkId,
    pub category: ArtCategory,
    pub likes: u32,
    pub image: &'static str,
    pub technique: &'static str,
    pub title: Localized<&'static str>,
    pub description: Localized<&'static str>,
}

/// Gallery entries in display order.
pub static ARTWORKS: [Artwork; 8] = [
    Artwork {
        id: ArtworkId(1),
        category: ArtCategory::Digital,
        likes: 234,
        image: ARTWORK_IMAGE,
        technique: "Digital Brush",
        title: Localized::new("Straw Hat Dreams", "麦わらの夢"),
        description: Localized::new(
            "Digital painting capturing the spirit of adventure",
            "冒険の精神を捉えたデジタルペインティング",
        ),
    },
    Artwork {
        id: ArtworkId(2),
        category: ArtCategory::Sketch,
        likes: 189,
        image: ARTWORK_IMAGE,
        technique: "Traditional Ink",
        title: Localized::new("Ink Flow Study", "インクフロー研究"),
        description: Localized::new(
            "Traditional ink technique exploration",
            "伝統的なインク技法の探求",
        ),
    },
    Artwork {
        id: ArtworkId(3),
        category: ArtCategory::Colored,
        likes: 312,
        image: ARTWORK_IMAGE,
        technique: "Watercolor",
        title: Localized::new("Ocean Memories", "海の記憶"),
        description: Localized::new(
            "Watercolor blend of emotion and nature",
            "感情と自然の水彩ブレンド",
        ),
    },
    Artwork {
        id: ArtworkId(4),
        category: ArtCategory::Commissioned,
        likes: 156,
        image: ARTWORK_IMAGE,
        technique: "Mixed Media",
        title: Localized::new("Custom Pirate Soul", "カスタム海賊魂"),
        description: Localized::new(
            "Personalized character design commission",
            "パーソナライズされたキャラクターデザイン依頼",
        ),
    },
    Artwork {
        id: ArtworkId(5),
        category: ArtCategory::Digital,
        likes: 278,
        image: ARTWORK_IMAGE,
        technique: "Digital Paint",
        title: Localized::new("Rubber Soul", "ゴムの魂"),
        description: Localized::new(
            "Digital exploration of unique abilities",
            "ユニークな能力のデジタル探求",
        ),
    },
    Artwork {
        id: ArtworkId(6),
        category: ArtCategory::Colored,
        likes: 445,
        image: ARTWORK_IMAGE,
        technique: "Watercolor & Ink",
        title: Localized::new("Crew Harmony", "クルーハーモニー"),
        description: Localized::new(
            "Watercolor group portrait study",
            "水彩グループポートレート研究",
        ),
    },
    Artwork {
        id: ArtworkId(7),
        category: ArtCategory::Sketch,
        likes: 167,
        image: ARTWORK_IMAGE,
        technique: "Charcoal & Ink",
        title: Localized::new("Wind Sketches", "風のスケッチ"),
        description: Localized::new(
            "Quick gesture studies in motion",
            "動きの中の素早いジェスチャー研究",
        ),
    },
    Artwork {
        id: ArtworkId(8),
        category: ArtCategory::Digital,
        likes: 389,
        image: ARTWORK_IMAGE,
        technique: "Digital Composite",
        title: Localized::new("Digital Awakening", "デジタル覚醒"),
        description: Localized::new(
            "Modern interpretation of classic themes",
            "古典的テーマの現代的解釈",
        ),
    },
];

/// Rendered artwork card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtworkView {
    pub id: ArtworkId,
    pub title: String,
    pub description: String,
    pub category: ArtCategory,
    pub technique: &'static str,
    pub image: &'static str,
    pub likes: u32,
    pub liked: bool,
}

impl Localize for Artwork {
    type View = ArtworkView;

    fn localize(&self, language: LanguageCode) -> ArtworkView {
        ArtworkView {
            id: self.id,
            title: self.title.text(language),
            description: self.description.text(language),
            category: self.category,
            technique: self.technique,
            image: self.image,
            likes: self.likes,
            liked: false,
        }
    }
}

/// Rendered filter button
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOptionView {
    pub filter: GalleryFilter,
    pub label: &'static str,
    pub active: bool,
}

/// Rendered gallery
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryView {
    pub title: String,
    pub subtitle: String,
    pub filters: Vec<FilterOptionView>,
    pub artworks: Vec<ArtworkView>,
    pub view_more: &'static str,
}

/// Selected filter and liked artworks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryState {
    filter: GalleryFilter,
    liked: BTreeSet<ArtworkId>,
}

impl GalleryState {
    /// Active filter
    #[must_use]
    pub const fn filter(&self) -> GalleryFilter {
        self.filter
    }

    /// Change the active filter
    pub fn select_filter(&mut self, filter: GalleryFilter) {
        debug!(filter = %filter, "Gallery filter selected");
        self.filter = filter;
    }

    /// Like or unlike an artwork, returning whether it is now liked
    ///
    /// Ids that are not in the gallery are ignored.
    pub fn toggle_like(&mut self, id: ArtworkId) -> bool {
        if !ARTWORKS.iter().any(|artwork| artwork.id == id) {
            warn!(artwork = %id, "Ignoring like for unknown artwork");
            return false;
        }

        if self.liked.remove(&id) {
            false
        } else {
            self.liked.insert(id);
            true
        }
    }

    /// Whether an artwork is liked
    #[must_use]
    pub fn is_liked(&self, id: ArtworkId) -> bool {
        self.liked.contains(&id)
    }

    /// Liked artworks in id order
    pub fn liked(&self) -> impl Iterator<Item = ArtworkId> + '_ {
        self.liked.iter().copied()
    }

    /// Artworks passing the filter, localized, with likes applied
    #[must_use]
    pub fn visible(&self, language: LanguageCode) -> Vec<ArtworkView> {
        ARTWORKS
            .iter()
            .filter(|artwork| self.filter.matches(artwork.category))
            .map(|artwork| {
                let mut view = artwork.localize(language);
                if self.is_liked(artwork.id) {
                    view.liked = true;
                    view.likes += 1;
                }
                view
            })
            .collect()
    }

    /// Render the gallery
    #[must_use]
    pub fn view(&self, snapshot: &LanguageSnapshot) -> GalleryView {
        let language = snapshot.language();
        let strings = &snapshot.bundle().gallery;
        let copy = GALLERY_COPY.get(language);

        GalleryView {
            title: strings.title.clone(),
            subtitle: strings.subtitle.clone(),
            filters: GalleryFilter::ALL
                .into_iter()
                .map(|filter| FilterOptionView {
                    filter,
                    label: copy.filter_label(filter),
                    active: filter == self.filter,
                })
                .collect(),
            artworks: self.visible(language),
            view_more: copy.view_more,
        }
    }
}
