//! Site header: brand, section navigation and language switcher.

use crate::context::LanguageSnapshot;
use crate::selector::{select, Localize, Localized};
use inkfolio_common::SectionId;
use inkfolio_i18n::LanguageCode;
use serde::Serialize;

/// Studio name shown in the header, identical in every language.
pub const BRAND: &str = "Luffy's Ink Studio";

/// Navigation entry bound to the section it scrolls to
#[derive(Debug, Clone, Copy)]
pub struct NavItem {
    /// Section the entry targets
    pub target: SectionId,
    /// Visible label
    pub label: Localized<&'static str>,
}

/// Header navigation, in display order.
pub static NAV_ITEMS: [NavItem; 5] = [
    NavItem {
        target: SectionId::Hero,
        label: Localized::new("Home", "ホーム"),
    },
    NavItem {
        target: SectionId::Gallery,
        label: Localized::new("Gallery", "ギャラリー"),
    },
    NavItem {
        target: SectionId::About,
        label: Localized::new("About", "自己紹介"),
    },
    NavItem {
        target: SectionId::Commissions,
        label: Localized::new("Commissions", "依頼"),
    },
    NavItem {
        target: SectionId::Contact,
        label: Localized::new("Contact", "お問い合わせ"),
    },
];

/// Rendered navigation entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLinkView {
    /// Visible label
    pub label: String,
    /// Anchor of the target section
    pub anchor: &'static str,
}

impl Localize for NavItem {
    type View = NavLinkView;

    fn localize(&self, language: LanguageCode) -> NavLinkView {
        NavLinkView {
            label: self.label.text(language),
            anchor: self.target.anchor(),
        }
    }
}

/// Entry of the language switcher
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageOptionView {
    /// Language code
    pub code: LanguageCode,
    /// Name of the language in that language
    pub name: &'static str,
    /// Whether this is the active language
    pub active: bool,
}

/// Rendered header
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderView {
    pub brand: &'static str,
    pub nav: Vec<NavLinkView>,
    pub menu_label: String,
    pub language_label: String,
    pub languages: Vec<LanguageOptionView>,
    pub menu_open: bool,
}

/// Mobile menu state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderState {
    menu_open: bool,
}

impl HeaderState {
    /// Open or close the mobile menu, returning the new state
    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    /// Whether the mobile menu is open
    #[must_use]
    pub const fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Follow a navigation entry: closes the menu and returns the anchor
    pub fn navigate(&mut self, target: SectionId) -> &'static str {
        self.menu_open = false;
        target.anchor()
    }

    /// Render the header for the snapshot's language
    #[must_use]
    pub fn view(&self, snapshot: &LanguageSnapshot) -> HeaderView {
        let language = snapshot.language();
        let strings = &snapshot.bundle().header;

        HeaderView {
            brand: BRAND,
            nav: select(language, &NAV_ITEMS),
            menu_label: strings.menu.clone(),
            language_label: strings.language.clone(),
            languages: LanguageCode::ALL
                .into_iter()
                .map(|code| LanguageOptionView {
                    code,
                    name: code.display_name(),
                    active: code == language,
                })
                .collect(),
            menu_open: self.menu_open,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_targets_do_not_depend_on_language() {
        let en = select(LanguageCode::En, &NAV_ITEMS);
        let jp = select(LanguageCode::Jp, &NAV_ITEMS);

        let en_anchors: Vec<_> = en.iter().map(|link| link.anchor).collect();
        let jp_anchors: Vec<_> = jp.iter().map(|link| link.anchor).collect();
        assert_eq!(en_anchors, ["hero", "gallery", "about", "commissions", "contact"]);
        assert_eq!(en_anchors, jp_anchors);
        assert_eq!(jp[2].label, "自己紹介");
    }

    #[test]
    fn test_navigate_closes_menu() {
        let mut state = HeaderState::default();
        assert!(state.toggle_menu());
        assert_eq!(state.navigate(SectionId::Gallery), "gallery");
        assert!(!state.is_menu_open());
    }
}
