//! Content selection
//!
//! Static content tables store every translation side by side as
//! [`Localized`] values. Selecting a language projects a table into
//! language-specific views without filtering or reordering it.

use inkfolio_i18n::LanguageCode;

pub use inkfolio_i18n::Localized;

/// Static content that has a per-language view
pub trait Localize {
    /// Language-specific view of the content
    type View;

    /// Project this item into `language`
    fn localize(&self, language: LanguageCode) -> Self::View;
}

impl<T: Clone> Localize for Localized<T> {
    type View = T;

    fn localize(&self, language: LanguageCode) -> T {
        self.get(language).clone()
    }
}

/// Localize every item of a table, keeping its order
pub fn select<T: Localize>(language: LanguageCode, table: &[T]) -> Vec<T::View> {
    table.iter().map(|item| item.localize(language)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Entry {
        id: u32,
        label: Localized<&'static str>,
    }

    impl Localize for Entry {
        type View = (u32, &'static str);

        fn localize(&self, language: LanguageCode) -> Self::View {
            (self.id, *self.label.get(language))
        }
    }

    const TABLE: [Entry; 3] = [
        Entry {
            id: 3,
            label: Localized::new("three", "三"),
        },
        Entry {
            id: 1,
            label: Localized::new("one", "一"),
        },
        Entry {
            id: 2,
            label: Localized::new("two", "二"),
        },
    ];

    #[test]
    fn test_select_keeps_order() {
        assert_eq!(
            select(LanguageCode::En, &TABLE),
            vec![(3, "three"), (1, "one"), (2, "two")]
        );
        assert_eq!(
            select(LanguageCode::Jp, &TABLE),
            vec![(3, "三"), (1, "一"), (2, "二")]
        );
    }

    #[test]
    fn test_select_empty_table() {
        let empty: [Entry; 0] = [];
        assert!(select(LanguageCode::Jp, &empty).is_empty());
    }

    #[test]
    fn test_localized_values_select_directly() {
        let words = [Localized::new("ink", "インク"), Localized::new("brush", "筆")];
        assert_eq!(select(LanguageCode::Jp, &words), vec!["インク", "筆"]);
    }
}
