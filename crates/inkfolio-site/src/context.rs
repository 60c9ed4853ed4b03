//! Language context
//!
//! The single owner of the active language. The language and its bundle are
//! published together as one [`LanguageSnapshot`], so a reader can never see
//! a bundle that belongs to a different language.

use arc_swap::ArcSwap;
use inkfolio_config::PreferenceStore;
use inkfolio_i18n::{LanguageCode, LocaleBundle, LocaleCatalog};
use parking_lot::{Mutex, ReentrantMutex};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Active language together with its resolved bundle
#[derive(Debug, Clone)]
pub struct LanguageSnapshot {
    language: LanguageCode,
    bundle: Arc<LocaleBundle>,
}

impl LanguageSnapshot {
    fn new(language: LanguageCode, catalog: &LocaleCatalog) -> Self {
        Self {
            language,
            bundle: catalog.resolve(language),
        }
    }

    /// Active language
    #[must_use]
    pub const fn language(&self) -> LanguageCode {
        self.language
    }

    /// Shared strings for the active language
    #[must_use]
    pub fn bundle(&self) -> &LocaleBundle {
        &self.bundle
    }
}

/// Handle returned by [`LanguageContext::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Listener = Arc<dyn Fn(&LanguageSnapshot) + Send + Sync>;

/// Owner of the current language
///
/// Initialized from the preference store, updated only through
/// [`Self::set_language`], observed through [`Self::current`] and
/// subscriptions.
///
/// Transitions from different threads run one at a time: the swap, the
/// notifications and the write of one switch finish before the next switch
/// starts. Listeners run on the switching thread and may switch again.
pub struct LanguageContext {
    catalog: Arc<LocaleCatalog>,
    store: Arc<dyn PreferenceStore>,
    current: ArcSwap<LanguageSnapshot>,
    transition: ReentrantMutex<()>,
    listeners: Mutex<Vec<(SubscriptionId, Listener)>>,
    next_id: AtomicU64,
}

impl LanguageContext {
    /// Start a context in the stored language, or the primary language if
    /// nothing usable is stored.
    pub fn new(catalog: Arc<LocaleCatalog>, store: Arc<dyn PreferenceStore>) -> Self {
        let language = match store.load() {
            Some(language) => {
                debug!(language = %language, "Restored stored language");
                language
            }
            None => {
                debug!(
                    language = %LanguageCode::PRIMARY,
                    "No stored language, using primary"
                );
                LanguageCode::PRIMARY
            }
        };

        let snapshot = LanguageSnapshot::new(language, &catalog);
        info!(language = %language, "Language context initialized");

        Self {
            catalog,
            store,
            current: ArcSwap::from_pointee(snapshot),
            transition: ReentrantMutex::new(()),
            listeners: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(0),
        }
    }

    /// Current language and bundle
    #[must_use]
    pub fn current(&self) -> Arc<LanguageSnapshot> {
        self.current.load_full()
    }

    /// Current language
    #[must_use]
    pub fn language(&self) -> LanguageCode {
        self.current.load().language
    }

    /// Bundle of the current language
    #[must_use]
    pub fn bundle(&self) -> Arc<LocaleBundle> {
        Arc::clone(&self.current.load().bundle)
    }

    /// Switch to `language`
    ///
    /// Selecting the active language does nothing. Otherwise the new
    /// snapshot is published, subscribers are notified and the choice is
    /// persisted. A failed write is logged and otherwise ignored.
    ///
    /// Returns whether the language changed.
    pub fn set_language(&self, language: LanguageCode) -> bool {
        let _transition = self.transition.lock();

        let previous = self.language();
        if previous == language {
            debug!(language = %language, "Language already active");
            return false;
        }

        let next = Arc::new(LanguageSnapshot::new(language, &self.catalog));
        self.current.store(Arc::clone(&next));
        info!(from = %previous, to = %language, "Language changed");
        self.notify(&next);

        // A listener that switched again has already stored its own choice.
        if self.language() != language {
            debug!(language = %language, "Switch superseded by a listener, not persisting");
            return true;
        }

        if let Err(e) = self.store.save(language) {
            warn!(language = %language, error = %e, "Failed to persist language preference");
        }
        true
    }

    /// Switch to the next language in toggle order, returning it
    pub fn toggle_language(&self) -> LanguageCode {
        let _transition = self.transition.lock();
        let next = self.language().next();
        self.set_language(next);
        next
    }

    /// Call `listener` with every new snapshot
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&LanguageSnapshot) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.listeners.lock().push((id, Arc::new(listener)));
        id
    }

    /// Remove a listener, returning whether it was registered
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.lock();
        let before = listeners.len();
        listeners.retain(|(registered, _)| *registered != id);
        listeners.len() != before
    }

    /// Number of registered listeners
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.listeners.lock().len()
    }

    fn notify(&self, snapshot: &LanguageSnapshot) {
        // Listeners may subscribe or switch language themselves.
        let listeners: Vec<Listener> = self
            .listeners
            .lock()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        for listener in listeners {
            listener(snapshot);
        }
    }
}

impl fmt::Debug for LanguageContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageContext")
            .field("language", &self.language())
            .field("subscribers", &self.subscriber_count())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkfolio_config::MemoryPreferenceStore;
    use parking_lot::Mutex as PlMutex;

    fn context_with(store: Arc<MemoryPreferenceStore>) -> LanguageContext {
        let catalog = Arc::new(LocaleCatalog::load().unwrap());
        LanguageContext::new(catalog, store)
    }

    #[test]
    fn test_defaults_to_primary() {
        let context = context_with(Arc::new(MemoryPreferenceStore::new()));
        assert_eq!(context.language(), LanguageCode::En);
        assert_eq!(context.bundle().header.menu, "Menu");
    }

    #[test]
    fn test_corrupted_store_defaults_to_primary() {
        let context = context_with(Arc::new(MemoryPreferenceStore::with_raw("ja")));
        assert_eq!(context.language(), LanguageCode::En);
    }

    #[test]
    fn test_restores_stored_language() {
        let context = context_with(Arc::new(MemoryPreferenceStore::with_raw("jp")));
        assert_eq!(context.language(), LanguageCode::Jp);
        assert_eq!(context.bundle().header.menu, "メニュー");
    }

    #[test]
    fn test_snapshot_pairs_language_and_bundle() {
        let context = context_with(Arc::new(MemoryPreferenceStore::new()));
        let before = context.current();
        context.set_language(LanguageCode::Jp);
        let after = context.current();

        assert_eq!(before.language(), LanguageCode::En);
        assert_eq!(before.bundle().hero.title, "Welcome to My Ink Universe!");
        assert_eq!(after.language(), LanguageCode::Jp);
        assert_eq!(after.bundle().hero.title, "インクの世界へようこそ！");
    }

    #[test]
    fn test_set_language_is_idempotent() {
        let store = Arc::new(MemoryPreferenceStore::new());
        let context = context_with(Arc::clone(&store));
        let calls = Arc::new(PlMutex::new(0));
        let counter = Arc::clone(&calls);
        context.subscribe(move |_| *counter.lock() += 1);

        assert!(context.set_language(LanguageCode::Jp));
        assert!(!context.set_language(LanguageCode::Jp));

        assert_eq!(context.language(), LanguageCode::Jp);
        assert_eq!(*calls.lock(), 1);
        assert_eq!(store.write_count(), 1);
    }

    #[test]
    fn test_toggle_language() {
        let context = context_with(Arc::new(MemoryPreferenceStore::new()));
        assert_eq!(context.toggle_language(), LanguageCode::Jp);
        assert_eq!(context.toggle_language(), LanguageCode::En);
        assert_eq!(context.language(), LanguageCode::En);
    }

    #[test]
    fn test_write_failure_keeps_new_language() {
        let store = Arc::new(MemoryPreferenceStore::new());
        store.set_fail_writes(true);
        let context = context_with(Arc::clone(&store));

        assert!(context.set_language(LanguageCode::Jp));
        assert_eq!(context.language(), LanguageCode::Jp);
        assert_eq!(store.raw(), None);
    }

    #[test]
    fn test_unsubscribe() {
        let context = context_with(Arc::new(MemoryPreferenceStore::new()));
        let seen = Arc::new(PlMutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let id = context.subscribe(move |snapshot| sink.lock().push(snapshot.language()));
        assert_eq!(context.subscriber_count(), 1);

        context.set_language(LanguageCode::Jp);
        assert!(context.unsubscribe(id));
        assert!(!context.unsubscribe(id));
        context.set_language(LanguageCode::En);

        assert_eq!(*seen.lock(), vec![LanguageCode::Jp]);
        assert_eq!(context.subscriber_count(), 0);
    }

    #[test]
    fn test_listener_may_reenter_context() {
        let context = Arc::new(context_with(Arc::new(MemoryPreferenceStore::new())));
        let weak = Arc::downgrade(&context);
        context.subscribe(move |snapshot| {
            if let Some(context) = weak.upgrade() {
                assert_eq!(context.language(), snapshot.language());
                assert!(!context.set_language(snapshot.language()));
            }
        });

        assert!(context.set_language(LanguageCode::Jp));
    }

    #[test]
    fn test_listener_switching_back_is_persisted() {
        let store = Arc::new(MemoryPreferenceStore::new());
        let context = Arc::new(context_with(Arc::clone(&store)));
        let weak = Arc::downgrade(&context);
        context.subscribe(move |snapshot| {
            if snapshot.language() == LanguageCode::Jp {
                if let Some(context) = weak.upgrade() {
                    context.set_language(LanguageCode::En);
                }
            }
        });

        assert!(context.set_language(LanguageCode::Jp));
        assert_eq!(context.language(), LanguageCode::En);
        assert_eq!(store.raw().as_deref(), Some("en"));
    }

    #[test]
    fn test_concurrent_switches_keep_store_and_listeners_in_step() {
        let store = Arc::new(MemoryPreferenceStore::new());
        let context = Arc::new(context_with(Arc::clone(&store)));
        let last_seen = Arc::new(PlMutex::new(None));
        let sink = Arc::clone(&last_seen);
        context.subscribe(move |snapshot| *sink.lock() = Some(snapshot.language()));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let context = Arc::clone(&context);
                std::thread::spawn(move || {
                    for round in 0..200 {
                        if (i + round) % 3 == 0 {
                            context.toggle_language();
                        } else {
                            let target = LanguageCode::ALL[(i + round) % LanguageCode::ALL.len()];
                            context.set_language(target);
                        }
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let current = context.language();
        if store.write_count() > 0 {
            assert_eq!(store.raw().as_deref(), Some(current.code()));
        }
        if let Some(seen) = *last_seen.lock() {
            assert_eq!(seen, current);
        };
    }

    #[test]
    fn test_context_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LanguageContext>();
        assert_send_sync::<LanguageSnapshot>();
    }
}
