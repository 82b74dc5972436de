//! Shared language / currency preference.
//!
//! Platform shells call [`use_preferences_provider`] once near the root; any
//! component below reads it with [`use_preferences`]. Components rendered
//! without a provider get a private copy so they still work in isolation.

use dioxus::prelude::*;

use super::locale::{Currency, Language};
use crate::i18n;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preferences {
    language: Signal<Language>,
    currency: Signal<Currency>,
}

impl Preferences {
    /// Must be called inside a Dioxus scope (signals are owned by the caller's scope).
    pub fn new(language: Language, currency: Currency) -> Self {
        Self {
            language: Signal::new(language),
            currency: Signal::new(currency),
        }
    }

    pub fn language(&self) -> Language {
        *self.language.read()
    }

    pub fn currency(&self) -> Currency {
        *self.currency.read()
    }

    /// Activates the matching translation bundle, then publishes the new language.
    pub fn set_language(mut self, language: Language) {
        if let Err(err) = i18n::set_language(language.tag()) {
            tracing::warn!(%err, tag = language.tag(), "could not activate language bundle");
        }
        if self.language() != language {
            self.language.set(language);
        }
    }

    pub fn set_currency(mut self, currency: Currency) {
        if self.currency() != currency {
            self.currency.set(currency);
        }
    }

    /// Form-value entry point; codes outside the fixed list are dropped.
    pub fn select_language_code(self, code: &str) -> Option<Language> {
        let language = Language::from_code(code)?;
        self.set_language(language);
        Some(language)
    }

    pub fn select_currency_code(self, code: &str) -> Option<Currency> {
        let currency = Currency::from_code(code)?;
        self.set_currency(currency);
        Some(currency)
    }
}

/// Language the i18n loader settled on at startup (OS / browser preference).
pub fn initial_language() -> Language {
    i18n::init();
    Language::from_tag(&i18n::current_language()).unwrap_or_default()
}

pub fn use_preferences_provider() -> Preferences {
    use_context_provider(|| Preferences::new(initial_language(), Currency::default()))
}

pub fn use_preferences() -> Preferences {
    let provided = try_use_context::<Preferences>();
    // Only filled in when no provider is in scope.
    let mut detached = use_hook(|| CopyValue::new(None::<Preferences>));
    provided.unwrap_or_else(|| {
        detached.with_mut(|slot| {
            *slot.get_or_insert_with(|| Preferences::new(initial_language(), Currency::default()))
        })
    })
}
