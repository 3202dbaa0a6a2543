//! Application context
//!
//! This module wires settings, the storage seam and the services into the
//! shared state handed to every request handler.

use std::sync::Arc;

use crate::database::Store;
use crate::i18n::PluralRules;
use crate::services::{AuthService, StringsetService, TranslationService};
use crate::Settings;

/// Application-wide context containing services and settings
#[derive(Clone)]
pub struct AppContext {
    pub settings: Settings,
    pub store: Arc<dyn Store>,
    pub plural_rules: PluralRules,
    pub auth: AuthService,
    pub translations: TranslationService,
    pub stringset: StringsetService,
}

impl AppContext {
    /// Create the application context over any store implementation
    pub fn new(settings: Settings, store: Arc<dyn Store>) -> Self {
        let plural_rules = PluralRules::new(&settings.i18n);
        let auth = AuthService::new(store.clone(), &settings.auth);
        let translations = TranslationService::new(
            store.clone(),
            plural_rules.clone(),
            settings.i18n.source_language.clone(),
        );
        let stringset = StringsetService::new(store.clone());

        Self {
            settings,
            store,
            plural_rules,
            auth,
            translations,
            stringset,
        }
    }
}
