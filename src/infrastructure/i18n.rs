// src/infrastructure/i18n.rs
use std::collections::HashMap;

use crate::application::ports::i18n::Translator;

/// In-process translation table. Hosts with a real localization service
/// implement [`Translator`] themselves; this covers tests and single-locale
/// deployments.
#[derive(Default, Clone)]
pub struct StaticTranslator {
    entries: HashMap<String, String>,
}

impl StaticTranslator {
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }
}

impl Translator for StaticTranslator {
    fn translate(&self, key: &str, fallback: &str, params: &[(&str, &str)]) -> String {
        let template = match self.entries.get(key) {
            Some(value) => value.as_str(),
            None => {
                tracing::debug!(key, "missing translation key, using fallback");
                fallback
            }
        };

        let mut out = template.to_string();
        for (name, value) in params {
            out = out.replace(&format!("{{{name}}}"), value);
        }
        out
    }
}
