// src/application/ports/i18n.rs
/// Label lookup port backed by the host's localization service. `fallback`
/// is the human-readable default used when `key` has no translation;
/// `params` are substituted into `{name}` placeholders.
pub trait Translator: Send + Sync {
    fn translate(&self, key: &str, fallback: &str, params: &[(&str, &str)]) -> String;
}
