// src/domain/page/schema.rs
//! Statically-typed description of the fields this extension contributes
//! to the host object model, together with their admin-form label keys.
//! The host CMS consumes this to build storage columns, indexes and form
//! fields; nothing here touches a database.

use crate::application::ports::i18n::Translator;
use crate::domain::errors::{DomainError, DomainResult};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Bounded single-line text column.
    Varchar(u16),
    /// Unbounded plain-text column.
    Text,
    /// Rich-text column edited through the host's HTML editor.
    HtmlText,
    /// Single-image relation, restricted to image files in the picker.
    HasOneImage,
}

#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub label_key: &'static str,
    pub label_default: &'static str,
}

/// Admin-form tab contributed by the extension, label only.
#[derive(Debug, Clone)]
pub struct TabSpec {
    pub name: &'static str,
    pub label_key: &'static str,
    pub label_default: &'static str,
}

#[derive(Debug, Clone)]
pub struct PageSchema {
    pub fields: Vec<FieldSpec>,
    pub tabs: Vec<TabSpec>,
    /// Fields concatenated into the host's full-text search index.
    pub search_fields: Vec<&'static str>,
    /// Fields the host should index for lookups.
    pub indexed_fields: Vec<&'static str>,
}

impl PageSchema {
    /// The standard page field set: main content fields plus the SEO tab.
    pub fn standard() -> Self {
        Self {
            fields: vec![
                FieldSpec {
                    name: "Title",
                    kind: FieldKind::Varchar(255),
                    label_key: "SiteTree.PAGETITLE",
                    label_default: "Page name",
                },
                FieldSpec {
                    name: "MenuTitle",
                    kind: FieldKind::Varchar(255),
                    label_key: "SiteTree.MENUTITLE",
                    label_default: "Navigation label",
                },
                FieldSpec {
                    name: "URLSegment",
                    kind: FieldKind::Varchar(318),
                    label_key: "SiteTree.URLSegment",
                    label_default: "URL Segment",
                },
                FieldSpec {
                    name: "Content",
                    kind: FieldKind::HtmlText,
                    label_key: "SiteTree.Content",
                    label_default: "Content",
                },
                FieldSpec {
                    name: "MetaDescription",
                    kind: FieldKind::Text,
                    label_key: "SiteTree.METADESC",
                    label_default: "Meta Description",
                },
                FieldSpec {
                    name: "MetaKeywords",
                    kind: FieldKind::Varchar(255),
                    label_key: "PageExtension.META_KEYWORDS",
                    label_default: "Meta Keywords",
                },
                FieldSpec {
                    name: "MetaPicture",
                    kind: FieldKind::HasOneImage,
                    label_key: "PageExtension.META_PICTURE",
                    label_default: "Meta Picture",
                },
            ],
            tabs: vec![TabSpec {
                name: "SEO",
                label_key: "PageExtension.SEO",
                label_default: "SEO",
            }],
            search_fields: vec![
                "Title",
                "Content",
                "MenuTitle",
                "MetaDescription",
                "MetaKeywords",
            ],
            indexed_fields: vec!["URLSegment"],
        }
    }

    /// Validate the declarations at startup: names must be unique and
    /// non-empty, varchar lengths sane, and every index/search reference
    /// must point at a declared field.
    pub fn validate(&self) -> DomainResult<()> {
        let mut seen = HashSet::new();
        for field in &self.fields {
            if field.name.trim().is_empty() {
                return Err(DomainError::Validation("field name cannot be empty".into()));
            }
            if !seen.insert(field.name) {
                return Err(DomainError::Validation(format!(
                    "duplicate field declaration '{}'",
                    field.name
                )));
            }
            if let FieldKind::Varchar(0) = field.kind {
                return Err(DomainError::Validation(format!(
                    "field '{}' declares a zero-length varchar",
                    field.name
                )));
            }
            if field.label_key.trim().is_empty() || field.label_default.trim().is_empty() {
                return Err(DomainError::Validation(format!(
                    "field '{}' is missing its label declaration",
                    field.name
                )));
            }
        }

        let mut tab_names = HashSet::new();
        for tab in &self.tabs {
            if tab.name.trim().is_empty() {
                return Err(DomainError::Validation("tab name cannot be empty".into()));
            }
            if !tab_names.insert(tab.name) {
                return Err(DomainError::Validation(format!(
                    "duplicate tab declaration '{}'",
                    tab.name
                )));
            }
            if tab.label_key.trim().is_empty() || tab.label_default.trim().is_empty() {
                return Err(DomainError::Validation(format!(
                    "tab '{}' is missing its label declaration",
                    tab.name
                )));
            }
        }

        for name in self.search_fields.iter().chain(&self.indexed_fields) {
            if !seen.contains(name) {
                return Err(DomainError::Validation(format!(
                    "'{name}' is referenced by an index but never declared"
                )));
            }
        }

        Ok(())
    }

    /// Resolve the admin-form labels (fields, then tabs) through the
    /// host's translation service, falling back to the declared defaults.
    pub fn labels(&self, translator: &dyn Translator) -> Vec<(&'static str, String)> {
        self.fields
            .iter()
            .map(|field| (field.name, field.label_key, field.label_default))
            .chain(
                self.tabs
                    .iter()
                    .map(|tab| (tab.name, tab.label_key, tab.label_default)),
            )
            .map(|(name, key, fallback)| (name, translator.translate(key, fallback, &[])))
            .collect()
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.name == name)
    }
}
