// src/domain/page/entity.rs
use crate::domain::page::services::{excerpt, join_links};
use crate::domain::page::value_objects::{PageId, PageTitle, UrlSegment};
use chrono::{DateTime, Utc};

/// Page-like content object as seen by this extension. The host CMS owns
/// persistence; this type carries the fields the extension contributes.
#[derive(Debug, Clone)]
pub struct Page {
    pub id: PageId,
    pub title: PageTitle,
    pub menu_title: String,
    pub url_segment: UrlSegment,
    pub content: String,
    pub meta_description: String,
    pub meta_keywords: String,
    pub meta_picture_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Page {
    /// Navigation label, falling back to the page title when no explicit
    /// menu title was set.
    pub fn menu_title(&self) -> &str {
        if self.menu_title.trim().is_empty() {
            self.title.as_str()
        } else {
            &self.menu_title
        }
    }

    /// Site-relative link for this page under the given URL prefix.
    pub fn link(&self, url_prefix: &str) -> String {
        join_links([url_prefix, self.url_segment.as_str()])
    }

    /// Plain-text excerpt, preferring the meta description over cleaned
    /// body content. `None` means there is nothing to show.
    pub fn short_description(&self, word_limit: usize) -> Option<String> {
        excerpt::short_description(&self.meta_description, &self.content, word_limit)
    }

    pub fn set_url_segment(&mut self, segment: UrlSegment, now: DateTime<Utc>) {
        self.url_segment = segment;
        self.updated_at = now;
    }

    pub fn set_content(&mut self, title: PageTitle, content: impl Into<String>, now: DateTime<Utc>) {
        self.title = title;
        self.content = content.into();
        self.updated_at = now;
    }
}
