use crate::config::PageConfig;
use crate::domain::page::Page;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageDto {
    pub id: i64,
    pub title: String,
    pub menu_title: String,
    pub url_segment: String,
    pub content: String,
    pub meta_description: String,
    pub meta_keywords: String,
    pub meta_picture_id: Option<i64>,
    /// Site-relative link under the configured URL prefix.
    pub link: String,
    /// Plain-text excerpt; `None` when the page has nothing to show.
    pub short_description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PageDto {
    pub fn from_page(page: Page, config: &PageConfig) -> Self {
        let link = page.link(config.url_prefix());
        let short_description = page.short_description(config.excerpt_word_limit());
        let menu_title = page.menu_title().to_string();

        Self {
            id: page.id.into(),
            title: page.title.into_inner(),
            menu_title,
            url_segment: page.url_segment.into_inner(),
            content: page.content,
            meta_description: page.meta_description,
            meta_keywords: page.meta_keywords,
            meta_picture_id: page.meta_picture_id,
            link,
            short_description,
            created_at: page.created_at,
            updated_at: page.updated_at,
        }
    }
}
