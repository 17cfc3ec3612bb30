use chrono::Utc;
use sitepage::domain::page::{Page, PageId, PageTitle, UrlSegment};

pub fn sample_page(id: i64, title: &str, segment: &str) -> Page {
    Page {
        id: PageId::new(id).unwrap(),
        title: PageTitle::new(title).unwrap(),
        menu_title: String::new(),
        url_segment: UrlSegment::new(segment).unwrap(),
        content: format!("<p>{title} body content for testing purposes.</p>"),
        meta_description: String::new(),
        meta_keywords: String::new(),
        meta_picture_id: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}
