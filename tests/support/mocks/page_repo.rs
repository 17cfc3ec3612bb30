// tests/support/mocks/page_repo.rs
use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use sitepage::domain::errors::DomainResult;
use sitepage::domain::page::{Page, PageId, PageReadRepository, UrlSegment};

/// In-memory stand-in for the host CMS lookup layer, keyed by URL segment.
pub struct InMemoryPageRepo {
    inner: Mutex<HashMap<String, Page>>,
}

impl InMemoryPageRepo {
    pub fn new(pages: impl IntoIterator<Item = Page>) -> Self {
        let inner = pages
            .into_iter()
            .map(|page| (page.url_segment.as_str().to_string(), page))
            .collect();
        Self {
            inner: Mutex::new(inner),
        }
    }
}

#[async_trait]
impl PageReadRepository for InMemoryPageRepo {
    async fn find_by_id(&self, id: PageId) -> DomainResult<Option<Page>> {
        let map = self.inner.lock().unwrap();
        Ok(map.values().find(|page| page.id == id).cloned())
    }

    async fn find_by_segment(&self, segment: &UrlSegment) -> DomainResult<Option<Page>> {
        let map = self.inner.lock().unwrap();
        Ok(map.get(segment.as_str()).cloned())
    }
}
