use crate::domain::errors::DomainResult;
use crate::domain::page::entity::Page;
use crate::domain::page::value_objects::{PageId, UrlSegment};
use async_trait::async_trait;

/// Lookup port implemented by the host CMS storage layer. Segment lookup
/// returns the first match; uniqueness across sibling pages is the host's
/// concern.
#[async_trait]
pub trait PageReadRepository: Send + Sync {
    async fn find_by_id(&self, id: PageId) -> DomainResult<Option<Page>>;
    async fn find_by_segment(&self, segment: &UrlSegment) -> DomainResult<Option<Page>>;
}
