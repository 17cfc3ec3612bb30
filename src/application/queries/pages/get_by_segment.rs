use super::PageQueryService;
use crate::{
    application::{
        dto::PageDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::page::UrlSegment,
};

pub struct GetPageBySegmentQuery {
    pub segment: String,
}

impl PageQueryService {
    pub async fn get_page_by_segment(
        &self,
        query: GetPageBySegmentQuery,
    ) -> ApplicationResult<PageDto> {
        let segment = UrlSegment::new(query.segment)?;
        let page = self
            .read_repo
            .find_by_segment(&segment)
            .await?
            .ok_or_else(|| ApplicationError::not_found("page not found"))?;

        Ok(PageDto::from_page(page, &self.config))
    }
}
