use super::PageQueryService;
use crate::{
    application::{
        dto::PageDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::page::PageId,
};

pub struct GetPageByIdQuery {
    pub id: i64,
}

impl PageQueryService {
    pub async fn get_page_by_id(&self, query: GetPageByIdQuery) -> ApplicationResult<PageDto> {
        let id = PageId::new(query.id)?;
        let page = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("page not found"))?;

        Ok(PageDto::from_page(page, &self.config))
    }
}
