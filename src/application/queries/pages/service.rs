use std::sync::Arc;

use crate::config::PageConfig;
use crate::domain::page::PageReadRepository;

pub struct PageQueryService {
    pub(super) read_repo: Arc<dyn PageReadRepository>,
    pub(super) config: PageConfig,
}

impl PageQueryService {
    pub fn new(read_repo: Arc<dyn PageReadRepository>, config: PageConfig) -> Self {
        Self { read_repo, config }
    }
}
