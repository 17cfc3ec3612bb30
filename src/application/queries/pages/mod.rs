mod get_by_id;
mod get_by_segment;
mod service;

pub use get_by_id::GetPageByIdQuery;
pub use get_by_segment::GetPageBySegmentQuery;
pub use service::PageQueryService;
