pub mod entity;
pub mod repository;
pub mod schema;
pub mod services;
pub mod value_objects;

pub use entity::Page;
pub use repository::PageReadRepository;
pub use schema::{FieldKind, FieldSpec, PageSchema, TabSpec};
pub use value_objects::{PageId, PageTitle, UrlSegment};
