//! Page extension toolkit: bolts page-like content fields (title, URL
//! segment, body content, SEO metadata, meta image) onto a host CMS
//! object model.
//!
//! The host CMS owns storage, search indexing and form rendering. This
//! crate owns the derived values (URL segments, links, excerpts) and the
//! statically-typed field schema the host's form builder consumes.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
