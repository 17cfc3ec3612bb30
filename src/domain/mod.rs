pub mod errors;
pub mod page;
