mod pages;

pub use pages::PageDto;
