pub mod file_service;
pub mod page_service;

pub use file_service::FileService;
pub use page_service::PageService;
