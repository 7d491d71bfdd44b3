mod cloud;
mod service;

pub use service::TagQueryService;
