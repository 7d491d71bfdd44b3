mod archive;
mod get;
mod search;
mod service;

pub use get::{ArticleLookup, GetArticleQuery};
pub use search::SearchArticlesQuery;
pub use service::ArticleQueryService;
