mod capability;
mod create;
mod publish;
mod service;
mod tag;
mod update;

pub use create::CreateArticleCommand;
pub use publish::SetPublishStateCommand;
pub use service::ArticleCommandService;
pub use tag::AddTagsCommand;
pub use update::UpdateArticleCommand;
