mod service;
mod submit;

pub use service::CommentCommandService;
pub use submit::SubmitCommentCommand;
