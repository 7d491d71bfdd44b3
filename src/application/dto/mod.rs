pub mod articles;
pub mod auth;
pub mod comments;
pub mod tags;
pub mod users;

pub use articles::{ArchiveGroupDto, ArticleDto, ArticleViewDto};
pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject};
pub use comments::CommentDto;
pub use tags::TagDto;
pub use users::UserDto;
