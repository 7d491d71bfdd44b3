pub mod entity;
pub mod repository;
pub mod threading;
pub mod value_objects;

pub use entity::{Comment, NewComment};
pub use repository::CommentRepository;
pub use threading::ThreadedComment;
pub use value_objects::{CommentContent, CommentId};
