pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewTag, Tag};
pub use repository::{TagCount, TagRepository};
pub use value_objects::{TagContent, TagId};
