//! Posts and their comments.

pub mod repository;

pub use models::comment::{CommentWithPost, NewComment};
pub use models::post::{Model as Post, NewPost, PostChanges};
pub use models::InsertedId;
pub use repository::{mock, BlogRepository, SeaOrmBlogRepository};
