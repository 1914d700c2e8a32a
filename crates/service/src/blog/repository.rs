use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use tracing::{debug, instrument, warn};

use super::{CommentWithPost, InsertedId, NewComment, NewPost, Post, PostChanges};
use crate::errors::ServiceError;

/// Data-access contract for posts and comments.
///
/// The router holds this as `Arc<dyn BlogRepository>`; implementations are
/// expected to serialize their own writes.
#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// All posts, oldest first.
    async fn find(&self) -> Result<Vec<Post>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, ServiceError>;
    async fn insert(&self, post: NewPost) -> Result<InsertedId, ServiceError>;
    /// Returns the number of posts updated.
    async fn update(&self, id: i32, changes: PostChanges) -> Result<u64, ServiceError>;
    /// Returns the number of posts removed.
    async fn remove(&self, id: i32) -> Result<u64, ServiceError>;
    async fn find_post_comments(&self, post_id: i32) -> Result<Vec<CommentWithPost>, ServiceError>;
    async fn find_comment_by_id(&self, id: i32) -> Result<Option<CommentWithPost>, ServiceError>;
    /// Fails with a validation error if `comment.post_id` is not a stored post.
    async fn insert_comment(&self, comment: NewComment) -> Result<InsertedId, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmBlogRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmBlogRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl BlogRepository for SeaOrmBlogRepository {
    async fn find(&self) -> Result<Vec<Post>, ServiceError> {
        Ok(models::post::list(&self.db).await?)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, ServiceError> {
        Ok(models::post::find(&self.db, id).await?)
    }

    #[instrument(skip(self, post))]
    async fn insert(&self, post: NewPost) -> Result<InsertedId, ServiceError> {
        let inserted = models::post::create(&self.db, &post).await?;
        debug!(id = inserted.id, "post inserted");
        Ok(inserted)
    }

    #[instrument(skip(self, changes))]
    async fn update(&self, id: i32, changes: PostChanges) -> Result<u64, ServiceError> {
        Ok(models::post::update(&self.db, id, &changes).await?)
    }

    #[instrument(skip(self))]
    async fn remove(&self, id: i32) -> Result<u64, ServiceError> {
        Ok(models::post::delete(&self.db, id).await?)
    }

    async fn find_post_comments(&self, post_id: i32) -> Result<Vec<CommentWithPost>, ServiceError> {
        Ok(models::comment::list_for_post(&self.db, post_id).await?)
    }

    async fn find_comment_by_id(&self, id: i32) -> Result<Option<CommentWithPost>, ServiceError> {
        Ok(models::comment::find_with_post(&self.db, id).await?)
    }

    #[instrument(skip(self, comment), fields(post_id = comment.post_id))]
    async fn insert_comment(&self, comment: NewComment) -> Result<InsertedId, ServiceError> {
        match models::comment::create(&self.db, &comment).await {
            Ok(inserted) => {
                debug!(id = inserted.id, "comment inserted");
                Ok(inserted)
            }
            Err(e) => {
                warn!(err = %e, "comment insert rejected");
                Err(e.into())
            }
        }
    }
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::{Mutex, MutexGuard, PoisonError};

    use chrono::Utc;
    use models::comment;

    #[derive(Default)]
    struct State {
        posts: BTreeMap<i32, Post>,
        comments: BTreeMap<i32, comment::Model>,
        next_post_id: i32,
        next_comment_id: i32,
    }

    impl State {
        fn with_title(&self, c: &comment::Model) -> CommentWithPost {
            CommentWithPost {
                comment: c.clone(),
                post: self.posts.get(&c.post_id).map(|p| p.title.clone()).unwrap_or_default(),
            }
        }
    }

    #[derive(Default)]
    pub struct MockBlogRepository {
        state: Mutex<State>,
    }

    impl MockBlogRepository {
        fn state(&self) -> MutexGuard<'_, State> {
            self.state.lock().unwrap_or_else(PoisonError::into_inner)
        }
    }

    #[async_trait]
    impl BlogRepository for MockBlogRepository {
        async fn find(&self) -> Result<Vec<Post>, ServiceError> {
            Ok(self.state().posts.values().cloned().collect())
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<Post>, ServiceError> {
            Ok(self.state().posts.get(&id).cloned())
        }

        async fn insert(&self, post: NewPost) -> Result<InsertedId, ServiceError> {
            let mut state = self.state();
            state.next_post_id += 1;
            let id = state.next_post_id;
            let now = Utc::now().into();
            state.posts.insert(
                id,
                Post { id, title: post.title, contents: post.contents, created_at: now, updated_at: now },
            );
            Ok(InsertedId { id })
        }

        async fn update(&self, id: i32, changes: PostChanges) -> Result<u64, ServiceError> {
            let mut state = self.state();
            let Some(found) = state.posts.get_mut(&id) else {
                return Ok(0);
            };
            if let Some(title) = changes.title {
                found.title = title;
            }
            if let Some(contents) = changes.contents {
                found.contents = contents;
            }
            found.updated_at = Utc::now().into();
            Ok(1)
        }

        async fn remove(&self, id: i32) -> Result<u64, ServiceError> {
            let mut state = self.state();
            if state.posts.remove(&id).is_none() {
                return Ok(0);
            }
            state.comments.retain(|_, c| c.post_id != id);
            Ok(1)
        }

        async fn find_post_comments(&self, post_id: i32) -> Result<Vec<CommentWithPost>, ServiceError> {
            let state = self.state();
            Ok(state
                .comments
                .values()
                .filter(|c| c.post_id == post_id)
                .map(|c| state.with_title(c))
                .collect())
        }

        async fn find_comment_by_id(&self, id: i32) -> Result<Option<CommentWithPost>, ServiceError> {
            let state = self.state();
            Ok(state.comments.get(&id).map(|c| state.with_title(c)))
        }

        async fn insert_comment(&self, comment: NewComment) -> Result<InsertedId, ServiceError> {
            let mut state = self.state();
            if !state.posts.contains_key(&comment.post_id) {
                return Err(ServiceError::Validation(format!(
                    "post_id {} does not reference an existing post",
                    comment.post_id
                )));
            }
            state.next_comment_id += 1;
            let id = state.next_comment_id;
            let now = Utc::now().into();
            state.comments.insert(
                id,
                comment::Model { id, text: comment.text, post_id: comment.post_id, created_at: now, updated_at: now },
            );
            Ok(InsertedId { id })
        }
    }
}
