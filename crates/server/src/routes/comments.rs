use axum::{extract::{Path, State}, Json};
use serde::Deserialize;
use service::{blog::{CommentWithPost, NewComment}, errors::ServiceError};
use tracing::info;

use common::types::ApiBody;

use crate::{errors::JsonApiError, state::ServerState};

#[derive(Debug, Deserialize)]
pub struct CreateCommentInput {
    pub text: String,
    /// Falls back to the `:id` path segment when omitted.
    #[serde(default)]
    pub post_id: Option<i32>,
}

#[utoipa::path(
    get, path = "/api/posts/{id}/comments", tag = "comments",
    params(("id" = i32, Path, description = "Post ID")),
    responses(
        (status = 200, description = "Comments on the post, each with the post title")
    )
)]
pub async fn list(State(state): State<ServerState>, Path(post_id): Path<i32>) -> Result<Json<ApiBody<Vec<CommentWithPost>>>, JsonApiError> {
    let comments = state.repo.find_post_comments(post_id).await?;
    Ok(Json(ApiBody::new(comments)))
}

#[utoipa::path(
    post, path = "/api/posts/{id}/comments", tag = "comments",
    params(("id" = i32, Path, description = "Post ID")),
    request_body = crate::openapi::NewCommentDoc,
    responses(
        (status = 200, description = "Created comment"),
        (status = 400, description = "post_id does not reference an existing post"),
        (status = 422, description = "Malformed body")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Path(post_id): Path<i32>,
    Json(input): Json<CreateCommentInput>,
) -> Result<Json<ApiBody<CommentWithPost>>, JsonApiError> {
    let comment = NewComment { text: input.text, post_id: input.post_id.unwrap_or(post_id) };
    let inserted = state.repo.insert_comment(comment).await?;
    let created = state
        .repo
        .find_comment_by_id(inserted.id)
        .await?
        .ok_or_else(|| ServiceError::not_found("comment"))?;
    info!(id = created.comment.id, post_id = created.comment.post_id, "created comment");
    Ok(Json(ApiBody::new(created)))
}
