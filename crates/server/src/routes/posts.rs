use axum::{extract::{Path, State}, Json};
use serde::Serialize;
use service::blog::{NewPost, Post};
use tracing::{debug, info};

use common::types::ApiBody;

use crate::{errors::JsonApiError, state::ServerState};

/// Placeholder returned by `PUT /api/posts/:id`; storage is left untouched.
pub const UPDATE_PLACEHOLDER: &str = "PUT TO /api/posts/id";
/// Placeholder returned by `DELETE /api/posts/:id`; storage is left untouched.
pub const DELETE_PLACEHOLDER: &str = "DELETE TO /api/posts/id";

/// A single post, or `[]` when the id is unknown.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum PostLookup {
    Found(Post),
    Missing(Vec<Post>),
}

impl From<Option<Post>> for PostLookup {
    fn from(post: Option<Post>) -> Self {
        post.map_or_else(|| PostLookup::Missing(Vec::new()), PostLookup::Found)
    }
}

#[utoipa::path(
    get, path = "/api/posts", tag = "posts",
    responses(
        (status = 200, description = "All posts"),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<ApiBody<Vec<Post>>>, JsonApiError> {
    let posts = state.repo.find().await?;
    debug!(count = posts.len(), "list posts");
    Ok(Json(ApiBody::new(posts)))
}

#[utoipa::path(
    post, path = "/api/posts", tag = "posts",
    request_body = crate::openapi::NewPostDoc,
    responses(
        (status = 200, description = "Inserted; body is the full updated list"),
        (status = 422, description = "Malformed body"),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create(State(state): State<ServerState>, Json(input): Json<NewPost>) -> Result<Json<ApiBody<Vec<Post>>>, JsonApiError> {
    let inserted = state.repo.insert(input).await?;
    info!(id = inserted.id, "created post");
    let posts = state.repo.find().await?;
    Ok(Json(ApiBody::new(posts)))
}

#[utoipa::path(
    get, path = "/api/posts/{id}", tag = "posts",
    params(("id" = i32, Path, description = "Post ID")),
    responses(
        (status = 200, description = "The post, or an empty array when not found")
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<ApiBody<PostLookup>>, JsonApiError> {
    let post = state.repo.find_by_id(id).await?;
    if post.is_none() {
        debug!(id, "post not found");
    }
    Ok(Json(ApiBody::new(post.into())))
}

// TODO: wire to BlogRepository::update once the response shape for PUT is agreed.
#[utoipa::path(
    put, path = "/api/posts/{id}", tag = "posts",
    params(("id" = String, Path, description = "Post ID")),
    responses((status = 200, description = "Placeholder; nothing is updated"))
)]
pub async fn update(Path(id): Path<String>) -> Json<ApiBody<&'static str>> {
    debug!(%id, "post update is a stub");
    Json(ApiBody::new(UPDATE_PLACEHOLDER))
}

#[utoipa::path(
    delete, path = "/api/posts/{id}", tag = "posts",
    params(("id" = String, Path, description = "Post ID")),
    responses((status = 200, description = "Placeholder; nothing is deleted"))
)]
pub async fn delete(Path(id): Path<String>) -> Json<ApiBody<&'static str>> {
    debug!(%id, "post delete is a stub");
    Json(ApiBody::new(DELETE_PLACEHOLDER))
}
