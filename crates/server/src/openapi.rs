use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct NewPostDoc { pub title: String, pub contents: String }

#[derive(ToSchema)]
pub struct NewCommentDoc {
    pub text: String,
    /// Defaults to the post id in the path.
    pub post_id: Option<i32>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::index,
        crate::routes::health,
        crate::routes::posts::list,
        crate::routes::posts::create,
        crate::routes::posts::get,
        crate::routes::posts::update,
        crate::routes::posts::delete,
        crate::routes::comments::list,
        crate::routes::comments::create,
    ),
    components(
        schemas(
            HealthResponse,
            NewPostDoc,
            NewCommentDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "posts"),
        (name = "comments"),
    )
)]
pub struct ApiDoc;
