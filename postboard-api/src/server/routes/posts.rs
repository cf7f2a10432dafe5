use crate::server::{Result, ServerError, ServerRouter, json::Json, query::Query};
use axum::extract::State;
use axum_extra::routing::{RouterExt, TypedPath};
use postboard_common::model::post::{Post, PostId, SortOrder};
use postboard_db::repository::PostRepository;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub fn routes() -> ServerRouter {
    ServerRouter::new()
        .typed_get(get_posts)
        .typed_get(get_post)
        .typed_get(get_posts_by_author)
        .typed_get(get_posts_sorted_by_name)
}

#[derive(Clone, Eq, PartialEq, Debug, Hash, Serialize)]
struct PostsResponse {
    posts: Vec<Post>,
}

impl PostsResponse {
    fn non_empty(posts: Vec<Post>, not_found: impl FnOnce() -> ServerError) -> Result<Json<Self>> {
        if posts.is_empty() {
            return Err(not_found());
        }

        Ok(Json(Self { posts }))
    }
}

#[derive(Clone, Eq, PartialEq, Debug, Hash, Serialize)]
struct PostResponse {
    post: Post,
}

#[derive(TypedPath)]
#[typed_path("/posts")]
struct PostsPath;

async fn get_posts(
    _: PostsPath,
    State(repository): State<Arc<dyn PostRepository>>,
) -> Result<Json<PostsResponse>> {
    let posts = repository.fetch_posts().await?;

    PostsResponse::non_empty(posts, || ServerError::NoPostsFound)
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/posts/details/{id}", rejection(ServerError))]
struct GetPostPath {
    id: PostId,
}

async fn get_post(
    GetPostPath { id }: GetPostPath,
    State(repository): State<Arc<dyn PostRepository>>,
) -> Result<Json<PostResponse>> {
    let post = repository
        .fetch_post(id)
        .await?
        .ok_or(ServerError::PostByIdNotFound(id))?;

    Ok(Json(PostResponse { post }))
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/posts/author/{author}", rejection(ServerError))]
struct GetPostsByAuthorPath {
    author: String,
}

async fn get_posts_by_author(
    GetPostsByAuthorPath { author }: GetPostsByAuthorPath,
    State(repository): State<Arc<dyn PostRepository>>,
) -> Result<Json<PostsResponse>> {
    let posts = repository.fetch_posts_by_author(&author).await?;

    PostsResponse::non_empty(posts, || ServerError::NoPostsByAuthor(author))
}

#[derive(TypedPath)]
#[typed_path("/posts/sort/name")]
struct SortPostsByNamePath;

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, Hash, Deserialize)]
struct SortQuery {
    #[serde(default)]
    order: SortOrder,
}

async fn get_posts_sorted_by_name(
    _: SortPostsByNamePath,
    State(repository): State<Arc<dyn PostRepository>>,
    Query(SortQuery { order }): Query<SortQuery>,
) -> Result<Json<PostsResponse>> {
    let posts = repository.fetch_posts_sorted_by_name(order).await?;

    PostsResponse::non_empty(posts, || ServerError::NoPostsFound)
}
