use crate::server::{MessageResponse, Result, ServerError, ServerRouter, json::Json};
use axum::extract::State;
use axum_extra::routing::{RouterExt, TypedPath};
use postboard_db::repository::PostRepository;
use std::sync::Arc;

pub fn routes() -> ServerRouter {
    ServerRouter::new().typed_get(seed_db)
}

#[derive(TypedPath)]
#[typed_path("/seed_db")]
struct SeedDbPath;

async fn seed_db(
    _: SeedDbPath,
    State(repository): State<Arc<dyn PostRepository>>,
) -> Result<Json<MessageResponse>> {
    repository.seed().await.map_err(ServerError::SeedFailed)?;

    Ok(Json(MessageResponse {
        message: "Database seeding successful".to_owned(),
    }))
}
