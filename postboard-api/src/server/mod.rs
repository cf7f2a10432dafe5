use axum::{
    Router,
    extract::{
        FromRef, Request,
        rejection::{PathRejection, QueryRejection},
    },
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};
use json::Json;
use postboard_common::model::post::PostId;
use postboard_db::{client::DbError, repository::PostRepository};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error};

mod json;
mod query;
mod routes;

pub type ServerRouter = Router<ServerState>;

#[derive(Clone, FromRef)]
pub struct ServerState {
    pub posts: Arc<dyn PostRepository>,
}

pub fn routes() -> ServerRouter {
    routes::routes().fallback(fallback)
}

pub async fn fallback(request: Request) -> ServerError {
    ServerError::UnknownRoute(request.into_parts().0.uri)
}

pub type Result<T, E = ServerError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Unknown route requested: {0}")]
    UnknownRoute(Uri),
    #[error("Path rejected: {0}")]
    PathRejection(#[from] PathRejection),
    #[error("Query rejected: {0}")]
    QueryRejection(#[from] QueryRejection),
    #[error("JSON response could not be serialized: {0}")]
    JsonResponse(#[from] serde_json::Error),
    #[error(transparent)]
    Database(#[from] DbError),
    #[error("Database seeding failed")]
    SeedFailed(#[source] DbError),
    #[error("No posts found.")]
    NoPostsFound,
    #[error("No posts by author {0} found.")]
    NoPostsByAuthor(String),
    #[error("Post with id {0} was not found.")]
    PostByIdNotFound(PostId),
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::UnknownRoute(_)
            | ServerError::PathRejection(_)
            | ServerError::NoPostsFound
            | ServerError::NoPostsByAuthor(_)
            | ServerError::PostByIdNotFound(_) => StatusCode::NOT_FOUND,
            ServerError::QueryRejection(_) => StatusCode::BAD_REQUEST,
            ServerError::JsonResponse(_)
            | ServerError::Database(_)
            | ServerError::SeedFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn response_body(&self) -> ErrorResponse {
        match self {
            ServerError::JsonResponse(_) | ServerError::Database(_) => ErrorResponse {
                message: None,
                error: Some(self.to_string()),
            },
            ServerError::SeedFailed(source) => ErrorResponse {
                message: Some(self.to_string()),
                error: Some(source.to_string()),
            },
            _ => ErrorResponse {
                message: Some(self.to_string()),
                error: None,
            },
        }
    }
}

#[derive(Clone, Eq, PartialEq, Debug, Hash, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Clone, Eq, PartialEq, Debug, Hash, Serialize, Deserialize)]
struct ErrorResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            error!(error = %self, %status, "Replying with error");
        } else {
            debug!(error = %self, %status, "Replying with error");
        }

        (status, Json(self.response_body())).into_response()
    }
}
