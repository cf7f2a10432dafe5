use crate::server::ServerRouter;
use axum::Router;

mod posts;
mod seed;

pub fn routes() -> ServerRouter {
    Router::new().merge(posts::routes()).merge(seed::routes())
}
