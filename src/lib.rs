pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod models;
pub mod query;
pub mod services;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use config::Config;
use services::TodoService;

#[derive(Clone)]
pub struct AppState<S> {
    pub todos: S,
    pub config: Arc<Config>,
}

pub fn create_app<S: TodoService>(state: AppState<S>) -> Router {
    let v1 = Router::new()
        .route(
            "/todos",
            post(handlers::todos::create_todo::<S>).get(handlers::todos::list_todos::<S>),
        )
        .route(
            "/todos/{id}",
            get(handlers::todos::get_todo::<S>)
                .put(handlers::todos::update_todo::<S>)
                .delete(handlers::todos::delete_todo::<S>),
        );

    Router::new()
        .nest("/v1", v1)
        .layer(
            tower::ServiceBuilder::new()
                .layer(tower_http::trace::TraceLayer::new_for_http())
                .layer(tower_http::catch_panic::CatchPanicLayer::custom(
                    error::panic_response,
                ))
                .layer(tower_http::compression::CompressionLayer::new()),
        )
        .with_state(state)
}
