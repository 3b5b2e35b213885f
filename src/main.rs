use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use todo_gateway::{config::Config, create_app, services::GrpcTodoService, AppState};

#[tokio::main]
async fn main() {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("configuration error: {err}");
            std::process::exit(1);
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "todo_gateway={0},tower_http={0}",
            config.log_level
        ))
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!(environment = %config.environment, "starting api gateway");

    let todos = GrpcTodoService::connect(config.todo_service_uri(), config.ctx_timeout).await;

    let addr = config.listen_addr();
    let state = AppState {
        todos,
        config: Arc::new(config),
    };
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind http port");

    info!("running on {addr}");

    axum::serve(listener, app).await.expect("failed serving");
}
