mod config;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = config::Config::from_env().expect("invalid configuration");
    let port = config.port;

    let state = state::AppState::new(config);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "logoboard listening");
    axum::serve(listener, app).await.expect("server failed");
}
