mod config;
mod error;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    // A missing .env file is fine; real env vars still apply.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");
    let state = state::AppState::new();

    for account in state.accounts.iter() {
        tracing::info!(
            email = %account.email,
            password = %account.password,
            username = %account.user.username,
            "test account"
        );
    }

    let app = routes::app(state);
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    tracing::info!(%addr, base = routes::API_BASE, "mock auth server listening");
    tracing::warn!("this is a mock API; do not use it in production");
    axum::serve(listener, app).await.expect("server failed");
}
