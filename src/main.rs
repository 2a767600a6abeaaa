mod engine;
mod models;
mod revenue;
mod route;
mod routemount;
mod scheduler;
mod state;
mod store;
mod utils;

use tracing_subscriber::EnvFilter;

use crate::routemount::route::create_router;
use crate::state::AppState;

#[tokio::main]
async fn main() {

    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let server_address = std::env::var("SERVER_ADDRESS").unwrap_or("127.0.0.1:7870".to_string());

    let state = AppState::new();
    state.seed_courts().await;

    //daily client tier recomputation
    scheduler::spawn_tier_updater(state.clone());

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&server_address).await.unwrap();
    tracing::info!("server running on {server_address}");
    axum::serve(listener, app).await.unwrap();
}
