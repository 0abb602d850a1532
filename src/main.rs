use std::io::Error;
use std::sync::Arc;

use poem::{Server, listener::TcpListener};
use tokio::main;
use tracing::info;
use tracing_subscriber::EnvFilter;

use users_api::{
    config::Config,
    infrastructure::{db, repositories::postgres::PostgresUserRepository},
    presentation::http::{build_app, endpoints::root::ApiState},
};

#[main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::try_parse().map_err(Error::other)?;

    let pool = db::connect(&config).map_err(Error::other)?;
    db::bootstrap(&pool).await.map_err(Error::other)?;

    let repo = PostgresUserRepository::new(pool);
    let state = Arc::new(ApiState::new(repo));
    let app = build_app(state);

    info!(port = config.port, "starting server");

    Server::new(TcpListener::bind(format!("0.0.0.0:{}", config.port)))
        .run(app)
        .await
}
