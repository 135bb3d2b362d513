use todo_api::{
    config::Config,
    domain::repository::TodoRepository,
    http::routing,
    infrastructure::sqlite_repo::SqliteTodoRepository,
    telemetry,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    telemetry::init(&config.log_filter);

    let repo = SqliteTodoRepository::connect(&config.database_url).await?;
    repo.init().await?;
    let router = routing::app(repo);

    tracing::info!(addr = %config.addr, database_url = %config.database_url, "listening");
    axum::serve(tokio::net::TcpListener::bind(config.addr).await?, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    use tokio::signal::ctrl_c;
    let _ = ctrl_c().await;
    tracing::info!("shutdown");
}
